//! Credential verification for the three login variants.

pub mod password;

pub use password::{hash_secret, verify_secret};
