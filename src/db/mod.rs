//! Database layer: repositories, row types and the partial-update builder.

pub mod errors;
pub mod handlers;
pub mod models;
pub mod update;
