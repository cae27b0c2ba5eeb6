//! HTTP API: handlers and their request/response bodies.

pub mod handlers;
pub mod models;
