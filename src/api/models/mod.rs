//! Request and response bodies for the HTTP API.

pub mod alumnos;
pub mod auth;
pub mod calificaciones;
pub mod horarios;
pub mod periodos;

use serde::Serialize;
use utoipa::ToSchema;

/// Generic `{"success": ..., "message": ...}` envelope used by write
/// endpoints that report an outcome rather than a resource.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { success: true, message: None }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()) }
    }
}
