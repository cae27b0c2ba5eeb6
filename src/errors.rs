use crate::db::errors::DbError;
use crate::db::update::ProjectionError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Credential lookup or secret comparison failed
    #[error("{message}")]
    Unauthenticated { message: String },

    /// Authenticated identity is not allowed to use the endpoint
    #[error("{message}")]
    Forbidden { message: String },

    /// Invalid request data (missing identifier, malformed body field)
    #[error("{message}")]
    BadRequest { message: String },

    /// Requested resource not found
    #[error("{resource} no encontrado")]
    NotFound { resource: &'static str },

    /// Partial-update body rejected before touching the store
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Error::BadRequest { message: message.into() }
    }

    pub fn invalid_credentials() -> Self {
        Error::Unauthenticated {
            message: "Usuario o contraseña incorrectos".to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Error::Forbidden { .. } => StatusCode::FORBIDDEN,
            Error::BadRequest { .. } | Error::Projection(_) => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Database(db_err) => match db_err {
                DbError::NotFound => StatusCode::NOT_FOUND,
                DbError::UniqueViolation { .. } => StatusCode::CONFLICT,
                DbError::ForeignKeyViolation { .. } => StatusCode::BAD_REQUEST,
                DbError::CheckViolation { .. } => StatusCode::BAD_REQUEST,
                DbError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details.
    /// Store failures in particular never echo the underlying driver error to the caller.
    pub fn user_message(&self) -> String {
        match self {
            Error::Unauthenticated { message } | Error::Forbidden { message } | Error::BadRequest { message } => message.clone(),
            Error::NotFound { resource } => format!("{resource} no encontrado"),
            Error::Projection(err) => err.to_string(),
            Error::Database(db_err) => match db_err {
                DbError::NotFound => "Recurso no encontrado".to_string(),
                DbError::UniqueViolation { .. } => "El recurso ya existe".to_string(),
                DbError::ForeignKeyViolation { .. } => "Referencia inválida a otro recurso".to_string(),
                DbError::CheckViolation { .. } => "Datos inválidos".to_string(),
                DbError::Other(_) => "Error en el servidor".to_string(),
            },
            Error::Other(_) => "Error en el servidor".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Database(DbError::Other(_)) | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(_) => {
                tracing::warn!("Database constraint error: {}", self);
            }
            Error::Unauthenticated { .. } | Error::Forbidden { .. } => {
                tracing::info!("Authorization error: {}", self);
            }
            Error::BadRequest { .. } | Error::Projection(_) | Error::NotFound { .. } => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();
        let body = json!({ "success": false, "message": self.user_message() });
        (status, axum::response::Json(body)).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;
