//! Database model for jefes de departamento.

use crate::types::JefeId;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Department head credential row; read-only from this service's
/// perspective. The stored secret never serializes into responses.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Jefe {
    pub id: JefeId,
    pub usuario: String,
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub contrasena: Option<String>,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub departamento_id: Option<i32>,
}
