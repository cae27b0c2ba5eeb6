//! Database models for docentes.

use crate::types::DocenteId;
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full teacher row. The stored secret never serializes into responses.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Docente {
    pub id: DocenteId,
    pub clave: Option<String>,
    pub usuario: Option<String>,
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub contrasena: Option<String>,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub calle: Option<String>,
    pub numero: Option<String>,
    pub colonia: Option<String>,
    pub cp: Option<String>,
    pub ciudad: Option<String>,
    pub telefono: Option<String>,
    pub correo_personal: Option<String>,
    pub correo_institucional: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub antiguedad: Option<i32>,
}
