//! Student response bodies.

use crate::db::models::{
    alumnos::Alumno,
    calificaciones::CalificacionConMateria,
    horarios::HorarioConMateria,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Returned by the student partial update.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AlumnoUpdateResponse {
    pub success: bool,
    pub alumno: Alumno,
}

/// Returned by the profile photo upload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FotoResponse {
    pub success: bool,
    #[serde(rename = "fotoUrl")]
    pub foto_url: String,
}

/// Complete student record: the row plus their current-period schedule and
/// grades.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AlumnoCompleto {
    #[serde(flatten)]
    pub alumno: Alumno,
    pub horario: Vec<HorarioConMateria>,
    pub calificaciones: Vec<CalificacionConMateria>,
}
