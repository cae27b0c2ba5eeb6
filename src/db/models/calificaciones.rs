//! Database models for calificaciones.

use crate::types::{AlumnoId, MateriaId};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Grade row: at most one per (alumno, materia, periodo), enforced by a
/// composite unique constraint.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Calificacion {
    pub id: i32,
    pub alumno_id: AlumnoId,
    pub materia_id: MateriaId,
    pub periodo: String,
    pub calificacion: Option<f64>,
}

/// Grade row enriched with its subject, used inside the complete student
/// record.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct CalificacionConMateria {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub calificacion: Calificacion,
    pub clave_materia: String,
    pub nombre_materia: String,
    pub creditos: Option<i32>,
}

/// Values for the grade upsert keyed on (alumno, materia, periodo).
#[derive(Debug, Clone)]
pub struct CalificacionUpsertDBRequest {
    pub alumno_id: AlumnoId,
    pub materia_id: MateriaId,
    pub periodo: String,
    pub calificacion: f64,
}
