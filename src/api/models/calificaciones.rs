//! Grade request bodies.

use crate::types::{AlumnoId, MateriaId};
use serde::Deserialize;
use utoipa::ToSchema;

/// Grade registration body. Every field is required; the handler rejects
/// incomplete bodies before touching the store.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CalificacionUpsert {
    pub alumno_id: Option<AlumnoId>,
    pub materia_id: Option<MateriaId>,
    pub periodo: Option<String>,
    pub calificacion: Option<f64>,
}
