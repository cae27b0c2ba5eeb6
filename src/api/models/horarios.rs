//! Schedule request bodies and query parameters.

use crate::types::DocenteId;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Full-row replacement for an editable schedule entry. Fields left out of
/// the body clear their column.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct HorarioReplace {
    pub grupo: Option<String>,
    pub docente_id: Option<DocenteId>,
    pub lunes: Option<String>,
    pub martes: Option<String>,
    pub miercoles: Option<String>,
    pub jueves: Option<String>,
    pub viernes: Option<String>,
    pub sabado: Option<String>,
    pub domingo: Option<String>,
}

/// Optional `?periodo=` filter. Endpoints fall back to the active period
/// when absent.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PeriodoQuery {
    pub periodo: Option<String>,
}
