//! Period request and response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PeriodoActualResponse {
    pub periodo_actual: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SetPeriodoActual {
    pub nombre: Option<String>,
}
