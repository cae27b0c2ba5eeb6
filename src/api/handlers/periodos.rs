//! Period endpoints: the active-period marker and the period catalogue.

use crate::api::models::periodos::{PeriodoActualResponse, SetPeriodoActual};
use crate::api::models::StatusResponse;
use crate::db::handlers::Periodos;
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/api/periodo-actual",
    tag = "periodos",
    summary = "Name of the active period",
    responses(
        (status = 200, description = "Empty string when no period is active", body = PeriodoActualResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_periodo_actual(State(state): State<AppState>) -> Result<Json<PeriodoActualResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let periodo_actual = Periodos::new(&mut conn).current_name().await?;
    Ok(Json(PeriodoActualResponse { periodo_actual }))
}

#[utoipa::path(
    put,
    path = "/api/periodo-actual",
    tag = "periodos",
    summary = "Replace the active period",
    description = "Reports a missing name in the body with a 200 status.",
    request_body = SetPeriodoActual,
    responses(
        (status = 200, description = "Outcome envelope", body = StatusResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn set_periodo_actual(State(state): State<AppState>, Json(body): Json<SetPeriodoActual>) -> Result<Json<StatusResponse>> {
    let Some(nombre) = body.nombre.filter(|n| !n.is_empty()) else {
        return Ok(Json(StatusResponse::failure("Nombre de periodo requerido")));
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    Periodos::new(&mut conn).set_current(&nombre).await?;
    Ok(Json(StatusResponse::ok()))
}

#[utoipa::path(
    get,
    path = "/api/periodos",
    tag = "periodos",
    summary = "All period names, newest first",
    responses(
        (status = 200, description = "Flat array of names", body = Vec<String>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_periodos(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let nombres = Periodos::new(&mut conn).list_names().await?;
    Ok(Json(nombres))
}
