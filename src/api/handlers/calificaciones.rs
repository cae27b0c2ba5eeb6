//! Grade registration endpoint.

use crate::api::models::calificaciones::CalificacionUpsert;
use crate::api::models::StatusResponse;
use crate::db::handlers::Calificaciones;
use crate::db::models::calificaciones::CalificacionUpsertDBRequest;
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    post,
    path = "/api/calificaciones-docente",
    tag = "calificaciones",
    summary = "Register or correct a grade",
    description = "Upserts on (alumno, materia, periodo), so a teacher can re-submit a corrected score without creating duplicates.",
    request_body = CalificacionUpsert,
    responses(
        (status = 200, description = "Grade stored", body = StatusResponse),
        (status = 400, description = "Incomplete body")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn upsert_calificacion(State(state): State<AppState>, Json(body): Json<CalificacionUpsert>) -> Result<Json<StatusResponse>> {
    let (Some(alumno_id), Some(materia_id), Some(periodo), Some(calificacion)) = (body.alumno_id, body.materia_id, body.periodo, body.calificacion) else {
        return Err(Error::bad_request("Datos incompletos"));
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    Calificaciones::new(&mut conn)
        .upsert(&CalificacionUpsertDBRequest {
            alumno_id,
            materia_id,
            periodo,
            calificacion,
        })
        .await?;

    Ok(Json(StatusResponse::ok()))
}
