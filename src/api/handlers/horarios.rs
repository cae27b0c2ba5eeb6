//! Schedule endpoints: the per-role views and the full-row edit.

use crate::api::models::horarios::{HorarioReplace, PeriodoQuery};
use crate::api::models::StatusResponse;
use crate::db::handlers::{Horarios, Periodos};
use crate::db::models::horarios::{HorarioAlumnoRow, HorarioDocenteJefeRow, HorarioDocenteRow, HorarioJefeRow, MateriaDocenteRow};
use crate::errors::{Error, Result};
use crate::types::{AlumnoId, DocenteId, HorarioId};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};

#[utoipa::path(
    get,
    path = "/api/horario/{alumno_id}",
    tag = "horarios",
    summary = "A student's schedule for the active period",
    params(("alumno_id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Schedule rows, empty for an invalid id", body = Vec<HorarioAlumnoRow>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn horario_alumno(State(state): State<AppState>, Path(alumno_id): Path<String>) -> Result<Json<Vec<HorarioAlumnoRow>>> {
    let Some(alumno_id) = alumno_id.parse::<AlumnoId>().ok().filter(|id| *id > 0) else {
        return Ok(Json(Vec::new()));
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let periodo = Periodos::new(&mut conn).current_name().await?;
    let rows = Horarios::new(&mut conn).de_alumno(alumno_id, &periodo).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    put,
    path = "/api/horario/{id}",
    tag = "horarios",
    summary = "Replace the editable fields of a schedule entry",
    description = "Overwrites group, teacher and all seven day slots in one statement. Reports failure in the body with a 200 status.",
    params(("id" = i32, Path, description = "Schedule entry id")),
    request_body = HorarioReplace,
    responses(
        (status = 200, description = "Outcome envelope", body = StatusResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_horario(State(state): State<AppState>, Path(id): Path<String>, Json(campos): Json<HorarioReplace>) -> Result<Json<StatusResponse>> {
    let Some(id) = id.parse::<HorarioId>().ok().filter(|id| *id > 0) else {
        return Ok(Json(StatusResponse::failure("ID inválido")));
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let matched = Horarios::new(&mut conn).replace(id, &campos).await?;
    if matched {
        Ok(Json(StatusResponse::ok()))
    } else {
        Ok(Json(StatusResponse::failure("Horario no encontrado")))
    }
}

#[utoipa::path(
    get,
    path = "/api/horarios-docentes-jefe",
    tag = "horarios",
    summary = "Teacher assignments for the department head",
    params(PeriodoQuery),
    responses(
        (status = 200, description = "Assignment rows for the chosen period", body = Vec<HorarioDocenteJefeRow>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn horarios_docentes_jefe(State(state): State<AppState>, Query(query): Query<PeriodoQuery>) -> Result<Json<Vec<HorarioDocenteJefeRow>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let periodo = match query.periodo {
        Some(p) => p,
        None => Periodos::new(&mut conn).current_name().await?,
    };
    let rows = Horarios::new(&mut conn).de_docentes(&periodo).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/api/horarios-jefe",
    tag = "horarios",
    summary = "Every schedule row of a period",
    params(PeriodoQuery),
    responses(
        (status = 200, description = "Full schedule rows for the chosen period", body = Vec<HorarioJefeRow>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn horarios_jefe(State(state): State<AppState>, Query(query): Query<PeriodoQuery>) -> Result<Json<Vec<HorarioJefeRow>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let periodo = match query.periodo {
        Some(p) => p,
        None => Periodos::new(&mut conn).current_name().await?,
    };
    let rows = Horarios::new(&mut conn).de_periodo(&periodo).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/api/horario-docente/{docente_id}",
    tag = "horarios",
    summary = "A teacher's schedule for the active period",
    params(("docente_id" = i32, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Schedule rows, empty for an invalid id", body = Vec<HorarioDocenteRow>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn horario_docente(State(state): State<AppState>, Path(docente_id): Path<String>) -> Result<Json<Vec<HorarioDocenteRow>>> {
    let Some(docente_id) = docente_id.parse::<DocenteId>().ok().filter(|id| *id > 0) else {
        return Ok(Json(Vec::new()));
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let periodo = Periodos::new(&mut conn).current_name().await?;
    let rows = Horarios::new(&mut conn).de_docente(docente_id, &periodo).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/api/materias-docente/{docente_id}",
    tag = "horarios",
    summary = "Subjects a teacher covers in the active period",
    params(("docente_id" = i32, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Distinct offerings, empty for an invalid id", body = Vec<MateriaDocenteRow>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn materias_docente(State(state): State<AppState>, Path(docente_id): Path<String>) -> Result<Json<Vec<MateriaDocenteRow>>> {
    let Some(docente_id) = docente_id.parse::<DocenteId>().ok().filter(|id| *id > 0) else {
        return Ok(Json(Vec::new()));
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let periodo = Periodos::new(&mut conn).current_name().await?;
    let rows = Horarios::new(&mut conn).materias_de_docente(docente_id, &periodo).await?;
    Ok(Json(rows))
}
