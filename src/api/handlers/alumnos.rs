//! Student endpoints: listing, partial updates, the complete record and the
//! profile photo upload.

use crate::api::models::alumnos::{AlumnoCompleto, AlumnoUpdateResponse, FotoResponse};
use crate::db::handlers::{alumnos::ALUMNO_FIELDS, Alumnos, Calificaciones, Horarios, Periodos};
use crate::db::models::alumnos::{Alumno, AlumnoMateriaRow};
use crate::db::update::project;
use crate::errors::{Error, Result};
use crate::types::{AlumnoId, MateriaId};
use crate::AppState;
use anyhow::Context;
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde_json::{Map, Value};

#[utoipa::path(
    get,
    path = "/api/alumnos",
    tag = "alumnos",
    summary = "List students",
    responses(
        (status = 200, description = "All students ordered by name", body = Vec<Alumno>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_alumnos(State(state): State<AppState>) -> Result<Json<Vec<Alumno>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let alumnos = Alumnos::new(&mut conn).list().await?;
    Ok(Json(alumnos))
}

#[utoipa::path(
    get,
    path = "/api/alumnos/{id}",
    tag = "alumnos",
    summary = "Get one student",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student", body = Alumno),
        (status = 404, description = "No student with that id")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_alumno(State(state): State<AppState>, Path(id): Path<AlumnoId>) -> Result<Json<Alumno>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let alumno = Alumnos::new(&mut conn).get(id).await?.ok_or(Error::NotFound { resource: "Alumno" })?;
    Ok(Json(alumno))
}

#[utoipa::path(
    put,
    path = "/api/alumnos/{id}",
    tag = "alumnos",
    summary = "Partially update a student",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "The updated row", body = AlumnoUpdateResponse),
        (status = 400, description = "Invalid id or empty/malformed body"),
        (status = 404, description = "No student with that id")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_alumno(State(state): State<AppState>, Path(id): Path<String>, Json(body): Json<Map<String, Value>>) -> Result<Json<AlumnoUpdateResponse>> {
    let id = id.parse::<AlumnoId>().ok().filter(|id| *id > 0).ok_or_else(|| Error::bad_request("ID inválido"))?;
    let assignments = project(ALUMNO_FIELDS, &body)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let alumno = Alumnos::new(&mut conn).update(id, assignments).await?.ok_or(Error::NotFound { resource: "Alumno" })?;
    Ok(Json(AlumnoUpdateResponse { success: true, alumno }))
}

#[utoipa::path(
    get,
    path = "/api/alumno-completo/{id}",
    tag = "alumnos",
    summary = "Complete student record",
    description = "The student row plus their schedule and grades for the active period.",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "The assembled record", body = AlumnoCompleto),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "No student with that id")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn alumno_completo(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<AlumnoCompleto>> {
    let id = id.parse::<AlumnoId>().ok().filter(|id| *id > 0).ok_or_else(|| Error::bad_request("ID inválido"))?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let alumno = Alumnos::new(&mut conn).get(id).await?.ok_or(Error::NotFound { resource: "Alumno" })?;
    let periodo = Periodos::new(&mut conn).current_name().await?;
    let horario = Horarios::new(&mut conn).de_alumno_con_materia(id, &periodo).await?;
    let calificaciones = Calificaciones::new(&mut conn).de_alumno(id, &periodo).await?;

    Ok(Json(AlumnoCompleto { alumno, horario, calificaciones }))
}

#[utoipa::path(
    post,
    path = "/api/alumnos/{id}/foto",
    tag = "alumnos",
    summary = "Upload a profile photo",
    description = "Multipart upload with a single `foto` part. The file lands in the image directory under a deterministic name, so re-uploading replaces the previous photo.",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Stored photo URL", body = FotoResponse),
        (status = 400, description = "No file part in the request")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn upload_foto(State(state): State<AppState>, Path(id): Path<AlumnoId>, mut multipart: Multipart) -> Result<Json<FotoResponse>> {
    let mut saved: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| Error::bad_request(format!("Archivo inválido: {e}")))? {
        if field.name() != Some("foto") {
            continue;
        }
        let ext = field
            .file_name()
            .map(std::path::Path::new)
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        let data = field.bytes().await.map_err(|e| Error::bad_request(format!("Archivo inválido: {e}")))?;

        let filename = format!("alumno_{id}{ext}");
        let dir = std::path::Path::new(&state.config.upload_dir);
        tokio::fs::create_dir_all(dir).await.context("creating image directory")?;
        tokio::fs::write(dir.join(&filename), &data).await.context("writing uploaded photo")?;
        saved = Some(format!("/imagenes/{filename}"));
        break;
    }

    let foto_url = saved.ok_or_else(|| Error::bad_request("No se subió archivo"))?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    Alumnos::new(&mut conn).set_foto(id, &foto_url).await?;

    Ok(Json(FotoResponse { success: true, foto_url }))
}

#[utoipa::path(
    get,
    path = "/api/alumnos-materia/{materia_id}/{grupo}/{periodo}",
    tag = "alumnos",
    summary = "Roster of a subject offering",
    params(
        ("materia_id" = i32, Path, description = "Subject id"),
        ("grupo" = String, Path, description = "Group"),
        ("periodo" = String, Path, description = "Period name")
    ),
    responses(
        (status = 200, description = "Enrolled students, empty for an invalid id", body = Vec<AlumnoMateriaRow>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn alumnos_materia(State(state): State<AppState>, Path((materia_id, grupo, periodo)): Path<(String, String, String)>) -> Result<Json<Vec<AlumnoMateriaRow>>> {
    let Some(materia_id) = materia_id.parse::<MateriaId>().ok().filter(|id| *id > 0) else {
        return Ok(Json(Vec::new()));
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let roster = Alumnos::new(&mut conn).en_materia(materia_id, &grupo, &periodo).await?;
    Ok(Json(roster))
}
