//! Teacher CRUD endpoints.

use crate::db::handlers::{docentes::DOCENTE_FIELDS, Docentes};
use crate::db::models::docentes::Docente;
use crate::db::update::project;
use crate::errors::{Error, Result};
use crate::types::DocenteId;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{Map, Value};

#[utoipa::path(
    get,
    path = "/api/docentes",
    tag = "docentes",
    summary = "List teachers",
    responses(
        (status = 200, description = "All teachers ordered by name", body = Vec<Docente>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_docentes(State(state): State<AppState>) -> Result<Json<Vec<Docente>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let docentes = Docentes::new(&mut conn).list().await?;
    Ok(Json(docentes))
}

#[utoipa::path(
    get,
    path = "/api/docentes/{id}",
    tag = "docentes",
    summary = "Get one teacher",
    params(("id" = i32, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "The teacher", body = Docente),
        (status = 404, description = "No teacher with that id")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_docente(State(state): State<AppState>, Path(id): Path<DocenteId>) -> Result<Json<Docente>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let docente = Docentes::new(&mut conn).get(id).await?.ok_or(Error::NotFound { resource: "Docente" })?;
    Ok(Json(docente))
}

#[utoipa::path(
    put,
    path = "/api/docentes/{id}",
    tag = "docentes",
    summary = "Partially update a teacher",
    params(("id" = i32, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "The updated row", body = Docente),
        (status = 400, description = "Invalid id or empty/malformed body"),
        (status = 404, description = "No teacher with that id")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_docente(State(state): State<AppState>, Path(id): Path<String>, Json(body): Json<Map<String, Value>>) -> Result<Json<Docente>> {
    let id = id.parse::<DocenteId>().ok().filter(|id| *id > 0).ok_or_else(|| Error::bad_request("ID inválido"))?;
    let assignments = project(DOCENTE_FIELDS, &body)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let docente = Docentes::new(&mut conn).update(id, assignments).await?.ok_or(Error::NotFound { resource: "Docente" })?;
    Ok(Json(docente))
}
