//! Login endpoints, one per role.
//!
//! All three return the matched row (secret stripped) wrapped in a
//! `{"success": true, ...}` envelope, and answer any credential failure with
//! the same 401 message so callers cannot probe which usernames exist.

use crate::api::models::auth::{AlumnoLoginResponse, DocenteLoginResponse, JefeLoginResponse, LoginAlumnoRequest, LoginDocenteRequest, LoginJefeRequest};
use crate::auth::verify_secret;
use crate::db::handlers::{Alumnos, Docentes, Jefes};
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Department head login",
    request_body = LoginJefeRequest,
    responses(
        (status = 200, description = "Authenticated", body = JefeLoginResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Role is not jefe")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn login_jefe(State(state): State<AppState>, Json(body): Json<LoginJefeRequest>) -> Result<Json<JefeLoginResponse>> {
    if body.role.as_deref() != Some("jefe") {
        return Err(Error::Forbidden {
            message: "Rol no autorizado".to_string(),
        });
    }

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let jefe = Jefes::new(&mut conn)
        .get_by_usuario(body.username.as_deref().unwrap_or_default())
        .await?
        .ok_or_else(Error::invalid_credentials)?;

    if !verify_secret(body.password.as_deref().unwrap_or_default(), jefe.contrasena.as_deref()) {
        return Err(Error::invalid_credentials());
    }

    Ok(Json(JefeLoginResponse { success: true, jefe }))
}

#[utoipa::path(
    post,
    path = "/login-alumno",
    tag = "auth",
    summary = "Student login",
    request_body = LoginAlumnoRequest,
    responses(
        (status = 200, description = "Authenticated", body = AlumnoLoginResponse),
        (status = 400, description = "Missing credentials"),
        (status = 401, description = "Invalid credentials")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn login_alumno(State(state): State<AppState>, Json(body): Json<LoginAlumnoRequest>) -> Result<Json<AlumnoLoginResponse>> {
    let (Some(usuario), Some(contrasena)) = (body.usuario(), body.contrasena()) else {
        return Err(Error::bad_request("Faltan datos"));
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let alumno = Alumnos::new(&mut conn)
        .get_con_periodo_by_usuario(usuario)
        .await?
        .ok_or_else(Error::invalid_credentials)?;

    if !verify_secret(contrasena, alumno.alumno.contrasena.as_deref()) {
        return Err(Error::invalid_credentials());
    }

    Ok(Json(AlumnoLoginResponse { success: true, alumno }))
}

#[utoipa::path(
    post,
    path = "/login-docente",
    tag = "auth",
    summary = "Teacher login",
    request_body = LoginDocenteRequest,
    responses(
        (status = 200, description = "Authenticated", body = DocenteLoginResponse),
        (status = 400, description = "Missing credentials"),
        (status = 401, description = "Invalid credentials")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn login_docente(State(state): State<AppState>, Json(body): Json<LoginDocenteRequest>) -> Result<Json<DocenteLoginResponse>> {
    let (Some(usuario), Some(contrasena)) = (body.usuario(), body.contrasena()) else {
        return Err(Error::bad_request("Faltan datos"));
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let docente = Docentes::new(&mut conn)
        .get_by_clave_or_usuario(usuario)
        .await?
        .ok_or_else(Error::invalid_credentials)?;

    // Rows provisioned without a secret cannot log in.
    if !verify_secret(contrasena, docente.contrasena.as_deref()) {
        return Err(Error::invalid_credentials());
    }

    Ok(Json(DocenteLoginResponse { success: true, docente }))
}
