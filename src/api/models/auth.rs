//! Login request and response bodies.
//!
//! The dashboard client is inconsistent about field names, so the student
//! and teacher bodies accept `usuario`/`username` and
//! `contrasena`/`password` interchangeably.

use crate::db::models::{alumnos::AlumnoConPeriodo, docentes::Docente, jefes::Jefe};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Department head login body. The role is sent explicitly and must be
/// `"jefe"`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginJefeRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginAlumnoRequest {
    pub usuario: Option<String>,
    pub username: Option<String>,
    pub contrasena: Option<String>,
    pub password: Option<String>,
}

impl LoginAlumnoRequest {
    pub fn usuario(&self) -> Option<&str> {
        self.usuario.as_deref().or(self.username.as_deref())
    }

    pub fn contrasena(&self) -> Option<&str> {
        self.contrasena.as_deref().or(self.password.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginDocenteRequest {
    pub usuario: Option<String>,
    pub username: Option<String>,
    pub contrasena: Option<String>,
    pub password: Option<String>,
}

impl LoginDocenteRequest {
    pub fn usuario(&self) -> Option<&str> {
        self.usuario.as_deref().or(self.username.as_deref())
    }

    pub fn contrasena(&self) -> Option<&str> {
        self.contrasena.as_deref().or(self.password.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JefeLoginResponse {
    pub success: bool,
    pub jefe: Jefe,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AlumnoLoginResponse {
    pub success: bool,
    pub alumno: AlumnoConPeriodo,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DocenteLoginResponse {
    pub success: bool,
    pub docente: Docente,
}
