//! Database models for alumnos.

use crate::types::AlumnoId;
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full student row. The stored secret never serializes into responses.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Alumno {
    pub id: AlumnoId,
    pub usuario: Option<String>,
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub contrasena: Option<String>,
    pub no_control: Option<String>,
    pub nombre: Option<String>,
    pub apellido_paterno: Option<String>,
    pub apellido_materno: Option<String>,
    pub curp: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub correo_personal: Option<String>,
    pub telefono: Option<String>,
    pub carrera: Option<String>,
    pub especialidad: Option<String>,
    pub modalidad: Option<String>,
    pub plan_estudios: Option<String>,
    pub semestre: Option<i32>,
    pub estatus: Option<String>,
    pub fecha_ingreso: Option<NaiveDate>,
    pub creditos_plan: Option<i32>,
    pub creditos_aprobados: Option<i32>,
    pub materias_totales: Option<i32>,
    pub materias_aprobadas: Option<i32>,
    pub promedio_general: Option<f64>,
    pub foto_perfil: Option<String>,
    pub periodo_actual_id: Option<i32>,
}

/// Student row joined with the name of their current period, as returned by
/// the student login.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct AlumnoConPeriodo {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub alumno: Alumno,
    pub periodo_actual: Option<String>,
}

/// Roster entry for the students of one subject offering.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct AlumnoMateriaRow {
    pub id: AlumnoId,
    pub no_control: Option<String>,
    pub nombre: Option<String>,
    pub apellido_paterno: Option<String>,
    pub apellido_materno: Option<String>,
}
