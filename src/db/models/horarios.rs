//! Database models for horario rows and their read projections.
//!
//! Most schedule endpoints return purpose-built projections (joined to
//! materias, docentes or alumnos) rather than the raw table, mirroring what
//! each screen of the dashboard displays.

use crate::types::{AlumnoId, DocenteId, HorarioId, MateriaId};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Raw schedule entry.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Horario {
    pub id: HorarioId,
    pub materia_id: MateriaId,
    pub docente_id: Option<DocenteId>,
    pub alumno_id: Option<AlumnoId>,
    pub grupo: Option<String>,
    pub periodo: String,
    pub lunes: Option<String>,
    pub martes: Option<String>,
    pub miercoles: Option<String>,
    pub jueves: Option<String>,
    pub viernes: Option<String>,
    pub sabado: Option<String>,
    pub domingo: Option<String>,
}

/// Schedule entry enriched with its subject, used inside the complete
/// student record.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct HorarioConMateria {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub horario: Horario,
    pub clave_materia: String,
    pub nombre_materia: String,
    pub creditos: Option<i32>,
}

/// One row of a student's weekly schedule (subject + assigned teacher).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct HorarioAlumnoRow {
    pub horario_id: HorarioId,
    pub grupo: Option<String>,
    pub lunes: Option<String>,
    pub martes: Option<String>,
    pub miercoles: Option<String>,
    pub jueves: Option<String>,
    pub viernes: Option<String>,
    pub sabado: Option<String>,
    pub domingo: Option<String>,
    pub materia_id: MateriaId,
    pub clave_materia: String,
    pub nombre_materia: String,
    pub creditos: Option<i32>,
    pub docente_nombre: Option<String>,
}

/// Teacher-assignment row for the department head overview.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct HorarioDocenteJefeRow {
    pub id: HorarioId,
    pub docente_id: Option<DocenteId>,
    pub docente_nombre: Option<String>,
    pub clave_materia: String,
    pub materia_nombre: String,
    pub grupo: Option<String>,
    pub periodo: String,
    pub lunes: Option<String>,
    pub martes: Option<String>,
    pub miercoles: Option<String>,
    pub jueves: Option<String>,
    pub viernes: Option<String>,
    pub sabado: Option<String>,
    pub domingo: Option<String>,
}

/// Full schedule row for the department head, including the enrolled
/// student's identity when the entry belongs to one.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct HorarioJefeRow {
    pub horario_id: HorarioId,
    pub grupo: Option<String>,
    pub lunes: Option<String>,
    pub martes: Option<String>,
    pub miercoles: Option<String>,
    pub jueves: Option<String>,
    pub viernes: Option<String>,
    pub sabado: Option<String>,
    pub domingo: Option<String>,
    pub clave_materia: String,
    pub nombre_materia: String,
    pub creditos: Option<i32>,
    pub docente_nombre: Option<String>,
    pub no_control: Option<String>,
    pub alumno_nombre: Option<String>,
    pub apellido_paterno: Option<String>,
    pub apellido_materno: Option<String>,
    pub periodo: String,
}

/// One row of a teacher's own weekly schedule.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct HorarioDocenteRow {
    pub horario_id: HorarioId,
    pub clave_materia: String,
    pub nombre_materia: String,
    pub grupo: Option<String>,
    pub lunes: Option<String>,
    pub martes: Option<String>,
    pub miercoles: Option<String>,
    pub jueves: Option<String>,
    pub viernes: Option<String>,
    pub sabado: Option<String>,
    pub domingo: Option<String>,
}

/// Distinct subject offering taught by a teacher in a period.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct MateriaDocenteRow {
    pub materia_id: MateriaId,
    pub clave_materia: String,
    pub nombre_materia: String,
    pub grupo: Option<String>,
    pub periodo: String,
}
