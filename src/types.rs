//! Shared identifier types.
//!
//! All primary keys in the legacy schema are plain serial integers; the
//! aliases exist so signatures say which entity they refer to.

pub type JefeId = i32;
pub type AlumnoId = i32;
pub type DocenteId = i32;
pub type MateriaId = i32;
pub type HorarioId = i32;
