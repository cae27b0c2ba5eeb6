//! Row types returned by the database handlers.

pub mod alumnos;
pub mod calificaciones;
pub mod docentes;
pub mod horarios;
pub mod jefes;
