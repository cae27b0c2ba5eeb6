//! HTTP handlers, grouped by resource.

pub mod alumnos;
pub mod auth;
pub mod calificaciones;
pub mod docentes;
pub mod horarios;
pub mod periodos;
