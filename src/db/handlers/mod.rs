//! Database access layer.
//!
//! Each entity has a handler struct borrowing a [`sqlx::PgConnection`]; API
//! handlers acquire a connection from the shared pool and hand it down.

pub mod alumnos;
pub mod calificaciones;
pub mod docentes;
pub mod horarios;
pub mod jefes;
pub mod periodos;

pub use alumnos::Alumnos;
pub use calificaciones::Calificaciones;
pub use docentes::Docentes;
pub use horarios::Horarios;
pub use jefes::Jefes;
pub use periodos::Periodos;
