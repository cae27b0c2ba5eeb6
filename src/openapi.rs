//! OpenAPI documentation for the dashboard API, served at `/docs`.

use utoipa::OpenApi;

use crate::api;
use crate::db;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "escolard",
        description = "Backend for the school management dashboard: logins for department heads, students and teachers, plus schedules, grades and periods."
    ),
    paths(
        api::handlers::auth::login_jefe,
        api::handlers::auth::login_alumno,
        api::handlers::auth::login_docente,
        api::handlers::alumnos::list_alumnos,
        api::handlers::alumnos::get_alumno,
        api::handlers::alumnos::update_alumno,
        api::handlers::alumnos::alumno_completo,
        api::handlers::alumnos::upload_foto,
        api::handlers::alumnos::alumnos_materia,
        api::handlers::docentes::list_docentes,
        api::handlers::docentes::get_docente,
        api::handlers::docentes::update_docente,
        api::handlers::horarios::horario_alumno,
        api::handlers::horarios::update_horario,
        api::handlers::horarios::horarios_docentes_jefe,
        api::handlers::horarios::horarios_jefe,
        api::handlers::horarios::horario_docente,
        api::handlers::horarios::materias_docente,
        api::handlers::periodos::get_periodo_actual,
        api::handlers::periodos::set_periodo_actual,
        api::handlers::periodos::list_periodos,
        api::handlers::calificaciones::upsert_calificacion,
    ),
    components(schemas(
        api::models::StatusResponse,
        api::models::auth::LoginJefeRequest,
        api::models::auth::LoginAlumnoRequest,
        api::models::auth::LoginDocenteRequest,
        api::models::auth::JefeLoginResponse,
        api::models::auth::AlumnoLoginResponse,
        api::models::auth::DocenteLoginResponse,
        api::models::alumnos::AlumnoUpdateResponse,
        api::models::alumnos::FotoResponse,
        api::models::alumnos::AlumnoCompleto,
        api::models::calificaciones::CalificacionUpsert,
        api::models::horarios::HorarioReplace,
        api::models::periodos::PeriodoActualResponse,
        api::models::periodos::SetPeriodoActual,
        db::models::jefes::Jefe,
        db::models::alumnos::Alumno,
        db::models::alumnos::AlumnoConPeriodo,
        db::models::alumnos::AlumnoMateriaRow,
        db::models::docentes::Docente,
        db::models::horarios::Horario,
        db::models::horarios::HorarioConMateria,
        db::models::horarios::HorarioAlumnoRow,
        db::models::horarios::HorarioDocenteJefeRow,
        db::models::horarios::HorarioJefeRow,
        db::models::horarios::HorarioDocenteRow,
        db::models::horarios::MateriaDocenteRow,
        db::models::calificaciones::Calificacion,
        db::models::calificaciones::CalificacionConMateria,
    ))
)]
pub struct ApiDoc;
