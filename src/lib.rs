//! Backend service for the school management dashboard.
//!
//! Serves the HTTP API behind the dashboard used by jefes de departamento,
//! alumnos and docentes: role-specific logins, student and teacher records
//! with whitelisted partial updates, weekly schedules, grades and the active
//! school period. Data lives in PostgreSQL; uploaded profile photos live on
//! disk and are served back under `/imagenes`.
//!
//! The API is documented via OpenAPI at `/docs`.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use escolard::{Application, Config, config::Args};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let args = Args::parse();
//! let config = Config::load(&args)?;
//! Application::new(config).await?.serve(std::future::pending()).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod openapi;
pub mod telemetry;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::Config;

use axum::{
    Router,
    routing::{get, post},
};
use sqlx::{PgPool, postgres::PgPoolOptions};
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Shared state available to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

/// Get the database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

async fn setup_database(config: &Config) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new().max_connections(10).connect(&config.database_url).await?;
    migrator().run(&pool).await?;
    Ok(pool)
}

/// Assemble the full router: API routes, static photo serving, OpenAPI docs
/// and the tracing/CORS layers.
pub fn build_router(state: AppState) -> Router {
    let upload_dir = state.config.upload_dir.clone();

    Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/login", post(api::handlers::auth::login_jefe))
        .route("/login-alumno", post(api::handlers::auth::login_alumno))
        .route("/login-docente", post(api::handlers::auth::login_docente))
        .route("/api/alumnos", get(api::handlers::alumnos::list_alumnos))
        .route(
            "/api/alumnos/{id}",
            get(api::handlers::alumnos::get_alumno).put(api::handlers::alumnos::update_alumno),
        )
        .route("/api/alumnos/{id}/foto", post(api::handlers::alumnos::upload_foto))
        .route("/api/alumno-completo/{id}", get(api::handlers::alumnos::alumno_completo))
        .route(
            "/api/alumnos-materia/{materia_id}/{grupo}/{periodo}",
            get(api::handlers::alumnos::alumnos_materia),
        )
        .route("/api/docentes", get(api::handlers::docentes::list_docentes))
        .route(
            "/api/docentes/{id}",
            get(api::handlers::docentes::get_docente).put(api::handlers::docentes::update_docente),
        )
        // GET reads the path segment as a student id, PUT as the schedule row id
        .route(
            "/api/horario/{id}",
            get(api::handlers::horarios::horario_alumno).put(api::handlers::horarios::update_horario),
        )
        .route("/api/horarios-docentes-jefe", get(api::handlers::horarios::horarios_docentes_jefe))
        .route("/api/horarios-jefe", get(api::handlers::horarios::horarios_jefe))
        .route("/api/horario-docente/{docente_id}", get(api::handlers::horarios::horario_docente))
        .route("/api/materias-docente/{docente_id}", get(api::handlers::horarios::materias_docente))
        .route(
            "/api/periodo-actual",
            get(api::handlers::periodos::get_periodo_actual).put(api::handlers::periodos::set_periodo_actual),
        )
        .route("/api/periodos", get(api::handlers::periodos::list_periodos))
        .route("/api/calificaciones-docente", post(api::handlers::calificaciones::upsert_calificacion))
        .nest_service("/imagenes", ServeDir::new(upload_dir))
        .merge(Scalar::with_url("/docs", openapi::ApiDoc::openapi()))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

pub struct Application {
    router: Router,
    pool: PgPool,
    config: Config,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pool = setup_database(&config).await?;
        tokio::fs::create_dir_all(&config.upload_dir).await?;

        let state = AppState {
            db: pool.clone(),
            config: config.clone(),
        };
        let router = build_router(state);

        Ok(Self { router, pool, config })
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("escolard listening on http://{bind_addr}");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seed_alumno, seed_docente, seed_horario, seed_jefe, seed_materia, seed_periodo, set_periodo_actual};
    use axum_test::TestServer;
    use axum_test::multipart::{MultipartForm, Part};
    use serde_json::{Value, json};

    fn test_server(pool: PgPool, upload_dir: &tempfile::TempDir) -> TestServer {
        let config = Config {
            upload_dir: upload_dir.path().to_string_lossy().into_owned(),
            ..Config::default()
        };
        let state = AppState { db: pool, config };
        TestServer::new(build_router(state)).unwrap()
    }

    #[sqlx::test]
    #[test_log::test]
    async fn healthz_answers(pool: PgPool) {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(pool, &dir);
        let response = server.get("/healthz").await;
        response.assert_status_ok();
        response.assert_text("OK");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn jefe_login_requires_the_jefe_role(pool: PgPool) {
        seed_jefe(&pool, "jperez", "clave-jefe").await;
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(pool, &dir);

        let response = server
            .post("/login")
            .json(&json!({"username": "jperez", "password": "clave-jefe", "role": "alumno"}))
            .await;
        response.assert_status_forbidden();
        assert_eq!(response.json::<Value>()["message"], "Rol no autorizado");

        let response = server
            .post("/login")
            .json(&json!({"username": "jperez", "password": "clave-jefe", "role": "jefe"}))
            .await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["jefe"]["usuario"], "jperez");
        // The stored secret never leaves the server
        assert!(body["jefe"].get("contrasena").is_none());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn alumno_login_accepts_both_field_spellings(pool: PgPool) {
        let periodo_id = seed_periodo(&pool, "2024-1").await;
        let id = seed_alumno(&pool, "a001", Some("secreta"), "Carla").await;
        sqlx::query("UPDATE alumnos SET periodo_actual_id = $1 WHERE id = $2")
            .bind(periodo_id)
            .bind(id)
            .execute(&pool)
            .await
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(pool, &dir);

        let response = server.post("/login-alumno").json(&json!({"usuario": "a001"})).await;
        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["message"], "Faltan datos");

        let response = server
            .post("/login-alumno")
            .json(&json!({"username": "a001", "password": "secreta"}))
            .await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["alumno"]["nombre"], "Carla");
        assert!(body["alumno"].get("contrasena").is_none());

        let response = server
            .post("/login-alumno")
            .json(&json!({"usuario": "a001", "contrasena": "otra"}))
            .await;
        response.assert_status_unauthorized();
        assert_eq!(response.json::<Value>()["message"], "Usuario o contraseña incorrectos");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn docente_without_stored_secret_cannot_log_in(pool: PgPool) {
        seed_docente(&pool, "D001", "rvega", None, "Rosa", "Vega").await;
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(pool, &dir);

        let response = server
            .post("/login-docente")
            .json(&json!({"username": "rvega", "password": "loquesea"}))
            .await;
        response.assert_status_unauthorized();
    }

    #[sqlx::test]
    #[test_log::test]
    async fn docente_login_matches_clave_too(pool: PgPool) {
        seed_docente(&pool, "D002", "asolis", Some("clave123"), "Ana", "Solís").await;
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(pool, &dir);

        let response = server
            .post("/login-docente")
            .json(&json!({"username": "D002", "password": "clave123"}))
            .await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["docente"]["nombre"], "Ana");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn docente_update_rejects_empty_and_unknown_only_bodies(pool: PgPool) {
        let id = seed_docente(&pool, "D003", "jcruz", None, "Juan", "Cruz").await;
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(pool, &dir);

        let response = server.put(&format!("/api/docentes/{id}")).json(&json!({})).await;
        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["message"], "Sin datos para actualizar");

        let response = server
            .put(&format!("/api/docentes/{id}"))
            .json(&json!({"contrasena": "hack", "usuario": "hack"}))
            .await;
        response.assert_status_bad_request();
    }

    #[sqlx::test]
    #[test_log::test]
    async fn docente_update_returns_the_updated_row(pool: PgPool) {
        let id = seed_docente(&pool, "D004", "mnava", None, "Mario", "Nava").await;
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(pool, &dir);

        let response = server
            .put(&format!("/api/docentes/{id}"))
            .json(&json!({"telefono": "555-0104", "fecha_nacimiento": "1979-06-15T06:00:00.000Z"}))
            .await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["telefono"], "555-0104");
        assert_eq!(body["fecha_nacimiento"], "1979-06-15");
        assert_eq!(body["nombre"], "Mario");

        let response = server.put("/api/docentes/999999").json(&json!({"telefono": "x"})).await;
        response.assert_status_not_found();
    }

    #[sqlx::test]
    #[test_log::test]
    async fn alumno_update_turns_empty_strings_into_null(pool: PgPool) {
        let id = seed_alumno(&pool, "a010", None, "Elena").await;
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(pool, &dir);

        let response = server
            .put(&format!("/api/alumnos/{id}"))
            .json(&json!({"telefono": "555-0200", "curp": ""}))
            .await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["alumno"]["telefono"], "555-0200");
        assert_eq!(body["alumno"]["curp"], Value::Null);

        let response = server.put("/api/alumnos/abc").json(&json!({"telefono": "x"})).await;
        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["message"], "ID inválido");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn invalid_student_id_yields_an_empty_schedule(pool: PgPool) {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(pool, &dir);

        let response = server.get("/api/horario/abc").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!([]));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn horario_edit_reports_failures_in_the_body(pool: PgPool) {
        set_periodo_actual(&pool, "2024-1").await;
        let materia = seed_materia(&pool, "ACF-0901", "Cálculo Diferencial", 5).await;
        let horario = seed_horario(&pool, materia, None, None, "A", "2024-1").await;
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(pool, &dir);

        let response = server.put("/api/horario/0").json(&json!({"grupo": "B"})).await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "ID inválido");

        let response = server
            .put(&format!("/api/horario/{horario}"))
            .json(&json!({"grupo": "B", "martes": "09:00-10:00"}))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["success"], true);

        let response = server.put("/api/horario/999999").json(&json!({"grupo": "B"})).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["success"], false);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn periodo_actual_roundtrip(pool: PgPool) {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(pool, &dir);

        let response = server.get("/api/periodo-actual").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["periodo_actual"], "");

        let response = server.put("/api/periodo-actual").json(&json!({})).await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Nombre de periodo requerido");

        let response = server.put("/api/periodo-actual").json(&json!({"nombre": "2024-1"})).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["success"], true);

        let response = server.get("/api/periodo-actual").await;
        assert_eq!(response.json::<Value>()["periodo_actual"], "2024-1");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn grade_upsert_feeds_the_complete_student_record(pool: PgPool) {
        set_periodo_actual(&pool, "2024-1").await;
        let alumno = seed_alumno(&pool, "a020", None, "Iris").await;
        let materia = seed_materia(&pool, "SCC-1010", "Lenguajes", 5).await;
        seed_horario(&pool, materia, None, Some(alumno), "A", "2024-1").await;
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(pool, &dir);

        let response = server.post("/api/calificaciones-docente").json(&json!({"alumno_id": alumno})).await;
        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["message"], "Datos incompletos");

        for nota in [70.0, 85.0] {
            let response = server
                .post("/api/calificaciones-docente")
                .json(&json!({
                    "alumno_id": alumno,
                    "materia_id": materia,
                    "periodo": "2024-1",
                    "calificacion": nota
                }))
                .await;
            response.assert_status_ok();
            assert_eq!(response.json::<Value>()["success"], true);
        }

        let response = server.get(&format!("/api/alumno-completo/{alumno}")).await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["nombre"], "Iris");
        assert_eq!(body["horario"].as_array().unwrap().len(), 1);
        let calificaciones = body["calificaciones"].as_array().unwrap();
        assert_eq!(calificaciones.len(), 1);
        assert_eq!(calificaciones[0]["calificacion"], 85.0);
        assert_eq!(calificaciones[0]["clave_materia"], "SCC-1010");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn photo_upload_stores_under_a_deterministic_name(pool: PgPool) {
        let alumno = seed_alumno(&pool, "a030", None, "Hugo").await;
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(pool.clone(), &dir);

        let response = server
            .post(&format!("/api/alumnos/{alumno}/foto"))
            .multipart(MultipartForm::new().add_part("foto", Part::bytes(vec![0x89, 0x50, 0x4e, 0x47]).file_name("perfil.png")))
            .await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        let expected_url = format!("/imagenes/alumno_{alumno}.png");
        assert_eq!(body["fotoUrl"], expected_url.as_str());
        assert!(dir.path().join(format!("alumno_{alumno}.png")).exists());

        let stored = sqlx::query_scalar::<_, Option<String>>("SELECT foto_perfil FROM alumnos WHERE id = $1")
            .bind(alumno)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(stored.as_deref(), Some(expected_url.as_str()));

        let response = server
            .post(&format!("/api/alumnos/{alumno}/foto"))
            .multipart(MultipartForm::new().add_part("otro", Part::bytes(vec![1]).file_name("x.bin")))
            .await;
        response.assert_status_bad_request();
    }

    #[sqlx::test]
    #[test_log::test]
    async fn roster_endpoint_scopes_by_offering(pool: PgPool) {
        let materia = seed_materia(&pool, "SCD-1008", "Estructura de Datos", 5).await;
        let inscrito = seed_alumno(&pool, "a040", None, "Nora").await;
        seed_horario(&pool, materia, None, Some(inscrito), "A", "2024-1").await;
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(pool, &dir);

        let response = server.get(&format!("/api/alumnos-materia/{materia}/A/2024-1")).await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["nombre"], "Nora");

        let response = server.get("/api/alumnos-materia/abc/A/2024-1").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!([]));
    }
}
