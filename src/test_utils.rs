//! Seed helpers shared by the database and endpoint tests.

use sqlx::PgPool;

use crate::types::{AlumnoId, DocenteId, HorarioId, MateriaId};

pub async fn seed_jefe(pool: &PgPool, usuario: &str, contrasena: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO jefes_departamento (usuario, contrasena, nombre, apellido, departamento_id) VALUES ($1, $2, 'Jefa', 'Ramírez', 1) RETURNING id",
    )
    .bind(usuario)
    .bind(contrasena)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_alumno(pool: &PgPool, usuario: &str, contrasena: Option<&str>, nombre: &str) -> AlumnoId {
    sqlx::query_scalar::<_, AlumnoId>(
        r#"
        INSERT INTO alumnos (usuario, contrasena, no_control, nombre, apellido_paterno, apellido_materno)
        VALUES ($1, $2, $1, $3, 'Pérez', 'García')
        RETURNING id
        "#,
    )
    .bind(usuario)
    .bind(contrasena)
    .bind(nombre)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_docente(pool: &PgPool, clave: &str, usuario: &str, contrasena: Option<&str>, nombre: &str, apellido: &str) -> DocenteId {
    sqlx::query_scalar::<_, DocenteId>(
        "INSERT INTO docentes (clave, usuario, contrasena, nombre, apellido) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(clave)
    .bind(usuario)
    .bind(contrasena)
    .bind(nombre)
    .bind(apellido)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_materia(pool: &PgPool, clave: &str, nombre: &str, creditos: i32) -> MateriaId {
    sqlx::query_scalar::<_, MateriaId>("INSERT INTO materias (clave, nombre, creditos) VALUES ($1, $2, $3) RETURNING id")
        .bind(clave)
        .bind(nombre)
        .bind(creditos)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_periodo(pool: &PgPool, nombre: &str) -> i32 {
    sqlx::query_scalar::<_, i32>("INSERT INTO periodos (nombre) VALUES ($1) RETURNING id")
        .bind(nombre)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn set_periodo_actual(pool: &PgPool, nombre: &str) {
    sqlx::query("INSERT INTO periodo_actual (id, nombre) VALUES (TRUE, $1) ON CONFLICT (id) DO UPDATE SET nombre = EXCLUDED.nombre")
        .bind(nombre)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn seed_horario(pool: &PgPool, materia_id: MateriaId, docente_id: Option<DocenteId>, alumno_id: Option<AlumnoId>, grupo: &str, periodo: &str) -> HorarioId {
    sqlx::query_scalar::<_, HorarioId>(
        r#"
        INSERT INTO horario (materia_id, docente_id, alumno_id, grupo, periodo, lunes)
        VALUES ($1, $2, $3, $4, $5, '07:00-08:00')
        RETURNING id
        "#,
    )
    .bind(materia_id)
    .bind(docente_id)
    .bind(alumno_id)
    .bind(grupo)
    .bind(periodo)
    .fetch_one(pool)
    .await
    .unwrap()
}
