//! Database repository for alumnos.

use crate::db::{
    errors::Result,
    models::alumnos::{Alumno, AlumnoConPeriodo, AlumnoMateriaRow},
    update::{Bound, FieldSpec, apply_partial_update},
};
use crate::types::{AlumnoId, MateriaId};
use sqlx::PgConnection;
use tracing::instrument;

/// Columns a department head may edit on a student. Both date columns are
/// declared as such so they share the same ISO-truncation normalizer.
pub static ALUMNO_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("no_control"),
    FieldSpec::text("nombre"),
    FieldSpec::text("apellido_paterno"),
    FieldSpec::text("apellido_materno"),
    FieldSpec::text("curp"),
    FieldSpec::date("fecha_nacimiento"),
    FieldSpec::text("correo_personal"),
    FieldSpec::text("telefono"),
    FieldSpec::text("carrera"),
    FieldSpec::text("especialidad"),
    FieldSpec::text("modalidad"),
    FieldSpec::text("plan_estudios"),
    FieldSpec::int("semestre"),
    FieldSpec::text("estatus"),
    FieldSpec::date("fecha_ingreso"),
    FieldSpec::int("creditos_plan"),
    FieldSpec::int("creditos_aprobados"),
    FieldSpec::int("materias_totales"),
    FieldSpec::int("materias_aprobadas"),
    FieldSpec::float("promedio_general"),
    FieldSpec::text("foto_perfil"),
];

pub struct Alumnos<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Alumnos<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn list(&mut self) -> Result<Vec<Alumno>> {
        let alumnos = sqlx::query_as::<_, Alumno>("SELECT * FROM alumnos ORDER BY nombre, apellido_paterno, apellido_materno")
            .fetch_all(&mut *self.db)
            .await?;
        Ok(alumnos)
    }

    #[instrument(skip(self), err)]
    pub async fn get(&mut self, id: AlumnoId) -> Result<Option<Alumno>> {
        let alumno = sqlx::query_as::<_, Alumno>("SELECT * FROM alumnos WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;
        Ok(alumno)
    }

    /// Login lookup, joined with the name of the student's current period.
    #[instrument(skip(self), err)]
    pub async fn get_con_periodo_by_usuario(&mut self, usuario: &str) -> Result<Option<AlumnoConPeriodo>> {
        let alumno = sqlx::query_as::<_, AlumnoConPeriodo>(
            r#"
            SELECT a.*, p.nombre AS periodo_actual
            FROM alumnos a
            LEFT JOIN periodos p ON a.periodo_actual_id = p.id
            WHERE a.usuario = $1
            "#,
        )
        .bind(usuario)
        .fetch_optional(&mut *self.db)
        .await?;
        Ok(alumno)
    }

    /// Apply an already-projected partial update. `None` means no row with
    /// that id.
    #[instrument(skip(self, assignments), fields(fields = assignments.len()), err)]
    pub async fn update(&mut self, id: AlumnoId, assignments: Vec<(&'static str, Bound)>) -> Result<Option<Alumno>> {
        apply_partial_update::<Alumno>(self.db, "alumnos", assignments, id).await
    }

    #[instrument(skip(self), err)]
    pub async fn set_foto(&mut self, id: AlumnoId, foto_url: &str) -> Result<()> {
        sqlx::query("UPDATE alumnos SET foto_perfil = $1 WHERE id = $2")
            .bind(foto_url)
            .bind(id)
            .execute(&mut *self.db)
            .await?;
        Ok(())
    }

    /// Roster of one subject offering (materia + grupo + periodo).
    #[instrument(skip(self), err)]
    pub async fn en_materia(&mut self, materia_id: MateriaId, grupo: &str, periodo: &str) -> Result<Vec<AlumnoMateriaRow>> {
        let alumnos = sqlx::query_as::<_, AlumnoMateriaRow>(
            r#"
            SELECT a.id, a.no_control, a.nombre, a.apellido_paterno, a.apellido_materno
            FROM horario h
            JOIN alumnos a ON h.alumno_id = a.id
            WHERE h.materia_id = $1 AND h.grupo = $2 AND h.periodo = $3
            ORDER BY a.nombre, a.apellido_paterno, a.apellido_materno
            "#,
        )
        .bind(materia_id)
        .bind(grupo)
        .bind(periodo)
        .fetch_all(&mut *self.db)
        .await?;
        Ok(alumnos)
    }
}
