//! Database repository for horario rows and their per-screen projections.

use crate::api::models::horarios::HorarioReplace;
use crate::db::{
    errors::Result,
    models::horarios::{HorarioAlumnoRow, HorarioConMateria, HorarioDocenteJefeRow, HorarioDocenteRow, HorarioJefeRow, MateriaDocenteRow},
};
use crate::types::{AlumnoId, DocenteId, HorarioId};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Horarios<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Horarios<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// A student's weekly schedule for one period, with subject and teacher
    /// display fields.
    #[instrument(skip(self), err)]
    pub async fn de_alumno(&mut self, alumno_id: AlumnoId, periodo: &str) -> Result<Vec<HorarioAlumnoRow>> {
        let rows = sqlx::query_as::<_, HorarioAlumnoRow>(
            r#"
            SELECT
                h.id AS horario_id,
                h.grupo,
                h.lunes, h.martes, h.miercoles, h.jueves, h.viernes, h.sabado, h.domingo,
                m.id AS materia_id,
                m.clave AS clave_materia,
                m.nombre AS nombre_materia,
                m.creditos,
                d.nombre || ' ' || d.apellido AS docente_nombre
            FROM horario h
            JOIN materias m ON h.materia_id = m.id
            LEFT JOIN docentes d ON h.docente_id = d.id
            WHERE h.alumno_id = $1 AND h.periodo = $2
            ORDER BY m.clave ASC
            "#,
        )
        .bind(alumno_id)
        .bind(periodo)
        .fetch_all(&mut *self.db)
        .await?;
        Ok(rows)
    }

    /// Same schedule rows as [`de_alumno`](Self::de_alumno) but carrying the
    /// raw horario columns, for the complete student record.
    #[instrument(skip(self), err)]
    pub async fn de_alumno_con_materia(&mut self, alumno_id: AlumnoId, periodo: &str) -> Result<Vec<HorarioConMateria>> {
        let rows = sqlx::query_as::<_, HorarioConMateria>(
            r#"
            SELECT h.*, m.clave AS clave_materia, m.nombre AS nombre_materia, m.creditos
            FROM horario h
            JOIN materias m ON h.materia_id = m.id
            WHERE h.alumno_id = $1 AND h.periodo = $2
            ORDER BY m.clave ASC
            "#,
        )
        .bind(alumno_id)
        .bind(periodo)
        .fetch_all(&mut *self.db)
        .await?;
        Ok(rows)
    }

    /// Teacher assignments in one period, for the department head overview.
    /// Entries without an assigned teacher are excluded.
    #[instrument(skip(self), err)]
    pub async fn de_docentes(&mut self, periodo: &str) -> Result<Vec<HorarioDocenteJefeRow>> {
        let rows = sqlx::query_as::<_, HorarioDocenteJefeRow>(
            r#"
            SELECT
                h.id,
                d.id AS docente_id,
                d.nombre || ' ' || d.apellido AS docente_nombre,
                m.clave AS clave_materia,
                m.nombre AS materia_nombre,
                h.grupo,
                h.periodo,
                h.lunes, h.martes, h.miercoles, h.jueves, h.viernes, h.sabado, h.domingo
            FROM horario h
            LEFT JOIN docentes d ON h.docente_id = d.id
            JOIN materias m ON h.materia_id = m.id
            WHERE h.periodo = $1 AND h.docente_id IS NOT NULL
            ORDER BY d.nombre, h.grupo, m.clave
            "#,
        )
        .bind(periodo)
        .fetch_all(&mut *self.db)
        .await?;
        Ok(rows)
    }

    /// Every schedule row of one period with full display fields.
    #[instrument(skip(self), err)]
    pub async fn de_periodo(&mut self, periodo: &str) -> Result<Vec<HorarioJefeRow>> {
        let rows = sqlx::query_as::<_, HorarioJefeRow>(
            r#"
            SELECT
                h.id AS horario_id,
                h.grupo,
                h.lunes, h.martes, h.miercoles, h.jueves, h.viernes, h.sabado, h.domingo,
                m.clave AS clave_materia,
                m.nombre AS nombre_materia,
                m.creditos,
                d.nombre || ' ' || d.apellido AS docente_nombre,
                a.no_control,
                a.nombre AS alumno_nombre,
                a.apellido_paterno,
                a.apellido_materno,
                h.periodo
            FROM horario h
            JOIN materias m ON h.materia_id = m.id
            LEFT JOIN docentes d ON h.docente_id = d.id
            LEFT JOIN alumnos a ON h.alumno_id = a.id
            WHERE h.periodo = $1
            ORDER BY h.grupo, m.clave, a.no_control
            "#,
        )
        .bind(periodo)
        .fetch_all(&mut *self.db)
        .await?;
        Ok(rows)
    }

    /// A teacher's own weekly schedule for one period.
    #[instrument(skip(self), err)]
    pub async fn de_docente(&mut self, docente_id: DocenteId, periodo: &str) -> Result<Vec<HorarioDocenteRow>> {
        let rows = sqlx::query_as::<_, HorarioDocenteRow>(
            r#"
            SELECT
                h.id AS horario_id,
                m.clave AS clave_materia,
                m.nombre AS nombre_materia,
                h.grupo,
                h.lunes, h.martes, h.miercoles, h.jueves, h.viernes, h.sabado, h.domingo
            FROM horario h
            JOIN materias m ON h.materia_id = m.id
            WHERE h.docente_id = $1 AND h.periodo = $2
            ORDER BY h.grupo, m.clave
            "#,
        )
        .bind(docente_id)
        .bind(periodo)
        .fetch_all(&mut *self.db)
        .await?;
        Ok(rows)
    }

    /// Distinct subject offerings a teacher covers in one period.
    #[instrument(skip(self), err)]
    pub async fn materias_de_docente(&mut self, docente_id: DocenteId, periodo: &str) -> Result<Vec<MateriaDocenteRow>> {
        let rows = sqlx::query_as::<_, MateriaDocenteRow>(
            r#"
            SELECT DISTINCT
                m.id AS materia_id,
                m.clave AS clave_materia,
                m.nombre AS nombre_materia,
                h.grupo,
                h.periodo
            FROM horario h
            JOIN materias m ON h.materia_id = m.id
            WHERE h.docente_id = $1 AND h.periodo = $2
            ORDER BY h.grupo, m.clave
            "#,
        )
        .bind(docente_id)
        .bind(periodo)
        .fetch_all(&mut *self.db)
        .await?;
        Ok(rows)
    }

    /// Full-row replace of the editable schedule fields (group, teacher and
    /// the seven day slots). Unlike the student/teacher updates this has no
    /// partial-field semantics. Returns whether a row matched.
    #[instrument(skip(self, campos), err)]
    pub async fn replace(&mut self, id: HorarioId, campos: &HorarioReplace) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE horario
            SET grupo = $1, docente_id = $2,
                lunes = $3, martes = $4, miercoles = $5, jueves = $6,
                viernes = $7, sabado = $8, domingo = $9
            WHERE id = $10
            "#,
        )
        .bind(&campos.grupo)
        .bind(campos.docente_id)
        .bind(&campos.lunes)
        .bind(&campos.martes)
        .bind(&campos.miercoles)
        .bind(&campos.jueves)
        .bind(&campos.viernes)
        .bind(&campos.sabado)
        .bind(&campos.domingo)
        .bind(id)
        .execute(&mut *self.db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seed_alumno, seed_docente, seed_horario, seed_materia};
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn student_schedule_filters_by_period(pool: PgPool) {
        let materia = seed_materia(&pool, "ACF-0901", "Cálculo Diferencial", 5).await;
        let docente = seed_docente(&pool, "D100", "lmtz", None, "Laura", "Martínez").await;
        let alumno = seed_alumno(&pool, "a100", None, "Hugo").await;
        seed_horario(&pool, materia, Some(docente), Some(alumno), "A", "2024-1").await;
        seed_horario(&pool, materia, Some(docente), Some(alumno), "A", "2023-2").await;

        let mut conn = pool.acquire().await.unwrap();
        let rows = Horarios::new(&mut conn).de_alumno(alumno, "2024-1").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].clave_materia, "ACF-0901");
        assert_eq!(rows[0].docente_nombre.as_deref(), Some("Laura Martínez"));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn head_overview_skips_unassigned_entries(pool: PgPool) {
        let materia = seed_materia(&pool, "AEC-1015", "Base de Datos", 4).await;
        let docente = seed_docente(&pool, "D101", "pgom", None, "Pedro", "Gómez").await;
        seed_horario(&pool, materia, Some(docente), None, "A", "2024-1").await;
        seed_horario(&pool, materia, None, None, "B", "2024-1").await;

        let mut conn = pool.acquire().await.unwrap();
        let rows = Horarios::new(&mut conn).de_docentes("2024-1").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].docente_nombre.as_deref(), Some("Pedro Gómez"));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn replace_overwrites_all_nine_fields(pool: PgPool) {
        let materia = seed_materia(&pool, "GED-0902", "Taller de Ética", 4).await;
        let docente = seed_docente(&pool, "D102", "asol", None, "Ana", "Solís").await;
        let id = seed_horario(&pool, materia, Some(docente), None, "A", "2024-1").await;

        let mut conn = pool.acquire().await.unwrap();
        let campos = HorarioReplace {
            grupo: Some("C".to_string()),
            docente_id: None,
            lunes: None,
            martes: Some("09:00-10:00".to_string()),
            miercoles: None,
            jueves: None,
            viernes: None,
            sabado: None,
            domingo: None,
        };
        assert!(Horarios::new(&mut conn).replace(id, &campos).await.unwrap());

        let (grupo, docente_id, lunes, martes) =
            sqlx::query_as::<_, (Option<String>, Option<i32>, Option<String>, Option<String>)>(
                "SELECT grupo, docente_id, lunes, martes FROM horario WHERE id = $1",
            )
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(grupo.as_deref(), Some("C"));
        assert_eq!(docente_id, None);
        assert_eq!(lunes, None);
        assert_eq!(martes.as_deref(), Some("09:00-10:00"));

        assert!(!Horarios::new(&mut conn).replace(909090, &campos).await.unwrap());
    }
}
