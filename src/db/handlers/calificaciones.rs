//! Database repository for calificaciones.

use crate::db::{
    errors::Result,
    models::calificaciones::{CalificacionConMateria, CalificacionUpsertDBRequest},
};
use crate::types::AlumnoId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Calificaciones<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Calificaciones<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Insert-or-update in a single statement on the composite key, so two
    /// concurrent writers can never produce duplicate rows for the same
    /// (alumno, materia, periodo).
    #[instrument(skip(self, request), fields(alumno_id = request.alumno_id, materia_id = request.materia_id), err)]
    pub async fn upsert(&mut self, request: &CalificacionUpsertDBRequest) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO calificaciones (alumno_id, materia_id, periodo, calificacion)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (alumno_id, materia_id, periodo)
            DO UPDATE SET calificacion = EXCLUDED.calificacion
            "#,
        )
        .bind(request.alumno_id)
        .bind(request.materia_id)
        .bind(&request.periodo)
        .bind(request.calificacion)
        .execute(&mut *self.db)
        .await?;
        Ok(())
    }

    /// A student's grades for one period, with subject display fields.
    #[instrument(skip(self), err)]
    pub async fn de_alumno(&mut self, alumno_id: AlumnoId, periodo: &str) -> Result<Vec<CalificacionConMateria>> {
        let rows = sqlx::query_as::<_, CalificacionConMateria>(
            r#"
            SELECT c.*, m.clave AS clave_materia, m.nombre AS nombre_materia, m.creditos
            FROM calificaciones c
            JOIN materias m ON c.materia_id = m.id
            WHERE c.alumno_id = $1 AND c.periodo = $2
            ORDER BY m.clave ASC
            "#,
        )
        .bind(alumno_id)
        .bind(periodo)
        .fetch_all(&mut *self.db)
        .await?;
        Ok(rows)
    }
}
