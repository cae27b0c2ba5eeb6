//! Database repository for docentes.

use crate::db::{
    errors::Result,
    models::docentes::Docente,
    update::{Bound, FieldSpec, apply_partial_update},
};
use crate::types::DocenteId;
use sqlx::PgConnection;
use tracing::instrument;

/// Columns a department head may edit on a teacher.
pub static DOCENTE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("clave"),
    FieldSpec::text("nombre"),
    FieldSpec::text("apellido"),
    FieldSpec::text("calle"),
    FieldSpec::text("colonia"),
    FieldSpec::text("cp"),
    FieldSpec::text("correo_personal"),
    FieldSpec::date("fecha_nacimiento"),
    FieldSpec::text("numero"),
    FieldSpec::text("ciudad"),
    FieldSpec::text("telefono"),
    FieldSpec::text("correo_institucional"),
    FieldSpec::int("antiguedad"),
];

pub struct Docentes<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Docentes<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn list(&mut self) -> Result<Vec<Docente>> {
        let docentes = sqlx::query_as::<_, Docente>("SELECT * FROM docentes ORDER BY nombre, apellido")
            .fetch_all(&mut *self.db)
            .await?;
        Ok(docentes)
    }

    #[instrument(skip(self), err)]
    pub async fn get(&mut self, id: DocenteId) -> Result<Option<Docente>> {
        let docente = sqlx::query_as::<_, Docente>("SELECT * FROM docentes WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;
        Ok(docente)
    }

    /// Teacher logins accept either the institutional clave or the usuario.
    #[instrument(skip(self), err)]
    pub async fn get_by_clave_or_usuario(&mut self, identificador: &str) -> Result<Option<Docente>> {
        let docente = sqlx::query_as::<_, Docente>("SELECT * FROM docentes WHERE clave = $1 OR usuario = $1")
            .bind(identificador)
            .fetch_optional(&mut *self.db)
            .await?;
        Ok(docente)
    }

    /// Apply an already-projected partial update. `None` means no row with
    /// that id. Callers project the request body against [`DOCENTE_FIELDS`]
    /// first, so validation failures never reach the store.
    #[instrument(skip(self, assignments), fields(fields = assignments.len()), err)]
    pub async fn update(&mut self, id: DocenteId, assignments: Vec<(&'static str, Bound)>) -> Result<Option<Docente>> {
        apply_partial_update::<Docente>(self.db, "docentes", assignments, id).await
    }
}
