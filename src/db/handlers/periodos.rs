//! Database repository for periodos and the current-period marker.

use crate::db::errors::Result;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Periodos<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Periodos<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Name of the active period, or the empty string when none is set.
    /// Schedule and grade queries use this as their default filter.
    #[instrument(skip(self), err)]
    pub async fn current_name(&mut self) -> Result<String> {
        let nombre = sqlx::query_scalar::<_, String>("SELECT nombre FROM periodo_actual LIMIT 1")
            .fetch_optional(&mut *self.db)
            .await?;
        Ok(nombre.unwrap_or_default())
    }

    /// Replace the singleton marker in one statement. The schema caps the
    /// table at one row, so readers never observe an empty marker between
    /// calls.
    #[instrument(skip(self), err)]
    pub async fn set_current(&mut self, nombre: &str) -> Result<()> {
        sqlx::query("INSERT INTO periodo_actual (id, nombre) VALUES (TRUE, $1) ON CONFLICT (id) DO UPDATE SET nombre = EXCLUDED.nombre")
            .bind(nombre)
            .execute(&mut *self.db)
            .await?;
        Ok(())
    }

    /// All period names, newest first.
    #[instrument(skip(self), err)]
    pub async fn list_names(&mut self) -> Result<Vec<String>> {
        let nombres = sqlx::query_scalar::<_, String>("SELECT nombre FROM periodos ORDER BY id DESC")
            .fetch_all(&mut *self.db)
            .await?;
        Ok(nombres)
    }
}
