//! Database repository for jefes de departamento.

use crate::db::{errors::Result, models::jefes::Jefe};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Jefes<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Jefes<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn get_by_usuario(&mut self, usuario: &str) -> Result<Option<Jefe>> {
        let jefe = sqlx::query_as::<_, Jefe>(
            "SELECT id, usuario, contrasena, nombre, apellido, departamento_id FROM jefes_departamento WHERE usuario = $1",
        )
        .bind(usuario)
        .fetch_optional(&mut *self.db)
        .await?;
        Ok(jefe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::seed_jefe;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn lookup_by_usuario(pool: PgPool) {
        seed_jefe(&pool, "jperez", "clave-jefe").await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Jefes::new(&mut conn);

        let jefe = repo.get_by_usuario("jperez").await.unwrap().unwrap();
        assert_eq!(jefe.usuario, "jperez");
        assert_eq!(jefe.contrasena.as_deref(), Some("clave-jefe"));

        assert!(repo.get_by_usuario("nadie").await.unwrap().is_none());
    }
}
