use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use crate::domain::common::DatabaseConfig;

#[derive(Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    /// Connects and brings the schema up to date before handing the
    /// connection out.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, anyhow::Error> {
        let db = Database::connect(config.url()).await?;

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await?;

        info!(
            host = %config.host,
            database = %config.name,
            "database connected, migrations applied"
        );

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
