use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

use crate::schema;
use crate::utils::error::AppResult;

// Database connection manager for the flight store
pub struct Database {
    pub pool: MySqlPool,
}

impl Database {
    // Create a new database connection pool
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;

        Ok(Database { pool })
    }

    // Create the flights and bookings tables if they are missing
    pub async fn ensure_schema(&self) -> AppResult<()> {
        schema::create_all(&self.pool).await
    }

    // Get a reference to the connection pool
    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }
}
