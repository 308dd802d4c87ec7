use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Result;

pub mod models;
mod store;

#[cfg(test)]
pub mod memory;

pub use store::{SharedStore, Store};

pub type Database = PgPool;

pub async fn connect(conn_str: &str, max_connections: u32) -> Result<Database> {
	PgPoolOptions::new()
		.max_connections(max_connections)
		.connect(conn_str)
		.await
}

pub async fn migrate(database: &Database) -> std::result::Result<(), sqlx::migrate::MigrateError> {
	sqlx::migrate!().run(database).await
}
