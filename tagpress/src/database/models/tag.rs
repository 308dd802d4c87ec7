use serde::Serialize;

pub type Id = super::Id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Tag {
	pub id: Id,
	pub name: String,
}

impl Tag {
	/// Every tag, sorted by name.
	pub async fn all(
		database: impl sqlx::Executor<'_, Database = sqlx::Postgres>,
	) -> sqlx::Result<Vec<Self>> {
		sqlx::query_as("SELECT id, name FROM tags ORDER BY name")
			.fetch_all(database)
			.await
	}

	/// Names are not deduplicated.
	pub async fn insert(
		database: impl sqlx::Executor<'_, Database = sqlx::Postgres>,
		name: &str,
	) -> sqlx::Result<Self> {
		sqlx::query_as("INSERT INTO tags (name) VALUES ($1) RETURNING id, name")
			.bind(name)
			.fetch_one(database)
			.await
	}
}
