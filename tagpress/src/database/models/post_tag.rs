use super::{PostId, TagId};

/// One row of the `post_tags` link table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostTag {
	pub post_id: PostId,
	pub tag_id: TagId,
}

impl PostTag {
	pub async fn insert_all(
		database: impl sqlx::Executor<'_, Database = sqlx::Postgres>,
		post_id: PostId,
		tags: &[TagId],
	) -> sqlx::Result<u64> {
		if tags.is_empty() {
			return Ok(0);
		}
		sqlx::query(
			"INSERT INTO post_tags (post_id, tag_id) (SELECT $1 as post_id, unnest as tag_id FROM unnest(cast($2 as int[])))",
		)
		.bind(post_id)
		.bind(tags)
		.execute(database)
		.await
		.map(|result| result.rows_affected())
	}

	pub async fn delete_for_post(
		database: impl sqlx::Executor<'_, Database = sqlx::Postgres>,
		post_id: PostId,
	) -> sqlx::Result<u64> {
		sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
			.bind(post_id)
			.execute(database)
			.await
			.map(|result| result.rows_affected())
	}
}
