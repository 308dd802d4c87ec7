use serde::Serialize;

use super::{Tag, TagId};
use crate::timestamp::{self, Date};

pub type Id = super::Id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
	pub id: Id,
	pub title: String,
	pub content: String,
	#[serde(with = "timestamp::iso_date")]
	pub date: Date,
}

/// The columns of a post that callers supply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
	pub title: String,
	pub content: String,
	pub date: Date,
}

impl Post {
	pub async fn insert(
		database: impl sqlx::Executor<'_, Database = sqlx::Postgres>,
		post: &NewPost,
	) -> sqlx::Result<Id> {
		sqlx::query_scalar("INSERT INTO posts (title, content, date) VALUES ($1, $2, $3) RETURNING id")
			.bind(&post.title)
			.bind(&post.content)
			.bind(post.date)
			.fetch_one(database)
			.await
	}

	/// Returns the number of rows affected, which is zero for an unknown `id`.
	pub async fn update(
		database: impl sqlx::Executor<'_, Database = sqlx::Postgres>,
		id: Id,
		post: &NewPost,
	) -> sqlx::Result<u64> {
		sqlx::query("UPDATE posts SET title = $2, content = $3, date = $4 WHERE id = $1")
			.bind(id)
			.bind(&post.title)
			.bind(&post.content)
			.bind(post.date)
			.execute(database)
			.await
			.map(|result| result.rows_affected())
	}

	/// Returns whether a row was deleted.
	pub async fn delete_row(
		database: impl sqlx::Executor<'_, Database = sqlx::Postgres>,
		id: Id,
	) -> sqlx::Result<bool> {
		sqlx::query("DELETE FROM posts WHERE id = $1")
			.bind(id)
			.execute(database)
			.await
			.map(|result| result.rows_affected() > 0)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostWithTags {
	#[serde(flatten)]
	pub post: Post,
	pub tags: Vec<Tag>,
}

/// A post joined with at most one of its tags.
#[derive(Debug, sqlx::FromRow)]
struct JoinedRow {
	id: Id,
	title: String,
	content: String,
	date: Date,
	tag_id: Option<TagId>,
	tag_name: Option<String>,
}

macro_rules! select_joined {
	($($tail:literal),*) => {
		concat!(
			"SELECT posts.id, posts.title, posts.content, posts.date, tags.id AS tag_id, tags.name AS tag_name FROM posts ",
			"LEFT JOIN post_tags ON post_tags.post_id = posts.id LEFT JOIN tags ON tags.id = post_tags.tag_id ",
			$($tail),*
		)
	};
}

impl PostWithTags {
	/// Every post with its tags, newest first. Posts sharing a date come out in id order.
	pub async fn all(
		database: impl sqlx::Executor<'_, Database = sqlx::Postgres>,
	) -> sqlx::Result<Vec<Self>> {
		use futures::TryStreamExt as _;

		let mut ret = Vec::new();
		let mut stream =
			sqlx::query_as::<_, JoinedRow>(select_joined!("ORDER BY posts.date DESC, posts.id"))
				.fetch(database);
		while let Some(row) = stream.try_next().await? {
			Self::push_row(&mut ret, row);
		}
		Ok(ret)
	}

	pub async fn by_id(
		database: impl sqlx::Executor<'_, Database = sqlx::Postgres>,
		id: Id,
	) -> sqlx::Result<Option<Self>> {
		let rows = sqlx::query_as::<_, JoinedRow>(select_joined!("WHERE posts.id = $1"))
			.bind(id)
			.fetch_all(database)
			.await?;
		let mut ret = Vec::with_capacity(1);
		for row in rows {
			Self::push_row(&mut ret, row);
		}
		Ok(ret.pop())
	}

	/// Rows belonging to the same post must be adjacent.
	fn push_row(posts: &mut Vec<Self>, row: JoinedRow) {
		let tag = match (row.tag_id, row.tag_name) {
			(Some(id), Some(name)) => Some(Tag { id, name }),
			_ => None,
		};
		if let Some(last) = posts.last_mut().filter(|last| last.post.id == row.id) {
			last.tags.extend(tag);
			return;
		}
		posts.push(Self {
			post: Post {
				id: row.id,
				title: row.title,
				content: row.content,
				date: row.date,
			},
			tags: tag.into_iter().collect(),
		});
	}
}
