use std::sync::Arc;

use axum::async_trait;

use super::models::{NewPost, Post, PostId, PostTag, PostWithTags, Tag, TagId};
use super::Database;

/// Everything the routes need from storage.
///
/// Each write runs as a single unit: either every statement it issues takes effect or none does.
#[async_trait]
pub trait Store: Send + Sync {
	async fn posts_with_tags(&self) -> sqlx::Result<Vec<PostWithTags>>;

	async fn post_with_tags(&self, id: PostId) -> sqlx::Result<Option<PostWithTags>>;

	async fn create_post(&self, post: &NewPost, tags: &[TagId]) -> sqlx::Result<PostId>;

	/// Succeeds even if no post has this `id`, as long as `tags` is empty.
	async fn update_post(&self, id: PostId, post: &NewPost, tags: &[TagId]) -> sqlx::Result<()>;

	/// Returns whether the post existed.
	async fn delete_post(&self, id: PostId) -> sqlx::Result<bool>;

	async fn tags(&self) -> sqlx::Result<Vec<Tag>>;

	async fn create_tag(&self, name: &str) -> sqlx::Result<Tag>;
}

pub type SharedStore = Arc<dyn Store>;

#[async_trait]
impl Store for Database {
	async fn posts_with_tags(&self) -> sqlx::Result<Vec<PostWithTags>> {
		PostWithTags::all(self).await
	}

	async fn post_with_tags(&self, id: PostId) -> sqlx::Result<Option<PostWithTags>> {
		PostWithTags::by_id(self, id).await
	}

	async fn create_post(&self, post: &NewPost, tags: &[TagId]) -> sqlx::Result<PostId> {
		let mut transaction = self.begin().await?;
		let post_id = Post::insert(&mut transaction, post).await?;
		PostTag::insert_all(&mut transaction, post_id, tags).await?;
		transaction.commit().await?;
		Ok(post_id)
	}

	async fn update_post(&self, id: PostId, post: &NewPost, tags: &[TagId]) -> sqlx::Result<()> {
		let mut transaction = self.begin().await?;
		let updated = Post::update(&mut transaction, id, post).await?;
		if updated == 0 {
			tracing::debug!(post_id = id, "updating a post that does not exist");
		}
		PostTag::delete_for_post(&mut transaction, id).await?;
		PostTag::insert_all(&mut transaction, id, tags).await?;
		transaction.commit().await
	}

	async fn delete_post(&self, id: PostId) -> sqlx::Result<bool> {
		let mut transaction = self.begin().await?;
		// links first, they reference the post
		PostTag::delete_for_post(&mut transaction, id).await?;
		let existed = Post::delete_row(&mut transaction, id).await?;
		transaction.commit().await?;
		Ok(existed)
	}

	async fn tags(&self) -> sqlx::Result<Vec<Tag>> {
		Tag::all(self).await
	}

	async fn create_tag(&self, name: &str) -> sqlx::Result<Tag> {
		Tag::insert(self, name).await
	}
}
