//! An in-memory [`Store`] for exercising the routes without a database.
//!
//! It mirrors the Postgres schema's foreign keys: linking to an unknown post or tag fails the whole write.

use std::sync::{Mutex, MutexGuard};

use axum::async_trait;

use super::models::{NewPost, Post, PostId, PostTag, PostWithTags, Tag, TagId};
use super::Store;

#[derive(Default)]
struct State {
	posts: Vec<Post>,
	tags: Vec<Tag>,
	links: Vec<PostTag>,
	last_post_id: PostId,
	last_tag_id: TagId,
}

impl State {
	fn check_links(&self, post_id: PostId, tags: &[TagId]) -> sqlx::Result<()> {
		if tags.is_empty() {
			return Ok(());
		}
		if !self.posts.iter().any(|post| post.id == post_id) {
			return Err(foreign_key_violation("post_id", post_id));
		}
		match tags
			.iter()
			.find(|&&tag_id| !self.tags.iter().any(|tag| tag.id == tag_id))
		{
			Some(&tag_id) => Err(foreign_key_violation("tag_id", tag_id)),
			None => Ok(()),
		}
	}

	fn link(&mut self, post_id: PostId, tags: &[TagId]) {
		self
			.links
			.extend(tags.iter().map(|&tag_id| PostTag { post_id, tag_id }));
	}

	fn unlink(&mut self, post_id: PostId) {
		self.links.retain(|link| link.post_id != post_id);
	}

	fn with_tags(&self, post: &Post) -> PostWithTags {
		let tags = self
			.links
			.iter()
			.filter(|link| link.post_id == post.id)
			.filter_map(|link| self.tags.iter().find(|tag| tag.id == link.tag_id))
			.cloned()
			.collect();
		PostWithTags {
			post: post.clone(),
			tags,
		}
	}
}

fn foreign_key_violation(column: &str, id: i32) -> sqlx::Error {
	sqlx::Error::Protocol(format!(
		"insert into post_tags violates foreign key on {column} = {id}"
	))
}

#[derive(Default)]
pub struct MemoryStore {
	state: Mutex<State>,
}

impl MemoryStore {
	fn state(&self) -> MutexGuard<'_, State> {
		self.state.lock().unwrap()
	}

	pub fn links(&self) -> Vec<PostTag> {
		self.state().links.clone()
	}
}

#[async_trait]
impl Store for MemoryStore {
	async fn posts_with_tags(&self) -> sqlx::Result<Vec<PostWithTags>> {
		let state = self.state();
		let mut posts: Vec<&Post> = state.posts.iter().collect();
		posts.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
		Ok(posts.into_iter().map(|post| state.with_tags(post)).collect())
	}

	async fn post_with_tags(&self, id: PostId) -> sqlx::Result<Option<PostWithTags>> {
		let state = self.state();
		Ok(state
			.posts
			.iter()
			.find(|post| post.id == id)
			.map(|post| state.with_tags(post)))
	}

	async fn create_post(&self, post: &NewPost, tags: &[TagId]) -> sqlx::Result<PostId> {
		let mut state = self.state();
		let id = state.last_post_id + 1;
		state.posts.push(Post {
			id,
			title: post.title.clone(),
			content: post.content.clone(),
			date: post.date,
		});
		if let Err(error) = state.check_links(id, tags) {
			state.posts.pop();
			return Err(error);
		}
		state.last_post_id = id;
		state.link(id, tags);
		Ok(id)
	}

	async fn update_post(&self, id: PostId, post: &NewPost, tags: &[TagId]) -> sqlx::Result<()> {
		let mut state = self.state();
		state.check_links(id, tags)?;
		if let Some(existing) = state.posts.iter_mut().find(|existing| existing.id == id) {
			existing.title = post.title.clone();
			existing.content = post.content.clone();
			existing.date = post.date;
		}
		state.unlink(id);
		state.link(id, tags);
		Ok(())
	}

	async fn delete_post(&self, id: PostId) -> sqlx::Result<bool> {
		let mut state = self.state();
		state.unlink(id);
		let before = state.posts.len();
		state.posts.retain(|post| post.id != id);
		Ok(state.posts.len() < before)
	}

	async fn tags(&self) -> sqlx::Result<Vec<Tag>> {
		let mut tags = self.state().tags.clone();
		tags.sort_by(|a, b| a.name.cmp(&b.name));
		Ok(tags)
	}

	async fn create_tag(&self, name: &str) -> sqlx::Result<Tag> {
		let mut state = self.state();
		state.last_tag_id += 1;
		let tag = Tag {
			id: state.last_tag_id,
			name: name.to_owned(),
		};
		state.tags.push(tag.clone());
		Ok(tag)
	}
}
