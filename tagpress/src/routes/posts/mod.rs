use axum::response::{ErrorResponse, IntoResponse};
use axum::{Extension, Json, Router};
use http::StatusCode;

use crate::database::{models, SharedStore};
use crate::error;
use crate::helpers::extract;
use crate::timestamp::{self, Date};

pub mod id;

/// Body for both creating and replacing a post.
#[derive(Debug, serde::Deserialize)]
pub struct PostRequest {
	title: String,
	content: String,
	#[serde(with = "timestamp::iso_date")]
	date: Date,
	tags: Vec<models::TagRef>,
}

impl PostRequest {
	fn into_parts(self) -> (models::NewPost, Vec<models::TagId>) {
		let tags = models::TagRef::ids(&self.tags);
		let post = models::NewPost {
			title: self.title,
			content: self.content,
			date: self.date,
		};
		(post, tags)
	}
}

pub async fn get_handler(
	Extension(store): Extension<SharedStore>,
) -> Result<impl IntoResponse, ErrorResponse> {
	let posts = store.posts_with_tags().await.map_err(error::Sqlx)?;
	Ok(Json(posts))
}

#[derive(serde::Serialize)]
struct Created {
	id: models::PostId,
}

pub async fn post_handler(
	Extension(store): Extension<SharedStore>,
	extract::Json(request): extract::Json<PostRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
	let (post, tags) = request.into_parts();
	let id = store
		.create_post(&post, &tags)
		.await
		.map_err(error::Sqlx)?;
	tracing::debug!(post_id = id, num_tags = tags.len(), "created post");
	Ok((StatusCode::CREATED, Json(Created { id })))
}

pub fn configure() -> Router {
	let mut router = Router::new();

	router = router.route("/", axum::routing::get(get_handler).post(post_handler));
	router = router.nest("/:post_id", id::configure());

	router
}
