use axum::response::{ErrorResponse, IntoResponse};
use axum::{Extension, Json, Router};

use super::PostRequest;
use crate::database::{models, SharedStore};
use crate::error;
use crate::helpers::extract;

#[derive(serde::Serialize)]
struct Message {
	message: &'static str,
}

pub async fn get_handler(
	extract::Path((post_id,)): extract::Path<(models::PostId,)>,
	Extension(store): Extension<SharedStore>,
) -> Result<impl IntoResponse, ErrorResponse> {
	let post = store
		.post_with_tags(post_id)
		.await
		.map_err(error::Sqlx)?
		.ok_or(error::EntityNotFound("Post"))?;
	Ok(Json(post))
}

pub async fn put_handler(
	extract::Path((post_id,)): extract::Path<(models::PostId,)>,
	Extension(store): Extension<SharedStore>,
	extract::Json(request): extract::Json<PostRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
	let (post, tags) = request.into_parts();
	store
		.update_post(post_id, &post, &tags)
		.await
		.map_err(error::Sqlx)?;
	Ok(Json(Message {
		message: "Post başarıyla güncellendi",
	}))
}

pub async fn delete_handler(
	extract::Path((post_id,)): extract::Path<(models::PostId,)>,
	Extension(store): Extension<SharedStore>,
) -> Result<impl IntoResponse, ErrorResponse> {
	let existed = store.delete_post(post_id).await.map_err(error::Sqlx)?;
	if !existed {
		return Err(error::EntityNotFound("Post").into());
	}
	Ok(Json(Message {
		message: "Post başarıyla silindi",
	}))
}

pub fn configure() -> Router {
	Router::new().route(
		"/",
		axum::routing::get(get_handler)
			.put(put_handler)
			.delete(delete_handler),
	)
}
