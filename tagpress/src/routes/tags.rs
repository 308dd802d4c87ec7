use axum::response::{ErrorResponse, IntoResponse};
use axum::{Extension, Json, Router};
use http::StatusCode;

use crate::database::SharedStore;
use crate::error;
use crate::helpers::extract;

pub async fn get_handler(
	Extension(store): Extension<SharedStore>,
) -> Result<impl IntoResponse, ErrorResponse> {
	let tags = store.tags().await.map_err(error::Sqlx)?;
	Ok(Json(tags))
}

#[derive(Debug, serde::Deserialize)]
pub struct CreateRequest {
	name: String,
}

pub async fn post_handler(
	Extension(store): Extension<SharedStore>,
	extract::Json(request): extract::Json<CreateRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
	let tag = store
		.create_tag(&request.name)
		.await
		.map_err(error::Sqlx)?;
	Ok((StatusCode::CREATED, Json(tag)))
}

pub fn configure() -> Router {
	Router::new().route("/", axum::routing::get(get_handler).post(post_handler))
}
