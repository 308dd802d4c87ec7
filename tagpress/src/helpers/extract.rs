//! Drop-in replacements for [`axum::Json`] and [`axum::extract::Path`] whose rejections are [`error::Request`], so a malformed body or path id is logged and answered like every other failure instead of with axum's plain-text rejection.

use axum::async_trait;
use axum::body::HttpBody;
use axum::extract::{FromRequest, RequestParts};
use axum::BoxError;
use serde::de::DeserializeOwned;

use crate::error;

#[derive(Debug)]
pub struct Json<T>(pub T);

#[async_trait]
impl<T, B> FromRequest<B> for Json<T>
where
	T: DeserializeOwned,
	B: HttpBody + Send,
	B::Data: Send,
	B::Error: Into<BoxError>,
{
	type Rejection = error::Request;

	async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
		axum::Json::<T>::from_request(req)
			.await
			.map(|axum::Json(value)| Self(value))
			.map_err(|rejection| error::Request(rejection.to_string()))
	}
}

#[derive(Debug)]
pub struct Path<T>(pub T);

#[async_trait]
impl<T, B> FromRequest<B> for Path<T>
where
	T: DeserializeOwned + Send,
	B: Send,
{
	type Rejection = error::Request;

	async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
		axum::extract::Path::<T>::from_request(req)
			.await
			.map(|axum::extract::Path(value)| Self(value))
			.map_err(|rejection| error::Request(rejection.to_string()))
	}
}
