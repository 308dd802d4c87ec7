mod response;
pub use response::{default_handler, error_response};

#[derive(Debug, thiserror::Error)]
#[error("SQL error: {0}")]
pub struct Sqlx(#[source] pub sqlx::Error);

/// Displays as the message sent to the client, e.g. `EntityNotFound("Post")` is "Post bulunamadı".
#[derive(Debug, thiserror::Error)]
#[error("{0} bulunamadı")]
pub struct EntityNotFound(pub &'static str);

/// The request could not be turned into handler arguments.
/// Clients get the same opaque 500 as for any other failure.
#[derive(Debug, thiserror::Error)]
#[error("unusable request: {0}")]
pub struct Request(pub String);

macro_rules! impl_response {
	($struct_name:ident, $status:ident) => {
		impl axum::response::IntoResponse for $struct_name {
			fn into_response(self) -> axum::response::Response {
				crate::error::error_response(&self, http::StatusCode::$status)
			}
		}
	};
}

impl_response!(Sqlx, INTERNAL_SERVER_ERROR);
impl_response!(EntityNotFound, NOT_FOUND);
impl_response!(Request, INTERNAL_SERVER_ERROR);
