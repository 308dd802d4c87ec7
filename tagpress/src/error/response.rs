use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;

pub const INTERNAL_ERROR_MESSAGE: &str = "Sunucu hatası";

#[derive(serde::Serialize)]
struct Payload<'a> {
	error: &'a str,
}

/// Server errors are logged in full and answered with [`INTERNAL_ERROR_MESSAGE`] only.
/// Anything else is answered with the error's own message.
pub fn error_response(error: &dyn std::error::Error, status_code: StatusCode) -> Response {
	if status_code.is_server_error() {
		match error.source() {
			Some(source) => tracing::error!(%error, %source, status = status_code.as_u16(), "request failed"),
			None => tracing::error!(%error, status = status_code.as_u16(), "request failed"),
		}
		let payload = Payload {
			error: INTERNAL_ERROR_MESSAGE,
		};
		return (status_code, Json(payload)).into_response();
	}

	let message = error.to_string();
	(status_code, Json(Payload { error: &message })).into_response()
}

pub async fn default_handler() -> impl IntoResponse {
	let payload = Payload {
		error: "Sayfa bulunamadı",
	};
	(StatusCode::NOT_FOUND, Json(payload))
}
