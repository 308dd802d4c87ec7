use http::header::{HeaderValue, CONTENT_TYPE};
use http::Method;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Browser access for the GET/POST/PUT/DELETE routes, with credentials.
///
/// Without an explicit list of `origins` the request's own origin is echoed back, since a wildcard is not allowed together with credentials.
/// Origins that are not valid header values are skipped with a warning.
pub fn layer(origins: Option<&[String]>) -> CorsLayer {
	let allow_origin = match origins {
		Some(origins) => AllowOrigin::list(origins.iter().filter_map(|origin| {
			HeaderValue::from_str(origin)
				.map_err(|error| tracing::warn!(%origin, %error, "ignoring invalid CORS origin"))
				.ok()
		})),
		None => AllowOrigin::mirror_request(),
	};

	CorsLayer::new()
		.allow_origin(allow_origin)
		.allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
		.allow_headers([CONTENT_TYPE])
		.allow_credentials(true)
}
