use axum::Router;

mod posts;
mod tags;

macro_rules! sub {
	($app:ident, $name:ident) => {
		$app = $app.nest(concat!("/", stringify!($name)), $name::configure())
	};
	($app:ident; $($name:ident),+) => {
		$(sub!($app, $name));+
	};
}

pub fn configure() -> Router {
	let mut app = Router::new();

	sub!(app; posts, tags);

	app = app.fallback(axum::handler::Handler::into_service(
		crate::error::default_handler,
	));

	app
}
