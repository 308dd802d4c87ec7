#![deny(
	absolute_paths_not_starting_with_crate,
	future_incompatible,
	keyword_idents,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	missing_copy_implementations,
	nonstandard_style,
	noop_method_call,
	rust_2018_idioms
)]
#![forbid(unsafe_code)]

use std::sync::Arc;

use axum::Extension;

mod config;
mod cors;
mod database;
mod error;
mod helpers;
mod routes;
mod server;
mod timestamp;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("reading configuration: {0}")]
	Config(#[from] figment::Error),
	#[error("connecting to database: {0}")]
	ConnectDb(#[from] sqlx::Error),
	#[error("running migrations: {0}")]
	Migrate(#[from] sqlx::migrate::MigrateError),
	#[error("running server: {0}")]
	RunServer(#[from] hyper::Error),
	#[error("binding to Unix socket at path {1}: {0}")]
	BindUnix(#[source] std::io::Error, std::path::PathBuf),
}

#[tokio::main]
async fn main() -> Result<(), Error> {
	// a missing `.env` is fine, the other configuration layers still apply
	let _ = dotenvy::dotenv();

	let config = config::config()?;

	init_logging(&config.log_level);

	let database = database::connect(&config.database_url, config.max_connections).await?;
	if config.migrate {
		database::migrate(&database).await?;
	}
	let store: database::SharedStore = Arc::new(database);

	let mut app = routes::configure();
	app = app.layer(Extension(store));
	app = app.layer(cors::layer(config.cors_origins.as_deref()));
	app = app.layer(tower_http::trace::TraceLayer::new_for_http());

	let address = config.bind_address();
	tracing::info!(%address, "listening");
	server::run(app, &address).await
}

fn init_logging(log_level: &config::LogLevel) {
	use tracing_subscriber::filter::FilterFn;
	use tracing_subscriber::layer::{Layer, SubscriberExt};
	use tracing_subscriber::util::SubscriberInitExt;

	let (internal, external) = (log_level.internal, log_level.external);
	let filter = FilterFn::new(move |metadata| {
		let required_level = match metadata.module_path() {
			Some(path) if path.starts_with(env!("CARGO_CRATE_NAME")) => internal,
			_ => external,
		};
		metadata.level() <= &required_level
	});

	let layer = tracing_subscriber::fmt::layer()
		.with_file(true)
		.with_line_number(true)
		.with_writer(std::io::stderr);

	tracing_subscriber::registry()
		.with(layer.with_filter(filter))
		.init();
}
