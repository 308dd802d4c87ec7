use std::net::SocketAddr;

use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

pub mod bindable;
pub use bindable::BindableAddr;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub database_url: String,
	/// Takes precedence over `port` when set.
	pub address: Option<BindableAddr>,
	#[serde(default = "default_port")]
	pub port: u16,
	#[serde(default = "default_log_level")]
	pub log_level: LogLevel,
	#[serde(default = "default_max_connections")]
	pub max_connections: u32,
	#[serde(default = "default_migrate")]
	pub migrate: bool,
	/// Allowed CORS origins. When absent the request's origin is mirrored back.
	pub cors_origins: Option<Vec<String>>,
}

impl Config {
	pub fn bind_address(&self) -> BindableAddr {
		match &self.address {
			Some(address) => address.clone(),
			None => BindableAddr::Tcp(SocketAddr::from(([0, 0, 0, 0], self.port))),
		}
	}
}

const fn default_port() -> u16 {
	3001
}

const fn default_max_connections() -> u32 {
	5
}

const fn default_migrate() -> bool {
	true
}

fn deserialize_level_filter<'de, D: serde::de::Deserializer<'de>>(
	d: D,
) -> Result<LevelFilter, D::Error>
where
	D::Error: serde::de::Error,
{
	String::deserialize(d)?
		.parse()
		.map_err(serde::de::Error::custom)
}

#[derive(Debug, Deserialize)]
#[serde(from = "LogLevelSerdeHelper")]
pub struct LogLevel {
	pub internal: LevelFilter,
	pub external: LevelFilter,
}

const fn default_log_level_internal() -> LevelFilter {
	LevelFilter::INFO
}

const fn default_log_level_external() -> LevelFilter {
	LevelFilter::WARN
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LogLevelSerdeHelper {
	#[serde(deserialize_with = "deserialize_level_filter")]
	Together(LevelFilter),
	Separate {
		#[serde(
			deserialize_with = "deserialize_level_filter",
			default = "default_log_level_internal"
		)]
		internal: LevelFilter,
		#[serde(
			deserialize_with = "deserialize_level_filter",
			default = "default_log_level_external"
		)]
		external: LevelFilter,
	},
}

impl From<LogLevelSerdeHelper> for LogLevel {
	fn from(helper: LogLevelSerdeHelper) -> Self {
		match helper {
			LogLevelSerdeHelper::Together(level) => Self {
				internal: level,
				external: level,
			},
			LogLevelSerdeHelper::Separate { internal, external } => Self { internal, external },
		}
	}
}

const fn default_log_level() -> LogLevel {
	LogLevel {
		internal: default_log_level_internal(),
		external: default_log_level_external(),
	}
}

pub fn figment() -> figment::Figment {
	use figment::providers::{Env, Format as _, Toml};

	figment::Figment::new()
		.merge(Toml::file("tagpress.toml"))
		// plain variables understood by earlier deployments; the prefixed ones win
		.merge(Env::raw().only(&["DATABASE_URL", "PORT"]))
		.merge(Env::prefixed("TAGPRESS_"))
}

pub fn config() -> Result<Config, figment::Error> {
	figment().extract()
}
