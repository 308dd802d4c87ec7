pub type Date = time::Date;

/// `YYYY-MM-DD`, for `#[serde(with)]`.
///
/// Deserializing also accepts a full timestamp such as `2024-01-01T10:00:00Z` and keeps only the date part, since browser clients tend to send those.
pub mod iso_date {
	use serde::de::{self, Deserialize, Deserializer};
	use serde::ser::{self, Serialize, Serializer};
	use time::format_description::FormatItem;
	use time::macros::format_description;

	use super::Date;

	pub static FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

	pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
		let formatted = date
			.format(FORMAT)
			.map_err(<S::Error as ser::Error>::custom)?;
		formatted.serialize(serializer)
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error>
	where
		D::Error: de::Error,
	{
		let raw = <std::borrow::Cow<'_, str>>::deserialize(deserializer)?;
		let date_part = raw.split_once('T').map_or(&*raw, |(date, _time)| date);
		Date::parse(date_part, FORMAT).map_err(de::Error::custom)
	}
}
