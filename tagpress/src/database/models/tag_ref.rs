use serde::de::Deserializer;
use serde::Deserialize;
use serde_json::Value;

use super::TagId;

/// One entry of the `tags` array in a post request body.
///
/// Clients send either `{"id": 3}` or, straight out of a select widget, something like `{"value": 3, "label": "rust"}`.
/// The `id` field is used when it is truthy in the JavaScript sense (not `null`, `false`, `0` or `""`), otherwise `value` is.
/// Whichever is picked only counts if it is an integer; anything else, including a numeric string like `"3"`, resolves to nothing.
/// Entries that resolve to nothing are skipped, never rejected, so one odd entry can't fail the whole request.
///
/// Because `0` is falsy, `{"id": 0, "value": 5}` resolves to `5` and `{"id": 0}` resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRef(Option<TagId>);

impl<'de> Deserialize<'de> for TagRef {
	fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
		Value::deserialize(de).map(|entry| Self::resolve(&entry))
	}
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

impl TagRef {
	pub fn resolve(entry: &Value) -> Self {
		let (id, value) = match entry {
			Value::Object(fields) => (fields.get("id"), fields.get("value")),
			_ => (None, None),
		};
		let picked = id.filter(|id| is_truthy(id)).or(value);
		Self(
			picked
				.and_then(Value::as_i64)
				.and_then(|id| TagId::try_from(id).ok()),
		)
	}

	pub fn id(self) -> Option<TagId> {
		self.0
	}

	/// The ids that resolved, in request order.
	pub fn ids(refs: &[Self]) -> Vec<TagId> {
		refs.iter().copied().filter_map(Self::id).collect()
	}
}
