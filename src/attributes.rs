//! Column/value attribute sets

use crate::error::{AssertError, Result};
use crate::value::AttributeValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// Equality constraints used to locate a row
///
/// Columns are kept in name order, so the generated SQL and the rendered
/// failure messages do not depend on insertion order. Setting the same
/// column twice keeps the last value.
///
/// # Examples
///
/// ```
/// use dbassert::Attributes;
///
/// let attrs = Attributes::new()
///     .with("name", "random string")
///     .with("id", 5);
///
/// assert_eq!(attrs.len(), 2);
/// assert_eq!(attrs.to_json().unwrap(), r#"{"id":5,"name":"random string"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Attributes {
	values: BTreeMap<String, AttributeValue>,
}

impl Attributes {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a constraint, builder style
	pub fn with(mut self, column: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.insert(column, value);
		self
	}

	/// Add a constraint, returning the value previously set for the column
	pub fn insert(
		&mut self,
		column: impl Into<String>,
		value: impl Into<AttributeValue>,
	) -> Option<AttributeValue> {
		self.values.insert(column.into(), value.into())
	}

	pub fn get(&self, column: &str) -> Option<&AttributeValue> {
		self.values.get(column)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Iterate over `(column, value)` pairs in column order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Render the attribute set as compact JSON for failure messages
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Build an attribute set from a JSON object
	///
	/// Strings and numbers convert; booleans, nulls, arrays and nested
	/// objects have no equality literal and are rejected.
	///
	/// # Examples
	///
	/// ```
	/// use dbassert::{AssertError, Attributes};
	/// use serde_json::json;
	///
	/// let attrs = Attributes::from_json(json!({"name": "alice", "age": 30})).unwrap();
	/// assert_eq!(attrs.len(), 2);
	///
	/// let err = Attributes::from_json(json!({"active": true})).unwrap_err();
	/// assert!(matches!(err, AssertError::UnsupportedValue { .. }));
	/// ```
	pub fn from_json(value: serde_json::Value) -> Result<Self> {
		let object = match value {
			serde_json::Value::Object(object) => object,
			other => {
				return Err(AssertError::UnsupportedValue {
					column: String::new(),
					kind: json_kind(&other),
				});
			}
		};

		let mut attrs = Self::new();
		for (column, value) in object {
			let converted = json_to_value(&column, value)?;
			attrs.values.insert(column, converted);
		}
		Ok(attrs)
	}
}

fn json_to_value(column: &str, value: serde_json::Value) -> Result<AttributeValue> {
	use serde_json::Value;

	match value {
		Value::String(s) => Ok(AttributeValue::Text(s)),
		Value::Number(n) => {
			if let Some(i) = n.as_i64() {
				Ok(AttributeValue::Integer(i))
			} else if let Some(u) = n.as_u64() {
				Ok(AttributeValue::Unsigned(u))
			} else if let Some(f) = n.as_f64() {
				Ok(AttributeValue::Float(f))
			} else {
				Err(AssertError::UnsupportedValue {
					column: column.to_string(),
					kind: "number",
				})
			}
		}
		other => Err(AssertError::UnsupportedValue {
			column: column.to_string(),
			kind: json_kind(&other),
		}),
	}
}

fn json_kind(value: &serde_json::Value) -> &'static str {
	use serde_json::Value;

	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

impl TryFrom<serde_json::Value> for Attributes {
	type Error = AssertError;

	fn try_from(value: serde_json::Value) -> Result<Self> {
		Self::from_json(value)
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<AttributeValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Self::new();
		for (column, value) in iter {
			attrs.insert(column, value);
		}
		attrs
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
	K: Into<String>,
	V: Into<AttributeValue>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

impl<'a> IntoIterator for &'a Attributes {
	type Item = (&'a String, &'a AttributeValue);
	type IntoIter = std::collections::btree_map::Iter<'a, String, AttributeValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.values.iter()
	}
}

/// Build an [`Attributes`] set from `column => value` pairs
///
/// # Examples
///
/// ```
/// use dbassert::attributes;
///
/// let attrs = attributes! { "name" => "random string", "id" => 5 };
/// assert_eq!(attrs.len(), 2);
///
/// let empty = attributes! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! attributes {
	() => {
		$crate::Attributes::new()
	};
	($($column:expr => $value:expr),+ $(,)?) => {
		$crate::Attributes::new()$(.with($column, $value))+
	};
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_columns_are_ordered() {
		let attrs = Attributes::new()
			.with("zeta", 1)
			.with("alpha", "a")
			.with("mid", 2.5);
		let columns: Vec<&str> = attrs.iter().map(|(c, _)| c).collect();
		assert_eq!(columns, vec!["alpha", "mid", "zeta"]);
	}

	#[rstest]
	fn test_last_value_wins() {
		let mut attrs = Attributes::new().with("id", 5);
		let previous = attrs.insert("id", 6);
		assert_eq!(previous, Some(AttributeValue::Integer(5)));
		assert_eq!(attrs.get("id"), Some(&AttributeValue::Integer(6)));
		assert_eq!(attrs.len(), 1);
	}

	#[rstest]
	fn test_to_json_matches_failure_message_format() {
		let attrs = Attributes::from([("name", "random string")]);
		assert_eq!(attrs.to_json().unwrap(), r#"{"name":"random string"}"#);
	}

	#[rstest]
	fn test_from_json_converts_numbers() {
		let attrs = Attributes::from_json(json!({
			"signed": -3,
			"big": u64::MAX,
			"ratio": 0.25,
			"name": "x",
		}))
		.unwrap();

		assert_eq!(attrs.get("signed"), Some(&AttributeValue::Integer(-3)));
		assert_eq!(attrs.get("big"), Some(&AttributeValue::Unsigned(u64::MAX)));
		assert_eq!(attrs.get("ratio"), Some(&AttributeValue::Float(0.25)));
		assert_eq!(attrs.get("name"), Some(&AttributeValue::Text("x".into())));
	}

	#[rstest]
	#[case(json!({"active": true}), "active", "bool")]
	#[case(json!({"deleted_at": null}), "deleted_at", "null")]
	#[case(json!({"tags": ["a"]}), "tags", "array")]
	#[case(json!({"meta": {"k": 1}}), "meta", "object")]
	fn test_from_json_rejects_kinds_without_literal(
		#[case] input: serde_json::Value,
		#[case] expected_column: &str,
		#[case] expected_kind: &str,
	) {
		match Attributes::from_json(input) {
			Err(AssertError::UnsupportedValue { column, kind }) => {
				assert_eq!(column, expected_column);
				assert_eq!(kind, expected_kind);
			}
			other => panic!("Expected UnsupportedValue, got {:?}", other),
		}
	}

	#[rstest]
	fn test_from_json_rejects_non_object() {
		let err = Attributes::try_from(json!(["name"])).unwrap_err();
		assert!(matches!(
			err,
			AssertError::UnsupportedValue { kind: "array", .. }
		));
	}

	#[rstest]
	fn test_macro_builds_attributes() {
		let attrs = attributes! { "id" => 5u32, "name" => "n" };
		assert_eq!(attrs.get("id"), Some(&AttributeValue::Unsigned(5)));
		assert_eq!(attrs.get("name"), Some(&AttributeValue::Text("n".into())));
	}
}
