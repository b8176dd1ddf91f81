//! Scalar values that can appear in an attribute set

use serde::Serialize;
use std::fmt;

/// A column value to match on
///
/// Only text, integers and floats have an equality literal here; every
/// other kind is rejected when converting from dynamic input.
///
/// # Examples
///
/// ```
/// use dbassert::AttributeValue;
///
/// assert_eq!(AttributeValue::from("alice"), AttributeValue::Text("alice".to_string()));
/// assert_eq!(AttributeValue::from(5u8), AttributeValue::Unsigned(5));
/// assert_eq!(AttributeValue::from(-5i16), AttributeValue::Integer(-5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
	Text(String),
	Integer(i64),
	Unsigned(u64),
	Float(f64),
}

impl AttributeValue {
	/// Name of the value kind, used in diagnostics
	pub fn kind(&self) -> &'static str {
		match self {
			AttributeValue::Text(_) => "text",
			AttributeValue::Integer(_) => "integer",
			AttributeValue::Unsigned(_) => "unsigned integer",
			AttributeValue::Float(_) => "float",
		}
	}

	/// Render the value as an inline SQL literal
	///
	/// Text is wrapped in single quotes without escaping, so the result must
	/// never be executed with untrusted input. Queries sent to the database
	/// bind values as parameters instead.
	///
	/// Non-finite floats have no bare SQL literal and render as the quoted
	/// strings `'NaN'`, `'Infinity'` and `'-Infinity'`.
	///
	/// # Examples
	///
	/// ```
	/// use dbassert::AttributeValue;
	///
	/// assert_eq!(AttributeValue::from("random string").to_sql_literal(), "'random string'");
	/// assert_eq!(AttributeValue::from(42).to_sql_literal(), "42");
	/// assert_eq!(AttributeValue::from(2.50).to_sql_literal(), "2.5");
	/// assert_eq!(AttributeValue::from(f64::NAN).to_sql_literal(), "'NaN'");
	/// ```
	pub fn to_sql_literal(&self) -> String {
		match self {
			AttributeValue::Text(s) => format!("'{}'", s),
			AttributeValue::Float(v) if v.is_nan() => "'NaN'".to_string(),
			AttributeValue::Float(v) if v.is_infinite() => {
				if v.is_sign_positive() {
					"'Infinity'".to_string()
				} else {
					"'-Infinity'".to_string()
				}
			}
			other => other.to_string(),
		}
	}
}

impl fmt::Display for AttributeValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttributeValue::Text(s) => f.write_str(s),
			AttributeValue::Integer(i) => write!(f, "{}", i),
			AttributeValue::Unsigned(u) => write!(f, "{}", u),
			// f64's Display is the shortest round-trip form and never uses an exponent
			AttributeValue::Float(v) => write!(f, "{}", v),
		}
	}
}

impl From<&str> for AttributeValue {
	fn from(s: &str) -> Self {
		AttributeValue::Text(s.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(s: String) -> Self {
		AttributeValue::Text(s)
	}
}

impl From<&String> for AttributeValue {
	fn from(s: &String) -> Self {
		AttributeValue::Text(s.clone())
	}
}

macro_rules! impl_from_signed {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for AttributeValue {
				fn from(v: $ty) -> Self {
					AttributeValue::Integer(v as i64)
				}
			}
		)*
	};
}

macro_rules! impl_from_unsigned {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for AttributeValue {
				fn from(v: $ty) -> Self {
					AttributeValue::Unsigned(v as u64)
				}
			}
		)*
	};
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for AttributeValue {
	fn from(v: f32) -> Self {
		// Widened exactly, so it equals an f32 stored in a double column
		AttributeValue::Float(f64::from(v))
	}
}

impl From<f64> for AttributeValue {
	fn from(v: f64) -> Self {
		AttributeValue::Float(v)
	}
}
