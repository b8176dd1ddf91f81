//! Error types for existence checks and assertions

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, AssertError>;

/// Errors produced while checking for a row
#[derive(Debug, Error)]
pub enum AssertError {
	/// The attribute set was empty, so there is nothing to match on
	#[error("no attributes to find")]
	NoAttributes,

	/// Executing the existence query or decoding its result failed
	#[error("database error [{0}]")]
	Database(#[from] DatabaseError),

	/// The attribute set could not be rendered for a failure message
	#[error("failed to serialize attributes: {0}")]
	Serialization(#[from] serde_json::Error),

	/// A dynamically typed value has no SQL literal form
	#[error("unsupported value for column '{column}': {kind}")]
	UnsupportedValue { column: String, kind: &'static str },
}

/// Errors raised by an [`ExistenceBackend`](crate::backends::ExistenceBackend)
#[derive(Debug, Error)]
pub enum DatabaseError {
	/// Error reported by the sqlx driver (connection, syntax, decoding)
	#[error(transparent)]
	Sqlx(#[from] sqlx::Error),

	/// An unsigned value does not fit into the driver's signed 64-bit binding
	#[error("value {value} for parameter ${index} is out of range for a signed 64-bit column")]
	ValueOutOfRange { index: usize, value: u64 },

	/// Free-form failure from a custom backend
	#[error("{0}")]
	Query(String),
}

/// Errors raised while resolving connection settings from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("environment variable {0} is not set")]
	Missing(&'static str),

	#[error("environment variable {name} has invalid value '{value}'")]
	Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_no_attributes_message() {
		assert_eq!(AssertError::NoAttributes.to_string(), "no attributes to find");
	}

	#[rstest]
	fn test_database_error_preserves_cause() {
		let err = AssertError::from(DatabaseError::Query(
			"relation \"missing\" does not exist".to_string(),
		));
		assert_eq!(
			err.to_string(),
			"database error [relation \"missing\" does not exist]"
		);
	}

	#[rstest]
	fn test_sqlx_error_is_wrapped() {
		let err = AssertError::from(DatabaseError::from(sqlx::Error::RowNotFound));
		assert!(matches!(
			err,
			AssertError::Database(DatabaseError::Sqlx(sqlx::Error::RowNotFound))
		));
		assert!(err.to_string().starts_with("database error ["));
	}

	#[rstest]
	fn test_out_of_range_message() {
		let err = DatabaseError::ValueOutOfRange {
			index: 2,
			value: u64::MAX,
		};
		assert_eq!(
			err.to_string(),
			"value 18446744073709551615 for parameter $2 is out of range for a signed 64-bit column"
		);
	}
}
