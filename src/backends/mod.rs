//! Database backends for existence queries
//!
//! A backend knows its dialect's placeholder syntax, binds attribute values
//! as parameters and decodes the single boolean produced by
//! `SELECT EXISTS (...)`.
//!
//! | Database | Feature Flag | Backend Type |
//! |----------|--------------|--------------|
//! | PostgreSQL | `postgres` | [`PostgresBackend`] |
//! | MySQL/MariaDB | `mysql` | [`MySqlBackend`] |
//! | SQLite | `sqlite` | [`SqliteBackend`] |
//!
//! Pools are created and owned by the caller; a backend only borrows a
//! shared handle to one.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::DatabaseError;
use crate::value::AttributeValue;

#[cfg(feature = "mysql")]
pub mod mysql;
#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "mysql")]
pub use mysql::MySqlBackend;
#[cfg(feature = "postgres")]
pub use postgres::PostgresBackend;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteBackend;

/// Database type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
	Postgres,
	Mysql,
	Sqlite,
}

impl DatabaseType {
	/// Placeholder for the 1-based parameter `index` in this dialect
	///
	/// # Examples
	///
	/// ```
	/// use dbassert::backends::DatabaseType;
	///
	/// assert_eq!(DatabaseType::Postgres.placeholder(2), "$2");
	/// assert_eq!(DatabaseType::Sqlite.placeholder(2), "?");
	/// ```
	pub fn placeholder(&self, index: usize) -> String {
		match self {
			DatabaseType::Postgres => format!("${}", index),
			DatabaseType::Mysql | DatabaseType::Sqlite => "?".to_string(),
		}
	}
}

/// Executes a single-row, single-column boolean query
#[async_trait]
pub trait ExistenceBackend: Send + Sync {
	fn database_type(&self) -> DatabaseType;

	fn placeholder(&self, index: usize) -> String {
		self.database_type().placeholder(index)
	}

	/// Run `sql` with `params` bound in order and return its boolean column
	async fn fetch_exists(
		&self,
		sql: &str,
		params: Vec<AttributeValue>,
	) -> Result<bool, DatabaseError>;
}

#[async_trait]
impl<B: ExistenceBackend + ?Sized> ExistenceBackend for Arc<B> {
	fn database_type(&self) -> DatabaseType {
		(**self).database_type()
	}

	fn placeholder(&self, index: usize) -> String {
		(**self).placeholder(index)
	}

	async fn fetch_exists(
		&self,
		sql: &str,
		params: Vec<AttributeValue>,
	) -> Result<bool, DatabaseError> {
		(**self).fetch_exists(sql, params).await
	}
}

/// Convert an unsigned value to the signed 64-bit form every driver binds
///
/// [`ExistenceQuery`](crate::query::ExistenceQuery) inlines larger values, so
/// this only fails for hand-written parameter lists.
pub(crate) fn unsigned_to_i64(index: usize, value: u64) -> Result<i64, DatabaseError> {
	i64::try_from(value).map_err(|_| DatabaseError::ValueOutOfRange { index, value })
}
