//! SQLite backend

use async_trait::async_trait;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Row, Sqlite, SqlitePool};
use std::sync::Arc;

use super::{DatabaseType, ExistenceBackend, unsigned_to_i64};
use crate::error::DatabaseError;
use crate::value::AttributeValue;

/// SQLite existence backend
///
/// `EXISTS` yields an integer `0` or `1`.
///
/// # Examples
///
/// ```rust,no_run
/// use dbassert::backends::SqliteBackend;
/// use sqlx::SqlitePool;
///
/// # async fn example() {
/// let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
/// let backend = SqliteBackend::new(pool);
/// # }
/// # tokio::runtime::Runtime::new().unwrap().block_on(example());
/// ```
#[derive(Clone)]
pub struct SqliteBackend {
	pool: Arc<SqlitePool>,
}

impl SqliteBackend {
	pub fn new(pool: SqlitePool) -> Self {
		Self {
			pool: Arc::new(pool),
		}
	}

	pub fn from_shared(pool: Arc<SqlitePool>) -> Self {
		Self { pool }
	}

	pub fn pool(&self) -> &SqlitePool {
		&self.pool
	}

	fn bind_value<'q>(
		query: Query<'q, Sqlite, SqliteArguments<'q>>,
		index: usize,
		value: &AttributeValue,
	) -> Result<Query<'q, Sqlite, SqliteArguments<'q>>, DatabaseError> {
		Ok(match value {
			AttributeValue::Text(s) => query.bind(s.clone()),
			AttributeValue::Integer(i) => query.bind(*i),
			AttributeValue::Unsigned(u) => query.bind(unsigned_to_i64(index, *u)?),
			AttributeValue::Float(f) => query.bind(*f),
		})
	}
}

impl From<SqlitePool> for SqliteBackend {
	fn from(pool: SqlitePool) -> Self {
		Self::new(pool)
	}
}

#[async_trait]
impl ExistenceBackend for SqliteBackend {
	fn database_type(&self) -> DatabaseType {
		DatabaseType::Sqlite
	}

	async fn fetch_exists(
		&self,
		sql: &str,
		params: Vec<AttributeValue>,
	) -> Result<bool, DatabaseError> {
		let mut query = sqlx::query(sql);
		for (index, param) in params.iter().enumerate() {
			query = Self::bind_value(query, index + 1, param)?;
		}
		let row = query.fetch_one(self.pool.as_ref()).await?;
		let exists: i64 = row.try_get(0)?;
		Ok(exists != 0)
	}
}
