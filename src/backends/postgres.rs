//! PostgreSQL backend

use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};
use std::sync::Arc;

use super::{DatabaseType, ExistenceBackend, unsigned_to_i64};
use crate::error::DatabaseError;
use crate::value::AttributeValue;

/// PostgreSQL existence backend
///
/// `SELECT EXISTS (...)` yields a native `bool` column.
#[derive(Clone)]
pub struct PostgresBackend {
	pool: Arc<PgPool>,
}

impl PostgresBackend {
	pub fn new(pool: PgPool) -> Self {
		Self {
			pool: Arc::new(pool),
		}
	}

	/// Share a pool that is also used elsewhere in the test
	pub fn from_shared(pool: Arc<PgPool>) -> Self {
		Self { pool }
	}

	pub fn pool(&self) -> &PgPool {
		&self.pool
	}

	fn bind_value<'q>(
		query: Query<'q, Postgres, PgArguments>,
		index: usize,
		value: &AttributeValue,
	) -> Result<Query<'q, Postgres, PgArguments>, DatabaseError> {
		Ok(match value {
			AttributeValue::Text(s) => query.bind(s.clone()),
			AttributeValue::Integer(i) => query.bind(*i),
			AttributeValue::Unsigned(u) => query.bind(unsigned_to_i64(index, *u)?),
			AttributeValue::Float(f) => query.bind(*f),
		})
	}
}

impl From<PgPool> for PostgresBackend {
	fn from(pool: PgPool) -> Self {
		Self::new(pool)
	}
}

#[async_trait]
impl ExistenceBackend for PostgresBackend {
	fn database_type(&self) -> DatabaseType {
		DatabaseType::Postgres
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
		Ok(row.try_get::<bool, _>(0)?)
	}
}
