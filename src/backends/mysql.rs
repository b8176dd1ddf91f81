//! MySQL backend

use async_trait::async_trait;
use sqlx::mysql::MySqlArguments;
use sqlx::query::Query;
use sqlx::{MySql, MySqlPool, Row};
use std::sync::Arc;

use super::{DatabaseType, ExistenceBackend, unsigned_to_i64};
use crate::error::DatabaseError;
use crate::value::AttributeValue;

/// MySQL existence backend
///
/// MySQL has no boolean column type; `EXISTS` yields an integer `0` or `1`
/// whose width depends on the server version, so it is decoded unchecked.
#[derive(Clone)]
pub struct MySqlBackend {
	pool: Arc<MySqlPool>,
}

impl MySqlBackend {
	pub fn new(pool: MySqlPool) -> Self {
		Self {
			pool: Arc::new(pool),
		}
	}

	pub fn from_shared(pool: Arc<MySqlPool>) -> Self {
		Self { pool }
	}

	pub fn pool(&self) -> &MySqlPool {
		&self.pool
	}

	fn bind_value<'q>(
		query: Query<'q, MySql, MySqlArguments>,
		index: usize,
		value: &AttributeValue,
	) -> Result<Query<'q, MySql, MySqlArguments>, DatabaseError> {
		Ok(match value {
			AttributeValue::Text(s) => query.bind(s.clone()),
			AttributeValue::Integer(i) => query.bind(*i),
			AttributeValue::Unsigned(u) => query.bind(unsigned_to_i64(index, *u)?),
			AttributeValue::Float(f) => query.bind(*f),
		})
	}
}

impl From<MySqlPool> for MySqlBackend {
	fn from(pool: MySqlPool) -> Self {
		Self::new(pool)
	}
}

#[async_trait]
impl ExistenceBackend for MySqlBackend {
	fn database_type(&self) -> DatabaseType {
		DatabaseType::Mysql
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
		let exists: i64 = row.try_get_unchecked(0)?;
		Ok(exists != 0)
	}
}
