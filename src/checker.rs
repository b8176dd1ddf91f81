//! Row existence checks

use tracing::{debug, trace};

use crate::attributes::Attributes;
use crate::backends::ExistenceBackend;
use crate::error::{AssertError, Result};
use crate::query::ExistenceQuery;

/// Checks whether a row matching every attribute exists in a table
///
/// The checker holds no state besides the backend handed to it; every call
/// issues exactly one query and never retries.
///
/// # Examples
///
/// ```rust,no_run
/// use dbassert::{attributes, ExistenceChecker};
/// use dbassert::backends::SqliteBackend;
/// use sqlx::SqlitePool;
///
/// # async fn example() {
/// let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
/// let checker = ExistenceChecker::new(SqliteBackend::new(pool));
///
/// let exists = checker
///     .exists("users", &attributes! { "name" => "alice" })
///     .await
///     .unwrap();
/// # }
/// # tokio::runtime::Runtime::new().unwrap().block_on(example());
/// ```
#[derive(Debug, Clone)]
pub struct ExistenceChecker<B> {
	backend: B,
}

impl<B: ExistenceBackend> ExistenceChecker<B> {
	pub fn new(backend: B) -> Self {
		Self { backend }
	}

	pub fn backend(&self) -> &B {
		&self.backend
	}

	/// Build the existence query for `table` without running it
	pub fn query(&self, table: &str, attributes: &Attributes) -> Result<ExistenceQuery> {
		ExistenceQuery::build(table, attributes, |index| self.backend.placeholder(index))
	}

	/// Return whether at least one row of `table` matches all `attributes`
	///
	/// Fails with [`AssertError::NoAttributes`] for an empty attribute set
	/// without contacting the database, and with [`AssertError::Database`]
	/// when execution or decoding fails.
	pub async fn exists(&self, table: &str, attributes: &Attributes) -> Result<bool> {
		let query = self.query(table, attributes)?;
		debug!(
			table = table,
			database = ?self.backend.database_type(),
			sql = %query.sql(),
			"checking row existence"
		);
		trace!(inline_sql = %query.to_inline_sql(), "existence query with values");

		let exists = self
			.backend
			.fetch_exists(query.sql(), query.params().to_vec())
			.await
			.map_err(AssertError::Database)?;

		debug!(table = table, exists, "row existence checked");
		Ok(exists)
	}
}
