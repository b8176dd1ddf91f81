//! Test fixtures for existence checks
//!
//! - [`MockExistenceBackend`]: mockall-generated backend for unit tests that
//!   need to control or verify the query sent to the database
//! - [`mock_backend`]: the mock preloaded with PostgreSQL dialect defaults
//! - [`recording_reporter`]: a fresh [`RecordingReporter`]
//! - [`sqlite_backend`]: an in-memory SQLite backend (feature `sqlite`)
//! - [`postgres_container`]: a PostgreSQL TestContainer (feature `testcontainers`)

use mockall::mock;
use rstest::*;

use crate::backends::{DatabaseType, ExistenceBackend};
use crate::error::DatabaseError;
use crate::reporter::RecordingReporter;
use crate::value::AttributeValue;

#[cfg(feature = "testcontainers")]
pub use crate::containers::{PostgresContainer, postgres_container};

mock! {
	/// Mock implementation of [`ExistenceBackend`]
	///
	/// # Direct Usage Example
	///
	/// ```rust
	/// use dbassert::fixtures::MockExistenceBackend;
	/// use dbassert::backends::{DatabaseType, ExistenceBackend};
	///
	/// #[tokio::main]
	/// async fn main() {
	///     let mut mock = MockExistenceBackend::new();
	///     mock.expect_fetch_exists()
	///         .withf(|sql, params| sql.contains("FROM users") && params.len() == 1)
	///         .times(1)
	///         .returning(|_, _| Ok(true));
	///
	///     let exists = mock
	///         .fetch_exists("SELECT EXISTS (SELECT * FROM users WHERE id = $1)", vec![1.into()])
	///         .await
	///         .unwrap();
	///     assert!(exists);
	/// }
	/// ```
	pub ExistenceBackend {}

	#[async_trait::async_trait]
	impl ExistenceBackend for ExistenceBackend {
		fn database_type(&self) -> DatabaseType;
		fn placeholder(&self, index: usize) -> String;

		async fn fetch_exists(
			&self,
			sql: &str,
			params: Vec<AttributeValue>,
		) -> Result<bool, DatabaseError>;
	}
}

/// Fixture providing a mock backend that speaks the PostgreSQL dialect
///
/// Expectations for `fetch_exists` are left to the test.
#[fixture]
pub fn mock_backend() -> MockExistenceBackend {
	let mut mock = MockExistenceBackend::new();

	mock.expect_database_type()
		.return_const(DatabaseType::Postgres);

	mock.expect_placeholder()
		.returning(|idx| DatabaseType::Postgres.placeholder(idx));

	mock
}

/// Fixture providing an empty [`RecordingReporter`]
#[fixture]
pub fn recording_reporter() -> RecordingReporter {
	RecordingReporter::new()
}

/// Fixture providing an in-memory SQLite backend
///
/// The pool is capped at a single connection because every SQLite
/// `:memory:` connection opens its own database.
#[cfg(feature = "sqlite")]
#[fixture]
pub async fn sqlite_backend() -> crate::backends::SqliteBackend {
	let pool = sqlx::sqlite::SqlitePoolOptions::new()
		.max_connections(1)
		.min_connections(1)
		.connect("sqlite::memory:")
		.await
		.expect("Failed to open in-memory SQLite database");

	crate::backends::SqliteBackend::new(pool)
}
