//! Row existence assertions
//!
//! [`DbAssert`] wraps an [`ExistenceChecker`] and turns its outcome into
//! reporter signals: every problem (missing row, unexpected row, database
//! error) is reported, the test is marked failed, and `false` is returned.
//! Nothing panics, so the caller decides whether to continue.
//!
//! # Example
//!
//! ```rust,no_run
//! use dbassert::{attributes, DbAssert, RecordingReporter};
//! use dbassert::backends::PostgresBackend;
//! use sqlx::PgPool;
//!
//! # async fn example() {
//! let pool = PgPool::connect("postgres://postgres@localhost/test").await.unwrap();
//! let db = DbAssert::new(PostgresBackend::new(pool));
//! let reporter = RecordingReporter::new();
//!
//! db.assert_exists(&reporter, "users", &attributes! { "name" => "alice" }).await;
//! db.assert_not_exists(&reporter, "users", &attributes! { "name" => "mallory" }).await;
//!
//! reporter.finish();
//! # }
//! ```

use tracing::warn;

use crate::attributes::Attributes;
use crate::backends::ExistenceBackend;
use crate::checker::ExistenceChecker;
use crate::error::Result;
use crate::reporter::Reporter;

/// Database assertions around a [`Reporter`]
#[derive(Debug, Clone)]
pub struct DbAssert<B> {
	checker: ExistenceChecker<B>,
}

impl<B: ExistenceBackend> DbAssert<B> {
	pub fn new(backend: B) -> Self {
		Self {
			checker: ExistenceChecker::new(backend),
		}
	}

	pub fn checker(&self) -> &ExistenceChecker<B> {
		&self.checker
	}

	/// Return whether a matching row exists, without reporting anything
	pub async fn exists(&self, table: &str, attributes: &Attributes) -> Result<bool> {
		self.checker.exists(table, attributes).await
	}

	/// Assert that a row matching every attribute exists in `table`
	///
	/// Returns `true` and leaves the reporter untouched on success.
	pub async fn assert_exists<R: Reporter>(
		&self,
		reporter: R,
		table: &str,
		attributes: &Attributes,
	) -> bool {
		self.check(reporter, table, attributes, true).await
	}

	/// Assert that no row matching every attribute exists in `table`
	///
	/// Returns `true` and leaves the reporter untouched on success.
	pub async fn assert_not_exists<R: Reporter>(
		&self,
		reporter: R,
		table: &str,
		attributes: &Attributes,
	) -> bool {
		self.check(reporter, table, attributes, false).await
	}

	async fn check<R: Reporter>(
		&self,
		reporter: R,
		table: &str,
		attributes: &Attributes,
		expected: bool,
	) -> bool {
		let exists = match self.checker.exists(table, attributes).await {
			Ok(exists) => exists,
			Err(e) => {
				warn!(table = table, error = %e, "existence check failed");
				report(&reporter, &e.to_string());
				return false;
			}
		};

		if exists == expected {
			return true;
		}

		let rendered = match attributes.to_json() {
			Ok(rendered) => rendered,
			Err(e) => {
				report(&reporter, &e.to_string());
				return false;
			}
		};

		let message = if expected {
			format!(
				"unable to find row in database table [{}] that matched attributes [{}]",
				table, rendered
			)
		} else {
			format!(
				"found unexpected records in database table [{}] that matched attributes [{}]",
				table, rendered
			)
		};
		warn!(table = table, attributes = %rendered, expected, "row existence mismatch");
		report(&reporter, &message);
		false
	}
}

fn report<R: Reporter>(reporter: &R, message: &str) {
	reporter.error(message);
	reporter.fail();
}
