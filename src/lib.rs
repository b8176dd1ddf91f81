//! # dbassert
//!
//! Database row assertions for tests.
//!
//! ## Overview
//!
//! Checks whether a row matching a set of column/value attributes exists
//! (or does not exist) in a table, and reports failures to a test reporter
//! instead of panicking.
//!
//! ## Features
//!
//! - **[`ExistenceChecker`]**: builds and runs a parameterized
//!   `SELECT EXISTS (...)` query, returning the boolean result
//! - **[`DbAssert`]**: `assert_exists` / `assert_not_exists` on top of the checker
//! - **[`Reporter`]**: failure sink, with [`RecordingReporter`] and [`TracingReporter`]
//! - **Backends**: PostgreSQL, MySQL and SQLite through sqlx pools
//! - **TestContainers**: disposable PostgreSQL server (feature `testcontainers`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dbassert::{attributes, DbAssert, RecordingReporter};
//! use dbassert::backends::PostgresBackend;
//! use dbassert::config::DatabaseSettings;
//!
//! #[tokio::test]
//! async fn test_user_created() {
//!     let pool = DatabaseSettings::from_env().unwrap().connect().await.unwrap();
//!     let db = DbAssert::new(PostgresBackend::new(pool));
//!     let reporter = RecordingReporter::new();
//!
//!     create_user("alice").await;
//!
//!     db.assert_exists(&reporter, "users", &attributes! { "name" => "alice", "active" => 1 }).await;
//!     db.assert_not_exists(&reporter, "users", &attributes! { "name" => "bob" }).await;
//!
//!     reporter.finish();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`assertions`]: [`DbAssert`]
//! - [`attributes`]: [`Attributes`] and the [`attributes!`] macro
//! - [`backends`]: [`ExistenceBackend`](backends::ExistenceBackend) and the sqlx adapters
//! - [`checker`]: [`ExistenceChecker`]
//! - [`config`]: connection settings from the environment
//! - [`fixtures`]: rstest fixtures and the mockall backend mock
//! - [`query`]: [`ExistenceQuery`] construction
//! - [`reporter`]: [`Reporter`] implementations
//!
//! ## Feature Flags
//!
//! - **`postgres`** (default), **`sqlite`** (default), **`mysql`**: sqlx backends
//! - **`testcontainers`**: PostgreSQL TestContainer fixture

pub mod assertions;
pub mod attributes;
pub mod backends;
pub mod checker;
pub mod config;
#[cfg(feature = "testcontainers")]
pub mod containers;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod query;
pub mod reporter;
pub mod value;

pub use assertions::DbAssert;
pub use attributes::Attributes;
pub use checker::ExistenceChecker;
pub use error::{AssertError, ConfigError, DatabaseError, Result};
pub use query::ExistenceQuery;
pub use reporter::{RecordingReporter, Reporter, TracingReporter};
pub use value::AttributeValue;
