//! TestContainers integration for PostgreSQL-backed assertions
//!
//! Starts a disposable PostgreSQL server so existence assertions can run
//! against a real database without any `POSTGRESQL_*` configuration.
//!
//! ```ignore
//! use dbassert::containers::{PostgresContainer, postgres_container};
//! use rstest::*;
//!
//! #[rstest]
//! #[tokio::test]
//! async fn test_with_postgres(#[future] postgres_container: PostgresContainer) {
//!     let db = postgres_container.await;
//!     let pool = db.connect().await.unwrap();
//!     // ...
//! }
//! ```

use rstest::*;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

use crate::config::DatabaseSettings;

/// PostgreSQL test container
///
/// The container is stopped and removed when this value is dropped.
pub struct PostgresContainer {
	#[allow(dead_code)]
	container: ContainerAsync<Postgres>,
	settings: DatabaseSettings,
}

impl PostgresContainer {
	/// Start a container with default credentials (`postgres`/`postgres`, database `test`)
	pub async fn start() -> Result<Self, testcontainers::TestcontainersError> {
		Self::start_with_credentials("postgres", "postgres", "test").await
	}

	/// Start a container with custom credentials
	pub async fn start_with_credentials(
		username: &str,
		password: &str,
		database: &str,
	) -> Result<Self, testcontainers::TestcontainersError> {
		let container = Postgres::default()
			.with_env_var("POSTGRES_USER", username)
			.with_env_var("POSTGRES_PASSWORD", password)
			.with_env_var("POSTGRES_DB", database)
			.start()
			.await?;

		let host = container.get_host().await?.to_string();
		let port = container.get_host_port_ipv4(5432).await?;
		tracing::debug!(host = %host, port, "postgres container started");

		Ok(Self {
			container,
			settings: DatabaseSettings {
				host,
				port,
				user: username.to_string(),
				password: password.to_string(),
				database: database.to_string(),
			},
		})
	}

	pub fn settings(&self) -> &DatabaseSettings {
		&self.settings
	}

	pub fn connection_url(&self) -> String {
		self.settings.connection_url()
	}

	/// Open a pool sized by [`PoolSettings::from_env`](crate::config::PoolSettings::from_env)
	pub async fn connect(&self) -> Result<sqlx::PgPool, sqlx::Error> {
		self.settings.connect().await
	}
}

/// Fixture providing a running PostgreSQL container
#[fixture]
pub async fn postgres_container() -> PostgresContainer {
	PostgresContainer::start()
		.await
		.expect("Failed to start PostgreSQL container")
}
