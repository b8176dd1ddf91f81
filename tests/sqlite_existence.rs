//! Existence assertions against an in-memory SQLite database

#![cfg(feature = "sqlite")]

use dbassert::backends::SqliteBackend;
use dbassert::fixtures::{recording_reporter, sqlite_backend};
use dbassert::logging::init_test_logging;
use dbassert::{AssertError, Attributes, DbAssert, RecordingReporter, attributes};
use rstest::*;
use serde_json::json;

const TABLE_NAME: &str = "dbassert_test";

/// SQLite backend with `dbassert_test(id, name, score)` holding one row
#[fixture]
async fn seeded(#[future] sqlite_backend: SqliteBackend) -> DbAssert<SqliteBackend> {
	init_test_logging();
	let backend = sqlite_backend.await;

	sqlx::query(&format!(
		"CREATE TABLE {} (id INTEGER PRIMARY KEY, name VARCHAR(255) NOT NULL, score REAL)",
		TABLE_NAME
	))
	.execute(backend.pool())
	.await
	.unwrap();
	sqlx::query(&format!(
		"INSERT INTO {} (id, name, score) VALUES (5, 'random string', 2.5)",
		TABLE_NAME
	))
	.execute(backend.pool())
	.await
	.unwrap();

	DbAssert::new(backend)
}

#[rstest]
#[tokio::test]
async fn test_exists_matching_row(#[future] seeded: DbAssert<SqliteBackend>) {
	let db = seeded.await;

	let result = db
		.exists(TABLE_NAME, &attributes! { "name" => "random string" })
		.await;
	assert!(result.unwrap());
}

#[rstest]
#[tokio::test]
async fn test_exists_no_matching_row(#[future] seeded: DbAssert<SqliteBackend>) {
	let db = seeded.await;

	let result = db.exists(TABLE_NAME, &attributes! { "name" => "other" }).await;
	assert!(!result.unwrap());
}

#[rstest]
#[tokio::test]
async fn test_exists_empty_attributes(#[future] seeded: DbAssert<SqliteBackend>) {
	let db = seeded.await;

	let result = db.exists(TABLE_NAME, &Attributes::new()).await;
	assert!(matches!(result, Err(AssertError::NoAttributes)));
}

#[rstest]
#[case(5, true)]
#[case(6, false)]
#[tokio::test]
async fn test_exists_integer_attribute(
	#[future] seeded: DbAssert<SqliteBackend>,
	#[case] id: i64,
	#[case] expected: bool,
) {
	let db = seeded.await;

	let result = db.exists(TABLE_NAME, &attributes! { "id" => id }).await;
	assert_eq!(result.unwrap(), expected);
}

#[rstest]
#[tokio::test]
async fn test_exists_requires_every_attribute(#[future] seeded: DbAssert<SqliteBackend>) {
	let db = seeded.await;

	let all_match = attributes! { "id" => 5u32, "name" => "random string", "score" => 2.5 };
	assert!(db.exists(TABLE_NAME, &all_match).await.unwrap());

	let one_differs = attributes! { "id" => 5u32, "name" => "random string", "score" => 3.0 };
	assert!(!db.exists(TABLE_NAME, &one_differs).await.unwrap());
}

#[rstest]
#[tokio::test]
async fn test_exists_f32_stored_by_driver(#[future] seeded: DbAssert<SqliteBackend>) {
	let db = seeded.await;
	let pool = db.checker().backend().pool();

	sqlx::query("CREATE TABLE readings (value REAL NOT NULL)")
		.execute(pool)
		.await
		.unwrap();
	sqlx::query("INSERT INTO readings (value) VALUES (?)")
		.bind(0.1f32)
		.execute(pool)
		.await
		.unwrap();

	assert!(db.exists("readings", &attributes! { "value" => 0.1f32 }).await.unwrap());
	assert!(!db.exists("readings", &attributes! { "value" => 0.1 }).await.unwrap());
}

#[rstest]
#[tokio::test]
async fn test_unsigned_beyond_i64_is_compared_not_rejected(
	#[future] seeded: DbAssert<SqliteBackend>,
	recording_reporter: RecordingReporter,
) {
	let db = seeded.await;
	let attrs = attributes! { "id" => u64::MAX };

	assert!(!db.exists(TABLE_NAME, &attrs).await.unwrap());
	assert!(db.assert_not_exists(&recording_reporter, TABLE_NAME, &attrs).await);
	recording_reporter.finish();
}

#[rstest]
#[tokio::test]
async fn test_quote_in_value_is_bound_not_injected(#[future] seeded: DbAssert<SqliteBackend>) {
	let db = seeded.await;

	let result = db
		.exists(TABLE_NAME, &attributes! { "name" => "x' OR '1'='1" })
		.await;
	assert!(!result.unwrap());
}

#[rstest]
#[tokio::test]
async fn test_exists_from_json_attributes(#[future] seeded: DbAssert<SqliteBackend>) {
	let db = seeded.await;

	let attrs = Attributes::from_json(json!({"id": 5, "name": "random string"})).unwrap();
	assert!(db.exists(TABLE_NAME, &attrs).await.unwrap());
}

#[rstest]
#[tokio::test]
async fn test_missing_table_is_database_error(
	#[future] seeded: DbAssert<SqliteBackend>,
	recording_reporter: RecordingReporter,
) {
	let db = seeded.await;
	let attrs = attributes! { "id" => 5 };

	let err = db.exists("no_such_table", &attrs).await.unwrap_err();
	assert!(matches!(err, AssertError::Database(_)));
	assert!(err.to_string().contains("no_such_table"));

	assert!(!db.assert_exists(&recording_reporter, "no_such_table", &attrs).await);
	assert!(recording_reporter.is_failed());
	let messages = recording_reporter.messages();
	assert_eq!(messages.len(), 1);
	assert!(messages[0].starts_with("database error ["));
}

#[rstest]
#[tokio::test]
async fn test_assert_exists_public(
	#[future] seeded: DbAssert<SqliteBackend>,
	recording_reporter: RecordingReporter,
) {
	let db = seeded.await;

	let result = db
		.assert_exists(
			&recording_reporter,
			TABLE_NAME,
			&attributes! { "name" => "random string" },
		)
		.await;

	assert!(result);
	recording_reporter.finish();
}

#[rstest]
#[tokio::test]
async fn test_assert_not_exists_public(
	#[future] seeded: DbAssert<SqliteBackend>,
	recording_reporter: RecordingReporter,
) {
	let db = seeded.await;

	let result = db
		.assert_not_exists(
			&recording_reporter,
			TABLE_NAME,
			&attributes! { "name" => "some string" },
		)
		.await;

	assert!(result);
	recording_reporter.finish();
}

#[rstest]
#[tokio::test]
async fn test_assert_mismatches_are_reported(
	#[future] seeded: DbAssert<SqliteBackend>,
	recording_reporter: RecordingReporter,
) {
	let db = seeded.await;

	assert!(
		!db.assert_exists(&recording_reporter, TABLE_NAME, &attributes! { "name" => "other" })
			.await
	);
	assert!(
		!db.assert_not_exists(&recording_reporter, TABLE_NAME, &attributes! { "id" => 5 })
			.await
	);

	assert!(recording_reporter.is_failed());
	assert_eq!(
		recording_reporter.messages(),
		vec![
			r#"unable to find row in database table [dbassert_test] that matched attributes [{"name":"other"}]"#
				.to_string(),
			r#"found unexpected records in database table [dbassert_test] that matched attributes [{"id":5}]"#
				.to_string(),
		]
	);
}
