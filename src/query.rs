//! Existence query construction
//!
//! Builds `SELECT EXISTS (SELECT * FROM <table> WHERE <clauses>)` with one
//! `column = <placeholder>` clause per attribute, joined with ` AND `.
//! Placeholders follow the backend's dialect:
//!
//! | Backend | Placeholder | Example |
//! |---------|-------------|---------|
//! | PostgreSQL | `$N` | `SELECT EXISTS (SELECT * FROM users WHERE id = $1 AND name = $2)` |
//! | MySQL | `?` | `SELECT EXISTS (SELECT * FROM users WHERE id = ? AND name = ?)` |
//! | SQLite | `?` | `SELECT EXISTS (SELECT * FROM users WHERE id = ? AND name = ?)` |
//!
//! Table and column names are emitted verbatim; they are the caller's
//! responsibility.
//!
//! Unsigned values above `i64::MAX` cannot be bound by any driver, so they
//! are written into the clause as a plain decimal literal instead of a
//! placeholder and the database compares them as it would any numeric
//! literal.

use crate::attributes::Attributes;
use crate::error::{AssertError, Result};
use crate::value::AttributeValue;

/// A parameterized existence query ready to be executed
#[derive(Debug, Clone, PartialEq)]
pub struct ExistenceQuery {
	table: String,
	clauses: Vec<(String, AttributeValue)>,
	sql: String,
	params: Vec<AttributeValue>,
}

impl ExistenceQuery {
	/// Build the query for `table` and `attributes`
	///
	/// `placeholder` receives the 1-based index of each bound parameter.
	///
	/// # Examples
	///
	/// ```
	/// use dbassert::{attributes, ExistenceQuery};
	///
	/// let attrs = attributes! { "name" => "random string", "id" => 5 };
	/// let query = ExistenceQuery::build("users", &attrs, |i| format!("${}", i)).unwrap();
	///
	/// assert_eq!(
	///     query.sql(),
	///     "SELECT EXISTS (SELECT * FROM users WHERE id = $1 AND name = $2)"
	/// );
	/// assert_eq!(query.params().len(), 2);
	/// ```
	pub fn build<F>(table: &str, attributes: &Attributes, placeholder: F) -> Result<Self>
	where
		F: Fn(usize) -> String,
	{
		if attributes.is_empty() {
			return Err(AssertError::NoAttributes);
		}

		let mut params = Vec::with_capacity(attributes.len());
		let mut conditions = Vec::with_capacity(attributes.len());

		for (column, value) in attributes.iter() {
			let operand = match value {
				AttributeValue::Unsigned(u) if i64::try_from(*u).is_err() => u.to_string(),
				_ => {
					params.push(value.clone());
					placeholder(params.len())
				}
			};
			conditions.push(format!("{} = {}", column, operand));
		}

		let sql = format!(
			"SELECT EXISTS (SELECT * FROM {} WHERE {})",
			table,
			conditions.join(" AND ")
		);

		Ok(Self {
			table: table.to_string(),
			clauses: attributes
				.iter()
				.map(|(column, value)| (column.to_string(), value.clone()))
				.collect(),
			sql,
			params,
		})
	}

	pub fn table(&self) -> &str {
		&self.table
	}

	pub fn sql(&self) -> &str {
		&self.sql
	}

	pub fn params(&self) -> &[AttributeValue] {
		&self.params
	}

	/// Render the query with every value inlined as a literal
	///
	/// Used for logging only. Text literals are not escaped, so this string
	/// must never be sent to a database.
	///
	/// # Examples
	///
	/// ```
	/// use dbassert::{attributes, ExistenceQuery};
	///
	/// let attrs = attributes! { "name" => "random string", "score" => 1.5 };
	/// let query = ExistenceQuery::build("t", &attrs, |_| "?".to_string()).unwrap();
	///
	/// assert_eq!(
	///     query.to_inline_sql(),
	///     "SELECT EXISTS (SELECT * FROM t WHERE name = 'random string' AND score = 1.5)"
	/// );
	/// ```
	pub fn to_inline_sql(&self) -> String {
		let clauses: Vec<String> = self
			.clauses
			.iter()
			.map(|(column, value)| format!("{} = {}", column, value.to_sql_literal()))
			.collect();

		format!(
			"SELECT EXISTS (SELECT * FROM {} WHERE {})",
			self.table,
			clauses.join(" AND ")
		)
	}
}
