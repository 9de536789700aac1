//! SQL backend implementations
//!
//! This module provides database-specific SQL generation backends for
//! MySQL, PostgreSQL, and SQLite.

use crate::{
	query::{InsertStatement, SelectStatement},
	value::Values,
};

mod mysql;
mod postgres;
mod sql_writer;
mod sqlite;

pub use mysql::MySqlQueryBuilder;
pub use postgres::PostgresQueryBuilder;
pub use sql_writer::SqlWriter;
pub use sqlite::SqliteQueryBuilder;

/// Query builder trait for generating SQL from query statements
///
/// # Implementations
///
/// - [`MySqlQueryBuilder`] - MySQL backend
/// - [`PostgresQueryBuilder`] - PostgreSQL backend
/// - [`SqliteQueryBuilder`] - SQLite backend
///
/// # Examples
///
/// ```rust
/// use granite_query::prelude::*;
///
/// let builder = MySqlQueryBuilder::new();
/// let mut stmt = Query::insert();
/// stmt.into_table("users")
///     .columns(["name"])
///     .values_panic(["Alice"]);
///
/// let (sql, values) = builder.build_insert(&stmt);
/// assert_eq!(sql, "INSERT INTO `users` (`name`) VALUES (?)");
/// assert_eq!(values.len(), 1);
/// ```
pub trait QueryBuilder {
	/// Build INSERT statement
	///
	/// Generates SQL and parameter values for an INSERT statement.
	fn build_insert(&self, stmt: &InsertStatement) -> (String, Values);

	/// Build SELECT statement
	///
	/// Generates SQL and parameter values for a SELECT statement.
	fn build_select(&self, stmt: &SelectStatement) -> (String, Values);

	/// Escape an identifier (table name, column name, etc.)
	///
	/// # Examples
	///
	/// - PostgreSQL: `escape_identifier("user")` -> `"user"`
	/// - MySQL: `escape_identifier("user")` -> `` `user` ``
	fn escape_identifier(&self, ident: &str) -> String;

	/// Format a placeholder for the given 1-based parameter index
	///
	/// # Examples
	///
	/// - PostgreSQL: `format_placeholder(1)` -> `$1`
	/// - MySQL: `format_placeholder(1)` -> `?`
	fn format_placeholder(&self, index: usize) -> String;
}
