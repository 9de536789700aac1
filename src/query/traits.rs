//! Query statement traits
//!
//! This module defines the traits shared by the statement builders and the
//! database backends.

use std::{any::Any, fmt::Debug};

use crate::value::Values;

/// Trait for building query statements
///
/// Provides the methods to render a statement for a database backend and
/// collect its bound parameters.
pub trait QueryStatementBuilder: Debug {
	/// Build SQL for a backend and collect bound parameters
	///
	/// This is the primary method for generating parameterized SQL.
	///
	/// # Examples
	///
	/// ```rust
	/// use granite_query::prelude::*;
	///
	/// let mut query = Query::insert();
	/// query
	///     .into_table("users")
	///     .columns(["name"])
	///     .values_panic(["Alice"]);
	///
	/// let (sql, values) = query.build(PostgresQueryBuilder::new());
	/// assert_eq!(sql, r#"INSERT INTO "users" ("name") VALUES ($1)"#);
	/// assert_eq!(values.len(), 1);
	/// ```
	fn build_any(&self, query_builder: &dyn QueryBuilderTrait) -> (String, Values);

	/// Build SQL with parameter collection
	///
	/// Convenience wrapper around [`build_any`](Self::build_any) taking a
	/// concrete builder type.
	fn build<T: QueryBuilderTrait>(&self, query_builder: T) -> (String, Values)
	where
		Self: Sized,
	{
		self.build_any(&query_builder)
	}

	/// Render SQL with the bound values inlined as literals
	///
	/// Intended for inspection and logging; the inlining is textual and does
	/// not attempt to parse the SQL, so placeholder-shaped text inside string
	/// literals would be substituted too.
	///
	/// # Examples
	///
	/// ```rust
	/// use granite_query::prelude::*;
	///
	/// let mut query = Query::insert();
	/// query
	///     .into_table("users")
	///     .columns(["name"])
	///     .values_panic(["Alice"]);
	///
	/// let sql = query.to_string(MySqlQueryBuilder::new());
	/// assert_eq!(sql, "INSERT INTO `users` (`name`) VALUES ('Alice')");
	/// ```
	fn to_string<T: QueryBuilderTrait>(&self, query_builder: T) -> String
	where
		Self: Sized,
	{
		let (sql, values) = self.build_any(&query_builder);
		inline_values(&sql, &values, query_builder.placeholder())
	}
}

/// Trait for query statement writers
///
/// Marker extending [`QueryStatementBuilder`]; implemented by every
/// statement type this crate can render.
pub trait QueryStatementWriter: QueryStatementBuilder {}

/// Capability surface of a database backend
///
/// Describes the backend-specific syntax knobs needed for dynamic dispatch
/// from [`QueryStatementBuilder::build_any`].
pub trait QueryBuilderTrait: Debug + Any {
	/// Get placeholder format for this backend
	///
	/// Returns a tuple of (placeholder_prefix, is_numbered):
	/// - PostgreSQL: ("$", true) -> $1, $2, $3...
	/// - MySQL: ("?", false) -> ?, ?, ?...
	/// - SQLite: ("?", false) -> ?, ?, ?...
	fn placeholder(&self) -> (&str, bool);

	/// Get quote character for this backend
	///
	/// - PostgreSQL: " (double quote)
	/// - MySQL: ` (backtick)
	/// - SQLite: " (double quote)
	fn quote_char(&self) -> char;
}

/// Substitute placeholders with SQL literals.
fn inline_values(sql: &str, values: &Values, placeholder: (&str, bool)) -> String {
	let (prefix, numbered) = placeholder;
	if numbered {
		let mut out = sql.to_string();
		// Highest index first so $1 does not clobber $10
		for (i, value) in values.iter().enumerate().rev() {
			out = out.replace(&format!("{}{}", prefix, i + 1), &value.to_sql_literal());
		}
		out
	} else {
		let mut out = String::with_capacity(sql.len());
		let mut rest = sql;
		let mut iter = values.iter();
		while let Some(pos) = rest.find(prefix) {
			out.push_str(&rest[..pos]);
			match iter.next() {
				Some(value) => out.push_str(&value.to_sql_literal()),
				None => out.push_str(prefix),
			}
			rest = &rest[pos + prefix.len()..];
		}
		out.push_str(rest);
		out
	}
}
