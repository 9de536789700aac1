//! INSERT rendering across backends: single rows, extended inserts, NULLs,
//! and statement-level error handling.

mod common;

use common::{mysql_ident, pg_ident};
use granite_query::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn insert_single_row_mysql() {
	let mut stmt = Query::insert();
	stmt.into_table("users")
		.columns(["name", "email"])
		.values_panic(["Alice", "alice@example.com"]);

	let (sql, values) = MySqlQueryBuilder::new().build_insert(&stmt);
	assert_eq!(
		sql,
		format!(
			"INSERT INTO {} ({}, {}) VALUES (?, ?)",
			mysql_ident("users"),
			mysql_ident("name"),
			mysql_ident("email")
		)
	);
	assert_eq!(values.len(), 2);
}

#[test]
fn insert_single_row_postgres() {
	let mut stmt = Query::insert();
	stmt.into_table("users")
		.columns(["name", "email"])
		.values_panic(["Alice", "alice@example.com"]);

	let (sql, values) = PostgresQueryBuilder::new().build_insert(&stmt);
	assert_eq!(
		sql,
		format!(
			"INSERT INTO {} ({}, {}) VALUES ($1, $2)",
			pg_ident("users"),
			pg_ident("name"),
			pg_ident("email")
		)
	);
	assert_eq!(values.len(), 2);
}

#[test]
fn insert_single_row_sqlite() {
	let mut stmt = Query::insert();
	stmt.into_table("users")
		.columns(["name", "email"])
		.values_panic(["Alice", "alice@example.com"]);

	let (sql, values) = SqliteQueryBuilder::new().build_insert(&stmt);
	assert_eq!(
		sql,
		format!(
			"INSERT INTO {} ({}, {}) VALUES (?, ?)",
			pg_ident("users"),
			pg_ident("name"),
			pg_ident("email")
		)
	);
	assert_eq!(values.len(), 2);
}

#[test]
fn extended_insert_renders_rows_in_queue_order() {
	let mut stmt = Query::insert();
	stmt.into_table("users")
		.columns(["name"])
		.values_panic(["Alice"])
		.values_panic(["Bob"])
		.values_panic(["Carol"]);

	let (sql, values) = MySqlQueryBuilder::new().build_insert(&stmt);
	assert_eq!(sql, "INSERT INTO `users` (`name`) VALUES (?), (?), (?)");
	assert_eq!(values.len(), 3);

	let rendered: Vec<String> = values.iter().map(|v| v.to_sql_literal()).collect();
	assert_eq!(rendered, vec!["'Alice'", "'Bob'", "'Carol'"]);
}

#[test]
fn extended_insert_numbers_placeholders_across_rows() {
	let mut stmt = Query::insert();
	stmt.into_table("pairs")
		.columns(["a", "b"])
		.values_panic([1i32, 2i32])
		.values_panic([3i32, 4i32])
		.values_panic([5i32, 6i32]);

	let (sql, values) = PostgresQueryBuilder::new().build_insert(&stmt);
	assert_eq!(
		sql,
		r#"INSERT INTO "pairs" ("a", "b") VALUES ($1, $2), ($3, $4), ($5, $6)"#
	);
	assert_eq!(values.len(), 6);
}

#[test]
fn null_values_are_inlined_and_skip_binding() {
	let mut stmt = Query::insert();
	stmt.into_table("users")
		.columns(["name", "email"])
		.values_panic(["Alice".into_value(), Value::String(None)]);

	let (sql, values) = PostgresQueryBuilder::new().build_insert(&stmt);
	assert_eq!(
		sql,
		r#"INSERT INTO "users" ("name", "email") VALUES ($1, NULL)"#
	);
	assert_eq!(values.len(), 1);
}

#[test]
fn identifier_escaping_in_column_names() {
	let mut stmt = Query::insert();
	stmt.into_table("logs")
		.columns(["weird`col"])
		.values_panic(["x"]);

	let (sql, _) = MySqlQueryBuilder::new().build_insert(&stmt);
	assert_eq!(sql, "INSERT INTO `logs` (`weird``col`) VALUES (?)");
}

#[test]
fn values_arity_mismatch_is_an_error() {
	let mut stmt = Query::insert();
	stmt.into_table("users").columns(["name", "email"]);

	let result = stmt.values(vec!["Alice".into()]);
	assert_eq!(
		result.err(),
		Some(QueryError::ValueCountMismatch {
			expected: 2,
			got: 1
		})
	);
}

#[test]
fn values_arity_error_message_names_both_counts() {
	let err = QueryError::ValueCountMismatch {
		expected: 3,
		got: 1,
	};
	assert_eq!(
		err.to_string(),
		"number of values (1) does not match number of columns (3)"
	);
}

#[test]
fn build_through_statement_trait_dispatches_by_backend() {
	let mut stmt = Query::insert();
	stmt.into_table("users")
		.columns(["name"])
		.values_panic(["Alice"]);

	let (mysql_sql, _) = stmt.build(MySqlQueryBuilder::new());
	let (pg_sql, _) = stmt.build(PostgresQueryBuilder::new());
	let (sqlite_sql, _) = stmt.build(SqliteQueryBuilder::new());

	assert_eq!(mysql_sql, "INSERT INTO `users` (`name`) VALUES (?)");
	assert_eq!(pg_sql, r#"INSERT INTO "users" ("name") VALUES ($1)"#);
	assert_eq!(sqlite_sql, r#"INSERT INTO "users" ("name") VALUES (?)"#);
}

#[test]
fn to_string_inlines_bound_values() {
	let mut stmt = Query::insert();
	stmt.into_table("users")
		.columns(["name", "age"])
		.values_panic(["O'Brien".into_value(), 41.into_value()]);

	let sql = stmt.to_string(MySqlQueryBuilder::new());
	assert_eq!(
		sql,
		"INSERT INTO `users` (`name`, `age`) VALUES ('O''Brien', 41)"
	);

	let sql = stmt.to_string(PostgresQueryBuilder::new());
	assert_eq!(
		sql,
		r#"INSERT INTO "users" ("name", "age") VALUES ('O''Brien', 41)"#
	);
}

#[test]
fn take_leaves_an_empty_statement_behind() {
	let mut stmt = Query::insert();
	stmt.into_table("users")
		.columns(["name"])
		.values_panic(["Alice"]);

	let taken = stmt.take();
	let (sql, _) = MySqlQueryBuilder::new().build_insert(&taken);
	assert_eq!(sql, "INSERT INTO `users` (`name`) VALUES (?)");
	assert!(stmt.get_values().map(|rows| rows.is_empty()).unwrap_or(false));
}

#[test]
fn schema_qualified_target_table() {
	let mut stmt = Query::insert();
	stmt.into_table(("analytics", "events"))
		.columns(["kind"])
		.values_panic(["click"]);

	let (sql, _) = MySqlQueryBuilder::new().build_insert(&stmt);
	assert_eq!(sql, "INSERT INTO `analytics`.`events` (`kind`) VALUES (?)");
}
