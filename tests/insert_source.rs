//! Row-source handling: `INSERT ... SELECT`, default-value rows, and the
//! RETURNING clause.

mod common;

use common::pg_ident;
use granite_query::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn insert_from_select_mysql() {
	let select = Query::select()
		.column("name")
		.column("email")
		.from("staged_users")
		.to_owned();

	let mut stmt = Query::insert();
	stmt.into_table("users")
		.columns(["name", "email"])
		.from_select(select);

	let (sql, values) = MySqlQueryBuilder::new().build_insert(&stmt);
	assert_eq!(
		sql,
		"INSERT INTO `users` (`name`, `email`) SELECT `name`, `email` FROM `staged_users`"
	);
	assert_eq!(values.len(), 0);
}

#[test]
fn insert_from_filtered_select_binds_subquery_values() {
	let select = Query::select()
		.column("name")
		.from("staged_users")
		.and_where(Expr::col("active").eq(true))
		.and_where(Expr::col("age").gte(18))
		.to_owned();

	let mut stmt = Query::insert();
	stmt.into_table("users").columns(["name"]).from_select(select);

	let (sql, values) = PostgresQueryBuilder::new().build_insert(&stmt);
	assert_eq!(
		sql,
		r#"INSERT INTO "users" ("name") SELECT "name" FROM "staged_users" WHERE "active" = $1 AND "age" >= $2"#
	);
	assert_eq!(values.len(), 2);
}

#[test]
fn insert_from_select_with_order_and_limit() {
	let select = Query::select()
		.column("name")
		.from("staged_users")
		.order_by("created_at", Order::Desc)
		.limit(100)
		.to_owned();

	let mut stmt = Query::insert();
	stmt.into_table("users").columns(["name"]).from_select(select);

	let (sql, values) = SqliteQueryBuilder::new().build_insert(&stmt);
	assert_eq!(
		sql,
		r#"INSERT INTO "users" ("name") SELECT "name" FROM "staged_users" ORDER BY "created_at" DESC LIMIT ?"#
	);
	assert_eq!(values.len(), 1);
}

#[test]
fn insert_from_select_replaces_queued_rows() {
	let mut stmt = Query::insert();
	stmt.into_table("users")
		.columns(["name"])
		.values_panic(["Alice"])
		.from_select(Query::select().column("name").from("staged_users").to_owned());

	let (sql, values) = MySqlQueryBuilder::new().build_insert(&stmt);
	assert_eq!(
		sql,
		"INSERT INTO `users` (`name`) SELECT `name` FROM `staged_users`"
	);
	assert_eq!(values.len(), 0);
}

#[test]
fn default_values_row() {
	let mut stmt = Query::insert();
	stmt.into_table("audit_log").or_default_values();

	let (sql, _) = MySqlQueryBuilder::new().build_insert(&stmt);
	assert_eq!(sql, "INSERT INTO `audit_log` () VALUES ()");

	let (sql, _) = PostgresQueryBuilder::new().build_insert(&stmt);
	assert_eq!(sql, r#"INSERT INTO "audit_log" DEFAULT VALUES"#);

	let (sql, _) = SqliteQueryBuilder::new().build_insert(&stmt);
	assert_eq!(sql, r#"INSERT INTO "audit_log" DEFAULT VALUES"#);
}

#[test]
fn returning_columns_postgres() {
	let mut stmt = Query::insert();
	stmt.into_table("users")
		.columns(["name"])
		.values_panic(["Alice"])
		.returning(["id", "created_at"]);

	let (sql, _) = PostgresQueryBuilder::new().build_insert(&stmt);
	assert_eq!(
		sql,
		format!(
			"INSERT INTO {t} ({n}) VALUES ($1) RETURNING {id}, {ca}",
			t = pg_ident("users"),
			n = pg_ident("name"),
			id = pg_ident("id"),
			ca = pg_ident("created_at")
		)
	);
}

#[test]
fn returning_single_column_sqlite() {
	let mut stmt = Query::insert();
	stmt.into_table("users")
		.columns(["name"])
		.values_panic(["Alice"])
		.returning_col("id");

	let (sql, _) = SqliteQueryBuilder::new().build_insert(&stmt);
	assert_eq!(sql, r#"INSERT INTO "users" ("name") VALUES (?) RETURNING "id""#);
}

#[test]
fn returning_all_postgres() {
	let mut stmt = Query::insert();
	stmt.into_table("users")
		.columns(["name"])
		.values_panic(["Alice"])
		.returning_all();

	let (sql, _) = PostgresQueryBuilder::new().build_insert(&stmt);
	assert_eq!(sql, r#"INSERT INTO "users" ("name") VALUES ($1) RETURNING *"#);
}

#[test]
#[should_panic(expected = "MySQL does not support RETURNING clause")]
fn returning_on_mysql_panics() {
	let mut stmt = Query::insert();
	stmt.into_table("users")
		.columns(["name"])
		.values_panic(["Alice"])
		.returning_all();

	let _ = MySqlQueryBuilder::new().build_insert(&stmt);
}

#[test]
fn returning_after_upsert() {
	let mut stmt = Query::insert();
	stmt.into_table("users")
		.columns(["id", "name"])
		.values_panic([1.into_value(), "Alice".into_value()])
		.on_conflict(OnConflict::column("id").update_columns(["name"]))
		.returning_col("id");

	let (sql, _) = PostgresQueryBuilder::new().build_insert(&stmt);
	assert_eq!(
		sql,
		r#"INSERT INTO "users" ("id", "name") VALUES ($1, $2) ON CONFLICT ("id") DO UPDATE SET "name" = "excluded"."name" RETURNING "id""#
	);
}
