//! PostgreSQL query builder backend
//!
//! This module implements the SQL generation backend for PostgreSQL.

use tracing::trace;

use super::{QueryBuilder, SqlWriter, sql_writer::write_custom_with_values};
use crate::{
	expr::SimpleExpr,
	query::{
		InsertSource, InsertStatement, OnConflictAction, OnConflictTarget, OnConflictUpdate,
		QueryBuilderTrait, ReturningClause, SelectStatement,
	},
	types::{ColumnRef, Iden, TableRef},
	value::Values,
};

/// PostgreSQL query builder
///
/// This struct implements SQL generation for PostgreSQL, using the following
/// conventions:
/// - Identifiers: Double quotes (`"table_name"`)
/// - Placeholders: Numbered (`$1`, `$2`, ...)
/// - Upserts: `ON CONFLICT (cols) DO NOTHING` / `DO UPDATE SET`, with
///   `excluded.col` referring to the row that failed to insert
///
/// # Examples
///
/// ```rust
/// use granite_query::prelude::*;
///
/// let builder = PostgresQueryBuilder::new();
/// let mut stmt = Query::insert();
/// stmt.into_table("users")
///     .columns(["name"])
///     .values_panic(["Alice"]);
///
/// let (sql, values) = builder.build_insert(&stmt);
/// assert_eq!(sql, r#"INSERT INTO "users" ("name") VALUES ($1)"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PostgresQueryBuilder;

impl PostgresQueryBuilder {
	/// Create a new PostgreSQL query builder
	pub fn new() -> Self {
		Self
	}

	/// Escape an identifier for PostgreSQL
	///
	/// PostgreSQL quotes identifiers with double quotes; embedded double
	/// quotes are doubled.
	fn escape_iden(&self, ident: &str) -> String {
		let escaped = ident.replace('"', "\"\"");
		format!("\"{}\"", escaped)
	}

	/// Format a placeholder for PostgreSQL
	///
	/// PostgreSQL placeholders are numbered, 1-based.
	#[allow(clippy::unused_self)]
	fn placeholder(&self, index: usize) -> String {
		format!("${}", index)
	}

	/// Write a table reference
	fn write_table_ref(&self, writer: &mut SqlWriter, table_ref: &TableRef) {
		match table_ref {
			TableRef::Table(iden) => {
				writer.push_identifier(&iden.to_string(), |s| self.escape_iden(s));
			}
			TableRef::SchemaTable(schema, table) => {
				writer.push_identifier(&schema.to_string(), |s| self.escape_iden(s));
				writer.push(".");
				writer.push_identifier(&table.to_string(), |s| self.escape_iden(s));
			}
			TableRef::TableAlias(table, alias) => {
				writer.push_identifier(&table.to_string(), |s| self.escape_iden(s));
				writer.push_keyword("AS");
				writer.push_space();
				writer.push_identifier(&alias.to_string(), |s| self.escape_iden(s));
			}
		}
	}

	/// Write a column reference
	fn write_column_ref(&self, writer: &mut SqlWriter, col_ref: &ColumnRef) {
		match col_ref {
			ColumnRef::Column(iden) => {
				writer.push_identifier(&iden.to_string(), |s| self.escape_iden(s));
			}
			ColumnRef::TableColumn(table, col) => {
				writer.push_identifier(&table.to_string(), |s| self.escape_iden(s));
				writer.push(".");
				writer.push_identifier(&col.to_string(), |s| self.escape_iden(s));
			}
			ColumnRef::Asterisk => {
				writer.push("*");
			}
		}
	}

	/// Write a simple expression
	fn write_simple_expr(&self, writer: &mut SqlWriter, expr: &SimpleExpr) {
		match expr {
			SimpleExpr::Column(col_ref) => {
				self.write_column_ref(writer, col_ref);
			}
			SimpleExpr::Value(value) => {
				writer.push_value(value.clone(), |i| self.placeholder(i));
			}
			SimpleExpr::Binary(left, op, right) => {
				self.write_simple_expr(writer, left);
				writer.push_space();
				writer.push(op.as_str());
				writer.push_space();
				self.write_simple_expr(writer, right);
			}
			SimpleExpr::Unary(op, inner) => {
				writer.push(op.as_str());
				writer.push_space();
				self.write_simple_expr(writer, inner);
			}
			SimpleExpr::FunctionCall(func_name, args) => {
				writer.push(&func_name.to_string());
				writer.push("(");
				writer.push_list(args, ", ", |w, arg| {
					self.write_simple_expr(w, arg);
				});
				writer.push(")");
			}
			SimpleExpr::Custom(sql) => {
				writer.push(sql);
			}
			SimpleExpr::CustomWithValues(sql, values) => {
				write_custom_with_values(writer, sql, values, |i| self.placeholder(i));
			}
			SimpleExpr::Constant(keyword) => {
				writer.push(keyword.as_str());
			}
		}
	}

	/// Write the `ON CONFLICT` clause
	fn write_on_conflict(
		&self,
		writer: &mut SqlWriter,
		target: &OnConflictTarget,
		action: &OnConflictAction,
	) {
		writer.push_keyword("ON CONFLICT");

		if let OnConflictTarget::Columns(cols) = target {
			writer.push_space();
			writer.push("(");
			writer.push_list(cols, ", ", |w, col| {
				w.push_identifier(&col.to_string(), |s| self.escape_iden(s));
			});
			writer.push(")");
		}

		match action {
			OnConflictAction::DoNothing => {
				writer.push_keyword("DO NOTHING");
			}
			OnConflictAction::Update(updates) => {
				// DO UPDATE without a conflict target is invalid in the
				// PostgreSQL grammar
				if matches!(target, OnConflictTarget::None) {
					panic!(
						"PostgreSQL requires conflict target columns for DO UPDATE upserts. Use OnConflict::column(..) or OnConflict::columns(..)."
					);
				}
				writer.push_keyword("DO UPDATE SET");
				writer.push_space();
				writer.push_list(updates, ", ", |w, update| match update {
					OnConflictUpdate::Column(col) => {
						let iden = col.to_string();
						w.push_identifier(&iden, |s| self.escape_iden(s));
						w.push(" = ");
						w.push_identifier("excluded", |s| self.escape_iden(s));
						w.push(".");
						w.push_identifier(&iden, |s| self.escape_iden(s));
					}
					OnConflictUpdate::Value(col, value) => {
						w.push_identifier(&col.to_string(), |s| self.escape_iden(s));
						w.push(" = ");
						w.push_value(value.clone(), |i| self.placeholder(i));
					}
					OnConflictUpdate::Expr(col, expr) => {
						w.push_identifier(&col.to_string(), |s| self.escape_iden(s));
						w.push(" = ");
						self.write_simple_expr(w, expr);
					}
				});
			}
		}
	}

	/// Write the `RETURNING` clause
	fn write_returning(&self, writer: &mut SqlWriter, returning: &ReturningClause) {
		writer.push_keyword("RETURNING");
		writer.push_space();

		match returning {
			ReturningClause::All => {
				writer.push("*");
			}
			ReturningClause::Columns(cols) => {
				writer.push_list(cols, ", ", |w, col| {
					self.write_column_ref(w, col);
				});
			}
		}
	}
}

impl QueryBuilder for PostgresQueryBuilder {
	fn build_insert(&self, stmt: &InsertStatement) -> (String, Values) {
		let mut writer = SqlWriter::new();

		// INSERT INTO clause
		writer.push("INSERT INTO");
		writer.push_space();

		if let Some(table) = &stmt.table {
			self.write_table_ref(&mut writer, table);
		} else {
			panic!("INSERT requires a target table. Call into_table() before building.");
		}

		// Column list
		if !stmt.columns.is_empty() {
			writer.push_space();
			writer.push("(");
			writer.push_list(&stmt.columns, ", ", |w, col| {
				w.push_identifier(&col.to_string(), |s| self.escape_iden(s));
			});
			writer.push(")");
		}

		// Row source
		match &stmt.source {
			InsertSource::Values(rows) => {
				if !rows.is_empty() {
					writer.push_keyword("VALUES");
					writer.push_space();

					writer.push_list(rows, ", ", |w, row| {
						w.push("(");
						w.push_list(row, ", ", |w2, value| {
							w2.push_value(value.clone(), |i| self.placeholder(i));
						});
						w.push(")");
					});
				}
			}
			InsertSource::Subquery(select) => {
				writer.push_space();

				// Nothing before the row source binds parameters, so the
				// subquery's $n numbering is already aligned; append_values
				// keeps later (upsert) placeholders in sequence.
				let (subquery_sql, subquery_values) = self.build_select(select);
				writer.push(&subquery_sql);
				writer.append_values(&subquery_values);
			}
			InsertSource::DefaultValues => {
				writer.push_keyword("DEFAULT VALUES");
			}
		}

		// Upsert clause
		if let Some(on_conflict) = &stmt.on_conflict {
			self.write_on_conflict(&mut writer, &on_conflict.target, &on_conflict.action);
		}

		// RETURNING clause (PostgreSQL specific)
		if let Some(returning) = &stmt.returning {
			self.write_returning(&mut writer, returning);
		}

		let (sql, values) = writer.finish();
		trace!(target: "granite_query", %sql, "built INSERT statement");
		(sql, values)
	}

	fn build_select(&self, stmt: &SelectStatement) -> (String, Values) {
		let mut writer = SqlWriter::new();

		// SELECT clause
		writer.push("SELECT");
		writer.push_space();

		if stmt.selects.is_empty() {
			writer.push("*");
		} else {
			writer.push_list(&stmt.selects, ", ", |w, select_expr| {
				self.write_simple_expr(w, &select_expr.expr);
				if let Some(alias) = &select_expr.alias {
					w.push_keyword("AS");
					w.push_space();
					w.push_identifier(&alias.to_string(), |s| self.escape_iden(s));
				}
			});
		}

		// FROM clause
		if !stmt.from.is_empty() {
			writer.push_keyword("FROM");
			writer.push_space();
			writer.push_list(&stmt.from, ", ", |w, table_ref| {
				self.write_table_ref(w, table_ref);
			});
		}

		// WHERE clause
		if !stmt.wheres.is_empty() {
			writer.push_keyword("WHERE");
			writer.push_space();
			writer.push_list(&stmt.wheres, " AND ", |w, expr| {
				self.write_simple_expr(w, expr);
			});
		}

		// ORDER BY clause
		if !stmt.orders.is_empty() {
			writer.push_keyword("ORDER BY");
			writer.push_space();
			writer.push_list(&stmt.orders, ", ", |w, order_expr| {
				self.write_simple_expr(w, &order_expr.expr);
				w.push_keyword(order_expr.order.as_str());
			});
		}

		// LIMIT clause
		if let Some(limit) = &stmt.limit {
			writer.push_keyword("LIMIT");
			writer.push_space();
			writer.push_value(limit.clone(), |i| self.placeholder(i));
		}

		// OFFSET clause
		if let Some(offset) = &stmt.offset {
			writer.push_keyword("OFFSET");
			writer.push_space();
			writer.push_value(offset.clone(), |i| self.placeholder(i));
		}

		let (sql, values) = writer.finish();
		trace!(target: "granite_query", %sql, "built SELECT statement");
		(sql, values)
	}

	fn escape_identifier(&self, ident: &str) -> String {
		self.escape_iden(ident)
	}

	fn format_placeholder(&self, index: usize) -> String {
		self.placeholder(index)
	}
}

impl QueryBuilderTrait for PostgresQueryBuilder {
	fn placeholder(&self) -> (&str, bool) {
		("$", true)
	}

	fn quote_char(&self) -> char {
		'"'
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::expr::{Expr, ExprTrait};
	use crate::query::{OnConflict, Query};
	use pretty_assertions::assert_eq;

	#[test]
	fn test_escape_identifier() {
		let builder = PostgresQueryBuilder::new();
		assert_eq!(builder.escape_identifier("user"), "\"user\"");
		assert_eq!(builder.escape_identifier("we\"ird"), "\"we\"\"ird\"");
	}

	#[test]
	fn test_format_placeholder() {
		let builder = PostgresQueryBuilder::new();
		assert_eq!(builder.format_placeholder(1), "$1");
		assert_eq!(builder.format_placeholder(12), "$12");
	}

	#[test]
	fn test_insert_basic() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("users")
			.columns(["name", "email"])
			.values_panic(["Alice", "alice@example.com"]);

		let (sql, values) = builder.build_insert(&stmt);
		assert_eq!(
			sql,
			r#"INSERT INTO "users" ("name", "email") VALUES ($1, $2)"#
		);
		assert_eq!(values.len(), 2);
	}

	#[test]
	fn test_insert_extended_placeholder_numbering() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("users")
			.columns(["name", "email"])
			.values_panic(["Alice", "alice@example.com"])
			.values_panic(["Bob", "bob@example.com"]);

		let (sql, values) = builder.build_insert(&stmt);
		assert_eq!(
			sql,
			r#"INSERT INTO "users" ("name", "email") VALUES ($1, $2), ($3, $4)"#
		);
		assert_eq!(values.len(), 4);
	}

	#[test]
	fn test_insert_on_conflict_update_columns() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("users")
			.columns(["id", "name"])
			.values_panic([crate::value::Value::Int(Some(1)), "Alice".into()])
			.on_conflict(OnConflict::column("id").update_columns(["name"]));

		let (sql, values) = builder.build_insert(&stmt);
		assert_eq!(
			sql,
			r#"INSERT INTO "users" ("id", "name") VALUES ($1, $2) ON CONFLICT ("id") DO UPDATE SET "name" = "excluded"."name""#
		);
		assert_eq!(values.len(), 2);
	}

	#[test]
	fn test_insert_on_conflict_do_nothing() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("users")
			.columns(["id"])
			.values_panic([1i32])
			.on_conflict(OnConflict::column("id").do_nothing());

		let (sql, _values) = builder.build_insert(&stmt);
		assert_eq!(
			sql,
			r#"INSERT INTO "users" ("id") VALUES ($1) ON CONFLICT ("id") DO NOTHING"#
		);
	}

	#[test]
	fn test_insert_on_conflict_do_nothing_without_target() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("users")
			.columns(["id"])
			.values_panic([1i32])
			.on_conflict(OnConflict::new().do_nothing());

		let (sql, _values) = builder.build_insert(&stmt);
		assert_eq!(
			sql,
			r#"INSERT INTO "users" ("id") VALUES ($1) ON CONFLICT DO NOTHING"#
		);
	}

	#[test]
	#[should_panic(expected = "PostgreSQL requires conflict target columns")]
	fn test_insert_do_update_without_target_panics() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("users")
			.columns(["id", "name"])
			.values_panic([crate::value::Value::Int(Some(1)), "Alice".into()])
			.on_conflict(OnConflict::new().update_columns(["name"]));

		let _ = builder.build_insert(&stmt);
	}

	#[test]
	fn test_insert_on_conflict_value_placeholder_numbering() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("counters")
			.columns(["key", "hits"])
			.values_panic(["home", "1"])
			.on_conflict(OnConflict::column("key").value("hits", 2i32));

		let (sql, values) = builder.build_insert(&stmt);
		assert_eq!(
			sql,
			r#"INSERT INTO "counters" ("key", "hits") VALUES ($1, $2) ON CONFLICT ("key") DO UPDATE SET "hits" = $3"#
		);
		assert_eq!(values.len(), 3);
	}

	#[test]
	fn test_insert_returning() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("users")
			.columns(["name"])
			.values_panic(["Alice"])
			.returning(["id", "created_at"]);

		let (sql, _values) = builder.build_insert(&stmt);
		assert_eq!(
			sql,
			r#"INSERT INTO "users" ("name") VALUES ($1) RETURNING "id", "created_at""#
		);
	}

	#[test]
	fn test_insert_returning_all() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("users")
			.columns(["name"])
			.values_panic(["Alice"])
			.returning_all();

		let (sql, _values) = builder.build_insert(&stmt);
		assert_eq!(sql, r#"INSERT INTO "users" ("name") VALUES ($1) RETURNING *"#);
	}

	#[test]
	fn test_insert_default_values() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("audit_log").or_default_values();

		let (sql, values) = builder.build_insert(&stmt);
		assert_eq!(sql, r#"INSERT INTO "audit_log" DEFAULT VALUES"#);
		assert_eq!(values.len(), 0);
	}

	#[test]
	fn test_insert_from_select_renumbers_placeholders() {
		let builder = PostgresQueryBuilder::new();
		let select = Query::select()
			.column("name")
			.from("staged_users")
			.and_where(Expr::col("active").eq(true))
			.to_owned();

		let mut stmt = Query::insert();
		stmt.into_table("users").columns(["name"]).from_select(select);

		let (sql, values) = builder.build_insert(&stmt);
		assert_eq!(
			sql,
			r#"INSERT INTO "users" ("name") SELECT "name" FROM "staged_users" WHERE "active" = $1"#
		);
		assert_eq!(values.len(), 1);
	}

	#[test]
	fn test_insert_from_select_then_upsert_numbering() {
		let builder = PostgresQueryBuilder::new();
		let select = Query::select()
			.column("key")
			.column("hits")
			.from("staged")
			.and_where(Expr::col("hits").gt(0))
			.to_owned();

		let mut stmt = Query::insert();
		stmt.into_table("counters")
			.columns(["key", "hits"])
			.from_select(select)
			.on_conflict(OnConflict::column("key").value("hits", 0i32));

		let (sql, values) = builder.build_insert(&stmt);
		assert_eq!(
			sql,
			r#"INSERT INTO "counters" ("key", "hits") SELECT "key", "hits" FROM "staged" WHERE "hits" > $1 ON CONFLICT ("key") DO UPDATE SET "hits" = $2"#
		);
		assert_eq!(values.len(), 2);
	}

	#[test]
	fn test_insert_schema_qualified_table() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table(("analytics", "events"))
			.columns(["kind"])
			.values_panic(["click"]);

		let (sql, _values) = builder.build_insert(&stmt);
		assert_eq!(
			sql,
			r#"INSERT INTO "analytics"."events" ("kind") VALUES ($1)"#
		);
	}

	#[test]
	fn test_select_with_where() {
		let builder = PostgresQueryBuilder::new();
		let mut stmt = Query::select();
		stmt.column("id")
			.from("users")
			.and_where(Expr::col("active").eq(true))
			.limit(10);

		let (sql, values) = builder.build_select(&stmt);
		assert_eq!(
			sql,
			r#"SELECT "id" FROM "users" WHERE "active" = $1 LIMIT $2"#
		);
		assert_eq!(values.len(), 2);
	}
}
