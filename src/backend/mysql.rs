//! MySQL query builder backend
//!
//! This module implements the SQL generation backend for MySQL.

use tracing::trace;

use super::{QueryBuilder, SqlWriter, sql_writer::write_custom_with_values};
use crate::{
	expr::SimpleExpr,
	query::{
		InsertSource, InsertStatement, OnConflictAction, OnConflictTarget, OnConflictUpdate,
		QueryBuilderTrait, SelectStatement,
	},
	types::{ColumnRef, Iden, TableRef},
	value::Values,
};

/// MySQL query builder
///
/// This struct implements SQL generation for MySQL, using the following
/// conventions:
/// - Identifiers: Backticks (`` `table_name` ``)
/// - Placeholders: Question marks (`?`)
/// - Upserts: `ON DUPLICATE KEY UPDATE`, with `VALUES(col)` referring to the
///   row that failed to insert
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
/// ```
///
/// # Limitations
///
/// - The RETURNING clause is not supported (will panic if used)
/// - `DO NOTHING` upserts require conflict target columns (rendered as
///   self-assignments)
#[derive(Debug, Clone, Default)]
pub struct MySqlQueryBuilder;

impl MySqlQueryBuilder {
	/// Create a new MySQL query builder
	pub fn new() -> Self {
		Self
	}

	/// Escape an identifier for MySQL
	///
	/// MySQL quotes identifiers with backticks; embedded backticks are
	/// doubled.
	fn escape_iden(&self, ident: &str) -> String {
		let escaped = ident.replace('`', "``");
		format!("`{}`", escaped)
	}

	/// Format a placeholder for MySQL
	///
	/// MySQL placeholders are positional question marks, so the index is
	/// ignored.
	#[allow(clippy::unused_self)]
	fn placeholder(&self, _index: usize) -> String {
		"?".to_string()
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

	/// Write the `ON DUPLICATE KEY UPDATE` clause
	fn write_on_duplicate(
		&self,
		writer: &mut SqlWriter,
		target: &OnConflictTarget,
		action: &OnConflictAction,
	) {
		writer.push_keyword("ON DUPLICATE KEY UPDATE");
		writer.push_space();

		match action {
			OnConflictAction::DoNothing => {
				// MySQL has no DO NOTHING form; self-assigning the conflict
				// columns makes the collision a no-op.
				let OnConflictTarget::Columns(cols) = target else {
					panic!(
						"MySQL requires conflict target columns for DO NOTHING upserts. Use OnConflict::column(..) or OnConflict::columns(..)."
					);
				};
				writer.push_list(cols, ", ", |w, col| {
					let iden = col.to_string();
					w.push_identifier(&iden, |s| self.escape_iden(s));
					w.push(" = ");
					w.push_identifier(&iden, |s| self.escape_iden(s));
				});
			}
			OnConflictAction::Update(updates) => {
				writer.push_list(updates, ", ", |w, update| match update {
					OnConflictUpdate::Column(col) => {
						let iden = col.to_string();
						w.push_identifier(&iden, |s| self.escape_iden(s));
						w.push(" = VALUES(");
						w.push_identifier(&iden, |s| self.escape_iden(s));
						w.push(")");
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
}

impl QueryBuilder for MySqlQueryBuilder {
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

				// Positional ? placeholders need no renumbering
				let (subquery_sql, subquery_values) = self.build_select(select);
				writer.push(&subquery_sql);
				writer.append_values(&subquery_values);
			}
			InsertSource::DefaultValues => {
				// MySQL spells an all-defaults row as an empty value list
				if stmt.columns.is_empty() {
					writer.push_space();
					writer.push("()");
				}
				writer.push_keyword("VALUES");
				writer.push_space();
				writer.push("()");
			}
		}

		// Upsert clause
		if let Some(on_conflict) = &stmt.on_conflict {
			self.write_on_duplicate(&mut writer, &on_conflict.target, &on_conflict.action);
		}

		// RETURNING clause - NOT SUPPORTED in MySQL
		if stmt.returning.is_some() {
			panic!("MySQL does not support RETURNING clause. Use LAST_INSERT_ID() instead.");
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

impl QueryBuilderTrait for MySqlQueryBuilder {
	fn placeholder(&self) -> (&str, bool) {
		("?", false)
	}

	fn quote_char(&self) -> char {
		'`'
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::query::{OnConflict, Query};
	use pretty_assertions::assert_eq;

	#[test]
	fn test_escape_identifier() {
		let builder = MySqlQueryBuilder::new();
		assert_eq!(builder.escape_identifier("user"), "`user`");
		assert_eq!(builder.escape_identifier("user`name"), "`user``name`");
	}

	#[test]
	fn test_format_placeholder() {
		let builder = MySqlQueryBuilder::new();
		assert_eq!(builder.format_placeholder(1), "?");
		assert_eq!(builder.format_placeholder(10), "?");
	}

	#[test]
	fn test_insert_basic() {
		let builder = MySqlQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("users")
			.columns(["name", "email"])
			.values_panic(["Alice", "alice@example.com"]);

		let (sql, values) = builder.build_insert(&stmt);
		assert_eq!(sql, "INSERT INTO `users` (`name`, `email`) VALUES (?, ?)");
		assert_eq!(values.len(), 2);
	}

	#[test]
	fn test_insert_extended() {
		let builder = MySqlQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("users")
			.columns(["name", "email"])
			.values_panic(["Alice", "alice@example.com"])
			.values_panic(["Bob", "bob@example.com"]);

		let (sql, values) = builder.build_insert(&stmt);
		assert_eq!(
			sql,
			"INSERT INTO `users` (`name`, `email`) VALUES (?, ?), (?, ?)"
		);
		assert_eq!(values.len(), 4);
	}

	#[test]
	fn test_insert_on_duplicate_update_columns() {
		let builder = MySqlQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("users")
			.columns(["id", "name"])
			.values_panic([crate::value::Value::Int(Some(1)), "Alice".into()])
			.on_conflict(OnConflict::column("id").update_columns(["name"]));

		let (sql, values) = builder.build_insert(&stmt);
		assert_eq!(
			sql,
			"INSERT INTO `users` (`id`, `name`) VALUES (?, ?) ON DUPLICATE KEY UPDATE `name` = VALUES(`name`)"
		);
		assert_eq!(values.len(), 2);
	}

	#[test]
	fn test_insert_on_duplicate_do_nothing() {
		let builder = MySqlQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("users")
			.columns(["id", "name"])
			.values_panic([crate::value::Value::Int(Some(1)), "Alice".into()])
			.on_conflict(OnConflict::column("id").do_nothing());

		let (sql, _values) = builder.build_insert(&stmt);
		assert_eq!(
			sql,
			"INSERT INTO `users` (`id`, `name`) VALUES (?, ?) ON DUPLICATE KEY UPDATE `id` = `id`"
		);
	}

	#[test]
	#[should_panic(expected = "MySQL requires conflict target columns")]
	fn test_insert_do_nothing_without_target_panics() {
		let builder = MySqlQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("users")
			.columns(["id"])
			.values_panic([1i32])
			.on_conflict(OnConflict::new().do_nothing());

		let _ = builder.build_insert(&stmt);
	}

	#[test]
	fn test_insert_on_duplicate_with_value() {
		let builder = MySqlQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("counters")
			.columns(["key", "hits"])
			.values_panic(["home", "1"])
			.on_conflict(OnConflict::column("key").value("hits", 2i32));

		let (sql, values) = builder.build_insert(&stmt);
		assert_eq!(
			sql,
			"INSERT INTO `counters` (`key`, `hits`) VALUES (?, ?) ON DUPLICATE KEY UPDATE `hits` = ?"
		);
		assert_eq!(values.len(), 3);
	}

	#[test]
	fn test_insert_default_values() {
		let builder = MySqlQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("audit_log").or_default_values();

		let (sql, values) = builder.build_insert(&stmt);
		assert_eq!(sql, "INSERT INTO `audit_log` () VALUES ()");
		assert_eq!(values.len(), 0);
	}

	#[test]
	fn test_insert_from_select() {
		let builder = MySqlQueryBuilder::new();
		let select = Query::select()
			.column("name")
			.column("email")
			.from("staged_users")
			.to_owned();

		let mut stmt = Query::insert();
		stmt.into_table("users")
			.columns(["name", "email"])
			.from_select(select);

		let (sql, values) = builder.build_insert(&stmt);
		assert_eq!(
			sql,
			"INSERT INTO `users` (`name`, `email`) SELECT `name`, `email` FROM `staged_users`"
		);
		assert_eq!(values.len(), 0);
	}

	#[test]
	#[should_panic(expected = "MySQL does not support RETURNING clause")]
	fn test_insert_with_returning_panics() {
		let builder = MySqlQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("users")
			.columns(["name"])
			.values_panic(["Alice"])
			.returning(["id", "created_at"]);

		let _ = builder.build_insert(&stmt);
	}

	#[test]
	#[should_panic(expected = "INSERT requires a target table")]
	fn test_insert_without_table_panics() {
		let builder = MySqlQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.columns(["name"]).values_panic(["Alice"]);

		let _ = builder.build_insert(&stmt);
	}

	#[test]
	fn test_insert_empty_statement_renders_prefix() {
		let builder = MySqlQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("users");

		let (sql, values) = builder.build_insert(&stmt);
		assert_eq!(sql, "INSERT INTO `users`");
		assert_eq!(values.len(), 0);
	}

	#[test]
	fn test_insert_null_is_inlined() {
		let builder = MySqlQueryBuilder::new();
		let mut stmt = Query::insert();
		stmt.into_table("users")
			.columns(["name", "email"])
			.values_panic(["Alice".into(), crate::value::Value::String(None)]);

		let (sql, values) = builder.build_insert(&stmt);
		assert_eq!(sql, "INSERT INTO `users` (`name`, `email`) VALUES (?, NULL)");
		assert_eq!(values.len(), 1);
	}

	#[test]
	fn test_select_basic() {
		let builder = MySqlQueryBuilder::new();
		let mut stmt = Query::select();
		stmt.column("id").column("name").from("users");

		let (sql, values) = builder.build_select(&stmt);
		assert_eq!(sql, "SELECT `id`, `name` FROM `users`");
		assert_eq!(values.len(), 0);
	}

	#[test]
	fn test_select_with_where_and_limit() {
		use crate::expr::{Expr, ExprTrait};
		use crate::types::Order;

		let builder = MySqlQueryBuilder::new();
		let mut stmt = Query::select();
		stmt.column("id")
			.from("users")
			.and_where(Expr::col("active").eq(true))
			.order_by("id", Order::Asc)
			.limit(10)
			.offset(20);

		let (sql, values) = builder.build_select(&stmt);
		assert_eq!(
			sql,
			"SELECT `id` FROM `users` WHERE `active` = ? ORDER BY `id` ASC LIMIT ? OFFSET ?"
		);
		assert_eq!(values.len(), 3);
	}
}
