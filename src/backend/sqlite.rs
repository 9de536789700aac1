//! SQLite query builder backend
//!
//! This module implements the SQL generation backend for SQLite, which
//! quotes identifiers like PostgreSQL but binds parameters like MySQL.

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

/// SQLite query builder
///
/// This struct implements SQL generation for SQLite, using the following
/// conventions:
/// - Identifiers: Double quotes (`"table_name"`)
/// - Placeholders: Question marks (`?`)
/// - Upserts: `ON CONFLICT (cols) DO NOTHING` / `DO UPDATE SET`, with
///   `excluded.col` referring to the row that failed to insert
///
/// RETURNING requires SQLite 3.35 or newer.
///
/// # Examples
///
/// ```rust
/// use granite_query::prelude::*;
///
/// let builder = SqliteQueryBuilder::new();
/// let mut stmt = Query::insert();
/// stmt.into_table("users")
///     .columns(["name"])
///     .values_panic(["Alice"]);
///
/// let (sql, values) = builder.build_insert(&stmt);
/// assert_eq!(sql, r#"INSERT INTO "users" ("name") VALUES (?)"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SqliteQueryBuilder;

impl SqliteQueryBuilder {
	/// Create a new SQLite query builder
	pub fn new() -> Self {
		Self
	}

	/// Escape an identifier for SQLite
	///
	/// SQLite quotes identifiers with double quotes; embedded double quotes
	/// are doubled.
	fn escape_iden(&self, ident: &str) -> String {
		let escaped = ident.replace('"', "\"\"");
		format!("\"{}\"", escaped)
	}

	/// Format a placeholder for SQLite
	///
	/// SQLite placeholders are positional question marks, so the index is
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
				// SQLite grammar
				if matches!(target, OnConflictTarget::None) {
					panic!(
						"SQLite requires conflict target columns for DO UPDATE upserts. Use OnConflict::column(..) or OnConflict::columns(..)."
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
}

impl QueryBuilder for SqliteQueryBuilder {
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
				writer.push_keyword("DEFAULT VALUES");
			}
		}

		// Upsert clause
		if let Some(on_conflict) = &stmt.on_conflict {
			self.write_on_conflict(&mut writer, &on_conflict.target, &on_conflict.action);
		}

		// RETURNING clause (SQLite 3.35+)
		if let Some(returning) = &stmt.returning {
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

impl QueryBuilderTrait for SqliteQueryBuilder {
	fn placeholder(&self) -> (&str, bool) {
		("?", false)
	}

	fn quote_char(&self) -> char {
		'"'
	}
}
