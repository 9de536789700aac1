//! SELECT statement builder
//!
//! This module provides the `SelectStatement` type. Within this crate its
//! main role is to feed `INSERT ... SELECT`, so it covers the common query
//! shape: select list, FROM, AND-combined WHERE, ORDER BY, LIMIT/OFFSET.

use crate::{
	expr::SimpleExpr,
	types::{DynIden, IntoColumnRef, IntoIden, IntoTableRef, Order, TableRef},
	value::{Value, Values},
};

use super::traits::{QueryBuilderTrait, QueryStatementBuilder, QueryStatementWriter};

/// One entry in the select list.
#[derive(Debug, Clone)]
pub struct SelectExpr {
	/// The selected expression
	pub expr: SimpleExpr,
	/// Optional `AS` alias
	pub alias: Option<DynIden>,
}

/// One entry in the `ORDER BY` clause.
#[derive(Debug, Clone)]
pub struct OrderExpr {
	/// The ordered expression
	pub expr: SimpleExpr,
	/// Sort direction
	pub order: Order,
}

/// SELECT statement builder
///
/// # Examples
///
/// ```rust
/// use granite_query::prelude::*;
///
/// let mut query = Query::select();
/// query
///     .column("name")
///     .column("email")
///     .from("users")
///     .and_where(Expr::col("active").eq(true))
///     .order_by("name", Order::Asc)
///     .limit(10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectStatement {
	pub(crate) selects: Vec<SelectExpr>,
	pub(crate) from: Vec<TableRef>,
	pub(crate) wheres: Vec<SimpleExpr>,
	pub(crate) orders: Vec<OrderExpr>,
	pub(crate) limit: Option<Value>,
	pub(crate) offset: Option<Value>,
}

impl SelectStatement {
	/// Create a new SELECT statement
	pub fn new() -> Self {
		Self::default()
	}

	/// Take the ownership of data in the current [`SelectStatement`]
	pub fn take(&mut self) -> Self {
		std::mem::take(self)
	}

	/// Add a column to the select list
	///
	/// Accepts plain names and `(table, column)` tuples.
	pub fn column<C>(&mut self, col: C) -> &mut Self
	where
		C: IntoColumnRef,
	{
		self.selects.push(SelectExpr {
			expr: SimpleExpr::Column(col.into_column_ref()),
			alias: None,
		});
		self
	}

	/// Add multiple columns to the select list
	pub fn columns<I, C>(&mut self, cols: I) -> &mut Self
	where
		I: IntoIterator<Item = C>,
		C: IntoColumnRef,
	{
		for col in cols {
			self.column(col);
		}
		self
	}

	/// Add an arbitrary expression to the select list
	pub fn expr<E>(&mut self, expr: E) -> &mut Self
	where
		E: Into<SimpleExpr>,
	{
		self.selects.push(SelectExpr {
			expr: expr.into(),
			alias: None,
		});
		self
	}

	/// Add an aliased expression to the select list
	pub fn expr_as<E, A>(&mut self, expr: E, alias: A) -> &mut Self
	where
		E: Into<SimpleExpr>,
		A: IntoIden,
	{
		self.selects.push(SelectExpr {
			expr: expr.into(),
			alias: Some(alias.into_iden()),
		});
		self
	}

	/// Add a table to the FROM clause
	pub fn from<T>(&mut self, table: T) -> &mut Self
	where
		T: IntoTableRef,
	{
		self.from.push(table.into_table_ref());
		self
	}

	/// Add a WHERE condition, AND-combined with any previous ones
	pub fn and_where<E>(&mut self, expr: E) -> &mut Self
	where
		E: Into<SimpleExpr>,
	{
		self.wheres.push(expr.into());
		self
	}

	/// Add an ORDER BY entry
	pub fn order_by<C>(&mut self, col: C, order: Order) -> &mut Self
	where
		C: IntoColumnRef,
	{
		self.orders.push(OrderExpr {
			expr: SimpleExpr::Column(col.into_column_ref()),
			order,
		});
		self
	}

	/// Set the LIMIT
	pub fn limit(&mut self, limit: u64) -> &mut Self {
		self.limit = Some(Value::BigUnsigned(Some(limit)));
		self
	}

	/// Set the OFFSET
	pub fn offset(&mut self, offset: u64) -> &mut Self {
		self.offset = Some(Value::BigUnsigned(Some(offset)));
		self
	}
}

impl QueryStatementBuilder for SelectStatement {
	fn build_any(&self, query_builder: &dyn QueryBuilderTrait) -> (String, Values) {
		use crate::backend::{
			MySqlQueryBuilder, PostgresQueryBuilder, QueryBuilder, SqliteQueryBuilder,
		};
		use std::any::Any;

		let any_builder = query_builder as &dyn Any;

		if let Some(pg) = any_builder.downcast_ref::<PostgresQueryBuilder>() {
			return pg.build_select(self);
		}

		if let Some(mysql) = any_builder.downcast_ref::<MySqlQueryBuilder>() {
			return mysql.build_select(self);
		}

		if let Some(sqlite) = any_builder.downcast_ref::<SqliteQueryBuilder>() {
			return sqlite.build_select(self);
		}

		panic!(
			"Unsupported query builder type. Use PostgresQueryBuilder, MySqlQueryBuilder, or SqliteQueryBuilder."
		);
	}
}

impl QueryStatementWriter for SelectStatement {}
