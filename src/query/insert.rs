//! INSERT statement builder
//!
//! This module provides the `InsertStatement` type for building SQL INSERT
//! queries, including multi-row extended inserts, `INSERT ... SELECT`,
//! default-value rows, and upsert clauses.

use crate::{
	error::QueryError,
	types::{DynIden, IntoIden, IntoTableRef, TableRef},
	value::{IntoValue, Value, Values},
};

use super::{
	on_conflict::OnConflict,
	returning::ReturningClause,
	select::SelectStatement,
	traits::{QueryBuilderTrait, QueryStatementBuilder, QueryStatementWriter},
};

/// Source of rows for an INSERT statement.
///
/// An insert draws its rows from exactly one place: explicit value rows, a
/// subquery, or the table's column defaults. Setting a new source replaces
/// the previous one.
#[derive(Debug, Clone)]
pub enum InsertSource {
	/// Explicit value rows (`VALUES (..), (..)`)
	Values(Vec<Vec<Value>>),
	/// Subquery (`INSERT ... SELECT`)
	Subquery(Box<SelectStatement>),
	/// A single row of column defaults (`DEFAULT VALUES`)
	DefaultValues,
}

impl Default for InsertSource {
	fn default() -> Self {
		Self::Values(Vec::new())
	}
}

/// INSERT statement builder
///
/// This struct provides a fluent API for constructing INSERT queries. Rows
/// accumulate across `values` calls, producing a single multi-row
/// ("extended") insert.
///
/// # Examples
///
/// ```rust
/// use granite_query::prelude::*;
///
/// let mut query = Query::insert();
/// query
///     .into_table("users")
///     .columns(["name", "email"])
///     .values_panic(["Alice", "alice@example.com"])
///     .values_panic(["Bob", "bob@example.com"]);
///
/// let (sql, values) = MySqlQueryBuilder::new().build_insert(&query);
/// assert_eq!(
///     sql,
///     "INSERT INTO `users` (`name`, `email`) VALUES (?, ?), (?, ?)"
/// );
/// assert_eq!(values.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InsertStatement {
	pub(crate) table: Option<TableRef>,
	pub(crate) columns: Vec<DynIden>,
	pub(crate) source: InsertSource,
	pub(crate) on_conflict: Option<OnConflict>,
	pub(crate) returning: Option<ReturningClause>,
}

impl InsertStatement {
	/// Create a new INSERT statement
	pub fn new() -> Self {
		Self::default()
	}

	/// Take the ownership of data in the current [`InsertStatement`]
	pub fn take(&mut self) -> Self {
		Self {
			table: self.table.take(),
			columns: std::mem::take(&mut self.columns),
			source: std::mem::take(&mut self.source),
			on_conflict: self.on_conflict.take(),
			returning: self.returning.take(),
		}
	}

	/// Set the table to insert into
	///
	/// # Examples
	///
	/// ```rust
	/// use granite_query::prelude::*;
	///
	/// let mut query = Query::insert();
	/// query.into_table("users");
	/// ```
	pub fn into_table<T>(&mut self, tbl: T) -> &mut Self
	where
		T: IntoTableRef,
	{
		self.table = Some(tbl.into_table_ref());
		self
	}

	/// Add a column to insert into
	///
	/// Columns render in the order they were added.
	pub fn column<C>(&mut self, col: C) -> &mut Self
	where
		C: IntoIden,
	{
		self.columns.push(col.into_iden());
		self
	}

	/// Add multiple columns to insert into
	///
	/// # Examples
	///
	/// ```rust
	/// use granite_query::prelude::*;
	///
	/// let mut query = Query::insert();
	/// query
	///     .into_table("users")
	///     .columns(["name", "email", "created_at"]);
	/// ```
	pub fn columns<I, C>(&mut self, cols: I) -> &mut Self
	where
		I: IntoIterator<Item = C>,
		C: IntoIden,
	{
		for col in cols {
			self.column(col);
		}
		self
	}

	/// Queue one row of values
	///
	/// Returns [`QueryError::ValueCountMismatch`] if the number of values
	/// doesn't match the number of columns. Rows accumulate: calling this N
	/// times yields one extended insert with N rows.
	///
	/// # Examples
	///
	/// ```rust
	/// use granite_query::prelude::*;
	///
	/// let mut query = Query::insert();
	/// let result = query
	///     .into_table("users")
	///     .columns(["name", "email"])
	///     .values(vec!["Alice".into(), "alice@example.com".into()]);
	/// assert!(result.is_ok());
	/// ```
	pub fn values(&mut self, values: Vec<Value>) -> Result<&mut Self, QueryError> {
		if !self.columns.is_empty() && values.len() != self.columns.len() {
			return Err(QueryError::ValueCountMismatch {
				expected: self.columns.len(),
				got: values.len(),
			});
		}
		match &mut self.source {
			InsertSource::Values(rows) => rows.push(values),
			_ => {
				self.source = InsertSource::Values(vec![values]);
			}
		}
		Ok(self)
	}

	/// Queue one row of values (panics on mismatch)
	///
	/// # Panics
	///
	/// Panics if the number of values doesn't match the number of columns.
	///
	/// # Examples
	///
	/// ```rust
	/// use granite_query::prelude::*;
	///
	/// let mut query = Query::insert();
	/// query
	///     .into_table("users")
	///     .columns(["name", "email"])
	///     .values_panic(["Alice", "alice@example.com"])
	///     .values_panic(["Bob", "bob@example.com"]);
	/// ```
	pub fn values_panic<I, V>(&mut self, values: I) -> &mut Self
	where
		I: IntoIterator<Item = V>,
		V: IntoValue,
	{
		let values: Vec<Value> = values.into_iter().map(|v| v.into_value()).collect();
		match self.values(values) {
			Ok(_) => self,
			Err(e) => panic!("{}", e),
		}
	}

	/// Use a subquery as the row source (`INSERT ... SELECT`)
	///
	/// Replaces any previously queued value rows.
	///
	/// # Examples
	///
	/// ```rust
	/// use granite_query::prelude::*;
	///
	/// let mut select = Query::select();
	/// select.column("name").column("email").from("staged_users");
	///
	/// let mut query = Query::insert();
	/// query
	///     .into_table("users")
	///     .columns(["name", "email"])
	///     .from_select(select);
	/// ```
	pub fn from_select(&mut self, select: SelectStatement) -> &mut Self {
		self.source = InsertSource::Subquery(Box::new(select));
		self
	}

	/// Insert a single row of column defaults
	///
	/// Renders as `DEFAULT VALUES` on PostgreSQL and SQLite and as
	/// `() VALUES ()` on MySQL. Replaces any previously queued rows.
	///
	/// # Examples
	///
	/// ```rust
	/// use granite_query::prelude::*;
	///
	/// let mut query = Query::insert();
	/// query.into_table("audit_log").or_default_values();
	/// ```
	pub fn or_default_values(&mut self) -> &mut Self {
		self.source = InsertSource::DefaultValues;
		self
	}

	/// Set the upsert clause for conflicting rows.
	///
	/// # Examples
	///
	/// ```rust
	/// use granite_query::prelude::*;
	///
	/// let mut query = Query::insert();
	/// query
	///     .into_table("users")
	///     .columns(["id", "name"])
	///     .values_panic([1.into_value(), "Alice".into_value()])
	///     .on_conflict(OnConflict::column("id").update_columns(["name"]));
	/// ```
	pub fn on_conflict(&mut self, on_conflict: OnConflict) -> &mut Self {
		self.on_conflict = Some(on_conflict);
		self
	}

	/// Add a RETURNING clause with multiple columns
	///
	/// Supported by PostgreSQL and SQLite; the MySQL backend panics.
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
	///     .values_panic(["Alice"])
	///     .returning(["id", "created_at"]);
	/// ```
	pub fn returning<I, C>(&mut self, cols: I) -> &mut Self
	where
		I: IntoIterator<Item = C>,
		C: crate::types::IntoColumnRef,
	{
		self.returning = Some(ReturningClause::columns(cols));
		self
	}

	/// Add a RETURNING clause for a single column
	pub fn returning_col<C>(&mut self, col: C) -> &mut Self
	where
		C: crate::types::IntoColumnRef,
	{
		self.returning = Some(ReturningClause::columns([col]));
		self
	}

	/// Add a RETURNING * clause
	pub fn returning_all(&mut self) -> &mut Self {
		self.returning = Some(ReturningClause::all());
		self
	}

	/// Get the queued rows if this statement inserts explicit values
	///
	/// Returns `None` when the row source is a subquery or column defaults.
	pub fn get_values(&self) -> Option<&Vec<Vec<Value>>> {
		match &self.source {
			InsertSource::Values(rows) => Some(rows),
			_ => None,
		}
	}
}

impl QueryStatementBuilder for InsertStatement {
	fn build_any(&self, query_builder: &dyn QueryBuilderTrait) -> (String, Values) {
		use crate::backend::{
			MySqlQueryBuilder, PostgresQueryBuilder, QueryBuilder, SqliteQueryBuilder,
		};
		use std::any::Any;

		let any_builder = query_builder as &dyn Any;

		if let Some(pg) = any_builder.downcast_ref::<PostgresQueryBuilder>() {
			return pg.build_insert(self);
		}

		if let Some(mysql) = any_builder.downcast_ref::<MySqlQueryBuilder>() {
			return mysql.build_insert(self);
		}

		if let Some(sqlite) = any_builder.downcast_ref::<SqliteQueryBuilder>() {
			return sqlite.build_insert(self);
		}

		panic!(
			"Unsupported query builder type. Use PostgresQueryBuilder, MySqlQueryBuilder, or SqliteQueryBuilder."
		);
	}
}

impl QueryStatementWriter for InsertStatement {}
