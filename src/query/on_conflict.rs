//! Upsert clause support
//!
//! This module provides the `OnConflict` type describing what happens when
//! an inserted row collides with an existing key. PostgreSQL and SQLite
//! render it as `ON CONFLICT ...`; MySQL renders it as
//! `ON DUPLICATE KEY UPDATE ...`.

use crate::{
	expr::SimpleExpr,
	types::{DynIden, IntoIden},
	value::{IntoValue, Value},
};

/// Conflict target: which key collision the clause reacts to.
///
/// MySQL has no explicit target (`ON DUPLICATE KEY UPDATE` fires for any
/// unique-key collision); PostgreSQL and SQLite render the column list.
#[derive(Debug, Clone, Default)]
pub enum OnConflictTarget {
	/// No explicit target
	#[default]
	None,
	/// Conflict on the given columns
	Columns(Vec<DynIden>),
}

/// Action taken when a conflict occurs.
#[derive(Debug, Clone, Default)]
pub enum OnConflictAction {
	/// Keep the existing row untouched
	#[default]
	DoNothing,
	/// Update columns of the existing row
	Update(Vec<OnConflictUpdate>),
}

/// One assignment in a conflict-update action.
#[derive(Debug, Clone)]
pub enum OnConflictUpdate {
	/// Set the column to the value that failed to insert
	/// (`excluded.col` / `VALUES(col)`)
	Column(DynIden),
	/// Set the column to a bound value
	Value(DynIden, Value),
	/// Set the column to an arbitrary expression
	Expr(DynIden, SimpleExpr),
}

/// Upsert clause for INSERT statements.
///
/// # Examples
///
/// ```rust
/// use granite_query::prelude::*;
///
/// // Keep the freshly inserted name when the id already exists
/// let upsert = OnConflict::column("id").update_columns(["name"]);
///
/// // Ignore duplicate rows entirely
/// let ignore = OnConflict::column("id").do_nothing();
/// ```
#[derive(Debug, Clone, Default)]
pub struct OnConflict {
	pub(crate) target: OnConflictTarget,
	pub(crate) action: OnConflictAction,
}

impl OnConflict {
	/// Create an upsert clause with no explicit conflict target.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an upsert clause targeting a single conflict column.
	pub fn column<C>(col: C) -> Self
	where
		C: IntoIden,
	{
		Self {
			target: OnConflictTarget::Columns(vec![col.into_iden()]),
			action: OnConflictAction::default(),
		}
	}

	/// Create an upsert clause targeting multiple conflict columns.
	pub fn columns<I, C>(cols: I) -> Self
	where
		I: IntoIterator<Item = C>,
		C: IntoIden,
	{
		Self {
			target: OnConflictTarget::Columns(cols.into_iter().map(|c| c.into_iden()).collect()),
			action: OnConflictAction::default(),
		}
	}

	/// Keep the existing row on conflict.
	#[must_use]
	pub fn do_nothing(mut self) -> Self {
		self.action = OnConflictAction::DoNothing;
		self
	}

	/// On conflict, set a column to the value that failed to insert.
	#[must_use]
	pub fn update_column<C>(self, col: C) -> Self
	where
		C: IntoIden,
	{
		self.push_update(OnConflictUpdate::Column(col.into_iden()))
	}

	/// On conflict, set each column to the value that failed to insert.
	#[must_use]
	pub fn update_columns<I, C>(mut self, cols: I) -> Self
	where
		I: IntoIterator<Item = C>,
		C: IntoIden,
	{
		for col in cols {
			self = self.push_update(OnConflictUpdate::Column(col.into_iden()));
		}
		self
	}

	/// On conflict, set a column to a bound value.
	#[must_use]
	pub fn value<C, V>(self, col: C, value: V) -> Self
	where
		C: IntoIden,
		V: IntoValue,
	{
		self.push_update(OnConflictUpdate::Value(col.into_iden(), value.into_value()))
	}

	/// On conflict, set a column to an arbitrary expression.
	#[must_use]
	pub fn expr<C, E>(self, col: C, expr: E) -> Self
	where
		C: IntoIden,
		E: Into<SimpleExpr>,
	{
		self.push_update(OnConflictUpdate::Expr(col.into_iden(), expr.into()))
	}

	fn push_update(mut self, update: OnConflictUpdate) -> Self {
		match &mut self.action {
			OnConflictAction::Update(updates) => updates.push(update),
			OnConflictAction::DoNothing => {
				self.action = OnConflictAction::Update(vec![update]);
			}
		}
		self
	}
}
