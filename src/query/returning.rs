//! RETURNING clause support
//!
//! This module provides the `ReturningClause` type for specifying columns to
//! return from an INSERT statement (PostgreSQL, SQLite 3.35+).

use crate::types::{ColumnRef, IntoColumnRef};

/// RETURNING clause for INSERT statements
///
/// Specifies which columns should be returned after the insert. Supported by
/// PostgreSQL and SQLite 3.35+; the MySQL backend panics when it is present.
///
/// # Examples
///
/// ```rust
/// use granite_query::query::ReturningClause;
///
/// // Return all columns
/// let returning = ReturningClause::all();
///
/// // Return specific columns
/// let returning = ReturningClause::columns(["id", "created_at"]);
/// ```
#[derive(Debug, Clone, Default)]
pub enum ReturningClause {
	/// Return all columns (RETURNING *)
	#[default]
	All,
	/// Return specific columns
	Columns(Vec<ColumnRef>),
}

impl ReturningClause {
	/// Create a RETURNING * clause
	pub fn all() -> Self {
		Self::All
	}

	/// Create a RETURNING clause with specific columns
	pub fn columns<I, C>(cols: I) -> Self
	where
		I: IntoIterator<Item = C>,
		C: IntoColumnRef,
	{
		let columns: Vec<ColumnRef> = cols.into_iter().map(|c| c.into_column_ref()).collect();
		Self::Columns(columns)
	}

	/// Add a column to the RETURNING clause
	///
	/// A `ReturningClause::All` is converted to a specific column list.
	pub fn add_column<C>(&mut self, col: C)
	where
		C: IntoColumnRef,
	{
		match self {
			Self::All => {
				*self = Self::Columns(vec![col.into_column_ref()]);
			}
			Self::Columns(cols) => {
				cols.push(col.into_column_ref());
			}
		}
	}

	/// Check if this clause returns all columns
	pub fn is_all(&self) -> bool {
		matches!(self, Self::All)
	}

	/// Get the columns list if this is a specific column clause
	pub fn get_columns(&self) -> Option<&[ColumnRef]> {
		match self {
			Self::All => None,
			Self::Columns(cols) => Some(cols),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_returning_all() {
		let returning = ReturningClause::all();
		assert!(returning.is_all());
		assert!(returning.get_columns().is_none());
	}

	#[rstest]
	fn test_returning_columns() {
		let returning = ReturningClause::columns(["id", "name"]);
		assert!(!returning.is_all());
		let cols = returning.get_columns().unwrap();
		assert_eq!(cols.len(), 2);
	}

	#[rstest]
	fn test_add_column_upgrades_all() {
		let mut returning = ReturningClause::all();
		returning.add_column("id");
		assert!(!returning.is_all());
		let cols = returning.get_columns().unwrap();
		assert_eq!(cols.len(), 1);
	}
}
