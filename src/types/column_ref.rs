//! Column reference types for SQL statements.

use super::iden::{DynIden, IntoIden};

/// Reference to a column in a SQL statement.
#[derive(Debug, Clone)]
pub enum ColumnRef {
	/// Simple column reference (e.g., `name`)
	Column(DynIden),
	/// Table-qualified column reference (e.g., `users.name`)
	TableColumn(DynIden, DynIden),
	/// Asterisk for all columns (`*`)
	Asterisk,
}

impl ColumnRef {
	/// Create a simple column reference.
	pub fn column<C: IntoIden>(column: C) -> Self {
		Self::Column(column.into_iden())
	}

	/// Create a table-qualified column reference.
	pub fn table_column<T: IntoIden, C: IntoIden>(table: T, column: C) -> Self {
		Self::TableColumn(table.into_iden(), column.into_iden())
	}

	/// Create an asterisk reference for all columns.
	pub fn asterisk() -> Self {
		Self::Asterisk
	}
}

/// Conversion trait for column references.
pub trait IntoColumnRef {
	/// Convert this type into a `ColumnRef`.
	fn into_column_ref(self) -> ColumnRef;
}

impl IntoColumnRef for ColumnRef {
	fn into_column_ref(self) -> ColumnRef {
		self
	}
}

// Covers DynIden, &'static str, String, and Alias.
impl<T: IntoIden> IntoColumnRef for T {
	fn into_column_ref(self) -> ColumnRef {
		ColumnRef::Column(self.into_iden())
	}
}

// (table, column)
impl<T, C> IntoColumnRef for (T, C)
where
	T: IntoIden,
	C: IntoIden,
{
	fn into_column_ref(self) -> ColumnRef {
		ColumnRef::TableColumn(self.0.into_iden(), self.1.into_iden())
	}
}
