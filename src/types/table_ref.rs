//! Table reference types for SQL statements.

use super::iden::{DynIden, IntoIden};

/// Reference to a table in a SQL statement.
///
/// Covers the forms an `INSERT` target or `SELECT` source can take: a bare
/// table name, a schema-qualified name, or an aliased table.
#[derive(Debug, Clone)]
pub enum TableRef {
	/// Simple table reference (e.g., `users`)
	Table(DynIden),
	/// Schema-qualified table reference (e.g., `public.users`)
	SchemaTable(DynIden, DynIden),
	/// Table with alias (e.g., `users AS u`)
	TableAlias(DynIden, DynIden),
}

impl TableRef {
	/// Create a simple table reference.
	pub fn table<T: IntoIden>(table: T) -> Self {
		Self::Table(table.into_iden())
	}

	/// Create a schema-qualified table reference.
	pub fn schema_table<S: IntoIden, T: IntoIden>(schema: S, table: T) -> Self {
		Self::SchemaTable(schema.into_iden(), table.into_iden())
	}

	/// Create a table reference with an alias.
	pub fn table_alias<T: IntoIden, A: IntoIden>(table: T, alias: A) -> Self {
		Self::TableAlias(table.into_iden(), alias.into_iden())
	}
}

/// Conversion trait for table references.
pub trait IntoTableRef {
	/// Convert this type into a `TableRef`.
	fn into_table_ref(self) -> TableRef;
}

impl IntoTableRef for TableRef {
	fn into_table_ref(self) -> TableRef {
		self
	}
}

impl IntoTableRef for DynIden {
	fn into_table_ref(self) -> TableRef {
		TableRef::Table(self)
	}
}

impl IntoTableRef for &'static str {
	fn into_table_ref(self) -> TableRef {
		TableRef::Table(self.into_iden())
	}
}

impl IntoTableRef for String {
	fn into_table_ref(self) -> TableRef {
		TableRef::Table(self.into_iden())
	}
}

impl IntoTableRef for super::alias::Alias {
	fn into_table_ref(self) -> TableRef {
		TableRef::Table(self.into_iden())
	}
}

// (schema, table)
impl<S, T> IntoTableRef for (S, T)
where
	S: IntoIden,
	T: IntoIden,
{
	fn into_table_ref(self) -> TableRef {
		TableRef::SchemaTable(self.0.into_iden(), self.1.into_iden())
	}
}
