//! # granite-query
//!
//! A fluent SQL `INSERT` statement builder.
//!
//! This crate composes identifier quoting, placeholder generation, and
//! value binding into parameterized `INSERT INTO` statements for MySQL,
//! PostgreSQL, and SQLite: single rows, multi-row extended inserts,
//! `INSERT ... SELECT`, default-value rows, upsert clauses, and
//! `RETURNING`.
//!
//! ## Features
//!
//! - **Fluent construction** - Build statements with chainable methods;
//!   value rows accumulate into one extended insert
//! - **Upserts** - `ON DUPLICATE KEY UPDATE` on MySQL, `ON CONFLICT` on
//!   PostgreSQL/SQLite, from a single [`OnConflict`] description
//! - **Parameterized output** - Every build returns `(String, Values)`;
//!   values never appear in the SQL text, so there is nothing to escape
//! - **Subquery sourcing** - Feed an insert from a [`SelectStatement`]
//!
//! ## Quick Start
//!
//! ```rust
//! use granite_query::prelude::*;
//!
//! let mut stmt = Query::insert();
//! stmt.into_table("users")
//!     .columns(["name", "email"])
//!     .values_panic(["Alice", "alice@example.com"])
//!     .values_panic(["Bob", "bob@example.com"]);
//!
//! let (sql, values) = MySqlQueryBuilder::new().build_insert(&stmt);
//! assert_eq!(
//!     sql,
//!     "INSERT INTO `users` (`name`, `email`) VALUES (?, ?), (?, ?)"
//! );
//! assert_eq!(values.len(), 4);
//! ```
//!
//! ## Backend Differences
//!
//! | Feature | MySQL | PostgreSQL | SQLite |
//! |---------|-------|------------|--------|
//! | Identifier quoting | `` `name` `` | `"name"` | `"name"` |
//! | Placeholders | `?, ?, ...` | `$1, $2, ...` | `?, ?, ...` |
//! | Upsert clause | `ON DUPLICATE KEY UPDATE` | `ON CONFLICT` | `ON CONFLICT` |
//! | Inserted-row reference | `VALUES(col)` | `excluded.col` | `excluded.col` |
//! | `DEFAULT VALUES` | `() VALUES ()` | ✅ Native | ✅ Native |
//! | `RETURNING` | ❌ (panics) | ✅ | ✅ 3.35+ |
//!
//! ## Upsert Example
//!
//! ```rust
//! use granite_query::prelude::*;
//!
//! let mut stmt = Query::insert();
//! stmt.into_table("users")
//!     .columns(["id", "name"])
//!     .values_panic([1.into_value(), "Alice".into_value()])
//!     .on_conflict(OnConflict::column("id").update_columns(["name"]));
//!
//! let (sql, _) = PostgresQueryBuilder::new().build_insert(&stmt);
//! assert_eq!(
//!     sql,
//!     r#"INSERT INTO "users" ("id", "name") VALUES ($1, $2) ON CONFLICT ("id") DO UPDATE SET "name" = "excluded"."name""#
//! );
//! ```
//!
//! ## Architecture
//!
//! - [`value`]: Core value types for representing SQL parameters
//! - [`types`]: Identifier, column reference, and table reference types
//! - [`expr`]: Expression building with the [`ExprTrait`] system
//! - [`query`]: Statement builders ([`InsertStatement`], [`SelectStatement`])
//! - [`backend`]: Database backend implementations
//!   ([`MySqlQueryBuilder`], [`PostgresQueryBuilder`], [`SqliteQueryBuilder`])
//!
//! ## Feature Flags
//!
//! - `thread-safe`: Use `Arc` instead of `Rc` for `DynIden` (statements
//!   become `Send`)
//! - `with-chrono`: Enable chrono date/time types in `Value`
//! - `with-uuid`: Enable UUID type in `Value`
//! - `with-json`: Enable JSON type in `Value`
//! - `full`: Enable all optional features

// Core modules
pub mod types;
pub mod value;

// Expression module
pub mod expr;

// Statement builders
pub mod query;

// Backend implementations
pub mod backend;

// Error types
pub mod error;

/// Prelude module for convenient imports.
///
/// Import everything from this module to get started quickly:
///
/// ```rust
/// use granite_query::prelude::*;
/// ```
pub mod prelude {
	// Backend builders
	pub use crate::backend::{
		MySqlQueryBuilder, PostgresQueryBuilder, QueryBuilder, SqlWriter, SqliteQueryBuilder,
	};
	// Error types
	pub use crate::error::QueryError;
	// Expression system
	pub use crate::expr::{Expr, ExprTrait, Keyword, SimpleExpr};
	// Statement builders
	pub use crate::query::{
		InsertSource, InsertStatement, OnConflict, OnConflictAction, OnConflictTarget,
		OnConflictUpdate, Query, QueryBuilderTrait, QueryStatementBuilder, QueryStatementWriter,
		ReturningClause, SelectStatement,
	};
	// Type system
	pub use crate::types::{
		Alias, ColumnRef, DynIden, Iden, IntoColumnRef, IntoIden, IntoTableRef, Order, TableRef,
	};
	pub use crate::types::{BinOper, UnOper};
	// Value system
	pub use crate::value::{IntoValue, Value, Values};
}

// Re-export commonly used types at crate root
pub use prelude::*;
