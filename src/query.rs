//! Query statement builders.
//!
//! This module provides the statement builders and their shared traits:
//!
//! - Query Insert: [`InsertStatement`] — the primary statement shape
//! - Query Select: [`SelectStatement`] — subquery collaborator for
//!   `INSERT ... SELECT`
//!
//! # Examples
//!
//! ```rust
//! use granite_query::prelude::*;
//!
//! // INSERT query
//! let mut insert = Query::insert();
//! insert
//!     .into_table("users")
//!     .columns(["name", "email"])
//!     .values_panic(["Alice", "alice@example.com"]);
//!
//! // SELECT query feeding an INSERT
//! let mut select = Query::select();
//! select.column("name").column("email").from("staged_users");
//! ```

pub mod insert;
pub mod on_conflict;
pub mod returning;
pub mod select;
pub mod traits;

pub use insert::{InsertSource, InsertStatement};
pub use on_conflict::{OnConflict, OnConflictAction, OnConflictTarget, OnConflictUpdate};
pub use returning::ReturningClause;
pub use select::{OrderExpr, SelectExpr, SelectStatement};
pub use traits::{QueryBuilderTrait, QueryStatementBuilder, QueryStatementWriter};

/// Shorthand for constructing statements.
///
/// # Examples
///
/// ```rust
/// use granite_query::prelude::*;
///
/// let mut insert = Query::insert();
/// insert
///     .into_table("users")
///     .columns(["name"])
///     .values_panic(["Alice"]);
/// ```
#[derive(Debug, Clone)]
pub struct Query;

impl Query {
	/// Construct a new [`InsertStatement`]
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
	///     .values_panic(["Alice", "alice@example.com"]);
	/// ```
	pub fn insert() -> InsertStatement {
		InsertStatement::new()
	}

	/// Construct a new [`SelectStatement`]
	///
	/// # Examples
	///
	/// ```rust
	/// use granite_query::prelude::*;
	///
	/// let mut query = Query::select();
	/// query.column("id").column("name").from("users");
	/// ```
	pub fn select() -> SelectStatement {
		SelectStatement::new()
	}
}
