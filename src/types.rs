//! Type definitions for identifiers, column references, and table references.
//!
//! This module provides the core type system for identifying SQL entities:
//!
//! - [`Iden`]: Trait for SQL identifiers (tables, columns, schemas)
//! - [`Alias`]: Dynamic identifier for runtime-determined names
//! - [`DynIden`]: Type-erased identifier for heterogeneous collections
//! - [`ColumnRef`]: Reference to a column (simple, table-qualified, or asterisk)
//! - [`TableRef`]: Reference to a table (simple, schema-qualified, or aliased)
//! - [`IntoIden`] / [`IntoColumnRef`] / [`IntoTableRef`]: Conversion traits

mod alias;
mod column_ref;
mod iden;
mod operators;
mod order;
mod table_ref;

pub use alias::Alias;
pub use column_ref::{ColumnRef, IntoColumnRef};
pub use iden::{DynIden, Iden, IntoIden};
pub use operators::{BinOper, UnOper};
pub use order::Order;
pub use table_ref::{IntoTableRef, TableRef};
