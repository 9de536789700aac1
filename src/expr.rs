//! Expression building.
//!
//! This module provides the expression AST and its fluent builder:
//!
//! - [`SimpleExpr`]: the expression AST backends render
//! - [`Expr`]: entry points for building expressions (`Expr::col`, `Expr::val`)
//! - [`ExprTrait`]: chainable operations (`eq`, `and`, `is_null`, ...)
//! - [`Keyword`]: SQL keyword constants (`NULL`, `DEFAULT`, ...)

mod expr;
mod simple_expr;

pub use expr::{Expr, ExprTrait};
pub use simple_expr::{Keyword, SimpleExpr};
