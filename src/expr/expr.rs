//! Expr - The expression builder.
//!
//! This module provides [`Expr`], the entry point for creating SQL
//! expressions, and [`ExprTrait`], the chainable operations shared by `Expr`
//! and [`SimpleExpr`].

use super::simple_expr::{Keyword, SimpleExpr};
use crate::types::{BinOper, IntoColumnRef, IntoIden, UnOper};
use crate::value::{IntoValue, Value};

/// Expression builder for creating SQL expressions.
///
/// `Expr` provides static constructors; the chainable operations live on
/// [`ExprTrait`] so they are also available on the `SimpleExpr` results.
///
/// # Example
///
/// ```rust
/// use granite_query::expr::{Expr, ExprTrait};
///
/// let cond = Expr::col("age").gte(18).and(Expr::col("active").eq(true));
/// ```
#[derive(Debug, Clone)]
pub struct Expr(SimpleExpr);

impl Expr {
	/// Create an expression from a column reference.
	///
	/// Accepts anything convertible to a column reference, including
	/// `(table, column)` tuples.
	///
	/// # Example
	///
	/// ```rust
	/// use granite_query::expr::Expr;
	///
	/// let expr = Expr::col("name");
	/// let qualified = Expr::col(("users", "name"));
	/// ```
	pub fn col<C>(col: C) -> Self
	where
		C: IntoColumnRef,
	{
		Self(SimpleExpr::Column(col.into_column_ref()))
	}

	/// Create a value expression.
	///
	/// # Example
	///
	/// ```rust
	/// use granite_query::expr::Expr;
	///
	/// let expr = Expr::val(42);
	/// let expr2 = Expr::val("hello");
	/// ```
	pub fn val<V>(val: V) -> Self
	where
		V: IntoValue,
	{
		Self(SimpleExpr::Value(val.into_value()))
	}

	/// Create a custom SQL expression.
	///
	/// The fragment is rendered verbatim; it must not contain untrusted
	/// input.
	///
	/// # Example
	///
	/// ```rust
	/// use granite_query::expr::Expr;
	///
	/// let expr = Expr::cust("NOW()");
	/// ```
	pub fn cust<S>(sql: S) -> Self
	where
		S: Into<String>,
	{
		Self(SimpleExpr::Custom(sql.into()))
	}

	/// Create a custom SQL expression with `?` markers bound to values.
	///
	/// # Example
	///
	/// ```rust
	/// use granite_query::expr::Expr;
	///
	/// let expr = Expr::cust_with_values("GREATEST(?, ?)", [1, 2]);
	/// ```
	pub fn cust_with_values<S, I, V>(sql: S, values: I) -> Self
	where
		S: Into<String>,
		I: IntoIterator<Item = V>,
		V: IntoValue,
	{
		Self(SimpleExpr::CustomWithValues(
			sql.into(),
			values.into_iter().map(|v| v.into_value()).collect(),
		))
	}

	/// Create a function call expression.
	///
	/// # Example
	///
	/// ```rust
	/// use granite_query::expr::Expr;
	///
	/// let expr = Expr::func("LOWER", [Expr::col("email").into()]);
	/// ```
	pub fn func<F, I>(func: F, args: I) -> Self
	where
		F: IntoIden,
		I: IntoIterator<Item = SimpleExpr>,
	{
		Self(SimpleExpr::FunctionCall(
			func.into_iden(),
			args.into_iter().collect(),
		))
	}

	/// Create a `CURRENT_TIMESTAMP` expression.
	pub fn current_timestamp() -> Self {
		Self(SimpleExpr::Constant(Keyword::CurrentTimestamp))
	}

	/// Create a `DEFAULT` keyword expression.
	pub fn default_keyword() -> Self {
		Self(SimpleExpr::Constant(Keyword::Default))
	}
}

impl From<Expr> for SimpleExpr {
	fn from(e: Expr) -> Self {
		e.0
	}
}

/// Chainable expression operations.
///
/// Implemented for [`Expr`] and [`SimpleExpr`], so comparisons and logical
/// connectives can be chained on either.
pub trait ExprTrait: Sized {
	/// Convert this into the underlying [`SimpleExpr`].
	fn into_simple_expr(self) -> SimpleExpr;

	/// Combine with another expression via a binary operator.
	fn binary<R>(self, op: BinOper, right: R) -> SimpleExpr
	where
		R: Into<SimpleExpr>,
	{
		SimpleExpr::Binary(
			Box::new(self.into_simple_expr()),
			op,
			Box::new(right.into()),
		)
	}

	/// `self = right`
	fn eq<R: Into<SimpleExpr>>(self, right: R) -> SimpleExpr {
		self.binary(BinOper::Equal, right)
	}

	/// `self <> right`
	fn ne<R: Into<SimpleExpr>>(self, right: R) -> SimpleExpr {
		self.binary(BinOper::NotEqual, right)
	}

	/// `self > right`
	fn gt<R: Into<SimpleExpr>>(self, right: R) -> SimpleExpr {
		self.binary(BinOper::GreaterThan, right)
	}

	/// `self >= right`
	fn gte<R: Into<SimpleExpr>>(self, right: R) -> SimpleExpr {
		self.binary(BinOper::GreaterThanOrEqual, right)
	}

	/// `self < right`
	fn lt<R: Into<SimpleExpr>>(self, right: R) -> SimpleExpr {
		self.binary(BinOper::LessThan, right)
	}

	/// `self <= right`
	fn lte<R: Into<SimpleExpr>>(self, right: R) -> SimpleExpr {
		self.binary(BinOper::LessThanOrEqual, right)
	}

	/// `self LIKE pattern`
	fn like<P: Into<String>>(self, pattern: P) -> SimpleExpr {
		self.binary(
			BinOper::Like,
			SimpleExpr::Value(Value::String(Some(Box::new(pattern.into())))),
		)
	}

	/// `self AND right`
	fn and<R: Into<SimpleExpr>>(self, right: R) -> SimpleExpr {
		self.binary(BinOper::And, right)
	}

	/// `self OR right`
	fn or<R: Into<SimpleExpr>>(self, right: R) -> SimpleExpr {
		self.binary(BinOper::Or, right)
	}

	/// `self IS NULL`
	fn is_null(self) -> SimpleExpr {
		self.binary(BinOper::Is, SimpleExpr::Constant(Keyword::Null))
	}

	/// `self IS NOT NULL`
	fn is_not_null(self) -> SimpleExpr {
		self.binary(BinOper::IsNot, SimpleExpr::Constant(Keyword::Null))
	}

	/// `NOT self`
	fn not(self) -> SimpleExpr {
		SimpleExpr::Unary(UnOper::Not, Box::new(self.into_simple_expr()))
	}
}

impl ExprTrait for Expr {
	fn into_simple_expr(self) -> SimpleExpr {
		self.0
	}
}

impl ExprTrait for SimpleExpr {
	fn into_simple_expr(self) -> SimpleExpr {
		self
	}
}
