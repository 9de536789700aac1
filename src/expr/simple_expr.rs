//! SimpleExpr - The core expression AST.
//!
//! This module defines [`SimpleExpr`], which represents SQL expressions as an
//! abstract syntax tree. All expression operations eventually produce a
//! `SimpleExpr`.

use crate::types::{BinOper, ColumnRef, DynIden, UnOper};
use crate::value::Value;

/// A simple SQL expression.
///
/// Each variant corresponds to a form of SQL expression that can appear in a
/// `WHERE` clause, a select list, or an upsert assignment.
#[derive(Debug, Clone)]
pub enum SimpleExpr {
	/// A column reference (e.g., `name`, `users.name`)
	Column(ColumnRef),

	/// A literal value bound as a parameter (e.g., `42`, `'hello'`)
	Value(Value),

	/// A unary operation (e.g., `NOT x`)
	Unary(UnOper, Box<SimpleExpr>),

	/// A binary operation (e.g., `x = y`, `a AND b`)
	Binary(Box<SimpleExpr>, BinOper, Box<SimpleExpr>),

	/// A function call (e.g., `MAX(x)`, `LOWER(name)`)
	FunctionCall(DynIden, Vec<SimpleExpr>),

	/// A raw SQL fragment (e.g., `NOW()`)
	Custom(String),

	/// A raw SQL fragment with `?` markers bound to the given values
	CustomWithValues(String, Vec<Value>),

	/// A SQL keyword constant (`NULL`, `DEFAULT`, `CURRENT_TIMESTAMP`, ...)
	Constant(Keyword),
}

/// SQL keywords that can appear as constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
	/// SQL NULL
	Null,
	/// SQL DEFAULT
	Default,
	/// SQL CURRENT_TIMESTAMP
	CurrentTimestamp,
	/// SQL CURRENT_DATE
	CurrentDate,
	/// SQL CURRENT_TIME
	CurrentTime,
}

impl Keyword {
	/// Returns the SQL representation of this keyword.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Null => "NULL",
			Self::Default => "DEFAULT",
			Self::CurrentTimestamp => "CURRENT_TIMESTAMP",
			Self::CurrentDate => "CURRENT_DATE",
			Self::CurrentTime => "CURRENT_TIME",
		}
	}
}

// Conversion implementations

impl From<Value> for SimpleExpr {
	fn from(v: Value) -> Self {
		Self::Value(v)
	}
}

impl From<ColumnRef> for SimpleExpr {
	fn from(c: ColumnRef) -> Self {
		Self::Column(c)
	}
}

impl From<Keyword> for SimpleExpr {
	fn from(k: Keyword) -> Self {
		Self::Constant(k)
	}
}

impl From<bool> for SimpleExpr {
	fn from(b: bool) -> Self {
		Self::Value(Value::Bool(Some(b)))
	}
}

impl From<i32> for SimpleExpr {
	fn from(i: i32) -> Self {
		Self::Value(Value::Int(Some(i)))
	}
}

impl From<i64> for SimpleExpr {
	fn from(i: i64) -> Self {
		Self::Value(Value::BigInt(Some(i)))
	}
}

impl From<f64> for SimpleExpr {
	fn from(f: f64) -> Self {
		Self::Value(Value::Double(Some(f)))
	}
}

impl From<&str> for SimpleExpr {
	fn from(s: &str) -> Self {
		Self::Value(Value::String(Some(Box::new(s.to_string()))))
	}
}

impl From<String> for SimpleExpr {
	fn from(s: String) -> Self {
		Self::Value(Value::String(Some(Box::new(s))))
	}
}
