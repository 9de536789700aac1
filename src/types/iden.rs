//! SQL identifier trait and the type-erased identifier handle.

use std::fmt::{self, Debug};

#[cfg(not(feature = "thread-safe"))]
use std::rc::Rc;
#[cfg(feature = "thread-safe")]
use std::sync::Arc;

/// Trait for SQL identifiers (table names, column names, schema names).
///
/// An identifier only knows how to write its *unquoted* form; quoting is the
/// job of the backend that renders it, since each database has its own quote
/// character and escaping rules.
///
/// # Example
///
/// ```rust
/// use granite_query::types::{Alias, Iden};
///
/// let iden = Alias::new("users");
/// assert_eq!(iden.to_string(), "users");
/// ```
pub trait Iden: Debug {
	/// Write the unquoted identifier into `s`.
	fn unquoted(&self, s: &mut dyn fmt::Write);

	/// Render the unquoted identifier as an owned `String`.
	fn to_string(&self) -> String {
		let mut s = String::new();
		self.unquoted(&mut s);
		s
	}
}

/// Type-erased, reference-counted identifier.
///
/// Statements store identifiers as `DynIden` so that string aliases and
/// user-defined [`Iden`] types can live in the same collection. With the
/// `thread-safe` feature this is `Arc`-backed and statements become `Send`.
#[cfg(not(feature = "thread-safe"))]
pub type DynIden = Rc<dyn Iden>;

/// Type-erased, reference-counted identifier.
///
/// Statements store identifiers as `DynIden` so that string aliases and
/// user-defined [`Iden`] types can live in the same collection. With the
/// `thread-safe` feature this is `Arc`-backed and statements become `Send`.
#[cfg(feature = "thread-safe")]
pub type DynIden = Arc<dyn Iden + Send + Sync>;

#[cfg(not(feature = "thread-safe"))]
pub(crate) fn erase<I>(iden: I) -> DynIden
where
	I: Iden + 'static,
{
	Rc::new(iden)
}

#[cfg(feature = "thread-safe")]
pub(crate) fn erase<I>(iden: I) -> DynIden
where
	I: Iden + Send + Sync + 'static,
{
	Arc::new(iden)
}

/// Conversion trait for identifier types.
///
/// Implemented for `DynIden`, [`Alias`](super::Alias), `&'static str`, and
/// `String`, so fluent APIs accept plain strings wherever an identifier is
/// expected.
pub trait IntoIden {
	/// Convert this type into a `DynIden`.
	fn into_iden(self) -> DynIden;
}

impl IntoIden for DynIden {
	fn into_iden(self) -> DynIden {
		self
	}
}

impl IntoIden for &'static str {
	fn into_iden(self) -> DynIden {
		erase(super::Alias::new(self))
	}
}

impl IntoIden for String {
	fn into_iden(self) -> DynIden {
		erase(super::Alias::new(self))
	}
}

impl IntoIden for super::Alias {
	fn into_iden(self) -> DynIden {
		erase(self)
	}
}
