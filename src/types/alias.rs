//! Runtime-named identifier.

use std::fmt;

use super::iden::Iden;

/// A dynamic identifier whose name is determined at runtime.
///
/// `Alias` is the workhorse identifier type: every `&str` or `String` passed
/// to a fluent builder method becomes an `Alias` internally.
///
/// # Example
///
/// ```rust
/// use granite_query::types::Alias;
///
/// let table = Alias::new("users");
/// ```
#[derive(Debug, Clone)]
pub struct Alias(String);

impl Alias {
	/// Create a new alias from any string-like value.
	pub fn new<S>(name: S) -> Self
	where
		S: Into<String>,
	{
		Self(name.into())
	}
}

impl Iden for Alias {
	fn unquoted(&self, s: &mut dyn fmt::Write) {
		// Writing into a String cannot fail
		let _ = s.write_str(&self.0);
	}
}
