//! SQL parameter values.
//!
//! This module provides the value model used for parameter binding:
//!
//! - [`Value`]: every SQL value type the crate can bind
//! - [`IntoValue`]: conversion trait used by the fluent builder APIs
//! - [`Values`]: ordered collection of bound parameters
//! - [`Nullable`]: maps `Option::None` onto the right typed SQL `NULL`

mod core;

pub use self::core::Value;


/// Conversion into a [`Value`].
///
/// Blanket-implemented for everything that converts into `Value`, so builder
/// methods can accept plain Rust values:
///
/// ```rust
/// use granite_query::value::{IntoValue, Value};
///
/// assert_eq!(42i32.into_value(), Value::Int(Some(42)));
/// assert_eq!("hi".into_value(), Value::String(Some(Box::new("hi".to_string()))));
/// ```
pub trait IntoValue {
	/// Convert this type into a `Value`.
	fn into_value(self) -> Value;
}

impl<T> IntoValue for T
where
	T: Into<Value>,
{
	fn into_value(self) -> Value {
		self.into()
	}
}

/// Types that have a typed SQL `NULL` representation.
///
/// Used by the `Option<T>` conversion: `None::<i32>` becomes
/// `Value::Int(None)` rather than an untyped null.
pub trait Nullable {
	/// The `NULL` value carrying this type's tag.
	fn null() -> Value;
}

impl<T> From<Option<T>> for Value
where
	T: Into<Value> + Nullable,
{
	fn from(value: Option<T>) -> Self {
		match value {
			Some(v) => v.into(),
			None => T::null(),
		}
	}
}

macro_rules! impl_value_conversion {
	($ty:ty, $variant:ident) => {
		impl From<$ty> for Value {
			fn from(v: $ty) -> Self {
				Self::$variant(Some(v))
			}
		}

		impl Nullable for $ty {
			fn null() -> Value {
				Value::$variant(None)
			}
		}
	};
}

impl_value_conversion!(bool, Bool);
impl_value_conversion!(i8, TinyInt);
impl_value_conversion!(i16, SmallInt);
impl_value_conversion!(i32, Int);
impl_value_conversion!(i64, BigInt);
impl_value_conversion!(u8, TinyUnsigned);
impl_value_conversion!(u16, SmallUnsigned);
impl_value_conversion!(u32, Unsigned);
impl_value_conversion!(u64, BigUnsigned);
impl_value_conversion!(f32, Float);
impl_value_conversion!(f64, Double);
impl_value_conversion!(char, Char);

impl From<String> for Value {
	fn from(v: String) -> Self {
		Self::String(Some(Box::new(v)))
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Self::String(Some(Box::new(v.to_string())))
	}
}

impl Nullable for String {
	fn null() -> Value {
		Value::String(None)
	}
}

impl Nullable for &str {
	fn null() -> Value {
		Value::String(None)
	}
}

impl From<Vec<u8>> for Value {
	fn from(v: Vec<u8>) -> Self {
		Self::Bytes(Some(Box::new(v)))
	}
}

impl Nullable for Vec<u8> {
	fn null() -> Value {
		Value::Bytes(None)
	}
}

#[cfg(feature = "with-chrono")]
mod with_chrono {
	use super::{Nullable, Value};

	macro_rules! impl_chrono_conversion {
		($ty:ty, $variant:ident) => {
			impl From<$ty> for Value {
				fn from(v: $ty) -> Self {
					Self::$variant(Some(Box::new(v)))
				}
			}

			impl Nullable for $ty {
				fn null() -> Value {
					Value::$variant(None)
				}
			}
		};
	}

	impl_chrono_conversion!(chrono::NaiveDate, ChronoDate);
	impl_chrono_conversion!(chrono::NaiveTime, ChronoTime);
	impl_chrono_conversion!(chrono::NaiveDateTime, ChronoDateTime);
	impl_chrono_conversion!(chrono::DateTime<chrono::Utc>, ChronoDateTimeUtc);
}

#[cfg(feature = "with-uuid")]
mod with_uuid {
	use super::{Nullable, Value};

	impl From<uuid::Uuid> for Value {
		fn from(v: uuid::Uuid) -> Self {
			Self::Uuid(Some(Box::new(v)))
		}
	}

	impl Nullable for uuid::Uuid {
		fn null() -> Value {
			Value::Uuid(None)
		}
	}
}

#[cfg(feature = "with-json")]
mod with_json {
	use super::{Nullable, Value};

	impl From<serde_json::Value> for Value {
		fn from(v: serde_json::Value) -> Self {
			Self::Json(Some(Box::new(v)))
		}
	}

	impl Nullable for serde_json::Value {
		fn null() -> Value {
			Value::Json(None)
		}
	}
}

/// Ordered collection of bound parameter values.
///
/// Produced alongside the SQL string by every backend `build_*` method; the
/// order matches placeholder order in the statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values(pub Vec<Value>);

impl Values {
	/// Create an empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a value.
	pub fn push(&mut self, value: Value) {
		self.0.push(value);
	}

	/// Number of collected values.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the collection is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterate over the collected values.
	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.0.iter()
	}
}

impl IntoIterator for Values {
	type Item = Value;
	type IntoIter = std::vec::IntoIter<Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Values {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl FromIterator<Value> for Values {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}
