//! Core Value enum definition.

/// Core value representation for SQL parameters.
///
/// Every variant carries an `Option<T>`; a `None` renders as SQL `NULL`.
/// Heap-allocated payloads are boxed to keep the enum small.
///
/// ## Example
///
/// ```rust
/// use granite_query::Value;
///
/// let int_val = Value::Int(Some(42));
/// let null_int = Value::Int(None);
/// let string_val = Value::String(Some(Box::new("hello".to_string())));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	/// Boolean value
	Bool(Option<bool>),
	/// 8-bit signed integer
	TinyInt(Option<i8>),
	/// 16-bit signed integer
	SmallInt(Option<i16>),
	/// 32-bit signed integer
	Int(Option<i32>),
	/// 64-bit signed integer
	BigInt(Option<i64>),
	/// 8-bit unsigned integer
	TinyUnsigned(Option<u8>),
	/// 16-bit unsigned integer
	SmallUnsigned(Option<u16>),
	/// 32-bit unsigned integer
	Unsigned(Option<u32>),
	/// 64-bit unsigned integer
	BigUnsigned(Option<u64>),
	/// 32-bit floating point
	Float(Option<f32>),
	/// 64-bit floating point
	Double(Option<f64>),
	/// Single character
	Char(Option<char>),
	/// String value (boxed)
	String(Option<Box<String>>),
	/// Binary data (boxed)
	Bytes(Option<Box<Vec<u8>>>),

	/// Chrono NaiveDate
	#[cfg(feature = "with-chrono")]
	ChronoDate(Option<Box<chrono::NaiveDate>>),
	/// Chrono NaiveTime
	#[cfg(feature = "with-chrono")]
	ChronoTime(Option<Box<chrono::NaiveTime>>),
	/// Chrono NaiveDateTime
	#[cfg(feature = "with-chrono")]
	ChronoDateTime(Option<Box<chrono::NaiveDateTime>>),
	/// Chrono DateTime with UTC timezone
	#[cfg(feature = "with-chrono")]
	ChronoDateTimeUtc(Option<Box<chrono::DateTime<chrono::Utc>>>),

	/// UUID value
	#[cfg(feature = "with-uuid")]
	Uuid(Option<Box<uuid::Uuid>>),

	/// JSON value
	#[cfg(feature = "with-json")]
	Json(Option<Box<serde_json::Value>>),
}

impl Value {
	/// Returns `true` if this value is null.
	///
	/// # Example
	///
	/// ```rust
	/// use granite_query::Value;
	///
	/// assert!(Value::Int(None).is_null());
	/// assert!(!Value::Int(Some(42)).is_null());
	/// ```
	#[must_use]
	pub fn is_null(&self) -> bool {
		match self {
			Self::Bool(v) => v.is_none(),
			Self::TinyInt(v) => v.is_none(),
			Self::SmallInt(v) => v.is_none(),
			Self::Int(v) => v.is_none(),
			Self::BigInt(v) => v.is_none(),
			Self::TinyUnsigned(v) => v.is_none(),
			Self::SmallUnsigned(v) => v.is_none(),
			Self::Unsigned(v) => v.is_none(),
			Self::BigUnsigned(v) => v.is_none(),
			Self::Float(v) => v.is_none(),
			Self::Double(v) => v.is_none(),
			Self::Char(v) => v.is_none(),
			Self::String(v) => v.is_none(),
			Self::Bytes(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDate(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoTime(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTime(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTimeUtc(v) => v.is_none(),
			#[cfg(feature = "with-uuid")]
			Self::Uuid(v) => v.is_none(),
			#[cfg(feature = "with-json")]
			Self::Json(v) => v.is_none(),
		}
	}

	/// Convert this value to a SQL literal string suitable for inlining
	/// into a SQL statement.
	///
	/// Used by `QueryStatementBuilder::to_string()` to render statements with
	/// values inlined for inspection and logging. Single quotes are escaped
	/// by doubling; binary data renders as a hex string.
	///
	/// # Example
	///
	/// ```rust
	/// use granite_query::Value;
	///
	/// assert_eq!(Value::Int(Some(42)).to_sql_literal(), "42");
	/// assert_eq!(Value::Int(None).to_sql_literal(), "NULL");
	/// assert_eq!(
	///     Value::String(Some(Box::new("it's".to_string()))).to_sql_literal(),
	///     "'it''s'"
	/// );
	/// ```
	#[must_use]
	pub fn to_sql_literal(&self) -> String {
		if self.is_null() {
			return "NULL".to_string();
		}
		match self {
			Self::Bool(Some(v)) => {
				if *v {
					"TRUE".to_string()
				} else {
					"FALSE".to_string()
				}
			}
			Self::TinyInt(Some(v)) => v.to_string(),
			Self::SmallInt(Some(v)) => v.to_string(),
			Self::Int(Some(v)) => v.to_string(),
			Self::BigInt(Some(v)) => v.to_string(),
			Self::TinyUnsigned(Some(v)) => v.to_string(),
			Self::SmallUnsigned(Some(v)) => v.to_string(),
			Self::Unsigned(Some(v)) => v.to_string(),
			Self::BigUnsigned(Some(v)) => v.to_string(),
			Self::Float(Some(v)) => v.to_string(),
			Self::Double(Some(v)) => v.to_string(),
			Self::Char(Some(v)) => {
				// Escape single quotes by doubling them
				if *v == '\'' {
					"''''".to_string()
				} else {
					format!("'{}'", v)
				}
			}
			Self::String(Some(v)) => {
				// Escape single quotes by doubling them
				format!("'{}'", v.replace('\'', "''"))
			}
			Self::Bytes(Some(v)) => {
				let hex: String = v.iter().map(|b| format!("{:02X}", b)).collect();
				format!("X'{}'", hex)
			}
			#[cfg(feature = "with-chrono")]
			Self::ChronoDate(Some(v)) => format!("'{}'", v),
			#[cfg(feature = "with-chrono")]
			Self::ChronoTime(Some(v)) => format!("'{}'", v),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTime(Some(v)) => format!("'{}'", v),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTimeUtc(Some(v)) => format!("'{}'", v.to_rfc3339()),
			#[cfg(feature = "with-uuid")]
			Self::Uuid(Some(v)) => format!("'{}'", v),
			#[cfg(feature = "with-json")]
			Self::Json(Some(v)) => {
				let json = serde_json::to_string(v.as_ref()).unwrap_or_default();
				format!("'{}'", json.replace('\'', "''"))
			}
			// Null payloads are handled by the is_null short-circuit above
			_ => "NULL".to_string(),
		}
	}
}

impl Default for Value {
	/// Returns the default value, which is a null string.
	fn default() -> Self {
		Self::String(None)
	}
}
