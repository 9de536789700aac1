//! Builder error types.

use thiserror::Error;

/// Errors raised while assembling a statement.
///
/// Only recoverable construction mistakes surface here; dialect misuse
/// (e.g., `RETURNING` on MySQL) panics in the backend, since it is a
/// programming error rather than a data-dependent condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
	/// A queued value row does not match the declared column list.
	#[error("number of values ({got}) does not match number of columns ({expected})")]
	ValueCountMismatch {
		/// Declared column count
		expected: usize,
		/// Values supplied in the rejected row
		got: usize,
	},
}
