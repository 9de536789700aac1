//! Common test utilities for the backend integration tests

// Suppress warnings for items that may not be used in all test files.
// Each test binary compiles common.rs separately, causing unused code warnings.
#![allow(dead_code, unreachable_pub)]

/// Helper to format a PostgreSQL/SQLite identifier (double-quoted)
pub fn pg_ident(name: &str) -> String {
	format!(r#""{}""#, name)
}

/// Helper to format a MySQL identifier (backtick-quoted)
pub fn mysql_ident(name: &str) -> String {
	format!("`{}`", name)
}
