//! Secret handling utilities.
//!
//! Re-exports secrecy types and provides helpers for the secret-bearing
//! fields of the site configuration.

pub use secrecy::{ExposeSecret, SecretString};

/// Shown in place of a secret in any human- or machine-readable summary.
pub const REDACTED: &str = "[REDACTED]";

/// Compare two secrets by value.
pub fn secrets_eq(a: &SecretString, b: &SecretString) -> bool {
    a.expose_secret() == b.expose_secret()
}
