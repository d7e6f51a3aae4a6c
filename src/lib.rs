//! # wpenv
//!
//! Environment-driven configuration for a containerized WordPress site.
//!
//! Reads deployment secrets and URLs from the process environment, validates
//! them once at startup, and hands an immutable [`config::Config`] to the
//! application boundary (or renders it as `wp-config.php`).

pub mod config;
pub mod error;
pub mod render;
pub mod telemetry;
