//! Greenlight: detect modern web-platform features in code changes.
//!
//! The library turns unified diff text into per-file added lines
//! ([`diff`]), scans that text for CSS and JavaScript feature signatures
//! ([`detect`]), and composes both into a serializable report ([`scan`])
//! for Baseline compatibility checks in CI.
//!
//! Everything here is pure and synchronous; functions can be called
//! concurrently on independent inputs.

pub mod config;
pub mod detect;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod scan;
