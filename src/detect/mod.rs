//! Web-platform feature detection for greenlight.
//!
//! Detection is lexical: a fixed catalogue of named regex signatures is
//! tested against a block of source text. Which signatures apply depends on
//! the file extension:
//! - CSS family (`css`, `scss`, `less`): CSS signatures only
//! - JS family (`js`, `ts`, `jsx`, `tsx`): JS signatures only
//! - Mixed templates (`vue`, `svelte`): both, over the whole text
//! - Anything else: nothing
//!
//! Identifiers are opaque keys for an external feature knowledge base.

mod catalogue;
mod detector;
mod extension;

#[cfg(test)]
mod tests;

// Re-export public API
pub use catalogue::{FeatureDomain, FeatureSignature, catalogue, signature};
pub use detector::{detect_css_features, detect_features, detect_js_features};
pub use extension::{ExtensionClass, classify_extension};
