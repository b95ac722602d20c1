//! Signature matching over source text.

use tracing::trace;

use super::catalogue::{FeatureDomain, catalogue};
use super::extension::classify_extension;

/// Detect web features in `content`, using the rule sets that apply to `file_name`.
///
/// Unrecognized extensions yield an empty result. Mixed templates are
/// scanned as a whole with both rule sets; `<style>`/`<script>` regions
/// are not isolated.
///
/// Each identifier appears at most once, in catalogue order.
///
/// # Example
///
/// ```
/// use greenlight::detect::detect_features;
///
/// assert_eq!(detect_features("app.css", ".a { display: grid; }"), vec!["grid"]);
/// assert!(detect_features("README.md", "@container (min-width: 1px) {}").is_empty());
/// ```
pub fn detect_features(file_name: &str, content: &str) -> Vec<&'static str> {
    let class = classify_extension(file_name);

    let detected: Vec<&'static str> = class
        .domains()
        .iter()
        .flat_map(|&domain| detect_in_domain(domain, content))
        .collect();

    trace!(file = file_name, ?class, features = ?detected, "detected features");
    detected
}

/// Run only the CSS signatures against `content`.
pub fn detect_css_features(content: &str) -> Vec<&'static str> {
    detect_in_domain(FeatureDomain::Css, content)
}

/// Run only the JS signatures against `content`.
pub fn detect_js_features(content: &str) -> Vec<&'static str> {
    detect_in_domain(FeatureDomain::Js, content)
}

fn detect_in_domain(domain: FeatureDomain, content: &str) -> Vec<&'static str> {
    catalogue()
        .iter()
        .filter(|s| s.domain() == domain && s.is_match(content))
        .map(|s| s.id())
        .collect()
}
