//! File extension classification.

use super::catalogue::FeatureDomain;

/// Rule-set family of a file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionClass {
    /// Stylesheets: css, scss, less.
    Css,
    /// Scripts: js, ts, jsx, tsx.
    Js,
    /// Single-file components embedding style and script: vue, svelte.
    MixedTemplate,
    /// Anything else, including files without an extension.
    Unrecognized,
}

impl ExtensionClass {
    /// Signature domains scanned for this class, in scan order.
    pub fn domains(self) -> &'static [FeatureDomain] {
        match self {
            ExtensionClass::Css => &[FeatureDomain::Css],
            ExtensionClass::Js => &[FeatureDomain::Js],
            ExtensionClass::MixedTemplate => &[FeatureDomain::Css, FeatureDomain::Js],
            ExtensionClass::Unrecognized => &[],
        }
    }
}

/// Classify a file name (or repo-relative path) by its extension.
///
/// The extension is the text after the last `.` of the final path
/// component, compared case-insensitively.
pub fn classify_extension(file_name: &str) -> ExtensionClass {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);

    let ext = match base.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_lowercase(),
        _ => return ExtensionClass::Unrecognized,
    };

    match ext.as_str() {
        "css" | "scss" | "less" => ExtensionClass::Css,
        "js" | "ts" | "jsx" | "tsx" => ExtensionClass::Js,
        "vue" | "svelte" => ExtensionClass::MixedTemplate,
        _ => ExtensionClass::Unrecognized,
    }
}
