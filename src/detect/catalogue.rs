//! The fixed catalogue of feature signatures.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Which rule set a signature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureDomain {
    Css,
    Js,
}

impl FeatureDomain {
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureDomain::Css => "css",
            FeatureDomain::Js => "js",
        }
    }
}

impl fmt::Display for FeatureDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A named, compiled feature signature.
pub struct FeatureSignature {
    id: &'static str,
    domain: FeatureDomain,
    summary: &'static str,
    pattern: Regex,
}

impl fmt::Debug for FeatureSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureSignature")
            .field("id", &self.id)
            .field("domain", &self.domain)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

impl FeatureSignature {
    /// Feature identifier, e.g. `optional-chaining`.
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn domain(&self) -> FeatureDomain {
        self.domain
    }

    /// Short human-readable trigger description.
    pub fn summary(&self) -> &'static str {
        self.summary
    }

    /// Whether the signature occurs anywhere in `content`.
    pub fn is_match(&self, content: &str) -> bool {
        self.pattern.is_match(content)
    }
}

/// (id, domain, summary, pattern)
///
/// Keywords and operators are matched case-sensitively.
const SIGNATURES: &[(&str, FeatureDomain, &str, &str)] = &[
    (
        "container-queries",
        FeatureDomain::Css,
        "@container rule",
        r"@container\b",
    ),
    (
        "has",
        FeatureDomain::Css,
        ":has() pseudo-class",
        r":has\(",
    ),
    (
        "grid",
        FeatureDomain::Css,
        "display: grid declaration",
        r"display\s*:\s*grid(?:[^-\w]|$)",
    ),
    (
        "subgrid",
        FeatureDomain::Css,
        "subgrid track value",
        r"grid-template-(?:columns|rows)\s*:[^;{}]*\bsubgrid\b",
    ),
    (
        "css-nesting",
        FeatureDomain::Css,
        "nested & selector inside a rule",
        r"(?m)(?:^|[{;])\s*&(?:[^&]|$)|(?:^|[^&])&[^&;{}]*\{",
    ),
    (
        "custom-properties",
        FeatureDomain::Css,
        "var(--*) usage",
        r"var\(\s*--",
    ),
    (
        "logical-properties",
        FeatureDomain::Css,
        "inline/block axis properties",
        r"\b(?:margin|padding|border|inset|scroll-margin|scroll-padding|overflow)-(?:inline|block)(?:-[a-z]+)*\s*:|\b(?:min-|max-)?(?:inline|block)-size\s*:",
    ),
    (
        "optional-chaining",
        FeatureDomain::Js,
        "?. operator",
        r"\?\.(?:[^0-9]|$)",
    ),
    (
        "nullish-coalescing",
        FeatureDomain::Js,
        "?? operator",
        r"\?\?",
    ),
    (
        "dynamic-import",
        FeatureDomain::Js,
        "import(...) call",
        r"\bimport\s*\(",
    ),
    (
        "top-level-await",
        FeatureDomain::Js,
        "await expression",
        r"\bawait\b",
    ),
    (
        "private-fields",
        FeatureDomain::Js,
        "#name class member",
        r"(?m)(?:^|[\s.;{(])#[A-Za-z_$][\w$]*",
    ),
];

static CATALOGUE: LazyLock<Vec<FeatureSignature>> = LazyLock::new(|| {
    SIGNATURES
        .iter()
        .map(|&(id, domain, summary, pattern)| FeatureSignature {
            id,
            domain,
            summary,
            pattern: Regex::new(pattern).expect("Invalid feature signature regex"),
        })
        .collect()
});

/// All signatures, CSS first, in a stable order.
pub fn catalogue() -> &'static [FeatureSignature] {
    &CATALOGUE
}

/// Look up a signature by identifier.
pub fn signature(id: &str) -> Option<&'static FeatureSignature> {
    catalogue().iter().find(|s| s.id == id)
}
