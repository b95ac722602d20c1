//! Tests for feature detection.

use super::{
    ExtensionClass, FeatureDomain, catalogue, classify_extension, detect_css_features,
    detect_features, detect_js_features, signature,
};

// =========================================================================
// Extension classification
// =========================================================================

#[test]
fn test_classify_extension() {
    assert_eq!(classify_extension("styles.css"), ExtensionClass::Css);
    assert_eq!(classify_extension("theme.scss"), ExtensionClass::Css);
    assert_eq!(classify_extension("legacy.less"), ExtensionClass::Css);
    assert_eq!(classify_extension("app.js"), ExtensionClass::Js);
    assert_eq!(classify_extension("app.ts"), ExtensionClass::Js);
    assert_eq!(classify_extension("App.jsx"), ExtensionClass::Js);
    assert_eq!(classify_extension("App.tsx"), ExtensionClass::Js);
    assert_eq!(classify_extension("Card.vue"), ExtensionClass::MixedTemplate);
    assert_eq!(classify_extension("Card.svelte"), ExtensionClass::MixedTemplate);

    assert_eq!(classify_extension("README.md"), ExtensionClass::Unrecognized);
    assert_eq!(classify_extension("Cargo.toml"), ExtensionClass::Unrecognized);
    assert_eq!(classify_extension("Makefile"), ExtensionClass::Unrecognized);
    assert_eq!(classify_extension("trailing."), ExtensionClass::Unrecognized);
}

#[test]
fn test_classify_extension_case_insensitive() {
    assert_eq!(classify_extension("STYLES.CSS"), ExtensionClass::Css);
    assert_eq!(classify_extension("Main.Ts"), ExtensionClass::Js);
    assert_eq!(classify_extension("Card.VUE"), ExtensionClass::MixedTemplate);
}

#[test]
fn test_classify_uses_last_path_component() {
    assert_eq!(classify_extension("src/styles/app.css"), ExtensionClass::Css);
    assert_eq!(classify_extension("archive.min.js"), ExtensionClass::Js);
    assert_eq!(classify_extension("lib.css/LICENSE"), ExtensionClass::Unrecognized);
}

// =========================================================================
// CSS signatures
// =========================================================================

#[test]
fn test_detect_container_queries() {
    let code = r#"
      @container (min-width: 400px) {
        .card { padding: 2rem; }
      }
    "#;
    assert!(detect_css_features(code).contains(&"container-queries"));
}

#[test]
fn test_detect_has_selector() {
    let code = ".parent:has(.child) { color: blue; }";
    assert!(detect_css_features(code).contains(&"has"));
}

#[test]
fn test_detect_grid_only() {
    assert_eq!(detect_css_features("display: grid;"), vec!["grid"]);
    assert_eq!(detect_css_features(".a{display:grid}"), vec!["grid"]);
}

#[test]
fn test_grid_not_triggered_by_other_display_values() {
    assert!(detect_css_features(".a { display: inline-grid; }").is_empty());
    assert!(detect_css_features(".a { display: flex; }").is_empty());
}

#[test]
fn test_detect_grid_followed_by_comment() {
    assert_eq!(
        detect_features("a.css", ".a { display: grid /* layout */; }"),
        vec!["grid"]
    );
    assert_eq!(
        detect_features("a.css", ".a { display: grid\t/* x */ }"),
        vec!["grid"]
    );
    assert!(detect_css_features(".a { display: grid-lanes; }").is_empty());
}

#[test]
fn test_detect_subgrid() {
    let code = ".item { grid-template-columns: subgrid; }";
    assert_eq!(detect_css_features(code), vec!["subgrid"]);

    let code = ".item { grid-template-rows: subgrid [a] [b]; }";
    assert!(detect_css_features(code).contains(&"subgrid"));
}

#[test]
fn test_detect_css_nesting() {
    let code = r#"
      .parent {
        color: blue;
        & .child { color: red; }
      }
    "#;
    assert!(detect_css_features(code).contains(&"css-nesting"));

    assert!(detect_css_features(".btn { &:hover { opacity: 1; } }").contains(&"css-nesting"));
}

#[test]
fn test_detect_css_nesting_with_trailing_ampersand() {
    let code = ".a {\n  .child & { color: red; }\n}";
    assert_eq!(detect_css_features(code), vec!["css-nesting"]);
}

#[test]
fn test_logical_and_is_not_css_nesting() {
    let code = "<script>\nif (a && b) { run(); }\n</script>";
    assert!(!detect_features("Widget.vue", code).contains(&"css-nesting"));
}

#[test]
fn test_detect_custom_properties() {
    let code = ".box { color: var(--primary-color); }";
    assert_eq!(detect_css_features(code), vec!["custom-properties"]);
}

#[test]
fn test_custom_property_declaration_alone_is_not_usage() {
    assert!(detect_css_features(":root { --primary: red; }").is_empty());
}

#[test]
fn test_detect_logical_properties() {
    let code = ".box { margin-inline-start: 1rem; padding-block-end: 2rem; }";
    assert_eq!(detect_css_features(code), vec!["logical-properties"]);

    assert!(detect_css_features(".a { inline-size: 10px; }").contains(&"logical-properties"));
    assert!(detect_css_features(".a { inset-block: 0; }").contains(&"logical-properties"));
}

#[test]
fn test_inline_block_display_is_not_logical() {
    assert!(detect_css_features(".a { display: inline-block; }").is_empty());
}

#[test]
fn test_detect_multiple_css_features() {
    let code = r#"
      @container (min-width: 400px) {
        .card {
          display: grid;
          color: var(--text-color);
        }
      }
    "#;
    let features = detect_css_features(code);

    assert_eq!(
        features,
        vec!["container-queries", "grid", "custom-properties"]
    );
}

// =========================================================================
// JS signatures
// =========================================================================

#[test]
fn test_detect_optional_chaining() {
    let code = "const value = obj?.prop?.nested;";
    assert_eq!(detect_js_features(code), vec!["optional-chaining"]);
    assert!(detect_js_features("fn?.()").contains(&"optional-chaining"));
}

#[test]
fn test_ternary_with_decimal_is_not_optional_chaining() {
    assert!(detect_js_features("const x = a?.5:1;").is_empty());
}

#[test]
fn test_detect_nullish_coalescing() {
    let code = "const value = input ?? defaultValue;";
    assert_eq!(detect_js_features(code), vec!["nullish-coalescing"]);
}

#[test]
fn test_detect_dynamic_import() {
    let code = "const module = import('./module.js');";
    assert_eq!(detect_js_features(code), vec!["dynamic-import"]);
}

#[test]
fn test_static_import_is_not_dynamic() {
    assert!(detect_js_features("import { a } from './a.js';").is_empty());
    assert!(detect_js_features("import b from 'b';").is_empty());
}

#[test]
fn test_detect_await_anywhere() {
    let code = "const data = await fetch('/api/data');";
    assert_eq!(detect_js_features(code), vec!["top-level-await"]);

    // Position is not checked
    let code = "async function f() { return await g(); }";
    assert!(detect_js_features(code).contains(&"top-level-await"));
}

#[test]
fn test_detect_private_fields() {
    let code = r#"
      class MyClass {
        #privateField = 42;
        getPrivate() { return this.#privateField; }
      }
    "#;
    assert_eq!(detect_js_features(code), vec!["private-fields"]);
}

#[test]
fn test_selector_strings_are_not_private_fields() {
    assert!(detect_js_features("document.querySelector('#app');").is_empty());
    assert!(detect_js_features("// see issue #123").is_empty());
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert!(detect_js_features("const AWAIT = 1;").is_empty());
    assert!(detect_js_features("Import('x')").is_empty());
}

#[test]
fn test_detect_all_js_features() {
    let code = r#"
      class Loader {
        #cache = new Map();
        async load(key) {
          const mod = await import(`./${key}.js`);
          return mod?.default ?? null;
        }
      }
    "#;

    assert_eq!(
        detect_js_features(code),
        vec![
            "optional-chaining",
            "nullish-coalescing",
            "dynamic-import",
            "top-level-await",
            "private-fields",
        ]
    );
}

// =========================================================================
// Dispatch
// =========================================================================

#[test]
fn test_detect_features_css_file() {
    assert_eq!(detect_features("styles.css", "display: grid;"), vec!["grid"]);
}

#[test]
fn test_detect_features_js_file_ignores_css_signatures() {
    let features = detect_features("script.js", "const x = obj?.value; // display: grid;");
    assert_eq!(features, vec!["optional-chaining"]);
}

#[test]
fn test_detect_features_ts_file() {
    assert_eq!(
        detect_features("script.ts", "const x = y ?? 0;"),
        vec!["nullish-coalescing"]
    );
}

#[test]
fn test_detect_features_css_file_ignores_js_signatures() {
    assert!(detect_features("a.scss", "/* obj?.value ?? 1 */").is_empty());
}

#[test]
fn test_detect_features_vue_scans_both() {
    let code = r#"
      <style>
        @container (min-width: 400px) {}
      </style>
      <script>
        const data = import('./x.js');
      </script>
    "#;
    let features = detect_features("component.vue", code);

    assert!(features.contains(&"container-queries"));
    assert!(features.contains(&"dynamic-import"));
}

#[test]
fn test_detect_features_svelte_scans_whole_blob() {
    // Matches outside <style>/<script> still count
    let code = "<p>Use display: grid; and a?.b in docs</p>";
    let features = detect_features("Doc.svelte", code);

    assert_eq!(features, vec!["grid", "optional-chaining"]);
}

#[test]
fn test_unrecognized_extension_returns_empty() {
    assert!(detect_features("README.md", "@container (min-width: 1px){}").is_empty());
    assert!(detect_features("Makefile", "a?.b ?? c").is_empty());
}

#[test]
fn test_empty_content_returns_empty() {
    assert!(detect_features("a.css", "").is_empty());
    assert!(detect_features("a.vue", "").is_empty());
}

#[test]
fn test_no_duplicates_on_repeated_matches() {
    let code = "a?.b; c?.d; e?.f;";
    assert_eq!(detect_features("x.js", code), vec!["optional-chaining"]);
}

// =========================================================================
// Catalogue
// =========================================================================

#[test]
fn test_catalogue_ids_unique() {
    let mut ids: Vec<&str> = catalogue().iter().map(|s| s.id()).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert_eq!(total, 12);
}

#[test]
fn test_catalogue_domains() {
    let css = catalogue()
        .iter()
        .filter(|s| s.domain() == FeatureDomain::Css)
        .count();
    let js = catalogue()
        .iter()
        .filter(|s| s.domain() == FeatureDomain::Js)
        .count();
    assert_eq!((css, js), (7, 5));
}

#[test]
fn test_feature_domain_display() {
    assert_eq!(FeatureDomain::Css.to_string(), "css");
    assert_eq!(format!("[{:<4}]", FeatureDomain::Js), "[js  ]");
}

#[test]
fn test_signature_lookup() {
    let sig = signature("subgrid").unwrap();
    assert_eq!(sig.domain(), FeatureDomain::Css);
    assert!(sig.is_match("grid-template-rows: subgrid;"));
    assert!(signature("not-a-feature").is_none());
}

#[test]
fn test_catalogue_is_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| detect_features("a.css", "display: grid;")))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["grid"]);
    }
}
