//! Property-based tests for namespace inference

use proptest::prelude::*;
use scriptgen_core::NamespaceSettings;
use scriptgen_core::namespace::{NamespaceResolver, clamp_namespace_depth};

// Strategy: dot separated namespaces with one to six segments
fn arb_namespace() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Z][a-z]{0,5}", 1..6).prop_map(|segments| segments.join("."))
}

// Strategy: folder paths including separators, brackets and word separators
fn arb_path() -> impl Strategy<Value = String> {
    r"(Assets/|Packages/)?[A-Za-z0-9_ \-\[\]./\\]{0,48}"
}

proptest! {
    /// Property: clamping to zero always yields an empty namespace
    #[test]
    fn proptest_clamp_to_zero_is_empty(namespace in arb_namespace()) {
        prop_assert_eq!(clamp_namespace_depth(&namespace, 0), "");
    }

    /// Property: clamping deeper than the namespace leaves it unchanged
    #[test]
    fn proptest_clamp_beyond_depth_is_identity(namespace in arb_namespace(), extra in 0usize..4) {
        let depth = namespace.split('.').count() + extra;

        prop_assert_eq!(clamp_namespace_depth(&namespace, depth), namespace);
    }

    /// Property: clamping keeps exactly the leading segments
    #[test]
    fn proptest_clamp_keeps_prefix(namespace in arb_namespace(), depth in 1usize..8) {
        let clamped = clamp_namespace_depth(&namespace, depth);
        let count = namespace.split('.').count();

        prop_assert_eq!(clamped.split('.').count(), depth.min(count));
        prop_assert!(namespace.starts_with(&clamped));
    }

    /// Property: inferred namespaces never contain separators or excluded segments
    #[test]
    fn proptest_resolve_output_is_clean(path in arb_path()) {
        let settings = NamespaceSettings::default();

        let resolved = NamespaceResolver::new(&settings).resolve(&path);

        prop_assert!(!resolved.namespace.contains(['/', '\\', '[', ']', ' ', '-', '_']));
        prop_assert!(resolved.namespace.split('.').all(|s| s != "Editor" && s != "Runtime"));
        prop_assert!(resolved.namespace.split('.').count() <= settings.max_depth);
    }
}
