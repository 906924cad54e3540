#![allow(non_snake_case)]

use super::*;

#[test]
fn FunctionRecord___header___has_no_name() {
    let header = FunctionRecord::header("Lifecycle");

    assert!(header.is_header());
    assert_eq!(header.comment, "Lifecycle");
    assert!(!header.is_emitted());
}

#[test]
fn FunctionRecord___header___never_emitted_even_if_included() {
    let header = FunctionRecord::header("Lifecycle").included(true);

    assert!(!header.is_emitted());
}

#[test]
fn FunctionRecord___with_scope___appends_space() {
    let function = FunctionRecord::new("Update").with_scope("public");

    assert_eq!(function.scope, "public ");
}

#[test]
fn ScriptPrescription___add_substitution___keeps_first_value() {
    let mut prescription = ScriptPrescription::new("$A");

    assert!(prescription.add_substitution("$A", "first"));
    assert!(!prescription.add_substitution("$A", "second"));

    assert_eq!(
        prescription.substitutions,
        vec![("$A".to_string(), "first".to_string())]
    );
}

#[test]
fn ScriptPrescription___emitted_functions___skips_headers_and_excluded() {
    let prescription = ScriptPrescription::new("").with_functions(vec![
        FunctionRecord::header("Messages").included(true),
        FunctionRecord::new("Awake").included(true),
        FunctionRecord::new("Start"),
    ]);

    let names: Vec<_> = prescription
        .emitted_functions()
        .filter_map(|f| f.name.as_deref())
        .collect();

    assert_eq!(names, vec!["Awake"]);
}

#[test]
fn ScriptPrescription___default___applies_prefix() {
    assert!(ScriptPrescription::default().namespace_apply_prefix);
}
