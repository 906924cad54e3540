#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn parse(source: &str) -> ParsedFunctions {
    FunctionSpecParser::new().parse(source)
}

fn single(line: &str) -> FunctionRecord {
    let parsed = parse(line);
    assert!(parsed.is_clean(), "unexpected diagnostics: {:?}", parsed.diagnostics);
    assert_eq!(parsed.records.len(), 1);
    parsed.records.into_iter().next().unwrap()
}

// Headers

#[test]
fn parse___header_line___produces_header_record() {
    let record = single("header Lifecycle Messages");

    assert!(record.is_header());
    assert_eq!(record.comment, "Lifecycle Messages");
}

#[test]
fn parse___header_prefix___is_case_insensitive() {
    let record = single("HEADER Physics");

    assert!(record.is_header());
    assert_eq!(record.comment, "Physics");
}

// Functions

#[test]
fn parse___void_function___has_no_return_type() {
    let record = single("void Update() Called every frame.");

    assert_eq!(record.name.as_deref(), Some("Update"));
    assert_eq!(record.return_type, None);
    assert_eq!(record.scope, "");
    assert!(record.parameters.is_empty());
    assert_eq!(record.comment, "Called every frame.");
}

#[test]
fn parse___default_prefix___includes_function() {
    let record = single("DEFAULT void Start()");

    assert!(record.include);
}

#[test]
fn parse___without_default_prefix___excludes_function() {
    let record = single("void Start()");

    assert!(!record.include);
}

#[test_case("private void A()", "private " ; "private")]
#[test_case("protected void A()", "protected " ; "protected")]
#[test_case("public void A()", "public " ; "public")]
#[test_case("void A()", "" ; "no scope")]
fn parse___scope_keyword___sets_scope(line: &str, expected: &str) {
    assert_eq!(single(line).scope, expected);
}

#[test]
fn parse___static_and_override___set_flags() {
    let record = single("public static override void OnValidate()");

    assert!(record.is_static);
    assert!(record.is_override);
    assert_eq!(record.scope, "public ");
}

#[test]
fn parse___return_type___reads_default_expression() {
    let record = single("public override string ToString() return string.Empty; Describes the object.");

    assert_eq!(record.return_type.as_deref(), Some("string"));
    assert_eq!(record.return_default, "return string.Empty");
    assert_eq!(record.comment, "Describes the object.");
}

#[test]
fn parse___parameters___are_split_into_name_and_type() {
    let record = single("void OnCollisionEnter(Collision collision, int layer)");

    assert_eq!(
        record.parameters,
        vec![
            Parameter::new("collision", "Collision"),
            Parameter::new("layer", "int"),
        ]
    );
}

#[test]
fn parse___trailing_comma___ignores_empty_parameter() {
    let record = single("void A(int a,)");

    assert_eq!(record.parameters, vec![Parameter::new("a", "int")]);
}

#[test]
fn parse___every_line___keeps_file_order() {
    let parsed = parse("header Messages\nDEFAULT void Awake()\nvoid Start()\n");

    let names: Vec<_> = parsed.records.iter().map(|r| r.name.as_deref()).collect();
    assert_eq!(names, vec![None, Some("Awake"), Some("Start")]);
}

#[test]
fn parse___crlf_line_endings___are_stripped() {
    let parsed = parse("void Awake()\r\nvoid Start()\r\n");

    assert!(parsed.is_clean());
    assert_eq!(parsed.records[1].name.as_deref(), Some("Start"));
    assert_eq!(parsed.records[0].comment, "");
}

#[test]
fn parse___blank_lines___are_skipped_silently() {
    let parsed = parse("void Awake()\n\n   \nvoid Start()");

    assert!(parsed.is_clean());
    assert_eq!(parsed.records.len(), 2);
}

// Malformed lines

#[test_case("void Update" ; "missing open paren")]
#[test_case("void Update(" ; "missing close paren")]
#[test_case("int Count() 0" ; "missing semicolon")]
#[test_case("Update()" ; "missing return type separator")]
#[test_case("void A(int)" ; "parameter without name")]
#[test_case("void" ; "too short")]
#[test_case("voidA()" ; "shorter than default prefix")]
fn parse___malformed_line___is_reported(line: &str) {
    let parsed = parse(line);

    assert!(parsed.records.is_empty());
    assert_eq!(parsed.diagnostics.len(), 1);
    assert!(parsed.diagnostics[0].is_recoverable());
}

#[test]
fn parse___malformed_line___does_not_stop_parsing() {
    let parsed = parse("void Awake()\nvoid Broken\nvoid Start()");

    assert_eq!(parsed.records.len(), 2);
    assert_eq!(
        parsed.diagnostics,
        vec![ScriptGenError::MalformedFunctionLine {
            line: 2,
            text: "void Broken".to_string(),
            reason: "missing '('".to_string(),
        }]
    );
}

#[test]
fn parse___line_numbers___count_header_lines() {
    let parsed = parse("header Messages\nbroken line\n");

    match &parsed.diagnostics[0] {
        ScriptGenError::MalformedFunctionLine { line, .. } => assert_eq!(*line, 2),
        other => panic!("unexpected diagnostic {other:?}"),
    }
}

// Inclusion lookup

#[test]
fn parse___inclusion_lookup___receives_group_and_default() {
    let lookup = |group: Option<&str>, name: &str, default: bool| {
        assert_eq!(group, Some("MonoBehaviour"));
        name == "Start" || default
    };

    let parsed = FunctionSpecParser::new()
        .with_group_key(Some("MonoBehaviour"))
        .with_inclusion(&lookup)
        .parse("DEFAULT void Awake()\nvoid Start()\nvoid Update()");

    let included: Vec<_> = parsed.records.iter().map(|r| r.include).collect();
    assert_eq!(included, vec![true, true, false]);
}

#[test]
fn parse___inclusion_lookup___not_consulted_for_headers() {
    let lookup = |_: Option<&str>, _: &str, _: bool| -> bool { panic!("headers have no inclusion") };

    let parsed = FunctionSpecParser::new()
        .with_inclusion(&lookup)
        .parse("header Messages");

    assert!(!parsed.records[0].include);
}
