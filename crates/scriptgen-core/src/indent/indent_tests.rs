#![allow(non_snake_case)]

use super::*;

fn spaces() -> Indenter {
    Indenter::new("    ").unwrap()
}

// Indenter::new

#[test]
fn Indenter___new___rejects_empty_unit() {
    let result = Indenter::new("");

    assert!(matches!(result, Err(ScriptGenError::InvalidArgument(_))));
}

#[test]
fn Indenter___default___uses_four_spaces() {
    assert_eq!(Indenter::default().unit(), "    ");
}

// indentation_count_at

#[test]
fn indentation_count_at___counts_whole_units() {
    let text = "class A\n        $X";

    let count = spaces().indentation_count_at(text, 16).unwrap();

    assert_eq!(count, 2);
}

#[test]
fn indentation_count_at___ignores_partial_unit() {
    let text = "      $X";

    let count = spaces().indentation_count_at(text, 6).unwrap();

    assert_eq!(count, 1);
}

#[test]
fn indentation_count_at___stops_at_other_characters() {
    let text = "x    $X";

    let count = spaces().indentation_count_at(text, 5).unwrap();

    assert_eq!(count, 1);
}

#[test]
fn indentation_count_at___start_of_text___is_zero() {
    assert_eq!(spaces().indentation_count_at("$X", 0).unwrap(), 0);
}

#[test]
fn indentation_count_at___position_past_end___is_invalid() {
    let result = spaces().indentation_count_at("abc", 10);

    assert!(matches!(result, Err(ScriptGenError::InvalidArgument(_))));
}

#[test]
fn indentation_count_at___tab_unit___counts_tabs() {
    let tabs = Indenter::new("\t").unwrap();

    assert_eq!(tabs.indentation_count_at("\t\t\tx", 3).unwrap(), 3);
}

// indent

#[test]
fn indent___skip_first_line___leaves_first_line() {
    let result = spaces().indent("A\nB\nC", 1, true);

    assert_eq!(result, "A\n    B\n    C");
}

#[test]
fn indent___all_lines___indents_every_line() {
    let result = spaces().indent("A\nB", 2, false);

    assert_eq!(result, "        A\n        B");
}

#[test]
fn indent___carriage_returns___stay_attached() {
    let result = spaces().indent("A\r\nB\r\n", 1, true);

    assert_eq!(result, "A\r\n    B\r\n    ");
}

#[test]
fn indent___zero_levels___is_identity() {
    assert_eq!(spaces().indent("A\nB", 0, false), "A\nB");
}

// indent_range

#[test]
fn indent_range___only_touches_range() {
    let text = "keep\nA\nB\nkeep";

    let result = spaces().indent_range(text, 1, 5..8, false).unwrap();

    assert_eq!(result, "keep\n    A\n    B\nkeep");
}

#[test]
fn indent_range___out_of_bounds___is_invalid() {
    let result = spaces().indent_range("abc", 1, 1..10, false);

    assert!(matches!(result, Err(ScriptGenError::InvalidArgument(_))));
}

#[test]
fn indent_range___whole_text___matches_indent() {
    let text = "A\r\nB\n\nC\n";

    for skip_first_line in [false, true] {
        assert_eq!(
            spaces().indent_range(text, 2, 0..text.len(), skip_first_line).unwrap(),
            spaces().indent(text, 2, skip_first_line)
        );
    }
}

#[test]
fn indent___trailing_line_break___indents_empty_last_line() {
    assert_eq!(spaces().indent("A\nB\n", 1, false), "    A\n    B\n    ");
}

// replace_keeping_indentation

#[test]
fn replace_keeping_indentation___indents_continuation_lines() {
    let result = spaces()
        .replace_keeping_indentation("    $X\n", "$X", "line1\nline2")
        .unwrap();

    assert_eq!(result, "    line1\n    line2\n");
}

#[test]
fn replace_keeping_indentation___replaces_every_occurrence() {
    let text = "$X\n    {\n        $X\n    }";

    let result = spaces()
        .replace_keeping_indentation(text, "$X", "a\nb")
        .unwrap();

    assert_eq!(result, "a\nb\n    {\n        a\n        b\n    }");
}

#[test]
fn replace_keeping_indentation___no_occurrence___returns_text() {
    let result = spaces()
        .replace_keeping_indentation("nothing here", "$X", "a")
        .unwrap();

    assert_eq!(result, "nothing here");
}

#[test]
fn replace_keeping_indentation___self_referential___is_rejected() {
    let result = spaces().replace_keeping_indentation("$X", "$X", "before $X after");

    assert_eq!(
        result,
        Err(ScriptGenError::SelfReferentialSubstitution {
            token: "$X".to_string()
        })
    );
}

#[test]
fn replace_keeping_indentation___empty_token___is_invalid() {
    let result = spaces().replace_keeping_indentation("abc", "", "x");

    assert!(matches!(result, Err(ScriptGenError::InvalidArgument(_))));
}

#[test]
fn replace_keeping_indentation___token_formed_across_insertion___is_not_rescanned() {
    // Inserting "$" in front of the trailing "X" spells the token again.
    let result = spaces()
        .replace_keeping_indentation("$XX", "$X", "$")
        .unwrap();

    assert_eq!(result, "$X");
}
