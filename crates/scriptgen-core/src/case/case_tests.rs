#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// to_human_readable

#[test_case("GUIItem", "GUI Item" ; "acronym keeps last capital with next word")]
#[test_case("myVariable", "My Variable" ; "lower to upper")]
#[test_case("m_moveSpeed", "Move Speed" ; "hungarian prefix stripped")]
#[test_case("Footstep02", "Footstep 02" ; "letter to digit")]
#[test_case("move_speed", "Move speed" ; "underscore becomes separator")]
#[test_case("PlayerController", "Player Controller" ; "pascal case")]
#[test_case("AB1", "AB 1" ; "capitals to digit")]
#[test_case("x", "X" ; "single character")]
#[test_case("", "" ; "empty")]
fn to_human_readable___splits_words(input: &str, expected: &str) {
    assert_eq!(to_human_readable(input, DEFAULT_SEPARATOR), expected);
}

#[test]
fn to_human_readable___does_not_double_existing_separators() {
    assert_eq!(to_human_readable("Player Controller", ' '), "Player Controller");
    assert_eq!(to_human_readable("GUI Item", ' '), "GUI Item");
}

#[test]
fn to_human_readable___custom_separator___replaces_spaces() {
    assert_eq!(to_human_readable("player controller", '_'), "Player_controller");
    assert_eq!(to_human_readable("PlayerController", '-'), "Player-Controller");
}

#[test]
fn to_human_readable___only_prefix___returns_empty() {
    assert_eq!(to_human_readable("m_", ' '), "");
}

#[test]
fn to_human_readable___punctuation_does_not_break_words() {
    assert_eq!(to_human_readable("a.b", ' '), "A.b");
}

// to_camel_case

#[test_case("my variable", "myVariable" ; "words")]
#[test_case("MoveSpeed", "moveSpeed" ; "pascal input")]
#[test_case("GUIItem", "guiItem" ; "acronym")]
#[test_case("m_health", "health" ; "hungarian prefix")]
#[test_case("", "" ; "empty")]
fn to_camel_case___lowercases_first_word(input: &str, expected: &str) {
    assert_eq!(to_camel_case(input, DEFAULT_SEPARATOR), expected);
}

#[test]
fn to_camel_case___non_whitespace_separator___is_kept() {
    assert_eq!(to_camel_case("MoveSpeed", '_'), "move_Speed");
}

// to_pascal_case

#[test_case("my variable", "MyVariable" ; "words")]
#[test_case("moveSpeed", "MoveSpeed" ; "camel input")]
#[test_case("m_health", "Health" ; "hungarian prefix")]
#[test_case("a", "A" ; "single character")]
#[test_case("", "" ; "empty")]
fn to_pascal_case___capitalizes_every_word(input: &str, expected: &str) {
    assert_eq!(to_pascal_case(input, DEFAULT_SEPARATOR), expected);
}

// to_scream_case

#[test]
fn to_scream_case___uppercases_with_underscores() {
    assert_eq!(to_scream_case("myVariable", '_'), "MY_VARIABLE");
    assert_eq!(to_scream_case("maxHealth2", '_'), "MAX_HEALTH_2");
}

// number_suffix

#[test]
fn number_suffix___splits_trailing_digits() {
    let (root, suffix) = number_suffix("Footstep_02", false);

    assert_eq!(root, "Footstep_");
    assert_eq!(suffix, "02");
}

#[test]
fn number_suffix___with_separators___includes_underscore() {
    let (root, suffix) = number_suffix("Footstep_02", true);

    assert_eq!(root, "Footstep");
    assert_eq!(suffix, "_02");
}

#[test]
fn number_suffix___no_digits___returns_whole_name() {
    let (root, suffix) = number_suffix("Footstep", false);

    assert_eq!(root, "Footstep");
    assert_eq!(suffix, "");
}

#[test]
fn number_suffix___empty___returns_empty_parts() {
    assert_eq!(number_suffix("", false), (String::new(), String::new()));
}

#[test]
fn number_suffix___only_digits___root_is_empty() {
    assert_eq!(number_suffix("123", false), (String::new(), "123".to_string()));
}

// parentheses_suffix

#[test]
fn parentheses_suffix___splits_at_last_open_paren() {
    let (root, suffix) = parentheses_suffix("Footstep (New) (2)");

    assert_eq!(root, "Footstep (New) ");
    assert_eq!(suffix, "(2)");
}

#[test]
fn parentheses_suffix___no_closing_paren___returns_whole_name() {
    assert_eq!(
        parentheses_suffix("Footstep (New"),
        ("Footstep (New".to_string(), String::new())
    );
}

#[test]
fn parentheses_suffix___closing_without_opening___returns_whole_name() {
    assert_eq!(
        parentheses_suffix("Footstep)"),
        ("Footstep)".to_string(), String::new())
    );
}

// underscore_suffix / space_suffix

#[test]
fn underscore_suffix___splits_at_last_underscore() {
    assert_eq!(
        underscore_suffix("Enemy_Boss_Final"),
        ("Enemy_Boss".to_string(), "_Final".to_string())
    );
    assert_eq!(underscore_suffix("Enemy"), ("Enemy".to_string(), String::new()));
}

#[test]
fn space_suffix___splits_at_last_space() {
    assert_eq!(
        space_suffix("Main Camera 2"),
        ("Main Camera".to_string(), " 2".to_string())
    );
}

// try_split_number_in_parens

#[test_case("Item (3)", Some(3) ; "number")]
#[test_case("Item (-1)", Some(-1) ; "negative")]
#[test_case("Item (New)", None ; "not a number")]
#[test_case("Item", None ; "no parentheses")]
#[test_case("Item 3)", None ; "no opening paren")]
fn try_split_number_in_parens___parses_trailing_group(input: &str, expected: Option<i32>) {
    assert_eq!(try_split_number_in_parens(input), expected);
}

// set_number_suffix

#[test]
fn set_number_suffix___appends_when_missing() {
    assert_eq!(set_number_suffix("Item", 3), "Item (3)");
}

#[test]
fn set_number_suffix___replaces_existing_group() {
    assert_eq!(set_number_suffix("Item (2)", 5), "Item (5)");
    assert_eq!(set_number_suffix("Item (Copy)", 2), "Item (2)");
}

#[test]
fn set_number_suffix___unbalanced_paren___is_rewritten() {
    assert_eq!(set_number_suffix("Item )", 4), "Item (4)");
}
