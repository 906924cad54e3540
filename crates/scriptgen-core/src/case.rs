//! Case conversion and name suffix utilities.
//!
//! Converts programmer identifiers into display text and between casing
//! conventions, and splits names like `Footstep_02` or `Item (3)` into a root
//! and a suffix.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `m_GUIItem` | [`to_human_readable`] | `GUI Item` |
//! | `myVariable` | [`to_camel_case`] | `myVariable` |
//! | `my variable` | [`to_pascal_case`] | `MyVariable` |
//! | `myVariable` | [`to_scream_case`] | `MY_VARIABLE` |

const HUNGARIAN_PREFIX: &str = "m_";
const UNDERSCORE: char = '_';

/// Default word separator for display text
pub const DEFAULT_SEPARATOR: char = ' ';

/// ASCII punctuation in the Unicode `P*` categories.
///
/// `$ + < = > ^ ` | ~` are symbols rather than punctuation and stay
/// eligible for word breaks.
fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() && !matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~')
}

fn is_excluded_symbol(c: char, separator: char) -> bool {
    c.is_whitespace() || is_punctuation(c) || c == separator
}

/// Convert programmer text such as a variable name into display text.
///
/// Strips a leading `m_`, turns spaces and underscores into `separator`,
/// inserts `separator` at case and letter/non-letter transitions and
/// capitalizes the first character. A run of capitals keeps its last capital
/// with the following word.
///
/// ```
/// use scriptgen_core::case::to_human_readable;
///
/// assert_eq!(to_human_readable("GUIItem", ' '), "GUI Item");
/// assert_eq!(to_human_readable("m_moveSpeed", ' '), "Move Speed");
/// assert_eq!(to_human_readable("Footstep02", ' '), "Footstep 02");
/// ```
pub fn to_human_readable(text: &str, separator: char) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut source = text.strip_prefix(HUNGARIAN_PREFIX).unwrap_or(text).to_string();
    if separator != DEFAULT_SEPARATOR {
        source = source.replace(DEFAULT_SEPARATOR, &separator.to_string());
    }
    if separator != UNDERSCORE {
        source = source.replace(UNDERSCORE, &separator.to_string());
    }

    let chars: Vec<char> = source.chars().collect();
    let mut result: Vec<char> = Vec::with_capacity(chars.len() * 2);
    let mut was_letter = false;
    let mut was_upper = false;
    let mut added_separator = false;

    for (i, &c) in chars.iter().enumerate() {
        let is_letter = c.is_alphabetic();
        let is_upper = c.is_uppercase();

        let transition = was_upper != is_upper || was_letter != is_letter;
        if transition
            && i > 0
            && !added_separator
            && !(is_excluded_symbol(c, separator) || is_excluded_symbol(chars[i - 1], separator))
        {
            // Upper to lower: `GUIItem` splits before the last capital.
            if was_upper
                && i > 1
                && result.len() >= 2
                && !is_excluded_symbol(result[result.len() - 2], separator)
            {
                if was_letter && is_letter {
                    let at = result.len() - 1;
                    result.insert(at, separator);
                } else {
                    result.push(separator);
                }
                added_separator = true;
            }
            if !was_upper {
                result.push(separator);
                added_separator = true;
            }
        } else {
            added_separator = false;
        }

        if i == 0 {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }

        was_letter = is_letter;
        was_upper = is_upper;
    }

    result.into_iter().collect()
}

/// Convert text to camelCase.
///
/// The text is split into words with [`to_human_readable`] first. Whitespace
/// separators are dropped, other separators are kept, the character after a
/// separator is capitalized and every other character is lowercased,
/// including the first one.
///
/// ```
/// use scriptgen_core::case::to_camel_case;
///
/// assert_eq!(to_camel_case("my variable", ' '), "myVariable");
/// assert_eq!(to_camel_case("MoveSpeed", ' '), "moveSpeed");
/// ```
pub fn to_camel_case(text: &str, separator: char) -> String {
    if text.is_empty() {
        return String::new();
    }

    let words: Vec<char> = to_human_readable(text, separator).chars().collect();
    let mut result = String::with_capacity(words.len());

    let mut i = 0;
    while i < words.len() {
        let c = words[i];
        if c.is_whitespace() || c == separator {
            if !c.is_whitespace() {
                result.push(c);
            }
            if let Some(&next) = words.get(i + 1) {
                result.extend(next.to_uppercase());
                i += 1;
            }
        } else {
            result.extend(c.to_lowercase());
        }
        i += 1;
    }

    result
}

/// Convert text to PascalCase.
///
/// ```
/// use scriptgen_core::case::to_pascal_case;
///
/// assert_eq!(to_pascal_case("my variable", ' '), "MyVariable");
/// assert_eq!(to_pascal_case("m_health", ' '), "Health");
/// ```
pub fn to_pascal_case(text: &str, separator: char) -> String {
    let camel = to_camel_case(text, separator);
    let mut chars = camel.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Convert text to SCREAM_CASE.
///
/// ```
/// use scriptgen_core::case::to_scream_case;
///
/// assert_eq!(to_scream_case("myVariable", '_'), "MY_VARIABLE");
/// ```
pub fn to_scream_case(text: &str, separator: char) -> String {
    to_human_readable(text, separator).to_uppercase()
}

/// Split `Footstep_02` into `("Footstep_", "02")`.
///
/// With `include_separators` spaces and underscores between the digits and
/// the root also count as part of the suffix.
pub fn number_suffix(name: &str, include_separators: bool) -> (String, String) {
    let root_len = name
        .char_indices()
        .rev()
        .take_while(|&(_, c)| c.is_numeric() || (include_separators && (c == ' ' || c == '_')))
        .last()
        .map_or(name.len(), |(i, _)| i);

    (name[..root_len].to_string(), name[root_len..].to_string())
}

/// Split `Footstep (New)` into `("Footstep ", "(New)")` at the last `(`.
///
/// Names that do not end with `)` are returned whole with an empty suffix.
pub fn parentheses_suffix(name: &str) -> (String, String) {
    if !name.ends_with(')') {
        return (name.to_string(), String::new());
    }
    match name.rfind('(') {
        Some(start) => (name[..start].to_string(), name[start..].to_string()),
        None => (name.to_string(), String::new()),
    }
}

/// Split at the last `_`, keeping the underscore in the suffix.
pub fn underscore_suffix(name: &str) -> (String, String) {
    match name.rfind('_') {
        Some(start) => (name[..start].to_string(), name[start..].to_string()),
        None => (name.to_string(), String::new()),
    }
}

/// Split at the last space, keeping the space in the suffix.
pub fn space_suffix(name: &str) -> (String, String) {
    match name.rfind(' ') {
        Some(start) => (name[..start].to_string(), name[start..].to_string()),
        None => (name.to_string(), String::new()),
    }
}

/// The number of a name ending in `(<integer>)`, like `Item (3)`.
pub fn try_split_number_in_parens(name: &str) -> Option<i32> {
    let inner = name.strip_suffix(')')?;
    let open = inner.rfind('(')?;
    inner[open + 1..].trim().parse().ok()
}

/// Set or replace a trailing `(<number>)` group.
///
/// ```
/// use scriptgen_core::case::set_number_suffix;
///
/// assert_eq!(set_number_suffix("Item", 3), "Item (3)");
/// assert_eq!(set_number_suffix("Item (2)", 5), "Item (5)");
/// ```
pub fn set_number_suffix(name: &str, number: i32) -> String {
    let Some(without_close) = name.strip_suffix(')') else {
        return format!("{name} ({number})");
    };

    match without_close.rfind('(') {
        Some(open) => format!("{}({number})", &name[..open]),
        None => format!("{} ({number})", without_close.trim_end_matches(' ')),
    }
}

#[cfg(test)]
#[path = "case/case_tests.rs"]
mod case_tests;
