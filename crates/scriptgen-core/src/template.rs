//! Script templates and the template menu
//!
//! A template may start with a directive naming the class the generated
//! script derives from:
//!
//! ```text
//! BASECLASS=MonoBehaviour
//! using UnityEngine;
//! ...
//! ```
//!
//! The base class selects the function specification file and decides
//! whether the script is an editor script.

use std::cmp::Ordering;

const BASE_CLASS_DIRECTIVE: &str = "BASECLASS";
/// Characters of the directive line before the base class name, `BASECLASS=`
const BASE_CLASS_OFFSET: usize = 10;

/// Placeholder shown instead of a template that cannot be found
pub const NO_TEMPLATE: &str = "No Template Found";

pub const MONO_BEHAVIOUR_TEMPLATE: &str = "MonoBehaviour";
pub const PLAIN_CLASS_TEMPLATE: &str = "Class";

const EDITOR_RANK: u32 = 100;

/// File name suffix of script templates, `<Name>.cs.txt`
pub const TEMPLATE_EXTENSION: &str = ".cs.txt";
/// File name suffix of function specifications, `<BaseClass>.functions.txt`
pub const FUNCTIONS_EXTENSION: &str = ".functions.txt";
/// File holding the `$ClassSummary` text
pub const HEADER_FILE_NAME: &str = "Header.txt";

/// A template split into its base class directive and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDocument {
    pub base_class: Option<String>,
    pub body: String,
}

impl TemplateDocument {
    /// Split off the `BASECLASS` directive line, if there is one.
    ///
    /// The directive only counts on the first line and only when the text has
    /// more than one line. A directive without a class name is left in place.
    ///
    /// ```
    /// use scriptgen_core::template::TemplateDocument;
    ///
    /// let doc = TemplateDocument::parse("BASECLASS=Editor\nusing UnityEditor;\n");
    /// assert_eq!(doc.base_class.as_deref(), Some("Editor"));
    /// assert_eq!(doc.body, "using UnityEditor;\n");
    /// ```
    pub fn parse(raw: &str) -> Self {
        let base_class = raw
            .split_once('\n')
            .and_then(|(first_line, rest)| base_class_of(first_line).map(|base| (base, rest)));

        match base_class {
            Some((base, body)) => Self {
                base_class: Some(base),
                body: body.to_string(),
            },
            None => Self {
                base_class: None,
                body: raw.to_string(),
            },
        }
    }

    /// Key under which function inclusion choices for this template are kept
    pub fn group_key(&self) -> Option<&str> {
        self.base_class.as_deref()
    }
}

fn base_class_of(first_line: &str) -> Option<String> {
    if !first_line.contains(BASE_CLASS_DIRECTIVE) {
        return None;
    }
    let name = first_line
        .char_indices()
        .nth(BASE_CLASS_OFFSET)
        .map_or("", |(start, _)| &first_line[start..])
        .trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// The text shown when no template exists at either location
pub fn missing_template_text(builtin_path: &str, custom_path: &str) -> String {
    format!("{NO_TEMPLATE} @\nbuilt-in path: {builtin_path}\nor custom path: {custom_path}")
}

/// One available template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub name: String,
    pub is_editor: bool,
}

impl TemplateEntry {
    pub fn new(name: impl Into<String>, is_editor: bool) -> Self {
        Self {
            name: name.into(),
            is_editor,
        }
    }

    fn rank(&self) -> u32 {
        if self.name == MONO_BEHAVIOUR_TEMPLATE {
            0
        } else if self.name == PLAIN_CLASS_TEMPLATE {
            1
        } else if self.is_editor {
            EDITOR_RANK
        } else {
            2
        }
    }
}

/// An item of the template menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateMenuItem {
    Template(String),
    /// Divides runtime templates from editor templates
    Separator,
}

/// Order templates for display.
///
/// `MonoBehaviour` comes first and `Class` second, then the other runtime
/// templates by name, then editor templates by name behind a separator.
/// Duplicate names keep only their first entry.
pub fn order_template_menu(entries: impl IntoIterator<Item = TemplateEntry>) -> Vec<TemplateMenuItem> {
    let mut unique: Vec<TemplateEntry> = Vec::new();
    for entry in entries {
        if !unique.iter().any(|existing| existing.name == entry.name) {
            unique.push(entry);
        }
    }
    unique.sort_by(compare_entries);

    let mut menu = Vec::with_capacity(unique.len() + 1);
    let mut separated = false;
    for entry in unique {
        if entry.rank() == EDITOR_RANK && !separated {
            menu.push(TemplateMenuItem::Separator);
            separated = true;
        }
        menu.push(TemplateMenuItem::Template(entry.name));
    }
    menu
}

fn compare_entries(a: &TemplateEntry, b: &TemplateEntry) -> Ordering {
    a.rank().cmp(&b.rank()).then_with(|| a.name.cmp(&b.name))
}
