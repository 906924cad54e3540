//! Where a generated script goes and what it may be called

use crate::namespace::clamp_namespace_depth;

const PATH_SEPARATORS: [char; 2] = ['/', '\\'];
const INVALID_PATH_CHARS: [char; 8] = ['<', '>', ':', '"', '|', '?', '*', '\0'];
const EDITOR_FOLDER: &str = "Editor";
const SCRIPT_EXTENSION: &str = "cs";
const INCLUSION_KEY_PREFIX: &str = "FunctionData_";
const DUMMY_NAMESPACE_DEPTH: usize = 2;

/// Whether `name` can be used as a class name.
///
/// ```
/// use scriptgen_core::placement::is_valid_class_name;
///
/// assert!(is_valid_class_name("PlayerController"));
/// assert!(!is_valid_class_name("2DController"));
/// ```
pub fn is_valid_class_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Whether a script cannot be written below `directory`.
///
/// Rejects characters that are not allowed in file names on some platform
/// and empty folder names such as `Assets//Scripts`.
pub fn has_invalid_path_chars(directory: &str) -> bool {
    directory.contains(INVALID_PATH_CHARS)
        || target_directory(directory)
            .split(PATH_SEPARATORS)
            .any(str::is_empty)
}

/// Whether `directory` has an `Editor` folder anywhere in it
pub fn is_in_editor_folder(directory: &str) -> bool {
    directory
        .split(PATH_SEPARATORS)
        .any(|segment| segment.eq_ignore_ascii_case(EDITOR_FOLDER))
}

/// Move the target directory in or out of an `Editor` folder.
///
/// Editor scripts go into an `Editor` subfolder unless the directory already
/// is inside one. Other scripts move out of a directory ending in `Editor`.
pub fn adjust_directory_for_template(directory: &str, is_editor_template: bool) -> String {
    if is_editor_template {
        if is_in_editor_folder(directory) {
            directory.to_string()
        } else if directory.is_empty() {
            EDITOR_FOLDER.to_string()
        } else {
            format!("{}/{EDITOR_FOLDER}", directory.trim_end_matches(PATH_SEPARATORS))
        }
    } else if let Some(parent) = directory.strip_suffix(EDITOR_FOLDER) {
        parent.trim_end_matches(PATH_SEPARATORS).to_string()
    } else {
        directory.to_string()
    }
}

/// `directory` without leading and trailing separators
pub fn target_directory(directory: &str) -> &str {
    directory.trim_matches(PATH_SEPARATORS)
}

/// Path of the script file for `class_name` below `directory`
pub fn target_path(directory: &str, class_name: &str) -> String {
    let directory = target_directory(directory);
    if directory.is_empty() {
        format!("{class_name}.{SCRIPT_EXTENSION}")
    } else {
        format!("{directory}/{class_name}.{SCRIPT_EXTENSION}")
    }
}

/// Key under which the inclusion choice for a function is stored.
///
/// ```
/// use scriptgen_core::placement::inclusion_key;
///
/// assert_eq!(inclusion_key(Some("MonoBehaviour"), "Update"), "FunctionData_MonoBehaviour_Update");
/// assert_eq!(inclusion_key(None, "Update"), "FunctionData_Update");
/// ```
pub fn inclusion_key(base_class: Option<&str>, function_name: &str) -> String {
    match base_class {
        Some(base) => format!("{INCLUSION_KEY_PREFIX}{base}_{function_name}"),
        None => format!("{INCLUSION_KEY_PREFIX}{function_name}"),
    }
}

/// Short namespace shown as an example of what will be generated
pub fn dummy_namespace(namespace: &str) -> String {
    clamp_namespace_depth(namespace, DUMMY_NAMESPACE_DEPTH)
}
