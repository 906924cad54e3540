//! Folder path to namespace inference.
//!
//! A script created in `Assets/MyGame/Scripts/Gameplay/Editor` ends up in
//! namespace `MyGame.Gameplay`:
//!
//! ```text
//! Assets/MyGame/Scripts/Gameplay/Editor/Foo.cs
//!     ↓ strip the asset root
//! MyGame/Scripts/Gameplay/Editor/Foo.cs
//!     ↓ drop everything up to the scripts folder, keep the project folder
//! MyGame/Gameplay/Editor/Foo.cs
//!     ↓ drop the file name
//! MyGame/Gameplay/Editor
//!     ↓ convert to segments, clamp depth, remove excluded segments
//! MyGame.Gameplay
//! ```
//!
//! Paths below `Packages/` may carry their own root namespace (from an
//! assembly definition); that lookup belongs to the host and is injected
//! through [`PackageNamespaceLookup`].

use crate::config::NamespaceSettings;
use tracing::debug;

const FOLDER_SEPARATOR: char = '/';
const ALTERNATE_FOLDER_SEPARATOR: char = '\\';
const EXTENSION_SYMBOL: char = '.';
const SUB_NAMESPACE_SYMBOL: char = '.';

const ASSETS_PREFIX: &str = "Assets/";
const PACKAGES_PREFIX: &str = "Packages/";

/// Supplies a root namespace for package paths
pub trait PackageNamespaceLookup {
    /// The root namespace configured for `path`, if any
    fn package_namespace(&self, path: &str) -> Option<String>;
}

impl<F> PackageNamespaceLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn package_namespace(&self, path: &str) -> Option<String> {
        self(path)
    }
}

/// An inferred namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNamespace {
    pub namespace: String,
    /// `false` when the namespace is complete on its own and no company
    /// prefix should be put in front of it
    pub apply_prefix: bool,
}

impl ResolvedNamespace {
    fn inferred(namespace: String) -> Self {
        Self {
            namespace,
            apply_prefix: true,
        }
    }
}

/// Infers namespaces from folder paths
pub struct NamespaceResolver<'a> {
    settings: &'a NamespaceSettings,
    package_lookup: Option<&'a dyn PackageNamespaceLookup>,
}

impl<'a> NamespaceResolver<'a> {
    pub fn new(settings: &'a NamespaceSettings) -> Self {
        Self {
            settings,
            package_lookup: None,
        }
    }

    /// Consult `lookup` for paths below `Packages/`
    pub fn with_package_lookup(mut self, lookup: &'a dyn PackageNamespaceLookup) -> Self {
        self.package_lookup = Some(lookup);
        self
    }

    /// Infer the namespace for a project-relative folder or file path
    pub fn resolve(&self, path: &str) -> ResolvedNamespace {
        let normalized = path.replace(ALTERNATE_FOLDER_SEPARATOR, "/");
        let mut path = normalized.trim_end_matches(FOLDER_SEPARATOR);
        path = path.strip_prefix(ASSETS_PREFIX).unwrap_or(path);

        if let Some(package_path) = path.strip_prefix(PACKAGES_PREFIX) {
            if let Some(root) = self.lookup_package_namespace(path) {
                debug!(path, namespace = %root, "using package root namespace");
                return ResolvedNamespace {
                    namespace: root,
                    apply_prefix: false,
                };
            }
            path = package_path;
        }

        let namespace = namespace_for_folder(
            path,
            &self.settings.scripts_folder,
            self.settings.max_depth,
            &self.settings.excluded_segments,
        );
        debug!(path, namespace = %namespace, "inferred namespace");
        ResolvedNamespace::inferred(namespace)
    }

    fn lookup_package_namespace(&self, path: &str) -> Option<String> {
        self.package_lookup?
            .package_namespace(path)
            .filter(|root| !root.is_empty())
    }
}

/// Infer a namespace from a path that has its root prefix already removed
fn namespace_for_folder(
    path: &str,
    scripts_folder: &str,
    max_depth: usize,
    excluded_segments: &[String],
) -> String {
    let path = remove_path_up_until(path, ASSETS_PREFIX, 0);

    // Everything up to the scripts folder goes, except the project folder.
    let first_subfolder = path.find(FOLDER_SEPARATOR).map_or(0, |i| i + 1);
    let scripts_folder_path = format!("{scripts_folder}{FOLDER_SEPARATOR}");
    let path = if path.contains(&scripts_folder_path) {
        remove_path_up_until(&path, &scripts_folder_path, first_subfolder)
    } else {
        // Created directly inside the scripts folder.
        remove_path_up_until(&path, scripts_folder, first_subfolder.saturating_sub(1))
    };

    let path = remove_file_name(&path);
    let namespace = folder_path_to_namespace(path);
    let namespace = clamp_namespace_depth(&namespace, max_depth);

    namespace
        .split(SUB_NAMESPACE_SYMBOL)
        .filter(|segment| !excluded_segments.iter().any(|excluded| excluded == segment))
        .collect::<Vec<_>>()
        .join(".")
}

/// Remove everything from `start` up to and including the first occurrence
/// of `sub_path` at or after `start`.
///
/// Returns the path unchanged when `sub_path` does not occur there.
pub fn remove_path_up_until(path: &str, sub_path: &str, start: usize) -> String {
    let Some(tail) = path.get(start..) else {
        return path.to_string();
    };
    match tail.find(sub_path) {
        Some(offset) => {
            let end = start + offset + sub_path.len();
            format!("{}{}", &path[..start], &path[end..])
        }
        None => path.to_string(),
    }
}

/// Drop the last path segment when it looks like a file name.
///
/// Only segments containing a `.` count as file names, and a path without any
/// separator is never trimmed.
pub fn remove_file_name(path: &str) -> &str {
    match path.rfind([FOLDER_SEPARATOR, ALTERNATE_FOLDER_SEPARATOR]) {
        Some(last) if path[last..].contains(EXTENSION_SYMBOL) => &path[..last],
        _ => path,
    }
}

/// Turn a folder path into dot separated namespace segments.
///
/// Square brackets, which projects use to sort a folder first, and word
/// separators (space, `-`, `_`) are dropped.
///
/// ```
/// use scriptgen_core::namespace::folder_path_to_namespace;
///
/// assert_eq!(folder_path_to_namespace("[MyGame]/Game Play\\AI_Core"), "MyGame.GamePlay.AICore");
/// ```
pub fn folder_path_to_namespace(path: &str) -> String {
    path.chars()
        .filter(|c| !matches!(c, '[' | ']' | ' ' | '-' | '_'))
        .map(|c| match c {
            FOLDER_SEPARATOR | ALTERNATE_FOLDER_SEPARATOR => SUB_NAMESPACE_SYMBOL,
            other => other,
        })
        .collect()
}

/// Keep the first `depth` segments of a namespace.
///
/// ```
/// use scriptgen_core::namespace::clamp_namespace_depth;
///
/// assert_eq!(clamp_namespace_depth("System.ConfigLoader.Benchmark", 2), "System.ConfigLoader");
/// assert_eq!(clamp_namespace_depth("System.ConfigLoader.Benchmark", 0), "");
/// ```
pub fn clamp_namespace_depth(namespace: &str, depth: usize) -> String {
    if depth == 0 {
        return String::new();
    }
    namespace
        .split(SUB_NAMESPACE_SYMBOL)
        .take(depth)
        .collect::<Vec<_>>()
        .join(".")
}

/// `Company` + `Game` → `Company.Game`
pub fn add_namespace_before(namespace: &str, sub_namespace: &str) -> String {
    format!("{sub_namespace}{SUB_NAMESPACE_SYMBOL}{namespace}")
}

/// `Company.Game` + `Editor` → `Company.Game.Editor`
pub fn add_namespace_after(namespace: &str, sub_namespace: &str) -> String {
    format!("{namespace}{SUB_NAMESPACE_SYMBOL}{sub_namespace}")
}
