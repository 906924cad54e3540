//! File system implementations of the generator's collaborators

use anyhow::{Context, Result};
use scriptgen_core::placement::inclusion_key;
use scriptgen_core::{HeaderSource, InclusionLookup, PackageNamespaceLookup};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const ASMDEF_EXTENSION: &str = "asmdef";

/// Reads `$ClassSummary` text from a file; a missing file means no header
pub struct FileHeaderSource {
    path: PathBuf,
}

impl FileHeaderSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HeaderSource for FileHeaderSource {
    fn header_text(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Some(text),
            Err(e) => {
                debug!(path = ?self.path, error = %e, "no header text");
                None
            }
        }
    }
}

/// The part of an assembly definition file we care about
#[derive(Debug, Deserialize)]
struct AssemblyDefinition {
    #[serde(rename = "rootNamespace", default)]
    root_namespace: String,
}

/// Finds the root namespace of the assembly definition owning a folder
///
/// Starting at the folder, every directory up to the project root is checked
/// for an `.asmdef` file. The first one found decides.
pub struct AsmDefNamespaceLookup {
    project_root: PathBuf,
}

impl AsmDefNamespaceLookup {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// The assembly definition closest to `folder`, a project relative path
    pub fn find_asmdef(&self, folder: &str) -> Option<PathBuf> {
        let start = self.project_root.join(folder);
        start
            .ancestors()
            .take_while(|dir| dir.starts_with(&self.project_root) && *dir != self.project_root)
            .find_map(asmdef_in)
    }
}

fn asmdef_in(dir: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut asmdefs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == ASMDEF_EXTENSION))
        .collect();
    asmdefs.sort();
    asmdefs.into_iter().next()
}

fn read_root_namespace(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read assembly definition: {path:?}"))?;
    let definition: AssemblyDefinition = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse assembly definition: {path:?}"))?;
    Ok(definition.root_namespace)
}

impl PackageNamespaceLookup for AsmDefNamespaceLookup {
    fn package_namespace(&self, path: &str) -> Option<String> {
        let asmdef = self.find_asmdef(path)?;
        match read_root_namespace(&asmdef) {
            Ok(root) if !root.is_empty() => Some(root),
            Ok(_) => None,
            Err(e) => {
                warn!(path = ?asmdef, error = %format!("{e:#}"), "ignoring assembly definition");
                None
            }
        }
    }
}

/// Stored inclusion choices, keyed by [`inclusion_key`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InclusionPrefs {
    path: PathBuf,
    values: BTreeMap<String, bool>,
}

impl InclusionPrefs {
    /// Load choices from `path`; a missing file holds no choices
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.is_file() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read function choices: {path:?}"))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse function choices: {path:?}"))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    pub fn get(&self, base_class: Option<&str>, function_name: &str) -> Option<bool> {
        self.values
            .get(&inclusion_key(base_class, function_name))
            .copied()
    }

    pub fn set(&mut self, base_class: Option<&str>, function_name: &str, include: bool) {
        self.values
            .insert(inclusion_key(base_class, function_name), include);
    }

    /// Write the choices back, creating the parent directory if needed
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {parent:?}"))?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write function choices: {:?}", self.path))
    }
}

impl InclusionLookup for InclusionPrefs {
    fn is_included(&self, group_key: Option<&str>, function_name: &str, default: bool) -> bool {
        self.get(group_key, function_name).unwrap_or(default)
    }
}
