//! Generator configuration

use crate::error::{ScriptGenError, ScriptGenResult};
use serde::{Deserialize, Serialize};

/// Line break convention of the generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The convention native to the platform this binary was built for
    pub fn platform() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::platform()
    }
}

/// Settings for inferring a namespace from a folder path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceSettings {
    /// Number of namespace segments kept after conversion
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Folder name after which path segments become namespace segments
    #[serde(default = "default_scripts_folder")]
    pub scripts_folder: String,

    /// Segments removed from the inferred namespace
    ///
    /// `Editor` would otherwise clash with `UnityEditor.Editor`.
    #[serde(default = "default_excluded_segments")]
    pub excluded_segments: Vec<String>,

    /// Prefix placed in front of inferred namespaces, usually the company name
    #[serde(default)]
    pub default_prefix: String,
}

fn default_max_depth() -> usize {
    3
}

fn default_scripts_folder() -> String {
    "Scripts".to_string()
}

fn default_excluded_segments() -> Vec<String> {
    vec!["Editor".to_string(), "Runtime".to_string()]
}

impl Default for NamespaceSettings {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            scripts_folder: default_scripts_folder(),
            excluded_segments: default_excluded_segments(),
            default_prefix: String::new(),
        }
    }
}

/// Configuration for generating scripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// One level of indentation
    #[serde(default = "default_indentation")]
    pub indentation: String,

    /// Line endings of the generated text
    #[serde(default)]
    pub line_ending: LineEnding,

    /// Move opening braces of `Foo {` lines onto their own line
    #[serde(default)]
    pub braces_on_new_line: bool,

    #[serde(default)]
    pub namespace: NamespaceSettings,

    /// Base classes whose scripts only compile inside an `Editor` folder
    #[serde(default = "default_editor_base_classes")]
    pub editor_base_classes: Vec<String>,

    /// Base classes that target another class, like custom inspectors
    #[serde(default = "default_custom_editor_base_classes")]
    pub custom_editor_base_classes: Vec<String>,
}

fn default_indentation() -> String {
    "    ".to_string()
}

fn default_editor_base_classes() -> Vec<String> {
    [
        "Editor",
        "EditorWindow",
        "PropertyDrawer",
        "ScriptableWizard",
        "AssetPostprocessor",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_custom_editor_base_classes() -> Vec<String> {
    vec!["Editor".to_string(), "PropertyDrawer".to_string()]
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indentation: default_indentation(),
            line_ending: LineEnding::default(),
            braces_on_new_line: false,
            namespace: NamespaceSettings::default(),
            editor_base_classes: default_editor_base_classes(),
            custom_editor_base_classes: default_custom_editor_base_classes(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the configuration can drive generation
    pub fn validate(&self) -> ScriptGenResult<()> {
        if self.indentation.is_empty() {
            return Err(ScriptGenError::InvalidConfig(
                "indentation unit cannot be empty".to_string(),
            ));
        }
        if self.namespace.scripts_folder.is_empty() {
            return Err(ScriptGenError::InvalidConfig(
                "scripts folder name cannot be empty".to_string(),
            ));
        }
        if self.namespace.scripts_folder.contains(['/', '\\']) {
            return Err(ScriptGenError::InvalidConfig(format!(
                "scripts folder must be a single folder name, got '{}'",
                self.namespace.scripts_folder
            )));
        }
        Ok(())
    }

    /// Whether scripts deriving from `base_class` belong in an `Editor` folder
    pub fn is_editor_class(&self, base_class: Option<&str>) -> bool {
        base_class.is_some_and(|base| self.editor_base_classes.iter().any(|c| c == base))
    }

    /// Whether scripts deriving from `base_class` target another class
    pub fn is_custom_editor_class(&self, base_class: Option<&str>) -> bool {
        base_class.is_some_and(|base| {
            !base.is_empty() && self.custom_editor_base_classes.iter().any(|c| c == base)
        })
    }
}
