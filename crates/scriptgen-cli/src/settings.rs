//! `scriptgen.toml` parsing

use anyhow::{Context, Result};
use scriptgen_core::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no settings file is given
pub const SETTINGS_FILE_NAME: &str = "scriptgen.toml";

/// Host settings: where the project and templates live plus generator options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory that contains `Assets/` and `Packages/`
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,

    #[serde(default)]
    pub templates: TemplateSettings,

    /// JSON file keeping which optional functions the user wants
    #[serde(default = "default_inclusion_file")]
    pub inclusion_file: PathBuf,

    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Template directories, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSettings {
    /// Templates shipped with the tool
    #[serde(default = "default_builtin_dir")]
    pub builtin_dir: PathBuf,

    /// Project templates; these win over built-in templates of the same name
    #[serde(default = "default_custom_dir")]
    pub custom_dir: PathBuf,
}

fn default_project_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_inclusion_file() -> PathBuf {
    PathBuf::from(".scriptgen/functions.json")
}

fn default_builtin_dir() -> PathBuf {
    PathBuf::from("ScriptTemplates")
}

fn default_custom_dir() -> PathBuf {
    PathBuf::from("Assets/ScriptTemplates")
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            builtin_dir: default_builtin_dir(),
            custom_dir: default_custom_dir(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_root: default_project_root(),
            templates: TemplateSettings::default(),
            inclusion_file: default_inclusion_file(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read settings: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse settings from a string
    pub fn from_str(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content).context("Failed to parse settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load `path`, or `scriptgen.toml` from the working directory when it
    /// exists, or fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(SETTINGS_FILE_NAME).is_file() => Self::from_file(SETTINGS_FILE_NAME),
            None => Ok(Self::default()),
        }
    }

    /// Check that generation can run with these settings
    pub fn validate(&self) -> Result<()> {
        self.generator
            .validate()
            .context("Invalid [generator] settings")?;
        if self.templates.builtin_dir.as_os_str().is_empty()
            && self.templates.custom_dir.as_os_str().is_empty()
        {
            anyhow::bail!("At least one template directory must be configured");
        }
        Ok(())
    }

    /// `path` relative to the project root
    pub fn project_path(&self, path: impl AsRef<Path>) -> PathBuf {
        self.project_root.join(path)
    }

    pub fn builtin_template_dir(&self) -> PathBuf {
        self.project_path(&self.templates.builtin_dir)
    }

    pub fn custom_template_dir(&self) -> PathBuf {
        self.project_path(&self.templates.custom_dir)
    }

    pub fn inclusion_path(&self) -> PathBuf {
        self.project_path(&self.inclusion_file)
    }
}
