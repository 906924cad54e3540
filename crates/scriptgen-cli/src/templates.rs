//! Template lookup in the custom and built-in template directories
//!
//! Custom templates win over built-in ones with the same name. Templates
//! compiled into the binary come last, so a project without any template
//! directory still has the standard set.

use crate::settings::Settings;
use anyhow::{Context, Result};
use scriptgen_core::template::{
    FUNCTIONS_EXTENSION, HEADER_FILE_NAME, TEMPLATE_EXTENSION, TemplateEntry, TemplateMenuItem,
    missing_template_text, order_template_menu,
};
use scriptgen_core::{GeneratorConfig, TemplateDocument};
use std::path::{Path, PathBuf};
use tracing::debug;

// ============================================================================
// Embedded Templates
// ============================================================================

pub mod shipped {
    /// Default `$ClassSummary` text
    pub const HEADER: &str = include_str!("../templates/Header.txt");

    /// `(name, text)` of every template, by name
    pub const TEMPLATES: &[(&str, &str)] = &[
        ("Class", include_str!("../templates/Class.cs.txt")),
        ("Editor", include_str!("../templates/Editor.cs.txt")),
        ("EditorWindow", include_str!("../templates/EditorWindow.cs.txt")),
        ("MonoBehaviour", include_str!("../templates/MonoBehaviour.cs.txt")),
        ("ScriptableObject", include_str!("../templates/ScriptableObject.cs.txt")),
    ];

    /// `(base class, text)` of every function specification
    pub const FUNCTIONS: &[(&str, &str)] = &[
        ("Editor", include_str!("../templates/Editor.functions.txt")),
        ("EditorWindow", include_str!("../templates/EditorWindow.functions.txt")),
        ("MonoBehaviour", include_str!("../templates/MonoBehaviour.functions.txt")),
        ("ScriptableObject", include_str!("../templates/ScriptableObject.functions.txt")),
    ];

    pub fn template(name: &str) -> Option<&'static str> {
        lookup(TEMPLATES, name)
    }

    pub fn functions(base_class: &str) -> Option<&'static str> {
        lookup(FUNCTIONS, base_class)
    }

    fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
        table
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, text)| *text)
    }
}

/// Where a loaded template came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    File(PathBuf),
    /// Compiled into the binary
    Shipped,
    /// Nothing found; the text is the missing template placeholder
    Missing,
}

/// A template or function specification and where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTemplate {
    pub text: String,
    pub source: TemplateSource,
}

impl LoadedTemplate {
    pub fn is_missing(&self) -> bool {
        self.source == TemplateSource::Missing
    }
}

/// The custom and built-in template directories plus the shipped templates
pub struct TemplateLibrary {
    custom_dir: PathBuf,
    builtin_dir: PathBuf,
    use_shipped: bool,
}

impl TemplateLibrary {
    pub fn new(custom_dir: impl Into<PathBuf>, builtin_dir: impl Into<PathBuf>) -> Self {
        Self {
            custom_dir: custom_dir.into(),
            builtin_dir: builtin_dir.into(),
            use_shipped: true,
        }
    }

    /// Whether the templates compiled into the binary are used after both
    /// directories
    pub fn with_shipped_templates(mut self, use_shipped: bool) -> Self {
        self.use_shipped = use_shipped;
        self
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.custom_template_dir(), settings.builtin_template_dir())
    }

    fn find(&self, file_name: &str) -> Option<PathBuf> {
        [&self.custom_dir, &self.builtin_dir]
            .into_iter()
            .map(|dir| dir.join(file_name))
            .find(|path| path.is_file())
    }

    /// Path of the template `<name>.cs.txt`
    pub fn template_path(&self, name: &str) -> Option<PathBuf> {
        self.find(&format!("{name}{TEMPLATE_EXTENSION}"))
    }

    /// Path of the function specification for `base_class`
    pub fn functions_path(&self, base_class: &str) -> Option<PathBuf> {
        self.find(&format!("{base_class}{FUNCTIONS_EXTENSION}"))
    }

    /// File holding the `$ClassSummary` text; only the custom directory has one
    pub fn header_path(&self) -> PathBuf {
        self.custom_dir.join(HEADER_FILE_NAME)
    }

    /// `$ClassSummary` text used when the custom directory has no header
    pub fn shipped_header(&self) -> Option<&'static str> {
        self.use_shipped.then_some(shipped::HEADER)
    }

    /// Read template `name`, falling back to the missing template text
    pub fn load(&self, name: &str) -> Result<LoadedTemplate> {
        if let Some(path) = self.template_path(name) {
            return read_file(path, "template");
        }
        if let Some(text) = self.use_shipped.then(|| shipped::template(name)).flatten() {
            debug!(name, "using shipped template");
            return Ok(LoadedTemplate {
                text: text.to_string(),
                source: TemplateSource::Shipped,
            });
        }

        debug!(name, "template not found");
        Ok(LoadedTemplate {
            text: missing_template_text(
                &self.builtin_dir.display().to_string(),
                &self.custom_dir.display().to_string(),
            ),
            source: TemplateSource::Missing,
        })
    }

    /// Read the function specification for `base_class`, if there is one
    pub fn load_functions(&self, base_class: &str) -> Result<Option<LoadedTemplate>> {
        if let Some(path) = self.functions_path(base_class) {
            return read_file(path, "function specification").map(Some);
        }
        let shipped = self
            .use_shipped
            .then(|| shipped::functions(base_class))
            .flatten();
        Ok(shipped.map(|text| LoadedTemplate {
            text: text.to_string(),
            source: TemplateSource::Shipped,
        }))
    }

    /// Names of all templates in both directories and the shipped set,
    /// without duplicates
    pub fn names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for dir in [&self.custom_dir, &self.builtin_dir] {
            for name in template_names_in(dir)? {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        if self.use_shipped {
            for (name, _) in shipped::TEMPLATES {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }

    /// Templates in menu order; editor templates are recognized by their base
    /// class
    pub fn menu(&self, config: &GeneratorConfig) -> Result<Vec<TemplateMenuItem>> {
        let mut entries = Vec::new();
        for name in self.names()? {
            let template = self.load(&name)?;
            let document = TemplateDocument::parse(&template.text);
            let is_editor = config.is_editor_class(document.base_class.as_deref());
            entries.push(TemplateEntry::new(name, is_editor));
        }
        Ok(order_template_menu(entries))
    }
}

fn read_file(path: PathBuf, what: &str) -> Result<LoadedTemplate> {
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {what}: {path:?}"))?;
    Ok(LoadedTemplate {
        text,
        source: TemplateSource::File(path),
    })
}

fn template_names_in(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("Failed to list templates: {dir:?}"))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list templates: {dir:?}"))?;
        let file_name = entry.file_name();
        if let Some(name) = file_name
            .to_str()
            .and_then(|f| f.strip_suffix(TEMPLATE_EXTENSION))
            .filter(|name| !name.is_empty())
        {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Print the template menu
pub fn list(settings: &Settings) -> Result<()> {
    let library = TemplateLibrary::from_settings(settings);
    let menu = library.menu(&settings.generator)?;

    if menu.is_empty() {
        println!("No templates found in:");
        println!("  {}", settings.custom_template_dir().display());
        println!("  {}", settings.builtin_template_dir().display());
        return Ok(());
    }

    for item in menu {
        match item {
            TemplateMenuItem::Template(name) => println!("{name}"),
            TemplateMenuItem::Separator => println!("---"),
        }
    }
    Ok(())
}
