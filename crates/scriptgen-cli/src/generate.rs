//! `scriptgen generate`: create a script from a template

use crate::host::{AsmDefNamespaceLookup, FileHeaderSource, InclusionPrefs};
use crate::settings::Settings;
use crate::templates::TemplateLibrary;
use anyhow::{Context, Result};
use scriptgen_core::placement::{
    adjust_directory_for_template, has_invalid_path_chars, is_valid_class_name, target_path,
};
use scriptgen_core::{
    FunctionRecord, FunctionSpecParser, HeaderSource, NamespaceResolver, ResolvedNamespace, ScriptGenerator,
    ScriptPrescription, TemplateDocument,
};
use std::path::PathBuf;
use tracing::{debug, info, warn};

const TARGET_CLASS_NAME_TOKEN: &str = "$TargetClassName";

/// What to generate and where
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub template: String,
    /// Derived from `target_class` for custom editors when absent
    pub class_name: Option<String>,
    /// Project relative folder of the new script
    pub directory: String,
    /// Class a custom editor or property drawer is made for
    pub target_class: Option<String>,
    /// Literal `(token, value)` replacements
    pub substitutions: Vec<(String, String)>,
    /// Functions to switch on for this and later scripts
    pub include: Vec<String>,
    /// Functions to switch off for this and later scripts
    pub exclude: Vec<String>,
}

/// Where the generated text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// The target path derived from directory and class name
    Project,
    File(PathBuf),
    Stdout,
}

/// The result of rendering a request
#[derive(Debug, Clone)]
pub struct GeneratedScript {
    pub text: String,
    pub class_name: String,
    /// Directory after moving editor scripts in or out of `Editor`
    pub directory: String,
    pub base_class: Option<String>,
    pub namespace: ResolvedNamespace,
    pub template_missing: bool,
}

impl GeneratedScript {
    /// Project relative path of the script file
    pub fn relative_path(&self) -> String {
        target_path(&self.directory, &self.class_name)
    }
}

/// Produce the script text for `request` without writing anything
pub fn render(settings: &Settings, request: &GenerateRequest) -> Result<GeneratedScript> {
    let config = &settings.generator;
    let library = TemplateLibrary::from_settings(settings);
    let template = library.load(&request.template)?;
    let document = TemplateDocument::parse(&template.text);
    let base_class = document.base_class.clone();

    let is_custom_editor = config.is_custom_editor_class(base_class.as_deref());
    let class_name = class_name_for(request, is_custom_editor, base_class.as_deref())?;

    let is_editor = config.is_editor_class(base_class.as_deref());
    let directory = adjust_directory_for_template(&request.directory, is_editor);
    if directory != request.directory {
        info!(from = %request.directory, to = %directory, "moved target directory");
    }

    let lookup = AsmDefNamespaceLookup::new(&settings.project_root);
    let namespace = NamespaceResolver::new(&config.namespace)
        .with_package_lookup(&lookup)
        .resolve(&directory);

    let prefix = if namespace.apply_prefix {
        config.namespace.default_prefix.clone()
    } else {
        String::new()
    };
    let mut prescription = ScriptPrescription::new(document.body)
        .with_class_name(class_name.clone())
        .with_namespace(prefix, namespace.namespace.clone());
    prescription.namespace_apply_prefix = namespace.apply_prefix;
    prescription.functions = load_functions(settings, &library, base_class.as_deref(), request)?;

    if let Some(target) = &request.target_class {
        prescription.add_substitution(TARGET_CLASS_NAME_TOKEN, target.clone());
    }
    for (token, value) in &request.substitutions {
        if !prescription.add_substitution(token.clone(), value.clone()) {
            warn!(token = %token, "ignoring repeated substitution");
        }
    }

    let header_file = FileHeaderSource::new(library.header_path());
    let header = || {
        header_file
            .header_text()
            .or_else(|| library.shipped_header().map(str::to_string))
    };
    let text = ScriptGenerator::new(config.clone())?
        .with_header_source(&header)
        .generate(&prescription)?;

    Ok(GeneratedScript {
        text,
        class_name,
        directory,
        base_class,
        namespace,
        template_missing: template.is_missing(),
    })
}

fn class_name_for(
    request: &GenerateRequest,
    is_custom_editor: bool,
    base_class: Option<&str>,
) -> Result<String> {
    match (&request.class_name, &request.target_class, base_class) {
        (Some(name), _, _) => Ok(name.clone()),
        (None, Some(target), Some(base)) if is_custom_editor => Ok(format!("{target}{base}")),
        _ => anyhow::bail!("A class name is required (--class)"),
    }
}

/// Parse the function specification of `base_class`, applying and storing
/// the include/exclude choices of the request
fn load_functions(
    settings: &Settings,
    library: &TemplateLibrary,
    base_class: Option<&str>,
    request: &GenerateRequest,
) -> Result<Option<Vec<FunctionRecord>>> {
    let Some(functions) = base_class
        .map(|base| library.load_functions(base))
        .transpose()?
        .flatten()
    else {
        debug!(base_class, "no function specification");
        return Ok(None);
    };

    let mut prefs = InclusionPrefs::load(settings.inclusion_path())?;
    if !request.include.is_empty() || !request.exclude.is_empty() {
        for name in &request.include {
            prefs.set(base_class, name, true);
        }
        for name in &request.exclude {
            prefs.set(base_class, name, false);
        }
        prefs.save()?;
    }

    let parsed = FunctionSpecParser::new()
        .with_group_key(base_class)
        .with_inclusion(&prefs)
        .parse(&functions.text);
    if !parsed.is_clean() {
        warn!(
            source = ?functions.source,
            skipped = parsed.diagnostics.len(),
            "function specification has malformed lines"
        );
    }
    Ok(Some(parsed.records))
}

/// Refuse to create a script that would not compile or would overwrite one
fn check_target(settings: &Settings, script: &GeneratedScript) -> Result<PathBuf> {
    if !is_valid_class_name(&script.class_name) {
        anyhow::bail!("The script name may only consist of a-z, A-Z, 0-9, _.");
    }
    if has_invalid_path_chars(&script.directory) {
        anyhow::bail!("The folder path contains invalid characters.");
    }
    let path = settings.project_path(script.relative_path());
    if path.exists() {
        anyhow::bail!(
            "A script called \"{}\" already exists at that path.",
            script.class_name
        );
    }
    Ok(path)
}

/// Render `request` and write it to `output`
pub fn run(settings: &Settings, request: &GenerateRequest, output: Output) -> Result<()> {
    let script = render(settings, request)?;

    let path = match output {
        Output::Stdout => {
            print!("{}", script.text);
            return Ok(());
        }
        _ if script.template_missing => {
            anyhow::bail!("{}", script.text);
        }
        Output::File(path) => path,
        Output::Project => check_target(settings, &script)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {parent:?}"))?;
    }
    std::fs::write(&path, &script.text)
        .with_context(|| format!("Failed to write script: {path:?}"))?;

    println!("Created {}", path.display());
    Ok(())
}
