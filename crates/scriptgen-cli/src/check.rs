//! `scriptgen check-functions`: validate a function specification file

use crate::host::InclusionPrefs;
use crate::settings::Settings;
use anyhow::{Context, Result};
use scriptgen_core::{FunctionRecord, FunctionSpecParser, ParsedFunctions};
use std::path::Path;

/// Parse `path` and print what a generated script would get from it.
///
/// With `base_class` the stored inclusion choices for that base class are
/// applied; otherwise only `DEFAULT` functions count as included.
pub fn run(settings: &Settings, path: &Path, base_class: Option<&str>) -> Result<()> {
    let parsed = parse_file(settings, path, base_class)?;

    for record in &parsed.records {
        println!("{}", describe(record));
    }
    for diagnostic in &parsed.diagnostics {
        eprintln!("{diagnostic}");
    }

    if !parsed.is_clean() {
        anyhow::bail!(
            "{} malformed line(s) in {}",
            parsed.diagnostics.len(),
            path.display()
        );
    }
    println!("✓ {} is valid", path.display());
    Ok(())
}

pub fn parse_file(
    settings: &Settings,
    path: &Path,
    base_class: Option<&str>,
) -> Result<ParsedFunctions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read function specification: {path:?}"))?;

    let parser = FunctionSpecParser::new();
    let parsed = match base_class {
        Some(base) => {
            let prefs = InclusionPrefs::load(settings.inclusion_path())?;
            parser
                .with_group_key(Some(base))
                .with_inclusion(&prefs)
                .parse(&source)
        }
        None => parser.parse(&source),
    };
    Ok(parsed)
}

/// One line of listing: `# label` for headers, `[x] signature` for functions
pub fn describe(record: &FunctionRecord) -> String {
    let Some(name) = record.name.as_deref() else {
        return format!("# {}", record.comment);
    };

    let mut line = format!("[{}] {}", if record.include { "x" } else { " " }, record.scope);
    if record.is_static {
        line.push_str("static ");
    }
    if record.is_override {
        line.push_str("override ");
    }
    line.push_str(record.return_type.as_deref().unwrap_or("void"));

    let parameters = record
        .parameters
        .iter()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect::<Vec<_>>()
        .join(", ");
    line.push_str(&format!(" {name}({parameters})"));
    if !record.comment.is_empty() {
        line.push_str(&format!("  // {}", record.comment));
    }
    line
}
