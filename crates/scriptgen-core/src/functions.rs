//! Parser for function specification files
//!
//! A function specification file lists the message functions a base class
//! offers, one per line:
//!
//! ```text
//! header Lifecycle
//! DEFAULT protected void Awake() Called when the script instance is loaded.
//! public override bool Equals(object other) return false; Compares by value.
//! ```
//!
//! Every line is parsed on its own. A malformed line is reported and skipped;
//! the rest of the file still produces records.

use crate::error::ScriptGenError;
use crate::prescription::{FunctionRecord, Parameter};
use tracing::{debug, warn};

const HEADER_PREFIX: &str = "header ";
const DEFAULT_PREFIX: &str = "DEFAULT ";
const STATIC_PREFIX: &str = "static ";
const OVERRIDE_PREFIX: &str = "override ";
const VOID: &str = "void";

/// Scope keywords, checked in this order
pub const SCOPES: [&str; 3] = ["private", "protected", "public"];

/// Decides whether a parsed function is included in the generated script
///
/// Hosts persist the user's choice per group (usually the base class) and
/// function name; `default` is the inclusion the file asks for.
pub trait InclusionLookup {
    fn is_included(&self, group_key: Option<&str>, function_name: &str, default: bool) -> bool;
}

impl<F> InclusionLookup for F
where
    F: Fn(Option<&str>, &str, bool) -> bool,
{
    fn is_included(&self, group_key: Option<&str>, function_name: &str, default: bool) -> bool {
        self(group_key, function_name, default)
    }
}

/// Includes exactly the functions marked `DEFAULT`
#[derive(Debug, Clone, Copy, Default)]
pub struct IncludeByDefault;

impl InclusionLookup for IncludeByDefault {
    fn is_included(&self, _group_key: Option<&str>, _function_name: &str, default: bool) -> bool {
        default
    }
}

/// Records of a parsed file plus one diagnostic per skipped line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFunctions {
    pub records: Vec<FunctionRecord>,
    /// [`ScriptGenError::MalformedFunctionLine`] for every skipped line
    pub diagnostics: Vec<ScriptGenError>,
}

impl ParsedFunctions {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parses function specification files into [`FunctionRecord`]s
pub struct FunctionSpecParser<'a> {
    group_key: Option<&'a str>,
    inclusion: &'a dyn InclusionLookup,
}

impl Default for FunctionSpecParser<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FunctionSpecParser<'a> {
    /// A parser that includes the `DEFAULT` functions only
    pub fn new() -> Self {
        Self {
            group_key: None,
            inclusion: &IncludeByDefault,
        }
    }

    /// Group inclusion choices under `group_key`, usually the base class
    pub fn with_group_key(mut self, group_key: Option<&'a str>) -> Self {
        self.group_key = group_key;
        self
    }

    pub fn with_inclusion(mut self, inclusion: &'a dyn InclusionLookup) -> Self {
        self.inclusion = inclusion;
        self
    }

    /// Parse the text of a whole file
    pub fn parse(&self, source: &str) -> ParsedFunctions {
        self.parse_lines(source.lines())
    }

    /// Parse lines; diagnostics number them from 1
    pub fn parse_lines<'l>(&self, lines: impl IntoIterator<Item = &'l str>) -> ParsedFunctions {
        let mut parsed = ParsedFunctions::default();

        for (index, line) in lines.into_iter().enumerate() {
            let number = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            match parse_line(line) {
                Ok(ParsedLine::Header(label)) => parsed.records.push(FunctionRecord::header(label)),
                Ok(ParsedLine::Function {
                    mut record,
                    include_by_default,
                }) => {
                    let name = record.name.as_deref().unwrap_or_default();
                    record.include =
                        self.inclusion
                            .is_included(self.group_key, name, include_by_default);
                    parsed.records.push(record);
                }
                Err(reason) => {
                    warn!(line = number, text = line, reason, "skipping malformed function line");
                    parsed.diagnostics.push(ScriptGenError::MalformedFunctionLine {
                        line: number,
                        text: line.to_string(),
                        reason: reason.to_string(),
                    });
                }
            }
        }

        debug!(
            records = parsed.records.len(),
            skipped = parsed.diagnostics.len(),
            "parsed function specification"
        );
        parsed
    }
}

enum ParsedLine {
    Header(String),
    Function {
        record: FunctionRecord,
        include_by_default: bool,
    },
}

fn parse_line(line: &str) -> Result<ParsedLine, &'static str> {
    let lead = leading_chars(line, HEADER_PREFIX.len()).ok_or("line is too short")?;
    if lead.eq_ignore_ascii_case(HEADER_PREFIX) {
        return Ok(ParsedLine::Header(line[lead.len()..].to_string()));
    }

    let lead = leading_chars(line, DEFAULT_PREFIX.len()).ok_or("line is too short")?;
    let include_by_default = lead == DEFAULT_PREFIX;
    let mut rest = if include_by_default {
        &line[lead.len()..]
    } else {
        line
    };

    let mut record = FunctionRecord::default();
    for scope in SCOPES {
        if let Some(after) = rest.strip_prefix(scope).and_then(|r| r.strip_prefix(' ')) {
            record.scope = format!("{scope} ");
            rest = after;
            break;
        }
    }
    if let Some(after) = rest.strip_prefix(STATIC_PREFIX) {
        record.is_static = true;
        rest = after;
    }
    if let Some(after) = rest.strip_prefix(OVERRIDE_PREFIX) {
        record.is_override = true;
        rest = after;
    }

    let (return_type, rest) = take_until(rest, " ").ok_or("missing space after return type")?;
    let (name, rest) = take_until(rest, "(").ok_or("missing '('")?;
    let (parameters, rest) = take_until(rest, ")").ok_or("missing ')'")?;

    record.return_type = (return_type != VOID).then(|| return_type.to_string());
    record.name = Some(name.to_string());

    let rest = if record.return_type.is_some() {
        let (default, rest) = take_until(rest, ";").ok_or("missing ';' after return value")?;
        record.return_default = default.to_string();
        rest
    } else {
        rest
    };
    record.comment = rest.to_string();

    for declaration in parameters.split(',').filter(|d| !d.is_empty()) {
        let mut parts = declaration.trim().split(' ');
        let ty = parts.next().unwrap_or_default();
        let name = parts.next().ok_or("parameter without a name")?;
        record.parameters.push(Parameter::new(name, ty));
    }

    Ok(ParsedLine::Function {
        record,
        include_by_default,
    })
}

/// The first `count` characters of `line`, or `None` if it is shorter
fn leading_chars(line: &str, count: usize) -> Option<&str> {
    match line.char_indices().nth(count) {
        Some((end, _)) => Some(&line[..end]),
        None if line.chars().count() == count => Some(line),
        None => None,
    }
}

/// Split at the first `separator`.
///
/// The taken part is trimmed of whitespace and the remainder of spaces.
fn take_until<'s>(source: &'s str, separator: &str) -> Option<(&'s str, &'s str)> {
    let (taken, rest) = source.split_once(separator)?;
    Some((taken.trim(), rest.trim_matches(' ')))
}

#[cfg(test)]
#[path = "functions/functions_tests.rs"]
mod functions_tests;
