//! Script text generation
//!
//! Turns a [`ScriptPrescription`] into the final text of a script. The
//! template is processed in a fixed order; every step scans the whole text
//! produced by the steps before it:
//!
//! 1. line endings are normalized to `\n`
//! 2. `$ClassSummary` is replaced by the header text, keeping indentation
//! 3. `$ClassName`, `$NicifiedClassName` and `$Namespace` are replaced
//! 4. the prescription's own substitutions are applied in order
//! 5. the `$Functions` line is replaced by the included function stubs
//! 6. opening braces are optionally moved onto their own line
//! 7. line endings are converted to the configured style and tabs to spaces

use crate::case::{DEFAULT_SEPARATOR, to_human_readable};
use crate::config::GeneratorConfig;
use crate::error::{ScriptGenError, ScriptGenResult};
use crate::indent::Indenter;
use crate::prescription::{FunctionRecord, ScriptPrescription};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

const CLASS_SUMMARY_TOKEN: &str = "$ClassSummary";
const CLASS_NAME_TOKEN: &str = "$ClassName";
const NICIFIED_CLASS_NAME_TOKEN: &str = "$NicifiedClassName";
const NAMESPACE_TOKEN: &str = "$Namespace";

const EXAMPLE_CLASS_NAME: &str = "Example";
const EXAMPLE_COMPANY: &str = "Company";
const EXAMPLE_NAMESPACE_BODY: &str = "Example";

const TAB_REPLACEMENT: &str = "    ";

#[allow(clippy::expect_used)] // Safe: constant pattern
static INPUT_LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n?").expect("input line break pattern is valid"));

#[allow(clippy::expect_used)] // Safe: constant pattern
static ANY_LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n\r|\n|\r").expect("line break pattern is valid"));

/// `$Functions` with the spaces in front of it
#[allow(clippy::expect_used)] // Safe: constant pattern
static FUNCTIONS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"( *)\$Functions").expect("functions token pattern is valid"));

/// A line ending in ` {` with something other than whitespace before it
#[allow(clippy::expect_used)] // Safe: constant pattern
static OPENING_BRACE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)(\S.*) \{$").expect("opening brace pattern is valid"));

/// Supplies the text that replaces `$ClassSummary`
pub trait HeaderSource {
    fn header_text(&self) -> Option<String>;
}

impl<F> HeaderSource for F
where
    F: Fn() -> Option<String>,
{
    fn header_text(&self) -> Option<String> {
        self()
    }
}

/// Generates script text from prescriptions
pub struct ScriptGenerator<'a> {
    config: GeneratorConfig,
    indenter: Indenter,
    header_source: Option<&'a dyn HeaderSource>,
}

impl<'a> ScriptGenerator<'a> {
    /// Create a generator, rejecting configurations it cannot work with
    pub fn new(config: GeneratorConfig) -> ScriptGenResult<Self> {
        config.validate()?;
        let indenter = Indenter::new(config.indentation.clone())?;
        Ok(Self {
            config,
            indenter,
            header_source: None,
        })
    }

    pub fn with_header_source(mut self, header_source: &'a dyn HeaderSource) -> Self {
        self.header_source = Some(header_source);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produce the text of the script described by `prescription`
    pub fn generate(&self, prescription: &ScriptPrescription) -> ScriptGenResult<String> {
        let mut text = INPUT_LINE_BREAK
            .replace_all(&prescription.template, "\n")
            .into_owned();

        if let Some(header) = self.header_source.and_then(|source| source.header_text()) {
            let header = INPUT_LINE_BREAK.replace_all(&header, "\n");
            text = self
                .indenter
                .replace_keeping_indentation(&text, CLASS_SUMMARY_TOKEN, &header)?;
        }

        let class_name = class_name(prescription);
        text = text.replace(CLASS_NAME_TOKEN, class_name);
        text = text.replace(
            NICIFIED_CLASS_NAME_TOKEN,
            &to_human_readable(class_name, DEFAULT_SEPARATOR),
        );
        text = text.replace(NAMESPACE_TOKEN, &namespace_line(prescription));

        for (token, value) in &prescription.substitutions {
            if token.is_empty() {
                return Err(ScriptGenError::InvalidArgument(
                    "substitution token cannot be empty".to_string(),
                ));
            }
            text = text.replace(token.as_str(), value);
        }

        text = self.write_functions(text, prescription);

        if self.config.braces_on_new_line {
            text = put_braces_on_new_line(&text);
        }

        let line_ending = self.config.line_ending.as_str();
        let text = ANY_LINE_BREAK.replace_all(&text, line_ending);
        Ok(text.replace('\t', TAB_REPLACEMENT))
    }

    /// Replace the `$Functions` line with the included function stubs.
    ///
    /// The spaces in front of the token set the indentation of the stubs.
    /// Without included functions the line is removed.
    fn write_functions(&self, text: String, prescription: &ScriptPrescription) -> String {
        let Some(token) = FUNCTIONS_TOKEN.captures(&text) else {
            return text;
        };
        let matched = token[0].to_string();
        let level = token[1].len() / self.indenter.unit().len();

        let mut written = String::new();
        for function in prescription.emitted_functions() {
            self.write_function(&mut written, function, level);
            self.write_line(&mut written, level, "");
        }
        if written.is_empty() {
            debug!("no functions included, removing functions token");
        }

        let text = text.replace(&format!("{matched}\n"), &written);
        match text.strip_suffix(matched.as_str()) {
            Some(head) => format!("{head}{written}"),
            None => text,
        }
    }

    fn write_function(&self, out: &mut String, function: &FunctionRecord, level: usize) {
        let parameters = function
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name))
            .collect::<Vec<_>>()
            .join(", ");
        let static_keyword = if function.is_static { "static " } else { "" };
        let override_keyword = if function.is_override { "override " } else { "" };
        let return_type = function.return_type.as_deref().unwrap_or("void");
        let name = function.name.as_deref().unwrap_or_default();

        let signature = format!(
            "{}{static_keyword}{override_keyword}{return_type} {name}({parameters})",
            function.scope
        );
        let body = match function.return_type {
            Some(_) => format!("{};", function.return_default),
            None => String::new(),
        };

        self.write_line(out, level, &signature);
        self.write_line(out, level, "{");
        self.write_line(out, level + 1, &body);
        self.write_line(out, level, "}");
    }

    fn write_line(&self, out: &mut String, level: usize, line: &str) {
        out.push_str(&self.indenter.repeat(level));
        out.push_str(line);
        out.push('\n');
    }
}

fn class_name(prescription: &ScriptPrescription) -> &str {
    if prescription.class_name.is_empty() {
        EXAMPLE_CLASS_NAME
    } else {
        &prescription.class_name
    }
}

/// The namespace of the generated script, with example segments for
/// missing parts.
///
/// A prescription that opts out of the prefix uses its body as is.
pub fn full_namespace(prescription: &ScriptPrescription) -> String {
    let prefix = prescription.namespace_prefix.as_str();
    let body = prescription.namespace_body.as_str();

    match (prefix.is_empty(), body.is_empty()) {
        _ if !prescription.namespace_apply_prefix && !body.is_empty() => body.to_string(),
        (true, true) => format!("{EXAMPLE_COMPANY}.{EXAMPLE_NAMESPACE_BODY}"),
        (true, false) => format!("{EXAMPLE_COMPANY}.{body}"),
        (false, true) => format!("{prefix}.{EXAMPLE_NAMESPACE_BODY}"),
        (false, false) => format!("{prefix}.{body}"),
    }
}

/// The line replacing `$Namespace`
pub fn namespace_line(prescription: &ScriptPrescription) -> String {
    format!("namespace {}", full_namespace(prescription))
}

/// Move the brace of every `head {` line onto its own line.
///
/// The brace keeps the indentation of its line. A blank line directly after
/// the brace is dropped when it is indented like the line following it.
fn put_braces_on_new_line(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut result: Vec<String> = Vec::with_capacity(lines.len() + lines.len() / 4);

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let has_next = i + 1 < lines.len();
        let Some(caps) = OPENING_BRACE_LINE.captures(line).filter(|_| has_next) else {
            result.push(line.to_string());
            i += 1;
            continue;
        };

        result.push(reflow_brace(&caps));
        i += 1;

        if let (Some(blank), Some(next)) = (lines.get(i), lines.get(i + 1))
            && blank.trim().is_empty()
            && leading_whitespace(next) == *blank
        {
            i += 1;
        }
    }
    result.join("\n")
}

fn reflow_brace(caps: &Captures<'_>) -> String {
    let indentation = &caps[1];
    format!("{indentation}{}\n{indentation}{{", &caps[2])
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}
