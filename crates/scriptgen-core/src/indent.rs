//! Indentation-aware text surgery
//!
//! All operations work with a fixed indentation unit (four spaces by
//! default). Lines are split on `\n` only so `\r` stays attached to its line
//! and the original line ending style survives.

use crate::error::{ScriptGenError, ScriptGenResult};
use std::ops::Range;

const LINE_BREAK: char = '\n';

/// Indents and re-indents text with a fixed indentation unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indenter {
    unit: String,
}

impl Indenter {
    /// Create an indenter for the given unit
    pub fn new(unit: impl Into<String>) -> ScriptGenResult<Self> {
        let unit = unit.into();
        if unit.is_empty() {
            return Err(ScriptGenError::InvalidArgument(
                "indentation unit cannot be empty".to_string(),
            ));
        }
        Ok(Self { unit })
    }

    /// The indentation unit
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// `levels` repetitions of the unit
    pub fn repeat(&self, levels: usize) -> String {
        self.unit.repeat(levels)
    }

    /// Number of whole indentation units directly preceding `position`
    pub fn indentation_count_at(&self, text: &str, position: usize) -> ScriptGenResult<usize> {
        let mut preceding = text.get(..position).ok_or_else(|| {
            ScriptGenError::InvalidArgument(format!(
                "position {position} is not a character boundary within {} bytes",
                text.len()
            ))
        })?;

        let mut count = 0;
        while let Some(rest) = preceding.strip_suffix(self.unit.as_str()) {
            preceding = rest;
            count += 1;
        }
        Ok(count)
    }

    /// Indent every line of `text[range]` by `levels` units.
    ///
    /// Text outside the range is left untouched. With `skip_first_line` the
    /// first line of the range keeps its position, which is what in-place
    /// substitutions need.
    pub fn indent_range(
        &self,
        text: &str,
        levels: usize,
        range: Range<usize>,
        skip_first_line: bool,
    ) -> ScriptGenResult<String> {
        let (Some(before), Some(middle), Some(after)) = (
            text.get(..range.start),
            text.get(range.clone()),
            text.get(range.end..),
        ) else {
            return Err(ScriptGenError::InvalidArgument(format!(
                "range {}..{} is not valid for {} bytes of text",
                range.start,
                range.end,
                text.len()
            )));
        };

        let mut result = String::with_capacity(text.len() + self.unit.len() * levels * 8);
        result.push_str(before);
        self.push_indented(&mut result, middle, levels, skip_first_line);
        result.push_str(after);
        Ok(result)
    }

    /// Indent every line of `text` by `levels` units.
    ///
    /// ```
    /// use scriptgen_core::indent::Indenter;
    ///
    /// let indenter = Indenter::new("    ").unwrap();
    /// assert_eq!(indenter.indent("A\nB\nC", 1, true), "A\n    B\n    C");
    /// ```
    pub fn indent(&self, text: &str, levels: usize, skip_first_line: bool) -> String {
        let mut result = String::with_capacity(text.len() + self.unit.len() * levels * 8);
        self.push_indented(&mut result, text, levels, skip_first_line);
        result
    }

    fn push_indented(&self, out: &mut String, text: &str, levels: usize, skip_first_line: bool) {
        let indentation = self.repeat(levels);
        for (i, line) in text.split(LINE_BREAK).enumerate() {
            if i > 0 {
                out.push(LINE_BREAK);
            }
            if !(skip_first_line && i == 0) {
                out.push_str(&indentation);
            }
            out.push_str(line);
        }
    }

    /// Replace every `token` with `replacement`, indenting the continuation
    /// lines of the replacement to the indentation found in front of the
    /// token.
    ///
    /// Fails with [`ScriptGenError::SelfReferentialSubstitution`] when the
    /// replacement contains the token. Searching resumes after each inserted
    /// replacement.
    pub fn replace_keeping_indentation(
        &self,
        text: &str,
        token: &str,
        replacement: &str,
    ) -> ScriptGenResult<String> {
        if token.is_empty() {
            return Err(ScriptGenError::InvalidArgument(
                "token to replace cannot be empty".to_string(),
            ));
        }
        if replacement.contains(token) {
            return Err(ScriptGenError::SelfReferentialSubstitution {
                token: token.to_string(),
            });
        }

        let mut result = text.to_string();
        let mut search_from = 0;
        while let Some(offset) = result[search_from..].find(token) {
            let at = search_from + offset;
            let levels = self.indentation_count_at(&result, at)?;
            let indented = self.indent(replacement, levels, true);

            result.replace_range(at..at + token.len(), &indented);
            search_from = at + indented.len();
        }
        Ok(result)
    }
}

impl Default for Indenter {
    fn default() -> Self {
        Self {
            unit: "    ".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "indent/indent_tests.rs"]
mod indent_tests;
