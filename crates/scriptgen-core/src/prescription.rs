//! The description of one script generation request

use serde::{Deserialize, Serialize};

/// One parameter of a generated function stub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A function stub or a section header from a function specification file
///
/// A record without a `name` is a section header; its label lives in
/// `comment` and it is never emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: Option<String>,
    /// `"private "`, `"protected "`, `"public "` or empty
    pub scope: String,
    /// `None` means `void`
    pub return_type: Option<String>,
    /// Expression returned by the generated body when there is a return type
    pub return_default: String,
    pub is_static: bool,
    pub is_override: bool,
    pub parameters: Vec<Parameter>,
    pub comment: String,
    pub include: bool,
}

impl FunctionRecord {
    /// A section header grouping the records that follow it
    pub fn header(label: impl Into<String>) -> Self {
        Self {
            comment: label.into(),
            ..Self::default()
        }
    }

    /// A `void` function with no parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = if scope.is_empty() || scope.ends_with(' ') {
            scope.to_string()
        } else {
            format!("{scope} ")
        };
        self
    }

    pub fn with_return(mut self, ty: impl Into<String>, default: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self.return_default = default.into();
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    pub fn included(mut self, include: bool) -> Self {
        self.include = include;
        self
    }

    pub fn is_header(&self) -> bool {
        self.name.is_none()
    }

    /// Whether this record produces a stub in the generated script
    pub fn is_emitted(&self) -> bool {
        self.include && !self.is_header()
    }
}

/// Everything needed to generate the text of one script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptPrescription {
    /// Empty means "not decided yet"; generation falls back to `Example`
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub namespace_prefix: String,
    #[serde(default)]
    pub namespace_body: String,
    /// `false` when the body already is a complete namespace, for example a
    /// package root namespace
    #[serde(default = "default_apply_prefix")]
    pub namespace_apply_prefix: bool,
    #[serde(default)]
    pub template: String,
    /// `None` when no function specification applies to the template
    #[serde(default)]
    pub functions: Option<Vec<FunctionRecord>>,
    /// Literal token replacements, applied in insertion order
    #[serde(default)]
    pub substitutions: Vec<(String, String)>,
}

fn default_apply_prefix() -> bool {
    true
}

impl Default for ScriptPrescription {
    fn default() -> Self {
        Self {
            class_name: String::new(),
            namespace_prefix: String::new(),
            namespace_body: String::new(),
            namespace_apply_prefix: true,
            template: String::new(),
            functions: None,
            substitutions: Vec::new(),
        }
    }
}

impl ScriptPrescription {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_namespace(mut self, prefix: impl Into<String>, body: impl Into<String>) -> Self {
        self.namespace_prefix = prefix.into();
        self.namespace_body = body.into();
        self
    }

    pub fn with_functions(mut self, functions: Vec<FunctionRecord>) -> Self {
        self.functions = Some(functions);
        self
    }

    /// Add a token replacement.
    ///
    /// Returns `false` and keeps the existing value when the token is already
    /// present.
    pub fn add_substitution(&mut self, token: impl Into<String>, value: impl Into<String>) -> bool {
        let token = token.into();
        if self.substitutions.iter().any(|(existing, _)| *existing == token) {
            return false;
        }
        self.substitutions.push((token, value.into()));
        true
    }

    /// Functions that end up in the generated text
    pub fn emitted_functions(&self) -> impl Iterator<Item = &FunctionRecord> {
        self.functions
            .iter()
            .flatten()
            .filter(|function| function.is_emitted())
    }
}

#[cfg(test)]
#[path = "prescription/prescription_tests.rs"]
mod prescription_tests;
