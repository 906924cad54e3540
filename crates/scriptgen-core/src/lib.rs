//! scriptgen-core - Template-driven C# script generation
//!
//! This crate turns a script template plus a description of the script into
//! final source text:
//! - [`case`] for converting identifiers into display text and back
//! - [`namespace`] for inferring a namespace from a folder path
//! - [`indent`] for indentation-preserving text replacement
//! - [`functions`] for parsing function specification files
//! - [`generator`] for producing the script text
//!
//! Nothing here touches the file system. Header text, package namespaces and
//! stored function choices come in through [`HeaderSource`],
//! [`PackageNamespaceLookup`] and [`InclusionLookup`].

pub mod case;
pub mod config;
pub mod error;
pub mod functions;
pub mod generator;
pub mod indent;
pub mod namespace;
pub mod placement;
pub mod prescription;
pub mod template;

pub use config::{GeneratorConfig, LineEnding, NamespaceSettings};
pub use error::{ScriptGenError, ScriptGenResult};
pub use functions::{FunctionSpecParser, InclusionLookup, IncludeByDefault, ParsedFunctions};
pub use generator::{HeaderSource, ScriptGenerator};
pub use indent::Indenter;
pub use namespace::{NamespaceResolver, PackageNamespaceLookup, ResolvedNamespace};
pub use prescription::{FunctionRecord, Parameter, ScriptPrescription};
pub use template::{TemplateDocument, TemplateEntry, TemplateMenuItem};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        FunctionRecord, FunctionSpecParser, GeneratorConfig, HeaderSource, InclusionLookup,
        LineEnding, NamespaceResolver, PackageNamespaceLookup, ScriptGenError, ScriptGenResult,
        ScriptGenerator, ScriptPrescription, TemplateDocument,
    };
}
