//! scriptgen CLI library
//!
//! The file system side of script generation: settings, template
//! directories, assembly definitions and stored function choices. The
//! `scriptgen` binary is a thin clap layer over these modules.

pub mod check;
pub mod generate;
pub mod host;
pub mod logging;
pub mod namespace;
pub mod settings;
pub mod templates;

pub use generate::{GenerateRequest, GeneratedScript, Output};
pub use settings::Settings;
