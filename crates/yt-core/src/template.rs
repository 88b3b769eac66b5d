//! Loading of the stack template document
//!
//! The template is opaque to the reconciler: it is read as text and passed
//! through to the stack service untouched.

use crate::error::{CoreError, CoreResult};
use std::path::PathBuf;

/// Template shipped with the binary
pub const EMBEDDED_TEMPLATE: &str = include_str!("../template.yml");

/// Where the template body comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSource {
    /// The template compiled into the binary
    #[default]
    Embedded,
    /// A template file read at invocation time
    File(PathBuf),
}

impl TemplateSource {
    /// Use `path` when given, otherwise the embedded template
    pub fn from_optional_path(path: Option<PathBuf>) -> Self {
        path.map(TemplateSource::File).unwrap_or_default()
    }

    /// Read the template body
    pub fn load(&self) -> CoreResult<String> {
        match self {
            TemplateSource::Embedded => Ok(EMBEDDED_TEMPLATE.to_string()),
            TemplateSource::File(path) => {
                std::fs::read_to_string(path).map_err(|source| CoreError::TemplateUnreadable {
                    path: path.display().to_string(),
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "template_test.rs"]
mod tests;
