//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag of the `expand` command.

use serde::{Deserialize, Serialize};
use urlglob::GlobError;

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "GLOB_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Template string the error was raised for (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            template: None,
        }
    }

    /// Sets the template for this error.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }
}

impl From<&GlobError> for JsonError {
    fn from(err: &GlobError) -> Self {
        JsonError::new(err.code(), err.to_string()).with_template(err.template())
    }
}

/// Expansion of one template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateExpansion {
    /// The template as given on the command line
    pub template: String,
    /// Expanded strings, in expansion order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
    /// Number of expanded strings
    pub count: usize,
    /// Whether `--limit` cut the expansion short
    pub truncated: bool,
    /// Error that ended the expansion (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

/// JSON output for the `expand` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandOutput {
    /// Whether every template expanded without error
    pub success: bool,
    /// One entry per template, in argument order
    pub templates: Vec<TemplateExpansion>,
}

impl ExpandOutput {
    /// Builds the output, deriving `success` from the entries.
    pub fn new(templates: Vec<TemplateExpansion>) -> Self {
        let success = templates.iter().all(|t| t.error.is_none());
        Self { success, templates }
    }
}
