//! Error types for glob expansion.

use thiserror::Error;

/// Result type for glob operations.
pub type GlobResult<T> = Result<T, GlobError>;

/// Errors raised while expanding a template.
///
/// Every variant is a range error: the glob group was recognised but its
/// bounds or step cannot be enumerated. Each variant carries the template
/// string the group was found in, which may already have had earlier groups
/// substituted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlobError {
    /// Numeric range with `start > end`.
    #[error("bad numeric range sequence in \"{template}\"")]
    BadNumericRange {
        /// Template containing the range.
        template: String,
    },

    /// Alpha range with `start > end` or spanning more than 26 characters.
    #[error("bad alpha range sequence in \"{template}\"")]
    BadAlphaRange {
        /// Template containing the range.
        template: String,
    },

    /// Range step of zero.
    #[error("zero step in range sequence in \"{template}\"")]
    ZeroStep {
        /// Template containing the range.
        template: String,
    },

    /// Numeric token too large to enumerate.
    #[error("number '{token}' out of range in \"{template}\"")]
    NumberOutOfRange {
        /// The digit sequence that failed to parse.
        token: String,
        /// Template containing the range.
        template: String,
    },
}

impl GlobError {
    /// Returns the stable error code (e.g., "GLOB_001").
    pub fn code(&self) -> &'static str {
        match self {
            GlobError::BadNumericRange { .. } => "GLOB_001",
            GlobError::BadAlphaRange { .. } => "GLOB_002",
            GlobError::ZeroStep { .. } => "GLOB_003",
            GlobError::NumberOutOfRange { .. } => "GLOB_004",
        }
    }

    /// Returns the template the failing group was found in.
    pub fn template(&self) -> &str {
        match self {
            GlobError::BadNumericRange { template }
            | GlobError::BadAlphaRange { template }
            | GlobError::ZeroStep { template }
            | GlobError::NumberOutOfRange { template, .. } => template,
        }
    }

    pub(crate) fn bad_numeric(template: &str) -> Self {
        Self::BadNumericRange {
            template: template.to_string(),
        }
    }

    pub(crate) fn bad_alpha(template: &str) -> Self {
        Self::BadAlphaRange {
            template: template.to_string(),
        }
    }

    pub(crate) fn zero_step(template: &str) -> Self {
        Self::ZeroStep {
            template: template.to_string(),
        }
    }

    pub(crate) fn out_of_range(token: &str, template: &str) -> Self {
        Self::NumberOutOfRange {
            token: token.to_string(),
            template: template.to_string(),
        }
    }
}
