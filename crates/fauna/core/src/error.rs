//! Common error infrastructure.
//!
//! The runtime surface deliberately has almost no errors: invalid references
//! resolve as lost goals and precondition failures as silent no-ops. What
//! remains is classified here so hosts can pick a recovery strategy without
//! matching on every variant.

use crate::config::ConfigError;
use crate::sim::SetupError;

/// Severity level of an error, used for categorization and recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input; rejected, fix the data before retrying.
    Validation,
    /// Setup cannot proceed; the simulation was never constructed.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

impl ConfigError {
    /// Misconfiguration always aborts setup.
    pub const fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }
}

impl SetupError {
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            SetupError::Config(_) => ErrorSeverity::Fatal,
            SetupError::DuplicateFlag { .. } => ErrorSeverity::Validation,
        }
    }
}
