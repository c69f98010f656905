//! Structured issues produced by configuration validation.
//!
//! [`FileConfig::validate`](super::FileConfig::validate) walks the merged
//! configuration and reports anything suspicious as a [`ConfigIssue`] instead
//! of failing the load. Warnings are printed and startup continues; errors
//! abort startup before any network traffic.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A field holds a value outside its accepted range or shape.
    InvalidValue { field: String, value: String },
    /// A required field is empty or absent.
    MissingValue { field: String },
    /// The same value appears twice where it must be unique.
    Duplicate { field: String, value: String },
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

/// Check whether any issues are errors (i.e. fatal).
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning() -> ConfigIssue {
        ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::InvalidValue {
                field: "backend.temperature".to_string(),
                value: "9.5".to_string(),
            },
            message: "backend.temperature: 9.5 is outside the usual 0.0-2.0 range".to_string(),
        }
    }

    fn error() -> ConfigIssue {
        ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::MissingValue {
                field: "providers.name".to_string(),
            },
            message: "providers: entry with empty name".to_string(),
        }
    }

    #[test]
    fn has_errors_returns_true_for_errors() {
        assert!(has_errors(&[warning(), error()]));
    }

    #[test]
    fn has_errors_returns_false_for_warnings_only() {
        assert!(!has_errors(&[warning()]));
    }

    #[test]
    fn has_errors_returns_false_for_empty() {
        assert!(!has_errors(&[]));
    }
}
