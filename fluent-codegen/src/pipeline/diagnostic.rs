//! Diagnostics collected during a generation run.
//!
//! A skipped builder is not a failure: it is recorded here and the run
//! goes on. Only the caller decides whether warnings matter.

use std::fmt;

use serde::Serialize;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message from one phase, optionally tied to a class and a position in
/// the schema.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the phase that reported it.
    pub phase: String,
    pub message: String,
    /// Schema position such as `fluent.toml:12:8`.
    pub location: Option<String>,
    /// Qualified name of the class concerned.
    pub class: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            message: message.into(),
            location: None,
            class: None,
        }
    }

    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, phase, message)
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn for_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// The message, followed by an indented `-->` line when the location
    /// is known.
    pub fn describe(&self) -> String {
        match &self.location {
            Some(location) => format!("{}\n  --> {}", self.message, location),
            None => self.message.clone(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error("declare", "duplicate type");
        assert!(diag.severity.is_error());
        assert_eq!(diag.phase, "declare");
        assert!(diag.class.is_none());
        assert_eq!(diag.to_string(), "error: duplicate type");
    }

    #[test]
    fn test_diagnostic_with_location() {
        let diag = Diagnostic::warning("register", "builder skipped")
            .at("fluent.toml:3:8")
            .for_class("com.acme.Order");
        assert_eq!(diag.class.as_deref(), Some("com.acme.Order"));
        assert_eq!(diag.describe(), "builder skipped\n  --> fluent.toml:3:8");
        assert_eq!(
            diag.to_string(),
            "warning: builder skipped\n  --> fluent.toml:3:8"
        );
    }

    #[test]
    fn test_severity_order() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
