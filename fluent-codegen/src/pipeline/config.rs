//! Per-run generator settings.

use std::path::PathBuf;

use fluent_manifest::{DEFAULT_BUILDER_NAME, Manifest};

use crate::generation::PolicyKind;

/// Settings every phase of one run agrees on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Which property policy the generators use.
    pub policy: PolicyKind,
    /// Simple name of the nested builder type.
    pub builder_name: String,
    /// Root directory for generated sources.
    pub output: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            builder_name: DEFAULT_BUILDER_NAME.to_string(),
            output: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            policy: manifest.generator.policy.into(),
            builder_name: manifest.generator.builder_name.clone(),
            output: manifest.generator.output.clone(),
        }
    }

    pub fn policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    pub fn builder_name(mut self, name: impl Into<String>) -> Self {
        self.builder_name = name.into();
        self
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }
}
