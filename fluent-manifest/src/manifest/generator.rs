//! The `[generator]` section.

use std::{fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

/// Name of the nested builder type unless configured otherwise.
pub const DEFAULT_BUILDER_NAME: &str = "Builder";

/// Generator settings
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GeneratorSection {
    /// Package applied to unqualified class names
    pub package: Option<String>,

    /// How builders hand values to products
    #[serde(default)]
    pub policy: Policy,

    /// Name of the nested builder type
    #[serde(default = "default_builder_name")]
    pub builder_name: String,

    /// Root directory for generated sources
    pub output: Option<PathBuf>,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            package: None,
            policy: Policy::default(),
            builder_name: default_builder_name(),
            output: None,
        }
    }
}

fn default_builder_name() -> String {
    DEFAULT_BUILDER_NAME.to_string()
}

/// Property handling policy for generated builders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Products are mutable; values are assigned as given
    #[default]
    Mutable,
    /// Products are immutable; collections are copied and frozen
    Immutable,
}

impl Policy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Mutable => "mutable",
            Policy::Immutable => "immutable",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mutable" => Ok(Policy::Mutable),
            "immutable" => Ok(Policy::Immutable),
            _ => Err(format!(
                "unknown policy '{}', expected 'mutable' or 'immutable'",
                s
            )),
        }
    }
}
