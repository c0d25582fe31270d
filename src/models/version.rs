//! Azure CLI version information from `az version`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Output of `az version -o json`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AzVersionInfo {
    /// Version of the CLI itself, e.g. `2.61.0`.
    #[serde(rename = "azure-cli")]
    pub cli: String,
    /// Installed extensions and their versions.
    #[serde(default)]
    pub extensions: BTreeMap<String, String>,
    /// Every other top level key, e.g. `azure-cli-core`.
    #[serde(flatten)]
    pub components: BTreeMap<String, serde_json::Value>,
}

impl AzVersionInfo {
    pub fn has_component(&self, name: &str) -> bool {
        name == "azure-cli" || self.components.contains_key(name)
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains_key(name)
    }
}

/// A `major.minor.patch` version; missing parts read as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CliVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl FromStr for CliVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Drop pre-release / build suffixes such as `2.62.0b1` or `2.61.0-dev`.
        let mut parts = s.split('.').map(|part| {
            let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse::<u64>()
        });
        let major = match parts.next() {
            Some(Ok(major)) => major,
            _ => return Err(format!("Invalid version: '{s}'")),
        };
        let minor = parts.next().and_then(|p| p.ok()).unwrap_or(0);
        let patch = parts.next().and_then(|p| p.ok()).unwrap_or(0);
        Ok(CliVersion {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for CliVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
