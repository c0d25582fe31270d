//! Resource provider and feature registration models.

use serde::{Deserialize, Serialize};

/// The only state treated as registered.
pub const REGISTERED: &str = "Registered";

/// Registration record from `az provider show`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRegistration {
    pub namespace: String,
    #[serde(default)]
    pub registration_state: Option<String>,
}

/// Registration record from `az feature show`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FeatureRegistration {
    /// Qualified name, e.g. `Microsoft.Compute/EncryptionAtHost`.
    pub name: String,
    #[serde(default)]
    pub properties: Option<FeatureProperties>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FeatureProperties {
    #[serde(default)]
    pub state: Option<String>,
}

impl ProviderRegistration {
    pub fn state(&self) -> Option<&str> {
        self.registration_state.as_deref()
    }
}

impl FeatureRegistration {
    pub fn state(&self) -> Option<&str> {
        self.properties.as_ref().and_then(|p| p.state.as_deref())
    }
}

/// True only for the exact state `Registered`.
pub fn is_registered(state: Option<&str>) -> bool {
    state == Some(REGISTERED)
}

/// State for display, `<none>` when missing or blank.
pub fn state_display(state: Option<&str>) -> &str {
    match state {
        Some(s) if !s.trim().is_empty() => s,
        _ => "<none>",
    }
}
