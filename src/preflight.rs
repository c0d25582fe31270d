//! Environment checks run before anything touches a subscription.
//!
//! Both checks are fatal: the caller logs the error and exits with code 1.

use crate::azure::{AzError, AzureApi};
use crate::config;
use crate::logger::Logger;
use crate::models::{AzVersionInfo, CliVersion};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("Azure CLI is not available: {0}")]
    CliUnavailable(#[source] AzError),
    #[error("Unable to read Azure CLI version '{0}'")]
    UnparsableVersion(String),
    #[error("Azure CLI {found} is too old, version {required}.0 or newer is required")]
    VersionTooLow { found: CliVersion, required: u64 },
    #[error("Required Azure CLI component '{0}' is not installed")]
    ComponentMissing(String),
}

/// What the environment must provide.
#[derive(Debug, Clone)]
pub struct Requirements {
    /// Lowest accepted `azure-cli` major version.
    pub min_major: u64,
    /// Component that must be installed.
    pub component: String,
}

impl Default for Requirements {
    fn default() -> Self {
        Requirements {
            min_major: config::MIN_CLI_MAJOR,
            component: config::REQUIRED_COMPONENT.to_string(),
        }
    }
}

/// Check the CLI version, then the required component.
///
/// # Returns
/// * `Ok(CliVersion)` - the detected CLI version
/// * `Err(PreflightError)` - the first unmet precondition
pub fn validate_environment(
    api: &dyn AzureApi,
    requirements: &Requirements,
    log: &Logger,
) -> Result<CliVersion, PreflightError> {
    let info = api.cli_version().map_err(PreflightError::CliUnavailable)?;
    let version: CliVersion = info
        .cli
        .parse()
        .map_err(|_| PreflightError::UnparsableVersion(info.cli.clone()))?;

    if version.major < requirements.min_major {
        return Err(PreflightError::VersionTooLow {
            found: version,
            required: requirements.min_major,
        });
    }
    log.info(&format!("Azure CLI version {version} detected"));

    if !component_installed(&info, requirements, version) {
        return Err(PreflightError::ComponentMissing(
            requirements.component.clone(),
        ));
    }
    log.info(&format!(
        "Required component '{}' is installed",
        requirements.component
    ));

    Ok(version)
}

/// On the minimum major version the component must be a core component.
/// Newer majors may ship it as an extension instead.
fn component_installed(
    info: &AzVersionInfo,
    requirements: &Requirements,
    version: CliVersion,
) -> bool {
    if info.has_component(&requirements.component) {
        return true;
    }
    version.major > requirements.min_major && info.has_extension(&requirements.component)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockAzure;

    fn version_info(cli: &str, components: &[&str], extensions: &[&str]) -> AzVersionInfo {
        let mut info = AzVersionInfo {
            cli: cli.to_string(),
            ..Default::default()
        };
        for c in components {
            info.components
                .insert(c.to_string(), serde_json::Value::String(cli.to_string()));
        }
        for e in extensions {
            info.extensions.insert(e.to_string(), "1.0.0".to_string());
        }
        info
    }

    #[test]
    fn test_validate_ok() {
        let api = MockAzure::new();
        let log = Logger::capture();
        let version = validate_environment(&api, &Requirements::default(), &log)
            .expect("Default mock should pass preflight");
        assert_eq!(version.major, 2);
        assert!(log.contains("Azure CLI version 2.61.0 detected"));
    }

    #[test]
    fn test_cli_missing() {
        let api = MockAzure::new().without_cli();
        let log = Logger::capture();
        let err = validate_environment(&api, &Requirements::default(), &log)
            .expect_err("Missing CLI must fail");
        assert!(matches!(
            err,
            PreflightError::CliUnavailable(AzError::AzNotInstalled)
        ));
    }

    #[test]
    fn test_version_too_low() {
        let api = MockAzure::new().with_version(version_info("1.9.3", &["azure-cli-core"], &[]));
        let log = Logger::capture();
        let err = validate_environment(&api, &Requirements::default(), &log)
            .expect_err("Old CLI must fail");
        assert_eq!(
            err.to_string(),
            "Azure CLI 1.9.3 is too old, version 2.0 or newer is required"
        );
    }

    #[test]
    fn test_unparsable_version() {
        let api = MockAzure::new().with_version(version_info("dev", &[], &[]));
        let log = Logger::capture();
        let err = validate_environment(&api, &Requirements::default(), &log)
            .expect_err("Garbage version must fail");
        assert!(matches!(err, PreflightError::UnparsableVersion(v) if v == "dev"));
    }

    #[test]
    fn test_component_missing_on_minimum_major() {
        // Extensions do not count when the minimum is met exactly.
        let api = MockAzure::new().with_version(version_info("2.61.0", &[], &["azure-cli-core"]));
        let log = Logger::capture();
        let err = validate_environment(&api, &Requirements::default(), &log)
            .expect_err("Component must be a core component on 2.x");
        assert!(matches!(err, PreflightError::ComponentMissing(c) if c == "azure-cli-core"));
    }

    #[test]
    fn test_component_as_extension_on_newer_major() {
        let api = MockAzure::new().with_version(version_info("3.0.1", &[], &["azure-cli-core"]));
        let log = Logger::capture();
        let version = validate_environment(&api, &Requirements::default(), &log)
            .expect("Extension is accepted on 3.x");
        assert_eq!(version.major, 3);
    }
}
