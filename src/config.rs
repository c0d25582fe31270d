//! Defaults and fixed names used by both tools.

/// Region queried by `vcpu-quota` when none is given.
pub const DEFAULT_REGION: &str = "westus3";

/// Resource providers checked by `provider-registration` when none are given.
pub const DEFAULT_PROVIDERS: [&str; 3] = [
    "Microsoft.Compute",
    "Microsoft.Network",
    "Microsoft.Storage",
];

/// Namespace whose check also triggers the feature flag check.
pub const COMPUTE_NAMESPACE: &str = "Microsoft.Compute";

/// Feature flag checked under [`COMPUTE_NAMESPACE`].
pub const COMPUTE_FEATURE: &str = "EncryptionAtHost";

/// Usage entry holding the total regional vCPU quota.
pub const CORES_USAGE_NAME: &str = "cores";

/// Resource type of VM sizes in the SKU catalog.
pub const VM_RESOURCE_TYPE: &str = "virtualMachines";

/// Names starting with `Standard_B` or `Standard_F` and ending in the premium
/// storage suffix `s`.
pub const SKU_FAMILY_PATTERN: &str = r"^Standard_(B|F).*s$";

/// Lowest supported Azure CLI major version.
pub const MIN_CLI_MAJOR: u64 = 2;

/// CLI component that must be installed alongside `azure-cli`.
pub const REQUIRED_COMPONENT: &str = "azure-cli-core";

/// Upper bound on an accepted `az` response, checked after the output is read.
/// The SKU catalog of one region is a few MB.
pub const MAX_RESPONSE_BYTES: usize = 64 * 1024 * 1024;

/// log4rs config file read at startup.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
