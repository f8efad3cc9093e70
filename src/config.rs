//! Upgrade configuration.
//!
//! Built with `typed-builder`, like the rest of the crate's option structs.

use typed_builder::TypedBuilder;

use crate::version::Version;

/// Options for an [`Upgrader`](crate::driver::Upgrader).
///
/// # Examples
///
/// ```
/// use baseline_upgrade::config::UpgradeConfig;
///
/// // Upgrade to the newest registered version
/// let config = UpgradeConfig::default();
/// assert!(config.target_version.is_none());
/// assert!(!config.dry_run);
///
/// // Stop at a specific version and only report what would change
/// let config = UpgradeConfig::builder()
///     .target_version("0.12".parse().ok())
///     .dry_run(true)
///     .build();
/// assert_eq!(config.target_version.unwrap().to_string(), "0.12");
/// ```
#[derive(Debug, Clone, Default, TypedBuilder)]
#[builder(doc)]
pub struct UpgradeConfig {
    /// Registered version to stop at. `None` means the newest registered
    /// version.
    #[builder(default = None)]
    pub target_version: Option<Version>,

    /// Validate and plan, but apply no step and leave `version` untouched.
    #[builder(default = false)]
    pub dry_run: bool,
}

impl UpgradeConfig {
    /// Configuration that upgrades to `target`.
    pub fn to_version(target: Version) -> Self {
        Self {
            target_version: Some(target),
            ..Default::default()
        }
    }
}
