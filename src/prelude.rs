//! Prelude module for convenient imports.
//!
//! ```rust
//! use baseline_upgrade::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - [`Baseline`]: the in-memory document
//! - [`Version`]: structured schema version
//! - [`MigrationStep`], [`StepFn`]: the step contract
//! - [`RegistryBuilder`], [`StepRegistry`]: the step catalog
//! - [`Upgrader`], [`upgrade`], [`UpgradeConfig`]: the driver
//! - [`builtin_registry`]: every released schema change
//! - [`UpgradeError`], [`UpgradeResult`], [`StepError`]: errors
//!
//! Individual historical steps and the file type helpers are not included;
//! import them from [`crate::upgrades`] and [`crate::util`].

pub use crate::config::UpgradeConfig;
pub use crate::document::Baseline;
pub use crate::driver::{upgrade, Upgrader};
pub use crate::errors::{StepError, UpgradeError, UpgradeResult};
pub use crate::registry::{RegistryBuilder, StepRegistry};
pub use crate::traits::migration::{
    MigrationStep, PlannedStep, StepFn, UpgradePlan, UpgradeReport,
};
pub use crate::upgrades::builtin_registry;
pub use crate::version::Version;
