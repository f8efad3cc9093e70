//! Plans and reports produced by the upgrade driver.

use crate::version::Version;

/// One step selected for a baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    /// Version the step upgrades to.
    pub version: Version,
    /// The step's [`describe`](super::MigrationStep::describe) text.
    pub description: String,
}

/// What an upgrade would do, computed without touching the document.
///
/// # Example
///
/// ```
/// use baseline_upgrade::prelude::*;
/// use serde_json::json;
///
/// let baseline = Baseline::try_from(json!({ "exclude_regex": "tests/.*" })).unwrap();
/// let plan = Upgrader::new(builtin_registry()).plan(&baseline).unwrap();
/// assert_eq!(plan.from, None);
/// assert_eq!(plan.to.to_string(), "0.12");
/// assert_eq!(plan.steps.len(), 1);
/// assert!(plan.needs_upgrade());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradePlan {
    /// Version recorded in the baseline, `None` when unset.
    pub from: Option<Version>,
    /// Version the baseline will be stamped with.
    pub to: Version,
    /// Steps to apply, ascending.
    pub steps: Vec<PlannedStep>,
}

impl UpgradePlan {
    pub fn needs_upgrade(&self) -> bool {
        !self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Outcome of a successful upgrade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeReport {
    /// Version the baseline declared before the upgrade.
    pub from: Option<Version>,
    /// Target version of the upgrade. The baseline is stamped with it only
    /// when `dry_run` is false.
    pub to: Version,
    /// Versions of the steps that ran, in order, or that would have run in a
    /// dry run.
    pub applied: Vec<Version>,
    /// Whether steps were skipped because the upgrade was a dry run.
    pub dry_run: bool,
}

impl UpgradeReport {
    /// Whether any step ran.
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}
