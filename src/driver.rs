//! The upgrade driver.
//!
//! [`Upgrader`] walks a baseline from its recorded version to the newest (or
//! configured) version, applying every registered step in between exactly
//! once and in ascending order, then stamps the new version.
//!
//! Steps mutate the document in place and nothing is rolled back. When
//! [`Upgrader::upgrade`] returns an error the baseline may be partially
//! migrated and must be discarded rather than persisted.

use std::time::Instant;

use log::{debug, trace, warn};

use crate::config::UpgradeConfig;
use crate::document::Baseline;
use crate::errors::{UpgradeError, UpgradeResult};
use crate::registry::StepRegistry;
use crate::traits::migration::{PlannedStep, UpgradePlan, UpgradeReport};
use crate::version::Version;

/// Applies the steps of a [`StepRegistry`] to baselines.
///
/// # Example
///
/// ```
/// use baseline_upgrade::prelude::*;
/// use serde_json::json;
///
/// let upgrader = Upgrader::new(builtin_registry());
/// let mut baseline = Baseline::try_from(json!({ "exclude_regex": "tests/.*" })).unwrap();
///
/// let report = upgrader.upgrade(&mut baseline).unwrap();
/// assert_eq!(report.to.to_string(), "0.12");
/// assert_eq!(
///     baseline.into_value(),
///     json!({
///         "exclude": { "files": "tests/.*", "lines": null },
///         "word_list": { "file": null, "hash": null },
///         "version": "0.12",
///     })
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Upgrader<'r> {
    registry: &'r StepRegistry,
    config: UpgradeConfig,
}

/// Source and destination of one upgrade, after validation.
struct Span {
    from: Option<Version>,
    target: Version,
}

impl<'r> Upgrader<'r> {
    pub fn new(registry: &'r StepRegistry) -> Self {
        Self::with_config(registry, UpgradeConfig::default())
    }

    pub fn with_config(registry: &'r StepRegistry, config: UpgradeConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &'r StepRegistry {
        self.registry
    }

    pub fn config(&self) -> &UpgradeConfig {
        &self.config
    }

    /// Bring `baseline` up to the target version.
    ///
    /// Fails before touching the document when its version is unreadable,
    /// newer than every registered step, or newer than the configured target.
    /// A failing step is reported as [`UpgradeError::StepFailed`] and leaves
    /// the document partially migrated.
    pub fn upgrade(&self, baseline: &mut Baseline) -> UpgradeResult<UpgradeReport> {
        let start = Instant::now();
        let Span { from, target } = self.span(baseline)?;

        if self.config.dry_run {
            let applied = self
                .registry
                .steps_between(from.as_ref(), &target)
                .map(|(version, _)| version.clone())
                .collect();
            debug!(
                "Upgrader: Dry run from {} to {}",
                display_version(from.as_ref()),
                target
            );
            return Ok(UpgradeReport {
                from,
                to: target,
                applied,
                dry_run: true,
            });
        }

        let mut applied = Vec::new();
        for (version, step) in self.registry.steps_between(from.as_ref(), &target) {
            trace!("Upgrader: Applying {} ({})", version, step.describe());
            step.apply(baseline).map_err(|source| {
                warn!(
                    "Upgrader: Step {} failed on baseline at {}: {}",
                    version,
                    display_version(from.as_ref()),
                    source
                );
                UpgradeError::StepFailed {
                    from: from.clone(),
                    target: target.clone(),
                    step: version.clone(),
                    source,
                }
            })?;
            applied.push(version.clone());
        }
        baseline.set_version(&target);

        debug!(
            "Upgrader: Upgraded baseline from {} to {} ({} steps) in {:?}",
            display_version(from.as_ref()),
            target,
            applied.len(),
            start.elapsed()
        );
        Ok(UpgradeReport {
            from,
            to: target,
            applied,
            dry_run: false,
        })
    }

    /// Upgrade `baseline` to `target` instead of the configured version.
    pub fn upgrade_to(
        &self,
        baseline: &mut Baseline,
        target: Version,
    ) -> UpgradeResult<UpgradeReport> {
        let config = UpgradeConfig {
            target_version: Some(target),
            ..self.config.clone()
        };
        Upgrader::with_config(self.registry, config).upgrade(baseline)
    }

    /// The steps [`upgrade`](Self::upgrade) would apply, without applying them.
    pub fn plan(&self, baseline: &Baseline) -> UpgradeResult<UpgradePlan> {
        let Span { from, target } = self.span(baseline)?;
        let steps = self
            .registry
            .steps_between(from.as_ref(), &target)
            .map(|(version, step)| PlannedStep {
                version: version.clone(),
                description: step.describe().to_string(),
            })
            .collect();
        Ok(UpgradePlan {
            from,
            to: target,
            steps,
        })
    }

    /// Whether at least one step applies to `baseline`.
    pub fn needs_upgrade(&self, baseline: &Baseline) -> UpgradeResult<bool> {
        let Span { from, target } = self.span(baseline)?;
        Ok(self
            .registry
            .steps_between(from.as_ref(), &target)
            .next()
            .is_some())
    }

    fn span(&self, baseline: &Baseline) -> UpgradeResult<Span> {
        let latest = self.registry.latest().ok_or(UpgradeError::EmptyRegistry)?;
        let target = match &self.config.target_version {
            Some(requested) => self
                .registry
                .canonical(requested)
                .ok_or_else(|| UpgradeError::UnknownTarget(requested.clone()))?,
            None => latest,
        };

        let from = baseline.version()?;
        if let Some(found) = &from {
            if found > latest {
                return Err(UpgradeError::UnknownVersion {
                    found: found.clone(),
                    latest: latest.clone(),
                });
            }
            if found > target {
                return Err(UpgradeError::Downgrade {
                    found: found.clone(),
                    target: target.clone(),
                });
            }
        }

        Ok(Span {
            from,
            target: target.clone(),
        })
    }
}

/// Upgrade `baseline` to the newest version in `registry`.
///
/// Shorthand for `Upgrader::new(registry).upgrade(baseline)`.
pub fn upgrade(registry: &StepRegistry, baseline: &mut Baseline) -> UpgradeResult<UpgradeReport> {
    Upgrader::new(registry).upgrade(baseline)
}

fn display_version(version: Option<&Version>) -> String {
    version.map_or_else(|| "<unset>".to_string(), Version::to_string)
}
