//! Core trait for baseline schema steps.

use std::fmt;

use crate::document::Baseline;
use crate::errors::StepError;

/// One schema change, bound to the version that introduced it.
///
/// A step receives a baseline that conforms to the schema immediately before
/// its version and mutates it in place so it conforms to its version. Steps
/// only touch the fields they upgrade and treat absent fields as "never set".
/// The driver runs each step at most once per document, so a step does not
/// have to be idempotent.
///
/// # Example
///
/// ```
/// use baseline_upgrade::document::Baseline;
/// use baseline_upgrade::errors::StepError;
/// use baseline_upgrade::traits::migration::MigrationStep;
/// use serde_json::json;
///
/// struct AddFilters;
///
/// impl MigrationStep for AddFilters {
///     fn describe(&self) -> &str {
///         "add an empty filters list"
///     }
///
///     fn apply(&self, baseline: &mut Baseline) -> Result<(), StepError> {
///         baseline.insert("filters_used", json!([]));
///         Ok(())
///     }
/// }
///
/// let mut baseline = Baseline::new();
/// AddFilters.apply(&mut baseline).unwrap();
/// assert_eq!(baseline.get("filters_used"), Some(&json!([])));
/// ```
pub trait MigrationStep: Send + Sync {
    /// Short human readable summary, used in logs and plans.
    fn describe(&self) -> &str {
        "unnamed step"
    }

    /// Upgrade `baseline` to this step's schema.
    fn apply(&self, baseline: &mut Baseline) -> Result<(), StepError>;
}

/// Signature of a function-backed step.
pub type StepFnPtr = fn(&mut Baseline) -> Result<(), StepError>;

/// A [`MigrationStep`] backed by a plain function.
///
/// Historical upgrades are written as free functions; this wraps one with a
/// description so it can be registered.
#[derive(Clone, Copy)]
pub struct StepFn {
    description: &'static str,
    apply: StepFnPtr,
}

impl StepFn {
    pub const fn new(description: &'static str, apply: StepFnPtr) -> Self {
        Self { description, apply }
    }
}

impl fmt::Debug for StepFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepFn")
            .field("description", &self.description)
            .finish()
    }
}

impl MigrationStep for StepFn {
    fn describe(&self) -> &str {
        self.description
    }

    fn apply(&self, baseline: &mut Baseline) -> Result<(), StepError> {
        (self.apply)(baseline)
    }
}

impl<S: MigrationStep + ?Sized> MigrationStep for Box<S> {
    fn describe(&self) -> &str {
        (**self).describe()
    }

    fn apply(&self, baseline: &mut Baseline) -> Result<(), StepError> {
        (**self).apply(baseline)
    }
}
