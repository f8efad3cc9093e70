//! Historical baseline schema changes.
//!
//! One module per released schema change, named after the version that
//! introduced it. Steps are never removed: a baseline written by any released
//! version must stay upgradable.

use std::sync::OnceLock;

use crate::errors::{UpgradeError, UpgradeResult};
use crate::registry::{RegistryBuilder, StepRegistry};
use crate::traits::migration::StepFn;
use crate::version::Version;

pub mod v0_12;

/// Every released schema change, oldest first.
const STEPS: &[(&[u64], StepFn)] = &[(
    &[0, 12],
    StepFn::new(
        "split exclude_regex into exclude.files/lines, add word_list",
        v0_12::upgrade,
    ),
)];

/// Build a fresh registry holding every released schema change.
///
/// Fails only if two historical steps claim the same version.
pub fn builtin_steps() -> UpgradeResult<StepRegistry> {
    let mut builder = RegistryBuilder::new();
    for (components, step) in STEPS {
        let version = Version::try_from(*components).map_err(|source| {
            UpgradeError::InvalidVersion {
                input: format!("{components:?}"),
                source,
            }
        })?;
        builder.register(version, *step)?;
    }
    Ok(builder.build())
}

/// Process-wide registry of released schema changes, built on first use.
///
/// # Panics
///
/// Panics on first use if the historical step table contains a duplicate
/// version, which can only happen through an edit to this module.
pub fn builtin_registry() -> &'static StepRegistry {
    static REGISTRY: OnceLock<StepRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| match builtin_steps() {
        Ok(registry) => registry,
        Err(err) => panic!("builtin upgrade steps are inconsistent: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_is_consistent() {
        let registry = builtin_steps().unwrap();
        assert_eq!(registry.len(), STEPS.len());
        assert_eq!(registry.latest().unwrap().to_string(), "0.12");
    }

    #[test]
    fn builtin_registry_is_shared() {
        assert!(std::ptr::eq(builtin_registry(), builtin_registry()));
    }
}
