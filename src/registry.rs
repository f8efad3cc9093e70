//! Ordered catalog of baseline schema steps.
//!
//! A [`RegistryBuilder`] collects `(version, step)` pairs in any order and
//! [`build`](RegistryBuilder::build)s an immutable [`StepRegistry`] sorted by
//! version. Once built, a registry is only ever read, so a single instance can
//! be shared by reference between any number of upgraders and threads.
//!
//! # Example
//!
//! ```
//! use baseline_upgrade::prelude::*;
//!
//! fn noop(_: &mut Baseline) -> Result<(), StepError> {
//!     Ok(())
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! builder.register("1.1".parse().unwrap(), StepFn::new("b", noop)).unwrap();
//! builder.register("0.12".parse().unwrap(), StepFn::new("a", noop)).unwrap();
//! assert!(builder.register("0.12.0".parse().unwrap(), StepFn::new("dup", noop)).is_err());
//!
//! let registry = builder.build();
//! let after: Vec<String> = registry
//!     .steps_after(None)
//!     .map(|(version, _)| version.to_string())
//!     .collect();
//! assert_eq!(after, vec!["0.12", "1.1"]);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;

use log::trace;

use crate::errors::{UpgradeError, UpgradeResult};
use crate::traits::migration::MigrationStep;
use crate::version::Version;

type Steps = BTreeMap<Version, Box<dyn MigrationStep>>;

/// Mutable collector used to populate a [`StepRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    steps: Steps,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `version` with `step`.
    ///
    /// Fails with [`UpgradeError::DuplicateVersion`] when a step is already
    /// registered for an equal version. That is a defect in the step catalog,
    /// not in user input.
    pub fn register<S>(&mut self, version: Version, step: S) -> UpgradeResult<&mut Self>
    where
        S: MigrationStep + 'static,
    {
        if self.steps.contains_key(&version) {
            return Err(UpgradeError::DuplicateVersion(version));
        }
        trace!("RegistryBuilder: Registered {} ({})", version, step.describe());
        self.steps.insert(version, Box::new(step));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Freeze the catalog.
    pub fn build(self) -> StepRegistry {
        StepRegistry { steps: self.steps }
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("versions", &self.steps.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Immutable, version-ordered catalog of schema steps.
pub struct StepRegistry {
    steps: Steps,
}

impl StepRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Steps registered for versions strictly greater than `version`, in
    /// ascending order. `None` stands for an unset version and yields every
    /// step.
    ///
    /// The returned iterator borrows the registry; querying again with the
    /// same input yields the same sequence.
    pub fn steps_after<'a>(
        &'a self,
        version: Option<&Version>,
    ) -> impl DoubleEndedIterator<Item = (&'a Version, &'a dyn MigrationStep)> + use<'a> {
        let lower = match version {
            Some(version) => Bound::Excluded(version.clone()),
            None => Bound::Unbounded,
        };
        self.steps
            .range((lower, Bound::Unbounded))
            .map(|(version, step)| -> (&'a Version, &'a dyn MigrationStep) {
                (version, &**step)
            })
    }

    /// Steps in the half-open range `(from, to]`.
    pub fn steps_between<'a>(
        &'a self,
        from: Option<&Version>,
        to: &Version,
    ) -> impl Iterator<Item = (&'a Version, &'a dyn MigrationStep)> + use<'a> {
        let to = to.clone();
        self.steps_after(from)
            .take_while(move |(version, _)| **version <= to)
    }

    pub fn get(&self, version: &Version) -> Option<&dyn MigrationStep> {
        self.steps.get(version).map(|step| &**step as &dyn MigrationStep)
    }

    /// The registered spelling of a version equal to `version`.
    pub fn canonical(&self, version: &Version) -> Option<&Version> {
        self.steps.get_key_value(version).map(|(key, _)| key)
    }

    pub fn contains(&self, version: &Version) -> bool {
        self.steps.contains_key(version)
    }

    /// Newest registered version.
    pub fn latest(&self) -> Option<&Version> {
        self.steps.keys().next_back()
    }

    /// Oldest registered version.
    pub fn oldest(&self) -> Option<&Version> {
        self.steps.keys().next()
    }

    pub fn versions(&self) -> impl DoubleEndedIterator<Item = &Version> {
        self.steps.keys()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Debug for StepRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepRegistry")
            .field("versions", &self.steps.keys().collect::<Vec<_>>())
            .finish()
    }
}
