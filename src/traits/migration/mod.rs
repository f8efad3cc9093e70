//! Migration step contract for baseline documents.
//!
//! Every released schema change is expressed as a [`MigrationStep`] bound to
//! the version that introduced it. Steps are collected in a
//! [`StepRegistry`](crate::registry::StepRegistry) and applied in ascending
//! version order by the [`Upgrader`](crate::driver::Upgrader).
//!
//! # Example
//!
//! ```rust
//! use baseline_upgrade::prelude::*;
//! use serde_json::json;
//!
//! fn add_filters(baseline: &mut Baseline) -> Result<(), StepError> {
//!     baseline.insert("filters_used", json!([]));
//!     Ok(())
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! builder
//!     .register("1.0".parse().unwrap(), StepFn::new("add filters", add_filters))
//!     .unwrap();
//! let registry = builder.build();
//!
//! let mut baseline = Baseline::new();
//! let report = upgrade(&registry, &mut baseline).unwrap();
//! assert_eq!(report.applied.len(), 1);
//! assert_eq!(baseline.get("version"), Some(&json!("1.0")));
//! ```

mod context;
mod traits;

pub use context::*;
pub use traits::*;
