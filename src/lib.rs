//! # Baseline Upgrade
//!
//! Versioned schema migration for secret-scanning baseline documents.
//!
//! A baseline records the schema version it was written with. As the scanner
//! evolves, fields are renamed, restructured or added with defaults. This
//! crate keeps an ordered catalog of every released schema change and brings
//! a baseline of any age up to the current shape, applying each intermediate
//! change exactly once and in order.
//!
//! ## Features
//!
//! - **Structured versions**: numeric, component-wise ordering (`0.9 < 0.12`)
//! - **Immutable registry**: built once, shared freely between threads
//! - **Exactly-once upgrades**: every step newer than the recorded version,
//!   ascending, no skips, no replays
//! - **Future-proof reads**: baselines from newer tools are refused, not mangled
//! - **Plans and dry runs**: inspect what would change before changing it
//!
//! ## Quick Start
//!
//! ```rust
//! use baseline_upgrade::prelude::*;
//! use serde_json::json;
//!
//! let mut baseline = Baseline::try_from(json!({})).unwrap();
//! let report = upgrade(builtin_registry(), &mut baseline).unwrap();
//!
//! assert_eq!(report.from, None);
//! assert_eq!(
//!     baseline.into_value(),
//!     json!({ "word_list": { "file": null, "hash": null }, "version": "0.12" })
//! );
//! ```
//!
//! Reading and writing baselines is left to the caller: deserialize into a
//! [`Baseline`](document::Baseline), upgrade it, and persist it only if the
//! upgrade succeeded.

pub mod config;
pub mod document;
pub mod driver;
pub mod errors;
pub mod prelude;
pub mod registry;
pub mod traits;
pub mod upgrades;
pub mod util;
pub mod version;
