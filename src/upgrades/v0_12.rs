//! 0.12: exclusions split into file and line patterns, word lists introduced.

use serde_json::{json, Value};

use crate::document::Baseline;
use crate::errors::{kind_of, StepError};

/// Upgrade a pre-0.12 baseline.
///
/// `exclude_regex` moves to `exclude.files` with no line exclusion, and an
/// unconfigured `word_list` is installed unconditionally.
pub fn upgrade(baseline: &mut Baseline) -> Result<(), StepError> {
    match baseline.get("exclude_regex") {
        None | Some(Value::String(_)) | Some(Value::Null) => {}
        Some(other) => {
            return Err(StepError::MalformedField {
                field: "exclude_regex".to_string(),
                expected: "a string or null",
                found: kind_of(other),
            });
        }
    }

    if let Some(files) = baseline.take("exclude_regex") {
        baseline.insert("exclude", json!({ "files": files, "lines": null }));
    }

    baseline.insert("word_list", json!({ "file": null, "hash": null }));
    Ok(())
}
