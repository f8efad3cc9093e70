// Common test utilities and helpers

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use baseline_upgrade::prelude::*;
use serde_json::{json, Value};

/// Shared log of step invocations, in call order.
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// A step that records each call and writes a marker key.
pub struct RecordingStep {
    pub name: String,
    pub calls: CallLog,
}

impl MigrationStep for RecordingStep {
    fn describe(&self) -> &str {
        &self.name
    }

    fn apply(&self, baseline: &mut Baseline) -> Result<(), StepError> {
        self.calls.lock().unwrap().push(self.name.clone());
        let mut seen = baseline
            .get("seen")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        seen.push(json!(self.name));
        baseline.insert("seen", Value::Array(seen));
        Ok(())
    }
}

/// A step that always fails.
pub struct FailingStep;

impl MigrationStep for FailingStep {
    fn describe(&self) -> &str {
        "always fails"
    }

    fn apply(&self, _baseline: &mut Baseline) -> Result<(), StepError> {
        Err(StepError::Other("refusing to upgrade".to_string()))
    }
}

pub fn version(s: &str) -> Version {
    s.parse().expect("test version should parse")
}

pub fn baseline(value: Value) -> Baseline {
    Baseline::try_from(value).expect("test baseline should be an object")
}

/// Registry with one recording step per version, registered in the given order.
pub fn recording_registry(versions: &[&str]) -> (StepRegistry, CallLog) {
    let calls = CallLog::default();
    let mut builder = RegistryBuilder::new();
    for v in versions {
        builder
            .register(
                version(v),
                RecordingStep {
                    name: v.to_string(),
                    calls: Arc::clone(&calls),
                },
            )
            .expect("test versions should be unique");
    }
    (builder.build(), calls)
}

pub fn calls(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}
