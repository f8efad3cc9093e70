//! In-memory baseline documents.
//!
//! A [`Baseline`] is the decoded form of a persisted baseline: a JSON object
//! whose only key the engine interprets is `version`. Everything else is
//! payload owned by the individual migration steps.

use derive_more::{From, Into};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{kind_of, StepError, UpgradeError, UpgradeResult};
use crate::version::Version;

/// Key holding the schema version a baseline conforms to.
pub const VERSION_KEY: &str = "version";

/// A baseline document.
///
/// # Example
///
/// ```
/// use baseline_upgrade::document::Baseline;
/// use serde_json::json;
///
/// let baseline = Baseline::try_from(json!({ "exclude_regex": "tests/.*" })).unwrap();
/// assert!(baseline.version().unwrap().is_none());
/// assert!(baseline.contains("exclude_regex"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Baseline(Map<String, Value>);

impl Baseline {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded schema version, or `None` when the key is absent.
    ///
    /// A `version` that is not a string, or that does not parse, is an error.
    pub fn version(&self) -> UpgradeResult<Option<Version>> {
        match self.0.get(VERSION_KEY) {
            None => Ok(None),
            Some(Value::String(raw)) => raw
                .parse()
                .map(Some)
                .map_err(|source| UpgradeError::InvalidVersion {
                    input: raw.clone(),
                    source,
                }),
            Some(other) => Err(UpgradeError::MalformedField {
                field: VERSION_KEY.to_string(),
                expected: "a string",
                found: kind_of(other),
            }),
        }
    }

    pub fn set_version(&mut self, version: &Version) {
        self.0
            .insert(VERSION_KEY.to_string(), Value::String(version.to_string()));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert or overwrite `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Remove `key`, keeping the relative order of the remaining keys.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Borrow `key` as an object, `None` when absent.
    ///
    /// Steps use this to check a field's shape before touching it.
    pub fn object(&self, key: &str) -> Result<Option<&Map<String, Value>>, StepError> {
        match self.0.get(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(other) => Err(StepError::MalformedField {
                field: key.to_string(),
                expected: "an object",
                found: kind_of(other),
            }),
        }
    }

    /// Mutably borrow `key` as an object, `None` when absent.
    pub fn object_mut(
        &mut self,
        key: &str,
    ) -> Result<Option<&mut Map<String, Value>>, StepError> {
        match self.0.get_mut(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(other) => Err(StepError::MalformedField {
                field: key.to_string(),
                expected: "an object",
                found: kind_of(other),
            }),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl TryFrom<Value> for Baseline {
    type Error = UpgradeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(UpgradeError::NotAMapping(kind_of(&other))),
        }
    }
}

impl From<Baseline> for Value {
    fn from(baseline: Baseline) -> Self {
        baseline.into_value()
    }
}
