use thiserror::Error;

use crate::version::{Version, VersionParseError};

pub type UpgradeResult<T> = Result<T, UpgradeError>;

/// Errors raised while building a registry or upgrading a baseline.
///
/// A baseline that produced any error during [`Upgrader::upgrade`] must not be
/// persisted: steps mutate in place and nothing is rolled back.
///
/// [`Upgrader::upgrade`]: crate::driver::Upgrader::upgrade
#[derive(Error, Debug)]
pub enum UpgradeError {
    #[error("Duplicate Step: version {0} is already registered")]
    DuplicateVersion(Version),

    #[error("Unknown Version: baseline declares {found}, newest known is {latest}")]
    UnknownVersion { found: Version, latest: Version },

    #[error("Unknown Target: no step is registered for version {0}")]
    UnknownTarget(Version),

    #[error("Downgrade Refused: baseline declares {found}, target is {target}")]
    Downgrade { found: Version, target: Version },

    #[error("Empty Registry: no upgrade steps are registered")]
    EmptyRegistry,

    #[error("Invalid Version {input:?}: {source}")]
    InvalidVersion {
        input: String,
        #[source]
        source: VersionParseError,
    },

    #[error("Malformed Field `{field}`: expected {expected}, found {found}")]
    MalformedField {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Not A Mapping: baseline root is {0}")]
    NotAMapping(&'static str),

    #[error("Step {step} failed upgrading from {} to {target}: {source}", display_from(.from))]
    StepFailed {
        from: Option<Version>,
        target: Version,
        step: Version,
        #[source]
        source: StepError,
    },
}

/// Error raised by a single [`MigrationStep`](crate::traits::migration::MigrationStep).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error("field `{field}` should be {expected}, found {found}")]
    MalformedField {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0}")]
    Other(String),
}

fn display_from(from: &Option<Version>) -> String {
    match from {
        Some(version) => version.to_string(),
        None => "<unset>".to_string(),
    }
}

/// Names the JSON kind of a value for error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_failure_names_every_version() {
        let err = UpgradeError::StepFailed {
            from: None,
            target: "0.12".parse().unwrap(),
            step: "0.12".parse().unwrap(),
            source: StepError::Other("boom".into()),
        };
        let message = err.to_string();
        assert!(message.contains("<unset>"));
        assert!(message.contains("0.12"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn unknown_version_mentions_both_sides() {
        let err = UpgradeError::UnknownVersion {
            found: "99.0".parse().unwrap(),
            latest: "0.12".parse().unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown Version: baseline declares 99.0, newest known is 0.12"
        );
    }
}
