//! Schema versions for baseline documents.
//!
//! Versions are dotted numeric identifiers such as `0.12` or `1.0.0`. They are
//! compared component by component as integers, so `0.9 < 0.12`, and a
//! missing trailing component counts as zero (`0.12 == 0.12.0`).
//!
//! ```
//! use baseline_upgrade::version::Version;
//!
//! let old: Version = "0.9".parse().unwrap();
//! let new: Version = "0.12".parse().unwrap();
//! assert!(old < new);
//! assert_eq!(new, "0.12.0".parse::<Version>().unwrap());
//! assert_eq!(new.to_string(), "0.12");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Why a version string could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("version is empty")]
    Empty,
    #[error("component {index} is empty")]
    EmptyComponent { index: usize },
    #[error("component {index} ({component:?}) is not a non-negative integer")]
    NotNumeric { index: usize, component: String },
    #[error("component {index} does not fit in 64 bits")]
    Overflow { index: usize },
}

/// A parsed schema version.
///
/// Equality, ordering and hashing ignore trailing zero components; `Display`
/// keeps the components as they were written.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    pub fn major(&self) -> u64 {
        self.components[0]
    }

    pub fn minor(&self) -> u64 {
        self.components.get(1).copied().unwrap_or(0)
    }

    pub fn patch(&self) -> u64 {
        self.components.get(2).copied().unwrap_or(0)
    }

    /// Components with trailing zeros removed, used for comparisons.
    fn significant(&self) -> &[u64] {
        let len = self
            .components
            .iter()
            .rposition(|c| *c != 0)
            .map_or(0, |last| last + 1);
        &self.components[..len]
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let trimmed = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let components = trimmed
            .split('.')
            .enumerate()
            .map(|(index, component)| {
                if component.is_empty() {
                    return Err(VersionParseError::EmptyComponent { index });
                }
                if !component.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(VersionParseError::NotNumeric {
                        index,
                        component: component.to_string(),
                    });
                }
                component
                    .parse::<u64>()
                    .map_err(|_| VersionParseError::Overflow { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { components })
    }
}

/// Build a version from explicit components; an empty list is rejected.
impl TryFrom<Vec<u64>> for Version {
    type Error = VersionParseError;

    fn try_from(components: Vec<u64>) -> Result<Self, Self::Error> {
        if components.is_empty() {
            return Err(VersionParseError::Empty);
        }
        Ok(Self { components })
    }
}

impl TryFrom<&[u64]> for Version {
    type Error = VersionParseError;

    fn try_from(components: &[u64]) -> Result<Self, Self::Error> {
        Self::try_from(components.to_vec())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.components {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{}", component)?;
            first = false;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // Slices compare lexicographically, and a shorter prefix sorts first,
        // which is exactly "missing components are zero" once zeros are cut.
        self.significant().cmp(other.significant())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[test]
    fn numeric_not_lexical_ordering() {
        assert!(v("0.9") < v("0.12"));
        assert!(v("0.12") < v("1.0"));
        assert!(v("1.10.0") > v("1.9.9"));
        assert!(v("10") > v("9.99"));
    }

    #[test]
    fn trailing_zeros_are_insignificant() {
        assert_eq!(v("0.12"), v("0.12.0"));
        assert_eq!(v("1"), v("1.0.0"));
        assert_eq!(v("0"), v("0.0"));
        assert!(v("0.12") < v("0.12.1"));
    }

    #[test]
    fn display_keeps_written_form() {
        assert_eq!(v("0.12").to_string(), "0.12");
        assert_eq!(v("1.0.0").to_string(), "1.0.0");
        assert_eq!(v(" v2.3 ").to_string(), "2.3");
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!("".parse::<Version>(), Err(VersionParseError::Empty));
        assert_eq!("  ".parse::<Version>(), Err(VersionParseError::Empty));
        assert_eq!(
            "1..2".parse::<Version>(),
            Err(VersionParseError::EmptyComponent { index: 1 })
        );
        assert_eq!(
            "1.2-beta".parse::<Version>(),
            Err(VersionParseError::NotNumeric {
                index: 1,
                component: "2-beta".to_string()
            })
        );
        assert!("1.+2".parse::<Version>().is_err());
    }

    #[test]
    fn oversized_component_reports_overflow() {
        assert_eq!(
            "0.99999999999999999999999".parse::<Version>(),
            Err(VersionParseError::Overflow { index: 1 })
        );
        assert_eq!(
            "18446744073709551615".parse::<Version>().unwrap().major(),
            u64::MAX
        );
    }

    #[test]
    fn components_must_not_be_empty() {
        assert_eq!(Version::try_from(Vec::new()), Err(VersionParseError::Empty));
        let version = Version::try_from(&[1u64, 2][..]).unwrap();
        assert_eq!(version, v("1.2"));
    }

    #[test]
    fn accessors_default_missing_components() {
        let version = v("3");
        assert_eq!(version.major(), 3);
        assert_eq!(version.minor(), 0);
        assert_eq!(version.patch(), 0);
    }

    #[test]
    fn serde_uses_string_form() {
        let json = serde_json::to_string(&v("0.12")).unwrap();
        assert_eq!(json, "\"0.12\"");
        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v("0.12"));
        assert!(serde_json::from_str::<Version>("\"x\"").is_err());
    }
}
