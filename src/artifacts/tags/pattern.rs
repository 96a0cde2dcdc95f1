use crate::errors::{StampError, StampResult};
use regex::Regex;
use std::str::FromStr;

/// Pattern matching every tag name
pub const MATCH_ALL_TAGS: &str = ".*";

/// Regular expression a short tag name must match in full
///
/// `v\d+\.\d+` matches `v1.0` but neither `v1.0-rc1` nor `release-v1.0`.
#[derive(Debug, Clone)]
pub struct TagPattern {
    source: String,
    regex: Regex,
}

impl TagPattern {
    pub fn try_new(pattern: &str) -> StampResult<Self> {
        let regex =
            Regex::new(&format!("^(?:{pattern})$")).map_err(|source| StampError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(TagPattern {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn matches(&self, tag_name: &str) -> bool {
        self.regex.is_match(tag_name)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for TagPattern {
    type Err = StampError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Self::try_new(pattern)
    }
}

impl std::fmt::Display for TagPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
