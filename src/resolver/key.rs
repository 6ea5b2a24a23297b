//! Artifact filename grammar
//!
//! Tuning artifacts are named `E<experts>N<intermediate>_tp<tp>_<dtype>.json`.
//! Only the leading `E..N..` segment carries the matching key; the trailing
//! segments are free-form. Parsing and formatting both live here so the grammar
//! is defined exactly once.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

static KEY_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^E([0-9]+)N([0-9]+)$").unwrap());

/// Why a filename could not take part in matching.
///
/// This is an expected outcome (stores hold notes, foreign formats, ...) and is
/// never reported to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSkip {
    #[error("no key segment in {0:?}")]
    MissingSegment(String),

    #[error("key segment {0:?} does not start with 'E'")]
    BadPrefix(String),

    #[error("key segment {0:?} has no 'N' separator")]
    MissingSeparator(String),

    #[error("key segment {0:?} is not numeric")]
    NotNumeric(String),
}

/// Structural key encoded in an artifact name: `(expert_count, intermediate_size)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigKey {
    pub experts: usize,
    pub intermediate: usize,
}

impl ConfigKey {
    pub fn new(experts: usize, intermediate: usize) -> Self {
        Self {
            experts,
            intermediate,
        }
    }

    /// Parse a filename stem such as `E64N18944_tp1_auto`
    pub fn from_stem(stem: &str) -> Result<Self, ParseSkip> {
        let segment = stem.split('_').next().unwrap_or_default();
        if segment.is_empty() {
            return Err(ParseSkip::MissingSegment(stem.to_string()));
        }

        if let Some(caps) = KEY_SEGMENT.captures(segment) {
            // Digits only, so the sole failure left is overflow
            return match (caps[1].parse(), caps[2].parse()) {
                (Ok(experts), Ok(intermediate)) => Ok(Self::new(experts, intermediate)),
                _ => Err(ParseSkip::NotNumeric(segment.to_string())),
            };
        }

        if !segment.starts_with('E') {
            Err(ParseSkip::BadPrefix(segment.to_string()))
        } else if !segment[1..].contains('N') {
            Err(ParseSkip::MissingSeparator(segment.to_string()))
        } else {
            Err(ParseSkip::NotNumeric(segment.to_string()))
        }
    }

    /// Parse the stem of an artifact path
    pub fn from_path(path: &Path) -> Result<Self, ParseSkip> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ParseSkip::MissingSegment(path.display().to_string()))?;
        Self::from_stem(stem)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}N{}", self.experts, self.intermediate)
    }
}

impl FromStr for ConfigKey {
    type Err = ParseSkip;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_stem(s)
    }
}
