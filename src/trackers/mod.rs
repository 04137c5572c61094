pub mod meanshift;
pub mod template;

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

use crate::frame::Frame;
use crate::region::Region;

use self::meanshift::MeanShiftTracker;
use self::template::TemplateTracker;

/// One visual-tracking algorithm instance, bound to a single object at
/// creation time. The model behind `update` is opaque to the rest of the
/// system: per frame it either re-estimates the object's region or reports
/// that the object could not be confidently located.
pub trait VisualTracker {
    fn update(&mut self, frame: &Frame) -> Option<Region>;
}

/// The closed set of selectable tracking algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Template,
    MeanShift,
}

impl AlgorithmKind {
    /// Bind a fresh tracking model to `region` as it appears in `frame`.
    pub fn create(&self, frame: &Frame, region: &Region) -> Box<dyn VisualTracker> {
        match self {
            AlgorithmKind::Template => Box::new(TemplateTracker::init(frame, region)),
            AlgorithmKind::MeanShift => Box::new(MeanShiftTracker::init(frame, region)),
        }
    }
}

impl FromStr for AlgorithmKind {
    type Err = anyhow::Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "template" => Ok(AlgorithmKind::Template),
            "meanshift" | "mean_shift" => Ok(AlgorithmKind::MeanShift),
            _ => bail!(
                "unsupported tracking algorithm \"{}\"; expected one of: template, meanshift",
                name
            ),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::Template => write!(f, "template"),
            AlgorithmKind::MeanShift => write!(f, "meanshift"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_resolve_case_insensitively() {
        assert_eq!(
            "template".parse::<AlgorithmKind>().unwrap(),
            AlgorithmKind::Template
        );
        assert_eq!(
            "MeanShift".parse::<AlgorithmKind>().unwrap(),
            AlgorithmKind::MeanShift
        );
        assert_eq!(
            "mean_shift".parse::<AlgorithmKind>().unwrap(),
            AlgorithmKind::MeanShift
        );
    }

    #[test]
    fn unknown_algorithm_name_is_an_error() {
        let err = "KCF".parse::<AlgorithmKind>().unwrap_err();
        assert!(err.to_string().contains("unsupported tracking algorithm"));
    }
}
