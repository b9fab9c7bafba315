use crate::domain::classify::Classifier;
use crate::domain::version::{BumpCategory, Version};

/// One fold step: a commit subject and the category it classified as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub subject: String,
    pub category: BumpCategory,
}

/// Outcome of resolving a commit sequence against a starting version.
///
/// `semantic` is false when the starting version failed validation; in that
/// case `version` echoes the input unchanged and `changed` is false
/// regardless of the commits. A caller that only inspects `changed` cannot
/// tell "non-semantic start" apart from "no qualifying commits"; the
/// `semantic` flag exists to make that distinction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub version: String,
    pub changed: bool,
    pub semantic: bool,
    pub steps: Vec<Step>,
}

/// Resolves the next version from an ordered commit sequence.
///
/// A strict left fold: each commit's bump applies to the version state left
/// by all prior commits, oldest first. Order matters because a major bump
/// zeroes the lower components, changing what a later patch bump lands on:
/// `["feat: a", "feat!: b"]` from 1.0.0 yields 2.0.0, while the reversed
/// sequence yields 2.1.0.
pub struct Resolver {
    classifier: Classifier,
}

impl Resolver {
    /// Create a resolver with the default classifier
    pub fn new() -> Self {
        Resolver {
            classifier: Classifier::new(),
        }
    }

    /// Fold `subjects` (chronological, oldest first) into the final version.
    ///
    /// Never fails: a non-semantic `start` resolves to a soft no-op with
    /// `semantic = false`, and an all-`None` sequence returns `start`
    /// unchanged with `changed = false`.
    pub fn resolve(&self, start: &str, subjects: &[String]) -> Resolution {
        let start_version = match Version::parse(start) {
            Ok(v) => v,
            Err(_) => {
                return Resolution {
                    version: start.to_string(),
                    changed: false,
                    semantic: false,
                    steps: Vec::new(),
                }
            }
        };

        let mut steps = Vec::with_capacity(subjects.len());
        let final_version = subjects.iter().fold(start_version, |current, subject| {
            let category = self.classifier.classify(subject);
            steps.push(Step {
                subject: subject.clone(),
                category,
            });
            current.bump(category)
        });

        Resolution {
            version: final_version.to_string(),
            changed: final_version != start_version,
            semantic: true,
            steps,
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
