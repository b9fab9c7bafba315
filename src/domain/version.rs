use crate::error::{AutoverError, Result};
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// Category of version increment a commit calls for, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpCategory {
    None,
    Patch,
    Minor,
    Major,
}

impl BumpCategory {
    /// Lowercase name as used in per-commit diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpCategory::Major => "major",
            BumpCategory::Minor => "minor",
            BumpCategory::Patch => "patch",
            BumpCategory::None => "none",
        }
    }
}

impl fmt::Display for BumpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a `major.minor.patch` string.
    ///
    /// Exactly three dot-separated components are required and each must be a
    /// non-empty run of digits. Empty components (`".."`, `"1..3"`) are
    /// rejected rather than treated as zero.
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 {
            return Err(AutoverError::version(format!(
                "Invalid version format: '{}' - expected major.minor.patch",
                text
            )));
        }

        let major = parts[0].parse::<u32>().map_err(|_| {
            AutoverError::version(format!("Invalid major component: '{}'", parts[0]))
        })?;
        let minor = parts[1].parse::<u32>().map_err(|_| {
            AutoverError::version(format!("Invalid minor component: '{}'", parts[1]))
        })?;
        let patch = parts[2].parse::<u32>().map_err(|_| {
            AutoverError::version(format!("Invalid patch component: '{}'", parts[2]))
        })?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Apply a bump category, returning the new version.
    ///
    /// Major resets minor and patch to zero, minor resets patch to zero,
    /// and `None` is the identity. Total for any version and category.
    pub fn bump(self, category: BumpCategory) -> Self {
        match category {
            BumpCategory::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            BumpCategory::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            BumpCategory::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
            BumpCategory::None => self,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
