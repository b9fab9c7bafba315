use crate::domain::version::BumpCategory;
use regex::Regex;

/// Rule table in precedence order; first match wins.
///
/// Breaking-change subjects (`feat!:`, `fix(scope)!:`) outrank the plain
/// `feat`/`fix` rules, so a subject is never classified by a later rule when
/// an earlier one matches. The scope group applies to `chore` the same way
/// it applies to `fix`, so `chore(deps): ...` is a patch while
/// `chorefoo: ...` is not recognized at all.
const RULES: &[(&str, BumpCategory)] = &[
    (r"(?i)^(feat|fix)(\(.*\))?!:.*$", BumpCategory::Major),
    (r"(?i)^feat(\(.*\))?:.*$", BumpCategory::Minor),
    (r"(?i)^fix(\(.*\))?:.*$", BumpCategory::Patch),
    (r"(?i)^chore(\(.*\))?:.*$", BumpCategory::Patch),
];

/// Maps a commit subject line to the version increment it calls for.
///
/// Patterns are compiled once at construction and evaluated in fixed
/// precedence order. Classification is pure: any subject that matches no
/// rule, including well-formed subjects with unrecognized types like
/// `docs:`, maps to [BumpCategory::None].
pub struct Classifier {
    rules: Vec<(Regex, BumpCategory)>,
}

impl Classifier {
    /// Create a classifier with the built-in rule table
    pub fn new() -> Self {
        let rules = RULES
            .iter()
            .filter_map(|(pattern, category)| {
                Regex::new(pattern).ok().map(|re| (re, *category))
            })
            .collect();

        Classifier { rules }
    }

    /// Classify one commit subject
    pub fn classify(&self, subject: &str) -> BumpCategory {
        for (re, category) in &self.rules {
            if re.is_match(subject) {
                return *category;
            }
        }
        BumpCategory::None
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(subject: &str) -> BumpCategory {
        Classifier::new().classify(subject)
    }

    #[test]
    fn test_breaking_feat_is_major() {
        assert_eq!(classify("feat!: drop old api"), BumpCategory::Major);
        assert_eq!(classify("feat(core)!: drop old api"), BumpCategory::Major);
    }

    #[test]
    fn test_breaking_fix_is_major() {
        assert_eq!(classify("fix!: change error codes"), BumpCategory::Major);
        assert_eq!(classify("fix(api)!: change error codes"), BumpCategory::Major);
    }

    #[test]
    fn test_breaking_outranks_minor() {
        // Precedence: a subject carrying the `!` marker is never minor
        let classifier = Classifier::new();
        for subject in ["feat!: x", "feat(scope)!: x", "FEAT!: x"] {
            assert_eq!(classifier.classify(subject), BumpCategory::Major);
        }
    }

    #[test]
    fn test_feat_is_minor() {
        assert_eq!(classify("feat: add endpoint"), BumpCategory::Minor);
        assert_eq!(classify("feat(api): add endpoint"), BumpCategory::Minor);
    }

    #[test]
    fn test_fix_is_patch() {
        assert_eq!(classify("fix: null deref"), BumpCategory::Patch);
        assert_eq!(classify("fix(ui): button color"), BumpCategory::Patch);
    }

    #[test]
    fn test_chore_is_patch() {
        assert_eq!(classify("chore: bump deps"), BumpCategory::Patch);
        assert_eq!(classify("chore(deps): bump serde"), BumpCategory::Patch);
    }

    #[test]
    fn test_chore_requires_colon_suffix() {
        // Scope group binds to chore like it does to fix
        assert_eq!(classify("chorefoo: tidy"), BumpCategory::None);
        assert_eq!(classify("chore tidy things"), BumpCategory::None);
    }

    #[test]
    fn test_type_keyword_case_insensitive() {
        assert_eq!(classify("Feat: add endpoint"), BumpCategory::Minor);
        assert_eq!(classify("FIX: crash"), BumpCategory::Patch);
        assert_eq!(classify("CHORE(ci): pipeline"), BumpCategory::Patch);
    }

    #[test]
    fn test_unrecognized_types_are_none() {
        // Conventional shape is not enough; the type keyword must be known
        assert_eq!(classify("docs: update readme"), BumpCategory::None);
        assert_eq!(classify("refactor: extract module"), BumpCategory::None);
        assert_eq!(classify("test(core): add coverage"), BumpCategory::None);
    }

    #[test]
    fn test_malformed_subjects_are_none() {
        assert_eq!(classify(""), BumpCategory::None);
        assert_eq!(classify("Update README"), BumpCategory::None);
        assert_eq!(classify("feat add endpoint"), BumpCategory::None);
        assert_eq!(classify("fixed the bug"), BumpCategory::None);
    }

    #[test]
    fn test_type_must_anchor_at_start() {
        assert_eq!(classify("my feat: not really"), BumpCategory::None);
        assert_eq!(classify(" fix: leading space"), BumpCategory::None);
    }
}
