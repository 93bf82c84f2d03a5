//! The pattern catalog: ordered error patterns with explanations and fixes.
//!
//! Order is match priority - the matcher returns the first hit, so more
//! specific patterns must come before broader ones. Pattern sources are kept
//! as strings and compiled case-insensitively at match time; nothing is
//! validated at load.

/// A single translation rule pairing a regex with its metadata.
///
/// `confidence` is hand-assigned per pattern, not computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternRecord {
    /// Regex source, compiled case-insensitively when evaluated
    pub regex: &'static str,
    /// Plain-English description of what the error means
    pub explanation: &'static str,
    /// Remediation text, may embed code samples and newlines
    pub fix: &'static str,
    /// Language tag (free-form, not a closed set)
    pub language: &'static str,
    /// Match reliability in [0,1]
    pub confidence: f64,
}

/// The error pattern catalog, in match-priority order.
pub const ERROR_PATTERNS: &[PatternRecord] = &[
    PatternRecord {
        regex: "TypeError:.*undefined.*function*",
        explanation: "You're trying to call something that doesn't exist or isn't a function.",
        fix: "Check if the variable exists before calling:\nif (typeof myFunction === 'function') {\n  myFunction();\n}",
        language: "javascript",
        confidence: 0.9,
    },
    PatternRecord {
        regex: "ModuleNotFoundError:",
        explanation: "Python can't find the module you're trying to import.",
        fix: "Install the missing package:\npip install package-name",
        language: "python",
        confidence: 0.95,
    },
    PatternRecord {
        regex: "segmentation fault",
        explanation: "Your C program tried to access memory it shouldn't.",
        fix: "Use valgrind to debug:\nvalgrind ./your_program",
        language: "c",
        confidence: 0.8,
    },
];

/// Number of patterns in the catalog (reported by the stats endpoint).
pub fn pattern_count() -> usize {
    ERROR_PATTERNS.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    #[test]
    fn test_catalog_has_three_patterns() {
        assert_eq!(pattern_count(), 3);
    }

    #[test]
    fn test_all_confidences_in_range() {
        for pattern in ERROR_PATTERNS {
            assert!(
                (0.0..=1.0).contains(&pattern.confidence),
                "confidence {} out of range for '{}'",
                pattern.confidence,
                pattern.regex
            );
        }
    }

    #[test]
    fn test_all_patterns_compile() {
        for pattern in ERROR_PATTERNS {
            assert!(
                RegexBuilder::new(pattern.regex)
                    .case_insensitive(true)
                    .build()
                    .is_ok(),
                "pattern '{}' failed to compile",
                pattern.regex
            );
        }
    }

    #[test]
    fn test_languages_are_nonempty() {
        for pattern in ERROR_PATTERNS {
            assert!(!pattern.language.is_empty());
            assert!(!pattern.explanation.is_empty());
            assert!(!pattern.fix.is_empty());
        }
    }
}
