//! First-match-wins lookup over the pattern catalog.

use crate::catalog::{self, PatternRecord};
use crate::types::TranslationResult;
use regex::RegexBuilder;
use thiserror::Error;

/// Fallback explanation when no catalog pattern matches
pub const FALLBACK_EXPLANATION: &str = "Exact Error not identified";
/// Fallback remediation checklist
pub const FALLBACK_FIX: &str =
    "Try \n1.Googling the error \n2.Checking StackOverflow \n3.Look for typos in your code";
/// Fallback confidence
pub const FALLBACK_CONFIDENCE: f64 = 0.3;
/// Fallback language tag
pub const FALLBACK_LANGUAGE: &str = "Unknown";

/// Failures surfaced by [`find_solution`]
#[derive(Debug, Error)]
pub enum TranslateError {
    /// A catalog pattern failed to compile. Only reachable once a broken
    /// pattern is first evaluated; the catalog is not validated at load.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Scan the catalog in order and return the first matching record's
/// translation, or the fixed fallback when nothing matches.
///
/// Matching is a case-insensitive search anywhere in `error_text`, so a
/// substring hit counts. Strictly first-match-wins: no scoring, no
/// preference for higher confidence.
pub fn find_solution(error_text: &str) -> Result<TranslationResult, TranslateError> {
    for pattern in catalog::ERROR_PATTERNS {
        let re = RegexBuilder::new(pattern.regex)
            .case_insensitive(true)
            .build()
            .map_err(|source| TranslateError::InvalidPattern {
                pattern: pattern.regex.to_string(),
                source,
            })?;

        if re.is_match(error_text) {
            return Ok(translation_for(pattern));
        }
    }

    Ok(fallback_result())
}

fn translation_for(pattern: &PatternRecord) -> TranslationResult {
    TranslationResult {
        explanation: pattern.explanation.to_string(),
        fix: pattern.fix.to_string(),
        confidence: pattern.confidence,
        language: pattern.language.to_string(),
        original_error: None,
    }
}

/// The fixed result returned when no pattern matches
pub fn fallback_result() -> TranslationResult {
    TranslationResult {
        explanation: FALLBACK_EXPLANATION.to_string(),
        fix: FALLBACK_FIX.to_string(),
        confidence: FALLBACK_CONFIDENCE,
        language: FALLBACK_LANGUAGE.to_string(),
        original_error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_javascript_type_error() {
        let result = find_solution("TypeError: undefined is not a function").unwrap();
        assert_eq!(result.language, "javascript");
        assert_eq!(result.confidence, 0.9);
        assert!(result.explanation.contains("doesn't exist"));
    }

    #[test]
    fn test_python_missing_module() {
        let result =
            find_solution("ModuleNotFoundError: No module named 'requests'").unwrap();
        assert_eq!(result.language, "python");
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_segfault_matches_case_insensitively() {
        // Catalog pattern is lowercase; input is not
        let result = find_solution("Segmentation fault (core dumped)").unwrap();
        assert_eq!(result.language, "c");
        assert_eq!(result.confidence, 0.8);
    }

    #[test]
    fn test_unmatched_input_gets_fallback() {
        let result = find_solution("some completely unrelated text").unwrap();
        assert_eq!(result.explanation, FALLBACK_EXPLANATION);
        assert_eq!(result.confidence, FALLBACK_CONFIDENCE);
        assert_eq!(result.language, FALLBACK_LANGUAGE);
    }

    #[test]
    fn test_empty_input_gets_fallback() {
        let result = find_solution("").unwrap();
        assert_eq!(result, fallback_result());
    }

    #[test]
    fn test_first_match_wins_over_later_patterns() {
        // Matches both the javascript and python patterns; catalog order decides
        let text =
            "TypeError: undefined is not a function\nModuleNotFoundError: No module named 'x'";
        let result = find_solution(text).unwrap();
        assert_eq!(result.language, "javascript");
    }

    #[test]
    fn test_match_anywhere_in_text() {
        let text = "build log line 1\nbuild log line 2\nsegmentation fault\ndone";
        let result = find_solution(text).unwrap();
        assert_eq!(result.language, "c");
    }

    #[test]
    fn test_confidence_always_in_range() {
        let inputs = [
            "TypeError: undefined is not a function",
            "ModuleNotFoundError: gone",
            "SEGMENTATION FAULT",
            "nothing to see here",
            "",
        ];
        for input in inputs {
            let result = find_solution(input).unwrap();
            assert!(
                (0.0..=1.0).contains(&result.confidence),
                "confidence {} out of range for input {:?}",
                result.confidence,
                input
            );
        }
    }

    #[test]
    fn test_matching_is_deterministic() {
        let first = find_solution("ModuleNotFoundError: No module named 'foo'").unwrap();
        let second = find_solution("ModuleNotFoundError: No module named 'foo'").unwrap();
        assert_eq!(first, second);
    }
}
