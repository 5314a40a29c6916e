//! Comparison metrics for translation results
//!
//! Pure functions over the normalized result contract; no network access and
//! no shared state, safe to call repeatedly and concurrently.

use similar::{Algorithm, TextDiff};

use crate::core::models::{ComparisonReport, QualityScore, TranslationResult};

/// Message reported when both APIs failed
const BOTH_FAILED_MESSAGE: &str = "both APIs returned errors";
/// Message reported when exactly one API failed
const ONE_FAILED_MESSAGE: &str = "one API returned an error";

/// Compare two translation results and derive similarity metrics
///
/// When either result is a failure the report carries zeroed metrics and an
/// error message; all diffs are computed on the raw translated texts.
pub fn compare(a: &TranslationResult, b: &TranslationResult) -> ComparisonReport {
    let api_a_name = a.api_name().to_string();
    let api_b_name = b.api_name().to_string();

    let (translation_a, translation_b) = match (a.as_success(), b.as_success()) {
        (Some(ta), Some(tb)) => (ta, tb),
        (None, None) => return ComparisonReport::failed(api_a_name, api_b_name, BOTH_FAILED_MESSAGE),
        _ => return ComparisonReport::failed(api_a_name, api_b_name, ONE_FAILED_MESSAGE),
    };

    let text_a = &translation_a.translated_text;
    let text_b = &translation_b.translated_text;

    ComparisonReport {
        similarity: similarity(text_a, text_b),
        length_diff: text_a.chars().count().abs_diff(text_b.chars().count()),
        word_count_diff: text_a
            .split_whitespace()
            .count()
            .abs_diff(text_b.split_whitespace().count()),
        confidence_diff: translation_a.confidence.abs_diff(translation_b.confidence),
        both_successful: true,
        api_a_name,
        api_b_name,
        error_message: None,
        text_a: Some(text_a.clone()),
        text_b: Some(text_b.clone()),
        source_language_a: Some(translation_a.source_language.clone()),
        source_language_b: Some(translation_b.source_language.clone()),
    }
}

/// Normalized textual closeness in [0, 1]
///
/// Empty input on either side scores 0.0, including the both-empty case: two
/// empty strings are not treated as a meaningful match.
fn similarity(text_a: &str, text_b: &str) -> f32 {
    if text_a.is_empty() || text_b.is_empty() {
        return 0.0;
    }

    let normalized_a = text_a.trim().to_lowercase();
    let normalized_b = text_b.trim().to_lowercase();

    if normalized_a == normalized_b {
        return 1.0;
    }

    // Character-level LCS ratio: 2*M / T over matched characters
    TextDiff::configure()
        .algorithm(Algorithm::Lcs)
        .diff_chars(normalized_a.as_str(), normalized_b.as_str())
        .ratio()
}

/// Score a single translation result on a 0-1 scale
///
/// Combines the API-reported confidence with penalties for degenerate
/// output: under 2 words costs 0.2, over 100 words costs 0.1, and a blank
/// translation zeroes the score outright.
pub fn quality_score(result: &TranslationResult) -> QualityScore {
    let translation = match result {
        TranslationResult::Success(translation) => translation,
        TranslationResult::Failure(failure) => {
            return QualityScore {
                overall_score: 0.0,
                confidence: 0,
                word_count: 0,
                char_count: 0,
                has_error: true,
                api_name: None,
                error_type: Some(failure.kind),
            }
        }
    };

    let text = &translation.translated_text;
    let word_count = text.split_whitespace().count();
    let char_count = text.chars().count();

    let base_score = (f32::from(translation.confidence) / 100.0).min(1.0);

    let penalty = if text.trim().is_empty() {
        1.0
    } else if word_count < 2 {
        0.2
    } else if word_count > 100 {
        0.1
    } else {
        0.0
    };

    QualityScore {
        overall_score: (base_score - penalty).max(0.0),
        confidence: translation.confidence,
        word_count,
        char_count,
        has_error: false,
        api_name: Some(translation.api_name.clone()),
        error_type: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;
    use crate::core::models::TranslationFailure;

    fn success(text: &str, confidence: u8, api: &str) -> TranslationResult {
        TranslationResult::success(text, "en", confidence, api)
    }

    fn failure(api: &str) -> TranslationResult {
        TranslationFailure::new(ErrorKind::ApiError, "HTTP error 500", api).into()
    }

    #[test]
    fn test_compare_identical_translations() {
        let a = success("Привет, как дела?", 95, "MyMemory");
        let b = success("Привет, как дела?", 95, "Lingva");

        let report = compare(&a, &b);

        assert!(report.both_successful);
        assert_eq!(report.similarity, 1.0);
        assert_eq!(report.length_diff, 0);
        assert_eq!(report.word_count_diff, 0);
        assert_eq!(report.confidence_diff, 0);
        assert_eq!(report.api_a_name, "MyMemory");
        assert_eq!(report.api_b_name, "Lingva");
        assert_eq!(report.text_a.as_deref(), Some("Привет, как дела?"));
    }

    #[test]
    fn test_compare_similar_translations() {
        let a = success("Привет, как дела?", 95, "MyMemory");
        let b = success("Привет, как ты?", 90, "Lingva");

        let report = compare(&a, &b);

        assert!(report.both_successful);
        assert!(report.similarity > 0.5);
        assert!(report.similarity < 1.0);
        assert_eq!(report.confidence_diff, 5);
        assert_eq!(report.word_count_diff, 0);
    }

    #[test]
    fn test_compare_case_and_whitespace_insensitive() {
        let a = success("  Hello World  ", 100, "MyMemory");
        let b = success("hello world", 100, "Lingva");

        let report = compare(&a, &b);

        assert_eq!(report.similarity, 1.0);
        // Diffs are computed before normalization
        assert_eq!(report.length_diff, 4);
    }

    #[test]
    fn test_compare_both_empty_is_not_a_match() {
        let a = success("", 100, "MyMemory");
        let b = success("", 100, "Lingva");

        let report = compare(&a, &b);

        assert!(report.both_successful);
        assert_eq!(report.similarity, 0.0);
        assert_eq!(report.length_diff, 0);
    }

    #[test]
    fn test_compare_both_failed() {
        let report = compare(&failure("MyMemory"), &failure("Lingva"));

        assert!(!report.both_successful);
        assert_eq!(report.similarity, 0.0);
        assert_eq!(report.length_diff, 0);
        assert_eq!(report.word_count_diff, 0);
        assert_eq!(report.confidence_diff, 0);
        assert!(report.error_message.as_deref().unwrap().contains("both"));
    }

    #[test]
    fn test_compare_one_failed() {
        let a = failure("MyMemory");
        let b = success("Привет", 95, "Lingva");

        for report in [compare(&a, &b), compare(&b, &a)] {
            assert!(!report.both_successful);
            assert_eq!(report.similarity, 0.0);
            assert!(report.error_message.as_deref().unwrap().contains("one"));
        }
    }

    #[test]
    fn test_quality_score_success() {
        let result = success("Привет как дела", 95, "MyMemory");
        let quality = quality_score(&result);

        assert!(!quality.has_error);
        assert_eq!(quality.word_count, 3);
        assert_eq!(quality.char_count, 15);
        assert_eq!(quality.confidence, 95);
        assert!(quality.overall_score > 0.8);
        assert_eq!(quality.api_name.as_deref(), Some("MyMemory"));
        assert!(quality.error_type.is_none());
    }

    #[test]
    fn test_quality_score_short_translation_penalty() {
        let result = success("Привет", 100, "Lingva");
        let quality = quality_score(&result);

        assert_eq!(quality.word_count, 1);
        assert!((quality.overall_score - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_quality_score_long_translation_penalty() {
        let text = "слово ".repeat(120);
        let result = success(&text, 100, "Lingva");
        let quality = quality_score(&result);

        assert_eq!(quality.word_count, 120);
        assert!((quality.overall_score - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_quality_score_empty_translation_zeroes_score() {
        let result = success("", 50, "MyMemory");
        let quality = quality_score(&result);

        assert!(!quality.has_error);
        assert_eq!(quality.overall_score, 0.0);
        assert_eq!(quality.word_count, 0);

        let result = success("   ", 100, "MyMemory");
        let quality = quality_score(&result);
        assert_eq!(quality.overall_score, 0.0);
    }

    #[test]
    fn test_quality_score_failure() {
        let result: TranslationResult =
            TranslationFailure::new(ErrorKind::RequestFailed, "connection refused", "Lingva")
                .into();
        let quality = quality_score(&result);

        assert!(quality.has_error);
        assert_eq!(quality.overall_score, 0.0);
        assert_eq!(quality.confidence, 0);
        assert_eq!(quality.error_type, Some(ErrorKind::RequestFailed));
        assert!(quality.api_name.is_none());
    }
}
