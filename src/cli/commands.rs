//! CLI command definitions and handlers
//!
//! The presentation layer: calls the translation client and comparator,
//! then renders the returned structures. All fields are treated as
//! read-only display data.

use clap::{Subcommand, ValueEnum};

use crate::core::models::{ComparisonReport, QualityScore, TranslationResult};

/// Commands for the translation comparison tool
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate one text with both configured APIs and compare the results
    Compare {
        /// Text to translate
        #[arg(short, long)]
        text: String,

        /// Source language code (default: auto-detect)
        #[arg(long, default_value = "auto")]
        source_lang: String,

        /// Target language code (default: en)
        #[arg(short = 'T', long, default_value = "en")]
        target_lang: String,

        /// Print the raw result structures as JSON
        #[arg(long)]
        json: bool,
    },

    /// Translate one text with a single configured API
    Translate {
        /// Which configured endpoint to call
        #[arg(long, value_enum)]
        api: ApiChoice,

        /// Text to translate
        #[arg(short, long)]
        text: String,

        /// Source language code (default: auto-detect)
        #[arg(long, default_value = "auto")]
        source_lang: String,

        /// Target language code (default: en)
        #[arg(short = 'T', long, default_value = "en")]
        target_lang: String,

        /// Print the raw result structure as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Selector for one of the two configured endpoints
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ApiChoice {
    /// First configured endpoint (`MYMEMORY_URL`)
    A,
    /// Second configured endpoint (`LINGVA_URL`)
    B,
}

/// Handle the compare command
pub async fn handle_compare(
    text: String,
    source_lang: String,
    target_lang: String,
    json: bool,
) -> anyhow::Result<()> {
    use crate::core::client::TranslationClient;
    use crate::core::comparator::{compare, quality_score};
    use crate::core::config::CompareConfig;
    use crate::core::models::TranslationRequest;
    use tracing::info;

    let config = CompareConfig::load();
    let client = TranslationClient::new()?;
    let request = TranslationRequest::new(text, source_lang, target_lang);

    info!("Comparing {} and {}", config.api_a.url, config.api_b.url);

    // Independent calls, no ordering requirement between them
    let (result_a, result_b) = tokio::join!(
        client.translate(&config.api_a, &request),
        client.translate(&config.api_b, &request),
    );

    let report = compare(&result_a, &result_b);
    let quality_a = quality_score(&result_a);
    let quality_b = quality_score(&result_b);

    if json {
        let output = serde_json::json!({
            "result_a": result_a,
            "result_b": result_b,
            "comparison": report,
            "quality_a": quality_a,
            "quality_b": quality_b,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_result("API 1", &result_a, &quality_a);
    print_result("API 2", &result_b, &quality_b);
    print_comparison(&report);

    Ok(())
}

/// Handle the single-API translate command
pub async fn handle_translate(
    api: ApiChoice,
    text: String,
    source_lang: String,
    target_lang: String,
    json: bool,
) -> anyhow::Result<()> {
    use crate::core::client::TranslationClient;
    use crate::core::comparator::quality_score;
    use crate::core::config::CompareConfig;
    use crate::core::models::TranslationRequest;
    use tracing::info;

    let config = CompareConfig::load();
    let endpoint = match api {
        ApiChoice::A => config.api_a,
        ApiChoice::B => config.api_b,
    };

    let client = TranslationClient::new()?;
    let request = TranslationRequest::new(text, source_lang, target_lang);

    info!("Translating via {}", endpoint.url);

    let result = client.translate(&endpoint, &request).await;
    let quality = quality_score(&result);

    if json {
        let output = serde_json::json!({
            "result": result,
            "quality": quality,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_result("Translation", &result, &quality);

    Ok(())
}

/// Render one translation with its quality line
fn print_result(label: &str, result: &TranslationResult, quality: &QualityScore) {
    println!("\n=== {} ({}) ===", label, result.api_name());

    match result {
        TranslationResult::Success(translation) => {
            println!("{}", translation.translated_text);
            println!("{}", format_quality(quality));
        }
        TranslationResult::Failure(failure) => {
            println!("❌ {}: {}", failure.kind, failure.message);
            if let Some(status) = failure.http_status {
                println!("   HTTP status: {}", status);
            }
        }
    }
}

/// Quality line with the score tier marker
fn format_quality(quality: &QualityScore) -> String {
    if quality.has_error {
        let kind = quality
            .error_type
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        return format!("❌ Error: {}", kind);
    }

    let emoji = if quality.overall_score >= 0.8 {
        "🟢"
    } else if quality.overall_score >= 0.6 {
        "🟡"
    } else {
        "🔴"
    };

    format!(
        "{} Quality: {:.1}% | Confidence: {}% | Words: {}",
        emoji,
        quality.overall_score * 100.0,
        quality.confidence,
        quality.word_count
    )
}

/// Render the comparison block with its similarity tier
fn print_comparison(report: &ComparisonReport) {
    println!("\n=== 📈 Comparison ===");

    if !report.both_successful {
        let message = report.error_message.as_deref().unwrap_or("comparison failed");
        println!("❌ {}", message);
        return;
    }

    let similarity_text = if report.similarity >= 0.9 {
        "🟢 Nearly identical"
    } else if report.similarity >= 0.7 {
        "🟡 Similar"
    } else if report.similarity >= 0.5 {
        "🟠 Partially similar"
    } else {
        "🔴 Different"
    };

    println!(
        "Similarity:      {} ({:.1}%)",
        similarity_text,
        report.similarity * 100.0
    );
    println!("Length diff:     {} chars", report.length_diff);
    println!("Word count diff: {} words", report.word_count_diff);
    println!("Confidence diff: {}%", report.confidence_diff);
    println!("API 1: {} | API 2: {}", report.api_a_name, report.api_b_name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::comparator::{compare, quality_score};

    #[test]
    fn test_format_quality_tiers() {
        let high = quality_score(&TranslationResult::success("Привет как дела", "en", 95, "MyMemory"));
        assert!(format_quality(&high).starts_with("🟢"));

        let mid = quality_score(&TranslationResult::success("Привет как дела", "en", 70, "MyMemory"));
        assert!(format_quality(&mid).starts_with("🟡"));

        let low = quality_score(&TranslationResult::success("Привет", "en", 60, "MyMemory"));
        assert!(format_quality(&low).starts_with("🔴"));
    }

    #[test]
    fn test_format_quality_error() {
        use crate::core::errors::ErrorKind;
        use crate::core::models::TranslationFailure;

        let result: TranslationResult =
            TranslationFailure::new(ErrorKind::ApiError, "HTTP error 500", "Lingva").into();
        let line = format_quality(&quality_score(&result));
        assert!(line.contains("api_error"));
    }

    #[test]
    fn test_comparison_report_fields_survive_render_path() {
        let a = TranslationResult::success("Привет", "en", 100, "MyMemory");
        let b = TranslationResult::success("Привет", "en", 100, "Lingva");
        let report = compare(&a, &b);

        // Rendering only reads the report, keep the invariants it relies on
        assert!(report.both_successful);
        assert!(report.error_message.is_none());
        assert_eq!(report.similarity, 1.0);
    }
}
