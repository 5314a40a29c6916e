//! Translation Compare - side-by-side evaluation of translation APIs
//!
//! This library sends one text to two independent translation services over
//! their incompatible wire formats, normalizes both answers into one result
//! contract, and derives similarity and quality metrics from the pair.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::TranslationClient,
    comparator::{compare, quality_score},
    config::CompareConfig,
    errors::ErrorKind,
    models::{
        ApiProvider, ComparisonReport, Endpoint, QualityScore, Translation, TranslationFailure,
        TranslationRequest, TranslationResult,
    },
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
