//! Analyzer module - tokenizing, counting and scoring content

pub mod engine;
pub mod frequency;
pub mod readability;
pub mod scoring;
pub mod tokenizer;

pub use engine::ContentEngine;
pub use frequency::FrequencyTable;
pub use readability::{keyword_density, readability, word_count};
pub use scoring::{seo_score, RatingThresholds, ScoreCalculator};
pub use tokenizer::{StopWords, Tokenizer};
