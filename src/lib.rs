//! seoscope: Content Scoring & Competitor Keyword Analysis
//!
//! This library scores a piece of copy against a set of target keywords
//! (keyword frequency, keyword density, readability and a blended SEO score),
//! emits on-page recommendations, and aggregates the top keywords used by a
//! handful of competitor pages for the same niche.

pub mod advisor;
pub mod analyzer;
pub mod competitor;
pub mod config;
pub mod reporter;

use serde::{Deserialize, Serialize};

pub use analyzer::ContentEngine;
pub use competitor::{CompetitorInsight, CompetitorReport, FetchStatus};

/// Source identifier used for content supplied directly by the caller
pub const OWN_SOURCE: &str = "own";

/// A piece of text to analyze, with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    source: Option<String>,
}

impl Document {
    /// Content authored by the caller
    pub fn own(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: None,
        }
    }

    /// Content scraped from a URL
    pub fn from_url(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: Some(url.into()),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The URL this document was fetched from, or `"own"`
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or(OWN_SOURCE)
    }
}

/// A keyword together with how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

impl KeywordCount {
    pub fn new(keyword: impl Into<String>, count: usize) -> Self {
        Self {
            keyword: keyword.into(),
            count,
        }
    }
}

/// Rating band for a headline metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Optimal,
    Good,
    Low,
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Optimal => write!(f, "Optimal"),
            Rating::Good => write!(f, "Good"),
            Rating::Low => write!(f, "Low"),
        }
    }
}

/// A metric value with its rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedMetric<T> {
    pub value: T,
    pub rating: Rating,
}

/// The merged result of analyzing one document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReport {
    /// `"own"` or the URL the content was scraped from
    pub source: String,
    /// Normalized target keywords the content was scored against
    pub target_keywords: Vec<String>,
    /// Whitespace-delimited word count of the raw text
    pub word_count: RatedMetric<usize>,
    /// Flesch reading ease (higher is easier)
    pub readability: RatedMetric<f64>,
    /// Share of filtered tokens matching a target keyword (0.0-1.0)
    pub keyword_density: RatedMetric<f64>,
    /// Blended heuristic score, unbounded
    pub seo_score: f64,
    /// Most frequent keywords in the content itself
    pub suggested_keywords: Vec<KeywordCount>,
    /// On-page recommendations, in rule order
    pub recommendations: Vec<String>,
    /// Competitor keyword aggregation (when a niche was analyzed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitors: Option<CompetitorReport>,
}

/// Parse a comma-separated keyword list: trimmed, lower-cased, blanks dropped.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords_normalizes() {
        assert_eq!(
            parse_keywords(" SEO, Content Strategy ,,blog "),
            vec!["seo", "content strategy", "blog"]
        );
    }

    #[test]
    fn test_parse_keywords_empty() {
        assert!(parse_keywords("").is_empty());
        assert!(parse_keywords(" , ,").is_empty());
    }

    #[test]
    fn test_document_source() {
        assert_eq!(Document::own("hello").source(), "own");
        let doc = Document::from_url("https://example.com", "hello");
        assert_eq!(doc.source(), "https://example.com");
        assert_eq!(doc.text(), "hello");
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::Optimal.to_string(), "Optimal");
        assert_eq!(Rating::Low.to_string(), "Low");
    }
}
