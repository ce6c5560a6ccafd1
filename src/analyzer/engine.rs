//! Content engine - merges every metric into one report

use crate::advisor::{self, AdvisorSettings};
use crate::competitor::{CompetitorAggregator, PageFetcher, SearchProvider};
use crate::config::{Config, DEFAULT_TOP_K};
use crate::{ContentReport, Document, KeywordCount, RatedMetric};

use super::frequency::FrequencyTable;
use super::readability::{keyword_density, readability, word_count};
use super::scoring::{seo_score, RatingThresholds};
use super::tokenizer::Tokenizer;

/// Scores documents against target keywords.
///
/// The engine owns its stop-word list (through the tokenizer) and the
/// thresholds it rates with; it holds no per-request state.
#[derive(Debug, Clone)]
pub struct ContentEngine {
    tokenizer: Tokenizer,
    top_k: usize,
    ratings: RatingThresholds,
    advisor: AdvisorSettings,
}

impl ContentEngine {
    /// Create an engine with the English stop-word list and default thresholds
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::english(),
            top_k: DEFAULT_TOP_K,
            ratings: RatingThresholds::default(),
            advisor: AdvisorSettings::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            tokenizer: config.tokenizer(),
            top_k: config.top_k(),
            ratings: config.ratings(),
            advisor: config.advisor(),
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_ratings(mut self, ratings: RatingThresholds) -> Self {
        self.ratings = ratings;
        self
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    pub fn frequencies(&self, text: &str) -> FrequencyTable {
        FrequencyTable::from_tokens(self.tokenize(text))
    }

    /// The top-K keywords of a text
    pub fn top_keywords(&self, text: &str) -> Vec<KeywordCount> {
        self.frequencies(text).top_k(self.top_k)
    }

    pub fn keyword_density<S: AsRef<str>>(&self, text: &str, keywords: &[S]) -> f64 {
        keyword_density(&self.tokenizer, text, keywords)
    }

    /// Score a document against target keywords
    pub fn analyze(&self, document: &Document, keywords: &[String]) -> ContentReport {
        let text = document.text();

        let words = word_count(text);
        let reading_ease = readability(text);
        let density = self.keyword_density(text, keywords);

        ContentReport {
            source: document.source().to_string(),
            target_keywords: keywords.to_vec(),
            word_count: RatedMetric {
                value: words,
                rating: self.ratings.rate_word_count(words),
            },
            readability: RatedMetric {
                value: reading_ease,
                rating: self.ratings.rate_readability(reading_ease),
            },
            keyword_density: RatedMetric {
                value: density,
                rating: self.ratings.rate_density(density),
            },
            seo_score: seo_score(density, reading_ease),
            suggested_keywords: self.top_keywords(text),
            recommendations: advisor::advise_with(text, &self.advisor),
            competitors: None,
        }
    }

    /// Score a document and aggregate competitor keywords for a niche
    pub fn analyze_with_competitors<S, F>(
        &self,
        document: &Document,
        keywords: &[String],
        niche: &str,
        aggregator: &CompetitorAggregator<S, F>,
    ) -> ContentReport
    where
        S: SearchProvider,
        F: PageFetcher,
    {
        let mut report = self.analyze(document, keywords);
        report.competitors = Some(aggregator.aggregate(&self.tokenizer, niche, keywords));
        report
    }
}

impl Default for ContentEngine {
    fn default() -> Self {
        Self::new()
    }
}
