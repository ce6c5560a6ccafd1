//! Competitor keyword aggregation
//!
//! For every competitor slot the aggregator searches `"<slot> <niche>"`,
//! fetches the first result, and ranks that page's keywords. The per-page
//! top-K lists are then summed into one ranked list. A slot that fails is
//! recorded with its status and never aborts the run.

pub mod html;
pub mod http;

pub use http::{is_http_available, HttpFetcher, HttpSearch};

use crate::analyzer::{FrequencyTable, Tokenizer};
use crate::KeywordCount;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;

/// Competitor slots searched when none are configured
pub const DEFAULT_SLOTS: [&str; 3] = ["Competitor1", "Competitor2", "Competitor3"];

/// Failure reported by a search or page collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("no readable content at {0}")]
    EmptyContent(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid result selector: {0}")]
    InvalidSelector(String),
}

/// Finds pages for a query
pub trait SearchProvider {
    /// At most `limit` result URLs, best first. An empty list means the
    /// search ran and found nothing.
    fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, CollaboratorError>;
}

/// Retrieves the readable text of a page
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, CollaboratorError>;
}

/// Outcome of one competitor slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchStatus {
    Success,
    /// Search or fetch failed, or the page had no text
    Unreachable,
    /// The search returned no URL
    NoResult,
}

impl std::fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchStatus::Success => write!(f, "success"),
            FetchStatus::Unreachable => write!(f, "unreachable"),
            FetchStatus::NoResult => write!(f, "no result"),
        }
    }
}

/// Per-slot result of an aggregation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorInsight {
    pub slot: String,
    pub query: String,
    /// The page that was fetched, when the search found one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub status: FetchStatus,
    /// Top-K keywords of the page; empty unless `status` is Success
    pub keywords: Vec<KeywordCount>,
    /// Why the slot degraded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CompetitorInsight {
    fn degraded(slot: &str, query: &str, url: Option<String>, status: FetchStatus, detail: String) -> Self {
        Self {
            slot: slot.to_string(),
            query: query.to_string(),
            url,
            status,
            keywords: Vec::new(),
            detail: Some(detail),
        }
    }

    /// Source identifier: the fetched URL, or the slot name
    pub fn source(&self) -> &str {
        self.url.as_deref().unwrap_or(&self.slot)
    }
}

/// Insights in slot order plus the merged keyword ranking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorReport {
    pub insights: Vec<CompetitorInsight>,
    /// Summed counts across successful slots, top-K, ties in first-seen order
    pub aggregated: Vec<KeywordCount>,
}

impl CompetitorReport {
    pub fn success_count(&self) -> usize {
        self.insights
            .iter()
            .filter(|i| i.status == FetchStatus::Success)
            .count()
    }
}

/// Runs the per-slot search, fetch and ranking
pub struct CompetitorAggregator<S, F> {
    search: S,
    fetcher: F,
    slots: Vec<String>,
    top_k: usize,
}

impl<S: SearchProvider, F: PageFetcher> CompetitorAggregator<S, F> {
    /// Aggregator over the three default slots with top-5 lists
    pub fn new(search: S, fetcher: F) -> Self {
        Self {
            search,
            fetcher,
            slots: DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect(),
            top_k: crate::config::DEFAULT_TOP_K,
        }
    }

    pub fn with_slots(mut self, slots: Vec<String>) -> Self {
        self.slots = slots;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Aggregate competitor keywords for a niche.
    ///
    /// `keywords` are the caller's target keywords. They do not influence
    /// which pages are searched or how they are ranked.
    pub fn aggregate(
        &self,
        tokenizer: &Tokenizer,
        niche: &str,
        keywords: &[String],
    ) -> CompetitorReport {
        let start = Instant::now();
        log::debug!(
            "aggregating {} slot(s) for niche {:?} (targets: {:?})",
            self.slots.len(),
            niche,
            keywords
        );

        let insights: Vec<CompetitorInsight> = self
            .slots
            .iter()
            .map(|slot| self.run_slot(tokenizer, slot, niche))
            .collect();

        let merged = FrequencyTable::merge(
            insights
                .iter()
                .filter(|i| i.status == FetchStatus::Success)
                .map(|i| i.keywords.as_slice()),
        );
        let report = CompetitorReport {
            insights,
            aggregated: merged.top_k(self.top_k),
        };

        log::info!(
            "competitor aggregation finished in {:.2}s: {}/{} slot(s) succeeded, {} keyword(s)",
            start.elapsed().as_secs_f32(),
            report.success_count(),
            report.insights.len(),
            report.aggregated.len()
        );
        report
    }

    fn run_slot(&self, tokenizer: &Tokenizer, slot: &str, niche: &str) -> CompetitorInsight {
        let query = format!("{} {}", slot, niche).trim().to_string();
        log::debug!("slot {}: searching {:?}", slot, query);

        let url = match self.search.search(&query, 1) {
            Ok(urls) => match urls.into_iter().next() {
                Some(url) => url,
                None => {
                    log::warn!("slot {}: no search results for {:?}", slot, query);
                    return CompetitorInsight::degraded(
                        slot,
                        &query,
                        None,
                        FetchStatus::NoResult,
                        "No search results found for the competitor.".to_string(),
                    );
                }
            },
            Err(e) => {
                log::warn!("slot {}: search failed: {}", slot, e);
                return CompetitorInsight::degraded(
                    slot,
                    &query,
                    None,
                    FetchStatus::Unreachable,
                    e.to_string(),
                );
            }
        };

        log::debug!("slot {}: fetching {}", slot, url);
        let text = match self.fetcher.fetch(&url) {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                let e = CollaboratorError::EmptyContent(url.clone());
                log::warn!("slot {}: {}", slot, e);
                return CompetitorInsight::degraded(
                    slot,
                    &query,
                    Some(url),
                    FetchStatus::Unreachable,
                    e.to_string(),
                );
            }
            Err(e) => {
                log::warn!("slot {}: fetch failed: {}", slot, e);
                return CompetitorInsight::degraded(
                    slot,
                    &query,
                    Some(url),
                    FetchStatus::Unreachable,
                    e.to_string(),
                );
            }
        };

        let table = FrequencyTable::from_tokens(tokenizer.tokenize(&text));
        CompetitorInsight {
            slot: slot.to_string(),
            query,
            url: Some(url),
            status: FetchStatus::Success,
            keywords: table.top_k(self.top_k),
            detail: None,
        }
    }
}
