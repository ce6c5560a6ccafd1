//! Config schema and deserialization

use crate::advisor::AdvisorSettings;
use crate::analyzer::scoring::RatingThresholds;
use crate::analyzer::{StopWords, Tokenizer};
use crate::competitor::DEFAULT_SLOTS;
use serde::{Deserialize, Serialize};

/// Default number of entries in every top-K list
pub const DEFAULT_TOP_K: usize = 5;

/// Competitor search slots
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorSettings {
    /// Slot names, searched in order as `"<slot> <niche>"`. The slot count is
    /// the length of this list.
    #[serde(default)]
    pub slots: Option<Vec<String>>,
}

/// Stop-word list injected into the tokenizer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopWordSettings {
    /// Words filtered in addition to the built-in English list
    #[serde(default)]
    pub extra: Vec<String>,

    /// Use only `extra`, dropping the built-in list
    #[serde(default)]
    pub replace_defaults: Option<bool>,
}

/// Settings for the HTTP search and page collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpSettings {
    /// Per-request timeout
    pub timeout_secs: u64,

    /// Sent with every request; many sites reject non-browser agents
    pub user_agent: String,

    /// Skip TLS certificate verification. On by default so that pages with
    /// broken certificates can still be scored; applies to this client only.
    pub accept_invalid_certs: bool,

    /// HTML search endpoint queried with `queryParam=<query>`
    pub search_url: String,

    pub query_param: String,

    /// CSS selector matching result links on the search page
    pub result_selector: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
                .to_string(),
            accept_invalid_certs: true,
            search_url: "https://html.duckduckgo.com/html/".to_string(),
            query_param: "q".to_string(),
            result_selector: "a.result__a".to_string(),
        }
    }
}

/// Root config structure for .seoscoperc.json
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Length of every ranked keyword list. Default: 5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,

    /// Minimum SEO score (exit 1 if below)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,

    #[serde(default)]
    pub competitors: CompetitorSettings,

    #[serde(default)]
    pub stop_words: StopWordSettings,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisor: Option<AdvisorSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings: Option<RatingThresholds>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_min_score: Option<f64>, cli_top_k: Option<usize>) -> Self {
        if cli_min_score.is_some() {
            self.min_score = cli_min_score;
        }
        if cli_top_k.is_some() {
            self.top_k = cli_top_k;
        }
        self
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.extends.is_none() {
            self.extends = base.extends;
        }
        if self.top_k.is_none() {
            self.top_k = base.top_k;
        }
        if self.min_score.is_none() {
            self.min_score = base.min_score;
        }
        if self.competitors.slots.is_none() {
            self.competitors.slots = base.competitors.slots;
        }

        // Extra stop words accumulate along the chain
        let mut all_extra = base.stop_words.extra;
        all_extra.append(&mut self.stop_words.extra);
        self.stop_words.extra = all_extra;
        if self.stop_words.replace_defaults.is_none() {
            self.stop_words.replace_defaults = base.stop_words.replace_defaults;
        }

        // Sections are replaced whole
        if self.http.is_none() {
            self.http = base.http;
        }
        if self.advisor.is_none() {
            self.advisor = base.advisor;
        }
        if self.ratings.is_none() {
            self.ratings = base.ratings;
        }
    }

    pub fn top_k(&self) -> usize {
        self.top_k.unwrap_or(DEFAULT_TOP_K)
    }

    /// Configured slots, or the three default competitor slots
    pub fn slots(&self) -> Vec<String> {
        match &self.competitors.slots {
            Some(slots) => slots.clone(),
            None => DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Tokenizer with the configured stop-word list
    pub fn tokenizer(&self) -> Tokenizer {
        let mut stop_words = if self.stop_words.replace_defaults.unwrap_or(false) {
            StopWords::empty()
        } else {
            StopWords::english()
        };
        stop_words.extend(&self.stop_words.extra);
        Tokenizer::new(stop_words)
    }

    pub fn http(&self) -> HttpSettings {
        self.http.clone().unwrap_or_default()
    }

    pub fn advisor(&self) -> AdvisorSettings {
        self.advisor.unwrap_or_default()
    }

    pub fn ratings(&self) -> RatingThresholds {
        self.ratings.unwrap_or_default()
    }

    /// Config written by `seoscope init`, with every section filled in
    pub fn starter(min_score: Option<f64>) -> Self {
        Self {
            extends: None,
            top_k: Some(DEFAULT_TOP_K),
            min_score,
            competitors: CompetitorSettings {
                slots: Some(DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect()),
            },
            stop_words: StopWordSettings {
                extra: Vec::new(),
                replace_defaults: Some(false),
            },
            http: Some(HttpSettings::default()),
            advisor: Some(AdvisorSettings::default()),
            ratings: Some(RatingThresholds::default()),
        }
    }
}
