//! On-page advisory rules
//!
//! Stateless checks over raw markup-bearing text. Recommendations are
//! returned in a fixed order: description length, heading presence, then
//! three general reminders that always apply.

use serde::{Deserialize, Serialize};

pub const DESCRIPTION_TOO_LONG: &str = "Your meta description is too long.";
pub const DESCRIPTION_TOO_SHORT: &str = "Your meta description is too short.";
pub const NO_HEADINGS: &str = "You have no headings. Consider adding some for better SEO.";
pub const URL_STRUCTURE: &str = "Check your URL structure to ensure it is SEO friendly.";
pub const IMAGE_ALT_TEXT: &str = "Ensure your images have appropriate alt tags.";
pub const INTERNAL_LINKING: &str =
    "Check your internal linking structure to ensure a good user experience.";

const HEADING_TAGS: [&str; 6] = ["<h1>", "<h2>", "<h3>", "<h4>", "<h5>", "<h6>"];

/// Description length bounds, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvisorSettings {
    pub description_min: usize,
    pub description_max: usize,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            description_min: 70,
            description_max: 160,
        }
    }
}

/// Recommendations using the default description bounds
pub fn advise(markup: &str) -> Vec<String> {
    advise_with(markup, &AdvisorSettings::default())
}

pub fn advise_with(markup: &str, settings: &AdvisorSettings) -> Vec<String> {
    let mut recs = Vec::new();

    let length = markup.chars().count();
    if length > settings.description_max {
        recs.push(DESCRIPTION_TOO_LONG.to_string());
    } else if length < settings.description_min {
        recs.push(DESCRIPTION_TOO_SHORT.to_string());
    }

    if heading_count(markup) == 0 {
        recs.push(NO_HEADINGS.to_string());
    }

    recs.push(URL_STRUCTURE.to_string());
    recs.push(IMAGE_ALT_TEXT.to_string());
    recs.push(INTERNAL_LINKING.to_string());

    recs
}

/// Occurrences of the literal opening tags `<h1>` through `<h6>`.
///
/// Tags with attributes (`<h2 class="x">`) are not counted.
pub fn heading_count(markup: &str) -> usize {
    HEADING_TAGS
        .iter()
        .map(|tag| markup.matches(tag).count())
        .sum()
}
