//! SEO score and rating bands

use crate::Rating;
use serde::{Deserialize, Serialize};

/// Readability value at which the readability term of the score vanishes
pub const READABILITY_OFFSET: f64 = 206.0;

/// Blend keyword density and readability into a single score.
///
/// `(density + (206 - readability) / 10) / 2`. The readability term is
/// inverted: harder text raises the score. The result is not clamped.
pub fn seo_score(density: f64, readability: f64) -> f64 {
    (density + (READABILITY_OFFSET - readability) / 10.0) / 2.0
}

/// Thresholds used to rate the headline metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RatingThresholds {
    /// Minimum word count rated Optimal
    pub word_count_optimal: usize,
    /// Minimum word count rated Good
    pub word_count_good: usize,
    pub readability_optimal: f64,
    pub readability_good: f64,
    /// Inclusive density range rated Optimal
    pub density_optimal_min: f64,
    pub density_optimal_max: f64,
    /// Lower bound of the Good density band (upper bound is `density_optimal_min`)
    pub density_good_min: f64,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            word_count_optimal: 300,
            word_count_good: 200,
            readability_optimal: 70.0,
            readability_good: 50.0,
            density_optimal_min: 0.03,
            density_optimal_max: 0.04,
            density_good_min: 0.02,
        }
    }
}

impl RatingThresholds {
    pub fn rate_word_count(&self, words: usize) -> Rating {
        if words >= self.word_count_optimal {
            Rating::Optimal
        } else if words >= self.word_count_good {
            Rating::Good
        } else {
            Rating::Low
        }
    }

    pub fn rate_readability(&self, score: f64) -> Rating {
        if score >= self.readability_optimal {
            Rating::Optimal
        } else if score >= self.readability_good {
            Rating::Good
        } else {
            Rating::Low
        }
    }

    /// Density above the Optimal band is rated Low (keyword stuffing)
    pub fn rate_density(&self, density: f64) -> Rating {
        if (self.density_optimal_min..=self.density_optimal_max).contains(&density) {
            Rating::Optimal
        } else if (self.density_good_min..self.density_optimal_min).contains(&density) {
            Rating::Good
        } else {
            Rating::Low
        }
    }
}

/// Human-readable wording for ratings
pub struct ScoreCalculator;

impl ScoreCalculator {
    pub fn rating_description(rating: Rating) -> &'static str {
        match rating {
            Rating::Optimal => "Optimal - within the recommended range",
            Rating::Good => "Good - close to the recommended range",
            Rating::Low => "Low - outside the recommended range",
        }
    }
}
