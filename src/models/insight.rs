//! Derived insight types
//!
//! The insight engine produces `Insights` (categorical labels plus
//! summary statistics); the pipeline combines them with the generated
//! description into the final `InsightRecord` returned to the client
//! and handed to the store.

use serde::{Deserialize, Serialize};

/// Confidence label derived from answers 1 and 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Certainty {
    Certain,
    Unsure,
}

/// Pet preference label derived from answers 9 and 10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatDog {
    Cats,
    Dogs,
}

/// Fur/tail length label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairLength {
    Long,
    Short,
}

impl CatDog {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatDog::Cats => "cats",
            CatDog::Dogs => "dogs",
        }
    }
}

impl Certainty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Certainty::Certain => "certain",
            Certainty::Unsure => "unsure",
        }
    }
}

impl HairLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            HairLength::Long => "long",
            HairLength::Short => "short",
        }
    }
}

/// Summary statistics over the 10 answer values, rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// Labels and statistics derived by the insight engine (no description yet)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insights {
    pub overall_analysis: Certainty,
    pub cat_dog: CatDog,
    pub fur_value: HairLength,
    pub tail_value: HairLength,
    pub statistics: SummaryStatistics,
}

/// Full insight record for one submission, immutable once built
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightRecord {
    pub overall_analysis: Certainty,
    pub cat_dog: CatDog,
    pub fur_value: HairLength,
    pub tail_value: HairLength,
    pub description: String,
    pub statistics: SummaryStatistics,
}

impl InsightRecord {
    pub fn new(insights: Insights, description: String) -> Self {
        Self {
            overall_analysis: insights.overall_analysis,
            cat_dog: insights.cat_dog,
            fur_value: insights.fur_value,
            tail_value: insights.tail_value,
            description,
            statistics: insights.statistics,
        }
    }
}
