//! Insight derivation over a validated submission
//!
//! Pure computation, no failure path: value ranges are guaranteed by
//! the validator. Answer values are taken in submission array order,
//! so `values[0]` is the first entry of `survey_results` as submitted.

use crate::models::{CatDog, Certainty, HairLength, Insights, SummaryStatistics, SurveySubmission};

/// Derive categorical labels and summary statistics for one submission
pub fn derive_insights(submission: &SurveySubmission) -> Insights {
    let values = submission.question_values();
    let statistics = summary_statistics(&values);

    // Label rules are fixed and boundary-sensitive; the OR below is
    // short-circuit with the left operand evaluated first.
    let overall_analysis = if values[0] != 7 || values[3] >= 3 {
        Certainty::Certain
    } else {
        Certainty::Unsure
    };

    let cat_dog = if values[9] > 5 && values[8] <= 5 {
        CatDog::Cats
    } else {
        CatDog::Dogs
    };

    // Compares the rounded mean, strict >.
    let fur_value = if statistics.mean > 5.0 {
        HairLength::Long
    } else {
        HairLength::Short
    };

    let tail_value = if values[6] > 4 {
        HairLength::Long
    } else {
        HairLength::Short
    };

    Insights {
        overall_analysis,
        cat_dog,
        fur_value,
        tail_value,
        statistics,
    }
}

/// Mean, median and sample standard deviation, each rounded to 2 decimals
///
/// Standard deviation uses the n-1 denominator and is defined as 0 for
/// fewer than 2 values.
pub fn summary_statistics(values: &[u8]) -> SummaryStatistics {
    SummaryStatistics {
        mean: round2(mean(values)),
        median: round2(median(values)),
        std_dev: round2(std_dev(values)),
    }
}

fn mean(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: u32 = values.iter().map(|&v| v as u32).sum();
    sum as f64 / values.len() as f64
}

fn median(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}

fn std_dev(values: &[u8]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - m;
            d * d
        })
        .sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
