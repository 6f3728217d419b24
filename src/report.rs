//! Assembly of a presentation-ready footprint report.
//!
//! This is the presentation boundary: the calculator, comparator and
//! recommendation engine all work on unrounded figures, and values are
//! rounded only here, when the report is built.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::benchmark::{
    BENCHMARKS, ComparisonEntry, FootprintRating, SummaryComparison, compare, summarize,
};
use crate::calculator::compute;
use crate::factors::EmissionFactorTable;
use crate::model::{EmissionCategory, InputProfile};
use crate::recommendation::{RULES, Recommendations, recommend};

/// Attached to every report, since the lifestyle term has no category.
pub const UNCATEGORIZED_NOTE: &str =
    "Total includes clothing and delivery emissions and may exceed the sum of displayed categories.";

/// One displayed category of the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: EmissionCategory,
    pub label: &'static str,
    /// kg CO₂e, rounded to a whole number.
    pub kg: i64,
    /// Share of the displayed categories, in percent (one decimal).
    pub percentage: f64,
}

/// Everything a caller needs to present one calculation.
#[derive(Debug, Clone, Serialize)]
pub struct FootprintReport {
    pub generated_at: DateTime<Utc>,
    /// Monthly footprint in kg CO₂e, rounded to a whole number.
    pub total_kg: i64,
    pub breakdown: Vec<CategoryShare>,
    /// Lifestyle emissions folded into the total but not into any category.
    pub uncategorized_kg: i64,
    pub note: &'static str,
    pub dominant_category: EmissionCategory,
    pub summary: SummaryComparison,
    pub rating: FootprintRating,
    pub rating_message: &'static str,
    pub comparisons: Vec<ComparisonEntry>,
    pub recommendations: Recommendations,
}

/// Build a report for `profile`.
///
/// # Arguments
///
/// * `profile` - Survey answers
/// * `table` - Emission factors to apply
/// * `now` - Timestamp recorded in the report
pub fn build_report(
    profile: &InputProfile,
    table: &EmissionFactorTable,
    now: DateTime<Utc>,
) -> FootprintReport {
    let result = compute(profile, table);
    let rating = FootprintRating::from_total(result.total);

    let breakdown = result
        .breakdown
        .shares()
        .into_iter()
        .map(|(category, percentage)| CategoryShare {
            category,
            label: category.label(),
            kg: whole(result.breakdown.get(category)),
            percentage: round_to(percentage, 1),
        })
        .collect();

    let summary = summarize(result.total);
    let comparisons = compare(result.total, &BENCHMARKS)
        .into_iter()
        .map(|entry| ComparisonEntry {
            absolute_difference: round_to(entry.absolute_difference, 0),
            percentage_of_benchmark: round_to(entry.percentage_of_benchmark, 1),
            ..entry
        })
        .collect();

    FootprintReport {
        generated_at: now,
        total_kg: whole(result.total),
        breakdown,
        uncategorized_kg: whole(result.uncategorized),
        note: UNCATEGORIZED_NOTE,
        dominant_category: result.breakdown.dominant(),
        summary: SummaryComparison {
            percentage_difference: round_to(summary.percentage_difference, 1),
            progress_percent: round_to(summary.progress_percent, 1),
            ..summary
        },
        rating,
        rating_message: rating.message(),
        comparisons,
        recommendations: recommend(&result, profile, &RULES),
    }
}

/// Round to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

fn whole(value: f64) -> i64 {
    value.round() as i64
}
