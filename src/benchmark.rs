//! Comparison of a footprint against fixed reference values.

use serde::Serialize;

/// Monthly footprint of the average user, in kg CO₂e.
pub const AVERAGE_FOOTPRINT_KG: f64 = 400.0;

/// A named reference footprint, in kg CO₂e per month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Benchmark {
    pub label: &'static str,
    pub value: f64,
    pub glyph: &'static str,
}

/// The fixed benchmark list, in display order.
pub const BENCHMARKS: [Benchmark; 4] = [
    Benchmark {
        label: "Global Average",
        value: 450.0,
        glyph: "🌍",
    },
    Benchmark {
        label: "Country Average",
        value: 320.0,
        glyph: "🇮🇳",
    },
    Benchmark {
        label: "Eco-Conscious Users",
        value: 250.0,
        glyph: "🌱",
    },
    Benchmark {
        label: "Carbon Neutral Goal",
        value: 150.0,
        glyph: "🎯",
    },
];

/// How a footprint compares to one benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub label: &'static str,
    pub glyph: &'static str,
    pub benchmark_value: f64,
    /// True iff the footprint is strictly below the benchmark.
    pub is_better: bool,
    pub absolute_difference: f64,
    /// Footprint as a percentage of the benchmark (0 for a non-positive benchmark).
    pub percentage_of_benchmark: f64,
}

/// Compare `total` against each benchmark, preserving benchmark order.
pub fn compare(total: f64, benchmarks: &[Benchmark]) -> Vec<ComparisonEntry> {
    benchmarks
        .iter()
        .map(|benchmark| ComparisonEntry {
            label: benchmark.label,
            glyph: benchmark.glyph,
            benchmark_value: benchmark.value,
            is_better: total < benchmark.value,
            absolute_difference: (total - benchmark.value).abs(),
            percentage_of_benchmark: if benchmark.value > 0.0 {
                total / benchmark.value * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Compare against [`BENCHMARKS`].
pub fn compare_to_benchmarks(total: f64) -> Vec<ComparisonEntry> {
    compare(total, &BENCHMARKS)
}

/// Headline comparison against the average user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryComparison {
    pub average: f64,
    /// Signed difference from the average, in percent of the average.
    pub percentage_difference: f64,
    pub below_average: bool,
    /// Fill level of a gauge that is full at 1.5× the average, capped at 100.
    pub progress_percent: f64,
}

/// Summarize `total` against [`AVERAGE_FOOTPRINT_KG`].
pub fn summarize(total: f64) -> SummaryComparison {
    summarize_against(total, AVERAGE_FOOTPRINT_KG)
}

/// Summarize `total` against an arbitrary positive average.
pub fn summarize_against(total: f64, average: f64) -> SummaryComparison {
    let percentage_difference = (total - average) / average * 100.0;

    SummaryComparison {
        average,
        percentage_difference,
        below_average: percentage_difference < 0.0,
        progress_percent: (total / (average * 1.5) * 100.0).min(100.0),
    }
}

/// Coarse rating of a monthly footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintRating {
    /// Below 300 kg.
    BelowAverage,
    /// 300 kg up to (not including) 500 kg.
    Moderate,
    /// 500 kg and above.
    AboveAverage,
}

impl FootprintRating {
    pub fn from_total(total: f64) -> Self {
        if total < 300.0 {
            FootprintRating::BelowAverage
        } else if total < 500.0 {
            FootprintRating::Moderate
        } else {
            FootprintRating::AboveAverage
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FootprintRating::BelowAverage => {
                "Great job! You're below average. Keep up the sustainable lifestyle!"
            }
            FootprintRating::Moderate => {
                "You're doing okay! There's room for improvement to reduce your footprint."
            }
            FootprintRating::AboveAverage => {
                "Your footprint is above average. Consider making some eco-friendly changes!"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_preserves_order() {
        let entries = compare_to_benchmarks(300.0);

        let labels: Vec<_> = entries.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![
                "Global Average",
                "Country Average",
                "Eco-Conscious Users",
                "Carbon Neutral Goal"
            ]
        );
    }

    #[test]
    fn test_compare_is_better_strictly_below() {
        let entries = compare_to_benchmarks(320.0);

        assert!(entries[0].is_better); // 320 < 450
        assert!(!entries[1].is_better); // equal is not better
        assert!(!entries[2].is_better);
        assert!(!entries[3].is_better);
    }

    #[test]
    fn test_compare_differences() {
        let entries = compare_to_benchmarks(468.25);

        for entry in &entries {
            assert!(
                (entry.absolute_difference - (468.25 - entry.benchmark_value).abs()).abs() < 1e-9
            );
        }
        assert!((entries[0].absolute_difference - 18.25).abs() < 1e-9);
        assert!((entries[3].percentage_of_benchmark - 468.25 / 150.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_non_positive_benchmark() {
        let benchmarks = [Benchmark {
            label: "Zero",
            value: 0.0,
            glyph: "0",
        }];
        let entries = compare(10.0, &benchmarks);

        assert_eq!(entries[0].percentage_of_benchmark, 0.0);
        assert!(!entries[0].is_better);
    }

    #[test]
    fn test_summary_below_average() {
        let summary = summarize(300.0);

        assert!(summary.below_average);
        assert!((summary.percentage_difference + 25.0).abs() < 1e-9);
        assert!((summary.progress_percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_progress_is_capped() {
        let summary = summarize(900.0);

        assert!(!summary.below_average);
        assert_eq!(summary.progress_percent, 100.0);
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(FootprintRating::from_total(299.9), FootprintRating::BelowAverage);
        assert_eq!(FootprintRating::from_total(300.0), FootprintRating::Moderate);
        assert_eq!(FootprintRating::from_total(499.0), FootprintRating::Moderate);
        assert_eq!(FootprintRating::from_total(500.0), FootprintRating::AboveAverage);
    }
}
