//! Consonance metrics over scales.
//!
//! Every metric is a pure function from a scale to a named numeric
//! value; by convention, smaller is more consonant. [all_metrics] merges
//! them all into one map, which is what mode enumeration attaches to its
//! records by default.
//!
//! The p/q-based metrics are only meaningful for scales whose degrees
//! reduce to rationals; degrees that don't are skipped rather than
//! rejected, so the metrics stay total over mixed scales.

use std::collections::{BTreeMap, BTreeSet};

use crate::value::{normalize_interval, ExactValue};

pub mod heatmap;

pub use heatmap::{consonance_matrix, metric_denom};

/// Named metric values, as attached to a
/// [ModeRecord][crate::mode::ModeRecord].
pub type MetricMap = BTreeMap<String, f64>;

fn single(name: &str, value: f64) -> MetricMap {
    let mut map = MetricMap::new();
    map.insert(name.to_owned(), value);
    map
}

/// The distinct intervals of a scale, including inversions.
///
/// The scale is conceptually doubled by a copy transposed up one formal
/// octave (taken from its last degree); every ordered pair contributes
/// the ratio of the later over the earlier degree. Ratios reaching the
/// octave and the exact unison are dropped. The result is deduplicated by
/// exact equality and returned in ascending order.
pub fn distinct_intervals(scale: &[ExactValue]) -> Vec<ExactValue> {
    if scale.is_empty() {
        return Vec::new();
    }
    let octave = scale[scale.len() - 1].clone();

    let mut doubled: Vec<ExactValue> = scale.to_vec();
    doubled.extend(scale.iter().map(|degree| degree * &octave));

    let mut intervals = BTreeSet::new();
    for i in 0..doubled.len() {
        for j in i + 1..doubled.len() {
            let interval = &doubled[j] / &doubled[i];
            if interval < octave && !interval.is_one() {
                intervals.insert(interval);
            }
        }
    }
    intervals.into_iter().collect()
}

/// Sum of numerator + denominator over all rational scale degrees.
/// Tonic-focused: it looks at the degrees themselves, not the intervals
/// between them.
pub fn sum_p_q(scale: &[ExactValue]) -> MetricMap {
    let total: i64 = scale
        .iter()
        .filter_map(ExactValue::as_ratio)
        .map(|ratio| ratio.numer() + ratio.denom())
        .sum();
    single("sum_p_q", total as f64)
}

/// The number of distinct intervals within the scale, inversions
/// included.
pub fn sum_distinct_intervals(scale: &[ExactValue]) -> MetricMap {
    single(
        "sum_distinct_intervals",
        distinct_intervals(scale).len() as f64,
    )
}

/// For every degree p/q, the term q/(p−q), summed. Degrees equal to the
/// unison are skipped (their term is undefined, not zero).
pub fn metric_3(scale: &[ExactValue]) -> MetricMap {
    let total: f64 = scale
        .iter()
        .filter(|degree| !degree.is_one())
        .map(|degree| match degree.as_ratio() {
            Some(ratio) => *ratio.denom() as f64 / (ratio.numer() - ratio.denom()) as f64,
            None {} => 1.0 / (degree.eval() - 1.0),
        })
        .sum();
    single("metric_3", total)
}

/// Like [sum_p_q], but over the distinct-interval set instead of the raw
/// degrees.
pub fn sum_p_q_for_all_intervals(scale: &[ExactValue]) -> MetricMap {
    let total: i64 = distinct_intervals(scale)
        .iter()
        .filter_map(ExactValue::as_ratio)
        .map(|ratio| ratio.numer() + ratio.denom())
        .sum();
    single("sum_p_q_for_all_intervals", total as f64)
}

/// Sum of the denominators of the normalized distinct intervals.
pub fn sum_q_for_all_intervals(scale: &[ExactValue]) -> MetricMap {
    let total: i64 = distinct_intervals(scale)
        .iter()
        .filter_map(|interval| normalize_interval(interval, 2).as_ratio())
        .map(|ratio| *ratio.denom())
        .sum();
    single("sum_q_for_all_intervals", total as f64)
}

/// All built-in metrics merged into one map.
pub fn all_metrics(scale: &[ExactValue]) -> MetricMap {
    let mut map = MetricMap::new();
    for metric in [
        sum_p_q,
        sum_distinct_intervals,
        metric_3,
        sum_p_q_for_all_intervals,
        sum_q_for_all_intervals,
    ] {
        map.extend(metric(scale));
    }
    map
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scale::{create_edo_scale, create_pythagorean_scale, EqualIntervalOptions};
    use crate::value::{exponent::Exponent, Rational};
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn pythag() -> Vec<ExactValue> {
        create_pythagorean_scale(&EqualIntervalOptions::default())
    }

    #[test]
    fn test_distinct_intervals_of_edo2() {
        assert_eq!(
            distinct_intervals(&create_edo_scale(2, 2)),
            vec![ExactValue::power(
                2,
                Exponent::rational(Rational::new(1, 2))
            )]
        );
    }

    #[test]
    fn test_distinct_intervals_of_edo3() {
        let intervals = distinct_intervals(&create_edo_scale(3, 2));
        assert_eq!(
            intervals,
            vec![
                ExactValue::power(2, Exponent::rational(Rational::new(1, 3))),
                ExactValue::power(2, Exponent::rational(Rational::new(2, 3))),
            ]
        );
    }

    #[test]
    fn test_distinct_intervals_exclude_unison_and_octave() {
        for interval in distinct_intervals(&pythag()) {
            assert!(!interval.is_one());
            assert!(interval < ExactValue::integer(2));
        }
    }

    #[test]
    fn test_pythagorean_metrics() {
        let scale = pythag();
        let metrics = all_metrics(&scale);
        assert_relative_eq!(metrics["sum_p_q"], 3138.0);
        assert_relative_eq!(metrics["sum_distinct_intervals"], 22.0);
        assert_relative_eq!(metrics["sum_p_q_for_all_intervals"], 1092732.0);
        assert_relative_eq!(metrics["sum_q_for_all_intervals"], 452817.0);
        assert_relative_eq!(metrics["metric_3"], 49.9049074891784, max_relative = 1e-9);
    }

    #[test]
    fn test_metric_3_skips_unison() {
        // [1, 2] contributes only the octave term 1/(2-1).
        let scale = vec![ExactValue::one(), ExactValue::integer(2)];
        assert_relative_eq!(metric_3(&scale)["metric_3"], 1.0);
    }

    #[test]
    fn test_p_q_metrics_skip_irrational_degrees() {
        let scale = vec![
            ExactValue::one(),
            ExactValue::power(2, Exponent::rational(Rational::new(1, 2))),
            ExactValue::integer(2),
        ];
        // Only 1/1 and 2/1 contribute.
        assert_relative_eq!(sum_p_q(&scale)["sum_p_q"], 5.0);
    }
}
