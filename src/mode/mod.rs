//! Mode enumeration and ranking.
//!
//! A mode is a sub-scale selected by a mask of degree indices that always
//! keeps the unison and the formal octave. [calculate_modes] builds a
//! [ModeRecord] per mask with the consonance metrics attached;
//! [find_best_modes] ranks them.
//!
//! Mask enumeration order is lexicographic, and the ranking sort is
//! stable, so ties between equally consonant modes resolve to the
//! lexicographically earliest mask. That tie-break is observable
//! behavior, not an accident.

use std::{cmp::Ordering, collections::BTreeMap, error::Error, fmt};

use crate::metrics::{all_metrics, MetricMap};
use crate::scale::Scale;
use crate::util::combinatorics::Combinations;
use crate::value::ExactValue;

/// A metric function: scale in, named metric values out.
pub type MetricFn = dyn Fn(&[ExactValue]) -> MetricMap;

/// The default ranking: primary on the interval-set p+q sum, ties on the
/// degree p+q sum, remaining ties on the distinct-interval count.
pub const DEFAULT_SORT_ORDER: [&str; 3] = [
    "sum_p_q_for_all_intervals",
    "sum_p_q",
    "sum_distinct_intervals",
];

/// One mode of a scale: the mask that selects it, the selected degrees,
/// the step pattern, the scale it came from, and its metric values.
#[derive(Clone, Debug)]
pub struct ModeRecord {
    pub mask: Vec<usize>,
    pub scale: Scale,
    pub steps: Vec<i64>,
    pub original_scale: Scale,
    pub metrics: BTreeMap<String, f64>,
}

/// All potential mode masks: the strictly increasing `selected_tones`-
/// element subsets of `0..total_tones` that contain both the unison index
/// 0 and the octave index `total_tones - 1`, in lexicographic order.
pub fn mode_masks(total_tones: usize, selected_tones: usize) -> Vec<Vec<usize>> {
    if total_tones == 0 {
        return Vec::new();
    }
    Combinations::new(total_tones, selected_tones)
        .filter(|mask| mask.contains(&0) && mask.contains(&(total_tones - 1)))
        .collect()
}

/// Project a scale onto a mask, preserving degree order. Mask entries
/// beyond the scale length are ignored.
pub fn mask_to_scale(scale: &[ExactValue], mask: &[usize]) -> Scale {
    scale
        .iter()
        .enumerate()
        .filter(|(index, _)| mask.contains(index))
        .map(|(_, degree)| degree.clone())
        .collect()
}

/// The step pattern of a mask: consecutive index deltas. If the deltas
/// don't already span the scale, a trailing step makes up the shortfall;
/// masks honoring the invariant never need it, but masks that omit the
/// final index keep working.
pub fn mask_to_steps(scale: &[ExactValue], mask: &[usize]) -> Vec<i64> {
    let mut steps: Vec<i64> = mask
        .windows(2)
        .map(|pair| pair[1] as i64 - pair[0] as i64)
        .collect();
    let shortfall = scale.len() as i64 - steps.iter().sum::<i64>() - 1;
    if shortfall != 0 {
        steps.push(shortfall);
    }
    steps
}

/// Build a [ModeRecord] for every `num_tones`-tone mode of `scale`. (The
/// mask has one more entry than `num_tones`, since unison and octave are
/// both always included.) Without a metric function, all built-in metrics
/// are computed.
pub fn calculate_modes(
    scale: &[ExactValue],
    num_tones: usize,
    metric_function: Option<&MetricFn>,
) -> Vec<ModeRecord> {
    let masks = mode_masks(scale.len(), num_tones + 1);
    let mut output = Vec::with_capacity(masks.len());
    for mask in masks {
        let mode_scale = mask_to_scale(scale, &mask);
        let metrics = match metric_function {
            Some(function) => function(&mode_scale),
            None {} => all_metrics(&mode_scale),
        };
        output.push(ModeRecord {
            steps: mask_to_steps(scale, &mask),
            scale: mode_scale,
            mask,
            original_scale: scale.to_vec(),
            metrics,
        });
    }
    output
}

/// Rank all modes of a scale by the metrics named in `sort_order`
/// (ascending, lexicographic: later names only break ties) and keep the
/// best `num_scales` (or all of them).
pub fn find_best_modes(
    scale: &[ExactValue],
    num_tones: usize,
    sort_order: &[&str],
    num_scales: Option<usize>,
    metric_function: Option<&MetricFn>,
) -> Result<Vec<ModeRecord>, ModeErr> {
    let mut records = calculate_modes(scale, num_tones, metric_function);

    for record in &records {
        for key in sort_order {
            if !record.metrics.contains_key(*key) {
                return Err(ModeErr::UnknownMetric((*key).to_owned()));
            }
        }
    }

    records.sort_by(|a, b| {
        for key in sort_order {
            match a.metrics[*key].total_cmp(&b.metrics[*key]) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    });
    if let Some(limit) = num_scales {
        records.truncate(limit);
    }
    Ok(records)
}

#[derive(Debug, PartialEq)]
pub enum ModeErr {
    /// A sort key referred to a metric the metric function didn't
    /// compute.
    UnknownMetric(String),
}

impl fmt::Display for ModeErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeErr::UnknownMetric(name) => {
                write!(f, "no metric named '{}' in the computed metrics", name)
            }
        }
    }
}

impl Error for ModeErr {}
