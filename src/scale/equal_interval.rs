//! The shared equal-interval generator.
//!
//! Every scale built from a single repeated generator interval (the
//! Pythagorean scale, quarter-comma meantone, the Lucy spiral) funnels
//! through [create_equal_interval_scale]: stack the generator upward and
//! its inverse downward, normalize each power into the octave, and
//! bracket with the formal octave.

use crate::value::{normalize_interval, ExactValue, Rational};

use super::Scale;

/// Options for [create_equal_interval_scale].
///
/// The defaults produce the conventional 12-degree layout: six inverted
/// generators, normalization into a formal octave of 2, sorted with exact
/// duplicates removed and no epsilon rounding.
#[derive(Clone, Debug)]
pub struct EqualIntervalOptions {
    /// The number of degrees in the scale.
    pub scale_size: usize,
    /// How many of the degrees are built from inverted generators.
    pub number_down_intervals: usize,
    /// If set, round every degree to the nearest multiple of epsilon
    /// (on the evaluated float, deliberately lossy) and deduplicate.
    pub epsilon: Option<Rational>,
    /// Sort the output by degree size.
    pub sort: bool,
    /// The formal octave.
    pub octave: i64,
    /// Remove exact duplicates (only effective together with `sort`).
    pub remove_duplicates: bool,
    /// Fold every generated power into `[1, octave)`.
    pub normalize: bool,
}

impl Default for EqualIntervalOptions {
    fn default() -> Self {
        Self {
            scale_size: 12,
            number_down_intervals: 6,
            epsilon: None {},
            sort: true,
            octave: 2,
            remove_duplicates: true,
            normalize: true,
        }
    }
}

pub fn create_equal_interval_scale(
    generator: &ExactValue,
    options: &EqualIntervalOptions,
) -> Scale {
    let down_intervals = options.number_down_intervals + 1;
    let up_intervals = (options.scale_size + 1).saturating_sub(down_intervals);
    let inverse = generator.recip();

    let mut output: Vec<ExactValue> = Vec::with_capacity(options.scale_size + 2);
    for index in 0..up_intervals {
        let x = generator.pow(Rational::from_integer(index as i64));
        output.push(if options.normalize {
            normalize_interval(&x, options.octave)
        } else {
            x
        });
    }
    for index in 0..down_intervals {
        let x = inverse.pow(Rational::from_integer(index as i64));
        output.push(if options.normalize {
            normalize_interval(&x, options.octave)
        } else {
            x
        });
    }
    output.push(ExactValue::integer(options.octave));

    if let Some(epsilon) = options.epsilon {
        output = quantize(&output, epsilon);
    }
    if options.sort {
        output.sort();
        if options.remove_duplicates {
            output.dedup();
        }
    }
    output
}

/// Round every value to the nearest multiple of epsilon and drop
/// duplicates, keeping the first occurrence in generation order.
fn quantize(values: &[ExactValue], epsilon: Rational) -> Vec<ExactValue> {
    let eps = *epsilon.numer() as f64 / *epsilon.denom() as f64;
    let mut out: Vec<ExactValue> = Vec::with_capacity(values.len());
    for value in values {
        let multiple = (value.eval() / eps).round() as i64;
        let quantized = ExactValue::from_ratio(Rational::from_integer(multiple) * epsilon);
        if !out.contains(&quantized) {
            out.push(quantized);
        }
    }
    out
}
