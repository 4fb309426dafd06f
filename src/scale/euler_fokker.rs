use crate::util::combinatorics::Combinations;
use crate::value::{normalize_interval, ExactValue};

use super::Scale;

/// A scale in the Euler–Fokker genera.
///
/// `intervals` are the construction factors (usually primes) and
/// `multiplicities` how many of each to use. The expanded factor multiset
/// is reduced over its non-empty subsets by multiplication, each product
/// optionally folded into the octave, and the result bracketed by unison
/// and octave.
///
/// The expansion makes multiplicities and repeated factors equivalent:
/// `([3, 5], [2, 2])` produces exactly the same scale as
/// `([3, 3, 5, 5], [1, 1, 1, 1])`.
pub fn create_euler_fokker_scale(
    intervals: &[i64],
    multiplicities: &[usize],
    octave: i64,
    normalize: bool,
) -> Scale {
    assert_eq!(
        intervals.len(),
        multiplicities.len(),
        "one multiplicity per interval"
    );

    let mut expanded: Vec<i64> = Vec::new();
    for (interval, &multiplicity) in intervals.iter().zip(multiplicities) {
        for _ in 0..multiplicity {
            expanded.push(*interval);
        }
    }

    let mut output = vec![ExactValue::one()];
    for subset_size in 1..=expanded.len() {
        for subset in Combinations::new(expanded.len(), subset_size) {
            let product: i64 = subset.iter().map(|&i| expanded[i]).product();
            let degree = ExactValue::integer(product);
            output.push(if normalize {
                normalize_interval(&degree, octave)
            } else {
                degree
            });
        }
    }
    output.push(ExactValue::integer(octave));
    output.sort();
    output.dedup();
    output
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_genus_3_5() {
        let scale = create_euler_fokker_scale(&[3, 5], &[1, 1], 2, true);
        assert_eq!(
            scale,
            vec![
                ExactValue::one(),
                ExactValue::rational(5, 4),
                ExactValue::rational(3, 2),
                ExactValue::rational(15, 8),
                ExactValue::integer(2),
            ]
        );
    }

    #[test]
    fn test_genus_3_5_7() {
        let scale = create_euler_fokker_scale(&[3, 5, 7], &[1, 1, 1], 2, true);
        assert_eq!(
            scale,
            vec![
                ExactValue::one(),
                ExactValue::rational(35, 32),
                ExactValue::rational(5, 4),
                ExactValue::rational(21, 16),
                ExactValue::rational(3, 2),
                ExactValue::rational(105, 64),
                ExactValue::rational(7, 4),
                ExactValue::rational(15, 8),
                ExactValue::integer(2),
            ]
        );
    }

    #[test]
    fn test_multiplicity_expansion_equivalence() {
        assert_eq!(
            create_euler_fokker_scale(&[3, 5], &[2, 2], 2, true),
            create_euler_fokker_scale(&[3, 3, 5, 5], &[1, 1, 1, 1], 2, true),
        );
    }

    #[test]
    fn test_non_two_octave() {
        let scale = create_euler_fokker_scale(&[3, 5], &[1, 1], 3, true);
        assert_eq!(scale[0], ExactValue::one());
        assert_eq!(scale[1], ExactValue::rational(5, 3));
        assert_eq!(scale[2], ExactValue::integer(3));

        let unnormalized = create_euler_fokker_scale(&[3, 5], &[1, 1], 3, false);
        assert_eq!(
            unnormalized,
            vec![
                ExactValue::one(),
                ExactValue::integer(3),
                ExactValue::integer(5),
                ExactValue::integer(15),
            ]
        );
    }

    #[test]
    fn test_zero_multiplicities() {
        let scale = create_euler_fokker_scale(&[3, 5], &[0, 0], 2, true);
        assert_eq!(scale, vec![ExactValue::one(), ExactValue::integer(2)]);
    }
}
