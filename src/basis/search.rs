//! Brute-force factorization of intervals over a generator basis.
//!
//! The search is exhaustive by construction: every multiset of up to
//! `max_terms` generators (padded with the identity to exactly
//! `max_terms`) is evaluated, and the numerically closest product wins.
//! Ties go to the multiset enumerated first, and the enumeration is
//! lexicographic over candidate indices. Callers depend on that order,
//! so no pruning or heuristic may replace it.

use num_integer::binomial;

use crate::basis::{GeneratorTable, SearchErr, ToneTableEntry};
use crate::util::combinatorics::CombinationsWithReplacement;
use crate::value::ExactValue;

/// The result of factoring an interval over a generator basis.
#[derive(Clone, Debug, PartialEq)]
pub struct Factorization {
    /// The surviving generator values after inverse-pair cancellation.
    pub factors: Vec<ExactValue>,
    /// The canonical symbolic form: surviving labels, sorted.
    pub labels: Vec<String>,
    /// The exact product of the surviving generators.
    pub value: ExactValue,
}

/// Find the product of at most `max_terms` generators from `table` that
/// comes numerically closest to `interval`.
///
/// The winning multiset is simplified before it is returned: identity
/// elements are dropped, and every `X`/`1/X` label pair cancels down to
/// the net surplus on the larger side. The returned
/// [value][Factorization::value] is the exact product of the surviving
/// generators (so it reflects the simplification, not the raw multiset).
pub fn find_factors(
    interval: &ExactValue,
    table: &GeneratorTable,
    max_terms: usize,
) -> Result<Factorization, SearchErr> {
    if max_terms == 0 {
        return Err(SearchErr::ZeroMaxTerms);
    }

    // Candidates are the table entries plus the identity, in table order.
    // The identity padding makes every multiset of size <= max_terms
    // reachable as a fixed-length combination.
    let mut candidates: Vec<&ExactValue> = table.entries().iter().map(|g| &g.value).collect();
    let identity = ExactValue::one();
    candidates.push(&identity);
    let identity_index = candidates.len() - 1;

    log::debug!(
        "find_factors: {} combinations of {} candidates, {} terms",
        binomial(candidates.len() as u64 + max_terms as u64 - 1, max_terms as u64),
        candidates.len(),
        max_terms
    );

    let target = interval.eval();
    let mut best_distance = f64::INFINITY;
    let mut best_combination: Vec<usize> = Vec::new();
    for combination in CombinationsWithReplacement::new(candidates.len(), max_terms) {
        // The product is computed exactly and only then evaluated, so an
        // exact match has a true zero distance and ties between equal
        // products break on enumeration order instead of float noise.
        let mut product = ExactValue::one();
        for &i in &combination {
            product = &product * candidates[i];
        }
        let distance = (product.eval() - target).abs();
        if distance < best_distance {
            best_distance = distance;
            best_combination = combination;
        }
    }

    let mut labels: Vec<&str> = best_combination
        .iter()
        .filter(|&&i| i != identity_index)
        .map(|&i| table.entries()[i].label.as_str())
        .collect();
    labels.sort_unstable();

    Ok(simplified(&labels, table))
}

/// Cancel `X`/`1/X` pairs and rebuild the canonical sorted form.
fn simplified(labels: &[&str], table: &GeneratorTable) -> Factorization {
    let count = |label: &str| labels.iter().filter(|&&l| l == label).count();

    let mut surviving: Vec<&str> = Vec::new();
    for entry in table.entries() {
        let label = entry.label.as_str();
        let net = match label.strip_prefix("1/") {
            Some(base) => count(label).saturating_sub(count(base)),
            None {} => {
                let inverse = format!("1/{}", label);
                count(label).saturating_sub(count(inverse.as_str()))
            }
        };
        for _ in 0..net {
            surviving.push(label);
        }
    }
    surviving.sort_unstable();

    let factors: Vec<ExactValue> = surviving
        .iter()
        .filter_map(|label| table.get(label).cloned())
        .collect();
    let value = factors
        .iter()
        .fold(ExactValue::one(), |acc, factor| &acc * factor);

    Factorization {
        factors,
        labels: surviving.into_iter().map(str::to_owned).collect(),
        value,
    }
}

/// Approximate every degree of `scale` over a generator basis.
///
/// In search mode (no tone table) each degree goes through `factor_fn`
/// (typically a closure over [find_factors] and a table) with
/// `max_terms`. With a tone table, the entry with the smallest relative
/// error `|1 - entry/degree|` is chosen instead (no search happens), and
/// ties go to the earlier entry.
///
/// Returns the reconstructed scale and the parallel list of symbolic
/// factorizations (tone-table factor lists in lookup mode).
pub fn create_scale_from_scale<F>(
    scale: &[ExactValue],
    factor_fn: F,
    max_terms: usize,
    tone_table: Option<&[ToneTableEntry]>,
) -> Result<(Vec<ExactValue>, Vec<Vec<String>>), SearchErr>
where
    F: Fn(&ExactValue, usize) -> Result<Factorization, SearchErr>,
{
    if let Some(entries) = tone_table {
        if entries.is_empty() {
            return Err(SearchErr::EmptyToneTable);
        }
    }

    let mut output = Vec::with_capacity(scale.len());
    let mut steps = Vec::with_capacity(scale.len());
    for degree in scale {
        match tone_table {
            Some(entries) => {
                let target = degree.eval();
                let mut best_distance = f64::INFINITY;
                let mut best: &ToneTableEntry = &entries[0];
                for entry in entries {
                    let distance = (1.0 - entry.value.eval() / target).abs();
                    if distance < best_distance {
                        best_distance = distance;
                        best = entry;
                    }
                }
                output.push(best.value.clone());
                steps.push(best.factors.clone());
            }
            None {} => {
                let factorization = factor_fn(degree, max_terms)?;
                output.push(factorization.value);
                steps.push(factorization.labels);
            }
        }
    }
    Ok((output, steps))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::basis::Generator;
    use crate::constants::{five_limit_reciprocal_table, five_limit_table};
    use crate::scale::create_diatonic_scale;
    use crate::value::ExactValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_max_terms_fails_fast() {
        let table = five_limit_table();
        assert_eq!(
            find_factors(&ExactValue::rational(3, 2), &table, 0),
            Err(SearchErr::ZeroMaxTerms)
        );
    }

    #[test]
    fn test_five_limit_factoring() {
        let table = five_limit_table();
        let factors = find_factors(&ExactValue::rational(16, 15), &table, 8).unwrap();
        assert_eq!(factors.labels, vec!["s"]);
        assert_eq!(factors.value, ExactValue::rational(16, 15));

        let factors = find_factors(&ExactValue::rational(10, 9), &table, 8).unwrap();
        assert_eq!(factors.labels, vec!["t"]);

        let factors = find_factors(&ExactValue::rational(9, 8), &table, 8).unwrap();
        assert_eq!(factors.labels, vec!["T"]);

        // 16/15 * 10/9 * 9/8 = 4/3 factors into exactly those three.
        let fourth = ExactValue::rational(4, 3);
        let factors = find_factors(&fourth, &table, 8).unwrap();
        assert_eq!(factors.labels, vec!["T", "s", "t"]);
        assert_eq!(factors.value, fourth);
    }

    #[test]
    fn test_factoring_with_reciprocals() {
        let table = five_limit_reciprocal_table();
        let interval = &ExactValue::rational(16, 15) / &ExactValue::rational(9, 8);
        let factors = find_factors(&interval, &table, 8).unwrap();
        for label in &factors.labels {
            assert!(label == "1/T" || label == "s", "unexpected label {}", label);
        }
        assert_eq!(factors.value, interval);
    }

    #[test]
    fn test_simplification_cancels_inverse_pairs() {
        let table = five_limit_reciprocal_table();
        let factorization = simplified(&["T", "1/T", "s", "s", "1/s"], &table);
        assert_eq!(factorization.labels, vec!["s"]);
        assert_eq!(factorization.value, ExactValue::rational(16, 15));

        let nothing = simplified(&["T", "1/T"], &table);
        assert_eq!(nothing.labels, Vec::<String>::new());
        assert_eq!(nothing.value, ExactValue::one());
    }

    #[test]
    fn test_recreate_ptolemaic_scale() {
        let table = five_limit_table();
        let scale =
            create_diatonic_scale(&table, &["T", "t", "s", "T", "t", "T", "s"]).unwrap();
        let (derived, _steps) = create_scale_from_scale(
            &scale,
            |degree, terms| find_factors(degree, &table, terms),
            8,
            None {},
        )
        .unwrap();
        assert_eq!(derived, scale);
    }

    #[test]
    fn test_tone_table_lookup() {
        // The '5' entry deliberately carries the value 4, so the lookup
        // has to pick it by relative error, not by name.
        let tone_table = vec![
            ToneTableEntry {
                name: "1".into(),
                factors: vec![],
                value: ExactValue::one(),
            },
            ToneTableEntry {
                name: "2".into(),
                factors: vec!["2".into()],
                value: ExactValue::integer(2),
            },
            ToneTableEntry {
                name: "3".into(),
                factors: vec!["3".into()],
                value: ExactValue::integer(3),
            },
            ToneTableEntry {
                name: "5".into(),
                factors: vec!["5".into()],
                value: ExactValue::integer(4),
            },
            ToneTableEntry {
                name: "X".into(),
                factors: vec!["X".into()],
                value: ExactValue::integer(15),
            },
        ];
        let scale: Vec<ExactValue> = [1, 2, 3, 5, 15]
            .iter()
            .map(|&n| ExactValue::integer(n))
            .collect();
        let table = GeneratorTable::new(vec![Generator::new("2", ExactValue::integer(2))]).unwrap();
        let (_, steps) = create_scale_from_scale(
            &scale,
            |degree, terms| find_factors(degree, &table, terms),
            8,
            Some(&tone_table),
        )
        .unwrap();
        assert_eq!(
            steps,
            vec![
                Vec::<String>::new(),
                vec!["2".to_owned()],
                vec!["3".to_owned()],
                vec!["5".to_owned()],
                vec!["X".to_owned()],
            ]
        );
    }

    #[test]
    fn test_empty_tone_table_fails() {
        let table = five_limit_table();
        let scale = vec![ExactValue::one()];
        let result = create_scale_from_scale(
            &scale,
            |degree, terms| find_factors(degree, &table, terms),
            8,
            Some(&[]),
        );
        assert_eq!(result.unwrap_err(), SearchErr::EmptyToneTable);
    }
}
