//! The Lucy tuning family.
//!
//! Lucy tuning builds everything from two steps with transcendental
//! exponents: the long step `L = 2^(1/(2π))` and the short step
//! `s = sqrt(2/L^5)`. Fifths (`L^3·s`) and fourths (`L^2·s`) spiral
//! around the octave without ever closing, which is why the published
//! tables stop at a fixed number of each and name the degrees with
//! accumulating sharps and flats.

use crate::basis::{create_scale_from_scale, find_factors, SearchErr, ToneTableEntry};
use crate::constants::{lucy_table, LUCY_L, LUCY_S};
use crate::value::{normalize_interval, ExactValue, Rational};

use super::{create_diatonic_scale_from_string, Scale, ScaleErr};

/// The Lucy tuning spiral: `scale_size - number_fourths` stacked fifths
/// and `number_fourths` stacked fourths, each normalized into the octave
/// and paired with its idiosyncratic published degree symbol. The default
/// published table uses 44 degrees with 22 fourths.
///
/// Both the fifths and the fourths are propagated upward; the published
/// values match this orientation, not the "opposite directions on the
/// tuning circle" the scale's documentation describes.
pub fn create_lucy_tuning_spiral(
    scale_size: usize,
    number_fourths: usize,
    sort: bool,
    octave: i64,
) -> Vec<(String, ExactValue)> {
    let number_fifths = scale_size.saturating_sub(number_fourths);
    let fifth = &LUCY_L.pow(Rational::from_integer(3)) * &*LUCY_S;
    let fourth = &LUCY_L.pow(Rational::from_integer(2)) * &*LUCY_S;

    let mut output: Vec<(String, ExactValue)> = Vec::with_capacity(scale_size + 1);

    let mut start: i64 = 1;
    let mut running_total: usize = 1;
    for index in 0..number_fifths {
        let symbol = format!("{}{}", "#".repeat(running_total / 7), start);
        let x = fifth.pow(Rational::from_integer(index as i64));
        output.push((symbol, normalize_interval(&x, octave)));
        start = (start + 4) % 7;
        if start == 0 {
            start = 7;
        }
        running_total += 1;
    }

    start = 1;
    running_total = 1;
    for index in 0..number_fourths {
        let symbol = format!("{}{}", "b".repeat((running_total + 4) / 7), start);
        let x = fourth.pow(Rational::from_integer(index as i64));
        output.push((symbol, normalize_interval(&x, octave)));
        start = (start + 3) % 7;
        if start == 0 {
            start = 7;
        }
        if start == 1 {
            start = 8;
        }
        running_total += 1;
    }

    output.push(("8".to_owned(), ExactValue::integer(octave)));
    if sort {
        output.sort_by(|a, b| a.1.cmp(&b.1));
        output.dedup();
    }
    output
}

/// A Lucy mode from a step string over `L` and `s`, e.g. `"LLsLLLs"` for
/// the major mode.
pub fn calculate_lucy_mode(mode: &str) -> Result<Scale, ScaleErr> {
    create_diatonic_scale_from_string(&lucy_table(), mode)
}

/// A 12-tone table for a Lucy mode, with the unison filling the unused
/// chromatic positions (notes outside the mode should not be played).
/// This is mainly useful for building synthesizer tuning tables.
pub fn calculate_lucy_mode_twelve_tone(mode: &str) -> Result<Scale, ScaleErr> {
    let scale = calculate_lucy_mode(mode)?;
    let mut output = vec![ExactValue::one()];
    for (index, step) in mode.chars().enumerate() {
        if step == 'L' {
            output.push(ExactValue::one());
        }
        output.push(scale[index + 1].clone());
    }
    Ok(output)
}

/// Factor every spiral degree over the Lucy generators, producing a tone
/// table that can constrain [create_scale_from_scale] to published
/// degrees.
pub fn create_lucy_tone_table(
    scale_size: usize,
    number_fourths: usize,
    max_terms: usize,
) -> Result<Vec<ToneTableEntry>, SearchErr> {
    let table = lucy_table();
    let spiral = create_lucy_tuning_spiral(scale_size, number_fourths, false, 2);
    log::debug!("factoring {} Lucy spiral degrees", spiral.len());
    spiral
        .into_iter()
        .map(|(name, degree)| {
            let factorization = find_factors(&degree, &table, max_terms)?;
            Ok(ToneTableEntry {
                name,
                factors: factorization.labels,
                value: factorization.value,
            })
        })
        .collect()
}

/// The closest-matching Lucy scale for a target scale: each degree is
/// factored over the Lucy generators (or matched against `tone_table`
/// when one is given).
pub fn create_lucy_scale_from_scale(
    scale: &[ExactValue],
    max_terms: usize,
    tone_table: Option<&[ToneTableEntry]>,
) -> Result<(Scale, Vec<Vec<String>>), SearchErr> {
    let table = lucy_table();
    create_scale_from_scale(
        scale,
        |degree, terms| find_factors(degree, &table, terms),
        max_terms,
        tone_table,
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::value::exponent::Exponent;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lucy_mode_values() {
        // [1, L, L^2, L^2 s, L^3 s] with the exponents collected over
        // base 2.
        let scale = calculate_lucy_mode("LLsL").unwrap();
        let two_pow = |plain, over_pi| ExactValue::power(2, Exponent::new(plain, over_pi));
        assert_eq!(
            scale,
            vec![
                ExactValue::one(),
                two_pow(Rational::new(0, 1), Rational::new(1, 2)),
                two_pow(Rational::new(0, 1), Rational::new(1, 1)),
                two_pow(Rational::new(1, 2), Rational::new(-1, 4)),
                two_pow(Rational::new(1, 2), Rational::new(1, 4)),
            ]
        );
    }

    #[test]
    fn test_major_mode_closes_the_octave() {
        let scale = calculate_lucy_mode("LLsLLLs").unwrap();
        assert_eq!(scale.len(), 8);
        assert_eq!(scale[7], ExactValue::integer(2));
    }

    #[test]
    fn test_twelve_tone_mode_layout() {
        let scale = calculate_lucy_mode_twelve_tone("LLsLLLs").unwrap();
        assert_eq!(scale.len(), 13);
        assert_eq!(scale[0], ExactValue::one());
        // The L positions leave a unison in the skipped chromatic slot.
        assert_eq!(scale[1], ExactValue::one());
        assert_eq!(scale[2], calculate_lucy_mode("L").unwrap()[1]);
        assert_eq!(scale[12], ExactValue::integer(2));
    }

    #[test]
    fn test_spiral_starts_at_unison_and_ends_at_octave() {
        let spiral = create_lucy_tuning_spiral(6, 3, false, 2);
        assert_eq!(spiral.len(), 7);
        assert_eq!(spiral[0], ("1".to_owned(), ExactValue::one()));
        assert_eq!(spiral[3], ("1".to_owned(), ExactValue::one()));
        assert_eq!(spiral[6], ("8".to_owned(), ExactValue::integer(2)));
        // The first stacked fifth is L^3 s, which lies inside the octave.
        let fifth = &LUCY_L.pow(Rational::from_integer(3)) * &*LUCY_S;
        assert_eq!(spiral[1].1, fifth);
        assert_eq!(spiral[1].0, "5");
    }

    #[test]
    fn test_tone_table_factors_spiral_degrees() {
        let tone_table = create_lucy_tone_table(4, 2, 8).unwrap();
        assert_eq!(tone_table.len(), 5);
        // The unison factors into nothing.
        assert_eq!(tone_table[0].name, "1");
        assert_eq!(tone_table[0].factors, Vec::<String>::new());
        assert_eq!(tone_table[0].value, ExactValue::one());
        // The first fifth is recovered exactly as L, L, L, s.
        assert_eq!(tone_table[1].name, "5");
        assert_eq!(
            tone_table[1].factors,
            vec!["L".to_owned(), "L".to_owned(), "L".to_owned(), "s".to_owned()]
        );
        let fifth = &LUCY_L.pow(Rational::from_integer(3)) * &*LUCY_S;
        assert_eq!(tone_table[1].value, fifth);
    }

    #[test]
    fn test_scale_match_recovers_lucy_degrees() {
        let target = calculate_lucy_mode("LLsL").unwrap();
        let (derived, steps) = create_lucy_scale_from_scale(&target, 8, None {}).unwrap();
        assert_eq!(derived, target);
        assert_eq!(steps[1], vec!["L".to_owned()]);
        assert_eq!(steps[0], Vec::<String>::new());
    }
}
