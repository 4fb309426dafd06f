use crate::value::{normalize_interval, ExactValue};

use super::Scale;

/// A harmonic-series scale: the harmonics `first_harmonic..=last_harmonic`
/// taken as ratios over the first, optionally folded into the octave,
/// sorted, deduplicated and bracketed by unison and octave.
pub fn create_harmonic_scale(
    first_harmonic: i64,
    last_harmonic: i64,
    normalize: bool,
    octave: i64,
) -> Scale {
    debug_assert!(first_harmonic >= 1 && last_harmonic >= first_harmonic);

    let mut output = vec![ExactValue::one()];
    for harmonic in first_harmonic..=last_harmonic {
        let ratio = ExactValue::rational(harmonic, first_harmonic);
        output.push(if normalize {
            normalize_interval(&ratio, octave)
        } else {
            ratio
        });
    }
    output.push(ExactValue::integer(octave));
    output.sort();
    output.dedup();
    output
}
