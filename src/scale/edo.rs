use crate::value::{exponent::Exponent, ExactValue, Rational};

use super::Scale;

/// An equal division of the octave: the `number_tones + 1` successive
/// powers of `octave^(1/number_tones)`, bracketed by unison and octave.
/// No normalization is needed, since every power already lies in
/// `[1, octave]`.
pub fn create_edo_scale(number_tones: usize, octave: i64) -> Scale {
    let division = ExactValue::power(
        octave,
        Exponent::rational(Rational::new(1, number_tones as i64)),
    );
    (0..=number_tones)
        .map(|index| division.pow(Rational::from_integer(index as i64)))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_edo_2() {
        let scale = create_edo_scale(2, 2);
        assert_eq!(
            scale,
            vec![
                ExactValue::one(),
                ExactValue::power(2, Exponent::rational(Rational::new(1, 2))),
                ExactValue::integer(2),
            ]
        );
    }

    #[test]
    fn test_edo_12_length_and_ends() {
        let scale = create_edo_scale(12, 2);
        assert_eq!(scale.len(), 13);
        assert_eq!(scale[0], ExactValue::one());
        assert_eq!(
            scale[1],
            ExactValue::power(2, Exponent::rational(Rational::new(1, 12)))
        );
        assert_eq!(
            scale[7],
            ExactValue::power(2, Exponent::rational(Rational::new(7, 12)))
        );
        assert_eq!(scale[12], ExactValue::integer(2));
    }

    #[test]
    fn test_non_two_octave() {
        let scale = create_edo_scale(2, 3);
        assert_eq!(
            scale,
            vec![
                ExactValue::one(),
                ExactValue::power(3, Exponent::rational(Rational::new(1, 2))),
                ExactValue::integer(3),
            ]
        );
    }
}
