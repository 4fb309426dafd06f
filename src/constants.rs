//! Named intervals and the stock generator tables.

use std::sync::LazyLock;

use crate::basis::{Generator, GeneratorTable};
use crate::value::{exponent::Exponent, ExactValue, Rational};

pub static PERFECT_FIFTH: LazyLock<ExactValue> = LazyLock::new(|| ExactValue::rational(3, 2));

pub static SYNTONIC_COMMA: LazyLock<ExactValue> = LazyLock::new(|| ExactValue::rational(81, 80));

pub static PYTHAGOREAN_COMMA: LazyLock<ExactValue> =
    LazyLock::new(|| ExactValue::rational(531441, 524288));

/// One quarter of the syntonic comma, `(81/80)^(1/4)`.
pub static QUARTER_COMMA: LazyLock<ExactValue> =
    LazyLock::new(|| SYNTONIC_COMMA.pow(Rational::new(1, 4)));

/// The quarter-comma meantone fifth: a perfect fifth narrowed by a
/// quarter comma, which works out to `5^(1/4)` exactly.
pub static MEANTONE_FIFTH: LazyLock<ExactValue> =
    LazyLock::new(|| &*PERFECT_FIFTH / &*QUARTER_COMMA);

/// The long Lucy step, `2^(1/(2π))`.
pub static LUCY_L: LazyLock<ExactValue> =
    LazyLock::new(|| ExactValue::power(2, Exponent::over_pi(Rational::new(1, 2))));

/// The short Lucy step, `sqrt(2/L^5)`.
pub static LUCY_S: LazyLock<ExactValue> = LazyLock::new(|| {
    (&ExactValue::integer(2) / &LUCY_L.pow(Rational::new(5, 1))).pow(Rational::new(1, 2))
});

static FIVE_LIMIT_TABLE: LazyLock<GeneratorTable> = LazyLock::new(|| {
    GeneratorTable::new(vec![
        Generator::new("s", ExactValue::rational(16, 15)),
        Generator::new("t", ExactValue::rational(10, 9)),
        Generator::new("T", ExactValue::rational(9, 8)),
    ])
    .unwrap()
});

static FIVE_LIMIT_RECIPROCAL_TABLE: LazyLock<GeneratorTable> = LazyLock::new(|| {
    GeneratorTable::with_reciprocals(vec![
        Generator::new("s", ExactValue::rational(16, 15)),
        Generator::new("t", ExactValue::rational(10, 9)),
        Generator::new("T", ExactValue::rational(9, 8)),
    ])
    .unwrap()
});

static EDO12_TABLE: LazyLock<GeneratorTable> = LazyLock::new(|| {
    GeneratorTable::new(vec![
        Generator::new(
            "T",
            ExactValue::power(2, Exponent::rational(Rational::new(2, 12))),
        ),
        Generator::new(
            "s",
            ExactValue::power(2, Exponent::rational(Rational::new(1, 12))),
        ),
    ])
    .unwrap()
});

static LUCY_TABLE: LazyLock<GeneratorTable> = LazyLock::new(|| {
    GeneratorTable::with_reciprocals(vec![
        Generator::new("L", LUCY_L.clone()),
        Generator::new("s", LUCY_S.clone()),
    ])
    .unwrap()
});

/// The five-limit diatonic steps: just semitone `s`, minor tone `t`,
/// major tone `T`.
pub fn five_limit_table() -> GeneratorTable {
    FIVE_LIMIT_TABLE.clone()
}

/// [five_limit_table] plus the `1/s`, `1/t`, `1/T` inverses.
pub fn five_limit_reciprocal_table() -> GeneratorTable {
    FIVE_LIMIT_RECIPROCAL_TABLE.clone()
}

/// Tone and semitone of 12-EDO.
pub fn edo12_table() -> GeneratorTable {
    EDO12_TABLE.clone()
}

/// The Lucy steps `L` and `s` with their inverses.
pub fn lucy_table() -> GeneratorTable {
    LUCY_TABLE.clone()
}

static INTERVAL_CATALOG: LazyLock<Vec<(&'static str, ExactValue)>> = LazyLock::new(|| {
    vec![
        ("Unison", ExactValue::one()),
        ("Octave", ExactValue::integer(2)),
        ("Perfect Fifth", ExactValue::rational(3, 2)),
        ("Perfect Fourth", ExactValue::rational(4, 3)),
        ("Major Third", ExactValue::rational(5, 4)),
        ("Minor Third", ExactValue::rational(6, 5)),
        ("Major Sixth", ExactValue::rational(5, 3)),
        ("Minor Sixth", ExactValue::rational(8, 5)),
        ("Major Whole Tone", ExactValue::rational(9, 8)),
        ("Minor Whole Tone", ExactValue::rational(10, 9)),
        ("Just Diatonic Semitone", ExactValue::rational(16, 15)),
        ("Major Seventh", ExactValue::rational(15, 8)),
        ("Minor Seventh", ExactValue::rational(16, 9)),
        ("Harmonic Seventh", ExactValue::rational(7, 4)),
        ("Septimal Tritone", ExactValue::rational(7, 5)),
        ("Pythagorean Major Third", ExactValue::rational(81, 64)),
        ("Pythagorean Minor Third", ExactValue::rational(32, 27)),
        ("Pythagorean Limma", ExactValue::rational(256, 243)),
        ("Syntonic Comma", ExactValue::rational(81, 80)),
        ("Pythagorean Comma", ExactValue::rational(531441, 524288)),
        ("Diesis", ExactValue::rational(128, 125)),
        ("Schisma", ExactValue::rational(32805, 32768)),
    ]
});

/// The named-interval catalog backing
/// [ratio_to_name][crate::util::conversions::ratio_to_name].
pub fn interval_catalog() -> &'static [(&'static str, ExactValue)] {
    &INTERVAL_CATALOG
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_meantone_fifth() {
        assert_eq!(
            *MEANTONE_FIFTH,
            ExactValue::power(5, Exponent::rational(Rational::new(1, 4)))
        );
    }

    #[test]
    fn test_lucy_steps() {
        // s = 2^(1/2 - 5/(4π)), so L^5 * s^2 = 2^(5/(2π) + 1 - 5/(2π)) = 2.
        assert_eq!(
            *LUCY_S,
            ExactValue::power(
                2,
                Exponent::new(Rational::new(1, 2), Rational::new(-5, 4))
            )
        );
        let octave = &LUCY_L.pow(Rational::new(5, 1)) * &LUCY_S.pow(Rational::new(2, 1));
        assert_eq!(octave, ExactValue::integer(2));
    }

    #[test]
    fn test_tables_are_well_formed() {
        assert_eq!(five_limit_table().len(), 3);
        assert_eq!(five_limit_reciprocal_table().len(), 6);
        assert_eq!(edo12_table().len(), 2);
        assert_eq!(lucy_table().len(), 4);
    }
}
