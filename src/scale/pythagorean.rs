use crate::constants::PERFECT_FIFTH;

use super::{create_equal_interval_scale, EqualIntervalOptions, Scale};

/// The Pythagorean scale: the equal-interval scale generated by the
/// perfect fifth, 3/2.
pub fn create_pythagorean_scale(options: &EqualIntervalOptions) -> Scale {
    create_equal_interval_scale(&PERFECT_FIFTH, options)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::value::ExactValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_five_down_fifths_gives_augmented_fourth() {
        // With five instead of six inverted fifths, the tritone degree is
        // the augmented fourth 729/512 instead of the diminished fifth
        // 1024/729.
        let scale = create_pythagorean_scale(&EqualIntervalOptions {
            number_down_intervals: 5,
            ..Default::default()
        });
        assert_eq!(scale[6], ExactValue::rational(729, 512));
        assert_eq!(scale.len(), 13);
    }
}
