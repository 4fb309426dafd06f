use crate::constants::MEANTONE_FIFTH;

use super::{create_equal_interval_scale, EqualIntervalOptions, Scale};

/// The quarter-comma meantone scale: the equal-interval scale whose
/// generator is a perfect fifth narrowed by a quarter of the syntonic
/// comma (exactly `5^(1/4)`).
pub fn create_quarter_comma_meantone_scale(options: &EqualIntervalOptions) -> Scale {
    create_equal_interval_scale(&MEANTONE_FIFTH, options)
}

/// Convert a meantone generating interval to its **R** value, the ratio
/// of the whole-tone to the diatonic-semitone size.
pub fn convert_p5_to_r(p5: f64) -> f64 {
    let log_p5 = p5.log2();
    (1.0 - 2.0 * log_p5) / (5.0 * log_p5 - 3.0)
}

/// Convert an **R** value back to the meantone generating interval.
pub fn convert_r_to_p5(r: f64) -> f64 {
    2f64.powf((3.0 * r + 1.0) / (5.0 * r + 2.0))
}
