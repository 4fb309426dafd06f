//! Scale construction.
//!
//! A scale is an ordered sequence of [ExactValue] degrees, by convention
//! starting at the unison (1) and ending at the formal octave (usually
//! 2). Generators produce scales; the [mode][crate::mode],
//! [metrics][crate::metrics] and [basis][crate::basis] modules consume
//! them without ever mutating them.

use std::{error::Error, fmt};

use crate::value::ExactValue;

pub mod diatonic;
pub mod edo;
pub mod equal_interval;
pub mod euler_fokker;
pub mod harmonic;
pub mod lucy;
pub mod meantone;
pub mod pythagorean;

pub use diatonic::{create_diatonic_scale, create_diatonic_scale_from_string};
pub use edo::create_edo_scale;
pub use equal_interval::{create_equal_interval_scale, EqualIntervalOptions};
pub use euler_fokker::create_euler_fokker_scale;
pub use harmonic::create_harmonic_scale;
pub use lucy::{
    calculate_lucy_mode, calculate_lucy_mode_twelve_tone, create_lucy_scale_from_scale,
    create_lucy_tone_table, create_lucy_tuning_spiral,
};
pub use meantone::{convert_p5_to_r, convert_r_to_p5, create_quarter_comma_meantone_scale};
pub use pythagorean::create_pythagorean_scale;

/// An ordered sequence of scale degrees.
pub type Scale = Vec<ExactValue>;

#[derive(Debug, PartialEq)]
pub enum ScaleErr {
    /// A step specification referred to a label that is not in the
    /// generator table.
    UnknownGenerator(String),
    /// Euler–Fokker construction got interval and multiplicity lists of
    /// different lengths.
    MismatchedMultiplicities(usize, usize),
}

impl fmt::Display for ScaleErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleErr::UnknownGenerator(label) => {
                write!(f, "no generator labeled '{}' in the table", label)
            }
            ScaleErr::MismatchedMultiplicities(intervals, multiplicities) => write!(
                f,
                "got {} intervals but {} multiplicities",
                intervals, multiplicities
            ),
        }
    }
}

impl Error for ScaleErr {}
