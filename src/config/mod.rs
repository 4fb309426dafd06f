//! Declarative scale recipes and generator-table specs.
//!
//! This is the configuration surface a front-end or batch exporter
//! consumes: YAML describing which scale to build with which options, and
//! labeled generator tables with exact values in their canonical text
//! form. The core never reads files; callers hand strings to
//! [recipes_from_yaml] and get pure data back.

use std::{error::Error, fmt};

use serde_derive::{Deserialize, Serialize};

use crate::basis::{Generator, GeneratorTable, TableErr};
use crate::scale::{
    create_diatonic_scale_from_string, create_edo_scale, create_equal_interval_scale,
    create_euler_fokker_scale, create_harmonic_scale, create_pythagorean_scale,
    create_quarter_comma_meantone_scale, EqualIntervalOptions, Scale, ScaleErr,
};
use crate::value::ExactValue;

/// A single labeled generator, with the value in canonical text form
/// (`"3/2"`, `"2^(1/12)"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSpec {
    pub label: String,
    pub value: ExactValue,
}

/// A declarative generator table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    pub generators: Vec<GeneratorSpec>,
}

impl TableSpec {
    /// Validate and build the [GeneratorTable]. If `reciprocals` is set,
    /// the `1/X` inverse of every generator is appended.
    pub fn build(&self, reciprocals: bool) -> Result<GeneratorTable, TableErr> {
        let generators: Vec<Generator> = self
            .generators
            .iter()
            .map(|spec| Generator::new(spec.label.clone(), spec.value.clone()))
            .collect();
        if reciprocals {
            GeneratorTable::with_reciprocals(generators)
        } else {
            GeneratorTable::new(generators)
        }
    }
}

/// A declarative scale description covering every generator family.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "family",
    rename_all = "kebab-case",
    rename_all_fields = "kebab-case"
)]
pub enum ScaleRecipe {
    Pythagorean {
        #[serde(default = "default_scale_size")]
        scale_size: usize,
        #[serde(default = "default_down_intervals")]
        number_down_intervals: usize,
        #[serde(default = "default_octave")]
        octave: i64,
    },
    QuarterCommaMeantone {
        #[serde(default = "default_scale_size")]
        scale_size: usize,
        #[serde(default = "default_down_intervals")]
        number_down_intervals: usize,
        #[serde(default = "default_octave")]
        octave: i64,
    },
    EqualInterval {
        generator: ExactValue,
        #[serde(default = "default_scale_size")]
        scale_size: usize,
        #[serde(default = "default_down_intervals")]
        number_down_intervals: usize,
        #[serde(default = "default_octave")]
        octave: i64,
        #[serde(default = "default_true")]
        normalize: bool,
    },
    Edo {
        tones: usize,
        #[serde(default = "default_octave")]
        octave: i64,
    },
    Harmonic {
        first: i64,
        last: i64,
        #[serde(default = "default_true")]
        normalize: bool,
        #[serde(default = "default_octave")]
        octave: i64,
    },
    EulerFokker {
        intervals: Vec<i64>,
        multiplicities: Vec<usize>,
        #[serde(default = "default_octave")]
        octave: i64,
        #[serde(default = "default_true")]
        normalize: bool,
    },
    Diatonic {
        table: TableSpec,
        steps: String,
    },
}

fn default_scale_size() -> usize {
    12
}

fn default_down_intervals() -> usize {
    6
}

fn default_octave() -> i64 {
    2
}

fn default_true() -> bool {
    true
}

impl ScaleRecipe {
    /// Build the described scale.
    pub fn realize(&self) -> Result<Scale, RecipeErr> {
        match self {
            ScaleRecipe::Pythagorean {
                scale_size,
                number_down_intervals,
                octave,
            } => Ok(create_pythagorean_scale(&EqualIntervalOptions {
                scale_size: *scale_size,
                number_down_intervals: *number_down_intervals,
                octave: *octave,
                ..Default::default()
            })),
            ScaleRecipe::QuarterCommaMeantone {
                scale_size,
                number_down_intervals,
                octave,
            } => Ok(create_quarter_comma_meantone_scale(&EqualIntervalOptions {
                scale_size: *scale_size,
                number_down_intervals: *number_down_intervals,
                octave: *octave,
                ..Default::default()
            })),
            ScaleRecipe::EqualInterval {
                generator,
                scale_size,
                number_down_intervals,
                octave,
                normalize,
            } => Ok(create_equal_interval_scale(
                generator,
                &EqualIntervalOptions {
                    scale_size: *scale_size,
                    number_down_intervals: *number_down_intervals,
                    octave: *octave,
                    normalize: *normalize,
                    ..Default::default()
                },
            )),
            ScaleRecipe::Edo { tones, octave } => Ok(create_edo_scale(*tones, *octave)),
            ScaleRecipe::Harmonic {
                first,
                last,
                normalize,
                octave,
            } => Ok(create_harmonic_scale(*first, *last, *normalize, *octave)),
            ScaleRecipe::EulerFokker {
                intervals,
                multiplicities,
                octave,
                normalize,
            } => {
                if intervals.len() != multiplicities.len() {
                    return Err(RecipeErr::Scale(ScaleErr::MismatchedMultiplicities(
                        intervals.len(),
                        multiplicities.len(),
                    )));
                }
                Ok(create_euler_fokker_scale(
                    intervals,
                    multiplicities,
                    *octave,
                    *normalize,
                ))
            }
            ScaleRecipe::Diatonic { table, steps } => {
                let generator_table = table.build(false)?;
                Ok(create_diatonic_scale_from_string(&generator_table, steps)?)
            }
        }
    }
}

/// Parse a YAML list of recipes.
pub fn recipes_from_yaml(yaml: &str) -> Result<Vec<ScaleRecipe>, serde_yml::Error> {
    serde_yml::from_str(yaml)
}

#[derive(Debug, PartialEq)]
pub enum RecipeErr {
    Scale(ScaleErr),
    Table(TableErr),
}

impl fmt::Display for RecipeErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeErr::Scale(err) => write!(f, "scale construction failed: {}", err),
            RecipeErr::Table(err) => write!(f, "generator table is invalid: {}", err),
        }
    }
}

impl Error for RecipeErr {}

impl From<ScaleErr> for RecipeErr {
    fn from(err: ScaleErr) -> Self {
        RecipeErr::Scale(err)
    }
}

impl From<TableErr> for RecipeErr {
    fn from(err: TableErr) -> Self {
        RecipeErr::Table(err)
    }
}
