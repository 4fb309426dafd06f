//! Note-number frequency mapping and tuning-table exporters.
//!
//! The exporters wrap an evaluated scale around a MIDI-style note-number
//! scheme and render it in the text formats external synths consume. All
//! of them are pure `String` producers; writing files is the caller's
//! business.

use num_integer::Integer;

use crate::scale::create_edo_scale;
use crate::value::ExactValue;

/// Convert a MIDI-style note number to a frequency in Hz.
///
/// The scale wraps around its formal octave: the octave offset is the
/// floor division of the note distance by the number of scale steps, the
/// degree offset its remainder. Without a scale, standard 12-EDO is
/// assumed; `reference_note = 69` with 440 Hz is standard orchestral
/// tuning.
pub fn note_number_to_freq(
    note: i64,
    scale: Option<&[ExactValue]>,
    reference_note: i64,
    reference_frequency: f64,
) -> f64 {
    let default_scale;
    let scale = match scale {
        Some(degrees) => degrees,
        None {} => {
            default_scale = create_edo_scale(12, 2);
            &default_scale
        }
    };

    let steps = scale.len() as i64 - 1;
    let (octave_offset, degree_offset) = (note - reference_note).div_mod_floor(&steps);
    let octave_ratio = scale[scale.len() - 1].eval();
    let mut octave_multiplier = octave_ratio.powi(octave_offset.unsigned_abs() as i32);
    if octave_offset < 0 {
        octave_multiplier = 1.0 / octave_multiplier;
    }
    reference_frequency * octave_multiplier * scale[degree_offset as usize].eval()
}

/// A Timidity++ tuning table (use with `timidity -Z table`): one line per
/// MIDI note, each 1000 times the note frequency, rounded.
pub fn create_timidity_tuning(
    scale: &[ExactValue],
    reference_note: i64,
    reference_frequency: Option<f64>,
) -> String {
    let reference_frequency =
        reference_frequency.unwrap_or_else(|| note_number_to_freq(reference_note, None {}, 69, 440.0));

    let mut output = format!(
        "# Timidity tuning table created by scalegen,\n\
         # call timidity with the -Z option to enable.\n\
         # Note reference: {}; Freq reference: {:.6} Hz",
        reference_note, reference_frequency
    );
    for note in 0..128 {
        let freq = note_number_to_freq(note, Some(scale), reference_note, reference_frequency);
        output.push('\n');
        output.push_str(&((freq * 1000.0).round() as i64).to_string());
    }
    output
}

/// A Fluidsynth tuning table (use with `fluidsynth -f table`): per
/// program, every MIDI note as a cent offset against the standard 12-EDO
/// note 0, followed by `settuning` activation lines per channel.
pub fn create_fluidsynth_tuning(
    scale: &[ExactValue],
    reference_note: i64,
    channels: &[u32],
    bank: u32,
    programs: &[u32],
    reference_frequency: Option<f64>,
) -> String {
    let reference_frequency =
        reference_frequency.unwrap_or_else(|| note_number_to_freq(reference_note, None {}, 69, 440.0));
    let base_freq = note_number_to_freq(0, None {}, 69, 440.0);

    let mut output = format!(
        "# Fluidsynth Tuning Table created by scalegen\n\
         # Note reference: {}; Freq reference: {:.6} Hz",
        reference_note, reference_frequency
    );
    for &program in programs {
        output.push_str(&format!("\ntuning tuning{:03} {} {}", program, bank, program));
        for note in 0..128 {
            let freq = note_number_to_freq(note, Some(scale), reference_note, reference_frequency);
            let mut cents = 1200.0 * (freq / base_freq).log2();
            if cents <= 0.00001 {
                cents = 0.0;
            }
            output.push_str(&format!("\ntune {} {} {} {:.6}", bank, program, note, cents));
        }
    }
    for &channel in channels {
        for &program in programs {
            output.push_str(&format!("\nsettuning {} {} {}", channel, bank, program));
        }
    }
    output
}

/// A Scala (.scl) scale file. Rational degrees are written as `p/q`,
/// irrational degrees as cent values; the unison is implied and skipped,
/// per the format.
pub fn create_scala_tuning(scale: &[ExactValue], name: &str) -> String {
    let mut output = String::from(
        "! Scale produced by scalegen. For tuning yoshimi or zynaddsubfx,\n\
         ! only include the portion below the final '!'\n\
         !\n",
    );
    output.push_str(name);
    output.push('\n');
    output.push_str(&(scale.len() - 1).to_string());
    output.push_str("\n!");
    for degree in &scale[1..] {
        output.push('\n');
        match degree.as_ratio() {
            Some(ratio) => {
                output.push_str(&format!("{}/{}", ratio.numer(), ratio.denom()));
            }
            None {} => {
                output.push_str(&format!("{:.5}", 1200.0 * degree.eval().log2()));
            }
        }
    }
    output
}
