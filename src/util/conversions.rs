//! Numeric conversions between ratios, cents and interval names.

use std::fmt::Write;

use crate::constants::interval_catalog;
use crate::value::ExactValue;

/// The size of an interval in cents (1200ths of an octave).
pub fn ratio_to_cents(ratio: &ExactValue) -> f64 {
    1200.0 * ratio.eval().log2()
}

/// The frequency ratio corresponding to a cent value, as a float.
pub fn cents_to_ratio(cents: f64) -> f64 {
    2f64.powf(cents / 1200.0)
}

/// Look an interval up in the named catalog. Returns the conventional
/// name of the first catalog entry with exactly this value.
pub fn ratio_to_name(ratio: &ExactValue) -> Option<&'static str> {
    interval_catalog()
        .iter()
        .find(|entry| &entry.1 == ratio)
        .map(|entry| entry.0)
}

/// Render a degree-by-degree comparison of two scales of equal length as
/// a plain-text table (cents, frequency against a reference, and the cent
/// delta per degree).
pub fn compare_two_scales(
    scale1: &[ExactValue],
    scale2: &[ExactValue],
    reference_freq: f64,
    titles: [&str; 2],
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>21} {:>21}", titles[0], titles[1]);
    let _ = writeln!(
        out,
        "     Cents       Freq      Cents       Freq  Delta(Cents)"
    );
    let _ = writeln!(
        out,
        " =========  =========  =========  =========  ============"
    );
    for (a, b) in scale1.iter().zip(scale2.iter()) {
        let cents_a = ratio_to_cents(a);
        let cents_b = ratio_to_cents(b);
        let _ = writeln!(
            out,
            "{:10.4} {:10.4} {:10.4} {:10.4}    {:10.4}",
            cents_a,
            a.eval() * reference_freq,
            cents_b,
            b.eval() * reference_freq,
            cents_a - cents_b,
        );
    }
    out
}
