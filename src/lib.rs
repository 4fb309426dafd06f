//! Exact-arithmetic construction and analysis of musical tuning systems.
//!
//! Scales are ordered sequences of exactly represented frequency ratios
//! ([value::ExactValue]). The [scale] module builds them (equal-interval
//! families, harmonic series, Euler–Fokker genera, diatonic step
//! construction, Lucy tuning), [mode] enumerates and ranks their
//! sub-scales, [metrics] scores consonance, and [basis] factors arbitrary
//! intervals over a small set of named generator intervals by exhaustive
//! search. [tables] renders finished scales into synthesizer tuning-table
//! formats, and [config] provides a declarative YAML recipe surface.
//!
//! Everything is a pure function from inputs to outputs: no global state,
//! no I/O, no sessions.

pub mod basis;
pub mod config;
pub mod constants;
pub mod metrics;
pub mod mode;
pub mod number_theory;
pub mod scale;
pub mod tables;
pub mod util;
pub mod value;
