pub mod combinatorics;
pub mod conversions;
