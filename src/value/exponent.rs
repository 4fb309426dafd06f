use std::ops;

use num_traits::{Signed, Zero};

use crate::value::Rational;

/// An exponent of the form `plain + over_pi/π`, with both coefficients
/// rational.
///
/// Rational exponents cover roots (equal divisions of the octave, the
/// quarter-comma narrowing of the meantone fifth); the `over_pi` component
/// covers the transcendental exponents of the Lucy generators. The type is
/// closed under addition, negation and scaling by a rational, which is all
/// that multiplication, division and rational powers of values ever need.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exponent {
    pub plain: Rational,
    pub over_pi: Rational,
}

impl Exponent {
    pub fn new(plain: Rational, over_pi: Rational) -> Self {
        Self { plain, over_pi }
    }

    /// The exponent `k`.
    pub fn integer(k: i64) -> Self {
        Self {
            plain: Rational::from_integer(k),
            over_pi: Rational::zero(),
        }
    }

    /// The exponent `r`.
    pub fn rational(r: Rational) -> Self {
        Self {
            plain: r,
            over_pi: Rational::zero(),
        }
    }

    /// The exponent `r/π`.
    pub fn over_pi(r: Rational) -> Self {
        Self {
            plain: Rational::zero(),
            over_pi: r,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.plain.is_zero() && self.over_pi.is_zero()
    }

    /// Whether the exponent is an integer, i.e. whether a power with this
    /// exponent stays rational.
    pub fn is_integer(&self) -> bool {
        self.over_pi.is_zero() && self.plain.is_integer()
    }

    pub fn to_f64(&self) -> f64 {
        ratio_to_f64(self.plain) + ratio_to_f64(self.over_pi) / std::f64::consts::PI
    }

    /// Scale the exponent by a rational factor (used for rational powers).
    pub fn scaled(&self, factor: Rational) -> Self {
        Self {
            plain: self.plain * factor,
            over_pi: self.over_pi * factor,
        }
    }
}

fn ratio_to_f64(r: Rational) -> f64 {
    *r.numer() as f64 / *r.denom() as f64
}

impl ops::Add for Exponent {
    type Output = Exponent;

    fn add(self, rhs: Exponent) -> Exponent {
        Exponent {
            plain: self.plain + rhs.plain,
            over_pi: self.over_pi + rhs.over_pi,
        }
    }
}

impl ops::Sub for Exponent {
    type Output = Exponent;

    fn sub(self, rhs: Exponent) -> Exponent {
        Exponent {
            plain: self.plain - rhs.plain,
            over_pi: self.over_pi - rhs.over_pi,
        }
    }
}

impl ops::Neg for Exponent {
    type Output = Exponent;

    fn neg(self) -> Exponent {
        Exponent {
            plain: -self.plain,
            over_pi: -self.over_pi,
        }
    }
}

impl std::fmt::Display for Exponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.over_pi.is_zero() {
            return write!(f, "{}", self.plain);
        }

        let c = *self.over_pi.numer();
        let d = *self.over_pi.denom();
        if self.plain.is_zero() {
            if d == 1 {
                write!(f, "{}/pi", c)
            } else {
                write!(f, "{}/({}*pi)", c, d)
            }
        } else {
            let sign = if self.over_pi.is_negative() { '-' } else { '+' };
            if d == 1 {
                write!(f, "{}{}{}/pi", self.plain, sign, c.abs())
            } else {
                write!(f, "{}{}{}/({}*pi)", self.plain, sign, c.abs(), d)
            }
        }
    }
}
