//! Exact representation of frequency ratios.
//!
//! Every interval handled by this crate is an [ExactValue]: either a
//! rational number, or a product of prime powers with exponents that may
//! be fractional (roots) or carry a `1/π` component (the Lucy
//! generators). Multiplication, division, rational powers, equality and
//! ordering are all exact; a floating-point [eval][ExactValue::eval] is
//! available wherever a numeric magnitude is needed.
//!
//! Don't compare evaluated floats to decide whether two intervals are the
//! same; that's what the structural equality of canonical forms is for.
//! Floats are only for ordering heuristics and metric arithmetic.

use std::{cmp::Ordering, collections::BTreeMap, error::Error, fmt, ops, str::FromStr};

use num_rational::Ratio;
use num_traits::{One, Signed, Zero};

pub mod exponent;
pub mod primes;
mod serde;

pub use exponent::Exponent;

/// The type of exact rational numbers used throughout the crate.
pub type Rational = Ratio<i64>;

/// An exact frequency ratio.
///
/// Canonical form invariants, maintained by every constructor and
/// operation:
///
/// * `Rational` is always a reduced ratio with positive denominator.
/// * `Product` bases are primes in strictly increasing order, every
///   exponent is non-zero, and at least one exponent is non-integral
///   (otherwise the value collapses to `Rational`).
///
/// Because the form is canonical, the derived structural equality is exact
/// value equality: `4^(1/2)` and `2` are the same [ExactValue].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExactValue {
    Rational(Rational),
    Product(Vec<Factor>),
}

/// One prime-power term of a [ExactValue::Product].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factor {
    pub base: i64,
    pub exponent: Exponent,
}

impl ExactValue {
    pub fn one() -> Self {
        ExactValue::Rational(Rational::one())
    }

    pub fn integer(n: i64) -> Self {
        debug_assert!(n > 0);
        ExactValue::Rational(Rational::from_integer(n))
    }

    pub fn rational(numer: i64, denom: i64) -> Self {
        debug_assert!(numer > 0 && denom > 0);
        ExactValue::Rational(Rational::new(numer, denom))
    }

    pub fn from_ratio(ratio: Rational) -> Self {
        debug_assert!(!ratio.is_negative());
        ExactValue::Rational(ratio)
    }

    /// `base^exponent` for a positive integer base. The base is factored
    /// into primes, so e.g. `power(4, 1/2)` canonicalizes to `2`.
    pub fn power(base: i64, exponent: Exponent) -> Self {
        debug_assert!(base >= 1);
        let mut factors = BTreeMap::new();
        for (p, k) in primes::factor(base) {
            add_exponent(
                &mut factors,
                p,
                exponent.scaled(Rational::from_integer(k as i64)),
            );
        }
        from_factors(factors)
    }

    /// The multiplicative inverse.
    pub fn recip(&self) -> Self {
        match self {
            ExactValue::Rational(r) => ExactValue::Rational(r.recip()),
            ExactValue::Product(factors) => ExactValue::Product(
                factors
                    .iter()
                    .map(|f| Factor {
                        base: f.base,
                        exponent: -f.exponent,
                    })
                    .collect(),
            ),
        }
    }

    /// Raise to a rational power, exactly.
    pub fn pow(&self, exponent: Rational) -> Self {
        if exponent.is_zero() {
            return ExactValue::one();
        }
        match self {
            ExactValue::Rational(r) if exponent.is_integer() => {
                let k = exponent.to_integer();
                let base = if k < 0 { r.recip() } else { *r };
                ExactValue::Rational(num_traits::pow(base, k.unsigned_abs() as usize))
            }
            _ => {
                let mut factors = BTreeMap::new();
                for (base, e) in self.to_factors() {
                    add_exponent(&mut factors, base, e.scaled(exponent));
                }
                from_factors(factors)
            }
        }
    }

    /// Evaluate to a floating-point approximation.
    pub fn eval(&self) -> f64 {
        match self {
            ExactValue::Rational(r) => *r.numer() as f64 / *r.denom() as f64,
            ExactValue::Product(factors) => factors
                .iter()
                .map(|f| (f.base as f64).powf(f.exponent.to_f64()))
                .product(),
        }
    }

    /// The value as a reduced ratio, if it is rational.
    pub fn as_ratio(&self) -> Option<Rational> {
        match self {
            ExactValue::Rational(r) => Some(*r),
            ExactValue::Product(_) => None {},
        }
    }

    pub fn is_one(&self) -> bool {
        matches!(self, ExactValue::Rational(r) if r.is_one())
    }

    /// The prime-exponent decomposition of the value.
    fn to_factors(&self) -> BTreeMap<i64, Exponent> {
        let mut factors = BTreeMap::new();
        match self {
            ExactValue::Rational(r) => {
                for (p, k) in primes::factor(*r.numer()) {
                    add_exponent(&mut factors, p, Exponent::integer(k as i64));
                }
                for (p, k) in primes::factor(*r.denom()) {
                    add_exponent(&mut factors, p, Exponent::integer(-(k as i64)));
                }
            }
            ExactValue::Product(fs) => {
                for f in fs {
                    add_exponent(&mut factors, f.base, f.exponent);
                }
            }
        }
        factors
    }

    /// A deterministic order on values whose evaluations coincide. Only
    /// used to keep [Ord] total; genuinely distinct values colliding in
    /// `f64` do not occur in practice.
    fn structural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ExactValue::Rational(a), ExactValue::Rational(b)) => a.cmp(b),
            (ExactValue::Rational(_), ExactValue::Product(_)) => Ordering::Less,
            (ExactValue::Product(_), ExactValue::Rational(_)) => Ordering::Greater,
            (ExactValue::Product(a), ExactValue::Product(b)) => {
                let key = |f: &Factor| (f.base, f.exponent.plain, f.exponent.over_pi);
                a.iter().map(key).cmp(b.iter().map(key))
            }
        }
    }
}

fn add_exponent(factors: &mut BTreeMap<i64, Exponent>, base: i64, exponent: Exponent) {
    let entry = factors.entry(base).or_insert_with(|| Exponent::integer(0));
    *entry = *entry + exponent;
}

/// Rebuild the canonical [ExactValue] from a prime-exponent map.
fn from_factors(factors: BTreeMap<i64, Exponent>) -> ExactValue {
    let nonzero: Vec<(i64, Exponent)> = factors.into_iter().filter(|(_, e)| !e.is_zero()).collect();

    if nonzero.iter().all(|(_, e)| e.is_integer()) {
        let mut numer: i64 = 1;
        let mut denom: i64 = 1;
        for (base, e) in &nonzero {
            let k = e.plain.to_integer();
            if k > 0 {
                numer *= base.pow(k as u32);
            } else {
                denom *= base.pow((-k) as u32);
            }
        }
        ExactValue::Rational(Rational::new(numer, denom))
    } else {
        ExactValue::Product(
            nonzero
                .into_iter()
                .map(|(base, exponent)| Factor { base, exponent })
                .collect(),
        )
    }
}

impl ops::Mul<&ExactValue> for &ExactValue {
    type Output = ExactValue;

    fn mul(self, rhs: &ExactValue) -> ExactValue {
        match (self, rhs) {
            (ExactValue::Rational(a), ExactValue::Rational(b)) => ExactValue::Rational(a * b),
            _ => {
                let mut factors = self.to_factors();
                for (base, e) in rhs.to_factors() {
                    add_exponent(&mut factors, base, e);
                }
                from_factors(factors)
            }
        }
    }
}

impl ops::Div<&ExactValue> for &ExactValue {
    type Output = ExactValue;

    fn div(self, rhs: &ExactValue) -> ExactValue {
        match (self, rhs) {
            (ExactValue::Rational(a), ExactValue::Rational(b)) => ExactValue::Rational(a / b),
            _ => {
                let mut factors = self.to_factors();
                for (base, e) in rhs.to_factors() {
                    add_exponent(&mut factors, base, -e);
                }
                from_factors(factors)
            }
        }
    }
}

impl PartialOrd for ExactValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactValue {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        match (self, other) {
            (ExactValue::Rational(a), ExactValue::Rational(b)) => a.cmp(b),
            _ => match self.eval().partial_cmp(&other.eval()) {
                Some(Ordering::Less) => Ordering::Less,
                Some(Ordering::Greater) => Ordering::Greater,
                _ => self.structural_cmp(other),
            },
        }
    }
}

impl fmt::Display for ExactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExactValue::Rational(r) => write!(f, "{}", r),
            ExactValue::Product(factors) => {
                for (i, factor) in factors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "*")?;
                    }
                    write!(f, "{}^({})", factor.base, factor.exponent)?;
                }
                Ok(())
            }
        }
    }
}

/// Fold an interval into the octave.
///
/// Implements the unique `k` of `interval / octave^k` (for `interval >=
/// octave`, `k = ceil(log_octave(interval/octave))`) respectively
/// `interval * octave^k` (for `interval < 1`, `k = floor(log_octave(octave
/// /interval))`) that lands the result in the target range. Exact powers
/// of the octave fold onto the octave itself (`4 -> 2`, `1/2 -> 2`);
/// intervals already in `[1, octave)` are returned unchanged. The fold is
/// computed by exact repeated multiplication, so no floating-point
/// boundary case can put the result off by one octave.
pub fn normalize_interval(interval: &ExactValue, octave: i64) -> ExactValue {
    debug_assert!(octave >= 2);
    let octave_value = ExactValue::integer(octave);
    let one = ExactValue::one();

    if *interval >= octave_value {
        let mut folded = interval.clone();
        while folded > octave_value {
            folded = &folded / &octave_value;
        }
        folded
    } else if *interval < one {
        let mut folded = interval.clone();
        while folded <= one {
            folded = &folded * &octave_value;
        }
        folded
    } else {
        interval.clone()
    }
}

#[derive(Debug)]
pub struct ParseValueErr {
    input: String,
    reason: &'static str,
}

impl ParseValueErr {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_owned(),
            reason,
        }
    }
}

impl fmt::Display for ParseValueErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot parse '{}' as an exact value: {}",
            self.input, self.reason
        )
    }
}

impl Error for ParseValueErr {}

impl FromStr for ExactValue {
    type Err = ParseValueErr;

    /// Parse the canonical text form produced by [Display][fmt::Display]:
    /// `"3/2"`, `"2"`, `"2^(7/12)"`, `"2^(-1)*5^(1/2)"`,
    /// `"2^(1/2-5/(4*pi))"`.
    fn from_str(s: &str) -> Result<Self, ParseValueErr> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseValueErr::new(s, "empty input"));
        }

        if !trimmed.contains('^') {
            let ratio: Rational = trimmed
                .parse()
                .map_err(|_| ParseValueErr::new(s, "not a ratio"))?;
            if !ratio.is_positive() {
                return Err(ParseValueErr::new(s, "ratio must be positive"));
            }
            return Ok(ExactValue::from_ratio(ratio));
        }

        let mut value = ExactValue::one();
        for term in split_top_level(trimmed, '*') {
            let (base_str, rest) = term
                .split_once('^')
                .ok_or_else(|| ParseValueErr::new(s, "power term without '^'"))?;
            let base: i64 = base_str
                .trim()
                .parse()
                .map_err(|_| ParseValueErr::new(s, "base is not an integer"))?;
            if base < 1 {
                return Err(ParseValueErr::new(s, "base must be positive"));
            }
            let rest = rest.trim();
            let inner = rest
                .strip_prefix('(')
                .and_then(|r| r.strip_suffix(')'))
                .ok_or_else(|| ParseValueErr::new(s, "exponent must be parenthesized"))?;
            let exponent =
                parse_exponent(inner).ok_or_else(|| ParseValueErr::new(s, "bad exponent"))?;
            value = &value * &ExactValue::power(base, exponent);
        }
        Ok(value)
    }
}

/// Split on `separator` at parenthesis depth zero.
fn split_top_level(s: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Parse the inside of an exponent: signed terms that are either plain
/// rationals (`7/12`) or π-denominated (`5/(4*pi)`, `1/pi`).
fn parse_exponent(s: &str) -> Option<Exponent> {
    let mut exponent = Exponent::integer(0);
    let mut rest = s.trim();
    let mut negative = false;
    if let Some(r) = rest.strip_prefix('-') {
        negative = true;
        rest = r;
    }

    loop {
        let (term, remainder, next_negative) = next_exponent_term(rest);
        let parsed = parse_exponent_term(term.trim(), negative)?;
        exponent = exponent + parsed;
        match remainder {
            Some(r) => {
                rest = r;
                negative = next_negative;
            }
            None {} => return Some(exponent),
        }
    }
}

/// Cut the next term off at the first top-level `+`/`-`.
fn next_exponent_term(s: &str) -> (&str, Option<&str>, bool) {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '+' if depth == 0 => return (&s[..i], Some(&s[i + 1..]), false),
            '-' if depth == 0 => return (&s[..i], Some(&s[i + 1..]), true),
            _ => {}
        }
    }
    (s, None {}, false)
}

fn parse_exponent_term(term: &str, negative: bool) -> Option<Exponent> {
    let sign = if negative { -1 } else { 1 };
    if let Some(numer_str) = term.strip_suffix("/pi") {
        let numer: i64 = numer_str.trim().parse().ok()?;
        return Some(Exponent::over_pi(Rational::new(sign * numer, 1)));
    }
    if let Some((numer_str, denom_str)) = term.split_once("/(") {
        let inner = denom_str.strip_suffix(')')?;
        let denom_str = inner.trim().strip_suffix("*pi")?;
        let numer: i64 = numer_str.trim().parse().ok()?;
        let denom: i64 = denom_str.trim().parse().ok()?;
        if denom == 0 {
            return None {};
        }
        return Some(Exponent::over_pi(Rational::new(sign * numer, denom)));
    }
    let plain: Rational = term.parse().ok()?;
    Some(Exponent::rational(plain * Rational::from_integer(sign)))
}
