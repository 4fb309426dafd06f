//! Prime decomposition of intervals, and odd/prime limits.
//!
//! A just interval is fully described by the exponents of its prime
//! factorization: the syntonic comma 81/80 is `{2: -4, 3: 4, 5: -1}`,
//! or as a dense vector over successive primes, `(-4, 4, -1)`. Both
//! directions round-trip exactly.

use std::collections::BTreeMap;

use crate::value::{primes, ExactValue, Rational};

/// The prime factorization of a ratio as a prime → exponent map.
pub fn prime_factor_ratio(ratio: &Rational) -> BTreeMap<i64, i64> {
    let mut factors: BTreeMap<i64, i64> = BTreeMap::new();
    for (prime, multiplicity) in primes::factor(*ratio.numer()) {
        *factors.entry(prime).or_insert(0) += multiplicity as i64;
    }
    for (prime, multiplicity) in primes::factor(*ratio.denom()) {
        *factors.entry(prime).or_insert(0) -= multiplicity as i64;
    }
    factors.retain(|_, exponent| *exponent != 0);
    factors
}

/// The prime factorization of a ratio as a dense exponent vector over
/// the successive primes 2, 3, 5, …, up to the largest prime involved.
/// Intermediate primes that don't occur contribute a zero.
pub fn prime_factor_vector(ratio: &Rational) -> Vec<i64> {
    let factors = prime_factor_ratio(ratio);
    let largest = match factors.keys().next_back() {
        Some(&prime) => prime,
        None {} => return Vec::new(),
    };
    primes::primes_through(largest)
        .into_iter()
        .map(|prime| factors.get(&prime).copied().unwrap_or(0))
        .collect()
}

/// Rebuild a ratio from a prime → exponent map. Inverse of
/// [prime_factor_ratio].
pub fn create_ratio_from_primes(factors: &BTreeMap<i64, i64>) -> Rational {
    let mut numer: i64 = 1;
    let mut denom: i64 = 1;
    for (&prime, &exponent) in factors {
        if exponent > 0 {
            numer *= prime.pow(exponent as u32);
        } else {
            denom *= prime.pow((-exponent) as u32);
        }
    }
    Rational::new(numer, denom)
}

/// Rebuild a ratio from a dense exponent vector. Inverse of
/// [prime_factor_vector].
pub fn create_ratio_from_prime_vector(exponents: &[i64]) -> Rational {
    let mut factors = BTreeMap::new();
    let mut prime: i64 = 2;
    for &exponent in exponents {
        factors.insert(prime, exponent);
        prime += 1;
        while !primes::is_prime(prime) {
            prime += 1;
        }
    }
    create_ratio_from_primes(&factors)
}

/// The odd limit of an interval: the largest odd number among its
/// reduced numerator and denominator.
pub fn odd_limit(interval: &Rational) -> i64 {
    let p = *interval.numer();
    let q = *interval.denom();
    match (p % 2 != 0, q % 2 != 0) {
        (true, true) => p.max(q),
        (true, false) => p,
        (false, true) => q,
        // A reduced ratio can't have both parts even.
        (false, false) => unreachable!("unreduced ratio"),
    }
}

/// The prime limit of an interval: the largest odd prime dividing its
/// numerator or denominator, or 1 for powers of two.
pub fn prime_limit(interval: &Rational) -> i64 {
    primes::factor(*interval.numer())
        .into_iter()
        .chain(primes::factor(*interval.denom()))
        .map(|(prime, _)| prime)
        .filter(|&prime| prime != 2)
        .max()
        .unwrap_or(1)
}

/// The odd limit over a scale's interior degrees (the bracketing unison
/// and octave are skipped, as is any degree that isn't rational).
pub fn find_odd_limit_for_scale(scale: &[ExactValue]) -> Option<i64> {
    interior_ratios(scale).map(|ratio| odd_limit(&ratio)).max()
}

/// The prime limit over a scale's interior degrees.
pub fn find_prime_limit_for_scale(scale: &[ExactValue]) -> Option<i64> {
    interior_ratios(scale).map(|ratio| prime_limit(&ratio)).max()
}

fn interior_ratios(scale: &[ExactValue]) -> impl Iterator<Item = Rational> + '_ {
    let interior = if scale.len() >= 2 {
        &scale[1..scale.len() - 1]
    } else {
        &[]
    };
    interior.iter().filter_map(ExactValue::as_ratio)
}
