//! Integer helpers for the modular arithmetic the substitution ciphers use.

/// Greatest common divisor of `|a|` and `|b|`.
///
/// Computed on magnitudes, so `i64::MIN` is accepted.
pub fn gcd(a: i64, b: i64) -> u64 {
    gcd_unsigned(a.unsigned_abs(), b.unsigned_abs())
}

fn gcd_unsigned(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Least common multiple of two positive lengths.
///
/// Returns `None` if the result overflows `usize`.
pub fn lcm(a: usize, b: usize) -> Option<usize> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    let g = gcd_unsigned(a as u64, b as u64) as usize;
    (a / g).checked_mul(b)
}

/// Multiplicative inverse of `a` modulo `m`, if it exists.
///
/// Uses the extended Euclidean algorithm. The result is in `0..m`.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (mut old_r, mut r) = (a.rem_euclid(m), m);
    let (mut old_s, mut s) = (1i64, 0i64);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(m))
}
