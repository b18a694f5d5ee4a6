//! Small numeric helpers shared by the arithmetic operators.

/// Primality by trial division.
///
/// Even numbers above 2 are composite; otherwise odd divisors from 3 up to
/// `floor(sqrt(n))` are tried. There is no special case for 0 or 1, so both
/// report `true`.
pub fn is_prime(n: u64) -> bool {
    if n % 2 == 0 && n > 2 {
        return false;
    }
    let limit = (n as f64).sqrt() as u64;
    let mut i = 3;
    while i <= limit {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Floored remainder: the result takes the sign of the divisor.
pub fn floor_mod(x: f64, divisor: f64) -> f64 {
    let r = x % divisor;
    if r != 0.0 && (r < 0.0) != (divisor < 0.0) {
        r + divisor
    } else {
        r
    }
}

/// Floored division, consistent with [`floor_mod`].
pub fn floor_div(x: f64, divisor: f64) -> f64 {
    ((x - floor_mod(x, divisor)) / divisor).round()
}
