//! String helpers behind the text operators.
//!
//! The coefficient and bias extractors work on flat linear expressions such
//! as `3.5x+2` or `(2x + 7)`. There is no operator precedence and no
//! subtraction handling.

use super::fault::Fault;

/// Renders a float the way working memory spells numbers.
///
/// Integer-valued floats lose their fraction (`4.0` -> `"4"`); everything
/// else uses the shortest round-tripping digits (`4.5` -> `"4.5"`). Values
/// below `1e-4` in magnitude switch to exponent form with a signed,
/// two-digit exponent (`1e-5` -> `"1e-05"`).
pub fn render_float(x: f64) -> Result<String, Fault> {
    if x.is_nan() {
        return Err(Fault::InvalidNumber);
    }
    if x.is_infinite() {
        return Err(Fault::Overflow);
    }
    if x == x.trunc() {
        if x == 0.0 {
            // -0.0 collapses to a plain zero
            return Ok("0".to_string());
        }
        return Ok(format!("{:.0}", x));
    }
    if x.abs() < 1e-4 {
        return Ok(exponent_form(x));
    }
    Ok(format!("{}", x))
}

fn exponent_form(x: f64) -> String {
    let shortest = format!("{:e}", x);
    match shortest.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => shortest,
    }
}

/// Parses a float, tolerating surrounding whitespace
pub fn parse_float(s: &str) -> Result<f64, Fault> {
    s.trim().parse::<f64>().map_err(|_| Fault::InvalidNumber)
}

/// Whether the expression mentions the variable `x`
pub fn contains_x(s: &str) -> bool {
    s.contains('x')
}

/// Tail of `s` from its first alphabetic character onwards
pub fn var_name(s: &str) -> Result<&str, Fault> {
    s.char_indices()
        .find(|(_, c)| c.is_alphabetic())
        .map(|(i, _)| &s[i..])
        .ok_or(Fault::NoMatch)
}

/// Numeric coefficient written immediately before the first `x`.
///
/// Scans backwards from the `x` over ASCII digits and `.`, stopping at the
/// start of the string. A `-` directly before the digits is kept, so `-3x`
/// yields `"-3"`; other separators such as `+` or `(` are not. A bare `x`
/// yields `""`.
pub fn coefficient(s: &str) -> Result<&str, Fault> {
    let end = s.find('x').ok_or(Fault::NoMatch)?;
    let bytes = s.as_bytes();
    let mut start = end;
    while start > 0 && (bytes[start - 1].is_ascii_digit() || bytes[start - 1] == b'.') {
        start -= 1;
    }
    if start > 0 && bytes[start - 1] == b'-' {
        start -= 1;
    }
    Ok(&s[start..end])
}

/// First `+`-separated term mentioning neither `x` nor `y`, with
/// surrounding parentheses and spaces stripped.
pub fn bias(s: &str) -> Result<&str, Fault> {
    s.split('+')
        .find(|term| !term.contains('x') && !term.contains('y'))
        .map(|term| {
            term.trim_start_matches(|c| c == '(' || c == ' ')
                .trim_end_matches(|c| c == ')' || c == ' ')
        })
        .ok_or(Fault::NoMatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_float() {
        assert_eq!(render_float(4.0).unwrap(), "4");
        assert_eq!(render_float(4.5).unwrap(), "4.5");
        assert_eq!(render_float(-12.0).unwrap(), "-12");
        assert_eq!(render_float(-0.0).unwrap(), "0");
        assert_eq!(render_float(0.1 + 0.2).unwrap(), "0.30000000000000004");
        assert_eq!(render_float(1e20).unwrap(), "100000000000000000000");
        assert_eq!(render_float(0.0001).unwrap(), "0.0001");
    }

    #[test]
    fn test_render_float_small_magnitudes() {
        assert_eq!(render_float(1e-5).unwrap(), "1e-05");
        assert_eq!(render_float(-2.5e-7).unwrap(), "-2.5e-07");
        assert_eq!(render_float(1.5e-100).unwrap(), "1.5e-100");
    }

    #[test]
    fn test_render_float_non_finite() {
        assert_eq!(render_float(f64::NAN), Err(Fault::InvalidNumber));
        assert_eq!(render_float(f64::INFINITY), Err(Fault::Overflow));
        assert_eq!(render_float(f64::NEG_INFINITY), Err(Fault::Overflow));
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("3.5"), Ok(3.5));
        assert_eq!(parse_float(" -2 "), Ok(-2.0));
        assert_eq!(parse_float("1e3"), Ok(1000.0));
        assert_eq!(parse_float("abc"), Err(Fault::InvalidNumber));
        assert_eq!(parse_float(""), Err(Fault::InvalidNumber));
    }

    #[test]
    fn test_parse_float_rejects_digit_separators() {
        assert_eq!(parse_float("1_000"), Err(Fault::InvalidNumber));
        assert_eq!(parse_float("1,000"), Err(Fault::InvalidNumber));
    }

    #[test]
    fn test_var_name() {
        assert_eq!(var_name("12abc"), Ok("abc"));
        assert_eq!(var_name("x"), Ok("x"));
        assert_eq!(var_name("3.5y+2"), Ok("y+2"));
        assert_eq!(var_name("42"), Err(Fault::NoMatch));
    }

    #[test]
    fn test_coefficient() {
        assert_eq!(coefficient("3.5x+2"), Ok("3.5"));
        assert_eq!(coefficient("2+14x"), Ok("14"));
        assert_eq!(coefficient("x+2"), Ok(""));
        assert_eq!(coefficient("-3x"), Ok("-3"));
        assert_eq!(coefficient("-3.5x+2"), Ok("-3.5"));
        assert_eq!(coefficient("2-4x"), Ok("-4"));
        assert_eq!(coefficient("(3x+1)"), Ok("3"));
        assert_eq!(coefficient("2+3x"), Ok("3"));
        assert_eq!(coefficient("y+2"), Err(Fault::NoMatch));
    }

    #[test]
    fn test_bias() {
        assert_eq!(bias("3x+2"), Ok("2"));
        assert_eq!(bias("(3x + 7)"), Ok("7"));
        assert_eq!(bias("( 4 )+2x"), Ok("4"));
        assert_eq!(bias("3x+2y"), Err(Fault::NoMatch));
        assert_eq!(bias("3x+"), Ok(""));
    }

    #[test]
    fn test_contains_x() {
        assert!(contains_x("3x+2"));
        assert!(!contains_x("y+2"));
    }
}
