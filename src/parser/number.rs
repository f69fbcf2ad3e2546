//! Lenient floating-point parsing for KML text content
//!
//! KML producers emit numbers with stray whitespace and trailing junk
//! (`"90 deg"`, `"1.5\n"`). Rather than rejecting those, the longest numeric
//! prefix is used, and text without one becomes `NaN`.

/// Parse the longest decimal prefix of `text`, skipping leading whitespace
///
/// Accepts `[+-]digits[.digits][(e|E)[+-]digits]` and `[+-]Infinity`.
/// Returns `NaN` when no digits are found. Never fails.
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when it has digits: "1e" parses as 1
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_float("90"), 90.0);
        assert_eq!(parse_float("-77.0"), -77.0);
        assert_eq!(parse_float("+38.9"), 38.9);
        assert_eq!(parse_float("1.5e3"), 1500.0);
        assert_eq!(parse_float("2E-2"), 0.02);
    }

    #[test]
    fn test_partial_decimals() {
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("-.25"), -0.25);
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(parse_float("  \n\t100.0\n"), 100.0);
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        assert_eq!(parse_float("12abc"), 12.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("1e+"), 1.0);
        assert_eq!(parse_float("3.25.7"), 3.25);
        assert_eq!(parse_float("4,5"), 4.0);
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("inf").is_nan());
    }

    #[test]
    fn test_non_numeric_is_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("   ").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("NaN").is_nan());
    }
}
