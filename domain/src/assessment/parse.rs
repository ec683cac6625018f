//! Permissive text-to-number coercion for form fields.
//!
//! Field text is never rejected. The longest numeric prefix is parsed
//! (`"12abc"` → 12, `".5"` → 0.5, `"3e2kg"` → 300) and anything that does not
//! start with a number, or overflows to a non-finite value, becomes `0.0`.

/// Parse the text of a metric field into a finite value, substituting zero on failure
pub fn parse_metric_value(text: &str) -> f64 {
    numeric_prefix(text.trim_start())
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Render a stored value as field text (`25.0` → `"25"`, `0.5` → `"0.5"`)
pub fn format_metric_value(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Longest prefix matching `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
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
        return "";
    }

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

    &s[..end]
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_metric_value("120"), 120.0);
        assert_eq!(parse_metric_value("25.5"), 25.5);
        assert_eq!(parse_metric_value("0.627"), 0.627);
        assert_eq!(parse_metric_value("-3"), -3.0);
        assert_eq!(parse_metric_value("+7"), 7.0);
    }

    #[test]
    fn test_partial_decimals() {
        assert_eq!(parse_metric_value(".5"), 0.5);
        assert_eq!(parse_metric_value("5."), 5.0);
    }

    #[test]
    fn test_numeric_prefix_wins() {
        assert_eq!(parse_metric_value("12abc"), 12.0);
        assert_eq!(parse_metric_value("  42 years"), 42.0);
        assert_eq!(parse_metric_value("1.2.3"), 1.2);
        assert_eq!(parse_metric_value("3e2kg"), 300.0);
        assert_eq!(parse_metric_value("4e"), 4.0);
        assert_eq!(parse_metric_value("4e+"), 4.0);
    }

    #[test]
    fn test_non_numeric_yields_exactly_zero() {
        for text in ["", " ", "abc", "-", "+", ".", "e5", "NaN", "Infinity", "-inf", "٣"] {
            let value = parse_metric_value(text);
            assert_eq!(value, 0.0, "input {:?}", text);
        }
    }

    #[test]
    fn test_overflow_yields_zero() {
        assert_eq!(parse_metric_value("1e999"), 0.0);
        assert_eq!(parse_metric_value("-1e999"), 0.0);
    }

    #[test]
    fn test_result_is_always_finite() {
        let long = "9".repeat(400);
        let samples = ["0", "1e308", long.as_str(), "--1", "1e-400", "0x10", "½"];
        for text in samples {
            assert!(parse_metric_value(text).is_finite(), "input {:?}", text);
        }
    }

    #[test]
    fn test_format_metric_value() {
        assert_eq!(format_metric_value(25.0), "25");
        assert_eq!(format_metric_value(0.5), "0.5");
        assert_eq!(format_metric_value(-0.0), "0");
        assert_eq!(format_metric_value(120.0), "120");
    }

    #[test]
    fn test_format_then_parse_preserves_value() {
        for value in [1.0, 120.0, 25.0, 0.5, 0.627, 33.6] {
            assert_eq!(parse_metric_value(&format_metric_value(value)), value);
        }
    }
}
