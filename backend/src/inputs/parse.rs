//! Numeric parsing and fallback normalization
//!
//! Form fields arrive as text. Parsing is lenient the way numeric form
//! input is: surrounding whitespace is ignored and the longest numeric
//! prefix is taken, so `"12abc"` reads as 12. Anything that yields no
//! finite number is invalid and is replaced by the field's fallback.

use tracing::debug;

use super::field::{Field, FieldRole};

/// Parse the longest leading decimal number in `raw`
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Returns `None` when no digits are found or the
/// result is not finite.
///
/// # Example
/// ```
/// use evvgas_core_rs::inputs::parse_number;
///
/// assert_eq!(parse_number(" 3.5 "), Some(3.5));
/// assert_eq!(parse_number("12abc"), Some(12.0));
/// assert_eq!(parse_number("abc"), None);
/// assert_eq!(parse_number(""), None);
/// ```
pub fn parse_number(raw: &str) -> Option<f64> {
    let bytes = raw.trim_start().as_bytes();
    let mut literal = String::with_capacity(bytes.len() + 1);
    let mut i = 0;

    if let Some(&sign @ (b'+' | b'-')) = bytes.first() {
        literal.push(sign as char);
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = &bytes[int_start..i];

    let mut frac_digits: &[u8] = &[];
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = &bytes[frac_start..j];
        i = j;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    literal.push_str(if int_digits.is_empty() { "0" } else { ascii(int_digits) });
    if !frac_digits.is_empty() {
        literal.push('.');
        literal.push_str(ascii(frac_digits));
    }

    // Exponent only counts when at least one digit follows it
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        let sign = match bytes.get(j) {
            Some(&s @ (b'+' | b'-')) => {
                j += 1;
                Some(s as char)
            }
            _ => None,
        };
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            literal.push('e');
            if let Some(s) = sign {
                literal.push(s);
            }
            literal.push_str(ascii(&bytes[exp_start..j]));
        }
    }

    literal.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn ascii(digits: &[u8]) -> &str {
    // Only ASCII digits reach here
    std::str::from_utf8(digits).unwrap_or("0")
}

/// Apply a field's fallback rules to an already-parsed value
///
/// - Cost fields: missing or zero becomes 0.
/// - Divisor fields: missing, zero or subnormal becomes 1, so no metric
///   divides by zero or overflows on a vanishing divisor.
/// - Percentage: missing becomes 0, otherwise clamped to [0, 100].
pub fn normalize_value(field: Field, value: Option<f64>) -> f64 {
    let value = value.filter(|v| v.is_finite());
    match field.role() {
        FieldRole::Percentage => value.map_or(0.0, |v| v.clamp(0.0, 100.0)),
        role @ FieldRole::Divisor => value.filter(|v| v.is_normal()).unwrap_or(role.fallback()),
        role @ FieldRole::Cost => value.filter(|v| *v != 0.0).unwrap_or(role.fallback()),
    }
}

/// Parse and normalize the raw text of a field
///
/// Never fails: invalid input is recovered with the field's fallback and
/// reported at debug level only.
pub fn normalize_field(field: Field, raw: &str) -> f64 {
    let parsed = parse_number(raw);
    let value = normalize_value(field, parsed);
    if parsed != Some(value) {
        debug!(
            field = field.wire_name(),
            raw,
            value,
            "invalid numeric input recovered"
        );
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_number("100"), Some(100.0));
        assert_eq!(parse_number("0.13"), Some(0.13));
        assert_eq!(parse_number("-5"), Some(-5.0));
        assert_eq!(parse_number("+2.5"), Some(2.5));
    }

    #[test]
    fn test_parse_partial_fraction_forms() {
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("-.25"), Some(-0.25));
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("-"), None);
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("2.5E-1"), Some(0.25));
        // Dangling exponent is ignored
        assert_eq!(parse_number("7e"), Some(7.0));
        assert_eq!(parse_number("7e+"), Some(7.0));
    }

    #[test]
    fn test_parse_trailing_garbage() {
        assert_eq!(parse_number("25mpg"), Some(25.0));
        assert_eq!(parse_number("  3.5 dollars"), Some(3.5));
        assert_eq!(parse_number("1,000"), Some(1.0));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert_eq!(parse_number("Infinity"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("1e400"), None);
    }

    #[test]
    fn test_zero_takes_fallback() {
        assert_eq!(normalize_field(Field::Mpg, "0"), 1.0);
        assert_eq!(normalize_field(Field::Mpg, "-0"), 1.0);
        assert_eq!(normalize_field(Field::GasPrice, "0"), 0.0);
    }

    #[test]
    fn test_subnormal_divisor_takes_fallback() {
        assert_eq!(parse_number("1e-320"), Some(1e-320));
        assert_eq!(normalize_field(Field::Mpg, "1e-320"), 1.0);
        assert_eq!(normalize_field(Field::MilesPerKwh, "-4e-310"), 1.0);
        assert_eq!(normalize_field(Field::AnnualMiles, "1e-300"), 1e-300);
        // Costs keep tiny values; nothing divides by them
        assert_eq!(normalize_field(Field::GasPrice, "1e-320"), 1e-320);
    }

    #[test]
    fn test_negative_values_pass_through() {
        assert_eq!(normalize_field(Field::Mpg, "-10"), -10.0);
        assert_eq!(normalize_field(Field::EvRoadTax, "-50"), -50.0);
    }

    #[test]
    fn test_percentage_clamp() {
        assert_eq!(normalize_field(Field::PhevGasPercentage, "150"), 100.0);
        assert_eq!(normalize_field(Field::PhevGasPercentage, "-5"), 0.0);
        assert_eq!(normalize_field(Field::PhevGasPercentage, ""), 0.0);
        assert_eq!(normalize_field(Field::PhevGasPercentage, "33.3"), 33.3);
    }
}
