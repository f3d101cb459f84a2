//! Locale-independent number formatting for prices and percentages.

/// Two decimals, `,` every three integer digits counted from the decimal point.
///
/// `1234567.5` -> `1,234,567.50`, `-1234.1` -> `-1,234.10`.
/// Non-finite values are returned as Rust prints them.
pub fn format_price(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    if !value.is_finite() {
        return fixed;
    }
    group_thousands(&fixed)
}

/// Two decimals followed by `%`, no grouping: `-20.00%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Insert separators into the integer part of an already formatted number.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let digits = integer.as_bytes();
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit as char);
    }

    match fraction {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integer_part_only() {
        assert_eq!(group_thousands("1234.5678"), "1,234.5678");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("-100000"), "-100,000");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert_eq!(format_price(f64::NAN), "NaN");
        assert_eq!(format_price(f64::INFINITY), "inf");
    }
}
