//! Display formatting helpers.
//!
//! Pure `number -> string` functions, never used for comparison.

/// A rate with two fraction digits and a percent sign: `3.54%`.
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// An amount with thousands grouping and exactly two fraction digits:
/// `23,095.22`.
pub fn amount(value: f64) -> String {
    let rendered = format!("{value:.2}");
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_fixes_two_fraction_digits() {
        assert_eq!(percent(3.54), "3.54%");
        assert_eq!(percent(3.0), "3.00%");
        assert_eq!(percent(3.999), "4.00%");
    }

    #[test]
    fn amount_groups_thousands() {
        assert_eq!(amount(23095.22), "23,095.22");
        assert_eq!(amount(21000.0), "21,000.00");
        assert_eq!(amount(1234567.891), "1,234,567.89");
    }

    #[test]
    fn amount_small_values_unchanged() {
        assert_eq!(amount(0.0), "0.00");
        assert_eq!(amount(999.99), "999.99");
        assert_eq!(amount(42.5), "42.50");
    }

    #[test]
    fn amount_negative_keeps_sign_before_groups() {
        assert_eq!(amount(-4551.98), "-4,551.98");
    }
}
