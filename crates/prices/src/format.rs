//! Display formatting for the stats banner.

/// US-dollar amount with thousands separators.
///
/// Prices under one dollar get four fraction digits, everything else two.
pub fn format_usd(price: f64) -> String {
    let digits = if price.abs() < 1.0 { 4 } else { 2 };
    let fixed = format!("{:.*}", digits, price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let sign = if price < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// Percentage with two fraction digits, e.g. `-3.15%`.
pub fn format_percentage(pct: f64) -> String {
    format!("{pct:.2}%")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_prices_get_separators() {
        assert_eq!(format_usd(64_231.456), "$64,231.46");
        assert_eq!(format_usd(1_234_567.0), "$1,234,567.00");
        assert_eq!(format_usd(999.999), "$1,000.00");
    }

    #[test]
    fn small_prices_get_four_digits() {
        assert_eq!(format_usd(0.123_456), "$0.1235");
        assert_eq!(format_usd(0.0), "$0.0000");
    }

    #[test]
    fn one_dollar_uses_two_digits() {
        assert_eq!(format_usd(1.0), "$1.00");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_usd(-1500.5), "-$1,500.50");
    }

    #[test]
    fn percentage_two_digits() {
        assert_eq!(format_percentage(2.345_67), "2.35%");
        assert_eq!(format_percentage(-0.5), "-0.50%");
        assert_eq!(format_percentage(0.0), "0.00%");
    }
}
