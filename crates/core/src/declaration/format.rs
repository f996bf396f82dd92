//! Quantity formatting for the declaration view.

use rust_decimal::Decimal;

/// Formats a quantity with thousands separators, trimming trailing zero
/// decimals but never below `min_decimals` fractional digits.
///
/// This is display-only: digits beyond the minimum are kept when non-zero,
/// never rounded away.
#[must_use]
pub fn format_quantity(value: Decimal, min_decimals: u32) -> String {
    // Strip trailing zeros, then pad back up to the minimum.
    let mut scaled = value.normalize();
    let scale = scaled.scale().max(min_decimals);
    scaled.rescale(scale);

    let rendered = scaled.to_string();
    let (number, fraction) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered.as_str(), None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let grouped = group_thousands(digits);
    match fraction {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), 2, "0.00")]
    #[case(dec!(100), 2, "100.00")]
    #[case(dec!(1234.5), 2, "1,234.50")]
    #[case(dec!(1234567.50), 2, "1,234,567.50")]
    #[case(dec!(999), 0, "999")]
    #[case(dec!(1000), 0, "1,000")]
    #[case(dec!(123456789), 0, "123,456,789")]
    fn test_thousands_and_padding(
        #[case] value: Decimal,
        #[case] min: u32,
        #[case] expected: &str,
    ) {
        assert_eq!(format_quantity(value, min), expected);
    }

    #[rstest]
    // Trailing zeros trim down to the minimum, never further.
    #[case(dec!(10.500), 1, "10.5")]
    #[case(dec!(10.000), 1, "10.0")]
    // Non-zero precision beyond the minimum is preserved, not rounded.
    #[case(dec!(10.125), 1, "10.125")]
    #[case(dec!(10.120), 1, "10.12")]
    fn test_trimming(#[case] value: Decimal, #[case] min: u32, #[case] expected: &str) {
        assert_eq!(format_quantity(value, min), expected);
    }

    #[test]
    fn test_negative_values_keep_grouping() {
        assert_eq!(format_quantity(dec!(-1234.5), 2), "-1,234.50");
    }
}
