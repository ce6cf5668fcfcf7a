// src/common/format.rs

use rust_decimal::{Decimal, RoundingStrategy};

// Arredonda para inteiro (meio para o par) e agrupa os milhares com vírgula.
// Ex: 12345.6 -> "12,346"; -1234 -> "-1,234"
pub fn format_grouped_integer(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn groups_thousands_without_fraction() {
        assert_eq!(format_grouped_integer(dec("12345.6")), "12,346");
        assert_eq!(format_grouped_integer(dec("1234567")), "1,234,567");
        assert_eq!(format_grouped_integer(dec("999")), "999");
        assert_eq!(format_grouped_integer(dec("0")), "0");
    }

    #[test]
    fn rounds_half_to_even() {
        assert_eq!(format_grouped_integer(dec("2.5")), "2");
        assert_eq!(format_grouped_integer(dec("3.5")), "4");
        assert_eq!(format_grouped_integer(dec("1000.50")), "1,000");
    }

    #[test]
    fn keeps_sign() {
        assert_eq!(format_grouped_integer(dec("-1234.4")), "-1,234");
        assert_eq!(format_grouped_integer(dec("-0.4")), "0");
    }
}
