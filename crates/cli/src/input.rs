//! Parsing of operator-typed values.
//!
//! Malformed input never reaches the inventory; the session prints a hint and
//! returns to the menu instead.

/// Integer with surrounding whitespace allowed.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Finite number; `inf` and `NaN` parse as floats but are not prices.
pub fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Stock entered together with its unit, e.g. `50 kg` or `12 loose bags`.
///
/// The first word must be an integer; everything after it is the unit.
pub fn parse_stock_with_unit(raw: &str) -> Option<(i64, String)> {
    let (stock, unit) = raw.trim().split_once(char::is_whitespace)?;
    let unit = unit.trim();
    if unit.is_empty() {
        return None;
    }
    Some((stock.parse().ok()?, unit.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_allow_padding_but_not_fractions() {
        assert_eq!(parse_int(" 42 "), Some(42));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("4.0"), None);
        assert_eq!(parse_int("four"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn floats_accept_integers_and_decimals() {
        assert_eq!(parse_float("3"), Some(3.0));
        assert_eq!(parse_float(" 2.75"), Some(2.75));
        assert_eq!(parse_float("cheap"), None);
    }

    #[test]
    fn floats_reject_infinity_and_nan() {
        assert_eq!(parse_float("inf"), None);
        assert_eq!(parse_float("-Infinity"), None);
        assert_eq!(parse_float("NaN"), None);
    }

    #[test]
    fn stock_with_unit_splits_on_first_whitespace() {
        assert_eq!(parse_stock_with_unit("50 kg"), Some((50, "kg".to_string())));
        assert_eq!(
            parse_stock_with_unit("  12   loose bags "),
            Some((12, "loose bags".to_string()))
        );
    }

    #[test]
    fn stock_with_unit_rejects_missing_parts() {
        assert_eq!(parse_stock_with_unit("50"), None);
        assert_eq!(parse_stock_with_unit("50kg"), None);
        assert_eq!(parse_stock_with_unit("kg 50"), None);
        assert_eq!(parse_stock_with_unit(""), None);
    }
}
