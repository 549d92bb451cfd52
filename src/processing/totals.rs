//! Order line-item totals, currency formatting, and price parsing.

use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, ProcessingResult};

/// Currency prefix used when callers do not supply one.
pub const DEFAULT_CURRENCY: &str = "$";

/// A single order line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unit price.
    pub price: f64,
    /// Number of units.
    pub quantity: f64,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(price: f64, quantity: f64) -> Self {
        Self { price, quantity }
    }

    /// `price * quantity`.
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity
    }
}

/// Sum of `price * quantity` across `items` (`0.0` for no items).
pub fn calculate_total(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::subtotal).sum()
}

/// Formats `amount` with exactly two decimals, prefixed by `currency`.
///
/// Rounding works on the exact binary value of `amount`, and a tie at the third decimal rounds
/// away from zero, so `0.125` becomes `0.13` while `1.005` (stored as `1.00499...`) becomes `1.00`.
/// Negative zero prints as `0.00`. Magnitudes of `1e21` and above use exponent notation
/// (`1e+21`), and non-finite values print as `NaN` / `Infinity`.
///
/// ```rust
/// use sample_processing::processing::{format_currency, DEFAULT_CURRENCY};
///
/// assert_eq!(format_currency(10.0, DEFAULT_CURRENCY), "$10.00");
/// assert_eq!(format_currency(3.14159, "€"), "€3.14");
/// assert_eq!(format_currency(0.125, DEFAULT_CURRENCY), "$0.13");
/// ```
pub fn format_currency(amount: f64, currency: &str) -> String {
    format!("{currency}{}", to_fixed_2(amount))
}

// Every fractional digit of a finite f64 fits in this many places, so formatting at this
// precision is exact.
const EXACT_FRACTION_DIGITS: usize = 1074;

fn to_fixed_2(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    let (sign, x) = if amount < 0.0 {
        ("-", -amount)
    } else {
        ("", amount.abs())
    };
    if x.is_infinite() {
        return format!("{sign}Infinity");
    }
    if x >= 1e21 {
        return format!("{sign}{}", format!("{x:e}").replacen('e', "e+", 1));
    }

    let exact = format!("{x:.EXACT_FRACTION_DIGITS$}");
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac = frac_part.as_bytes();
    let digit = |i: usize| frac.get(i).copied().unwrap_or(b'0');

    // Integer digits followed by the first two fractional digits, least significant last.
    let mut digits: Vec<u8> = int_part.bytes().chain([digit(0), digit(1)]).collect();
    if digit(2) >= b'5' {
        round_up(&mut digits);
    }

    let split = digits.len() - 2;
    let text: String = digits.iter().map(|&d| char::from(d)).collect();
    format!("{sign}{}.{}", &text[..split], &text[split..])
}

// Adds one unit in the last place to a string of ASCII digits.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Parses a price out of free-form text.
///
/// Every character other than an ASCII digit or `.` is discarded (so signs, currency symbols and
/// thousands separators are ignored), then the longest leading `digits[.digits]` run is parsed.
///
/// ```rust
/// use sample_processing::processing::parse_price;
///
/// assert_eq!(parse_price("$1,234.50").unwrap(), 1234.5);
/// assert_eq!(parse_price("1.2.3").unwrap(), 1.2);
/// assert!(parse_price("free").is_err());
/// ```
pub fn parse_price(raw: &str) -> ProcessingResult<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let prefix = &cleaned[..numeric_prefix_len(&cleaned)];

    if !prefix.bytes().any(|b| b.is_ascii_digit()) {
        return Err(ProcessingError::InvalidPrice {
            raw: raw.to_string(),
        });
    }

    prefix.parse::<f64>().map_err(|_| ProcessingError::InvalidPrice {
        raw: raw.to_string(),
    })
}

// Length of the leading run containing at most one '.'.
fn numeric_prefix_len(s: &str) -> usize {
    let mut seen_dot = false;
    for (i, b) in s.bytes().enumerate() {
        if b == b'.' {
            if seen_dot {
                return i;
            }
            seen_dot = true;
        }
    }
    s.len()
}

#[cfg(test)]
mod tests {
    use super::{calculate_total, format_currency, parse_price, LineItem, DEFAULT_CURRENCY};
    use crate::error::ProcessingError;

    #[test]
    fn total_multiplies_price_by_quantity() {
        let items = vec![LineItem::new(2.5, 4.0), LineItem::new(10.0, 1.0)];
        assert_eq!(calculate_total(&items), 20.0);
        assert_eq!(calculate_total(&[]), 0.0);
    }

    #[test]
    fn currency_has_two_decimals() {
        assert_eq!(format_currency(0.0, DEFAULT_CURRENCY), "$0.00");
        assert_eq!(format_currency(1.5, DEFAULT_CURRENCY), "$1.50");
        assert_eq!(format_currency(-5.0, DEFAULT_CURRENCY), "$-5.00");
        assert_eq!(format_currency(99.999, "USD "), "USD 100.00");
    }

    #[test]
    fn currency_rounds_exact_ties_up() {
        assert_eq!(format_currency(0.125, DEFAULT_CURRENCY), "$0.13");
        assert_eq!(format_currency(1.125, DEFAULT_CURRENCY), "$1.13");
        assert_eq!(format_currency(10.625, DEFAULT_CURRENCY), "$10.63");
        assert_eq!(format_currency(-0.125, DEFAULT_CURRENCY), "$-0.13");
        assert_eq!(format_currency(0.995, DEFAULT_CURRENCY), "$0.99");
        assert_eq!(format_currency(1.005, DEFAULT_CURRENCY), "$1.00");
        assert_eq!(format_currency(9.995, DEFAULT_CURRENCY), "$9.99");
        assert_eq!(format_currency(0.375, DEFAULT_CURRENCY), "$0.38");
    }

    #[test]
    fn currency_signs_and_special_values() {
        assert_eq!(format_currency(-0.0, DEFAULT_CURRENCY), "$0.00");
        assert_eq!(format_currency(-0.001, DEFAULT_CURRENCY), "$-0.00");
        assert_eq!(format_currency(1e21, DEFAULT_CURRENCY), "$1e+21");
        assert_eq!(format_currency(-1.5e22, DEFAULT_CURRENCY), "$-1.5e+22");
        assert_eq!(format_currency(123_456_789.0, DEFAULT_CURRENCY), "$123456789.00");
        assert_eq!(format_currency(f64::NAN, DEFAULT_CURRENCY), "$NaN");
        assert_eq!(format_currency(f64::NEG_INFINITY, DEFAULT_CURRENCY), "$-Infinity");
    }

    #[test]
    fn parse_price_strips_non_numeric_characters() {
        assert_eq!(parse_price("  $ 19.99 ").unwrap(), 19.99);
        assert_eq!(parse_price("1 000").unwrap(), 1000.0);
        assert_eq!(parse_price("-7").unwrap(), 7.0);
        assert_eq!(parse_price(".5").unwrap(), 0.5);
        assert_eq!(parse_price("5.").unwrap(), 5.0);
    }

    #[test]
    fn parse_price_stops_at_second_dot() {
        assert_eq!(parse_price("1.2.3").unwrap(), 1.2);
        assert_eq!(parse_price("v2.0.1").unwrap(), 2.0);
    }

    #[test]
    fn parse_price_rejects_text_without_digits() {
        for raw in ["", ".", "..5", "N/A"] {
            match parse_price(raw) {
                Err(ProcessingError::InvalidPrice { raw: r }) => assert_eq!(r, raw),
                other => panic!("expected InvalidPrice for {raw:?}, got {other:?}"),
            }
        }
    }
}
