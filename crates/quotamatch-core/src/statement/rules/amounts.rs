//! Amount location and parsing for Italian statements.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::AMOUNT_PATTERN;

/// Locates Italian-format amounts in normalized statement lines.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }

    /// First amount on a line, if any. Only the first match is used; the
    /// rest of the line is ignored.
    pub fn extract(&self, line: &str) -> Option<Decimal> {
        AMOUNT_PATTERN
            .find(line)
            .and_then(|m| parse_italian_amount(m.as_str()))
    }

    /// All amounts on a line, left to right.
    pub fn extract_all(&self, line: &str) -> Vec<Decimal> {
        AMOUNT_PATTERN
            .find_iter(line)
            .filter_map(|m| parse_italian_amount(m.as_str()))
            .collect()
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an Italian-formatted amount ("1.250,50" -> 1250.50).
///
/// The pattern guarantees exactly one comma and well-formed dot groups, so
/// any string accepted by [`AMOUNT_PATTERN`] parses.
pub fn parse_italian_amount(s: &str) -> Option<Decimal> {
    let normalized = s.replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Format an amount in Italian style (1.234,56).
pub fn format_italian_amount(amount: Decimal) -> String {
    let s = format!("{:.2}", amount);
    let (integer_part, decimal_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_digit() && (chars.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    format!("{},{}", formatted, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_italian_amount() {
        assert_eq!(parse_italian_amount("1.250,50"), Some(dec("1250.50")));
        assert_eq!(parse_italian_amount("25,00"), Some(dec("25.00")));
        assert_eq!(parse_italian_amount("999,99"), Some(dec("999.99")));
        assert_eq!(parse_italian_amount("12.345.678,90"), Some(dec("12345678.90")));
    }

    #[test]
    fn test_extract_first_amount_only() {
        let extractor = AmountExtractor::new();
        assert_eq!(
            extractor.extract("QUOTA 25,00 SALDO 1.250,50"),
            Some(dec("25.00"))
        );
    }

    #[test]
    fn test_extract_all_amounts() {
        let extractor = AmountExtractor::new();
        assert_eq!(
            extractor.extract_all("QUOTA 25,00 SALDO 1.250,50"),
            vec![dec("25.00"), dec("1250.50")]
        );
    }

    #[test]
    fn test_rejects_non_italian_formats() {
        let extractor = AmountExtractor::new();
        // One decimal digit.
        assert_eq!(extractor.extract("SALDO 1234,5"), None);
        // Dot as decimal separator.
        assert_eq!(extractor.extract("TOTALE 25.00"), None);
        assert_eq!(extractor.extract("NESSUN IMPORTO"), None);
    }

    #[test]
    fn test_format_italian_amount() {
        assert_eq!(format_italian_amount(dec("1234.56")), "1.234,56");
        assert_eq!(format_italian_amount(dec("25")), "25,00");
        assert_eq!(format_italian_amount(dec("12345678.90")), "12.345.678,90");
    }
}
