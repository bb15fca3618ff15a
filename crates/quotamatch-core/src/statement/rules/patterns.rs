//! Regex patterns for Italian statement lines.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Italian amount format: "." groups thousands, "," separates cents
    // (e.g. 1.250,50 or 25,00).
    pub static ref AMOUNT_PATTERN: Regex = Regex::new(
        r"\d{1,3}(?:\.\d{3})*,\d{2}"
    ).unwrap();
}
