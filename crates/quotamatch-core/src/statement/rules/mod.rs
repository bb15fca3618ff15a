//! Rule-based extraction for statement lines.

pub mod amounts;
pub mod patterns;

pub use amounts::{format_italian_amount, parse_italian_amount, AmountExtractor};
pub use patterns::AMOUNT_PATTERN;
