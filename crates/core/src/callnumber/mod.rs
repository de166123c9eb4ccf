//! Call-number domain: parsing and total ordering.
//!
//! Library call numbers are not plain strings: "KF9" shelves before
//! "KF10", cutter digits read as decimal fractions (".A123" before
//! ".A2"), and a bare class code is the lower edge of everything that
//! shares its prefix. [`CallNumber`] captures the structured value; its
//! derived `Ord` is the shelf-list order.

mod parser;

pub use parser::ParseError;

/// One post-class segment of a call number.
///
/// Derivation order matters: a cutter shelves before an ordinal at the
/// same position, a cutter letter before its digits, and the digit
/// strings compare lexicographically, which is exactly decimal-fraction
/// order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Segment {
    /// A letter plus digits read as a decimal fraction.
    Cutter { letter: char, digits: String },
    /// Year, volume, or copy number; compares numerically.
    Ordinal(u64),
}

/// A parsed call number.
///
/// Field order is comparison priority, so the derived `Ord` implements
/// the full ordering with missing trailing components sorting first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CallNumber {
    class_letters: String,
    class_number: Option<u64>,
    class_decimal: String,
    segments: Vec<Segment>,
}

impl CallNumber {
    /// Parses a call number, normalizing letter case. Separator
    /// characters (".", " ", "-", "/") carry no ordering weight.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser::parse(input)
    }
}

/// True iff `query` falls inclusively between `lower` and `upper` in
/// shelf-list order. Malformed input never fails a lookup; it simply
/// does not match.
pub fn is_within(lower: &str, upper: &str, query: &str) -> bool {
    match (
        CallNumber::parse(lower),
        CallNumber::parse(upper),
        CallNumber::parse(query),
    ) {
        (Ok(lower), Ok(upper), Ok(query)) => lower <= query && query <= upper,
        _ => false,
    }
}
