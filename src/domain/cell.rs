//! Dynamically typed cell values.
//!
//! SQLite stores every value in one of five storage classes. A cell read from
//! an arbitrary table is kept in that tagged form so that formatting can
//! dispatch on the variant without knowing the schema up front.

use std::fmt;

/// A single value read from a table, tagged by SQLite storage class.
///
/// There is no boolean variant: SQLite has no boolean storage class, so
/// boolean-like columns surface as [`CellValue::Integer`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl CellValue {
    /// Return the text payload, if this is a text cell.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Length of a sized payload: characters for text, bytes for blobs.
    ///
    /// Returns `None` for scalars and nulls, which have no length.
    #[must_use]
    pub fn payload_len(&self) -> Option<usize> {
        match self {
            CellValue::Text(text) => Some(text.chars().count()),
            CellValue::Blob(bytes) => Some(bytes.len()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => f.write_str("NULL"),
            CellValue::Integer(value) => write!(f, "{value}"),
            CellValue::Real(value) => f.write_str(&format_real(*value)),
            CellValue::Text(text) => f.write_str(text),
            CellValue::Blob(bytes) => write!(f, "<blob {} bytes>", bytes.len()),
        }
    }
}

/// Shortest round-trip form with a signed, two-digit exponent (`1e+16`,
/// `1.5e-07`). Whole numbers keep their fractional part (`1.0`).
fn format_real(value: f64) -> String {
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Real(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_native_text_forms() {
        assert_eq!(CellValue::Null.to_string(), "NULL");
        assert_eq!(CellValue::Integer(42).to_string(), "42");
        assert_eq!(CellValue::Real(1.0).to_string(), "1.0");
        assert_eq!(CellValue::Real(2.5).to_string(), "2.5");
        assert_eq!(CellValue::from("Phase 1").to_string(), "Phase 1");
        assert_eq!(CellValue::Blob(vec![1, 2, 3]).to_string(), "<blob 3 bytes>");
    }

    #[test]
    fn reals_use_signed_two_digit_exponents() {
        assert_eq!(CellValue::Real(1e16).to_string(), "1e+16");
        assert_eq!(CellValue::Real(1e-5).to_string(), "1e-05");
        assert_eq!(CellValue::Real(-1.5e-7).to_string(), "-1.5e-07");
        assert_eq!(CellValue::Real(2.5e120).to_string(), "2.5e+120");
        assert_eq!(CellValue::Real(123456.75).to_string(), "123456.75");
        assert_eq!(CellValue::Real(0.0001).to_string(), "0.0001");
    }

    #[test]
    fn payload_len_counts_characters_not_bytes() {
        let cell = CellValue::from("héllo");
        assert_eq!(cell.payload_len(), Some(5));
        assert_eq!(CellValue::Blob(vec![0; 7]).payload_len(), Some(7));
        assert_eq!(CellValue::Integer(7).payload_len(), None);
        assert_eq!(CellValue::Null.payload_len(), None);
    }

    #[test]
    fn option_converts_none_to_null() {
        let cell: CellValue = Option::<i64>::None.into();
        assert!(cell.is_null());
        let cell: CellValue = Some("x").into();
        assert_eq!(cell.as_text(), Some("x"));
    }
}
