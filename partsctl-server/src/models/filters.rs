//! Query-string filters for the parametrized catalog routes

use serde::Serialize;

use super::ValidationError;

/// Colors accepted by the color-set filter
pub const ACCEPTED_COLORS: &[&str] = &["rosso", "verde", "blu"];

/// Color list used when `colori` is absent
pub const DEFAULT_COLOR_LIST: &str = "rosso,verde";

/// Color used when `colore` is absent
pub const DEFAULT_COLOR: &str = "rosso";

/// Supplier name used when `fnome` is absent
pub const DEFAULT_SUPPLIER_NAME: &str = "Acme";

/// Supplier threshold used when `min_fornitori` is absent
pub const DEFAULT_MIN_SUPPLIERS: i64 = 2;

/// Non-empty, whitelisted list of colors, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorSet(Vec<&'static str>);

impl ColorSet {
    /// Parse a comma-separated color list.
    ///
    /// Tokens are trimmed and compared case-sensitively against
    /// [`ACCEPTED_COLORS`]; unknown tokens are dropped, repeats are kept.
    ///
    /// # Example
    /// ```
    /// use partsctl_server::models::ColorSet;
    ///
    /// let set = ColorSet::parse(" blu, giallo ,rosso").unwrap();
    /// assert_eq!(set.as_slice(), &["blu", "rosso"]);
    /// assert!(ColorSet::parse("giallo").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let mut colors: Vec<&'static str> = Vec::new();

        for token in raw.split(',').map(str::trim) {
            if let Some(color) = ACCEPTED_COLORS.iter().find(|c| **c == token) {
                colors.push(*color);
            }
        }

        if colors.is_empty() {
            return Err(ValidationError::NoAcceptedValue {
                field: "colori",
                accepted: ACCEPTED_COLORS,
            });
        }

        Ok(Self(colors))
    }

    pub fn as_slice(&self) -> &[&'static str] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a parsed set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Trimmed query value, or `default` when the parameter is absent.
pub fn trimmed_or(raw: Option<&str>, default: &str) -> String {
    raw.unwrap_or(default).trim().to_string()
}

/// Supplier threshold: lenient integer, default 2, never below 1.
pub fn min_suppliers(raw: Option<&str>) -> i64 {
    raw.map(parse_int_prefix)
        .unwrap_or(DEFAULT_MIN_SUPPLIERS)
        .max(1)
}

/// Parse the leading integer of a query value.
///
/// Leading whitespace and one sign are allowed, parsing stops at the first
/// non-digit, and input without digits yields 0. Overflow saturates.
pub fn parse_int_prefix(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
