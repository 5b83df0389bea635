use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

const BINARY_SUFFIXES: [&str; 6] = ["Ki", "Mi", "Gi", "Ti", "Pi", "Ei"];
const DECIMAL_SUFFIXES: [&str; 9] = ["n", "u", "m", "k", "M", "G", "T", "P", "E"];

/// Resource quantity in the orchestrator's native syntax (`"500m"`, `"256Mi"`, `"1e3"`).
///
/// The value is only checked for validity and otherwise passed through untouched.
///
/// Grammar:
/// ```text
/// quantity  = [sign] number suffix
/// number    = digits | digits "." [digits] | "." digits
/// suffix    = "" | binary | decimal | ("e" | "E") [sign] digits
/// binary    = Ki | Mi | Gi | Ti | Pi | Ei
/// decimal   = n | u | m | k | M | G | T | P | E
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Quantity(String);

impl Quantity {
    /// Parse and validate a quantity string.
    ///
    /// ```
    /// use wlc_model::Quantity;
    ///
    /// let q = Quantity::new("256Mi").unwrap();
    /// assert_eq!(q.as_str(), "256Mi");
    /// assert!(Quantity::new("lots").is_err());
    /// ```
    pub fn new(raw: impl Into<String>) -> ModelResult<Self> {
        let raw = raw.into();
        validate(&raw).map_err(|reason| ModelError::InvalidQuantity {
            value: raw.clone(),
            reason,
        })?;
        Ok(Self(raw))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate(raw: &str) -> Result<(), &'static str> {
    if raw.is_empty() {
        return Err("empty quantity");
    }
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);

    let number_len = unsigned
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(unsigned.len());
    let (number, suffix) = unsigned.split_at(number_len);

    validate_number(number)?;
    validate_suffix(suffix)
}

fn validate_number(number: &str) -> Result<(), &'static str> {
    if number.is_empty() {
        return Err("missing numeric part");
    }
    let mut parts = number.split('.');
    let int = parts.next().unwrap_or_default();
    let frac = parts.next();
    if parts.next().is_some() {
        return Err("more than one decimal point");
    }
    match frac {
        Some(frac) if int.is_empty() && frac.is_empty() => Err("missing digits around decimal point"),
        _ => Ok(()),
    }
}

fn validate_suffix(suffix: &str) -> Result<(), &'static str> {
    if suffix.is_empty() || BINARY_SUFFIXES.contains(&suffix) || DECIMAL_SUFFIXES.contains(&suffix)
    {
        return Ok(());
    }
    if let Some(exp) = suffix.strip_prefix(['e', 'E']) {
        let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            return Ok(());
        }
        return Err("malformed exponent");
    }
    Err("unknown suffix")
}

impl FromStr for Quantity {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Quantity {
    type Error = ModelError;
    fn try_from(s: String) -> ModelResult<Self> {
        Self::new(s)
    }
}

impl From<Quantity> for String {
    fn from(q: Quantity) -> Self {
        q.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
