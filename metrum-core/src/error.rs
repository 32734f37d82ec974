//! Unit errors
//!
//! Every failure in parsing, algebra, or conversion is a `UnitError`.
//! Callers match on the variant; nothing is retried internally.

use crate::Dimension;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const SYNTAX_ERROR: &str = "SYNTAX_ERROR";
    pub const NO_SUCH_UNIT: &str = "NO_SUCH_UNIT";
    pub const NON_MULTIPLICABLE: &str = "NON_MULTIPLICABLE";
    pub const INCOMPATIBLE: &str = "INCOMPATIBLE_UNITS";
    pub const INVALID_SCALE: &str = "INVALID_SCALE";
    pub const INVALID_ROOT: &str = "INVALID_ROOT";
    pub const EXPONENT_OVERFLOW: &str = "EXPONENT_OVERFLOW";
}

pub type Result<T> = std::result::Result<T, UnitError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// Malformed unit specification
    #[error("syntax error at byte {position}: expected {expected}")]
    Syntax { position: usize, expected: String },

    /// A name or symbol that no database entry, prefix, or exponent suffix resolves
    #[error("no such unit: '{token}'")]
    NoSuchUnit { token: String },

    /// Multiplicative algebra attempted on a unit with an offset
    #[error("cannot {operation} offset unit '{unit}'")]
    NonMultiplicable { unit: String, operation: &'static str },

    #[error("cannot convert {from} ({from_dim}) to {to} ({to_dim}): incompatible dimensions")]
    Incompatible {
        from: String,
        to: String,
        from_dim: Dimension,
        to_dim: Dimension,
    },

    /// Scale factor or offset that is zero, infinite, or NaN
    #[error("invalid scale amount: {value}")]
    InvalidScale { value: f64 },

    #[error("cannot take root {root} of unit '{unit}'")]
    InvalidRoot { unit: String, root: i32 },

    /// A dimension exponent outside the i32 range
    #[error("cannot {operation} '{unit}': dimension exponent out of range")]
    ExponentOverflow { unit: String, operation: &'static str },
}

impl UnitError {
    pub fn syntax(position: usize, expected: impl Into<String>) -> Self {
        UnitError::Syntax { position, expected: expected.into() }
    }

    pub fn no_such_unit(token: impl Into<String>) -> Self {
        UnitError::NoSuchUnit { token: token.into() }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            UnitError::Syntax { .. } => codes::SYNTAX_ERROR,
            UnitError::NoSuchUnit { .. } => codes::NO_SUCH_UNIT,
            UnitError::NonMultiplicable { .. } => codes::NON_MULTIPLICABLE,
            UnitError::Incompatible { .. } => codes::INCOMPATIBLE,
            UnitError::InvalidScale { .. } => codes::INVALID_SCALE,
            UnitError::InvalidRoot { .. } => codes::INVALID_ROOT,
            UnitError::ExponentOverflow { .. } => codes::EXPONENT_OVERFLOW,
        }
    }

    /// True for failures that can only come out of parsing a specification
    pub fn is_parse_error(&self) -> bool {
        matches!(self, UnitError::Syntax { .. } | UnitError::NoSuchUnit { .. })
    }
}
