//! Metrum Units - Units database and unit specification parsing
//!
//! Turns text such as "m2.s-1", "(m/s)2", "2 m s" or "K @ 273.15" into
//! [`Unit`] values, resolving names against a [`UnitsDatabase`].
//!
//! Resolution of a single name:
//! - exact symbol (case-sensitive): "m", "Pa", "°C"
//! - exact name (case-insensitive, plurals included): "meter", "Newtons"
//! - SI prefix symbol + symbol: "km", "µs", "dam"
//! - SI prefix name + name: "kilometer", "millibar"
//! - any of the above with a trailing exponent: "s-1", "m2", "m²"

mod builtin;
mod config;
mod database;
pub mod lexer;
mod parser;
pub mod prefix;

pub use config::ParseOptions;
pub use database::{UnitsDatabase, UNITS};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse, parse_with, UnitParser};

pub use metrum_core::{
    codes, convert, BaseDimension, BaseUnit, Converter, DerivedUnit, Dimension, OffsetUnit,
    Result, ScaledUnit, Unit, UnitError,
};
