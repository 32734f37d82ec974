//! Metrum Core - Unit algebra for scientific units
//!
//! Provides the dimension vector, the closed set of unit variants,
//! the algebra over them, and value conversion between compatible units.
//!
//! Unit variants:
//! - Base (one reference unit per base dimension: m, kg, s, A, K, mol, cd, rad, sr, ¤)
//! - Derived (pure products of base units, e.g. m.s-1)
//! - Scaled (factor times a derived unit, e.g. 1000 m)
//! - Offset (scaled unit with a shifted origin, e.g. K @ 273.15)

pub mod dimension;
mod unit;
mod algebra;
mod convert;
mod error;

pub use dimension::{BaseDimension, Dimension};
pub use unit::{BaseUnit, DerivedUnit, ScaledUnit, OffsetUnit, Unit};
pub use convert::{convert, Converter};
pub use error::{codes, Result, UnitError};
