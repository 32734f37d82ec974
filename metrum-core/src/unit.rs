//! Unit representation
//!
//! A unit is one of four variants. Each reduces to a canonical affine pair
//! relative to the base units of its dimension:
//! `reference_value = factor * value + offset`.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::dimension::BaseDimension;
use crate::error::{Result, UnitError};
use crate::Dimension;

/// The reference unit of one base dimension (factor 1, offset 0)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseUnit {
    name: String,
    symbol: String,
    slot: BaseDimension,
}

impl BaseUnit {
    pub fn new(name: &str, symbol: &str, slot: BaseDimension) -> Self {
        BaseUnit {
            name: name.to_string(),
            symbol: symbol.to_string(),
            slot,
        }
    }

    /// The canonical base unit for a slot (meter, kilogram, second, ...)
    pub fn reference(slot: BaseDimension) -> Self {
        BaseUnit::new(slot.unit_name(), slot.unit_symbol(), slot)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn slot(&self) -> BaseDimension {
        self.slot
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::of(self.slot.index())
    }
}

/// A product of base units with no intrinsic scale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedUnit {
    dimension: Dimension,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
}

impl DerivedUnit {
    pub fn new(dimension: Dimension) -> Self {
        DerivedUnit { dimension, identifier: None }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn definition(&self) -> String {
        self.dimension.to_symbols()
    }
}

/// `factor` times a derived unit. The factor is finite and non-zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaledUnit {
    underlying: DerivedUnit,
    factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
}

impl ScaledUnit {
    pub fn underlying(&self) -> &DerivedUnit {
        &self.underlying
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn definition(&self) -> String {
        if self.factor == 1.0 {
            self.underlying.definition()
        } else if self.underlying.dimension.is_dimensionless() {
            format!("{}", self.factor)
        } else {
            format!("{} {}", self.factor, self.underlying.definition())
        }
    }
}

/// A scaled unit whose zero sits at `origin` (in the scaled unit's terms),
/// e.g. degree Celsius is kelvin with origin 273.15.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetUnit {
    underlying: ScaledUnit,
    origin: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
}

impl OffsetUnit {
    pub fn underlying(&self) -> &ScaledUnit {
        &self.underlying
    }

    pub fn origin(&self) -> f64 {
        self.origin
    }

    pub fn definition(&self) -> String {
        let scaled = self.underlying.definition();
        if scaled.contains(' ') {
            format!("({}) @ {}", scaled, self.origin)
        } else {
            format!("{} @ {}", scaled, self.origin)
        }
    }
}

/// A unit of measure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Unit {
    Base(BaseUnit),
    Derived(DerivedUnit),
    Scaled(ScaledUnit),
    Offset(OffsetUnit),
}

impl Unit {
    /// The unit with no dimension and factor 1
    pub fn dimensionless() -> Unit {
        Unit::Derived(DerivedUnit::new(Dimension::DIMENSIONLESS))
    }

    /// Build the simplest variant for an affine pair given as factor and origin.
    ///
    /// A single base slot at factor 1 comes back as that slot's reference base unit.
    pub fn from_affine(dimension: Dimension, factor: f64, origin: f64) -> Result<Unit> {
        if !factor.is_finite() || factor == 0.0 {
            return Err(UnitError::InvalidScale { value: factor });
        }
        if !origin.is_finite() {
            return Err(UnitError::InvalidScale { value: origin });
        }

        let scaled = ScaledUnit {
            underlying: DerivedUnit::new(dimension),
            factor,
            identifier: None,
        };

        if origin != 0.0 {
            return Ok(Unit::Offset(OffsetUnit {
                underlying: scaled,
                origin,
                identifier: None,
            }));
        }
        if factor != 1.0 {
            return Ok(Unit::Scaled(scaled));
        }
        Ok(match dimension.as_base() {
            Some(slot) => Unit::Base(BaseUnit::reference(slot)),
            None => Unit::Derived(scaled.underlying),
        })
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Base(b) => b.dimension(),
            Unit::Derived(d) => d.dimension,
            Unit::Scaled(s) => s.underlying.dimension,
            Unit::Offset(o) => o.underlying.underlying.dimension,
        }
    }

    /// Multiplicative part of the canonical affine pair
    pub fn factor(&self) -> f64 {
        match self {
            Unit::Base(_) | Unit::Derived(_) => 1.0,
            Unit::Scaled(s) => s.factor,
            Unit::Offset(o) => o.underlying.factor,
        }
    }

    /// Additive part of the canonical affine pair, in reference units
    pub fn offset(&self) -> f64 {
        match self {
            Unit::Offset(o) => o.underlying.factor * o.origin,
            _ => 0.0,
        }
    }

    /// Origin in the unit's own scale; zero unless this is an offset unit
    pub(crate) fn origin(&self) -> f64 {
        match self {
            Unit::Offset(o) => o.origin,
            _ => 0.0,
        }
    }

    pub fn has_offset(&self) -> bool {
        matches!(self, Unit::Offset(_))
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension().is_dimensionless()
    }

    /// The name this unit was registered under, if any
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Unit::Base(b) => Some(&b.symbol),
            Unit::Derived(d) => d.identifier.as_deref(),
            Unit::Scaled(s) => s.identifier.as_deref(),
            Unit::Offset(o) => o.identifier.as_deref(),
        }
    }

    /// A copy of this unit that displays as `identifier`
    pub fn with_identifier(&self, identifier: impl Into<String>) -> Unit {
        let identifier = Some(identifier.into());
        match self {
            Unit::Base(b) => Unit::Base(b.clone()),
            Unit::Derived(d) => Unit::Derived(DerivedUnit { identifier, ..d.clone() }),
            Unit::Scaled(s) => Unit::Scaled(ScaledUnit { identifier, ..s.clone() }),
            Unit::Offset(o) => Unit::Offset(OffsetUnit { identifier, ..o.clone() }),
        }
    }

    /// Canonical text, independent of any identifier. Parses back to an equal unit.
    pub fn definition(&self) -> String {
        match self {
            Unit::Base(b) => b.symbol.clone(),
            Unit::Derived(d) => d.definition(),
            Unit::Scaled(s) => s.definition(),
            Unit::Offset(o) => o.definition(),
        }
    }
}

impl From<BaseUnit> for Unit {
    fn from(base: BaseUnit) -> Self {
        Unit::Base(base)
    }
}

/// Units are equal when they share a dimension and an affine pair,
/// whatever their variant or identifier.
impl PartialEq for Unit {
    fn eq(&self, other: &Unit) -> bool {
        self.dimension() == other.dimension()
            && self.factor() == other.factor()
            && self.offset() == other.offset()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.identifier() {
            Some(id) => write!(f, "{}", id),
            None => write!(f, "{}", self.definition()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        BaseUnit::reference(BaseDimension::Length).into()
    }

    #[test]
    fn test_base_unit() {
        let m = meter();
        assert_eq!(m.factor(), 1.0);
        assert_eq!(m.offset(), 0.0);
        assert_eq!(m.dimension(), Dimension::LENGTH);
        assert_eq!(m.to_string(), "m");
    }

    #[test]
    fn test_from_affine_normalizes() {
        let u = Unit::from_affine(Dimension::LENGTH, 1.0, 0.0).unwrap();
        assert!(matches!(u, Unit::Base(_)));

        let u = Unit::from_affine(Dimension::AREA, 1.0, 0.0).unwrap();
        assert!(matches!(u, Unit::Derived(_)));

        let u = Unit::from_affine(Dimension::LENGTH, 1000.0, 0.0).unwrap();
        assert!(matches!(u, Unit::Scaled(_)));

        let u = Unit::from_affine(Dimension::TEMPERATURE, 1.0, 273.15).unwrap();
        assert!(matches!(u, Unit::Offset(_)));
        assert_eq!(u.offset(), 273.15);
    }

    #[test]
    fn test_from_affine_rejects_bad_factor() {
        assert!(Unit::from_affine(Dimension::LENGTH, 0.0, 0.0).is_err());
        assert!(Unit::from_affine(Dimension::LENGTH, f64::INFINITY, 0.0).is_err());
        assert!(Unit::from_affine(Dimension::LENGTH, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_structural_equality() {
        let base = meter();
        let derived = Unit::Derived(DerivedUnit::new(Dimension::LENGTH));
        let scaled = Unit::Scaled(ScaledUnit {
            underlying: DerivedUnit::new(Dimension::LENGTH),
            factor: 1.0,
            identifier: None,
        });
        assert_eq!(base, derived);
        assert_eq!(base, scaled);
        assert_ne!(base, Unit::from_affine(Dimension::LENGTH, 2.0, 0.0).unwrap());
    }

    #[test]
    fn test_definition() {
        let u = Unit::from_affine(Dimension::VELOCITY, 1.0, 0.0).unwrap();
        assert_eq!(u.definition(), "m.s-1");

        let u = Unit::from_affine(Dimension::LENGTH, 1000.0, 0.0).unwrap();
        assert_eq!(u.definition(), "1000 m");

        let u = Unit::from_affine(Dimension::DIMENSIONLESS, 0.01, 0.0).unwrap();
        assert_eq!(u.definition(), "0.01");

        let u = Unit::from_affine(Dimension::TEMPERATURE, 1.0, 273.15).unwrap();
        assert_eq!(u.definition(), "K @ 273.15");

        let u = Unit::from_affine(Dimension::TEMPERATURE, 0.5, 459.67).unwrap();
        assert_eq!(u.definition(), "(0.5 K) @ 459.67");

        assert_eq!(Unit::dimensionless().definition(), "1");
    }

    #[test]
    fn test_identifier_display() {
        let celsius = Unit::from_affine(Dimension::TEMPERATURE, 1.0, 273.15)
            .unwrap()
            .with_identifier("°C");
        assert_eq!(celsius.to_string(), "°C");
        assert_eq!(celsius.definition(), "K @ 273.15");
        assert_eq!(celsius, Unit::from_affine(Dimension::TEMPERATURE, 1.0, 273.15).unwrap());
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&meter()).unwrap();
        assert!(json.contains("\"kind\":\"base\""));
        let back: Unit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, meter());
    }
}
