//! Value conversion between dimensionally compatible units

use crate::error::{Result, UnitError};
use crate::Unit;

/// Transforms values expressed in one unit into another.
///
/// `to = ((from * from_factor + from_offset) - to_offset) / to_factor`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converter {
    from_factor: f64,
    from_offset: f64,
    to_factor: f64,
    to_offset: f64,
}

impl Converter {
    fn between(from: &Unit, to: &Unit) -> Result<Self> {
        if !from.is_convertible(to) {
            return Err(UnitError::Incompatible {
                from: from.to_string(),
                to: to.to_string(),
                from_dim: from.dimension(),
                to_dim: to.dimension(),
            });
        }
        Ok(Converter {
            from_factor: from.factor(),
            from_offset: from.offset(),
            to_factor: to.factor(),
            to_offset: to.offset(),
        })
    }

    /// True when the two units share an affine pair and values pass through unchanged
    pub fn is_identity(&self) -> bool {
        self.from_factor == self.to_factor && self.from_offset == self.to_offset
    }

    pub fn apply(&self, value: f64) -> f64 {
        if self.is_identity() {
            return value;
        }
        // value_ref = value * factor + offset
        let reference = value * self.from_factor + self.from_offset;
        (reference - self.to_offset) / self.to_factor
    }

    pub fn apply_slice(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.apply(v)).collect()
    }

    pub fn apply_in_place(&self, values: &mut [f64]) {
        if self.is_identity() {
            return;
        }
        for v in values.iter_mut() {
            *v = self.apply(*v);
        }
    }

    /// The converter running the other way
    pub fn inverse(&self) -> Converter {
        Converter {
            from_factor: self.to_factor,
            from_offset: self.to_offset,
            to_factor: self.from_factor,
            to_offset: self.from_offset,
        }
    }
}

impl Unit {
    /// Converter from values in this unit to values in `to`
    pub fn converter(&self, to: &Unit) -> Result<Converter> {
        Converter::between(self, to)
    }

    /// Convert a value from this unit to another unit
    pub fn convert(&self, value: f64, to: &Unit) -> Result<f64> {
        Ok(self.converter(to)?.apply(value))
    }

    /// Convert a value expressed in `that` unit into this unit
    pub fn to_this(&self, value: f64, that: &Unit) -> Result<f64> {
        that.convert(value, self)
    }

    /// Convert a value expressed in this unit into `that` unit
    pub fn to_that(&self, value: f64, that: &Unit) -> Result<f64> {
        self.convert(value, that)
    }

    pub fn to_this_slice(&self, values: &[f64], that: &Unit) -> Result<Vec<f64>> {
        Ok(that.converter(self)?.apply_slice(values))
    }

    pub fn to_that_slice(&self, values: &[f64], that: &Unit) -> Result<Vec<f64>> {
        Ok(self.converter(that)?.apply_slice(values))
    }
}

/// Convert `value` from one unit to another
pub fn convert(value: f64, from: &Unit, to: &Unit) -> Result<f64> {
    from.convert(value, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::BaseDimension;
    use crate::BaseUnit;

    fn meter() -> Unit {
        BaseUnit::reference(BaseDimension::Length).into()
    }

    fn kilometer() -> Unit {
        meter().scale(1000.0).unwrap()
    }

    fn second() -> Unit {
        BaseUnit::reference(BaseDimension::Time).into()
    }

    fn kelvin() -> Unit {
        BaseUnit::reference(BaseDimension::Temperature).into()
    }

    fn celsius() -> Unit {
        kelvin().shift(273.15).unwrap()
    }

    fn fahrenheit() -> Unit {
        kelvin().scale(1.0 / 1.8).unwrap().shift(459.67).unwrap()
    }

    #[test]
    fn test_unit_conversion() {
        // Convert 5000 m to km
        let converted = meter().convert(5000.0, &kilometer()).unwrap();
        assert_eq!(converted, 5.0);
        assert_eq!(kilometer().convert(5.0, &meter()).unwrap(), 5000.0);
    }

    #[test]
    fn test_celsius_to_kelvin() {
        assert_eq!(convert(0.0, &celsius(), &kelvin()).unwrap(), 273.15);
        assert_eq!(convert(273.15, &kelvin(), &celsius()).unwrap(), 0.0);
    }

    #[test]
    fn test_fahrenheit() {
        let f = fahrenheit();
        let c = celsius();
        assert!((f.convert(32.0, &c).unwrap()).abs() < 1e-9);
        assert!((f.convert(212.0, &c).unwrap() - 100.0).abs() < 1e-9);
        assert!((c.convert(-40.0, &f).unwrap() + 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_incompatible() {
        let err = meter().convert(1.0, &second()).unwrap_err();
        match err {
            UnitError::Incompatible { from, to, .. } => {
                assert_eq!(from, "m");
                assert_eq!(to, "s");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_to_this_to_that() {
        let km = kilometer();
        let m = meter();
        // 3 m expressed in km
        assert_eq!(km.to_this(3000.0, &m).unwrap(), 3.0);
        // 3 km expressed in m
        assert_eq!(km.to_that(3.0, &m).unwrap(), 3000.0);

        let values = km.to_this_slice(&[1000.0, 2500.0], &m).unwrap();
        assert_eq!(values, vec![1.0, 2.5]);
        let values = km.to_that_slice(&[1.0, 2.5], &m).unwrap();
        assert_eq!(values, vec![1000.0, 2500.0]);
    }

    #[test]
    fn test_round_trip_idempotence() {
        let pairs = [
            (meter(), kilometer()),
            (celsius(), fahrenheit()),
            (kelvin(), fahrenheit()),
            (second().scale(60.0).unwrap(), second().scale(3600.0).unwrap()),
        ];
        for (a, b) in &pairs {
            for v in [-1234.5, -1.0, 0.0, 0.25, 98.6, 1.0e6] {
                let there = a.convert(v, b).unwrap();
                let back = b.convert(there, a).unwrap();
                assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0), "{v} via {a} -> {b}");
            }
        }
    }

    #[test]
    fn test_converter() {
        let conv = celsius().converter(&kelvin()).unwrap();
        assert!(!conv.is_identity());
        let mut values = [0.0, 100.0];
        conv.apply_in_place(&mut values);
        assert_eq!(values, [273.15, 373.15]);
        assert_eq!(conv.inverse().apply(273.15), 0.0);

        let same = meter().converter(&meter()).unwrap();
        assert!(same.is_identity());
        assert_eq!(same.apply_slice(&[1.5]), vec![1.5]);
    }
}
