//! Unit algebra: products, quotients, powers, roots, scaling and shifting.
//!
//! Offset units do not form a multiplicative group, so every multiplicative
//! operation on one fails with `NonMultiplicable`. Scaling and shifting collapse
//! into a single (factor, origin) layer.

use crate::error::{Result, UnitError};
use crate::Unit;

impl Unit {
    fn require_multiplicable(&self, operation: &'static str) -> Result<()> {
        if self.has_offset() {
            return Err(UnitError::NonMultiplicable {
                unit: self.to_string(),
                operation,
            });
        }
        Ok(())
    }

    fn exponent_overflow(&self, operation: &'static str) -> UnitError {
        UnitError::ExponentOverflow {
            unit: self.to_string(),
            operation,
        }
    }

    /// Multiply two units (e.g., m * m -> m2)
    pub fn multiply(&self, other: &Unit) -> Result<Unit> {
        self.require_multiplicable("multiply")?;
        other.require_multiplicable("multiply")?;

        let dimension = self
            .dimension()
            .multiply(&other.dimension())
            .ok_or_else(|| self.exponent_overflow("multiply"))?;
        Unit::from_affine(dimension, self.factor() * other.factor(), 0.0)
    }

    /// Divide two units (e.g., m / s -> m.s-1)
    pub fn divide(&self, other: &Unit) -> Result<Unit> {
        self.require_multiplicable("divide")?;
        other.require_multiplicable("divide")?;

        let dimension = self
            .dimension()
            .divide(&other.dimension())
            .ok_or_else(|| self.exponent_overflow("divide"))?;
        Unit::from_affine(dimension, self.factor() / other.factor(), 0.0)
    }

    /// Get the inverse unit (e.g., Hz -> s)
    pub fn invert(&self) -> Result<Unit> {
        self.require_multiplicable("invert")?;
        let dimension = self.dimension().invert().ok_or_else(|| self.exponent_overflow("invert"))?;
        Unit::from_affine(dimension, 1.0 / self.factor(), 0.0)
    }

    /// Raise unit to an integer power. `pow(0)` is dimensionless and `pow(1)` is the unit itself.
    pub fn pow(&self, exp: i32) -> Result<Unit> {
        if exp == 1 {
            return Ok(self.clone());
        }
        self.require_multiplicable("raise to a power")?;
        if exp == 0 {
            return Ok(Unit::dimensionless());
        }

        let dimension = self
            .dimension()
            .power(exp)
            .ok_or_else(|| self.exponent_overflow("raise to a power"))?;
        Unit::from_affine(dimension, self.factor().powi(exp), 0.0)
    }

    /// Take the n-th root (e.g., root(m2, 2) -> m). Every exponent must divide evenly.
    pub fn root(&self, n: i32) -> Result<Unit> {
        if n == 1 {
            return Ok(self.clone());
        }
        self.require_multiplicable("take a root of")?;

        let invalid = || UnitError::InvalidRoot {
            unit: self.to_string(),
            root: n,
        };
        let dimension = self.dimension().root(n).ok_or_else(invalid)?;

        let factor = self.factor();
        if factor < 0.0 && n % 2 == 0 {
            return Err(invalid());
        }
        let magnitude = factor.abs().powf(1.0 / f64::from(n));
        let factor = if factor < 0.0 { -magnitude } else { magnitude };

        Unit::from_affine(dimension, factor, 0.0)
    }

    /// Scale this unit by an amount, e.g. `yard = meter.scale(0.9144)`
    pub fn scale(&self, amount: f64) -> Result<Unit> {
        if !amount.is_finite() || amount == 0.0 {
            return Err(UnitError::InvalidScale { value: amount });
        }
        Unit::from_affine(
            self.dimension(),
            self.factor() * amount,
            self.origin() / amount,
        )
    }

    /// Shift the origin of this unit by an amount in its own scale,
    /// e.g. `celsius = kelvin.shift(273.15)`
    pub fn shift(&self, amount: f64) -> Result<Unit> {
        if !amount.is_finite() {
            return Err(UnitError::InvalidScale { value: amount });
        }
        Unit::from_affine(self.dimension(), self.factor(), self.origin() + amount)
    }

    /// The unit with this unit's scale but no offset (degree Celsius -> kelvin)
    pub fn absolute_unit(&self) -> Unit {
        match self {
            Unit::Offset(o) => {
                let scaled = o.underlying();
                Unit::from_affine(scaled.underlying().dimension(), scaled.factor(), 0.0)
                    .unwrap_or_else(|_| Unit::Scaled(scaled.clone()))
            }
            other => other.clone(),
        }
    }

    /// Check if two units are dimensionally compatible (can be converted)
    pub fn is_convertible(&self, other: &Unit) -> bool {
        self.dimension() == other.dimension()
    }
}
