//! Dimensional analysis types
//!
//! Each unit has dimensions represented as a vector of integer exponents
//! over a fixed list of base dimensions:
//! [length, mass, time, current, temperature, amount, luminosity, angle, solid angle, bespoke]

use std::fmt;
use serde::{Serialize, Deserialize};

/// Number of base dimensions
pub const BASE_COUNT: usize = 10;

/// Dimension indices for the base quantities
pub const LENGTH: usize = 0;
pub const MASS: usize = 1;
pub const TIME: usize = 2;
pub const CURRENT: usize = 3;
pub const TEMPERATURE: usize = 4;
pub const AMOUNT: usize = 5;
pub const LUMINOSITY: usize = 6;
pub const ANGLE: usize = 7;
pub const SOLID_ANGLE: usize = 8;
pub const BESPOKE: usize = 9;

/// One slot of the dimension vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    Current,
    Temperature,
    Amount,
    Luminosity,
    Angle,
    SolidAngle,
    /// Named non-physical quantities such as currency
    Bespoke,
}

impl BaseDimension {
    /// All slots in vector order
    pub const ALL: [BaseDimension; BASE_COUNT] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Amount,
        BaseDimension::Luminosity,
        BaseDimension::Angle,
        BaseDimension::SolidAngle,
        BaseDimension::Bespoke,
    ];

    pub fn index(self) -> usize {
        match self {
            BaseDimension::Length => LENGTH,
            BaseDimension::Mass => MASS,
            BaseDimension::Time => TIME,
            BaseDimension::Current => CURRENT,
            BaseDimension::Temperature => TEMPERATURE,
            BaseDimension::Amount => AMOUNT,
            BaseDimension::Luminosity => LUMINOSITY,
            BaseDimension::Angle => ANGLE,
            BaseDimension::SolidAngle => SOLID_ANGLE,
            BaseDimension::Bespoke => BESPOKE,
        }
    }

    /// Name of the reference unit for this slot
    pub fn unit_name(self) -> &'static str {
        match self {
            BaseDimension::Length => "meter",
            BaseDimension::Mass => "kilogram",
            BaseDimension::Time => "second",
            BaseDimension::Current => "ampere",
            BaseDimension::Temperature => "kelvin",
            BaseDimension::Amount => "mole",
            BaseDimension::Luminosity => "candela",
            BaseDimension::Angle => "radian",
            BaseDimension::SolidAngle => "steradian",
            BaseDimension::Bespoke => "bespoke",
        }
    }

    /// Symbol of the reference unit for this slot, as used in canonical text
    pub fn unit_symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Amount => "mol",
            BaseDimension::Luminosity => "cd",
            BaseDimension::Angle => "rad",
            BaseDimension::SolidAngle => "sr",
            BaseDimension::Bespoke => "¤",
        }
    }

    fn label(self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::Current => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::Amount => "N",
            BaseDimension::Luminosity => "J",
            BaseDimension::Angle => "A",
            BaseDimension::SolidAngle => "Ω",
            BaseDimension::Bespoke => "¤",
        }
    }
}

/// Represents the dimensions of a unit
/// as exponents of the base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// [length, mass, time, current, temperature, amount, luminosity, angle, solid angle, bespoke]
    pub exponents: [i32; BASE_COUNT],
}

impl Dimension {
    /// Dimensionless quantity (all exponents zero)
    pub const DIMENSIONLESS: Dimension = Dimension { exponents: [0; BASE_COUNT] };

    /// Length dimension [L]
    pub const LENGTH: Dimension = Dimension::of(LENGTH);

    /// Mass dimension [M]
    pub const MASS: Dimension = Dimension::of(MASS);

    /// Time dimension [T]
    pub const TIME: Dimension = Dimension::of(TIME);

    /// Electric current dimension [I]
    pub const CURRENT: Dimension = Dimension::of(CURRENT);

    /// Temperature dimension [Θ]
    pub const TEMPERATURE: Dimension = Dimension::of(TEMPERATURE);

    /// Amount of substance dimension [N]
    pub const AMOUNT: Dimension = Dimension::of(AMOUNT);

    /// Luminous intensity dimension [J]
    pub const LUMINOSITY: Dimension = Dimension::of(LUMINOSITY);

    /// Plane angle dimension [A]
    pub const ANGLE: Dimension = Dimension::of(ANGLE);

    /// Solid angle dimension [Ω]
    pub const SOLID_ANGLE: Dimension = Dimension::of(SOLID_ANGLE);

    /// Velocity [L T^-1]
    pub const VELOCITY: Dimension = Dimension { exponents: [1, 0, -1, 0, 0, 0, 0, 0, 0, 0] };

    /// Acceleration [L T^-2]
    pub const ACCELERATION: Dimension = Dimension { exponents: [1, 0, -2, 0, 0, 0, 0, 0, 0, 0] };

    /// Force [M L T^-2]
    pub const FORCE: Dimension = Dimension { exponents: [1, 1, -2, 0, 0, 0, 0, 0, 0, 0] };

    /// Energy [M L^2 T^-2]
    pub const ENERGY: Dimension = Dimension { exponents: [2, 1, -2, 0, 0, 0, 0, 0, 0, 0] };

    /// Power [M L^2 T^-3]
    pub const POWER: Dimension = Dimension { exponents: [2, 1, -3, 0, 0, 0, 0, 0, 0, 0] };

    /// Pressure [M L^-1 T^-2]
    pub const PRESSURE: Dimension = Dimension { exponents: [-1, 1, -2, 0, 0, 0, 0, 0, 0, 0] };

    /// Area [L^2]
    pub const AREA: Dimension = Dimension { exponents: [2, 0, 0, 0, 0, 0, 0, 0, 0, 0] };

    /// Volume [L^3]
    pub const VOLUME: Dimension = Dimension { exponents: [3, 0, 0, 0, 0, 0, 0, 0, 0, 0] };

    /// Frequency [T^-1]
    pub const FREQUENCY: Dimension = Dimension { exponents: [0, 0, -1, 0, 0, 0, 0, 0, 0, 0] };

    /// Electric charge [I T]
    pub const CHARGE: Dimension = Dimension { exponents: [0, 0, 1, 1, 0, 0, 0, 0, 0, 0] };

    /// Voltage [M L^2 T^-3 I^-1]
    pub const VOLTAGE: Dimension = Dimension { exponents: [2, 1, -3, -1, 0, 0, 0, 0, 0, 0] };

    /// Create a new dimension from exponents
    pub fn new(exponents: [i32; BASE_COUNT]) -> Self {
        Dimension { exponents }
    }

    /// The dimension of a single base slot raised to the first power
    pub const fn of(slot: usize) -> Dimension {
        let mut exponents = [0; BASE_COUNT];
        exponents[slot] = 1;
        Dimension { exponents }
    }

    /// Check if this is a dimensionless quantity
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// The base slot this dimension consists of, if it is exactly one slot to the first power
    pub fn as_base(&self) -> Option<BaseDimension> {
        let mut found = None;
        for (slot, &exp) in BaseDimension::ALL.iter().zip(self.exponents.iter()) {
            match exp {
                0 => {}
                1 if found.is_none() => found = Some(*slot),
                _ => return None,
            }
        }
        found
    }

    /// Combine exponents pairwise; `None` if any exponent leaves the i32 range
    fn zip_with(&self, other: &Dimension, op: fn(i32, i32) -> Option<i32>) -> Option<Dimension> {
        let mut result = [0i32; BASE_COUNT];
        for i in 0..BASE_COUNT {
            result[i] = op(self.exponents[i], other.exponents[i])?;
        }
        Some(Dimension { exponents: result })
    }

    /// Multiply dimensions (add exponents). `None` on exponent overflow.
    pub fn multiply(&self, other: &Dimension) -> Option<Dimension> {
        self.zip_with(other, i32::checked_add)
    }

    /// Divide dimensions (subtract exponents). `None` on exponent overflow.
    pub fn divide(&self, other: &Dimension) -> Option<Dimension> {
        self.zip_with(other, i32::checked_sub)
    }

    /// Raise to integer power (multiply exponents). `None` on exponent overflow.
    pub fn power(&self, exp: i32) -> Option<Dimension> {
        let mut result = [0i32; BASE_COUNT];
        for i in 0..BASE_COUNT {
            result[i] = self.exponents[i].checked_mul(exp)?;
        }
        Some(Dimension { exponents: result })
    }

    /// Invert dimensions (negate exponents)
    pub fn invert(&self) -> Option<Dimension> {
        self.power(-1)
    }

    /// Take the n-th root. `None` unless every exponent divides evenly.
    pub fn root(&self, n: i32) -> Option<Dimension> {
        let mut result = [0i32; BASE_COUNT];
        for i in 0..BASE_COUNT {
            if self.exponents[i].checked_rem(n)? != 0 {
                return None;
            }
            result[i] = self.exponents[i].checked_div(n)?;
        }
        Some(Dimension { exponents: result })
    }

    /// Render as a product of base unit symbols, e.g. `m2.s-1`.
    /// Dimensionless renders as `1`.
    pub fn to_symbols(&self) -> String {
        let mut parts = Vec::new();
        for (slot, &exp) in BaseDimension::ALL.iter().zip(self.exponents.iter()) {
            match exp {
                0 => {}
                1 => parts.push(slot.unit_symbol().to_string()),
                _ => parts.push(format!("{}{}", slot.unit_symbol(), exp)),
            }
        }
        if parts.is_empty() {
            "1".to_string()
        } else {
            parts.join(".")
        }
    }

    /// Get the dimension name if it matches a common dimension
    pub fn name(&self) -> Option<&'static str> {
        match self.exponents {
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0] => Some("dimensionless"),
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0] => Some("length"),
            [0, 1, 0, 0, 0, 0, 0, 0, 0, 0] => Some("mass"),
            [0, 0, 1, 0, 0, 0, 0, 0, 0, 0] => Some("time"),
            [0, 0, 0, 1, 0, 0, 0, 0, 0, 0] => Some("current"),
            [0, 0, 0, 0, 1, 0, 0, 0, 0, 0] => Some("temperature"),
            [0, 0, 0, 0, 0, 1, 0, 0, 0, 0] => Some("amount"),
            [0, 0, 0, 0, 0, 0, 1, 0, 0, 0] => Some("luminosity"),
            [0, 0, 0, 0, 0, 0, 0, 1, 0, 0] => Some("angle"),
            [0, 0, 0, 0, 0, 0, 0, 0, 1, 0] => Some("solid angle"),
            [1, 0, -1, 0, 0, 0, 0, 0, 0, 0] => Some("velocity"),
            [1, 0, -2, 0, 0, 0, 0, 0, 0, 0] => Some("acceleration"),
            [1, 1, -2, 0, 0, 0, 0, 0, 0, 0] => Some("force"),
            [2, 1, -2, 0, 0, 0, 0, 0, 0, 0] => Some("energy"),
            [2, 1, -3, 0, 0, 0, 0, 0, 0, 0] => Some("power"),
            [-1, 1, -2, 0, 0, 0, 0, 0, 0, 0] => Some("pressure"),
            [2, 0, 0, 0, 0, 0, 0, 0, 0, 0] => Some("area"),
            [3, 0, 0, 0, 0, 0, 0, 0, 0, 0] => Some("volume"),
            [0, 0, -1, 0, 0, 0, 0, 0, 0, 0] => Some("frequency"),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        for (slot, &exp) in BaseDimension::ALL.iter().zip(self.exponents.iter()) {
            if exp != 0 {
                if exp == 1 {
                    parts.push(slot.label().to_string());
                } else {
                    parts.push(format!("{}^{}", slot.label(), exp));
                }
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}
