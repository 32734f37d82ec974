//! Parser configuration

use serde::{Deserialize, Serialize};

/// Options accepted by [`crate::UnitParser`]
///
/// Deserializes from partial documents; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Accept juxtaposed terms ("m s") as a product
    pub implicit_multiplication: bool,
    /// Maximum parenthesis nesting
    pub max_depth: usize,
    /// Accept the `@` origin shift
    pub allow_offset: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            implicit_multiplication: true,
            max_depth: 32,
            allow_offset: true,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_implicit_multiplication(mut self, enabled: bool) -> Self {
        self.implicit_multiplication = enabled;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_offset(mut self, enabled: bool) -> Self {
        self.allow_offset = enabled;
        self
    }
}
