//! Units database: symbols and names mapped to units

use std::collections::HashMap;
use std::sync::LazyLock;
use metrum_core::{Result, Unit};
use crate::prefix;

/// Global database with the built-in units
pub static UNITS: LazyLock<UnitsDatabase> = LazyLock::new(UnitsDatabase::builtin);

/// Registry of units by symbol (case-sensitive) and by name (case-insensitive)
///
/// Read-only once built; shared freely across threads.
#[derive(Debug, Clone)]
pub struct UnitsDatabase {
    symbols: HashMap<String, Unit>,
    /// Keys are lowercase
    names: HashMap<String, Unit>,
    name_prefixes: bool,
}

impl Default for UnitsDatabase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl UnitsDatabase {
    /// An empty database
    pub fn new() -> Self {
        UnitsDatabase {
            symbols: HashMap::new(),
            names: HashMap::new(),
            name_prefixes: true,
        }
    }

    /// A database holding the built-in units
    pub fn builtin() -> Self {
        Self::try_builtin().expect("built-in unit definitions are consistent")
    }

    /// Build the built-in database, surfacing any error in its definitions
    pub fn try_builtin() -> Result<Self> {
        let mut db = Self::new();
        db.register_builtin_units()?;
        Ok(db)
    }

    /// The process-wide built-in database
    pub fn global() -> &'static UnitsDatabase {
        &UNITS
    }

    /// Enable or disable prefix names on unit names ("kilometer")
    pub fn with_name_prefixes(mut self, enabled: bool) -> Self {
        self.name_prefixes = enabled;
        self
    }

    /// Register a unit under names and symbols.
    ///
    /// Each symbol entry carries the symbol as its identifier. Name entries
    /// keep the unit as given. Later registrations replace earlier ones.
    pub fn register(&mut self, names: &[&str], symbols: &[&str], unit: Unit) {
        for symbol in symbols {
            self.put_symbol(symbol, unit.with_identifier(*symbol));
        }
        for name in names {
            self.put_name(name, unit.clone());
        }
    }

    pub(crate) fn put_symbol(&mut self, symbol: &str, unit: Unit) {
        if let Some(previous) = self.symbols.insert(symbol.to_string(), unit) {
            tracing::debug!(symbol, previous = %previous.definition(), "replaced unit symbol");
        }
    }

    pub(crate) fn put_name(&mut self, name: &str, unit: Unit) {
        let key = name.to_lowercase();
        if let Some(previous) = self.names.insert(key, unit) {
            tracing::debug!(name, previous = %previous.definition(), "replaced unit name");
        }
    }

    /// Exact symbol entry
    pub fn get_symbol(&self, symbol: &str) -> Option<&Unit> {
        self.symbols.get(symbol)
    }

    /// Exact name entry, ignoring case
    pub fn get_name(&self, name: &str) -> Option<&Unit> {
        self.names.get(&name.to_lowercase())
    }

    /// Resolve a single token.
    ///
    /// Order: exact symbol, exact name, prefix symbol + symbol,
    /// prefix name + name. Prefixed results have no identifier.
    pub fn lookup(&self, token: &str) -> Option<Unit> {
        if let Some(unit) = self.get_symbol(token) {
            return Some(unit.clone());
        }
        if let Some(unit) = self.get_name(token) {
            return Some(unit.clone());
        }

        for (pfx, rest) in prefix::split_symbol(token) {
            if let Some(unit) = self.get_symbol(rest) {
                tracing::trace!(token, prefix = pfx.text, symbol = rest, "resolved prefixed symbol");
                return unit.scale(pfx.factor).ok();
            }
        }

        if self.name_prefixes {
            for (pfx, rest) in prefix::split_name(token) {
                if let Some(unit) = self.get_name(rest) {
                    tracing::trace!(token, prefix = pfx.text, name = rest, "resolved prefixed name");
                    return unit.scale(pfx.factor).ok();
                }
            }
        }

        None
    }

    /// True when `token` resolves to a unit
    pub fn contains(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }

    /// Number of symbol and name entries
    pub fn len(&self) -> usize {
        self.symbols.len() + self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty() && self.names.is_empty()
    }

    /// All symbol entries
    pub fn symbols(&self) -> impl Iterator<Item = (&str, &Unit)> {
        self.symbols.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All name entries (lowercase keys)
    pub fn names(&self) -> impl Iterator<Item = (&str, &Unit)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parse a unit specification against this database
    pub fn parse(&self, spec: &str) -> Result<Unit> {
        crate::parse_with(spec, self)
    }
}
