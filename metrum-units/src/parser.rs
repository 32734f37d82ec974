//! Unit specification parsing - "m2.s-1", "(m/s)2", "2 m s", "K @ 273.15"
//!
//! Grammar:
//!
//! ```text
//! spec     := coefficient? product shift? | <empty>
//! product  := term (('.' | '/' | juxtaposition) term)*
//! term     := factor exponent?
//! factor   := name | number | '(' spec ')'
//! exponent := '^' '-'? integer | <unspaced> '-'? integer
//! shift    := '@' '-'? number
//! ```
//!
//! Products and quotients associate left to right and '/' takes only the
//! next term: "m2/s-1.K" is (m2 / s-1) . K. A leading coefficient must be
//! followed by whitespace ("2 m", never "2m").

use metrum_core::{Result, Unit, UnitError};
use crate::config::ParseOptions;
use crate::lexer::{superscript_digit, tokenize, Token, TokenKind};
use crate::UnitsDatabase;

const FACTOR_START: &str = "unit name, number, or '('";

/// Parse a unit specification against the global database
pub fn parse(spec: &str) -> Result<Unit> {
    parse_with(spec, UnitsDatabase::global())
}

/// Parse a unit specification against a specific database
pub fn parse_with(spec: &str, db: &UnitsDatabase) -> Result<Unit> {
    UnitParser::new(db).parse(spec)
}

/// Reusable parser bound to a database and a set of options
#[derive(Debug, Clone)]
pub struct UnitParser<'a> {
    db: &'a UnitsDatabase,
    options: ParseOptions,
}

impl<'a> UnitParser<'a> {
    pub fn new(db: &'a UnitsDatabase) -> Self {
        Self {
            db,
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn parse(&self, spec: &str) -> Result<Unit> {
        tracing::trace!(spec, "parsing unit specification");

        let mut state = ParseState {
            tokens: tokenize(spec),
            pos: 0,
            depth: 0,
            db: self.db,
            options: &self.options,
        };
        let result = state.parse_top();
        if let Err(err) = &result {
            tracing::debug!(spec, error = %err, "rejected unit specification");
        }
        result
    }
}

struct ParseState<'p> {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    db: &'p UnitsDatabase,
    options: &'p ParseOptions,
}

impl ParseState<'_> {
    fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    /// Token `ahead` positions on; sticks at `Eof`
    fn peek_at(&self, ahead: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + ahead).min(last)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn parse_top(&mut self) -> Result<Unit> {
        if self.peek().kind == TokenKind::Eof {
            return Ok(Unit::dimensionless());
        }
        let unit = self.parse_spec()?;
        let token = self.peek();
        if token.kind != TokenKind::Eof {
            return Err(UnitError::syntax(token.pos, "end of specification"));
        }
        Ok(unit)
    }

    fn parse_spec(&mut self) -> Result<Unit> {
        let unit = match self.leading_coefficient()? {
            Some(coefficient) => {
                let unit = if self.at_product_end() {
                    Unit::dimensionless()
                } else {
                    self.parse_product()?
                };
                unit.scale(coefficient)?
            }
            None => self.parse_product()?,
        };

        if self.peek().kind == TokenKind::At {
            return self.parse_shift(unit);
        }
        Ok(unit)
    }

    fn at_product_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof | TokenKind::RParen | TokenKind::At)
    }

    /// A number heading a spec and followed by a unit or by nothing.
    /// "1/s" and "10^3 m" start with a plain factor instead.
    fn leading_coefficient(&mut self) -> Result<Option<f64>> {
        let negative = self.peek().kind == TokenKind::Minus;
        let number_at = usize::from(negative);
        let &TokenKind::Number(value) = &self.peek_at(number_at).kind else {
            return Ok(None);
        };

        let next = self.peek_at(number_at + 1);
        match next.kind {
            TokenKind::Eof | TokenKind::RParen | TokenKind::At => {}
            TokenKind::Name(_) | TokenKind::Number(_) | TokenKind::LParen => {
                if !next.spaced {
                    return Err(UnitError::syntax(next.pos, "whitespace after numeric coefficient"));
                }
            }
            _ => return Ok(None),
        }

        self.pos += number_at + 1;
        Ok(Some(if negative { -value } else { value }))
    }

    fn parse_product(&mut self) -> Result<Unit> {
        let mut unit = self.parse_term()?;

        loop {
            let token = self.peek().clone();
            match token.kind {
                TokenKind::Dot => {
                    self.advance();
                    unit = unit.multiply(&self.parse_term()?)?;
                }
                TokenKind::Slash => {
                    self.advance();
                    unit = unit.divide(&self.parse_term()?)?;
                }
                TokenKind::Name(_) | TokenKind::Number(_) | TokenKind::LParen => {
                    if !self.options.implicit_multiplication {
                        return Err(UnitError::syntax(token.pos, "'.' or '/' between units"));
                    }
                    unit = unit.multiply(&self.parse_term()?)?;
                }
                _ => return Ok(unit),
            }
        }
    }

    fn parse_term(&mut self) -> Result<Unit> {
        let unit = self.parse_factor()?;
        match self.parse_exponent()? {
            Some(exponent) => unit.pow(exponent),
            None => Ok(unit),
        }
    }

    fn parse_factor(&mut self) -> Result<Unit> {
        let token = self.advance();
        match token.kind {
            TokenKind::Name(name) => self.resolve(&name),
            TokenKind::Number(value) => Unit::dimensionless().scale(value),
            TokenKind::LParen => {
                if self.depth >= self.options.max_depth {
                    return Err(UnitError::syntax(
                        token.pos,
                        format!("at most {} nested parentheses", self.options.max_depth),
                    ));
                }
                if self.peek().kind == TokenKind::RParen {
                    return Err(UnitError::syntax(self.peek().pos, FACTOR_START));
                }

                self.depth += 1;
                let unit = self.parse_spec()?;
                self.depth -= 1;

                let close = self.advance();
                if close.kind != TokenKind::RParen {
                    return Err(UnitError::syntax(close.pos, "')'"));
                }
                Ok(unit)
            }
            _ => Err(UnitError::syntax(token.pos, FACTOR_START)),
        }
    }

    fn parse_exponent(&mut self) -> Result<Option<i32>> {
        let token = self.peek();
        let caret = match token.kind {
            TokenKind::Caret => true,
            TokenKind::Number(_) if !token.spaced => false,
            TokenKind::Minus if !token.spaced => {
                let next = self.peek_at(1);
                if !matches!(next.kind, TokenKind::Number(_)) || next.spaced {
                    return Ok(None);
                }
                false
            }
            _ => return Ok(None),
        };

        if caret {
            self.advance();
        }
        self.parse_integer().map(Some)
    }

    fn parse_integer(&mut self) -> Result<i32> {
        let negative = self.peek().kind == TokenKind::Minus;
        if negative {
            self.advance();
        }

        let token = self.advance();
        match token.kind {
            TokenKind::Number(value) if value.fract() != 0.0 => {
                Err(UnitError::syntax(token.pos, "integer exponent"))
            }
            TokenKind::Number(value) if value > f64::from(i32::MAX) => Err(UnitError::syntax(
                token.pos,
                format!("exponent of at most {} in magnitude", i32::MAX),
            )),
            TokenKind::Number(value) => {
                let magnitude = value as i32;
                Ok(if negative { -magnitude } else { magnitude })
            }
            _ => Err(UnitError::syntax(token.pos, "integer exponent")),
        }
    }

    fn parse_shift(&mut self, unit: Unit) -> Result<Unit> {
        let at = self.advance();
        if !self.options.allow_offset {
            return Err(UnitError::syntax(at.pos, "end of specification (origin shifts are disabled)"));
        }

        let negative = self.peek().kind == TokenKind::Minus;
        if negative {
            self.advance();
        }
        let token = self.advance();
        match token.kind {
            TokenKind::Number(value) => unit.shift(if negative { -value } else { value }),
            _ => Err(UnitError::syntax(token.pos, "number after '@'")),
        }
    }

    /// Database lookup, then the same lookup with a trailing exponent stripped
    fn resolve(&self, name: &str) -> Result<Unit> {
        if let Some(unit) = self.db.lookup(name) {
            return Ok(unit);
        }
        if let Some((stem, exponent)) = split_exponent_suffix(name) {
            if let Some(unit) = self.db.lookup(stem) {
                tracing::trace!(name, stem, exponent, "resolved unit with exponent suffix");
                return unit.pow(exponent);
            }
        }
        Err(UnitError::no_such_unit(name))
    }
}

fn ascii_digit(c: char) -> Option<u32> {
    c.to_digit(10)
}

/// Split "s-1" into ("s", -1) and "m²" into ("m", 2)
fn split_exponent_suffix(name: &str) -> Option<(&str, i32)> {
    let forms: [(fn(char) -> Option<u32>, char); 2] =
        [(ascii_digit, '-'), (superscript_digit, '⁻')];

    for (digit, minus) in forms {
        let stem = name.trim_end_matches(|c: char| digit(c).is_some());
        if stem.len() == name.len() {
            continue;
        }
        let magnitude = name[stem.len()..].chars().try_fold(0i32, |acc: i32, c: char| {
            acc.checked_mul(10)?.checked_add(i32::try_from(digit(c)?).ok()?)
        })?;
        let (stem, exponent) = match stem.strip_suffix(minus) {
            Some(stem) => (stem, -magnitude),
            None => (stem, magnitude),
        };
        return (!stem.is_empty()).then_some((stem, exponent));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrum_core::{convert, BaseDimension, BaseUnit, Dimension};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-12 * expected.abs().max(1.0),
            "{actual} != {expected}"
        );
    }

    #[test]
    fn test_parse_simple() {
        let unit = parse("m").unwrap();
        assert!(matches!(unit, Unit::Base(_)));
        assert_eq!(unit.dimension(), Dimension::LENGTH);
        assert_eq!(unit.factor(), 1.0);
        assert_eq!(unit.to_string(), "m");
    }

    #[test]
    fn test_parse_coefficient_and_juxtaposition() {
        let unit = parse("2 m s").unwrap();
        assert_eq!(unit.factor(), 2.0);
        assert_eq!(Some(unit.dimension()), Dimension::LENGTH.multiply(&Dimension::TIME));
        assert_eq!(unit.to_string(), "2 m.s");
    }

    #[test]
    fn test_parse_embedded_exponents() {
        let unit = parse("m2.s-1").unwrap();
        assert_eq!(Some(unit.dimension()), Dimension::AREA.divide(&Dimension::TIME));
        assert_eq!(unit.factor(), 1.0);
        assert_eq!(unit.to_string(), "m2.s-1");
    }

    #[test]
    fn test_parse_group_power() {
        assert_eq!(parse("(m/s)2").unwrap(), parse("m2/s2").unwrap());
        assert_eq!(parse("(m/s)^2").unwrap(), parse("m^2/s^2").unwrap());
        assert_eq!(parse("(m/s)-1").unwrap(), parse("s/m").unwrap());
    }

    #[test]
    fn test_parse_dimensionless_ratio() {
        let unit = parse("g/kg").unwrap();
        assert!(unit.is_dimensionless());
        assert_eq!(unit.factor(), 0.001);
    }

    #[test]
    fn test_unknown_unit() {
        let err = parse("unknown unit").unwrap_err();
        assert_eq!(err, UnitError::NoSuchUnit { token: "unknown".to_string() });
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_celsius_to_kelvin() {
        let celsius = parse("celsius").unwrap();
        let kelvin = parse("K").unwrap();
        assert_eq!(convert(0.0, &celsius, &kelvin).unwrap(), 273.15);
        assert_eq!(parse("°C").unwrap(), celsius);
    }

    #[test]
    fn test_every_entry_round_trips() {
        let db = UnitsDatabase::global();
        for (key, unit) in db.symbols().chain(db.names()) {
            for text in [unit.to_string(), unit.definition()] {
                let back = parse(&text).unwrap_or_else(|e| panic!("{key}: '{text}': {e}"));
                assert_eq!(back, *unit, "{key}: '{text}'");
            }
        }
    }

    #[test]
    fn test_definitions_round_trip() {
        for spec in ["2 m s", "m2.s-1", "(m/s)-2", "1/s", "K @ 273.15", "-3 rad", "1e-3 m3"] {
            let unit = parse(spec).unwrap();
            assert_eq!(parse(&unit.definition()).unwrap(), unit, "{spec}");
        }
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(parse("km").unwrap().factor(), 1000.0);
        assert_close(parse("mg").unwrap().factor(), 1e-6);
        assert_eq!(parse("dam").unwrap().factor(), 10.0);
        assert_eq!(parse("ms").unwrap().dimension(), Dimension::TIME);
        assert_close(parse("ms").unwrap().factor(), 1e-3);
        assert_close(parse("µs").unwrap().factor(), 1e-6);
        assert_close(parse("us").unwrap().factor(), 1e-6);
        assert_eq!(parse("kWh").unwrap().dimension(), Dimension::ENERGY);

        let mm2 = parse("mm2").unwrap();
        assert_eq!(mm2.dimension(), Dimension::AREA);
        assert_close(mm2.factor(), 1e-6);
    }

    #[test]
    fn test_exact_symbol_beats_prefix() {
        let cd = parse("cd").unwrap();
        assert_eq!(cd.dimension(), Dimension::LUMINOSITY);
        assert_eq!(parse("min").unwrap().factor(), 60.0);
        assert_eq!(parse("Pa").unwrap().dimension(), Dimension::PRESSURE);
        assert_eq!(parse("Pa").unwrap().factor(), 1.0);
    }

    #[test]
    fn test_case_rules() {
        assert_eq!(parse("Kg").unwrap_err(), UnitError::no_such_unit("Kg"));
        assert_eq!(parse("METER").unwrap(), parse("m").unwrap());
        assert_eq!(parse("Newtons").unwrap(), parse("N").unwrap());
        assert!(parse("M").is_err());
    }

    #[test]
    fn test_prefixed_names() {
        assert_eq!(parse("kilometers").unwrap().factor(), 1000.0);
        assert_close(parse("Millibar").unwrap().factor(), 100.0);

        let db = UnitsDatabase::builtin().with_name_prefixes(false);
        assert!(parse_with("kilometer", &db).is_err());
        assert!(parse_with("km", &db).is_ok());
    }

    #[test]
    fn test_names_with_digits() {
        let mut db = UnitsDatabase::new();
        let m: Unit = BaseUnit::reference(BaseDimension::Length).into();
        let co2 = Unit::from(BaseUnit::reference(BaseDimension::Bespoke)).scale(44.01).unwrap();
        db.register(&["meter"], &["m"], m);
        db.register(&["carbon_dioxide"], &["CO2"], co2);

        let unit = parse_with("CO2", &db).unwrap();
        assert_eq!(unit.factor(), 44.01);
        assert_eq!(unit.to_string(), "CO2");

        let flux = parse_with("CO2.m-2", &db).unwrap();
        assert_eq!(
            Some(flux.dimension()),
            Dimension::of(BaseDimension::Bespoke.index()).divide(&Dimension::AREA)
        );
        assert_close(parse_with("CO2^2", &db).unwrap().factor(), 44.01 * 44.01);

        let water = parse("cm H2O").unwrap();
        assert_eq!(water.dimension(), Dimension::PRESSURE);
        assert_close(water.factor(), 98.0665);
    }

    #[test]
    fn test_superscript_exponents() {
        assert_eq!(parse("m²").unwrap(), parse("m2").unwrap());
        assert_eq!(parse("s⁻¹").unwrap(), parse("Hz").unwrap());
        assert_eq!(parse("km³").unwrap().dimension(), Dimension::VOLUME);
    }

    #[test]
    fn test_division_takes_next_term() {
        let unit = parse("m2/s-1").unwrap();
        assert_eq!(Some(unit.dimension()), Dimension::AREA.multiply(&Dimension::TIME));

        let unit = parse("m2/s-1.K").unwrap();
        assert_eq!(
            Some(unit.dimension()),
            Dimension::AREA
                .multiply(&Dimension::TIME)
                .and_then(|d| d.multiply(&Dimension::TEMPERATURE))
        );

        let unit = parse("kg/m/s").unwrap();
        assert_eq!(unit, parse("kg.m-1.s-1").unwrap());
    }

    #[test]
    fn test_exponent_overflow_is_an_error() {
        for spec in ["m^2147483647.m", "m^2147483647 m", "m2^2000000000", "(m^-2147483647)/m.s/m"] {
            let err = parse(spec).unwrap_err();
            assert!(matches!(err, UnitError::ExponentOverflow { .. }), "{spec}: {err}");
        }
        assert_eq!(parse("m^2147483647").unwrap().dimension().exponents[0], i32::MAX);

        let err = parse("m^2147483648").unwrap_err();
        assert!(matches!(err, UnitError::Syntax { position: 2, .. }), "{err}");
        let err = parse("m^1e12").unwrap_err();
        assert!(matches!(err, UnitError::Syntax { position: 2, .. }), "{err}");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse("1/s").unwrap().dimension(), Dimension::FREQUENCY);
        assert_eq!(parse("10^3 m").unwrap(), parse("km").unwrap());
        assert_eq!(parse("1000").unwrap().factor(), 1000.0);
        assert_eq!(parse("-2 m").unwrap().factor(), -2.0);
        assert_eq!(parse(".5 m").unwrap().factor(), 0.5);
        assert!(matches!(parse("0 m"), Err(UnitError::InvalidScale { .. })));
    }

    #[test]
    fn test_empty_is_dimensionless() {
        assert_eq!(parse("").unwrap(), Unit::dimensionless());
        assert_eq!(parse("   ").unwrap(), Unit::dimensionless());
        assert!(parse("()").is_err());
    }

    #[test]
    fn test_syntax_errors() {
        let position = |spec: &str| match parse(spec) {
            Err(UnitError::Syntax { position, .. }) => position,
            other => panic!("{spec}: expected syntax error, got {other:?}"),
        };
        assert_eq!(position("m/"), 2);
        assert_eq!(position("(m"), 2);
        assert_eq!(position("m)"), 1);
        assert_eq!(position("m#s"), 1);
        assert_eq!(position("2m"), 1);
        assert_eq!(position("m^x"), 2);
        assert_eq!(position("m^2.5"), 2);
        assert_eq!(position("m..s"), 2);
        assert_eq!(position("K @"), 3);
        assert_eq!(position("@ 5"), 0);
    }

    #[test]
    fn test_shift() {
        assert_eq!(parse("K @ 273.15").unwrap(), parse("°C").unwrap());
        let rankine_shifted = format!("({} K) @ 459.67", 1.0 / 1.8);
        assert_eq!(parse(&rankine_shifted).unwrap(), parse("°F").unwrap());

        let warm = parse("°C @ 10").unwrap();
        let kelvin = parse("K").unwrap();
        assert_close(convert(0.0, &warm, &kelvin).unwrap(), 283.15);

        let below = parse("K @ -10").unwrap();
        assert_eq!(convert(0.0, &below, &kelvin).unwrap(), -10.0);
    }

    #[test]
    fn test_offset_units_are_not_multiplicable() {
        assert!(matches!(parse("°C.m"), Err(UnitError::NonMultiplicable { .. })));
        assert!(matches!(parse("°C2"), Err(UnitError::NonMultiplicable { .. })));
        assert!(matches!(parse("m/degF"), Err(UnitError::NonMultiplicable { .. })));
    }

    #[test]
    fn test_options() {
        let db = UnitsDatabase::global();

        let strict = UnitParser::new(db)
            .with_options(ParseOptions::new().with_implicit_multiplication(false));
        assert!(matches!(strict.parse("m s"), Err(UnitError::Syntax { position: 2, .. })));
        assert!(strict.parse("m.s").is_ok());

        let absolute = UnitParser::new(db).with_options(ParseOptions::new().with_offset(false));
        assert!(absolute.parse("K @ 1").is_err());
        assert!(absolute.parse("°C").is_ok());

        let shallow = UnitParser::new(db).with_options(ParseOptions::new().with_max_depth(1));
        assert!(shallow.parse("(m)").is_ok());
        assert!(shallow.parse("((m))").is_err());
        assert_eq!(shallow.options().max_depth, 1);
    }

    #[test]
    fn test_split_exponent_suffix() {
        assert_eq!(split_exponent_suffix("s-1"), Some(("s", -1)));
        assert_eq!(split_exponent_suffix("m12"), Some(("m", 12)));
        assert_eq!(split_exponent_suffix("m²"), Some(("m", 2)));
        assert_eq!(split_exponent_suffix("s⁻¹"), Some(("s", -1)));
        assert_eq!(split_exponent_suffix("m"), None);
        assert_eq!(split_exponent_suffix("42"), None);
    }

    #[test]
    fn test_concurrent_parsing() {
        std::thread::scope(|scope| {
            for spec in ["km/h", "N.m", "°F", "kg.m2.s-3"] {
                scope.spawn(move || {
                    for _ in 0..100 {
                        assert!(parse(spec).is_ok());
                    }
                });
            }
        });
    }
}
