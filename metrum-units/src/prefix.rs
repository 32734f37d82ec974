//! SI prefixes
//!
//! Both tables are ordered longest first so that "da" wins over "d" and
//! "hecto" is tried before any shorter name.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prefix {
    pub text: &'static str,
    pub factor: f64,
}

const fn p(text: &'static str, factor: f64) -> Prefix {
    Prefix { text, factor }
}

/// Prefix symbols, matched case-sensitively
pub const SYMBOL_PREFIXES: &[Prefix] = &[
    p("da", 1e1),
    p("Y", 1e24),
    p("Z", 1e21),
    p("E", 1e18),
    p("P", 1e15),
    p("T", 1e12),
    p("G", 1e9),
    p("M", 1e6),
    p("k", 1e3),
    p("h", 1e2),
    p("d", 1e-1),
    p("c", 1e-2),
    p("m", 1e-3),
    p("u", 1e-6),
    p("µ", 1e-6),
    p("n", 1e-9),
    p("p", 1e-12),
    p("f", 1e-15),
    p("a", 1e-18),
    p("z", 1e-21),
    p("y", 1e-24),
];

/// Prefix names, matched case-insensitively
pub const NAME_PREFIXES: &[Prefix] = &[
    p("yotta", 1e24),
    p("zetta", 1e21),
    p("hecto", 1e2),
    p("centi", 1e-2),
    p("milli", 1e-3),
    p("micro", 1e-6),
    p("femto", 1e-15),
    p("zepto", 1e-21),
    p("yocto", 1e-24),
    p("peta", 1e15),
    p("tera", 1e12),
    p("giga", 1e9),
    p("mega", 1e6),
    p("kilo", 1e3),
    p("deka", 1e1),
    p("deca", 1e1),
    p("deci", 1e-1),
    p("nano", 1e-9),
    p("pico", 1e-12),
    p("atto", 1e-18),
    p("exa", 1e18),
];

/// Every (prefix, remainder) split of `token` by a prefix symbol.
/// The remainder is never empty.
pub fn split_symbol(token: &str) -> impl Iterator<Item = (&'static Prefix, &str)> {
    SYMBOL_PREFIXES.iter().filter_map(move |prefix| {
        token
            .strip_prefix(prefix.text)
            .filter(|rest| !rest.is_empty())
            .map(|rest| (prefix, rest))
    })
}

/// Every (prefix, remainder) split of `token` by a prefix name, ignoring case
pub fn split_name(token: &str) -> impl Iterator<Item = (&'static Prefix, &str)> {
    NAME_PREFIXES.iter().filter_map(move |prefix| {
        let len = prefix.text.len();
        let head = token.get(..len)?;
        let rest = token.get(len..)?;
        (head.eq_ignore_ascii_case(prefix.text) && !rest.is_empty()).then_some((prefix, rest))
    })
}
