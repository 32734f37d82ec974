//! Tokenizer for unit specifications
//!
//! Never fails: characters that cannot start any token come out as
//! `TokenKind::Invalid` and the parser reports them.

/// Token types for unit specifications
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    /// Unit name or symbol. May contain digits, which the parser
    /// disambiguates from trailing exponents.
    Name(String),
    Dot,
    Slash,
    Caret,
    Minus,
    LParen,
    RParen,
    /// Origin shift, as in `K @ 273.15`
    At,
    Invalid(char),
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset in the input
    pub pos: usize,
    /// Whitespace precedes this token
    pub spaced: bool,
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '_' | '%' | '°' | '¤' | '$' | 'µ')
}

/// Value of a superscript digit ("m²")
pub(crate) fn superscript_digit(c: char) -> Option<u32> {
    match c {
        '⁰' => Some(0),
        '¹' => Some(1),
        '²' => Some(2),
        '³' => Some(3),
        '⁴'..='⁹' => Some(c as u32 - '⁴' as u32 + 4),
        _ => None,
    }
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '⁻' || superscript_digit(c).is_some()
}

/// Tokenize a unit specification. The last token is always `Eof`.
pub fn tokenize(input: &str) -> Vec<Token> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let char_at = |i: usize| chars.get(i).map(|&(_, c)| c);
    let pos_at = |i: usize| chars.get(i).map(|&(p, _)| p).unwrap_or(input.len());

    let mut tokens: Vec<Token> = Vec::new();
    let mut spaced = false;
    let mut i = 0;

    while let Some(ch) = char_at(i) {
        let start = pos_at(i);

        if ch.is_whitespace() {
            spaced = true;
            i += 1;
            continue;
        }

        let kind = if ch.is_ascii_digit() || (ch == '.' && starts_number(&tokens, spaced, char_at(i + 1))) {
            let end = scan_number(&chars, i);
            let text = &input[start..pos_at(end)];
            i = end;
            match text.parse::<f64>() {
                Ok(n) => TokenKind::Number(n),
                Err(_) => TokenKind::Invalid(ch),
            }
        } else if is_name_start(ch) {
            let mut end = i + 1;
            while let Some(c) = char_at(end) {
                if is_name_char(c) {
                    end += 1;
                } else if c == '-' && char_at(end + 1).is_some_and(|d| d.is_ascii_digit()) {
                    // "s-1": the negative exponent ends the name
                    end += 1;
                    while char_at(end).is_some_and(|d| d.is_ascii_digit()) {
                        end += 1;
                    }
                    break;
                } else {
                    break;
                }
            }
            let text = &input[start..pos_at(end)];
            i = end;
            TokenKind::Name(text.to_string())
        } else {
            i += 1;
            match ch {
                '.' | '*' | '·' => TokenKind::Dot,
                '/' => TokenKind::Slash,
                '^' => TokenKind::Caret,
                '-' => TokenKind::Minus,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '@' => TokenKind::At,
                other => TokenKind::Invalid(other),
            }
        };

        tokens.push(Token { kind, pos: start, spaced });
        spaced = false;
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        pos: input.len(),
        spaced,
    });
    tokens
}

/// A '.' followed by a digit starts a number unless it directly follows
/// something it could be multiplying ("m2.5" stays a product).
fn starts_number(tokens: &[Token], spaced: bool, next: Option<char>) -> bool {
    if !next.is_some_and(|c| c.is_ascii_digit()) {
        return false;
    }
    match tokens.last() {
        None => true,
        Some(_) if spaced => true,
        Some(prev) => !matches!(
            prev.kind,
            TokenKind::Name(_) | TokenKind::Number(_) | TokenKind::RParen
        ),
    }
}

/// Index just past a decimal or scientific literal starting at `i`
fn scan_number(chars: &[(usize, char)], mut i: usize) -> usize {
    let is_digit = |i: usize| chars.get(i).is_some_and(|&(_, c)| c.is_ascii_digit());
    let is = |i: usize, want: &[char]| chars.get(i).is_some_and(|&(_, c)| want.contains(&c));

    while is_digit(i) {
        i += 1;
    }
    if is(i, &['.']) {
        i += 1;
        while is_digit(i) {
            i += 1;
        }
    }
    if is(i, &['e', 'E']) {
        if is_digit(i + 1) {
            i += 1;
        } else if is(i + 1, &['+', '-']) && is_digit(i + 2) {
            i += 2;
        } else {
            return i;
        }
        while is_digit(i) {
            i += 1;
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn name(s: &str) -> TokenKind {
        TokenKind::Name(s.to_string())
    }

    #[test]
    fn test_simple_names() {
        assert_eq!(kinds("m"), vec![name("m"), TokenKind::Eof]);
        assert_eq!(kinds("°C"), vec![name("°C"), TokenKind::Eof]);
        assert_eq!(kinds("degrees_north"), vec![name("degrees_north"), TokenKind::Eof]);
    }

    #[test]
    fn test_embedded_digits() {
        assert_eq!(
            kinds("m2.s-1"),
            vec![name("m2"), TokenKind::Dot, name("s-1"), TokenKind::Eof]
        );
        assert_eq!(kinds("H2O"), vec![name("H2O"), TokenKind::Eof]);
        assert_eq!(kinds("m²/s⁻¹"), vec![name("m²"), TokenKind::Slash, name("s⁻¹"), TokenKind::Eof]);
    }

    #[test]
    fn test_superscript_digits() {
        assert_eq!(superscript_digit('²'), Some(2));
        assert_eq!(superscript_digit('⁷'), Some(7));
        assert_eq!(superscript_digit('2'), None);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(kinds("1e9"), vec![TokenKind::Number(1e9), TokenKind::Eof]);
        assert_eq!(kinds(".5"), vec![TokenKind::Number(0.5), TokenKind::Eof]);
        assert_eq!(kinds("1.5E-3"), vec![TokenKind::Number(1.5e-3), TokenKind::Eof]);
        assert_eq!(
            kinds("2e m"),
            vec![TokenKind::Number(2.0), name("e"), name("m"), TokenKind::Eof]
        );
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("(m/s)^-2"),
            vec![
                TokenKind::LParen,
                name("m"),
                TokenKind::Slash,
                name("s"),
                TokenKind::RParen,
                TokenKind::Caret,
                TokenKind::Minus,
                TokenKind::Number(2.0),
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("kg*m·s"),
            vec![name("kg"), TokenKind::Dot, name("m"), TokenKind::Dot, name("s"), TokenKind::Eof]
        );
        assert_eq!(
            kinds("K @ 273.15"),
            vec![name("K"), TokenKind::At, TokenKind::Number(273.15), TokenKind::Eof]
        );
    }

    #[test]
    fn test_dot_after_name_is_product() {
        assert_eq!(
            kinds("m.5"),
            vec![name("m"), TokenKind::Dot, TokenKind::Number(5.0), TokenKind::Eof]
        );
        assert_eq!(
            kinds("m .5"),
            vec![name("m"), TokenKind::Number(0.5), TokenKind::Eof]
        );
    }

    #[test]
    fn test_spacing_and_positions() {
        let tokens = tokenize("2 m  s");
        assert_eq!(tokens[0].pos, 0);
        assert!(!tokens[0].spaced);
        assert_eq!(tokens[1].pos, 2);
        assert!(tokens[1].spaced);
        assert_eq!(tokens[2].pos, 5);
        assert!(tokens[2].spaced);
        assert_eq!(tokens[3].kind, TokenKind::Eof);
        assert_eq!(tokens[3].pos, 6);

        let tokens = tokenize("(m)2");
        assert!(!tokens[3].spaced);
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            kinds("m#s"),
            vec![name("m"), TokenKind::Invalid('#'), name("s"), TokenKind::Eof]
        );
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }
}
