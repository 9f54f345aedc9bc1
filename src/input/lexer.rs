use logos::Logos;

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \r\t\n\f]+")] // Surrounding whitespace is ignored
pub enum Token {
    #[regex(r"[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Decimal(f64),

    #[regex("0[xX][0-9a-fA-F]+", |lex| radix(lex.slice(), 16))]
    Hex(f64),

    #[regex("0[oO][0-7]+", |lex| radix(lex.slice(), 8))]
    Octal(f64),

    #[regex("0[bB][01]+", |lex| radix(lex.slice(), 2))]
    Binary(f64),
}

impl Token {
    pub fn value(&self) -> f64 {
        match self {
            Self::Decimal(v) | Self::Hex(v) | Self::Octal(v) | Self::Binary(v) => *v,
        }
    }
}

/// Parses a `0x`/`0o`/`0b` prefixed literal.
///
/// Digits are accumulated as floats so arbitrarily long literals
/// degrade in precision instead of overflowing.
fn radix(slice: &str, radix: u32) -> Option<f64> {
    slice.get(2..)?.chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix)
            .map(|digit| acc.mul_add(f64::from(radix), f64::from(digit)))
    })
}

pub fn tokenize_number(s: &str) -> impl Iterator<Item = Result<Token, ()>> + '_ {
    let lexer = Token::lexer(s);
    lexer.into_iter()
}
