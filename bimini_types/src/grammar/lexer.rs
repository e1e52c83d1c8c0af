use std::fmt;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Token<'a> {
    /// A run of lowercase ASCII letters.
    Word(&'a str),
    /// A run of ASCII digits, not yet validated.
    Number(&'a str),
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Comma,
    Question,
    /// Any other char, whitespace included.
    Unknown(char),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Word(s) | Self::Number(s) => *s,
            Self::OpenBrace => "{",
            Self::CloseBrace => "}",
            Self::OpenBracket => "[",
            Self::CloseBracket => "]",
            Self::Comma => ",",
            Self::Question => "?",
            Self::Unknown(c) => return write!(f, "{c:?}"),
        };
        write!(f, "{s:?}")
    }
}

/// Splits a type string into tokens, each tagged with its byte offset.
///
/// Lexing never fails; unrecognized chars become [`Token::Unknown`] and are
/// rejected by the parser.
pub struct Lexer<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (usize, Token<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.position..];
        let c = rest.chars().next()?;
        let run_len = |pred: fn(&char) -> bool| rest.chars().take_while(pred).count();

        let (token, len) = match c {
            '{' => (Token::OpenBrace, 1),
            '}' => (Token::CloseBrace, 1),
            '[' => (Token::OpenBracket, 1),
            ']' => (Token::CloseBracket, 1),
            ',' => (Token::Comma, 1),
            '?' => (Token::Question, 1),
            'a'..='z' => {
                let len = run_len(char::is_ascii_lowercase);
                (Token::Word(&rest[..len]), len)
            }
            '0'..='9' => {
                let len = run_len(char::is_ascii_digit);
                (Token::Number(&rest[..len]), len)
            }
            c => (Token::Unknown(c), c.len_utf8()),
        };

        let start = self.position;
        self.position += len;
        Some((start, token))
    }
}
