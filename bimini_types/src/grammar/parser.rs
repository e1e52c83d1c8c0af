//! Recursive descent over [`Lexer`] tokens, producing a [`TypeExpr`].
//!
//! Every failure reports the byte offset of the offending token and the
//! productions that would have been accepted there.

use crate::codec::BitSize;
use crate::error::ParseError;
use crate::grammar::lexer::{Lexer, Token};
use crate::grammar::syntax::{BaseForm, Suffix, TypeExpr};
use std::iter::Peekable;
use std::num::NonZeroUsize;

/// Most composite layers (containers and suffixes) any path through a type may nest.
pub const MAX_NESTING_DEPTH: usize = 64;

const BASE_FORMS: &[&str] = &["uint", "scalar", "bit", "bool", "byte", "bytes", "{"];

pub fn parse_tree(text: &str) -> Result<TypeExpr, ParseError> {
    let mut parser = Parser {
        text,
        tokens: Lexer::new(text).peekable(),
        depth: 0,
    };
    let (expr, _nesting) = parser.type_expr()?;
    parser.eos()?;
    Ok(expr)
}

type Lexed<'a> = Option<(usize, Token<'a>)>;

struct Parser<'a> {
    text: &'a str,
    tokens: Peekable<Lexer<'a>>,
    /// Count of containers enclosing the current position.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Returns the expression along with its nesting: the most composite layers on any path
    /// from it down to a leaf.
    fn type_expr(&mut self) -> Result<(TypeExpr, usize), ParseError> {
        let (base, mut nesting) = self.base_form()?;

        let mut suffixes = vec![];
        while let Some((position, suffix)) = self.suffix()? {
            nesting += 1;
            self.check_nesting(position, nesting)?;
            suffixes.push(suffix);
        }

        Ok((TypeExpr { base, suffixes }, nesting))
    }

    fn base_form(&mut self) -> Result<(BaseForm, usize), ParseError> {
        let base = match self.tokens.next() {
            Some((_, Token::Word("uint"))) => BaseForm::Uint(self.bit_size()?),
            Some((_, Token::Word("scalar"))) => BaseForm::Scalar(self.bit_size()?),
            Some((_, Token::Word("bit"))) => BaseForm::Bit,
            Some((_, Token::Word("bool"))) => BaseForm::Bool,
            Some((_, Token::Word("byte"))) => BaseForm::Byte,
            Some((_, Token::Word("bytes"))) => match self.tokens.peek().copied() {
                Some((position, Token::Number(digits))) => {
                    self.tokens.next();
                    BaseForm::FixedBytes(self.size(position, digits)?)
                }
                _ => BaseForm::Bytes,
            },
            Some((position, Token::OpenBrace)) => return self.container(position),
            x => return Err(self.unexpected(x, BASE_FORMS.to_vec())),
        };
        Ok((base, 0))
    }

    /// Parses the remainder of a container whose `{` is at `position`.
    fn container(&mut self, position: usize) -> Result<(BaseForm, usize), ParseError> {
        self.depth += 1;
        self.check_nesting(position, 0)?;

        let mut members = vec![];
        let mut members_nesting = 0;
        if let Some((_, Token::CloseBrace)) = self.tokens.peek() {
            self.tokens.next();
        } else {
            loop {
                let (member, nesting) = self.type_expr()?;
                members.push(member);
                members_nesting = members_nesting.max(nesting);

                match self.tokens.next() {
                    Some((_, Token::Comma)) => continue,
                    Some((_, Token::CloseBrace)) => break,
                    x => return Err(self.unexpected(x, vec![",", "}", "?", "["])),
                }
            }
        }

        self.depth -= 1;
        Ok((BaseForm::Container(members), members_nesting + 1))
    }

    fn suffix(&mut self) -> Result<Option<(usize, Suffix)>, ParseError> {
        let position = match self.tokens.peek().copied() {
            Some((position, Token::Question)) => {
                self.tokens.next();
                return Ok(Some((position, Suffix::Optional)));
            }
            Some((position, Token::OpenBracket)) => position,
            _ => return Ok(None),
        };
        self.tokens.next();

        match self.tokens.next() {
            Some((_, Token::CloseBracket)) => Ok(Some((position, Suffix::Array))),
            Some((len_position, Token::Number(digits))) => {
                let len = self.size(len_position, digits)?;
                match self.tokens.next() {
                    Some((_, Token::CloseBracket)) => Ok(Some((position, Suffix::Tuple(len)))),
                    x => Err(self.unexpected(x, vec!["]"])),
                }
            }
            x => Err(self.unexpected(x, vec!["tuple length", "]"])),
        }
    }

    fn bit_size(&mut self) -> Result<BitSize, ParseError> {
        match self.tokens.next() {
            Some((position, Token::Number(digits))) => {
                let bits = self.size(position, digits)?;
                BitSize::new(bits.get()).ok_or_else(|| {
                    self.error(
                        position,
                        vec!["bit size that is a multiple of 8 from 8 to 256"],
                        format!("{digits:?}"),
                    )
                })
            }
            x => Err(self.unexpected(x, vec!["bit size"])),
        }
    }

    /// A positive decimal without leading zeros.
    fn size(&self, position: usize, digits: &str) -> Result<NonZeroUsize, ParseError> {
        Some(digits)
            .filter(|digits| !digits.starts_with('0'))
            .and_then(|digits| digits.parse::<usize>().ok())
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| {
                self.error(
                    position,
                    vec!["positive size without leading zeros"],
                    format!("{digits:?}"),
                )
            })
    }

    fn check_nesting(&self, position: usize, nesting: usize) -> Result<(), ParseError> {
        if self.depth + nesting > MAX_NESTING_DEPTH {
            return Err(self.error(
                position,
                vec!["shallower nesting"],
                format!("nesting deeper than {MAX_NESTING_DEPTH} levels"),
            ));
        }
        Ok(())
    }

    fn eos(&mut self) -> Result<(), ParseError> {
        match self.tokens.next() {
            None => Ok(()),
            x => Err(self.unexpected(x, vec!["?", "[", "end of input"])),
        }
    }

    fn unexpected(&self, lexed: Lexed<'_>, expected: Vec<&'static str>) -> ParseError {
        match lexed {
            Some((position, token)) => self.error(position, expected, token.to_string()),
            None => self.error(self.text.len(), expected, String::from("end of input")),
        }
    }

    fn error(&self, position: usize, expected: Vec<&'static str>, found: String) -> ParseError {
        ParseError {
            text: self.text.to_owned(),
            position,
            expected,
            found,
        }
    }
}
