use super::error::{LexicalError, LexicalErrorType};
use super::token::Token;
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	next_position: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	line: u32,
	input: T,
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
        let mut lexer = Self {
            position: 0,
            next_position: 0,
            ch: None,
			next_ch: None,
			line: 1,
            input,
        };

        lexer.next_char();
        lexer.next_char();

        lexer
    }

	/// Current line number, maintained for diagnostics only.
	pub fn line(&self) -> u32 {
		self.line
	}

    pub fn next_token(&mut self) -> LexResult {
		let span = match self.ch {
			Some(ch) => match ch {
				'+' => self.eat_one_char(Token::Plus),
				'-' => self.eat_one_char(Token::Minus),
				'*' => self.eat_one_char(Token::Asterisk),
				'/' => self.eat_one_char(Token::Slash),
				'(' => self.eat_one_char(Token::LParen),
				')' => self.eat_one_char(Token::RParen),
				'=' => self.eat_one_char(Token::Assign),
				'a'..='z' | 'A'..='Z' | '_' => {
					return Ok(self.lex_ident());
				},
				'0'..='9' => {
					return self.lex_number();
				},
				'\n' => {
					// a run of newlines bumps the line counter and
					// produces no token
					while let Some('\n') = self.ch {
						self.line += 1;
						self.next_char();
					}

					return self.next_token();
				},
				' ' | '\t' | '\r' | '\x0C' => {
					let _ = self.next_char();

					return self.next_token();
				},
				c => {
					let start = self.position;
					// skip exactly one character and keep lexing
					let _ = self.next_char();
					let end = self.position;

					return Err(LexicalError {
						error: LexicalErrorType::IllegalCharacter { ch: c },
						location: SrcSpan { start, end },
					});
				}
			},
			None => {
				self.eat_one_char(Token::Eof)
			}
		};

		Ok(span)
    }

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		let next = match self.input.next() {
			Some((pos, ch)) => {
				self.position = self.next_position;
				self.next_position = pos;

				Some(ch)
			},
			None => {
				self.position = self.next_position;
				self.next_position += 1;

				None
			}
		};

		self.ch = self.next_ch;
		self.next_ch = next;

		ch
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn lex_ident(&mut self) -> Spanned {
        let start_pos = self.position;
		let mut ident = String::new();

		loop {
			match self.ch {
				Some(ch) if ch.is_ascii_alphanumeric() || ch == '_' => {
					ident.push(self.next_char().expect("ident char"))
				},
				_ => break
			}
		}

        let end_pos = self.position;

        (start_pos, Token::Ident(ident), end_pos)
	}

	fn lex_number(&mut self) -> LexResult {
		let start_pos = self.position;
		let mut value = String::new();

		loop {
			match self.ch {
				Some(ch) if ch.is_ascii_digit() => {
					value.push(self.next_char().expect("digit char"))
				},
				_ => break
			}
		}

		let end_pos = self.position;

		match value.parse::<i64>() {
			Ok(value) => Ok((start_pos, Token::Int(value), end_pos)),
			Err(_) => Err(LexicalError {
				error: LexicalErrorType::NumberTooLarge,
				location: SrcSpan::from(start_pos, end_pos)
			})
		}
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		let token = self.next_token();

		Some(token)
	}
}
