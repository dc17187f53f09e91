#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // first char alphabetic or `_`, rest alphanumeric or `_`
    Ident(String),
    // one or more decimal digits
    Int(i64),

    Plus, // +
    Minus, // -
    Asterisk, // *
    Slash, // /

    // Assignment
    Assign, // =

    LParen, // (
    RParen, // )

    Eof,
}

impl Token {
    pub fn is_operator(&self) -> bool {
        match self {
            Token::Plus
            | Token::Minus
            | Token::Asterisk
            | Token::Slash => true,
            _ => false,
        }
    }

    pub fn as_literal(&self) -> String {
        match self {
            Token::Ident(value) => value.clone(),
            Token::Int(value) => format!("{}", value),

            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Asterisk => "*".to_string(),
            Token::Slash => "/".to_string(),

            Token::Assign => "=".to_string(),

            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),

            Token::Eof => "EOF".to_string(),
        }
    }
}
