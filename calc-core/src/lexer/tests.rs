use super::prelude::{Lexer, LexicalError, LexicalErrorType, Token};

fn lexer_for(input: &str) -> Lexer<impl Iterator<Item = (u32, char)> + '_> {
    Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)))
}

#[test]
fn test_tokens() -> std::result::Result<(), LexicalError> {
    let input = "x_1 = (10 + 2) * 3 - 4 / _y";

    let mut lexer = lexer_for(input);

    let tokens = vec![
        Token::Ident(String::from("x_1")),
        Token::Assign,
        Token::LParen,
        Token::Int(10),
        Token::Plus,
        Token::Int(2),
        Token::RParen,
        Token::Asterisk,
        Token::Int(3),
        Token::Minus,
        Token::Int(4),
        Token::Slash,
        Token::Ident(String::from("_y")),
        Token::Eof,
    ];

    for (idx, token) in tokens.iter().enumerate() {
        let (_, next_token, _) = lexer.next_token()?;

        assert_eq!(
            *token, next_token,
            "Next token does not match expected token ({:?}, {:?}) at {}",
            next_token, token, idx
        );
    }

    Ok(())
}

#[test]
fn test_spans() -> std::result::Result<(), LexicalError> {
    let mut lexer = lexer_for("ab + 12");

    assert_eq!(lexer.next_token()?, (0, Token::Ident(String::from("ab")), 2));
    assert_eq!(lexer.next_token()?, (3, Token::Plus, 4));
    assert_eq!(lexer.next_token()?, (5, Token::Int(12), 7));

    Ok(())
}

#[test]
fn test_illegal_character_is_skipped() -> std::result::Result<(), LexicalError> {
    let mut lexer = lexer_for("3 & 4");

    assert_eq!(lexer.next_token()?, (0, Token::Int(3), 1));

    let err = lexer.next_token().expect_err("expected a lexical error");
    assert_eq!(err.error, LexicalErrorType::IllegalCharacter { ch: '&' });
    assert_eq!(err.location.start, 2);

    // lexing continues past the offending character
    assert_eq!(lexer.next_token()?, (4, Token::Int(4), 5));
    assert_eq!(lexer.next_token()?.1, Token::Eof);

    Ok(())
}

#[test]
fn test_number_too_large() {
    let mut lexer = lexer_for("99999999999999999999");

    let err = lexer.next_token().expect_err("expected a lexical error");
    assert_eq!(err.error, LexicalErrorType::NumberTooLarge);
}

#[test]
fn test_newlines_count_lines() -> std::result::Result<(), LexicalError> {
    let mut lexer = lexer_for("1\n\n2\n3");

    assert_eq!(lexer.line(), 1);
    assert_eq!(lexer.next_token()?.1, Token::Int(1));
    assert_eq!(lexer.next_token()?.1, Token::Int(2));
    assert_eq!(lexer.line(), 3);
    assert_eq!(lexer.next_token()?.1, Token::Int(3));
    assert_eq!(lexer.line(), 4);

    Ok(())
}

#[test]
fn test_whitespace_is_skipped() -> std::result::Result<(), LexicalError> {
    let mut lexer = lexer_for(" \t 7\t+ 8 ");

    assert_eq!(lexer.next_token()?.1, Token::Int(7));
    assert_eq!(lexer.next_token()?.1, Token::Plus);
    assert_eq!(lexer.next_token()?.1, Token::Int(8));
    assert_eq!(lexer.next_token()?.1, Token::Eof);

    Ok(())
}
