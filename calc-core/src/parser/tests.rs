use crate::lexer::prelude::Token;
use super::prelude::{parse_statement, Expression, ParseError, Statement};

fn parse_expression(src: &str) -> Result<Expression, ParseError> {
    match parse_statement(src)? {
        Statement::Expression(expression) => Ok(expression),
        Statement::Assignment(assignment) => panic!("expected an expression, got {assignment}"),
    }
}

#[test]
fn test_precedence() -> Result<(), ParseError> {
    let Expression::Infix(infix) = parse_expression("2 + 3 * 4")? else {
        panic!("expected an infix expression")
    };

    assert_eq!(infix.operator, Token::Plus);
    assert_eq!(infix.left.to_string(), "2");
    assert_eq!(infix.right.to_string(), "3 * 4");

    Ok(())
}

#[test]
fn test_left_associativity() -> Result<(), ParseError> {
    let Expression::Infix(infix) = parse_expression("10 - 3 - 2")? else {
        panic!("expected an infix expression")
    };

    assert_eq!(infix.operator, Token::Minus);
    assert_eq!(infix.left.to_string(), "10 - 3");
    assert_eq!(infix.right.to_string(), "2");

    Ok(())
}

#[test]
fn test_grouping() -> Result<(), ParseError> {
    let Expression::Infix(infix) = parse_expression("(2 + 3) * 4")? else {
        panic!("expected an infix expression")
    };

    assert_eq!(infix.operator, Token::Asterisk);
    assert_eq!(infix.left.to_string(), "(2 + 3)");

    Ok(())
}

#[test]
fn test_unary_minus_binds_tighter() -> Result<(), ParseError> {
    // negation applies to the immediate operand, then the infix applies
    let Expression::Infix(infix) = parse_expression("-2 * 3")? else {
        panic!("expected an infix expression")
    };

    assert_eq!(infix.operator, Token::Asterisk);
    assert_eq!(infix.left.to_string(), "-2");

    let Expression::Infix(infix) = parse_expression("-2 + 3")? else {
        panic!("expected an infix expression")
    };

    assert_eq!(infix.operator, Token::Plus);
    assert_eq!(infix.left.to_string(), "-2");

    Ok(())
}

#[test]
fn test_assignment() -> Result<(), ParseError> {
    let Statement::Assignment(assignment) = parse_statement("x = 5 + 5")? else {
        panic!("expected an assignment")
    };

    assert_eq!(assignment.name.value, "x");
    assert_eq!(assignment.value.to_string(), "5 + 5");

    Ok(())
}

#[test]
fn test_bare_identifier_is_an_expression() -> Result<(), ParseError> {
    let statement = parse_statement("x")?;

    assert!(matches!(statement, Statement::Expression(Expression::Identifier(_))));

    Ok(())
}

#[test]
fn test_syntax_error_at_token() {
    let err = parse_statement("2 + + 3").expect_err("expected a parse error");

    assert_eq!(err.details().0, "Syntax error at '+'");
}

#[test]
fn test_trailing_token_is_rejected() {
    let err = parse_statement("2 3").expect_err("expected a parse error");

    assert_eq!(err.details().0, "Syntax error at '3'");
}

#[test]
fn test_syntax_error_at_eof() {
    let err = parse_statement("2 +").expect_err("expected a parse error");

    assert_eq!(err.details().0, "Syntax error at EOF");

    let err = parse_statement("(2 + 3").expect_err("expected a parse error");

    assert_eq!(err.details().0, "Syntax error at EOF");

    let err = parse_statement("x =").expect_err("expected a parse error");

    assert_eq!(err.details().0, "Syntax error at EOF");
}

#[test]
fn test_empty_line_is_a_syntax_error() {
    let err = parse_statement("").expect_err("expected a parse error");

    assert_eq!(err.details().0, "Syntax error at EOF");
}

#[test]
fn test_display_round_trip() -> Result<(), ParseError> {
    for src in ["2 + 3 * 4", "x = (1 + 2) / 3", "-x - -1", "((5))"] {
        assert_eq!(parse_statement(src)?.to_string(), src.to_string());
    }

    Ok(())
}
