pub mod error;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::{error::*, eval_statement};
}

use crate::{
    environment::prelude::{Environment, Value},
    lexer::prelude::Token,
    parser::prelude::{Assignment, Expression, Infix, Prefix, Statement},
    utils::prelude::EvalWarningEmitter,
};
use error::{EvalWarning, RuntimeError, RuntimeErrorType};

/// Evaluates one statement against the environment. Assignments bind their
/// value and yield `None`; bare expressions yield `Some(value)` for the
/// caller to report.
pub fn eval_statement(
    statement: Statement,
    env: &mut Environment,
    warnings: &EvalWarningEmitter,
) -> Result<Option<Value>, RuntimeError> {
    match statement {
        Statement::Assignment(assignment) => {
            eval_assignment(assignment, env, warnings)?;

            Ok(None)
        },
        Statement::Expression(expression) => {
            let value = eval_expression(&expression, env, warnings)?;

            Ok(Some(value))
        }
    }
}

fn eval_assignment(
    assignment: Assignment,
    env: &mut Environment,
    warnings: &EvalWarningEmitter,
) -> Result<(), RuntimeError> {
    let value = eval_expression(&assignment.value, env, warnings)?;

    env.set(assignment.name.value, value);

    Ok(())
}

// expressions never mutate the environment
fn eval_expression(
    expression: &Expression,
    env: &Environment,
    warnings: &EvalWarningEmitter,
) -> Result<Value, RuntimeError> {
    match expression {
        Expression::Number { value, .. } => Ok(Value::Integer { value: *value }),
        Expression::Identifier(ident) => match env.get(&ident.value) {
            Some(value) => Ok(*value),
            None => {
                // undefined names degrade to zero instead of failing the
                // statement
                warnings.emit(EvalWarning::UndefinedName {
                    name: ident.value.clone(),
                    location: ident.location,
                });

                Ok(Value::Integer { value: 0 })
            }
        },
        Expression::Infix(infix) => eval_infix(infix, env, warnings),
        Expression::Prefix(prefix) => eval_prefix(prefix, env, warnings),
        Expression::Grouped { expression, .. } => eval_expression(expression, env, warnings),
    }
}

fn eval_prefix(
    prefix: &Prefix,
    env: &Environment,
    warnings: &EvalWarningEmitter,
) -> Result<Value, RuntimeError> {
    let value = eval_expression(&prefix.expression, env, warnings)?;

    match prefix.operator {
        Token::Minus => match value {
            // negating i64::MIN overflows
            Value::Integer { value } => match value.checked_neg() {
                Some(value) => Ok(Value::Integer { value }),
                None => Err(RuntimeError {
                    error: RuntimeErrorType::IntegerOverflow,
                    location: prefix.location,
                })
            },
            Value::Float { value } => Ok(Value::Float { value: -value }),
        },
        _ => unreachable!("the parser only builds `-` prefixes")
    }
}

fn eval_infix(
    infix: &Infix,
    env: &Environment,
    warnings: &EvalWarningEmitter,
) -> Result<Value, RuntimeError> {
    let left = eval_expression(&infix.left, env, warnings)?;
    let right = eval_expression(&infix.right, env, warnings)?;

    if infix.operator == Token::Slash && right.is_zero() {
        return Err(RuntimeError {
            error: RuntimeErrorType::DivisionByZero,
            location: infix.location,
        });
    }

    let value = match (left, right) {
        (
            Value::Integer { value: left_value },
            Value::Integer { value: right_value }
        ) => {
            // `/` yields the true quotient even for integer operands; the
            // rest stay integer and must not wrap
            if infix.operator == Token::Slash {
                Value::Float { value: left_value as f64 / right_value as f64 }
            } else {
                let value = match infix.operator {
                    Token::Plus => left_value.checked_add(right_value),
                    Token::Minus => left_value.checked_sub(right_value),
                    Token::Asterisk => left_value.checked_mul(right_value),
                    _ => unreachable!("the parser only builds arithmetic infixes")
                };

                match value {
                    Some(value) => Value::Integer { value },
                    None => return Err(RuntimeError {
                        error: RuntimeErrorType::IntegerOverflow,
                        location: infix.location,
                    })
                }
            }
        },
        // any float operand promotes the whole operation
        (left, right) => {
            let (left_value, right_value) = (left.as_f64(), right.as_f64());

            match infix.operator {
                Token::Plus => Value::Float { value: left_value + right_value },
                Token::Minus => Value::Float { value: left_value - right_value },
                Token::Asterisk => Value::Float { value: left_value * right_value },
                Token::Slash => Value::Float { value: left_value / right_value },
                _ => unreachable!("the parser only builds arithmetic infixes")
            }
        }
    };

    Ok(value)
}
