use std::path::PathBuf;
use std::rc::Rc;

use crate::{
    environment::prelude::{Environment, Value},
    eval::prelude::{eval_statement, EvalWarning, RuntimeError, RuntimeErrorType},
    parser::prelude::parse_statement,
    utils::prelude::{EvalWarningEmitter, VectorWarningEmitterIO, Warning, WarningEmitter},
};

fn eval_src(
    src: &str,
    env: &mut Environment,
    warnings: &EvalWarningEmitter
) -> Result<Option<Value>, RuntimeError> {
    let statement = parse_statement(src).expect("statement should parse");

    eval_statement(statement, env, warnings)
}

fn eval_value(src: &str, env: &mut Environment) -> Value {
    eval_src(src, env, &EvalWarningEmitter::null())
        .expect("statement should evaluate")
        .expect("statement should produce a value")
}

#[test]
fn test_arithmetic() {
    let mut env = Environment::new();

    assert_eq!(eval_value("1 + 2 * 3", &mut env), Value::Integer { value: 7 });
    assert_eq!(eval_value("(1 + 2) * 3", &mut env), Value::Integer { value: 9 });
    assert_eq!(eval_value("10 - 4 - 3", &mut env), Value::Integer { value: 3 });
    assert_eq!(eval_value("2 * 3 * 4", &mut env), Value::Integer { value: 24 });
}

#[test]
fn test_division_yields_true_quotient() {
    let mut env = Environment::new();

    assert_eq!(eval_value("10 / 2", &mut env), Value::Float { value: 5.0 });
    assert_eq!(eval_value("1 / 2", &mut env), Value::Float { value: 0.5 });
    assert_eq!(eval_value("7 / 2", &mut env), Value::Float { value: 3.5 });
}

#[test]
fn test_whole_quotients_display_without_fraction() {
    let mut env = Environment::new();

    assert_eq!(eval_value("10 / 2", &mut env).to_string(), "5");
    assert_eq!(eval_value("1 / 2", &mut env).to_string(), "0.5");
}

#[test]
fn test_float_operands_promote() {
    let mut env = Environment::new();

    assert_eq!(eval_value("1 / 2 + 1", &mut env), Value::Float { value: 1.5 });
    assert_eq!(eval_value("(4 / 2) * 3", &mut env), Value::Float { value: 6.0 });
}

#[test]
fn test_unary_minus() {
    let mut env = Environment::new();

    assert_eq!(eval_value("-5 + 3", &mut env), Value::Integer { value: -2 });
    assert_eq!(eval_value("-2 * 3", &mut env), Value::Integer { value: -6 });
    assert_eq!(eval_value("--4", &mut env), Value::Integer { value: 4 });
    assert_eq!(eval_value("-(10 / 4)", &mut env), Value::Float { value: -2.5 });
}

#[test]
fn test_assignment_binds_and_yields_no_value() {
    let mut env = Environment::new();
    let warnings = EvalWarningEmitter::null();

    let result = eval_src("x = 5 + 5", &mut env, &warnings)
        .expect("statement should evaluate");

    assert_eq!(result, None);
    assert_eq!(env.get("x"), Some(&Value::Integer { value: 10 }));
    assert_eq!(eval_value("x + 1", &mut env), Value::Integer { value: 11 });
}

#[test]
fn test_rebinding_overwrites() {
    let mut env = Environment::new();
    let warnings = EvalWarningEmitter::null();

    eval_src("x = 1", &mut env, &warnings).expect("statement should evaluate");
    eval_src("x = x + 1", &mut env, &warnings).expect("statement should evaluate");

    assert_eq!(env.get("x"), Some(&Value::Integer { value: 2 }));
}

#[test]
fn test_undefined_name_evaluates_to_zero() {
    let mut env = Environment::new();

    let io = Rc::new(VectorWarningEmitterIO::new());
    let warnings = EvalWarningEmitter::new(
        PathBuf::new(),
        "foo + 5".to_string(),
        WarningEmitter::new(io.clone())
    );

    assert_eq!(
        eval_src("foo + 5", &mut env, &warnings).expect("statement should evaluate"),
        Some(Value::Integer { value: 5 })
    );

    let warnings = io.take();
    assert_eq!(warnings.len(), 1);

    match &warnings[0] {
        Warning::Eval { warning: EvalWarning::UndefinedName { name, .. }, .. } => {
            assert_eq!(name, "foo");
        },
        other => panic!("expected an undefined name warning, got {other:?}")
    }
}

#[test]
fn test_division_by_zero_is_an_error() {
    let mut env = Environment::new();
    let warnings = EvalWarningEmitter::null();

    let err = eval_src("1 / 0", &mut env, &warnings)
        .expect_err("division by zero should fail");

    assert_eq!(err.error, RuntimeErrorType::DivisionByZero);
    assert_eq!(err.details().0, "Division by zero");
}

#[test]
fn test_division_by_float_zero_is_an_error() {
    let mut env = Environment::new();
    let warnings = EvalWarningEmitter::null();

    let err = eval_src("2 / (3 / 3 - 1)", &mut env, &warnings)
        .expect_err("division by zero should fail");

    assert_eq!(err.error, RuntimeErrorType::DivisionByZero);
}

#[test]
fn test_integer_overflow_is_an_error() {
    let mut env = Environment::new();
    let warnings = EvalWarningEmitter::null();

    let err = eval_src("9223372036854775807 + 1", &mut env, &warnings)
        .expect_err("overflowing addition should fail");

    assert_eq!(err.error, RuntimeErrorType::IntegerOverflow);
    assert_eq!(err.details().0, "Integer overflow");

    let err = eval_src("9223372036854775807 * 2", &mut env, &warnings)
        .expect_err("overflowing multiplication should fail");

    assert_eq!(err.error, RuntimeErrorType::IntegerOverflow);

    let err = eval_src("-9223372036854775807 - 2", &mut env, &warnings)
        .expect_err("overflowing subtraction should fail");

    assert_eq!(err.error, RuntimeErrorType::IntegerOverflow);

    // negating i64::MIN is the one prefix that can overflow
    let err = eval_src("-(-9223372036854775807 - 1)", &mut env, &warnings)
        .expect_err("overflowing negation should fail");

    assert_eq!(err.error, RuntimeErrorType::IntegerOverflow);

    // the session is still usable afterwards
    assert_eq!(eval_value("1 + 1", &mut env), Value::Integer { value: 2 });
}

#[test]
fn test_failed_assignment_binds_nothing() {
    let mut env = Environment::new();
    let warnings = EvalWarningEmitter::null();

    eval_src("x = 1 / 0", &mut env, &warnings)
        .expect_err("division by zero should fail");

    assert_eq!(env.get("x"), None);
}

#[test]
fn test_expressions_leave_the_environment_untouched() {
    let mut env = Environment::new();
    let warnings = EvalWarningEmitter::null();

    eval_src("x = 3", &mut env, &warnings).expect("statement should evaluate");
    let before = env.clone();

    eval_value("x * x + 1", &mut env);

    assert_eq!(env, before);
}
