use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorType {
    DivisionByZero,
    IntegerOverflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub location: SrcSpan
}

impl RuntimeError {
    pub fn details(&self) -> (String, Vec<String>) {
        match self.error {
            RuntimeErrorType::DivisionByZero => {
                ("Division by zero".to_string(), vec![])
            },
            RuntimeErrorType::IntegerOverflow => {
                ("Integer overflow".to_string(), vec![])
            }
        }
    }
}

/// Non-fatal evaluation diagnostics; the statement still completes.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalWarning {
    UndefinedName {
        name: String,
        location: SrcSpan
    },
}
