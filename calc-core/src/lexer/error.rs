use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorType {
    IllegalCharacter { ch: char },
    NumberTooLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan
}

impl LexicalError {
    pub fn details(&self) -> (String, Vec<String>) {
        match self.error {
            LexicalErrorType::IllegalCharacter { ch } => {
                (format!("Illegal character '{ch}'"), vec![])
            },
            LexicalErrorType::NumberTooLarge => {
                ("Number too large".to_string(), vec![])
            }
        }
    }
}
