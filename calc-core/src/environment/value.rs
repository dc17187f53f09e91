use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer {
        value: i64
    },
    Float {
        value: f64,
    },
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // whole-number floats print without a trailing `.0`
            Value::Integer { value } => write!(f, "{value}"),
            Value::Float { value } => write!(f, "{value}"),
        }
    }
}

impl Value {
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Integer { value } => *value as f64,
            Self::Float { value } => *value
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer { value } => *value == 0,
            Self::Float { value } => *value == 0.0
        }
    }
}
