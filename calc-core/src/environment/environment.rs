use std::collections::HashMap;

use super::prelude::Value;

/// Name to value store, alive for the whole session. Only assignment
/// statements write to it.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
    store: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: HashMap::new()
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.store.get(name)
    }

    /// Unconditional overwrite; rebinding a name is not an error.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}
