use super::{Statement, Value};

/// A raw SQL statement passed through to the host uncompiled.
#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    pub sql: String,

    /// Positional bind values for `?` placeholders in `sql`.
    pub parameters: Vec<Value>,
}

impl Raw {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            parameters: Vec::new(),
        }
    }

    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.parameters.push(value.into());
        self
    }
}

impl From<Raw> for Statement {
    fn from(value: Raw) -> Self {
        Self::Raw(value)
    }
}
