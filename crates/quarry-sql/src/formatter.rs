use quarry_core::stmt::{Ident, Value};

/// Destination a statement is rendered into: the SQL text plus the bind
/// parameters collected along the way.
#[derive(Debug)]
pub struct Formatter<'a> {
    /// Where to write the rendered SQL.
    pub dst: &'a mut String,

    /// Where to store bind parameters, in placeholder order.
    pub params: &'a mut Vec<Value>,

    /// Render values as inline literals instead of `?` placeholders.
    /// Schema statements set this; SQLite rejects parameters in DDL.
    pub inline_literals: bool,
}

impl<'a> Formatter<'a> {
    pub fn new(dst: &'a mut String, params: &'a mut Vec<Value>) -> Self {
        Self {
            dst,
            params,
            inline_literals: false,
        }
    }

    pub fn push(&mut self, sql: &str) {
        self.dst.push_str(sql);
    }

    /// Write a double-quoted identifier, doubling embedded quotes.
    pub fn ident(&mut self, ident: &Ident) {
        self.dst.push('"');
        for c in ident.as_str().chars() {
            if c == '"' {
                self.dst.push('"');
            }
            self.dst.push(c);
        }
        self.dst.push('"');
    }

    /// Write a value: a `?` placeholder normally, an inline literal when
    /// `inline_literals` is set.
    pub fn value(&mut self, value: &Value) {
        if self.inline_literals {
            self.literal(value);
        } else {
            self.dst.push('?');
            self.params.push(value.clone());
        }
    }

    /// Write a value as a SQL literal.
    pub fn literal(&mut self, value: &Value) {
        match value {
            Value::Null => self.dst.push_str("null"),
            Value::Integer(value) => self.dst.push_str(&value.to_string()),
            Value::Real(value) => self.dst.push_str(&value.to_string()),
            Value::Text(value) => {
                self.dst.push('\'');
                for c in value.chars() {
                    if c == '\'' {
                        self.dst.push('\'');
                    }
                    self.dst.push(c);
                }
                self.dst.push('\'');
            }
            Value::Blob(bytes) => {
                self.dst.push_str("x'");
                for byte in bytes {
                    self.dst.push_str(&format!("{byte:02x}"));
                }
                self.dst.push('\'');
            }
        }
    }
}
