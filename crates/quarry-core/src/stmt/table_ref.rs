use super::Ident;

/// A table reference, optionally qualified with the schema (attached
/// database) name it lives in.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRef {
    pub schema: Option<Ident>,
    pub name: Ident,
}

impl TableRef {
    pub fn new(name: impl Into<Ident>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }

    pub fn with_schema(schema: impl Into<Ident>, name: impl Into<Ident>) -> Self {
        Self {
            schema: Some(schema.into()),
            name: name.into(),
        }
    }
}

impl From<&str> for TableRef {
    /// `"aux.books"` qualifies the table with schema `aux`; `"books"`
    /// leaves it unqualified.
    fn from(value: &str) -> Self {
        match value.split_once('.') {
            Some((schema, name)) => Self::with_schema(schema, name),
            None => Self::new(value),
        }
    }
}

impl From<Ident> for TableRef {
    fn from(name: Ident) -> Self {
        Self::new(name)
    }
}
