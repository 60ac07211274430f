use crate::stmt::Value;

use std::{fmt::Debug, sync::Arc};

/// Result of executing one statement.
#[derive(Debug)]
pub struct QueryResult {
    /// Rows produced by a select; empty for mutations.
    pub rows: Rows,

    /// Rowid generated by an insert, when the driver looked it up.
    pub insert_id: Option<i64>,

    /// Rows changed by a mutation, when the host reports it.
    pub rows_affected: Option<u64>,
}

/// Rows in one of two representations, tagged so callers can tell which
/// one they received.
#[derive(Debug)]
pub enum Rows {
    /// Fully materialized rows sharing a known column set.
    Plain(Vec<Row>),

    /// Host proxy rows handed back as-is because no column set could be
    /// derived for the statement. Named access works; enumeration and
    /// structural comparison do not.
    Opaque(Vec<Box<dyn OpaqueRow>>),
}

/// A materialized row: values in column-set order plus the column set
/// itself, shared across every row of the result.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

/// A row object owned by the host. Property access by name is reliable;
/// nothing else about its shape is.
pub trait OpaqueRow: Debug + Send + Sync {
    /// Read one named property off the row.
    fn get(&self, column: &str) -> Option<&Value>;
}

impl QueryResult {
    /// Result with no rows and no insert id.
    pub fn empty() -> Self {
        Self {
            rows: Rows::Plain(Vec::new()),
            insert_id: None,
            rows_affected: None,
        }
    }
}

impl Rows {
    pub fn len(&self) -> usize {
        match self {
            Self::Plain(rows) => rows.len(),
            Self::Opaque(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain(..))
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(..))
    }

    pub fn as_plain(&self) -> Option<&[Row]> {
        match self {
            Self::Plain(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn into_plain(self) -> Option<Vec<Row>> {
        match self {
            Self::Plain(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&[Box<dyn OpaqueRow>]> {
        match self {
            Self::Opaque(rows) => Some(rows),
            _ => None,
        }
    }
}

impl Row {
    pub fn new(columns: Arc<[String]>, values: Vec<Value>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value of the named column, if the column is part of this row's
    /// column set.
    pub fn get(&self, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.values.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_lookup_is_by_column_name() {
        let columns: Arc<[String]> = vec!["id".to_string(), "value_a".to_string()].into();
        let row = Row::new(columns, vec![Value::Integer(1), Value::Text("hey".into())]);

        assert_eq!(row.columns(), ["id", "value_a"]);
        assert_eq!(row.get("id"), Some(&Value::Integer(1)));
        assert_eq!(row.get("value_a"), Some(&Value::Text("hey".into())));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn rows_report_their_representation() {
        let rows = Rows::Plain(Vec::new());
        assert!(rows.is_plain() && !rows.is_opaque());
        assert!(rows.is_empty());
        assert!(rows.into_plain().is_some());

        let rows = Rows::Opaque(Vec::new());
        assert!(rows.is_opaque());
        assert!(rows.as_plain().is_none());
        assert!(rows.into_plain().is_none());
    }
}
