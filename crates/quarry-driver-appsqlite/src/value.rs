use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};

use quarry_core::stmt::Value as CoreValue;

/// Bridge between core values and rusqlite's bind and column types.
#[derive(Debug)]
pub(crate) struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    pub(crate) fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Reads one column of a result row.
    pub(crate) fn from_sql(row: &Row<'_>, index: usize) -> rusqlite::Result<Self> {
        let value: Option<SqlValue> = row.get(index)?;

        let core_value = match value {
            Some(SqlValue::Null) | None => CoreValue::Null,
            Some(SqlValue::Integer(value)) => CoreValue::Integer(value),
            Some(SqlValue::Real(value)) => CoreValue::Real(value),
            Some(SqlValue::Text(value)) => CoreValue::Text(value),
            Some(SqlValue::Blob(value)) => CoreValue::Blob(value),
        };

        Ok(Self(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self.0 {
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            CoreValue::Integer(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::Real(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            CoreValue::Text(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            CoreValue::Blob(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
        }
    }
}
