use super::{HostDatabase, HostError, ProxyRow};
use crate::value::Value;

use quarry_core::{async_trait, driver::OpaqueRow, stmt::Value as CoreValue};

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;

/// A host backed by an in-process rusqlite connection.
///
/// Stands in for the application's database layer when the driver is used
/// outside a host process. Queries run on the blocking thread pool with the
/// connection locked for the duration of the statement.
#[derive(Debug)]
pub struct SqliteHost {
    connection: Arc<Mutex<rusqlite::Connection>>,
}

impl SqliteHost {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, HostError> {
        Ok(Self::wrap(rusqlite::Connection::open(path)?))
    }

    pub fn in_memory() -> Result<Self, HostError> {
        Ok(Self::wrap(rusqlite::Connection::open_in_memory()?))
    }

    fn wrap(connection: rusqlite::Connection) -> Self {
        Self {
            connection: Arc::new(Mutex::new(connection)),
        }
    }
}

#[async_trait]
impl HostDatabase for SqliteHost {
    async fn query_async(
        &self,
        sql: &str,
        parameters: &[CoreValue],
    ) -> Result<Vec<Box<dyn OpaqueRow>>, HostError> {
        let connection = self.connection.clone();
        let sql = sql.to_owned();
        let parameters = parameters.to_vec();

        let rows = tokio::task::spawn_blocking(move || -> rusqlite::Result<_> {
            let connection = connection.blocking_lock();
            let mut stmt = connection.prepare(&sql)?;
            let params = rusqlite::params_from_iter(parameters.into_iter().map(Value::from));

            // Statements without result columns go through the execute
            // path; everything else is treated as a query.
            if stmt.column_count() == 0 {
                stmt.execute(params)?;
                return Ok(Vec::new());
            }

            let columns: Vec<String> = stmt
                .column_names()
                .into_iter()
                .map(str::to_owned)
                .collect();

            let mut out: Vec<Box<dyn OpaqueRow>> = Vec::new();
            let mut rows = stmt.query(params)?;
            while let Some(row) = rows.next()? {
                let mut pairs = Vec::with_capacity(columns.len());
                for (index, column) in columns.iter().enumerate() {
                    pairs.push((column.clone(), Value::from_sql(row, index)?.into_inner()));
                }
                out.push(Box::new(ProxyRow::new(pairs)));
            }
            Ok(out)
        })
        .await??;

        Ok(rows)
    }
}
