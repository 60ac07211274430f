use crate::{host::HostDatabase, unpack};

use quarry_core::{
    async_trait,
    driver::{Connection, QueryResult, QueryResultStream, Rows},
    CompiledStatement, Error, Result,
};

use std::sync::Arc;

/// The single logical connection, backed by the host's async query entry
/// point.
///
/// Callers go through [`Driver::acquire_connection`] to get exclusive use;
/// nothing here re-checks that, so the mutex protocol is what keeps
/// statement interleavings out.
///
/// [`Driver::acquire_connection`]: quarry_core::Driver::acquire_connection
#[derive(Debug)]
pub struct AppSqliteConnection {
    host: Arc<dyn HostDatabase>,
}

impl AppSqliteConnection {
    pub(crate) fn new(host: Arc<dyn HostDatabase>) -> Self {
        Self { host }
    }

    /// Rowid of the most recent insert on the host connection. Only
    /// meaningful while the connection is still held, before any other
    /// statement runs.
    async fn last_insert_rowid(&self) -> Result<Option<i64>> {
        let rows = self
            .host
            .query_async("select last_insert_rowid() as id", &[])
            .await
            .map_err(Error::host)?;

        Ok(rows
            .first()
            .and_then(|row| row.get("id"))
            .and_then(|value| value.as_integer()))
    }
}

#[async_trait]
impl Connection for AppSqliteConnection {
    async fn execute_query(&self, statement: &CompiledStatement) -> Result<QueryResult> {
        let rows = self
            .host
            .query_async(&statement.sql, &statement.parameters)
            .await
            .map_err(Error::host)?;

        if let Some(select) = statement.statement.as_select() {
            let rows = match unpack::unpack_rows(&rows, select) {
                Ok(plain) => Rows::Plain(plain),
                Err(error) => {
                    // The proxies still answer named lookups, so degrade
                    // rather than fail the query.
                    tracing::warn!(
                        %error,
                        sql = %statement.sql,
                        "returning raw host rows; materialization failed",
                    );
                    Rows::Opaque(rows)
                }
            };

            return Ok(QueryResult {
                rows,
                insert_id: None,
                rows_affected: None,
            });
        }

        let insert_id = if statement.statement.is_insert() {
            self.last_insert_rowid().await?
        } else {
            None
        };

        Ok(QueryResult {
            rows: Rows::Plain(Vec::new()),
            insert_id,
            rows_affected: None,
        })
    }

    fn stream_query(
        &self,
        _statement: &CompiledStatement,
        _chunk_size: Option<usize>,
    ) -> QueryResultStream {
        // The host primitive resolves a full result set in one call; there
        // is no incremental fetch to build a stream on.
        Box::pin(tokio_stream::once(Err(Error::unsupported(
            "streaming queries are not supported over the host database; execute the statement instead",
        ))))
    }
}
