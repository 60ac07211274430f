mod row;
pub use row::{OpaqueRow, QueryResult, Row, Rows};

use crate::{async_trait, CompiledStatement, Result};

use std::{fmt::Debug, pin::Pin, sync::Arc};
use tokio_stream::Stream;

/// Stream of result chunks produced by [`Connection::stream_query`].
pub type QueryResultStream = Pin<Box<dyn Stream<Item = Result<QueryResult>> + Send>>;

/// Connection lifecycle contract implemented by a dialect's driver.
///
/// The pipeline calls `init` once, then brackets every unit of work with
/// `acquire_connection` / `release_connection`. A driver over a single
/// physical connection serializes acquirers; `acquire_connection` suspends
/// without timeout until the connection is free, so a caller that never
/// releases suspends every later acquirer.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Prepare the driver for use. Called before any connection is acquired.
    async fn init(&self) -> Result<()>;

    /// Acquire exclusive use of a connection, suspending until one is free.
    async fn acquire_connection(&self) -> Result<Arc<dyn Connection>>;

    /// Open a transaction bracket on an acquired connection.
    async fn begin_transaction(&self, connection: &dyn Connection) -> Result<()>;

    /// Commit the transaction bracket on an acquired connection.
    async fn commit_transaction(&self, connection: &dyn Connection) -> Result<()>;

    /// Roll back the transaction bracket on an acquired connection.
    async fn rollback_transaction(&self, connection: &dyn Connection) -> Result<()>;

    /// Hand the connection back so the next acquirer can proceed.
    async fn release_connection(&self, connection: &dyn Connection) -> Result<()>;

    /// Tear the driver down, releasing whatever `init` created. Must be
    /// safe to call on a driver that was never initialized.
    async fn destroy(&self) -> Result<()>;
}

/// An acquired database connection.
#[async_trait]
pub trait Connection: Debug + Send + Sync + 'static {
    /// Execute one compiled statement and collect its full result.
    async fn execute_query(&self, statement: &CompiledStatement) -> Result<QueryResult>;

    /// Stream a query result in chunks of at most `chunk_size` rows.
    ///
    /// Drivers whose host cannot deliver results incrementally return a
    /// stream that fails with [`crate::Error::Unsupported`] on first poll.
    fn stream_query(
        &self,
        statement: &CompiledStatement,
        chunk_size: Option<usize>,
    ) -> QueryResultStream;
}
