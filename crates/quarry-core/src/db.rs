use crate::{
    dialect::{Dialect, DialectAdapter, Introspector, TableMetadata},
    driver::{Connection, Driver, QueryResult},
    stmt::Statement,
    CompiledStatement, QueryCompiler, Result,
};

use std::sync::Arc;

/// Handle to a connected database.
///
/// `Db` is the scoped-acquisition entry point over the dialect's driver:
/// every `execute` acquires the shared connection, runs the statement, and
/// releases on all exit paths. Callers that stick to this surface cannot
/// leak a held connection.
pub struct Db {
    driver: Arc<dyn Driver>,
    compiler: Arc<dyn QueryCompiler>,
    adapter: Arc<dyn DialectAdapter>,
    introspector: Arc<dyn Introspector>,
}

impl Db {
    /// Assemble the dialect's collaborators and initialize the driver.
    pub async fn connect(dialect: &dyn Dialect) -> Result<Db> {
        let driver = dialect.create_driver();
        driver.init().await?;

        Ok(Db {
            driver,
            compiler: dialect.create_query_compiler(),
            adapter: dialect.create_adapter(),
            introspector: dialect.create_introspector(),
        })
    }

    /// Compile and execute one statement on the shared connection.
    pub async fn execute(&self, statement: impl Into<Statement>) -> Result<QueryResult> {
        let compiled = self.compiler.compile(Arc::new(statement.into()))?;
        self.execute_compiled(&compiled).await
    }

    /// Execute an already-compiled statement on the shared connection.
    pub async fn execute_compiled(&self, statement: &CompiledStatement) -> Result<QueryResult> {
        let connection = self.driver.acquire_connection().await?;
        let result = connection.execute_query(statement).await;
        self.driver.release_connection(connection.as_ref()).await?;
        result
    }

    /// Open a transaction bracket on the shared connection.
    ///
    /// The returned guard keeps the connection acquired until `commit` or
    /// `rollback`. Dropping the guard without finishing the bracket leaves
    /// the connection held and suspends every later acquirer; finishing it
    /// is a caller obligation.
    pub async fn begin(&self) -> Result<Transaction<'_>> {
        let connection = self.driver.acquire_connection().await?;

        match self.driver.begin_transaction(connection.as_ref()).await {
            Ok(()) => Ok(Transaction {
                db: self,
                connection,
            }),
            Err(error) => {
                self.driver.release_connection(connection.as_ref()).await?;
                Err(error)
            }
        }
    }

    /// Capability flags of the connected dialect.
    pub fn adapter(&self) -> &dyn DialectAdapter {
        self.adapter.as_ref()
    }

    /// List the user tables visible to the dialect's introspector.
    pub async fn table_metadata(&self) -> Result<Vec<TableMetadata>> {
        self.introspector.table_metadata(self).await
    }

    /// Tear the driver down. The handle must not be used afterwards.
    pub async fn destroy(&self) -> Result<()> {
        self.driver.destroy().await
    }
}

/// An open transaction bracket holding the shared connection.
///
/// Transactions are advisory: the bracket issues ordinary `begin` /
/// `commit` / `rollback` statements, and nothing stops other statements
/// from running inside it once the guard is gone. Always finish the
/// bracket; a forgotten guard keeps the connection held forever.
pub struct Transaction<'a> {
    db: &'a Db,
    connection: Arc<dyn Connection>,
}

impl Transaction<'_> {
    /// Compile and execute a statement inside the bracket.
    pub async fn execute(&self, statement: impl Into<Statement>) -> Result<QueryResult> {
        let compiled = self.db.compiler.compile(Arc::new(statement.into()))?;
        self.connection.execute_query(&compiled).await
    }

    /// Commit the bracket and release the connection.
    pub async fn commit(self) -> Result<()> {
        let result = self
            .db
            .driver
            .commit_transaction(self.connection.as_ref())
            .await;
        self.db
            .driver
            .release_connection(self.connection.as_ref())
            .await?;
        result
    }

    /// Roll the bracket back and release the connection.
    pub async fn rollback(self) -> Result<()> {
        let result = self
            .db
            .driver
            .rollback_transaction(self.connection.as_ref())
            .await;
        self.db
            .driver
            .release_connection(self.connection.as_ref())
            .await?;
        result
    }
}
