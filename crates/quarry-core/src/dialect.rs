use crate::{async_trait, driver::Driver, Db, QueryCompiler, Result};

use std::sync::Arc;

/// A pluggable database dialect: the four independently substitutable
/// collaborators the execution pipeline is assembled from.
pub trait Dialect: Send + Sync {
    fn create_driver(&self) -> Arc<dyn Driver>;

    fn create_query_compiler(&self) -> Arc<dyn QueryCompiler>;

    fn create_adapter(&self) -> Arc<dyn DialectAdapter>;

    fn create_introspector(&self) -> Arc<dyn Introspector>;
}

/// Static capabilities of a dialect.
pub trait DialectAdapter: Send + Sync {
    /// Whether mutations can report changed rows back via `returning`.
    fn supports_returning(&self) -> bool;

    /// Whether DDL statements take effect transactionally.
    fn supports_transactional_ddl(&self) -> bool;
}

/// Reads schema information back out of a connected database.
#[async_trait]
pub trait Introspector: Send + Sync {
    async fn table_metadata(&self, db: &Db) -> Result<Vec<TableMetadata>>;
}

/// Description of one user table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableMetadata {
    pub name: String,
    pub schema: Option<String>,
}
