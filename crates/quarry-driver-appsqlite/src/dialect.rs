use crate::{host::HostDatabase, AppSqliteConfig, AppSqliteDriver, AppSqliteQueryCompiler};

use quarry_core::{Dialect, DialectAdapter, Driver, Introspector, QueryCompiler};
use quarry_sql::{SqliteAdapter, SqliteIntrospector};

use std::sync::Arc;

/// Dialect over the SQLite database embedded in the host application.
///
/// Adapter and introspector are the stock SQLite ones; driver and compiler
/// carry the host-specific behavior (attach-based lifecycle, hoisted index
/// qualifiers). The introspector is scoped to the attached schema so it
/// reads the project's catalog rather than `main`.
#[derive(Debug)]
pub struct AppSqliteDialect {
    config: AppSqliteConfig,
    host: Arc<dyn HostDatabase>,
}

impl AppSqliteDialect {
    pub fn new(config: AppSqliteConfig, host: Arc<dyn HostDatabase>) -> Self {
        Self { config, host }
    }
}

impl Dialect for AppSqliteDialect {
    fn create_driver(&self) -> Arc<dyn Driver> {
        Arc::new(AppSqliteDriver::new(self.config.clone(), self.host.clone()))
    }

    fn create_query_compiler(&self) -> Arc<dyn QueryCompiler> {
        Arc::new(AppSqliteQueryCompiler)
    }

    fn create_adapter(&self) -> Arc<dyn DialectAdapter> {
        Arc::new(SqliteAdapter)
    }

    fn create_introspector(&self) -> Arc<dyn Introspector> {
        Arc::new(SqliteIntrospector::with_schema(self.config.database_name()))
    }
}
