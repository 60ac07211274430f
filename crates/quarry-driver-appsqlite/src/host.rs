mod sqlite;
pub use sqlite::SqliteHost;

use quarry_core::{async_trait, driver::OpaqueRow, stmt::Value, BoxError};

use std::collections::HashMap;
use std::fmt::Debug;

/// Failures surfaced by the host application's database layer.
pub type HostError = BoxError;

/// The application-owned database this driver proxies to.
///
/// The host keeps ownership of the actual SQLite handle; the driver only
/// ever hands it SQL text plus bind parameters and takes rows back. Hosts
/// are expected to answer one call at a time in arrival order, which the
/// driver's connection mutex already guarantees for everything it routes.
#[async_trait]
pub trait HostDatabase: Debug + Send + Sync + 'static {
    /// Run one statement. Statements that produce no rows resolve to an
    /// empty vec.
    async fn query_async(
        &self,
        sql: &str,
        parameters: &[Value],
    ) -> Result<Vec<Box<dyn OpaqueRow>>, HostError>;
}

/// A row as the host hands it back: values keyed by result column name,
/// with no column ordering preserved.
#[derive(Debug)]
pub struct ProxyRow {
    values: HashMap<String, Value>,
}

impl ProxyRow {
    pub fn new<K, V, I>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl OpaqueRow for ProxyRow {
    fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }
}
