use crate::{
    host::HostDatabase, mutex::ConnectionMutex, AppSqliteConfig, AppSqliteConnection,
};

use quarry_core::{
    async_trait,
    driver::Connection,
    stmt::Value,
    CompiledStatement, Driver, Error, Result,
};

use std::sync::{
    atomic::{AtomicBool, Ordering::SeqCst},
    Arc,
};

/// Driver over the host application's one SQLite connection.
///
/// `init` attaches the configured database file to the host's handle under
/// the configured schema name; `destroy` detaches it again. In between,
/// every acquire funnels through the connection mutex, so transaction
/// brackets issued as raw SQL see no interleaved statements.
#[derive(Debug)]
pub struct AppSqliteDriver {
    config: AppSqliteConfig,
    host: Arc<dyn HostDatabase>,
    connection: Arc<AppSqliteConnection>,
    mutex: ConnectionMutex,
    attached: AtomicBool,
}

impl AppSqliteDriver {
    pub fn new(config: AppSqliteConfig, host: Arc<dyn HostDatabase>) -> Self {
        Self {
            connection: Arc::new(AppSqliteConnection::new(host.clone())),
            config,
            host,
            mutex: ConnectionMutex::new(),
            attached: AtomicBool::new(false),
        }
    }

    /// Whether the configured schema name is already attached on the host
    /// handle. Attachment names compare case-insensitively in SQLite.
    async fn is_attached(&self) -> Result<bool> {
        let rows = self
            .host
            .query_async("pragma database_list", &[])
            .await
            .map_err(Error::host)?;

        Ok(rows.iter().any(|row| {
            row.get("name")
                .and_then(|value| value.as_text())
                .is_some_and(|name| name.eq_ignore_ascii_case(self.config.database_name()))
        }))
    }
}

#[async_trait]
impl Driver for AppSqliteDriver {
    /// Attach the project database. Calling this more than once is fine;
    /// an attachment already present under the configured name is reused.
    async fn init(&self) -> Result<()> {
        if !self.is_attached().await? {
            let path = self.config.database_path().to_string_lossy().into_owned();

            self.host
                .query_async(
                    "attach database ? as ?",
                    &[
                        Value::Text(path),
                        Value::Text(self.config.database_name().to_owned()),
                    ],
                )
                .await
                .map_err(Error::host)?;

            tracing::debug!(
                name = self.config.database_name(),
                path = %self.config.database_path().display(),
                "attached database",
            );
        }

        self.attached.store(true, SeqCst);
        Ok(())
    }

    async fn acquire_connection(&self) -> Result<Arc<dyn Connection>> {
        self.mutex.lock().await;
        Ok(self.connection.clone())
    }

    async fn begin_transaction(&self, connection: &dyn Connection) -> Result<()> {
        connection
            .execute_query(&CompiledStatement::raw("begin"))
            .await?;
        Ok(())
    }

    async fn commit_transaction(&self, connection: &dyn Connection) -> Result<()> {
        connection
            .execute_query(&CompiledStatement::raw("commit"))
            .await?;
        Ok(())
    }

    async fn rollback_transaction(&self, connection: &dyn Connection) -> Result<()> {
        connection
            .execute_query(&CompiledStatement::raw("rollback"))
            .await?;
        Ok(())
    }

    async fn release_connection(&self, _connection: &dyn Connection) -> Result<()> {
        self.mutex.unlock();
        Ok(())
    }

    /// Detach the project database if this driver attached it. Safe on a
    /// driver that was never initialized.
    async fn destroy(&self) -> Result<()> {
        if self.attached.swap(false, SeqCst) {
            self.host
                .query_async(
                    "detach database ?",
                    &[Value::Text(self.config.database_name().to_owned())],
                )
                .await
                .map_err(Error::host)?;

            tracing::debug!(name = self.config.database_name(), "detached database");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SqliteHost;

    fn fixture() -> (AppSqliteDriver, Arc<dyn HostDatabase>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let host: Arc<dyn HostDatabase> = Arc::new(SqliteHost::in_memory().unwrap());
        let config = AppSqliteConfig::new("project", dir.path().join("project.db"));
        (AppSqliteDriver::new(config, host.clone()), host, dir)
    }

    async fn attached_count(host: &Arc<dyn HostDatabase>) -> usize {
        let rows = host.query_async("pragma database_list", &[]).await.unwrap();
        rows.iter()
            .filter(|row| row.get("name").and_then(|value| value.as_text()) == Some("project"))
            .count()
    }

    #[tokio::test]
    async fn init_attaches_once() {
        let (driver, host, _dir) = fixture();

        driver.init().await.unwrap();
        driver.init().await.unwrap();

        assert_eq!(attached_count(&host).await, 1);
    }

    #[tokio::test]
    async fn destroy_detaches() {
        let (driver, host, _dir) = fixture();

        driver.init().await.unwrap();
        driver.destroy().await.unwrap();

        assert_eq!(attached_count(&host).await, 0);
    }

    #[tokio::test]
    async fn destroy_without_init_is_safe() {
        let (driver, _host, _dir) = fixture();
        driver.destroy().await.unwrap();
    }

    #[tokio::test]
    async fn release_serializes_acquirers() {
        let (driver, _host, _dir) = fixture();
        driver.init().await.unwrap();

        let connection = driver.acquire_connection().await.unwrap();
        driver.release_connection(connection.as_ref()).await.unwrap();

        // A second acquire must succeed immediately after release.
        let connection = driver.acquire_connection().await.unwrap();
        driver.release_connection(connection.as_ref()).await.unwrap();
    }
}
