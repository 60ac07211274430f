use quarry_core::{stmt::Select, Driver, Error, QueryCompiler};
use quarry_driver_appsqlite::{
    AppSqliteConfig, AppSqliteDriver, AppSqliteQueryCompiler, HostDatabase, SqliteHost,
};

use std::sync::Arc;

use tokio_stream::StreamExt;

#[tokio::test]
async fn stream_query_fails_on_first_poll() {
    let dir = tempfile::tempdir().unwrap();
    let host: Arc<dyn HostDatabase> = Arc::new(SqliteHost::in_memory().unwrap());
    let config = AppSqliteConfig::new("project", dir.path().join("project.db"));

    let driver = AppSqliteDriver::new(config, host);
    driver.init().await.unwrap();

    let statement = AppSqliteQueryCompiler
        .compile(Arc::new(Select::new("project.table_a").column("id").into()))
        .unwrap();

    let connection = driver.acquire_connection().await.unwrap();
    let mut stream = connection.stream_query(&statement, Some(100));

    let first = stream.next().await.unwrap();
    assert!(matches!(first, Err(Error::Unsupported { .. })));
    assert!(stream.next().await.is_none());

    driver.release_connection(connection.as_ref()).await.unwrap();

    // The failed stream must not leave the connection held.
    let connection = driver.acquire_connection().await.unwrap();
    driver.release_connection(connection.as_ref()).await.unwrap();
}
