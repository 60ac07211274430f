use quarry_core::{
    stmt::{ColumnDef, ColumnType, CreateIndex, CreateTable, TableRef},
    Db,
};
use quarry_driver_appsqlite::{AppSqliteConfig, AppSqliteDialect, HostDatabase, SqliteHost};

use std::sync::Arc;

/// Schema name the project database is attached under in every test.
pub const SCHEMA: &str = "project";

/// A connected [`Db`] over a freshly attached database file, plus the raw
/// host handle for inspecting engine state directly.
pub struct TestDb {
    pub db: Db,
    pub host: Arc<dyn HostDatabase>,
    _dir: tempfile::TempDir,
}

/// Attach a fresh database file under [`SCHEMA`] and connect.
pub async fn connect() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let host: Arc<dyn HostDatabase> = Arc::new(SqliteHost::in_memory().unwrap());
    let config = AppSqliteConfig::new(SCHEMA, dir.path().join("project.db"));

    let db = Db::connect(&AppSqliteDialect::new(config, host.clone()))
        .await
        .unwrap();

    TestDb { db, host, _dir: dir }
}

impl TestDb {
    /// Create `table_a(id integer primary key autoincrement, value_a text)`
    /// plus an index over `value_a`, in the attached schema.
    pub async fn migrate(&self) {
        self.db
            .execute(
                CreateTable::new(self.table("table_a"))
                    .if_not_exists()
                    .column(
                        ColumnDef::new("id", ColumnType::Integer)
                            .primary_key()
                            .auto_increment(),
                    )
                    .column(ColumnDef::new("value_a", ColumnType::Text)),
            )
            .await
            .unwrap();

        self.db
            .execute(
                CreateIndex::new("idx_table_a_value_a", self.table("table_a"))
                    .if_not_exists()
                    .column("value_a"),
            )
            .await
            .unwrap();
    }

    /// Reference to a table in the attached schema.
    pub fn table(&self, name: &str) -> TableRef {
        TableRef::with_schema(SCHEMA, name)
    }
}
