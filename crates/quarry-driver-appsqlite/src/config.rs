use std::path::{Path, PathBuf};

/// Where the project database lives and what schema name it is attached
/// under.
///
/// Values are fixed at construction; the driver reads them for the lifetime
/// of the dialect.
#[derive(Debug, Clone)]
pub struct AppSqliteConfig {
    database_name: String,
    database_path: PathBuf,
}

impl AppSqliteConfig {
    pub fn new(database_name: impl Into<String>, database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_name: database_name.into(),
            database_path: database_path.into(),
        }
    }

    /// Schema name the database file is attached under.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Path of the database file to attach.
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}
