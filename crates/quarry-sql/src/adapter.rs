use quarry_core::DialectAdapter;

/// Capability flags for SQLite.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteAdapter;

impl DialectAdapter for SqliteAdapter {
    /// SQLite has supported `returning` since 3.35.
    fn supports_returning(&self) -> bool {
        true
    }

    /// Schema changes are not isolated from concurrent readers the way row
    /// changes are, so callers should not rely on rolling DDL back.
    fn supports_transactional_ddl(&self) -> bool {
        false
    }
}
