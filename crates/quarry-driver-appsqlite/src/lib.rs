//! Driver for the SQLite connection an application host already owns.
//!
//! The host application opens and manages the actual database handle; this
//! crate attaches the project database to that handle and routes every
//! statement through the host's async query entry point, serializing access
//! behind a single-connection mutex so transactions issued through [`Db`]
//! cannot interleave.
//!
//! [`Db`]: quarry_core::Db

mod compiler;
pub use compiler::AppSqliteQueryCompiler;

mod config;
pub use config::AppSqliteConfig;

mod connection;
pub use connection::AppSqliteConnection;

mod dialect;
pub use dialect::AppSqliteDialect;

mod driver;
pub use driver::AppSqliteDriver;

mod host;
pub use host::{HostDatabase, HostError, ProxyRow, SqliteHost};

mod mutex;

mod unpack;

mod value;
