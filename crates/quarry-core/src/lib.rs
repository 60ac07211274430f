pub mod driver;
pub use driver::{Connection, Driver};

mod compiler;
pub use compiler::{CompiledStatement, QueryCompiler};

mod db;
pub use db::{Db, Transaction};

mod dialect;
pub use dialect::{Dialect, DialectAdapter, Introspector, TableMetadata};

mod error;
pub use error::{BoxError, Error};

pub mod stmt;

/// A Result type alias that uses Quarry's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
