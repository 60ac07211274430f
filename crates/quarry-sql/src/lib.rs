mod adapter;
pub use adapter::SqliteAdapter;

mod compiler;
pub use compiler::{SqliteCompiler, SqliteQueryCompiler};

mod formatter;
pub use formatter::Formatter;

mod introspector;
pub use introspector::SqliteIntrospector;
