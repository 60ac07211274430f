/// Boxed error crossing the host database boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error produced while compiling or executing a statement.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The operation is not supported by this dialect or its host.
    #[error("unsupported operation: {message}")]
    Unsupported { message: String },

    /// A selected item has no statically derivable result column name.
    ///
    /// Raised while deriving the column set of a select statement: bare
    /// columns, qualified column references and aliased expressions all
    /// carry a name, but a computed or aggregated selection without an
    /// alias does not, and the host offers no result metadata to recover
    /// one from.
    #[error(
        "selection #{position} has no derivable result column name; \
         computed or aggregated selections must be given an explicit alias"
    )]
    SelectionNameUnresolvable { position: usize },

    /// A derived column name was absent from a row the host returned.
    #[error("returned row is missing selected column `{column}`")]
    MissingColumn { column: String },

    /// Failure reported by the underlying host database. Propagated as-is;
    /// no retry policy is applied at this layer.
    #[error("host database: {0}")]
    Host(#[source] BoxError),
}

impl Error {
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }

    pub fn host(error: impl Into<BoxError>) -> Self {
        Self::Host(error.into())
    }
}
