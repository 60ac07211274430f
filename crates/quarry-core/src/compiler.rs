use crate::{
    stmt::{Raw, Statement, Value},
    Result,
};

use std::sync::Arc;

/// Renders statements into executable SQL for one particular dialect.
pub trait QueryCompiler: Send + Sync + 'static {
    /// Compile `statement` into SQL text plus ordered bind parameters.
    fn compile(&self, statement: Arc<Statement>) -> Result<CompiledStatement>;
}

/// A statement rendered to SQL, together with its bind parameters and the
/// statement it was compiled from. Immutable once produced.
#[derive(Debug, Clone)]
pub struct CompiledStatement {
    pub sql: String,

    /// Bind values, in placeholder order.
    pub parameters: Vec<Value>,

    /// The originating statement. Drivers consult it to pick an execution
    /// path and to derive result column names.
    pub statement: Arc<Statement>,
}

impl CompiledStatement {
    /// Wrap a SQL string as-is, bypassing compilation. Used for statements
    /// the host accepts verbatim, transaction control in particular.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::raw_with(sql, Vec::new())
    }

    /// Wrap a SQL string as-is, with positional bind parameters.
    pub fn raw_with(sql: impl Into<String>, parameters: Vec<Value>) -> Self {
        let sql = sql.into();
        Self {
            statement: Arc::new(Statement::Raw(Raw {
                sql: sql.clone(),
                parameters: parameters.clone(),
            })),
            sql,
            parameters,
        }
    }
}
