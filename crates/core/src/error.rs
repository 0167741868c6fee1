use std::{error::Error as StdError, path::PathBuf};

use thiserror::Error;

/// Top-level error wrapping the stage-typed failures of each component.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Spec(#[from] SpecError),
    #[error(transparent)]
    Execute(#[from] ExecutionError),
    #[error(transparent)]
    Unsupported(#[from] UnsupportedOperationError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A malformed column spec or an impossible synthesis request. Synthesis
/// aborts before any partial DDL is assembled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("column spec has an empty name")]
    EmptyColumnName,
    #[error("column `{column}` has an empty sql type")]
    EmptySqlType { column: String },
    #[error("no constraint found for column `{column}` on `{schema}.{table}`")]
    ConstraintNotFound {
        schema: String,
        table: String,
        column: String,
    },
}

/// A failure surfaced by the injected execution capability. Propagated
/// unchanged, never swallowed, never retried.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("statement failed: `{sql}`")]
    StatementFailed {
        sql: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
    #[error("catalog row from `{sql}` is missing column `{column}`")]
    MissingColumn { sql: String, column: String },
}

impl ExecutionError {
    pub fn statement_failed<E>(sql: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::StatementFailed {
            sql: sql.into(),
            source: Box::new(source),
        }
    }
}

/// An operation that has no implementation for the active dialect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("`{operation}` is not implemented for dialect `{dialect}`")]
pub struct UnsupportedOperationError {
    pub operation: String,
    pub dialect: String,
}

impl UnsupportedOperationError {
    pub fn new(operation: impl Into<String>, dialect: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            dialect: dialect.into(),
        }
    }
}

/// A filesystem failure while writing an exported script.
#[derive(Debug, Error)]
#[error("failed to write script file `{}`", path.display())]
pub struct ExportError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
