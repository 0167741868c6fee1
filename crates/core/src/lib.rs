mod adapter;
mod column;
mod config;
mod dialect;
mod error;
mod export;
mod generator;
mod purge;
mod runner;

pub use adapter::{DatabaseAdapter, Row};
pub use column::{ColumnSpec, TableSpec};
pub use config::ConnectionConfig;
pub use dialect::Dialect;
pub use error::{
    Error, ExecutionError, ExportError, Result, SpecError, UnsupportedOperationError,
};
pub use export::ScriptExporter;
pub use generator::DdlGenerator;
pub use purge::{CatalogEntry, PurgeEngine};
pub use runner::{MigrationRunner, MigrationStep, ScriptSet};
