mod adapter;
mod catalog;

pub use adapter::MssqlAdapter;

use seedql_core::{ColumnSpec, ConnectionConfig, DatabaseAdapter, Dialect, Result};

/// T-SQL grammar and SQL Server system-catalog layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct MssqlDialect;

impl Dialect for MssqlDialect {
    fn name(&self) -> &'static str {
        "mssql"
    }

    fn escape(&self, identifier: &str) -> String {
        format!("[{}]", identifier.replace(']', "]]"))
    }

    fn default_schema(&self) -> &'static str {
        "dbo"
    }

    fn identity_clause(&self) -> &'static str {
        " IDENTITY(1,1)"
    }

    fn primary_key_constraint_name(&self, table: &str) -> String {
        self.escape(&format!("PK_{table}"))
    }

    fn primary_key_constraint_clause(&self, table: &str, column_list: &str) -> String {
        format!(
            ", CONSTRAINT {} PRIMARY KEY CLUSTERED ({})",
            self.primary_key_constraint_name(table),
            column_list
        )
    }

    fn constraint_column(&self, column: &str) -> String {
        format!("{} ASC", self.escape(column))
    }

    fn rename_column_sql(&self, schema: &str, table: &str, current: &str, new: &str) -> String {
        format!("sp_rename '[{schema}].[{table}].[{current}]', '{new}', 'COLUMN'")
    }

    fn foreign_key_catalog_query(&self) -> Option<&'static str> {
        Some(catalog::FOREIGN_KEY_CONSTRAINTS_QUERY)
    }

    fn primary_key_catalog_query(&self) -> Option<&'static str> {
        Some(catalog::PRIMARY_KEY_CONSTRAINTS_QUERY)
    }

    fn user_tables_query(&self) -> &'static str {
        catalog::USER_TABLES_QUERY
    }

    fn schema_catalog_query(&self) -> Option<&'static str> {
        Some(catalog::SCHEMAS_QUERY)
    }

    fn builtin_schemas(&self) -> &'static [&'static str] {
        catalog::BUILTIN_SCHEMAS
    }

    fn disable_constraints_sql(&self) -> Option<&'static str> {
        Some(catalog::DISABLE_KEY_CONSTRAINTS_SQL)
    }

    fn enable_constraints_sql(&self) -> Option<&'static str> {
        Some(catalog::ENABLE_KEY_CONSTRAINTS_SQL)
    }

    fn delete_all_rows_sql(&self) -> Option<&'static str> {
        Some(catalog::DELETE_ALL_ROWS_SQL)
    }

    fn id_column(&self) -> ColumnSpec {
        ColumnSpec::new("Id", "int").identity(true).primary_key(true)
    }

    fn guid_id_column(&self) -> ColumnSpec {
        ColumnSpec::new("Id", "uniqueidentifier").primary_key(true)
    }

    fn connect(&self, config: &ConnectionConfig) -> Result<Box<dyn DatabaseAdapter>> {
        Ok(Box::new(MssqlAdapter::connect(config)?))
    }
}
