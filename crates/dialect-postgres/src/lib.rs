mod adapter;

pub use adapter::PostgresAdapter;

use seedql_core::{ColumnSpec, ConnectionConfig, DatabaseAdapter, Dialect, Result};

/// Catalog query for user tables in the `public` schema.
const USER_TABLES_QUERY: &str = r"
select table_name,
       table_schema
from information_schema.tables
where table_schema = 'public'";

/// Postgres grammar and `information_schema` catalog layout.
///
/// Known limitations, preserved from the reference behavior: the purge
/// protocol has no Postgres catalog queries for foreign keys, primary keys,
/// or custom schemas, so those phases are no-ops here; delete-all has no
/// Postgres scripts and reports itself unsupported.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn escape(&self, identifier: &str) -> String {
        identifier.to_string()
    }

    fn default_schema(&self) -> &'static str {
        "public"
    }

    fn identity_clause(&self) -> &'static str {
        ""
    }

    fn primary_key_constraint_name(&self, table: &str) -> String {
        format!("PK_{table}")
    }

    fn primary_key_constraint_clause(&self, table: &str, column_list: &str) -> String {
        format!(
            ", CONSTRAINT {} PRIMARY KEY ({})",
            self.primary_key_constraint_name(table),
            column_list
        )
    }

    fn constraint_column(&self, column: &str) -> String {
        self.escape(column)
    }

    fn rename_column_sql(&self, schema: &str, table: &str, current: &str, new: &str) -> String {
        format!("ALTER TABLE {schema}.{table} RENAME COLUMN {current} TO {new}")
    }

    fn foreign_key_catalog_query(&self) -> Option<&'static str> {
        None
    }

    fn primary_key_catalog_query(&self) -> Option<&'static str> {
        None
    }

    fn user_tables_query(&self) -> &'static str {
        USER_TABLES_QUERY
    }

    fn schema_catalog_query(&self) -> Option<&'static str> {
        None
    }

    fn builtin_schemas(&self) -> &'static [&'static str] {
        &[]
    }

    fn disable_constraints_sql(&self) -> Option<&'static str> {
        None
    }

    fn enable_constraints_sql(&self) -> Option<&'static str> {
        None
    }

    fn delete_all_rows_sql(&self) -> Option<&'static str> {
        None
    }

    fn id_column(&self) -> ColumnSpec {
        ColumnSpec::new("Id", "SERIAL").identity(true).primary_key(true)
    }

    fn guid_id_column(&self) -> ColumnSpec {
        ColumnSpec::new("Id", "uuid").primary_key(true)
    }

    fn connect(&self, config: &ConnectionConfig) -> Result<Box<dyn DatabaseAdapter>> {
        Ok(Box::new(PostgresAdapter::connect(config)?))
    }
}
