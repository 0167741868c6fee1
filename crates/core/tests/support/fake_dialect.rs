#![allow(dead_code)]

use seedql_core::{
    ColumnSpec, ConnectionConfig, DatabaseAdapter, Dialect, Result, UnsupportedOperationError,
};

pub const FK_CATALOG_QUERY: &str = "select fk constraints";
pub const PK_CATALOG_QUERY: &str = "select pk constraints";
pub const TABLES_QUERY: &str = "select user tables";
pub const SCHEMAS_QUERY: &str = "select schemas";
pub const DISABLE_SQL: &str = "disable key constraints";
pub const ENABLE_SQL: &str = "enable key constraints";
pub const DELETE_ALL_SQL: &str = "delete every row";

/// Deterministic dialect for core tests: double-quote escaping, `main` as
/// the default schema. The `bare` variant supplies no catalog queries and no
/// delete-all scripts, like a backend with an unimplemented catalog surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct FakeDialect {
    bare: bool,
}

impl FakeDialect {
    pub fn bare() -> Self {
        Self { bare: true }
    }
}

impl Dialect for FakeDialect {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn escape(&self, identifier: &str) -> String {
        format!("\"{identifier}\"")
    }

    fn default_schema(&self) -> &'static str {
        "main"
    }

    fn identity_clause(&self) -> &'static str {
        " AUTOINCREMENT"
    }

    fn primary_key_constraint_name(&self, table: &str) -> String {
        self.escape(&format!("PK_{table}"))
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
        format!("rename column {schema}.{table}.{current} to {new}")
    }

    fn foreign_key_catalog_query(&self) -> Option<&'static str> {
        (!self.bare).then_some(FK_CATALOG_QUERY)
    }

    fn primary_key_catalog_query(&self) -> Option<&'static str> {
        (!self.bare).then_some(PK_CATALOG_QUERY)
    }

    fn user_tables_query(&self) -> &'static str {
        TABLES_QUERY
    }

    fn schema_catalog_query(&self) -> Option<&'static str> {
        (!self.bare).then_some(SCHEMAS_QUERY)
    }

    fn builtin_schemas(&self) -> &'static [&'static str] {
        &["main"]
    }

    fn disable_constraints_sql(&self) -> Option<&'static str> {
        (!self.bare).then_some(DISABLE_SQL)
    }

    fn enable_constraints_sql(&self) -> Option<&'static str> {
        (!self.bare).then_some(ENABLE_SQL)
    }

    fn delete_all_rows_sql(&self) -> Option<&'static str> {
        (!self.bare).then_some(DELETE_ALL_SQL)
    }

    fn id_column(&self) -> ColumnSpec {
        ColumnSpec::new("Id", "integer").identity(true).primary_key(true)
    }

    fn guid_id_column(&self) -> ColumnSpec {
        ColumnSpec::new("Id", "guid").primary_key(true)
    }

    fn connect(&self, _config: &ConnectionConfig) -> Result<Box<dyn DatabaseAdapter>> {
        Err(UnsupportedOperationError::new("connect", self.name()).into())
    }
}
