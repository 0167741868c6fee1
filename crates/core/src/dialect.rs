use crate::{ColumnSpec, ConnectionConfig, DatabaseAdapter, Result};

/// The single capability set that varies between SQL grammars. Every DDL
/// method consults this trait instead of branching on a dialect tag, so a
/// third dialect is one new implementation, not a sweep over the codebase.
///
/// The syntax half is pure and total. The catalog half returns `None` for
/// queries a dialect does not provide; callers treat those as documented
/// no-ops or explicit unsupported-operation errors, never as crashes.
pub trait Dialect: Send + Sync {
    fn name(&self) -> &'static str;

    /// Quote one identifier. T-SQL brackets, Postgres identity.
    fn escape(&self, identifier: &str) -> String;

    fn default_schema(&self) -> &'static str;

    /// Clause appended to an identity column's definition. Empty on dialects
    /// that express identity through the type literal instead (`SERIAL`).
    fn identity_clause(&self) -> &'static str;

    /// `PK_{table}`, escaped per dialect.
    fn primary_key_constraint_name(&self, table: &str) -> String;

    /// The full table-level constraint clause, including the leading `", "`
    /// so the caller can append it directly after the column definitions.
    fn primary_key_constraint_clause(&self, table: &str, column_list: &str) -> String;

    /// One column inside a primary-key constraint column list.
    fn constraint_column(&self, column: &str) -> String;

    fn rename_column_sql(&self, schema: &str, table: &str, current: &str, new: &str) -> String;

    /// Catalog query projecting `constraint_name`, `table_name`,
    /// `table_schema` for every foreign-key constraint.
    fn foreign_key_catalog_query(&self) -> Option<&'static str>;

    /// Same projection, for primary-key constraints.
    fn primary_key_catalog_query(&self) -> Option<&'static str>;

    /// Catalog query projecting `table_name`, `table_schema` for every user
    /// table.
    fn user_tables_query(&self) -> &'static str;

    /// Catalog query projecting `name` for every schema, or `None` where
    /// schema enumeration is not supported.
    fn schema_catalog_query(&self) -> Option<&'static str>;

    /// Built-in schemas the purge must never drop.
    fn builtin_schemas(&self) -> &'static [&'static str];

    /// Lookup resolving the constraint bound to a column. The standard
    /// `KEY_COLUMN_USAGE` view is valid on both supported backends.
    fn constraint_name_query(&self, schema: &str, table: &str, column: &str) -> String {
        format!(
            "select CONSTRAINT_NAME \
             from INFORMATION_SCHEMA.KEY_COLUMN_USAGE \
             where CONSTRAINT_SCHEMA = '{schema}' and TABLE_NAME = '{table}' \
             and COLUMN_NAME = '{column}'"
        )
    }

    fn disable_constraints_sql(&self) -> Option<&'static str>;

    fn enable_constraints_sql(&self) -> Option<&'static str>;

    fn delete_all_rows_sql(&self) -> Option<&'static str>;

    /// The conventional auto-incrementing primary-key column for this
    /// dialect.
    fn id_column(&self) -> ColumnSpec;

    /// The conventional GUID primary-key column for this dialect.
    fn guid_id_column(&self) -> ColumnSpec;

    fn connect(&self, config: &ConnectionConfig) -> Result<Box<dyn DatabaseAdapter>>;
}
