use tracing::{debug, info};

use crate::{
    DatabaseAdapter, DdlGenerator, Dialect, ExecutionError, Result, Row, UnsupportedOperationError,
};

/// One row read from catalog metadata during a purge. Never persisted;
/// consumed immediately to build the matching drop statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub schema_name: String,
    pub table_name: String,
    pub constraint_name: Option<String>,
}

/// Drives the destructive catalog protocols: the four-phase purge and the
/// delete-all-records sweep. Assumes exclusive access to the target database
/// for its duration; no locking is performed here.
pub struct PurgeEngine<'a> {
    dialect: &'a dyn Dialect,
    generator: DdlGenerator<'a>,
    adapter: &'a mut dyn DatabaseAdapter,
}

impl<'a> PurgeEngine<'a> {
    pub fn new(dialect: &'a dyn Dialect, adapter: &'a mut dyn DatabaseAdapter) -> Self {
        Self {
            dialect,
            generator: DdlGenerator::new(dialect),
            adapter,
        }
    }

    /// Drop every foreign key, then every primary key, then every user
    /// table, then every non-default schema. The phase order is a hard
    /// invariant: constraints must be gone before their tables, and tables
    /// before their schemas. Each phase is idempotent against an empty
    /// catalog.
    pub fn purge_database(&mut self) -> Result<()> {
        self.drop_all_foreign_keys()?;
        self.drop_all_primary_keys()?;
        self.drop_all_tables()?;
        self.drop_custom_schemas()
    }

    fn drop_all_foreign_keys(&mut self) -> Result<()> {
        let Some(query) = self.dialect.foreign_key_catalog_query() else {
            debug!(
                dialect = self.dialect.name(),
                "no foreign-key catalog query; skipping phase"
            );
            return Ok(());
        };

        self.drop_constraints_from(query)
    }

    fn drop_all_primary_keys(&mut self) -> Result<()> {
        let Some(query) = self.dialect.primary_key_catalog_query() else {
            debug!(
                dialect = self.dialect.name(),
                "no primary-key catalog query; skipping phase"
            );
            return Ok(());
        };

        self.drop_constraints_from(query)
    }

    fn drop_constraints_from(&mut self, query: &str) -> Result<()> {
        let entries = self.constraint_entries(query)?;
        info!(count = entries.len(), "dropping constraints");

        for entry in entries {
            let constraint = entry.constraint_name.as_deref().unwrap_or_default();
            let sql =
                self.generator
                    .drop_constraint_sql(&entry.schema_name, &entry.table_name, constraint);
            self.adapter.execute(&sql)?;
        }

        Ok(())
    }

    fn drop_all_tables(&mut self) -> Result<()> {
        let query = self.dialect.user_tables_query();
        let entries = self.table_entries(query)?;
        info!(count = entries.len(), "dropping user tables");

        for entry in entries {
            let sql = format!(
                "drop table {}",
                self.generator
                    .qualified_table_name(&entry.schema_name, &entry.table_name)
            );
            self.adapter.execute(&sql)?;
        }

        Ok(())
    }

    fn drop_custom_schemas(&mut self) -> Result<()> {
        let Some(query) = self.dialect.schema_catalog_query() else {
            debug!(
                dialect = self.dialect.name(),
                "no schema catalog query; skipping phase"
            );
            return Ok(());
        };

        let rows = self.adapter.query(query)?;
        let builtin = self.dialect.builtin_schemas();

        for row in rows {
            let name = required_column(&row, "name", query)?;
            if builtin.contains(&name.as_str()) {
                continue;
            }

            let sql = format!("drop schema {}", self.dialect.escape(&name));
            self.adapter.execute(&sql)?;
        }

        Ok(())
    }

    /// Disable every key constraint, delete every row of every table, then
    /// re-enable constraints. Fails up front on a dialect that does not
    /// supply the scripts; nothing is executed in that case.
    pub fn delete_all_records(&mut self) -> Result<()> {
        let disable = self.require_script(self.dialect.disable_constraints_sql(), "disable key constraints")?;
        let delete = self.require_script(self.dialect.delete_all_rows_sql(), "delete all records")?;
        let enable = self.require_script(self.dialect.enable_constraints_sql(), "enable key constraints")?;

        info!(dialect = self.dialect.name(), "deleting all records");
        self.adapter.execute(disable)?;
        self.adapter.execute(delete)?;
        self.adapter.execute(enable)
    }

    fn require_script(
        &self,
        script: Option<&'static str>,
        operation: &str,
    ) -> Result<&'static str> {
        script.ok_or_else(|| {
            UnsupportedOperationError::new(operation, self.dialect.name()).into()
        })
    }

    fn constraint_entries(&mut self, query: &str) -> Result<Vec<CatalogEntry>> {
        let rows = self.adapter.query(query)?;
        rows.iter()
            .map(|row| {
                Ok(CatalogEntry {
                    schema_name: required_column(row, "table_schema", query)?,
                    table_name: required_column(row, "table_name", query)?,
                    constraint_name: Some(required_column(row, "constraint_name", query)?),
                })
            })
            .collect()
    }

    fn table_entries(&mut self, query: &str) -> Result<Vec<CatalogEntry>> {
        let rows = self.adapter.query(query)?;
        rows.iter()
            .map(|row| {
                Ok(CatalogEntry {
                    schema_name: required_column(row, "table_schema", query)?,
                    table_name: required_column(row, "table_name", query)?,
                    constraint_name: None,
                })
            })
            .collect()
    }
}

fn required_column(row: &Row, column: &str, sql: &str) -> Result<String> {
    row.get(column)
        .map(str::to_string)
        .ok_or_else(|| {
            ExecutionError::MissingColumn {
                sql: sql.to_string(),
                column: column.to_string(),
            }
            .into()
        })
}
