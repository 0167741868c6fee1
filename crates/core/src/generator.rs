use crate::{ColumnSpec, DatabaseAdapter, Dialect, Result, SpecError, TableSpec};

/// Builds DDL statements from column specs and the active dialect's syntax
/// rules. Pure synthesis except for [`DdlGenerator::drop_constraint_in`],
/// which resolves a constraint name through the adapter first.
#[derive(Clone, Copy)]
pub struct DdlGenerator<'a> {
    dialect: &'a dyn Dialect,
}

impl<'a> DdlGenerator<'a> {
    #[must_use]
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self { dialect }
    }

    /// `CREATE TABLE` for the given spec. A spec without a schema lands in
    /// the dialect's default schema; a spec with an empty schema produces an
    /// unqualified table name.
    pub fn create_table(&self, table: &TableSpec) -> Result<String> {
        let schema = table.schema().unwrap_or_else(|| self.dialect.default_schema());
        self.create_table_in(schema, table.name(), table.columns())
    }

    pub fn create_table_in(
        &self,
        schema: &str,
        table: &str,
        columns: &[ColumnSpec],
    ) -> Result<String> {
        let mut definitions = Vec::with_capacity(columns.len());
        let mut primary_key_columns = Vec::new();

        for column in columns {
            if column.is_primary_key() {
                primary_key_columns.push(self.dialect.constraint_column(column.name()));
            }

            definitions.push(self.column_fragment(column)?);
        }

        let mut sql = format!(
            "CREATE TABLE {}({}",
            self.qualified_table_name(schema, table),
            definitions.join(", ")
        );

        if !primary_key_columns.is_empty() {
            sql.push_str(
                &self
                    .dialect
                    .primary_key_constraint_clause(table, &primary_key_columns.join(", ")),
            );
        }

        sql.push(')');
        Ok(sql)
    }

    pub fn drop_table(&self, table: &str) -> String {
        format!("drop table {}", self.dialect.escape(table))
    }

    /// `ALTER TABLE ... ADD` for the spec's columns. Schema defaulting works
    /// as in [`DdlGenerator::create_table`].
    pub fn add_columns(&self, table: &TableSpec) -> Result<String> {
        let schema = table.schema().unwrap_or_else(|| self.dialect.default_schema());
        self.add_columns_in(schema, table.name(), table.columns())
    }

    pub fn add_columns_in(
        &self,
        schema: &str,
        table: &str,
        columns: &[ColumnSpec],
    ) -> Result<String> {
        let fragments = columns
            .iter()
            .map(|column| self.column_fragment(column))
            .collect::<Result<Vec<_>>>()?;

        Ok(format!(
            "ALTER TABLE {} ADD {}",
            self.qualified_table_name(schema, table),
            fragments.join(", ")
        ))
    }

    pub fn create_schema(&self, schema: &str) -> String {
        format!("CREATE SCHEMA {schema}")
    }

    pub fn rename_column(&self, table: &str, current: &str, new: &str) -> String {
        self.rename_column_in(self.dialect.default_schema(), table, current, new)
    }

    pub fn rename_column_in(&self, schema: &str, table: &str, current: &str, new: &str) -> String {
        self.dialect.rename_column_sql(schema, table, current, new)
    }

    pub fn drop_column(&self, table: &str, column: &str) -> String {
        self.drop_column_in(self.dialect.default_schema(), table, column)
    }

    pub fn drop_column_in(&self, schema: &str, table: &str, column: &str) -> String {
        format!(
            "alter table {} drop column {}",
            self.qualified_table_name(schema, table),
            self.dialect.escape(column)
        )
    }

    /// Drop the constraint bound to `column`, resolving its name through the
    /// adapter. Finding no constraint is a spec error, not silent DDL.
    pub fn drop_constraint(
        &self,
        adapter: &mut dyn DatabaseAdapter,
        table: &str,
        column: &str,
    ) -> Result<String> {
        self.drop_constraint_in(adapter, self.dialect.default_schema(), table, column)
    }

    pub fn drop_constraint_in(
        &self,
        adapter: &mut dyn DatabaseAdapter,
        schema: &str,
        table: &str,
        column: &str,
    ) -> Result<String> {
        let lookup = self.dialect.constraint_name_query(schema, table, column);
        let name = adapter
            .query_scalar(&lookup)?
            .ok_or_else(|| SpecError::ConstraintNotFound {
                schema: schema.to_string(),
                table: table.to_string(),
                column: column.to_string(),
            })?;

        Ok(self.drop_constraint_sql(schema, table, &name))
    }

    pub fn drop_constraint_sql(&self, schema: &str, table: &str, constraint: &str) -> String {
        format!(
            "alter table {} drop constraint {}",
            self.qualified_table_name(schema, table),
            constraint
        )
    }

    pub(crate) fn qualified_table_name(&self, schema: &str, table: &str) -> String {
        let table = self.dialect.escape(table);
        if schema.is_empty() {
            return table;
        }

        format!("{}.{}", self.dialect.escape(schema), table)
    }

    /// One column definition: escaped name, type, null token, default
    /// clause, identity clause, foreign-key clause. Absent pieces leave
    /// doubled spaces behind, which the final collapse removes.
    fn column_fragment(&self, column: &ColumnSpec) -> Result<String> {
        validate(column)?;

        let identity = if column.is_identity() {
            self.dialect.identity_clause()
        } else {
            ""
        };
        let foreign_key = match column.foreign_key_target() {
            Some(target) => format!(" FOREIGN KEY REFERENCES {target}"),
            None => String::new(),
        };

        let fragment = format!(
            "{} {} {} {}{}{}",
            self.dialect.escape(column.name()),
            column.sql_type(),
            column.null_definition(),
            column.default_value_definition(),
            identity,
            foreign_key,
        );

        Ok(collapse_spaces(fragment.trim()))
    }
}

fn validate(column: &ColumnSpec) -> Result<()> {
    if column.name().is_empty() {
        return Err(SpecError::EmptyColumnName.into());
    }

    if column.sql_type().is_empty() {
        return Err(SpecError::EmptySqlType {
            column: column.name().to_string(),
        }
        .into());
    }

    Ok(())
}

fn collapse_spaces(raw: &str) -> String {
    let mut collapsed = String::with_capacity(raw.len());
    let mut previous_was_space = false;

    for ch in raw.chars() {
        if ch == ' ' {
            if !previous_was_space {
                collapsed.push(ch);
            }
            previous_was_space = true;
        } else {
            collapsed.push(ch);
            previous_was_space = false;
        }
    }

    collapsed
}
