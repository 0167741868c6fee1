/// Default values that render as bare SQL function calls instead of
/// quoted literals.
const RESERVED_DEFAULTS: [&str; 3] = ["getdate()", "newid()", "getutcdate()"];

/// Canonical, dialect-independent description of one column.
///
/// The `sql_type` is carried verbatim into the generated DDL, so it is the
/// caller's choice of dialect-specific type literal (`"int"`, `"SERIAL"`,
/// `"nvarchar(50)"`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    name: String,
    sql_type: String,
    nullable: bool,
    identity: bool,
    primary_key: bool,
    default_value: Option<String>,
    foreign_key: Option<String>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            nullable: true,
            identity: false,
            primary_key: false,
            default_value: None,
            foreign_key: None,
        }
    }

    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    #[must_use]
    pub fn identity(mut self, identity: bool) -> Self {
        self.identity = identity;
        self
    }

    #[must_use]
    pub fn primary_key(mut self, primary_key: bool) -> Self {
        self.primary_key = primary_key;
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Target table/column expression, carried verbatim into the
    /// `FOREIGN KEY REFERENCES` clause.
    #[must_use]
    pub fn foreign_key(mut self, target: impl Into<String>) -> Self {
        self.foreign_key = Some(target.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    pub fn is_identity(&self) -> bool {
        self.identity
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn foreign_key_target(&self) -> Option<&str> {
        self.foreign_key.as_deref()
    }

    /// Primary-key and identity columns are never nullable, regardless of an
    /// explicit `nullable(true)`.
    pub fn allows_nulls(&self) -> bool {
        self.nullable && !self.primary_key && !self.identity
    }

    pub fn null_definition(&self) -> &'static str {
        if self.allows_nulls() { "NULL" } else { "NOT NULL" }
    }

    /// `DEFAULT(...)` clause, or the empty string when no default is set.
    /// Reserved function tokens are emitted unquoted; everything else is a
    /// quoted literal.
    pub fn default_value_definition(&self) -> String {
        let Some(value) = self.default_value.as_deref() else {
            return String::new();
        };

        if RESERVED_DEFAULTS.contains(&value.to_lowercase().as_str()) {
            format!("DEFAULT({value})")
        } else {
            format!("DEFAULT('{value}')")
        }
    }
}

/// A table identity plus its ordered columns. Column order is significant:
/// it fixes DDL column order and primary-key constraint column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    schema: Option<String>,
    name: String,
    columns: Vec<ColumnSpec>,
}

impl TableSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// An explicit schema. The empty string means "no schema prefix"; leaving
    /// the schema unset means "the dialect's default schema".
    #[must_use]
    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    #[must_use]
    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }
}
