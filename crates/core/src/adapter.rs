use crate::Result;

/// One materialized catalog row, addressable by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    values: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.push((column.into(), value.into()));
    }

    /// The first column's value, used for scalar reads.
    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(|(_, value)| value.as_str())
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

/// The injected execution capability. Implementations own connection
/// lifetime, wire protocol, and timeout policy; this core only issues
/// command strings and reads rows back.
pub trait DatabaseAdapter {
    /// Execute a statement with no result set.
    fn execute(&mut self, sql: &str) -> Result<()>;

    /// Execute a query and materialize every row.
    fn query(&mut self, sql: &str) -> Result<Vec<Row>>;

    /// Execute a query and return the first column of the first row, if any.
    fn query_scalar(&mut self, sql: &str) -> Result<Option<String>>;
}
