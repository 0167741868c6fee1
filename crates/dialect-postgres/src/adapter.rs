use std::error::Error as StdError;

use postgres::{Client, NoTls};
use seedql_core::{ConnectionConfig, DatabaseAdapter, ExecutionError, Result, Row};

const CONNECT_SQL: &str = "CONNECT postgres";
const DEFAULT_POSTGRES_HOST: &str = "127.0.0.1";

/// Blocking adapter over the synchronous `postgres` client.
///
/// Catalog reads project text columns only; a query returning non-text
/// values surfaces the driver's conversion failure as an execution error.
pub struct PostgresAdapter {
    client: Client,
}

impl PostgresAdapter {
    pub fn connect(config: &ConnectionConfig) -> Result<Self> {
        let mut postgres_config = postgres::Config::new();

        if let Some(socket_path) = &config.socket {
            postgres_config.host_path(socket_path);
        } else if let Some(host) = &config.host {
            postgres_config.host(host);
        } else {
            postgres_config.host(DEFAULT_POSTGRES_HOST);
        }

        if let Some(port) = config.port {
            postgres_config.port(port);
        }
        if let Some(user) = &config.user {
            postgres_config.user(user);
        }
        if let Some(password) = &config.password {
            postgres_config.password(password);
        }
        postgres_config.dbname(&config.database);

        let client = postgres_config
            .connect(NoTls)
            .map_err(|source| execution_error(CONNECT_SQL, source))?;

        Ok(Self { client })
    }
}

impl DatabaseAdapter for PostgresAdapter {
    fn execute(&mut self, sql: &str) -> Result<()> {
        self.client
            .batch_execute(sql)
            .map_err(|source| execution_error(sql, source))
    }

    fn query(&mut self, sql: &str) -> Result<Vec<Row>> {
        let pg_rows = self
            .client
            .query(sql, &[])
            .map_err(|source| execution_error(sql, source))?;

        pg_rows
            .iter()
            .map(|pg_row| materialize_row(pg_row, sql))
            .collect()
    }

    fn query_scalar(&mut self, sql: &str) -> Result<Option<String>> {
        let rows = self.query(sql)?;

        Ok(rows.first().and_then(Row::first_value).map(str::to_string))
    }
}

fn materialize_row(pg_row: &postgres::Row, sql: &str) -> Result<Row> {
    let mut row = Row::new();

    for (index, column) in pg_row.columns().iter().enumerate() {
        let value = pg_row
            .try_get::<usize, Option<String>>(index)
            .map_err(|source| execution_error(sql, source))?
            .unwrap_or_default();
        row.push(column.name(), value);
    }

    Ok(row)
}

fn execution_error<E>(sql: &str, source: E) -> seedql_core::Error
where
    E: StdError + Send + Sync + 'static,
{
    ExecutionError::statement_failed(sql, source).into()
}
