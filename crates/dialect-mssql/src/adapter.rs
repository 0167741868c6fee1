use std::{error::Error as StdError, io};

use futures_util::TryStreamExt;
use seedql_core::{ConnectionConfig, DatabaseAdapter, ExecutionError, Result, Row};
use tiberius::{AuthMethod, Client, Config, QueryItem};
use tokio::{
    net::TcpStream,
    runtime::{Builder, Runtime},
};
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

type TdsClient = Client<Compat<TcpStream>>;

const CONNECT_SQL: &str = "CONNECT mssql";
const DEFAULT_MSSQL_HOST: &str = "127.0.0.1";
const DEFAULT_MSSQL_PORT: u16 = 1433;

/// Blocking adapter over the async TDS driver. A dedicated current-thread
/// runtime drives the client, so callers see the synchronous
/// [`DatabaseAdapter`] surface and nothing else.
pub struct MssqlAdapter {
    runtime: Runtime,
    client: TdsClient,
}

impl MssqlAdapter {
    pub fn connect(config: &ConnectionConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|source| execution_error(CONNECT_SQL, source))?;
        let tds_config = build_tiberius_config(config)?;

        let client = runtime.block_on(async {
            let tcp = TcpStream::connect(tds_config.get_addr())
                .await
                .map_err(|source| execution_error(CONNECT_SQL, source))?;
            tcp.set_nodelay(true)
                .map_err(|source| execution_error(CONNECT_SQL, source))?;

            Client::connect(tds_config, tcp.compat_write())
                .await
                .map_err(|source| execution_error(CONNECT_SQL, source))
        })?;

        Ok(Self { runtime, client })
    }
}

impl DatabaseAdapter for MssqlAdapter {
    fn execute(&mut self, sql: &str) -> Result<()> {
        let Self { runtime, client } = self;

        runtime.block_on(async {
            let mut stream = client
                .simple_query(sql)
                .await
                .map_err(|source| execution_error(sql, source))?;
            while stream
                .try_next()
                .await
                .map_err(|source| execution_error(sql, source))?
                .is_some()
            {}
            Ok(())
        })
    }

    fn query(&mut self, sql: &str) -> Result<Vec<Row>> {
        let Self { runtime, client } = self;

        runtime.block_on(async {
            let mut stream = client
                .simple_query(sql)
                .await
                .map_err(|source| execution_error(sql, source))?;
            let mut rows = Vec::new();

            while let Some(item) = stream
                .try_next()
                .await
                .map_err(|source| execution_error(sql, source))?
            {
                if let QueryItem::Row(tds_row) = item {
                    rows.push(materialize_row(&tds_row));
                }
            }

            Ok(rows)
        })
    }

    fn query_scalar(&mut self, sql: &str) -> Result<Option<String>> {
        let rows = self.query(sql)?;

        Ok(rows.first().and_then(Row::first_value).map(str::to_string))
    }
}

fn materialize_row(tds_row: &tiberius::Row) -> Row {
    let mut row = Row::new();

    for (index, column) in tds_row.columns().iter().enumerate() {
        let value = tds_row
            .get::<&str, usize>(index)
            .unwrap_or_default()
            .to_string();
        row.push(column.name(), value);
    }

    row
}

fn build_tiberius_config(config: &ConnectionConfig) -> Result<Config> {
    let host = config.host.as_deref().unwrap_or(DEFAULT_MSSQL_HOST);
    let port = config.port.unwrap_or(DEFAULT_MSSQL_PORT);
    let user = config
        .user
        .clone()
        .ok_or_else(|| execution_error(CONNECT_SQL, io::Error::other("mssql user is required")))?;
    let password = config.password.clone().unwrap_or_default();

    let mut tds_config = Config::new();
    tds_config.host(host);
    tds_config.port(port);
    tds_config.database(config.database.clone());
    tds_config.authentication(AuthMethod::sql_server(user, password));
    tds_config.trust_cert();

    Ok(tds_config)
}

fn execution_error<E>(sql: &str, source: E) -> seedql_core::Error
where
    E: StdError + Send + Sync + 'static,
{
    ExecutionError::statement_failed(sql, source).into()
}
