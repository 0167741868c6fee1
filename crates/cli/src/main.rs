use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use seedql_core::{ConnectionConfig, Dialect, PurgeEngine};

#[derive(Debug, Parser)]
#[command(name = "seedql", about = "Dialect-aware schema seeding and purge tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Target backend.
    #[arg(long, value_enum)]
    dialect: DialectKind,

    #[arg(long)]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,

    #[arg(long)]
    user: Option<String>,

    #[arg(long)]
    password: Option<String>,

    #[arg(long)]
    database: String,

    /// Confirm the destructive operation. Nothing runs without it.
    #[arg(long)]
    yes: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Drop every foreign key, primary key, user table, and custom schema.
    Purge,
    /// Delete every row of every table, with key constraints disabled for
    /// the duration.
    DeleteAll,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DialectKind {
    Mssql,
    Postgres,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if !cli.yes {
        bail!("refusing to run a destructive command without --yes");
    }

    let dialect = dialect_for(cli.dialect)?;
    let config = connection_config(&cli);
    let mut adapter = dialect
        .connect(&config)
        .with_context(|| format!("connecting to {} database `{}`", dialect.name(), cli.database))?;

    let mut engine = PurgeEngine::new(dialect.as_ref(), adapter.as_mut());
    match cli.command {
        Command::Purge => engine.purge_database().context("purging database")?,
        Command::DeleteAll => engine
            .delete_all_records()
            .context("deleting all records")?,
    }

    Ok(())
}

fn dialect_for(kind: DialectKind) -> anyhow::Result<Box<dyn Dialect>> {
    match kind {
        #[cfg(feature = "mssql")]
        DialectKind::Mssql => Ok(Box::new(seedql_dialect_mssql::MssqlDialect)),
        #[cfg(feature = "postgres")]
        DialectKind::Postgres => Ok(Box::new(seedql_dialect_postgres::PostgresDialect)),
        #[allow(unreachable_patterns)]
        _ => bail!("dialect `{kind:?}` is not enabled in this build"),
    }
}

fn connection_config(cli: &Cli) -> ConnectionConfig {
    ConnectionConfig {
        host: cli.host.clone(),
        port: cli.port,
        user: cli.user.clone(),
        password: cli.password.clone(),
        database: cli.database.clone(),
        ..ConnectionConfig::default()
    }
}
