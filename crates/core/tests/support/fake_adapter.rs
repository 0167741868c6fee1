#![allow(dead_code)]

use std::{error::Error as StdError, fmt};

use seedql_core::{DatabaseAdapter, ExecutionError, Result, Row};

#[derive(Debug)]
struct FailureRule {
    sql: String,
    message: String,
}

/// Recording adapter for tests: scripted query results, an optional
/// fail-on-sql rule, and full traces of executed and queried SQL.
#[derive(Debug, Default)]
pub struct FakeAdapter {
    executed_sql: Vec<String>,
    queried_sql: Vec<String>,
    query_results: Vec<(String, Vec<Row>)>,
    scalar_results: Vec<(String, String)>,
    fail_on_sql: Option<FailureRule>,
}

impl FakeAdapter {
    pub fn set_query_result(&mut self, sql: impl Into<String>, rows: Vec<Row>) {
        self.query_results.push((sql.into(), rows));
    }

    pub fn set_scalar_result(&mut self, sql: impl Into<String>, value: impl Into<String>) {
        self.scalar_results.push((sql.into(), value.into()));
    }

    pub fn set_fail_on_sql(&mut self, sql: impl Into<String>, message: impl Into<String>) {
        self.fail_on_sql = Some(FailureRule {
            sql: sql.into(),
            message: message.into(),
        });
    }

    pub fn executed_sql(&self) -> &[String] {
        &self.executed_sql
    }

    pub fn queried_sql(&self) -> &[String] {
        &self.queried_sql
    }
}

impl DatabaseAdapter for FakeAdapter {
    fn execute(&mut self, sql: &str) -> Result<()> {
        if let Some(rule) = &self.fail_on_sql
            && rule.sql == sql
        {
            return Err(ExecutionError::statement_failed(
                sql,
                FakeSourceError(rule.message.clone()),
            )
            .into());
        }

        self.executed_sql.push(sql.to_string());
        Ok(())
    }

    fn query(&mut self, sql: &str) -> Result<Vec<Row>> {
        self.queried_sql.push(sql.to_string());

        Ok(self
            .query_results
            .iter()
            .find(|(key, _)| key == sql)
            .map(|(_, rows)| rows.clone())
            .unwrap_or_default())
    }

    fn query_scalar(&mut self, sql: &str) -> Result<Option<String>> {
        self.queried_sql.push(sql.to_string());

        Ok(self
            .scalar_results
            .iter()
            .find(|(key, _)| key == sql)
            .map(|(_, value)| value.clone()))
    }
}

#[derive(Debug)]
struct FakeSourceError(String);

impl fmt::Display for FakeSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for FakeSourceError {}
