use tracing::debug;

use crate::{DatabaseAdapter, Result};

/// What one migration step produces: a single command or an ordered batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSet {
    Single(String),
    Batch(Vec<String>),
}

impl From<String> for ScriptSet {
    fn from(script: String) -> Self {
        Self::Single(script)
    }
}

impl From<&str> for ScriptSet {
    fn from(script: &str) -> Self {
        Self::Single(script.to_string())
    }
}

impl From<Vec<String>> for ScriptSet {
    fn from(scripts: Vec<String>) -> Self {
        Self::Batch(scripts)
    }
}

/// A named, zero-argument unit of migration. The name is the step's
/// identity: bounded execution and export file naming both key on it, so
/// callers assign names unique within a sequence.
///
/// The producer may itself read the database (a drop-constraint lookup, for
/// example), which is why it is fallible.
pub struct MigrationStep {
    name: String,
    produce: Box<dyn Fn() -> Result<ScriptSet>>,
}

impl MigrationStep {
    pub fn new(
        name: impl Into<String>,
        produce: impl Fn() -> Result<ScriptSet> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            produce: Box::new(produce),
        }
    }

    /// A step with a fixed single script.
    pub fn single(name: impl Into<String>, script: impl Into<String>) -> Self {
        let script = script.into();
        Self::new(name, move || Ok(ScriptSet::Single(script.clone())))
    }

    /// A step with a fixed ordered batch of scripts.
    pub fn batch(name: impl Into<String>, scripts: Vec<String>) -> Self {
        Self::new(name, move || Ok(ScriptSet::Batch(scripts.clone())))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn produce(&self) -> Result<ScriptSet> {
        (self.produce)()
    }
}

impl std::fmt::Debug for MigrationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MigrationStep")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Executes migration steps in caller order. No partial-failure recovery:
/// the first execution error aborts the remaining sequence and propagates.
/// Already-executed statements are not rolled back.
pub struct MigrationRunner<'a> {
    adapter: &'a mut dyn DatabaseAdapter,
}

impl<'a> MigrationRunner<'a> {
    #[must_use]
    pub fn new(adapter: &'a mut dyn DatabaseAdapter) -> Self {
        Self { adapter }
    }

    pub fn execute_step(&mut self, step: &MigrationStep) -> Result<()> {
        debug!(step = step.name(), "executing migration step");

        match step.produce()? {
            ScriptSet::Single(sql) => self.adapter.execute(&sql),
            ScriptSet::Batch(scripts) => {
                for sql in &scripts {
                    self.adapter.execute(sql)?;
                }
                Ok(())
            }
        }
    }

    pub fn execute_all(&mut self, steps: &[MigrationStep]) -> Result<()> {
        for step in steps {
            self.execute_step(step)?;
        }

        Ok(())
    }

    /// Execute every step strictly before the first step named `target`.
    /// The target itself is never invoked. An unknown target executes the
    /// whole sequence.
    pub fn execute_up_to(&mut self, steps: &[MigrationStep], target: &str) -> Result<()> {
        for step in steps {
            if step.name() == target {
                break;
            }

            self.execute_step(step)?;
        }

        Ok(())
    }

    /// Execute every step through the first step named `target` inclusive,
    /// then stop.
    pub fn execute_to(&mut self, steps: &[MigrationStep], target: &str) -> Result<()> {
        for step in steps {
            self.execute_step(step)?;

            if step.name() == target {
                break;
            }
        }

        Ok(())
    }
}
