use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{ExportError, MigrationStep, Result, ScriptSet};

/// Writes each step's script(s) into a directory as numbered `.sql` files:
/// `"{order} - {name}.sql"` for single scripts, `"{order} - {part} -
/// {name}.sql"` for batches, with order and part starting at 1. Existing
/// files are overwritten; no manifest is produced.
pub struct ScriptExporter {
    directory: PathBuf,
}

impl ScriptExporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Invoke every step in order and write its output. Returns the written
    /// paths in creation order.
    pub fn export(&self, steps: &[MigrationStep]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        for (index, step) in steps.iter().enumerate() {
            let order = index + 1;

            match step.produce()? {
                ScriptSet::Single(script) => {
                    let name = format!("{order} - {}.sql", step.name());
                    written.push(self.write_script(&name, &script)?);
                }
                ScriptSet::Batch(scripts) => {
                    for (part, script) in scripts.iter().enumerate() {
                        let name = format!("{order} - {} - {}.sql", part + 1, step.name());
                        written.push(self.write_script(&name, script)?);
                    }
                }
            }
        }

        Ok(written)
    }

    fn write_script(&self, file_name: &str, script: &str) -> Result<PathBuf> {
        let path = self.directory.join(file_name);
        debug!(path = %path.display(), "writing script file");

        write_all_text(&path, script)?;
        Ok(path)
    }
}

fn write_all_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| {
        ExportError {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}
