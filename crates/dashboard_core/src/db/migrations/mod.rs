//! Ordered schema steps for the slot database.
//!
//! Each step is a plain SQL script embedded at compile time. The step number
//! doubles as the schema version stored in `PRAGMA user_version`.
//!
//! # Invariants
//! - Step versions start at 1 and increase by exactly one.
//! - Pending steps and the version bump commit together or not at all.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// One embedded schema step.
#[derive(Debug, Clone, Copy)]
struct SchemaStep {
    version: u32,
    script: &'static str,
}

const STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    script: include_str!("0001_init.sql"),
}];

/// Schema version produced by running every embedded step.
pub fn latest_version() -> u32 {
    STEPS.last().map_or(0, |step| step.version)
}

/// Reads the schema version recorded in the database file.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}

/// Brings `conn` up to [`latest_version`].
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file is ahead of this build.
/// - `Sqlite` when a step fails; the transaction is rolled back.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from = schema_version(conn)?;
    let to = latest_version();

    if from > to {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: to,
        });
    }
    if from == to {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for step in pending_steps(from) {
        tx.execute_batch(step.script)?;
    }
    // PRAGMA does not accept bound parameters.
    tx.execute_batch(&format!("PRAGMA user_version = {to};"))?;
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={} to_version={}",
        from, to
    );
    Ok(())
}

fn pending_steps(from: u32) -> impl Iterator<Item = &'static SchemaStep> {
    STEPS.iter().filter(move |step| step.version > from)
}

#[cfg(test)]
mod tests {
    use super::{pending_steps, STEPS};

    #[test]
    fn step_versions_are_contiguous_from_one() {
        for (index, step) in STEPS.iter().enumerate() {
            assert_eq!(step.version as usize, index + 1);
        }
    }

    #[test]
    fn up_to_date_file_has_no_pending_steps() {
        assert_eq!(pending_steps(0).count(), STEPS.len());
        assert_eq!(pending_steps(STEPS.len() as u32).count(), 0);
    }
}
