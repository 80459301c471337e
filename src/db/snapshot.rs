use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{Database, SnapshotError, TableDef, sql::lexer::is_identifier};

/// Persists and restores a whole [`Database`].
///
/// Both operations are all-or-nothing and run outside command execution.
pub trait SnapshotStore {
    /// Writes the complete database.
    fn persist(&self, db: &Database) -> Result<(), SnapshotError>;

    /// Reads the complete database back.
    ///
    /// A missing snapshot is not an error: it yields an empty database.
    fn restore(&self) -> Result<Database, SnapshotError>;
}

/// A snapshot stored as a single JSON file.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// target, so a crash mid-write never leaves a truncated snapshot behind.
#[derive(Debug, Clone)]
pub struct JsonSnapshot {
    path: PathBuf,
}

impl JsonSnapshot {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for JsonSnapshot {
    fn persist(&self, db: &Database) -> Result<(), SnapshotError> {
        let temp_path = self.temp_path();

        let written = write_json(&temp_path, db)
            .and_then(|()| std::fs::rename(&temp_path, &self.path).map_err(SnapshotError::from));

        if let Err(err) = written {
            let _ = std::fs::remove_file(&temp_path);
            return Err(err);
        }

        info!(path = %self.path.display(), tables = db.tables.len(), "snapshot persisted");
        Ok(())
    }

    fn restore(&self) -> Result<Database, SnapshotError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot found, starting empty");
                return Ok(Database::new());
            }
            Err(err) => return Err(err.into()),
        };

        let db: Database = serde_json::from_reader(BufReader::new(file))?;
        validate(&db)?;

        info!(path = %self.path.display(), tables = db.tables.len(), "snapshot restored");
        Ok(db)
    }
}

fn write_json(path: &Path, db: &Database) -> Result<(), SnapshotError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, db)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    Ok(())
}

/// Checks that a decoded database upholds the table and row invariants.
fn validate(db: &Database) -> Result<(), SnapshotError> {
    for (name, table) in &db.tables {
        if name != table.name() {
            return Err(SnapshotError::Corrupt(format!(
                "table stored under '{name}' is named '{}'",
                table.name()
            )));
        }

        if let Some(bad) = std::iter::once(name.as_str())
            .chain(table.columns().iter().map(|col| col.name.as_str()))
            .find(|n| !is_identifier(n))
        {
            return Err(SnapshotError::Corrupt(format!(
                "table '{name}': invalid name '{bad}'"
            )));
        }

        // Rebuilding the definition re-checks column name uniqueness
        TableDef::new(table.name(), table.columns().to_vec())
            .map_err(|e| SnapshotError::Corrupt(format!("table '{name}': {e}")))?;

        for (i, row) in table.rows().iter().enumerate() {
            table
                .definition()
                .validate_row(row)
                .map_err(|e| SnapshotError::Corrupt(format!("table '{name}', row {i}: {e}")))?;
        }
    }

    Ok(())
}
