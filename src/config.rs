use std::path::PathBuf;

use clap::Parser;

/// Snapshot file used when `--snapshot` is not given.
pub const DEFAULT_SNAPSHOT_PATH: &str = "db.json";

/// Command-line configuration for the `minidb` shell.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "minidb", version, about = "In-memory SQL-like table store")]
pub struct Config {
    /// Snapshot file restored at startup and written on exit.
    #[arg(long, short = 's', default_value = DEFAULT_SNAPSHOT_PATH)]
    pub snapshot: PathBuf,

    /// Start with an empty database even if a snapshot exists.
    #[arg(long)]
    pub fresh: bool,

    /// Do not write the snapshot on exit.
    #[arg(long)]
    pub no_persist: bool,

    /// Log filter used when RUST_LOG is not set (e.g. `info`, `minidb=debug`).
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            fresh: false,
            no_persist: false,
            log_level: "warn".to_string(),
        }
    }
}
