pub mod config;

pub(crate) mod common;
pub(crate) mod db;
pub(crate) mod sql;
pub(crate) mod types;

pub use common::error::{CommandError, ErrorKind, SnapshotError};
pub use config::Config;
pub use db::{
    database::{CommandOutcome, Database, QueryResponse},
    snapshot::{JsonSnapshot, SnapshotStore},
    table::{Table, column_def::ColumnDef, row::Row, table_def::TableDef},
};
pub use sql::{
    dispatch::{CommandKind, execute},
    splitter::{Literal, split_literals, split_values},
};
pub use types::{ColumnType, Value, coerce::coerce};
