use miette::Diagnostic;
use strum::EnumDiscriminants;
use thiserror::Error;

use crate::{ColumnType, sql::dispatch::CommandKind};

/// Errors produced while executing a single command.
///
/// Every variant is recoverable: the store is left exactly as it was before
/// the failing command, and the caller can keep accepting commands.
/// [`CommandError::kind`] gives the fieldless category, `Display` gives the
/// human-readable detail.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic, EnumDiscriminants)]
#[strum_discriminants(name(ErrorKind))]
pub enum CommandError {
    #[error("Unsupported command: {0}")]
    #[diagnostic(
        code(minidb::unsupported_command),
        help("supported commands are CREATE TABLE, INSERT INTO, SELECT and DELETE FROM")
    )]
    UnsupportedCommand(String),

    #[error("Invalid {kind} syntax: {detail}")]
    #[diagnostic(code(minidb::syntax_error))]
    SyntaxError { kind: CommandKind, detail: String },

    #[error("Table '{0}' already exists")]
    #[diagnostic(code(minidb::table_already_exists))]
    TableAlreadyExists(String),

    #[error("Table '{0}' does not exist")]
    #[diagnostic(code(minidb::table_not_found))]
    TableNotFound(String),

    #[error("Unsupported type: {0}")]
    #[diagnostic(code(minidb::unknown_type), help("column types are INT, TEXT and BOOL"))]
    UnknownType(String),

    #[error("Expected {expected} values, got {actual}")]
    #[diagnostic(code(minidb::arity_mismatch))]
    ArityMismatch { expected: usize, actual: usize },

    #[error("Column '{0}' does not exist")]
    #[diagnostic(code(minidb::column_not_found))]
    ColumnNotFound(String),

    #[error("Duplicate column name: {0}")]
    #[diagnostic(code(minidb::duplicate_column))]
    DuplicateColumn(String),

    #[error("Column '{column}' expects {expected}, got {found}")]
    #[diagnostic(code(minidb::type_mismatch))]
    TypeMismatch {
        column: String,
        expected: ColumnType,
        found: ColumnType,
    },

    #[error("Invalid INT: {0}")]
    #[diagnostic(code(minidb::invalid_integer))]
    InvalidInteger(String),

    #[error("Invalid BOOL: {0}")]
    #[diagnostic(code(minidb::invalid_boolean), help("use true or false"))]
    InvalidBoolean(String),
}

impl CommandError {
    /// Returns the category of this error without its payload.
    pub fn kind(&self) -> ErrorKind {
        self.into()
    }

    pub(crate) fn syntax(kind: CommandKind, detail: impl Into<String>) -> Self {
        Self::SyntaxError {
            kind,
            detail: detail.into(),
        }
    }
}

/// Errors raised by the snapshot collaborator.
#[derive(Debug, Error, Diagnostic)]
pub enum SnapshotError {
    #[error("Snapshot IO error: {0}")]
    #[diagnostic(code(minidb::snapshot::io))]
    Io(#[from] std::io::Error),

    #[error("Snapshot encoding error: {0}")]
    #[diagnostic(code(minidb::snapshot::json))]
    Json(#[from] serde_json::Error),

    #[error("Snapshot is corrupt: {0}")]
    #[diagnostic(
        code(minidb::snapshot::corrupt),
        help("remove the snapshot file or start with --fresh")
    )]
    Corrupt(String),
}
