use std::str::FromStr;

use strum::Display;
use tracing::debug;

use crate::{
    CommandError, CommandOutcome, Database,
    sql::{
        lexer::{Lexer, Token},
        parser::{Keyword, SqlParser, Statement},
    },
};

/// The four command shapes understood by minidb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CommandKind {
    #[strum(to_string = "CREATE TABLE")]
    CreateTable,

    #[strum(to_string = "INSERT INTO")]
    InsertInto,

    #[strum(to_string = "SELECT")]
    Select,

    #[strum(to_string = "DELETE FROM")]
    DeleteFrom,
}

impl CommandKind {
    /// Classifies a command by its leading keywords.
    ///
    /// Only the keywords are compared case-insensitively. Returns `None` when
    /// the command does not start with a supported keyword sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use minidb::CommandKind;
    ///
    /// assert_eq!(CommandKind::classify("select * from t"), Some(CommandKind::Select));
    /// assert_eq!(CommandKind::classify("Delete From t where a = 1"), Some(CommandKind::DeleteFrom));
    /// assert_eq!(CommandKind::classify("DROP TABLE t"), None);
    /// ```
    pub fn classify(command: &str) -> Option<Self> {
        let mut keywords = Lexer::new(command).map_while(|token| match token {
            Token::Word(word) => Keyword::from_str(word).ok(),
            _ => None,
        });

        match (keywords.next()?, keywords.next()) {
            (Keyword::Create, Some(Keyword::Table)) => Some(Self::CreateTable),
            (Keyword::Insert, Some(Keyword::Into)) => Some(Self::InsertInto),
            (Keyword::Select, _) => Some(Self::Select),
            (Keyword::Delete, Some(Keyword::From)) => Some(Self::DeleteFrom),
            _ => None,
        }
    }
}

/// Executes a single command against the database.
///
/// The command is classified by its leading keyword, parsed into a statement,
/// and applied to `db`. A failing command leaves `db` unchanged.
///
/// # Errors
///
/// Returns [`CommandError::UnsupportedCommand`] if no keyword matches, and
/// propagates grammar, coercion and storage errors from the handlers.
///
/// # Example
///
/// ```
/// use minidb::{CommandOutcome, Database, execute};
///
/// let mut db = Database::new();
/// execute(&mut db, "CREATE TABLE users (id INT, name TEXT)").unwrap();
/// execute(&mut db, "INSERT INTO users VALUES (1, 'Alice')").unwrap();
///
/// let outcome = execute(&mut db, "DELETE FROM users WHERE id = 1").unwrap();
/// assert_eq!(outcome, CommandOutcome::RowsDeleted(1));
/// ```
pub fn execute(db: &mut Database, command: &str) -> Result<CommandOutcome, CommandError> {
    let command = command.trim();

    let Some(kind) = CommandKind::classify(command) else {
        return Err(CommandError::UnsupportedCommand(command.to_string()));
    };

    debug!(%kind, "dispatching command");

    match SqlParser::new(kind, command).parse()? {
        Statement::CreateTable(create) => {
            db.create_table(create.table_name, create.columns)?;
            Ok(CommandOutcome::TableCreated(create.table_name.to_string()))
        }
        Statement::Insert(insert) => {
            db.insert_literals(insert.table_name, &insert.values)?;
            Ok(CommandOutcome::RowInserted)
        }
        Statement::Select(select) => {
            let response = db.select_all(select.table_name)?;
            Ok(CommandOutcome::RowsSelected {
                columns: response.columns,
                rows: response.rows,
            })
        }
        Statement::Delete(delete) => {
            let deleted = db.delete_literal(delete.table_name, delete.column, delete.literal)?;
            Ok(CommandOutcome::RowsDeleted(deleted))
        }
    }
}
