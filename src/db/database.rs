use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    CommandError, Literal, Value, coerce,
    db::table::{Table, column_def::ColumnDef, row::Row, table_def::TableDef},
    sql::dispatch,
};

/// Column names and rows returned by [`Database::select_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponse {
    /// Column names in declaration order.
    pub columns: Vec<String>,

    /// The rows returned by the query, in insertion order.
    pub rows: Vec<Row>,
}

/// Successful result of a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A table with the given name was created.
    TableCreated(String),

    /// One row was appended.
    RowInserted,

    /// A full-table read.
    RowsSelected { columns: Vec<String>, rows: Vec<Row> },

    /// The number of rows removed by a delete (may be zero).
    RowsDeleted(usize),
}

impl Display for CommandOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandOutcome::TableCreated(name) => {
                write!(f, "Table '{name}' created successfully.")
            }
            CommandOutcome::RowInserted => write!(f, "Row inserted successfully."),
            CommandOutcome::RowsSelected { columns, rows } => {
                write!(f, "{}", columns.join("\t"))?;

                for row in rows {
                    let line = row
                        .values
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("\t");
                    write!(f, "\n{line}")?;
                }

                if rows.is_empty() {
                    write!(f, "\n(no rows)")?;
                }

                Ok(())
            }
            CommandOutcome::RowsDeleted(count) => write!(f, "Deleted {count} row(s)."),
        }
    }
}

/// The main database handle.
///
/// `Database` owns every table by name. It is an ordinary value: the caller
/// holds it and passes it by `&mut` to each command, so mutations are
/// serialized by ownership.
///
/// Every operation either succeeds completely or returns an error without
/// touching any table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    /// All tables, keyed by table name.
    pub(crate) tables: BTreeMap<String, Table>,
}

impl Database {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a single command. See [`crate::execute`].
    pub fn execute(&mut self, command: &str) -> Result<CommandOutcome, CommandError> {
        dispatch::execute(self, command)
    }

    /// Checks if a table exists in the database.
    pub fn table_exists(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Returns the table names in sorted order.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    /// Creates a new, empty table.
    ///
    /// # Errors
    ///
    /// - [`CommandError::TableAlreadyExists`] if the name is taken
    /// - [`CommandError::DuplicateColumn`] if a column name repeats
    pub fn create_table(&mut self, name: &str, columns: Vec<ColumnDef>) -> Result<(), CommandError> {
        if self.table_exists(name) {
            return Err(CommandError::TableAlreadyExists(name.to_string()));
        }

        let def = TableDef::new(name, columns)?;
        self.tables.insert(name.to_string(), Table::new(def));

        debug!(table = name, "table created");
        Ok(())
    }

    /// Gets an immutable reference to a table.
    pub fn get_table(&self, name: &str) -> Result<&Table, CommandError> {
        self.tables
            .get(name)
            .ok_or_else(|| CommandError::TableNotFound(name.to_string()))
    }

    /// Gets a mutable reference to a table.
    pub fn get_table_mut(&mut self, name: &str) -> Result<&mut Table, CommandError> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| CommandError::TableNotFound(name.to_string()))
    }

    /// Appends a row of typed values to a table.
    ///
    /// The values must match the table's columns in number and type.
    pub fn insert_row(&mut self, table_name: &str, values: Vec<Value>) -> Result<(), CommandError> {
        self.get_table_mut(table_name)?.insert_row(Row::new(values))?;

        debug!(table = table_name, "row inserted");
        Ok(())
    }

    /// Coerces raw literal tokens with the table's column types, then appends
    /// them as a row.
    ///
    /// All tokens are coerced before the table is touched, so a bad literal
    /// leaves the table unchanged.
    pub fn insert_literals(
        &mut self,
        table_name: &str,
        tokens: &[Literal],
    ) -> Result<(), CommandError> {
        let table = self.get_table(table_name)?;
        let columns = table.columns();

        if tokens.len() != columns.len() {
            return Err(CommandError::ArityMismatch {
                expected: columns.len(),
                actual: tokens.len(),
            });
        }

        let values = tokens
            .iter()
            .zip(columns)
            .map(|(token, column)| token.coerce(column.data_type))
            .collect::<Result<Vec<_>, _>>()?;

        self.insert_row(table_name, values)
    }

    /// Retrieves every row of a table (full table scan).
    ///
    /// An empty table yields zero rows, not an error.
    pub fn select_all(&self, table_name: &str) -> Result<QueryResponse, CommandError> {
        let table = self.get_table(table_name)?;

        Ok(QueryResponse {
            columns: table.definition().column_names(),
            rows: table.rows().to_vec(),
        })
    }

    /// Removes every row whose `column` equals `value`; returns the count.
    pub fn delete_where(
        &mut self,
        table_name: &str,
        column: &str,
        value: &Value,
    ) -> Result<usize, CommandError> {
        let deleted = self.get_table_mut(table_name)?.delete_where(column, value)?;

        debug!(table = table_name, column, deleted, "rows deleted");
        Ok(deleted)
    }

    /// Coerces `literal` with the type of `column`, then deletes matching rows.
    ///
    /// The literal goes through the same coercion as `INSERT` values, so both
    /// paths agree on how text is parsed.
    pub fn delete_literal(
        &mut self,
        table_name: &str,
        column: &str,
        literal: &str,
    ) -> Result<usize, CommandError> {
        let table = self.get_table(table_name)?;
        let index = table
            .definition()
            .get_column_index(column)
            .ok_or_else(|| CommandError::ColumnNotFound(column.to_string()))?;

        let value = coerce(literal, table.columns()[index].data_type)?;

        self.delete_where(table_name, column, &value)
    }
}
