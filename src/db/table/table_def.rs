use serde::{Deserialize, Serialize};

use super::{column_def::ColumnDef, row::Row};
use crate::CommandError;

/// A table definition: its name and ordered columns.
///
/// Column order defines the positional correspondence between columns, row
/// values and `INSERT` value lists. A definition never changes once the table
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    /// The table name.
    pub(crate) name: String,

    /// The ordered list of column definitions.
    pub(crate) columns: Vec<ColumnDef>,
}

impl TableDef {
    /// Creates a table definition, rejecting repeated column names.
    pub fn new(name: &str, columns: Vec<ColumnDef>) -> Result<Self, CommandError> {
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(CommandError::DuplicateColumn(column.name.clone()));
            }
        }

        Ok(Self {
            name: name.to_owned(),
            columns,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns the column names in declaration order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|col| col.name.clone()).collect()
    }

    /// Finds the index of a column by name.
    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.name == name)
    }

    /// Checks that a row has one value per column, each of the column's type.
    pub fn validate_row(&self, row: &Row) -> Result<(), CommandError> {
        if row.values.len() != self.columns.len() {
            return Err(CommandError::ArityMismatch {
                expected: self.columns.len(),
                actual: row.values.len(),
            });
        }

        for (value, column) in row.values.iter().zip(&self.columns) {
            if !value.is_compatible_with(column.data_type) {
                return Err(CommandError::TypeMismatch {
                    column: column.name.clone(),
                    expected: column.data_type,
                    found: value.column_type(),
                });
            }
        }

        Ok(())
    }
}
