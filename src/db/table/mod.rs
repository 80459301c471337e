use serde::{Deserialize, Serialize};

use crate::{CommandError, Value};

pub mod column_def;
pub mod row;
pub mod table_def;

use column_def::ColumnDef;
use row::Row;
use table_def::TableDef;

/// A table: its definition plus the rows it owns.
///
/// Rows are kept in insertion order. Every row matches the definition; rows
/// are only ever appended whole or removed whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(flatten)]
    pub(crate) def: TableDef,

    pub(crate) rows: Vec<Row>,
}

impl Table {
    /// Creates an empty table from its definition.
    pub fn new(def: TableDef) -> Self {
        Self {
            def,
            rows: Vec::new(),
        }
    }

    /// Returns the table name.
    pub fn name(&self) -> &str {
        self.def.name()
    }

    /// Returns the table definition.
    pub fn definition(&self) -> &TableDef {
        &self.def
    }

    /// Returns the ordered column definitions.
    pub fn columns(&self) -> &[ColumnDef] {
        self.def.columns()
    }

    /// Returns all rows in insertion order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Appends a row after checking it against the definition.
    pub fn insert_row(&mut self, row: Row) -> Result<(), CommandError> {
        self.def.validate_row(&row)?;
        self.rows.push(row);
        Ok(())
    }

    /// Removes every row whose `column` value equals `value`.
    ///
    /// Surviving rows keep their relative order. Returns the number of rows
    /// removed, which may be zero.
    pub fn delete_where(&mut self, column: &str, value: &Value) -> Result<usize, CommandError> {
        let index = self
            .def
            .get_column_index(column)
            .ok_or_else(|| CommandError::ColumnNotFound(column.to_string()))?;

        let data_type = self.def.columns[index].data_type;
        if !value.is_compatible_with(data_type) {
            return Err(CommandError::TypeMismatch {
                column: column.to_string(),
                expected: data_type,
                found: value.column_type(),
            });
        }

        let before = self.rows.len();
        self.rows.retain(|row| row.get_value(index) != Some(value));

        Ok(before - self.rows.len())
    }
}
