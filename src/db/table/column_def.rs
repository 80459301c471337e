use serde::{Deserialize, Serialize};

use crate::ColumnType;

/// Definition of a single column in a table.
///
/// Specifies the column name and the type every value in the column has.
/// Column names are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// The column name.
    pub name: String,

    /// The type of values in this column.
    pub data_type: ColumnType,
}

impl ColumnDef {
    /// Creates a new column definition.
    ///
    /// # Example
    ///
    /// ```
    /// use minidb::{ColumnDef, ColumnType};
    ///
    /// let col = ColumnDef::new("age", ColumnType::Integer);
    /// assert_eq!(col.name, "age");
    /// ```
    pub fn new(name: &str, data_type: ColumnType) -> Self {
        Self {
            name: name.to_owned(),
            data_type,
        }
    }
}
