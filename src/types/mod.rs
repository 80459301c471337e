use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub mod coerce;

/// Column types supported by minidb.
///
/// The set is closed. Type keywords in `CREATE TABLE` are matched
/// case-insensitively, and each type accepts a short and a long spelling.
///
/// # Example
///
/// ```
/// use std::str::FromStr;
/// use minidb::ColumnType;
///
/// assert_eq!(ColumnType::from_str("int"), Ok(ColumnType::Integer));
/// assert_eq!(ColumnType::from_str("Boolean"), Ok(ColumnType::Boolean));
/// assert!(ColumnType::from_str("FLOAT").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum ColumnType {
    /// 64-bit signed integer.
    #[strum(serialize = "INTEGER", to_string = "INT")]
    Integer,

    /// UTF-8 text of any length.
    #[strum(serialize = "STRING", to_string = "TEXT")]
    Text,

    /// Boolean true/false value.
    #[strum(serialize = "BOOLEAN", to_string = "BOOL")]
    Boolean,
}

/// A value stored in a table cell.
///
/// The variant always matches the [`ColumnType`] of the column that owns it.
/// Equality compares the active variant and its contents, so `Integer(1)` is
/// never equal to `Text("1")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),

    /// A UTF-8 text string.
    Text(String),

    /// A boolean value (true/false).
    Boolean(bool),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl Value {
    /// Returns the column type this value belongs to.
    ///
    /// # Example
    ///
    /// ```
    /// use minidb::{ColumnType, Value};
    ///
    /// assert_eq!(Value::Integer(42).column_type(), ColumnType::Integer);
    /// assert_eq!(Value::Text("hi".to_string()).column_type(), ColumnType::Text);
    /// ```
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::Integer(_) => ColumnType::Integer,
            Value::Text(_) => ColumnType::Text,
            Value::Boolean(_) => ColumnType::Boolean,
        }
    }

    /// Checks if this value can be stored in a column of the given type.
    pub fn is_compatible_with(&self, column_type: ColumnType) -> bool {
        self.column_type() == column_type
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_column_type_keywords() {
        assert_eq!(ColumnType::from_str("INT"), Ok(ColumnType::Integer));
        assert_eq!(ColumnType::from_str("integer"), Ok(ColumnType::Integer));
        assert_eq!(ColumnType::from_str("Text"), Ok(ColumnType::Text));
        assert_eq!(ColumnType::from_str("string"), Ok(ColumnType::Text));
        assert_eq!(ColumnType::from_str("bool"), Ok(ColumnType::Boolean));
        assert_eq!(ColumnType::from_str("BOOLEAN"), Ok(ColumnType::Boolean));

        assert!(ColumnType::from_str("VARCHAR").is_err());
        assert!(ColumnType::from_str("").is_err());
    }

    #[test]
    fn test_column_type_display() {
        assert_eq!(ColumnType::Integer.to_string(), "INT");
        assert_eq!(ColumnType::Text.to_string(), "TEXT");
        assert_eq!(ColumnType::Boolean.to_string(), "BOOL");
    }

    #[test]
    fn test_value_equality_is_variant_aware() {
        assert_eq!(Value::Integer(1), Value::Integer(1));
        assert_ne!(Value::Integer(1), Value::Text("1".to_string()));
        assert_ne!(Value::Boolean(true), Value::Text("true".to_string()));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Integer(-7).to_string(), "-7");
        assert_eq!(Value::Text("Alice".to_string()).to_string(), "Alice");
        assert_eq!(Value::Boolean(false).to_string(), "false");
    }

    #[test]
    fn test_value_compatibility() {
        assert!(Value::Integer(3).is_compatible_with(ColumnType::Integer));
        assert!(!Value::Integer(3).is_compatible_with(ColumnType::Text));
        assert!(Value::Boolean(true).is_compatible_with(ColumnType::Boolean));
    }
}
