use crate::{
    CommandError,
    types::{ColumnType, Value},
};

/// Converts a raw literal token into a [`Value`] of the given column type.
///
/// The token is trimmed before conversion, and text is trimmed again once its
/// enclosing quotes are gone. There is no cross-type coercion:
/// the target type always comes from the column the value is meant for.
///
/// # Errors
///
/// - [`CommandError::InvalidInteger`] if an `INT` literal is not a base-10 i64
/// - [`CommandError::InvalidBoolean`] if a `BOOL` literal is not `true`/`false`
///
/// # Example
///
/// ```
/// use minidb::{ColumnType, Value, coerce};
///
/// assert_eq!(coerce(" 42 ", ColumnType::Integer), Ok(Value::Integer(42)));
/// assert_eq!(coerce("'Alice'", ColumnType::Text), Ok(Value::Text("Alice".into())));
/// assert_eq!(coerce("TRUE", ColumnType::Boolean), Ok(Value::Boolean(true)));
/// ```
pub fn coerce(raw: &str, column_type: ColumnType) -> Result<Value, CommandError> {
    let token = raw.trim();

    match column_type {
        ColumnType::Integer => token
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| CommandError::InvalidInteger(token.to_string())),
        ColumnType::Text => Ok(Value::Text(strip_quotes(token).trim().to_string())),
        ColumnType::Boolean => {
            if token.eq_ignore_ascii_case("true") {
                Ok(Value::Boolean(true))
            } else if token.eq_ignore_ascii_case("false") {
                Ok(Value::Boolean(false))
            } else {
                Err(CommandError::InvalidBoolean(token.to_string()))
            }
        }
    }
}

/// Strips one layer of matching single or double quotes.
fn strip_quotes(token: &str) -> &str {
    for quote in ['\'', '"'] {
        if token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote) {
            return &token[1..token.len() - 1];
        }
    }

    token
}
