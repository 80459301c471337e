use crate::{ColumnType, CommandError, Value, coerce};

/// One token of a literal list as produced by [`split_literals`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    /// Token text with span delimiters removed and surrounding whitespace kept.
    pub text: String,

    /// Whether any part of the token came from a quoted span.
    pub quoted: bool,
}

impl Literal {
    /// A token taken verbatim, with any quotes still in place.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quoted: false,
        }
    }

    /// Converts the token into a [`Value`] of the given column type.
    ///
    /// Quoted text is taken as-is after trimming, since the splitter has
    /// already removed its delimiters. Everything else goes through [`coerce`].
    pub fn coerce(&self, column_type: ColumnType) -> Result<Value, CommandError> {
        match column_type {
            ColumnType::Text if self.quoted => Ok(Value::Text(self.text.trim().to_string())),
            _ => coerce(&self.text, column_type),
        }
    }
}

impl From<&str> for Literal {
    fn from(text: &str) -> Self {
        Self::raw(text)
    }
}

/// Splits a comma-separated literal list into raw tokens.
///
/// A comma separates tokens unless it sits inside a quoted span. A span opens
/// at a single or double quote and closes at the next occurrence of the same
/// quote character; the other quote character inside a span is kept as-is.
/// Span delimiters are dropped from the token, everything between them is kept
/// literally. An unterminated span swallows the rest of the input.
///
/// Whitespace around tokens is preserved; [`coerce`](crate::coerce) trims it.
/// A trailing empty segment is dropped unless it contained a quoted span.
///
/// # Example
///
/// ```
/// use minidb::split_values;
///
/// assert_eq!(split_values("1, 'a,b', true"), vec!["1", " a,b", " true"]);
/// ```
pub fn split_values(input: &str) -> Vec<String> {
    split_literals(input)
        .into_iter()
        .map(|literal| literal.text)
        .collect()
}

/// Same as [`split_values`], but keeps track of which tokens were quoted.
pub fn split_literals(input: &str) -> Vec<Literal> {
    let mut literals = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut quoted = false;

    for ch in input.chars() {
        match (ch, quote) {
            (c, Some(open)) if c == open => quote = None,
            ('\'' | '"', None) => {
                quote = Some(ch);
                quoted = true;
            }
            (',', None) => {
                literals.push(Literal {
                    text: std::mem::take(&mut current),
                    quoted: std::mem::take(&mut quoted),
                });
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() || quoted {
        literals.push(Literal {
            text: current,
            quoted,
        });
    }

    literals
}
