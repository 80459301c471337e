use crate::{ColumnDef, sql::splitter::Literal};

/// A recognized command with its structural parts extracted.
///
/// Table and column names borrow from the command text. Literal values stay
/// raw; they are coerced once the target column types are known.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'src> {
    CreateTable(CreateTableStatement<'src>),
    Insert(InsertStatement<'src>),
    Select(SelectStatement<'src>),
    Delete(DeleteStatement<'src>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStatement<'src> {
    pub table_name: &'src str,
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement<'src> {
    pub table_name: &'src str,

    /// Tokens from the value list, quotes already removed by the splitter.
    pub values: Vec<Literal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement<'src> {
    pub table_name: &'src str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement<'src> {
    pub table_name: &'src str,
    pub column: &'src str,

    /// Right-hand side of `column = literal`, trimmed but otherwise untouched.
    pub literal: &'src str,
}
