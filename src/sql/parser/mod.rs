use std::str::FromStr;

use crate::{
    ColumnDef, ColumnType, CommandError,
    sql::{
        dispatch::CommandKind,
        lexer::{Lexer, Token, is_identifier},
        splitter::split_literals,
    },
};

pub(crate) use keyword::Keyword;
pub(crate) use statement::*;

pub(crate) mod keyword;
pub(crate) mod statement;

type Result<T> = std::result::Result<T, CommandError>;

/// Structural matcher for a single command.
///
/// Each command kind has a fixed shape: keywords, then positional clauses.
/// Parenthesized lists and the `WHERE` literal are taken as raw text and
/// handed to the splitter or to coercion by the caller.
pub struct SqlParser<'src> {
    kind: CommandKind,
    lexer: Lexer<'src>,
}

impl<'src> SqlParser<'src> {
    /// Creates a parser for a command already classified as `kind`.
    ///
    /// A single trailing `;` terminator is removed up front.
    pub fn new(kind: CommandKind, command: &'src str) -> Self {
        let command = command.trim();
        let command = command.strip_suffix(';').unwrap_or(command);

        Self {
            kind,
            lexer: Lexer::new(command),
        }
    }

    /// Parses the command and returns its [`Statement`].
    pub fn parse(&mut self) -> Result<Statement<'src>> {
        match self.kind {
            CommandKind::CreateTable => self.parse_create_table(),
            CommandKind::InsertInto => self.parse_insert(),
            CommandKind::Select => self.parse_select(),
            CommandKind::DeleteFrom => self.parse_delete(),
        }
    }

    // CREATE TABLE <name> ( <column> <type>, ... )
    fn parse_create_table(&mut self) -> Result<Statement<'src>> {
        self.expect_keyword(Keyword::Create)?;
        self.expect_keyword(Keyword::Table)?;

        let table_name = self.expect_identifier()?;
        let body = self.expect_parenthesized()?;

        let columns = body
            .split(',')
            .map(|definition| self.parse_column_definition(definition))
            .collect::<Result<Vec<_>>>()?;

        Ok(Statement::CreateTable(CreateTableStatement {
            table_name,
            columns,
        }))
    }

    fn parse_column_definition(&self, definition: &str) -> Result<ColumnDef> {
        let parts = definition.split_whitespace().collect::<Vec<_>>();

        let [name, type_name] = parts.as_slice() else {
            return Err(self.error(format!(
                "invalid column definition '{}'",
                definition.trim()
            )));
        };

        if !is_identifier(name) {
            return Err(self.error(format!("invalid column name '{name}'")));
        }

        let data_type = ColumnType::from_str(type_name)
            .map_err(|_| CommandError::UnknownType(type_name.to_string()))?;

        Ok(ColumnDef::new(name, data_type))
    }

    // INSERT INTO <name> VALUES ( <literal>, ... )
    fn parse_insert(&mut self) -> Result<Statement<'src>> {
        self.expect_keyword(Keyword::Insert)?;
        self.expect_keyword(Keyword::Into)?;

        let table_name = self.expect_identifier()?;

        self.expect_keyword(Keyword::Values)?;
        let list = self.expect_parenthesized()?;

        Ok(Statement::Insert(InsertStatement {
            table_name,
            values: split_literals(list),
        }))
    }

    // SELECT * FROM <name>
    fn parse_select(&mut self) -> Result<Statement<'src>> {
        self.expect_keyword(Keyword::Select)?;
        self.expect_token(Token::Asterisk)?;
        self.expect_keyword(Keyword::From)?;

        let table_name = self.expect_identifier()?;
        self.expect_end()?;

        Ok(Statement::Select(SelectStatement { table_name }))
    }

    // DELETE FROM <name> WHERE <column> = <literal>
    fn parse_delete(&mut self) -> Result<Statement<'src>> {
        self.expect_keyword(Keyword::Delete)?;
        self.expect_keyword(Keyword::From)?;

        let table_name = self.expect_identifier()?;

        self.expect_keyword(Keyword::Where)?;
        let column = self.expect_identifier()?;
        self.expect_token(Token::Equal)?;

        let literal = self.lexer.remainder().trim_end();
        if literal.is_empty() {
            return Err(self.error("expected a value after '='"));
        }

        Ok(Statement::Delete(DeleteStatement {
            table_name,
            column,
            literal,
        }))
    }

    /// Consumes a parenthesized list that must end the command and returns
    /// its contents.
    ///
    /// The list closes at the first `)` outside a quoted span. If a quote is
    /// left open, the span runs up to the last `)` of the command.
    fn expect_parenthesized(&mut self) -> Result<&'src str> {
        self.expect_token(Token::LeftParen)?;

        let rest = self.lexer.remainder();
        let Some(close) = closing_paren(rest) else {
            return Err(self.error("expected ')' to close the list"));
        };

        let inner = &rest[..close];
        if inner.trim().is_empty() {
            return Err(self.error("empty list inside '( )'"));
        }

        self.lexer.advance(close);
        self.expect_token(Token::RightParen)?;
        self.expect_end()?;

        Ok(inner)
    }

    fn next_token(&mut self) -> Result<Token<'src>> {
        self.lexer
            .next()
            .ok_or_else(|| self.error("unexpected end of input"))
    }

    fn expect_token(&mut self, expected: Token<'src>) -> Result<()> {
        let token = self.next_token()?;
        if token == expected {
            Ok(())
        } else {
            Err(self.unexpected(expected, token))
        }
    }

    fn expect_keyword(&mut self, expected: Keyword) -> Result<()> {
        match self.next_token()? {
            Token::Word(word) if Keyword::from_str(word).is_ok_and(|kw| kw == expected) => Ok(()),
            other => Err(self.error(format!("expected {expected}, found {other}"))),
        }
    }

    fn expect_identifier(&mut self) -> Result<&'src str> {
        match self.next_token()? {
            Token::Word(ident) => Ok(ident),
            other => Err(self.error(format!("expected a name, found {other}"))),
        }
    }

    fn expect_end(&mut self) -> Result<()> {
        match self.lexer.next() {
            None => Ok(()),
            Some(token) => Err(self.error(format!(
                "unexpected {token} at position {}",
                self.lexer.position
            ))),
        }
    }

    fn unexpected(&self, expected: Token, found: Token) -> CommandError {
        self.error(format!(
            "expected {expected}, found {found} at position {}",
            self.lexer.position
        ))
    }

    fn error(&self, detail: impl Into<String>) -> CommandError {
        CommandError::syntax(self.kind, detail)
    }
}

/// Byte offset of the `)` closing a list, quote-aware.
fn closing_paren(list: &str) -> Option<usize> {
    let mut quote: Option<char> = None;

    for (i, ch) in list.char_indices() {
        match (ch, quote) {
            (c, Some(open)) if c == open => quote = None,
            (_, Some(_)) => {}
            ('\'' | '"', None) => quote = Some(ch),
            (')', None) => return Some(i),
            _ => {}
        }
    }

    // Unterminated quote
    quote.and_then(|_| list.trim_end().strip_suffix(')').map(str::len))
}
