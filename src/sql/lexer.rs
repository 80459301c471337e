/// Structural tokens of a command.
///
/// Literal lists and predicate literals are never lexed; the parser takes
/// them as raw text through [`Lexer::remainder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A run of alphanumeric characters and underscores (keyword or identifier).
    Word(&'a str),

    Asterisk,
    Equal,

    LeftParen,
    RightParen,

    /// Any other character.
    Symbol(char),
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Word(word) => write!(f, "'{word}'"),
            Token::Asterisk => write!(f, "'*'"),
            Token::Equal => write!(f, "'='"),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::Symbol(c) => write!(f, "'{c}'"),
        }
    }
}

pub(crate) struct Lexer<'a> {
    pub rest: &'a str,
    pub position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            position: 0,
        }
    }

    /// Returns the unconsumed input with leading whitespace removed.
    pub fn remainder(&mut self) -> &'a str {
        self.skip_whitespace();
        self.rest
    }

    fn skip_whitespace(&mut self) {
        let non_whitespace_pos = self
            .rest
            .char_indices()
            .find(|(_, ch)| !ch.is_whitespace())
            .map(|(pos, _)| pos)
            .unwrap_or(self.rest.len());

        self.advance(non_whitespace_pos);
    }

    fn consume_word(&mut self) -> &'a str {
        let word_index = self
            .rest
            .find(|c: char| !is_word_char(c))
            .unwrap_or(self.rest.len());

        let word = &self.rest[..word_index];
        self.advance(word_index);

        word
    }

    pub fn advance(&mut self, bytes: usize) {
        self.position += bytes;
        self.rest = &self.rest[bytes..];
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();

        let char = self.rest.chars().next()?;

        if is_word_char(char) {
            return Some(Token::Word(self.consume_word()));
        }

        self.advance(char.len_utf8());

        let token = match char {
            '*' => Token::Asterisk,
            '=' => Token::Equal,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            other => Token::Symbol(other),
        };

        Some(token)
    }
}

/// Returns true for characters allowed in keywords and identifiers.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns true if `name` is a non-empty identifier.
pub(crate) fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_word_char)
}
