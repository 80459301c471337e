pub(crate) mod dispatch;
pub(crate) mod lexer;
pub(crate) mod parser;
pub(crate) mod splitter;
