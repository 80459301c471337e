use strum::{Display, EnumString};

/// Keywords recognized by the command grammar.
///
/// These keywords are case-insensitive. They are not reserved: a table or
/// column may still be named `values` or `table`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum Keyword {
    Create,
    Table,

    Insert,
    Into,
    Values,

    Select,
    From,

    Delete,
    Where,
}
