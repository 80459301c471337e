pub(crate) mod database;
pub(crate) mod snapshot;
pub(crate) mod table;
