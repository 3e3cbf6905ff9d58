use crate::error::Result;
use crate::model::Record;

/// Abstract interface for raw table I/O.
/// This trait handles the "how" of persistence (CSV file vs memory),
/// while `Phonebook` handles the "what" (ordering, search, paging).
pub trait RecordBackend {
    /// Read the persisted table.
    /// Returns Ok(None) if nothing has been persisted yet (e.g. the file does not exist).
    /// Returns Err only on actual I/O or parse errors.
    fn load(&self) -> Result<Option<Vec<Record>>>;

    /// Replace the persisted table with `records`.
    /// MUST rewrite the whole table, never append.
    fn save(&self, records: &[Record]) -> Result<()>;

    /// Human readable location, for logs and messages.
    fn location(&self) -> String;
}
