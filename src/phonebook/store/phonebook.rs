use super::backend::RecordBackend;
use crate::error::Result;
use crate::model::Record;
use tracing::debug;

/// The authoritative in-memory copy of all records, kept in sync with its backend.
///
/// Every mutation is persisted before it returns.
pub struct Phonebook<B: RecordBackend> {
    backend: B,
    entries: Vec<Record>,
}

impl<B: RecordBackend> Phonebook<B> {
    /// Bind to `backend` and load whatever it holds.
    pub fn open(backend: B) -> Result<Self> {
        let mut phonebook = Self {
            backend,
            entries: Vec::new(),
        };
        phonebook.load()?;
        Ok(phonebook)
    }

    /// Replace the in-memory entries with the persisted table.
    /// Nothing persisted yet means an empty phonebook.
    pub fn load(&mut self) -> Result<()> {
        self.entries = self.backend.load()?.unwrap_or_default();
        debug!(
            count = self.entries.len(),
            location = %self.backend.location(),
            "loaded entries"
        );
        Ok(())
    }

    /// Write every entry, in order, replacing the persisted table.
    pub fn save(&self) -> Result<()> {
        self.backend.save(&self.entries)?;
        debug!(
            count = self.entries.len(),
            location = %self.backend.location(),
            "saved entries"
        );
        Ok(())
    }

    /// Append `record` and persist. Returns the new record's index.
    ///
    /// The in-memory entries only change once the backend accepted the write.
    pub fn add(&mut self, record: Record) -> Result<usize> {
        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.extend_from_slice(&self.entries);
        next.push(record);
        self.commit(next)?;
        Ok(self.entries.len() - 1)
    }

    /// Replace the record at `index` and persist.
    ///
    /// An out-of-range index is a no-op: nothing changes, nothing is written,
    /// and `Ok(false)` is returned.
    pub fn edit(&mut self, index: usize, record: Record) -> Result<bool> {
        if index >= self.entries.len() {
            debug!(index, len = self.entries.len(), "edit index out of range");
            return Ok(false);
        }

        let mut next = self.entries.clone();
        next[index] = record;
        self.commit(next)?;
        Ok(true)
    }

    fn commit(&mut self, next: Vec<Record>) -> Result<()> {
        self.backend.save(&next)?;
        self.entries = next;
        debug!(
            count = self.entries.len(),
            location = %self.backend.location(),
            "saved entries"
        );
        Ok(())
    }

    /// Records containing `term` in any field, ignoring case, in store order.
    pub fn search(&self, term: &str) -> Vec<Record> {
        self.matches(term).map(|(_, record)| record.clone()).collect()
    }

    /// Like [`search`](Self::search), but yields each match with its index.
    pub fn matches<'a>(&'a self, term: &str) -> impl Iterator<Item = (usize, &'a Record)> + 'a {
        let needle = term.to_lowercase();
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, record)| record.matches_lowercase(&needle))
    }

    /// The 1-based `page_number`-th slice of `page_size` records.
    ///
    /// Page zero, a zero page size, or a page past the end is empty.
    pub fn page(&self, page_number: usize, page_size: usize) -> &[Record] {
        let start = match page_number
            .checked_sub(1)
            .and_then(|p| p.checked_mul(page_size))
        {
            Some(start) if page_size > 0 && start < self.entries.len() => start,
            _ => return &[],
        };
        let end = start.saturating_add(page_size).min(self.entries.len());
        &self.entries[start..end]
    }

    pub fn entries(&self) -> &[Record] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
