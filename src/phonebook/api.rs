//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! phonebook operations, whatever UI sits on top.
//!
//! The facade dispatches to the matching `commands::*::run` and returns
//! `CmdResult` values. It holds no business logic and performs no terminal I/O.
//!
//! `PhonebookApi<B: RecordBackend>` is generic over the backend:
//! - Production: `PhonebookApi<CsvBackend>`
//! - Testing: `PhonebookApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::Record;
use crate::store::{Phonebook, RecordBackend};

pub struct PhonebookApi<B: RecordBackend> {
    book: Phonebook<B>,
}

impl<B: RecordBackend> PhonebookApi<B> {
    /// Opens the phonebook, loading the backend eagerly.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self {
            book: Phonebook::open(backend)?,
        })
    }

    pub fn display(&self, page_number: i64, page_size: i64) -> commands::CmdResult {
        commands::display::run(&self.book, page_number, page_size)
    }

    pub fn add(&mut self, record: Record) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, record)
    }

    pub fn edit(&mut self, index: i64, record: Record) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.book, index, record)
    }

    pub fn search(&self, term: &str) -> commands::CmdResult {
        commands::search::run(&self.book, term)
    }

    pub fn phonebook(&self) -> &Phonebook<B> {
        &self.book
    }
}

pub use commands::{CmdMessage, CmdResult, ListedRecord, MessageLevel};
