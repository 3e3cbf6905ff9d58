//! # Storage Layer
//!
//! [`Phonebook`] owns the in-memory copy of every record and keeps its backend
//! synchronized: it loads eagerly when opened and rewrites the whole table on
//! every add or edit.
//!
//! Raw I/O sits behind the [`RecordBackend`] trait:
//!
//! - [`csv_backend::CsvBackend`]: production backend, one CSV file.
//! - [`mem_backend::MemBackend`]: in-memory table for tests, can simulate write failures.
//!
//! ## File Format
//!
//! ```text
//! Last Name,First Name,Middle Name,Organization,Work Phone,Personal Phone
//! Doe,Jane,,Acme,555-1000,555-2000
//! ```
//!
//! The header is always written in this order, whatever header the file had
//! when it was loaded. On load, the file's own header decides which cell maps
//! to which field; missing cells read as empty.
//!
//! Rewriting the full file per mutation keeps things simple and is fine for a
//! personal phonebook, but it is the scalability ceiling of this design.

pub mod backend;
pub mod csv_backend;
pub mod mem_backend;
pub mod phonebook;

pub use backend::RecordBackend;
pub use phonebook::Phonebook;
