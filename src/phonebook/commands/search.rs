use crate::commands::{CmdMessage, CmdResult, ListedRecord};
use crate::store::{Phonebook, RecordBackend};

pub fn run<B: RecordBackend>(book: &Phonebook<B>, term: &str) -> CmdResult {
    let listed: Vec<ListedRecord> = book
        .matches(term)
        .map(|(index, record)| ListedRecord::new(index, record.clone()))
        .collect();

    if listed.is_empty() {
        return CmdResult::default()
            .with_message(CmdMessage::info(format!("No entries match \"{}\".", term)));
    }
    CmdResult::default().with_listed(listed)
}
