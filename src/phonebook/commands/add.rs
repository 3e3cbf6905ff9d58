use crate::commands::{CmdMessage, CmdResult, ListedRecord};
use crate::error::Result;
use crate::model::Record;
use crate::store::{Phonebook, RecordBackend};

pub fn run<B: RecordBackend>(book: &mut Phonebook<B>, record: Record) -> Result<CmdResult> {
    let index = book.add(record.clone())?;
    let message = CmdMessage::success(format!("Entry added ({}): {}", index, label(&record)));

    Ok(CmdResult::default()
        .with_affected(vec![ListedRecord::new(index, record)])
        .with_message(message))
}

pub(super) fn label(record: &Record) -> String {
    let name = record.display_name();
    if name.is_empty() {
        "(no name)".to_string()
    } else {
        name
    }
}
