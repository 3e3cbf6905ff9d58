use crate::commands::{CmdMessage, CmdResult, ListedRecord};
use crate::store::{Phonebook, RecordBackend};

/// One page of entries. Negative numbers select nothing.
pub fn run<B: RecordBackend>(book: &Phonebook<B>, page_number: i64, page_size: i64) -> CmdResult {
    let (Ok(number), Ok(size)) = (usize::try_from(page_number), usize::try_from(page_size)) else {
        return empty_page(page_number);
    };

    let page = book.page(number, size);
    if page.is_empty() {
        return empty_page(page_number);
    }

    // page() only returns a non-empty slice when this cannot overflow
    let first = (number - 1) * size;
    let listed = page
        .iter()
        .enumerate()
        .map(|(offset, record)| ListedRecord::new(first + offset, record.clone()))
        .collect();

    CmdResult::default().with_listed(listed)
}

fn empty_page(page_number: i64) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(format!(
        "No entries on page {}.",
        page_number
    )))
}
