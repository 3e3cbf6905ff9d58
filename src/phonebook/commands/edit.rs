use crate::commands::{CmdMessage, CmdResult, ListedRecord};
use crate::error::Result;
use crate::model::Record;
use crate::store::{Phonebook, RecordBackend};

use super::add::label;

/// Replace the entry at `index`. A negative or out-of-range index changes nothing
/// and is reported as a warning.
pub fn run<B: RecordBackend>(
    book: &mut Phonebook<B>,
    index: i64,
    record: Record,
) -> Result<CmdResult> {
    let replaced = match usize::try_from(index) {
        Ok(position) => book
            .edit(position, record.clone())?
            .then_some(position),
        Err(_) => None,
    };

    let Some(position) = replaced else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "No entry at index {}; nothing changed.",
            index
        ))));
    };

    let message = CmdMessage::success(format!("Entry updated ({}): {}", position, label(&record)));
    Ok(CmdResult::default()
        .with_affected(vec![ListedRecord::new(position, record)])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Field;
    use crate::store::mem_backend::MemBackend;

    fn book_of(names: &[&str]) -> Phonebook<MemBackend> {
        let records = names
            .iter()
            .map(|n| Record::new().with(Field::LastName, *n))
            .collect();
        Phonebook::open(MemBackend::with_records(records)).unwrap()
    }

    #[test]
    fn updates_entry() {
        let mut book = book_of(&["Alpha", "Beta"]);
        let result = run(&mut book, 1, Record::new().with(Field::LastName, "Gamma")).unwrap();

        assert_eq!(book.get(1).unwrap().get(Field::LastName), "Gamma");
        assert_eq!(result.affected[0].index, 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn negative_and_past_end_indexes_leave_book_unchanged() {
        let mut book = book_of(&["Alpha", "Beta"]);
        let before = book.entries().to_vec();

        for index in [-1, 2] {
            let result = run(&mut book, index, Record::new().with(Field::LastName, "X")).unwrap();
            assert!(result.affected.is_empty());
            assert_eq!(result.messages[0].level, MessageLevel::Warning);
            assert_eq!(
                result.messages[0].content,
                format!("No entry at index {}; nothing changed.", index)
            );
        }

        assert_eq!(book.entries(), before.as_slice());
        assert_eq!(book.backend().save_count(), 0);
    }
}
