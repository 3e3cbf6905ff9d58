use crate::model::Record;

pub mod add;
pub mod display;
pub mod edit;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record together with its position in the phonebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedRecord {
    pub index: usize,
    pub record: Record,
}

impl ListedRecord {
    pub fn new(index: usize, record: Record) -> Self {
        Self { index, record }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<ListedRecord>,
    pub listed: Vec<ListedRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected(mut self, records: Vec<ListedRecord>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<ListedRecord>) -> Self {
        self.listed = records;
        self
    }
}
