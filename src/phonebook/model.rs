use std::fmt;

/// One column of the phonebook table, in on-disk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    LastName,
    FirstName,
    MiddleName,
    Organization,
    WorkPhone,
    PersonalPhone,
}

impl Field {
    /// Every field, in the order columns are written.
    pub const ALL: [Field; 6] = [
        Field::LastName,
        Field::FirstName,
        Field::MiddleName,
        Field::Organization,
        Field::WorkPhone,
        Field::PersonalPhone,
    ];

    /// Column name as it appears in the CSV header.
    pub fn label(self) -> &'static str {
        match self {
            Field::LastName => "Last Name",
            Field::FirstName => "First Name",
            Field::MiddleName => "Middle Name",
            Field::Organization => "Organization",
            Field::WorkPhone => "Work Phone",
            Field::PersonalPhone => "Personal Phone",
        }
    }

    pub fn prompt(self) -> String {
        format!("Enter {}: ", self.to_string().to_lowercase())
    }

    fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single contact. Values are free-form and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: [String; 6],
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.position()]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.position()] = value.into();
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Values in column order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Case-insensitive substring match against any field.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.values()
            .any(|value| value.to_lowercase().contains(needle))
    }

    /// "Last, First Middle", skipping empty parts.
    pub fn display_name(&self) -> String {
        let given: Vec<&str> = [Field::FirstName, Field::MiddleName]
            .iter()
            .map(|f| self.get(*f))
            .filter(|v| !v.is_empty())
            .collect();
        let last = self.get(Field::LastName);

        match (last.is_empty(), given.is_empty()) {
            (true, true) => String::new(),
            (true, false) => given.join(" "),
            (false, true) => last.to_string(),
            (false, false) => format!("{}, {}", last, given.join(" ")),
        }
    }
}

impl<S: Into<String>> FromIterator<(Field, S)> for Record {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (field, value) in iter {
            record.set(field, value);
        }
        record
    }
}
