use colored::Colorize;
use phonebook::api::{CmdMessage, ListedRecord, MessageLevel};
use phonebook::error::Result;
use phonebook::model::Field;
use std::io::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const ORG_WIDTH: usize = 24;

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// One line per record: index, name, organization, then both phones.
pub(super) fn print_records<W: Write>(out: &mut W, records: &[ListedRecord]) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let index_width = records
        .iter()
        .map(|l| l.index.to_string().len())
        .max()
        .unwrap_or(1);
    let name_width = column_width(records.iter().map(|l| l.record.display_name()), NAME_WIDTH);
    let org_width = column_width(
        records
            .iter()
            .map(|l| l.record.get(Field::Organization).to_string()),
        ORG_WIDTH,
    );

    for listed in records {
        let record = &listed.record;
        let index = format!("{:>width$}.", listed.index, width = index_width);
        let name = pad_to_width(&record.display_name(), name_width);
        let org = pad_to_width(record.get(Field::Organization), org_width);

        writeln!(
            out,
            "  {} {}  {}  {} {}  {} {}",
            index.yellow(),
            name.bold(),
            org,
            "work:".dimmed(),
            record.get(Field::WorkPhone),
            "personal:".dimmed(),
            record.get(Field::PersonalPhone),
        )?;
    }
    Ok(())
}

fn column_width(values: impl Iterator<Item = String>, cap: usize) -> usize {
    values.map(|v| v.width()).max().unwrap_or(0).min(cap)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let mut shown = truncate_to_width(s, width);
    let padding = width.saturating_sub(shown.width());
    shown.push_str(&" ".repeat(padding));
    shown
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook::model::Record;

    fn rendered(records: &[ListedRecord]) -> String {
        let mut out = Vec::new();
        print_records(&mut out, records).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_one_line_per_record() {
        let records = vec![
            ListedRecord::new(
                0,
                Record::new()
                    .with(Field::LastName, "Doe")
                    .with(Field::FirstName, "Jane")
                    .with(Field::Organization, "Acme")
                    .with(Field::WorkPhone, "555-1000")
                    .with(Field::PersonalPhone, "555-2000"),
            ),
            ListedRecord::new(12, Record::new().with(Field::LastName, "Roe")),
        ];

        let output = rendered(&records);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Doe, Jane"));
        assert!(lines[0].contains("Acme"));
        assert!(lines[0].contains("555-1000"));
        assert!(lines[0].contains("555-2000"));
        assert!(lines[1].contains("12."));
        assert!(lines[1].contains("Roe"));
    }

    #[test]
    fn empty_list_prints_nothing() {
        assert_eq!(rendered(&[]), "");
    }

    #[test]
    fn messages_are_printed_in_order() {
        let mut out = Vec::new();
        print_messages(
            &mut out,
            &[CmdMessage::success("saved"), CmdMessage::warning("careful")],
        )
        .unwrap();

        let output = String::from_utf8(out).unwrap();
        let saved = output.find("saved").unwrap();
        let careful = output.find("careful").unwrap();
        assert!(saved < careful);
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("much too long", 8), "much to…");
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn padding_fills_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("日本", 5).width(), 5);
    }
}
