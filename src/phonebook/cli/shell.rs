use super::print::{print_messages, print_records};
use phonebook::api::{CmdMessage, CmdResult, PhonebookApi};
use phonebook::error::Result;
use phonebook::model::{Field, Record};
use phonebook::store::RecordBackend;
use std::io::{BufRead, Write};
use tracing::debug;

const MENU: [&str; 5] = [
    "1. Display entries",
    "2. Add entry",
    "3. Edit entry",
    "4. Search entries",
    "5. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Display,
    Add,
    Edit,
    Search,
    Exit,
}

impl MenuChoice {
    fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Display),
            "2" => Some(MenuChoice::Add),
            "3" => Some(MenuChoice::Edit),
            "4" => Some(MenuChoice::Search),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// The interactive menu loop.
///
/// Reads line-based answers from `input` and writes everything to `output`.
/// Closing the input ends the loop just like choosing Exit.
pub struct Shell<B: RecordBackend, R: BufRead, W: Write> {
    api: PhonebookApi<B>,
    input: R,
    output: W,
    default_page_size: usize,
}

impl<B: RecordBackend, R: BufRead, W: Write> Shell<B, R, W> {
    pub fn new(api: PhonebookApi<B>, input: R, output: W, default_page_size: usize) -> Self {
        Self {
            api,
            input,
            output,
            default_page_size,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(answer) = self.read_line("Enter your choice: ")? else {
                debug!("input closed, leaving menu");
                break;
            };

            let flow = match MenuChoice::from_input(&answer) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    print_messages(
                        &mut self.output,
                        &[CmdMessage::error("Invalid choice. Please try again.")],
                    )?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn into_parts(self) -> (PhonebookApi<B>, W) {
        (self.api, self.output)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        debug!(?choice, "menu choice");
        match choice {
            MenuChoice::Display => self.handle_display(),
            MenuChoice::Add => self.handle_add(),
            MenuChoice::Edit => self.handle_edit(),
            MenuChoice::Search => self.handle_search(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn handle_display(&mut self) -> Result<Flow> {
        let Some(page_number) = self.read_number("Enter page number: ", None)? else {
            return Ok(Flow::Exit);
        };
        let default_size = i64::try_from(self.default_page_size).unwrap_or(i64::MAX);
        let Some(page_size) = self.read_number("Enter entries per page: ", Some(default_size))?
        else {
            return Ok(Flow::Exit);
        };

        let result = self.api.display(page_number, page_size);
        self.show(&result)?;
        Ok(Flow::Continue)
    }

    fn handle_add(&mut self) -> Result<Flow> {
        let Some(record) = self.read_record()? else {
            return Ok(Flow::Exit);
        };
        let result = self.api.add(record)?;
        self.show(&result)?;
        Ok(Flow::Continue)
    }

    fn handle_edit(&mut self) -> Result<Flow> {
        let Some(index) = self.read_number("Enter index of the entry to edit: ", None)? else {
            return Ok(Flow::Exit);
        };
        let Some(record) = self.read_record()? else {
            return Ok(Flow::Exit);
        };
        let result = self.api.edit(index, record)?;
        self.show(&result)?;
        Ok(Flow::Continue)
    }

    fn handle_search(&mut self) -> Result<Flow> {
        let Some(term) = self.read_line("Enter search term: ")? else {
            return Ok(Flow::Exit);
        };
        let result = self.api.search(&term);
        self.show(&result)?;
        Ok(Flow::Continue)
    }

    fn show(&mut self, result: &CmdResult) -> Result<()> {
        print_records(&mut self.output, &result.affected)?;
        print_records(&mut self.output, &result.listed)?;
        print_messages(&mut self.output, &result.messages)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        for line in MENU {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    /// Prompt and read one line without its terminator. `None` once input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Prompt until a whole number is entered. A blank answer yields `default` when given.
    fn read_number(&mut self, prompt: &str, default: Option<i64>) -> Result<Option<i64>> {
        loop {
            let Some(answer) = self.read_line(prompt)? else {
                return Ok(None);
            };
            let answer = answer.trim();

            if answer.is_empty() {
                if let Some(value) = default {
                    return Ok(Some(value));
                }
            }
            match answer.parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => print_messages(
                    &mut self.output,
                    &[CmdMessage::warning("Please enter a whole number.")],
                )?,
            }
        }
    }

    fn read_record(&mut self) -> Result<Option<Record>> {
        let mut record = Record::new();
        for field in Field::ALL {
            let Some(value) = self.read_line(&field.prompt())? else {
                return Ok(None);
            };
            record.set(field, value);
        }
        Ok(Some(record))
    }
}
