//! # Phonebook CLI
//!
//! The binary is intentionally thin: the interactive shell lives in `cli/`, and
//! this file only invokes `cli::run()` and handles process termination.
//! Everything below the shell (API, commands, store) is the `phonebook` library.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
