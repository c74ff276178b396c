//! Interactive selection and argument prompting.
//!
//! This module provides the production implementations of the capabilities
//! the run orchestrator needs from a terminal: list selection over keybinds
//! and macros, and prompting for placeholder values.
//!
//! All interactive traffic goes through stderr. Stdout belongs to
//! shell-emission output and must stay evaluable even when the run happens
//! inside `$(...)` command substitution.

pub mod input;
pub mod ui;

use mak_core::error::{Error, Result};
use mak_core::runner::{ArgumentPrompter, Selector};

/// Raw-mode list selection over the terminal.
pub struct ListSelector;

impl Selector for ListSelector {
    fn select(&mut self, title: &str, options: &[String]) -> Result<String> {
        if options.is_empty() {
            return Err(Error::NoSelection);
        }

        ui::prompt_for_selection(title, options)
    }
}

/// Prompts for placeholder values on stderr, reading stdin line-wise.
pub struct StdinPrompter;

impl ArgumentPrompter for StdinPrompter {
    fn prompt(&mut self, index: usize) -> Result<String> {
        input::prompt_value(&format!("Enter value for argument {{{index}}}"))
    }
}
