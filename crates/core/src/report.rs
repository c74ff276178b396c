//! Mode-aware status output.
//!
//! Every status or diagnostic line changes register with the active
//! execution mode: plain human-readable text in direct mode, `#`-prefixed
//! comment lines in shell-emission mode so that captured stdout stays
//! evaluable.

use crate::execution::ExecutionMode;

pub struct Reporter {
    mode: ExecutionMode,
}

impl Reporter {
    #[must_use]
    pub const fn new(mode: ExecutionMode) -> Self {
        Self { mode }
    }

    /// Prints a status line on stdout in the active register.
    pub fn status(&self, message: &str) {
        match self.mode {
            ExecutionMode::Direct => println!("{message}"),
            ExecutionMode::ShellEmission => println!("# {message}"),
        }
    }

    /// Announces a resolved command. Shell-emission mode prints the command
    /// itself as its own output line, so this only speaks in direct mode.
    pub fn command(&self, command: &str) {
        if self.mode == ExecutionMode::Direct {
            println!("→ {command}");
        }
    }

    /// Prints a diagnostic line on stderr in the active register.
    pub fn failure(&self, message: &str) {
        match self.mode {
            ExecutionMode::Direct => eprintln!("{message}"),
            ExecutionMode::ShellEmission => eprintln!("# {message}"),
        }
    }
}
