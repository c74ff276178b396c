//! The two execution strategies for a resolved command list.

use std::io::Write;
use std::process::{Command, Stdio};

use log::info;

use crate::error::{Error, Result};

/// Separator used to chain resolved commands into one compound invocation.
/// `&&` gives the interpreter's own short-circuit semantics between commands.
pub const COMMAND_SEPARATOR: &str = " && ";

/// How a run delivers its resolved commands. Chosen once per run and threaded
/// through explicitly; it never changes mid-run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ExecutionMode {
    /// Join all commands and run them as a single sub-process.
    #[default]
    Direct,
    /// Print each command as shell-evaluable text for a wrapping shell.
    ShellEmission,
}

/// Capability for running a command string through an interpreter.
pub trait CommandRunner {
    /// Runs the command to completion and returns its exit status.
    ///
    /// # Errors
    ///
    /// Returns an error if the interpreter cannot be spawned or waited on.
    fn run(&mut self, command: &str) -> Result<i32>;
}

/// Production runner: hands the command to a shell with inherited stdio.
pub struct ShellCommandRunner {
    shell: String,
}

impl ShellCommandRunner {
    #[must_use]
    pub fn new(shell: String) -> Self {
        Self { shell }
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&mut self, command: &str) -> Result<i32> {
        info!("Executing via `{}`: {command}", self.shell);

        let status = Command::new(&self.shell)
            .args(["-c", command])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?
            .wait()?;

        // A signal-terminated child has no code; report it as a plain failure.
        Ok(status.code().unwrap_or(1))
    }
}

/// Direct mode: one compound invocation, blocking, exact status propagation.
///
/// Side effects such as directory changes happen inside the sub-process and
/// are not observable by the invoking shell.
///
/// # Errors
///
/// Returns [`Error::CommandFailed`] carrying the sub-process exit status when
/// it is non-zero, or a spawn/wait error.
pub fn execute_direct(commands: &[String], runner: &mut dyn CommandRunner) -> Result<()> {
    let compound = commands.join(COMMAND_SEPARATOR);

    let status = runner.run(&compound)?;
    if status == 0 {
        Ok(())
    } else {
        Err(Error::CommandFailed { status })
    }
}

/// Shell-emission mode: one line per resolved command, for consumption via
/// `eval "$(mak run --shell ...)"`. Spawns nothing.
///
/// # Errors
///
/// Returns an error if writing to the output stream fails.
pub fn emit_shell(commands: &[String], output: &mut dyn Write) -> Result<()> {
    for command in commands {
        let line = rewrite_change_directory(command).unwrap_or_else(|| command.clone());
        writeln!(output, "{line}").map_err(Error::Stdio)?;
    }

    Ok(())
}

/// Recognizes a change-directory command and re-emits it in canonical quoted
/// form so the path survives word splitting in the evaluating shell.
///
/// The whole remainder after the `cd` keyword is the path; one layer of
/// matching single or double quotes is stripped before re-quoting.
fn rewrite_change_directory(command: &str) -> Option<String> {
    let rest = command.trim().strip_prefix("cd")?;
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }

    let path = rest.trim();
    if path.is_empty() {
        return None;
    }

    Some(format!("cd \"{}\"", strip_matching_quotes(path)))
}

fn strip_matching_quotes(path: &str) -> &str {
    for quote in ['"', '\''] {
        if path.len() >= 2 && path.starts_with(quote) && path.ends_with(quote) {
            return &path[1..path.len() - 1];
        }
    }

    path
}
