//! The macro run orchestrator.
//!
//! Composes the sanitizer, placeholder extractor, argument resolver and
//! execution strategies into the `run` operation. Every external collaborator
//! (list selection, argument prompting, sub-process execution, the emission
//! stream) is injected as a capability so the whole flow is testable with
//! scripted implementations.

use std::io::Write;

use log::debug;

use crate::definitions::Document;
use crate::error::{Error, Result};
use crate::execution::{emit_shell, execute_direct, CommandRunner, ExecutionMode};
use crate::placeholder::{extract_indices, render};
use crate::report::Reporter;
use crate::resolve::resolve;
use crate::sanitize::sanitize;

/// Interactive list selection over an ordered set of options.
pub trait Selector {
    /// Presents the options under a title and returns the chosen one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSelection`] when there are no options or the user
    /// cancels.
    fn select(&mut self, title: &str, options: &[String]) -> Result<String>;
}

/// Interactive collection of one macro argument.
pub trait ArgumentPrompter {
    /// Asks for the value of the placeholder with the given literal index.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read; never retried.
    fn prompt(&mut self, index: usize) -> Result<String>;
}

/// One invocation of the run operation.
pub struct RunRequest {
    pub keybind: Option<String>,
    pub macro_name: Option<String>,
    pub arguments: Vec<String>,
    pub mode: ExecutionMode,
}

/// Non-error terminations of a run.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The macro's commands were executed or emitted.
    Completed,
    /// The document holds no keybinds at all; nothing to do.
    NoMacros,
    /// The keybind exists but owns no macros; nothing to do.
    EmptyKeybind(String),
}

/// Runs macros against a loaded document with injected capabilities.
///
/// The run path never mutates the document.
pub struct MacroRunner<'a> {
    pub selector: &'a mut dyn Selector,
    pub prompter: &'a mut dyn ArgumentPrompter,
    pub command_runner: &'a mut dyn CommandRunner,
    pub output: &'a mut dyn Write,
}

impl MacroRunner<'_> {
    /// Resolves and runs one macro. Any failure aborts the remaining steps;
    /// nothing executes until the whole command list has rendered.
    ///
    /// # Errors
    ///
    /// Returns not-found, selection, missing-argument or command failures as
    /// described in [`crate::error::Error`].
    pub fn run(&mut self, document: &Document, request: RunRequest) -> Result<RunOutcome> {
        if document.is_empty() {
            return Ok(RunOutcome::NoMacros);
        }

        let reporter = Reporter::new(request.mode);

        // A supplied keybind must exist before any selector is shown.
        let keybind = match request.keybind {
            Some(keybind) => {
                if !document.contains_key(&keybind) {
                    return Err(Error::KeybindNotFound(keybind));
                }
                keybind
            }
            None => {
                let options: Vec<String> = document.keys().cloned().collect();
                self.selector.select("Available Keybinds", &options)?
            }
        };

        let entry = document
            .get(&keybind)
            .ok_or_else(|| Error::KeybindNotFound(keybind.clone()))?;

        if entry.macros.is_empty() {
            return Ok(RunOutcome::EmptyKeybind(keybind));
        }

        let name = match request.macro_name {
            Some(name) => name,
            None => {
                let options = entry.macro_names();
                self.selector
                    .select(&format!("Available Macros for '{keybind}'"), &options)?
            }
        };

        let name = sanitize(&name);
        let macro_def = entry.find_macro(&name).ok_or_else(|| Error::MacroNotFound {
            name: name.clone(),
            keybind: keybind.clone(),
        })?;

        let required_indices = extract_indices(&macro_def.commands);
        debug!("Macro `{name}` requires placeholder indices {required_indices:?}");

        let prompter = &mut *self.prompter;
        let arguments = resolve(request.arguments, &required_indices, |index| {
            prompter.prompt(index)
        })?;

        // Render the whole list before dispatching anything, so a bad
        // template aborts the run with no commands executed.
        let mut resolved = Vec::with_capacity(macro_def.commands.len());
        for template in &macro_def.commands {
            resolved.push(render(template, &arguments)?);
        }

        reporter.status(&format!("Executing macro: {name} (keybind: {keybind})"));
        for command in &resolved {
            reporter.command(command);
        }

        match request.mode {
            ExecutionMode::Direct => execute_direct(&resolved, self.command_runner)?,
            ExecutionMode::ShellEmission => emit_shell(&resolved, self.output)?,
        }

        Ok(RunOutcome::Completed)
    }
}
