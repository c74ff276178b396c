use std::env;
use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use mak_core::config::{self, DEFAULT_SHELL};
use mak_core::error::{Error, Result};
use mak_core::execution::ShellCommandRunner;
use mak_core::report::Reporter;
use mak_core::runner::{MacroRunner, RunOutcome, RunRequest};
use mak_core::store;

use crate::cli_args::{Args, MakCommand, RunArgs};
use crate::selection::{ListSelector, StdinPrompter};

mod cli_args;
mod commands;
pub mod selection;

fn execute(args: &Args) -> Result<ExitCode> {
    let data_path = config::get_data_path(&args.data_path);
    debug!("Data path: `{data_path}`");

    match &args.command {
        MakCommand::Run(run_args) => run(run_args, &data_path),
        MakCommand::Keys(command) => {
            commands::keys(command, &data_path).map(|()| ExitCode::SUCCESS)
        }
        MakCommand::Macros(command) => {
            commands::macros(command, &data_path).map(|()| ExitCode::SUCCESS)
        }
        MakCommand::Info => {
            commands::info(&data_path);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run(run_args: &RunArgs, data_path: &String) -> Result<ExitCode> {
    let document = store::load_document(data_path)?;
    let mode = run_args.mode();
    let reporter = Reporter::new(mode);

    let shell = env::var("SHELL").unwrap_or_else(|_| DEFAULT_SHELL.to_string());

    let mut selector = ListSelector;
    let mut prompter = StdinPrompter;
    let mut command_runner = ShellCommandRunner::new(shell);
    let mut output = stdout();

    let mut runner = MacroRunner {
        selector: &mut selector,
        prompter: &mut prompter,
        command_runner: &mut command_runner,
        output: &mut output,
    };

    let request = RunRequest {
        keybind: run_args.keybind.clone(),
        macro_name: run_args.name.clone(),
        arguments: run_args.arguments.clone(),
        mode,
    };

    // Nothing-to-do exits are reported in the active register, not as errors,
    // but still carry a non-zero code.
    match runner.run(&document, request)? {
        RunOutcome::Completed => Ok(ExitCode::SUCCESS),
        RunOutcome::NoMacros => {
            reporter.status("No macros found.");
            Ok(ExitCode::from(1))
        }
        RunOutcome::EmptyKeybind(keybind) => {
            reporter.status(&format!("No macros available under keybind '{keybind}'."));
            Ok(ExitCode::from(1))
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let mode = args.execution_mode();

    match execute(&args) {
        Ok(code) => code,
        Err(error) => {
            Reporter::new(mode).failure(&error.to_string());

            match error {
                // A failed direct-mode command becomes this process's own
                // exit status.
                Error::CommandFailed { status } => {
                    ExitCode::from(u8::try_from(status).unwrap_or(1))
                }
                _ => ExitCode::FAILURE,
            }
        }
    }
}
