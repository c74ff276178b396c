//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate: the `run` operation plus the keybind/macro management subcommands.

use clap::{Parser, Subcommand};
use mak_core::execution::ExecutionMode;

/// Command-line arguments for the mak CLI tool.
#[derive(Parser, Debug)]
#[command(name = "mak", term_width = 0)] // term_width just to make testing across clap features easier
pub struct Args {
    /// Path to the keybind/macro data JSON file.
    ///
    /// If not provided, defaults to `~/.mak/data.json`.
    #[arg(long, short = 'd', global = true)]
    pub data_path: Option<String>,

    #[command(subcommand)]
    pub command: MakCommand,
}

impl Args {
    /// The execution mode of this invocation; anything but `run --shell`
    /// speaks in the direct register.
    #[must_use]
    pub fn execution_mode(&self) -> ExecutionMode {
        match &self.command {
            MakCommand::Run(run_args) => run_args.mode(),
            _ => ExecutionMode::Direct,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum MakCommand {
    /// Run a macro from a keybind
    Run(RunArgs),

    /// Manage keybinds
    #[command(subcommand)]
    Keys(KeysCommand),

    /// Manage macros
    #[command(subcommand)]
    Macros(MacrosCommand),

    /// Show version and data file location
    Info,
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// The keybind to run. Selected interactively when omitted.
    pub keybind: Option<String>,

    /// The name of the macro to run. Selected interactively when omitted.
    pub name: Option<String>,

    /// Values for the macro's placeholders, consumed in required-index
    /// order. Missing ones are prompted for.
    #[arg(trailing_var_arg = true)]
    pub arguments: Vec<String>,

    /// Emit shell-evaluable text on stdout instead of executing, so a
    /// wrapping shell can apply directory changes to itself.
    #[arg(long, short = 's', action)]
    pub shell: bool,
}

impl RunArgs {
    #[must_use]
    pub fn mode(&self) -> ExecutionMode {
        if self.shell {
            ExecutionMode::ShellEmission
        } else {
            ExecutionMode::Direct
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum KeysCommand {
    /// Add a new keybind
    Add {
        /// Keybind name; stored in its sanitized canonical form
        keybind: String,
    },

    /// List all keybinds
    List,

    /// Remove a keybind
    Remove {
        /// Keybind to remove (exact canonical name)
        keybind: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum MacrosCommand {
    /// Create a new macro under an existing keybind
    Add {
        /// Existing keybind
        keybind: String,

        /// Macro name; stored in its sanitized canonical form
        name: String,

        /// Command chain; split into templates on the separator
        command: String,

        /// Command separator
        #[arg(long = "sep", short = 's', default_value = ";")]
        separator: String,
    },

    /// List all macros for a keybind
    List {
        /// Keybind to list macros for
        keybind: String,
    },

    /// Remove a macro from a keybind
    Remove {
        /// Keybind owning the macro
        keybind: String,

        /// Macro name to remove
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_run_defaults() {
        let args = Args::parse_from(["mak", "run"]);

        assert!(args.data_path.is_none());
        match args.command {
            MakCommand::Run(run_args) => {
                assert!(run_args.keybind.is_none());
                assert!(run_args.name.is_none());
                assert!(run_args.arguments.is_empty());
                assert!(!run_args.shell);
                assert_eq!(run_args.mode(), ExecutionMode::Direct);
            }
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn test_run_positionals_and_trailing_arguments() {
        let args = Args::parse_from(["mak", "run", "git", "sync", "main", "origin"]);

        match args.command {
            MakCommand::Run(run_args) => {
                assert_eq!(run_args.keybind, Some("git".to_string()));
                assert_eq!(run_args.name, Some("sync".to_string()));
                assert_eq!(run_args.arguments, vec!["main", "origin"]);
            }
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn test_run_shell_flag_switches_mode() {
        let long = Args::parse_from(["mak", "run", "--shell", "git", "enter"]);
        assert_eq!(long.execution_mode(), ExecutionMode::ShellEmission);

        let short = Args::parse_from(["mak", "run", "-s"]);
        assert_eq!(short.execution_mode(), ExecutionMode::ShellEmission);
    }

    #[test]
    fn test_global_data_path_after_subcommand() {
        let args = Args::parse_from(["mak", "keys", "list", "--data-path", "/tmp/data.json"]);
        assert_eq!(args.data_path, Some("/tmp/data.json".to_string()));
    }

    #[test]
    fn test_keys_subcommands() {
        let args = Args::parse_from(["mak", "keys", "add", "My Keybind"]);
        match args.command {
            MakCommand::Keys(KeysCommand::Add { keybind }) => assert_eq!(keybind, "My Keybind"),
            other => panic!("expected Keys Add, got {other:?}"),
        }

        let args = Args::parse_from(["mak", "keys", "remove", "git"]);
        assert!(matches!(
            args.command,
            MakCommand::Keys(KeysCommand::Remove { .. })
        ));
    }

    #[test]
    fn test_macros_add_with_separator() {
        let args = Args::parse_from([
            "mak", "macros", "add", "git", "sync", "git fetch && git rebase", "--sep", "&&",
        ]);

        match args.command {
            MakCommand::Macros(MacrosCommand::Add {
                keybind,
                name,
                command,
                separator,
            }) => {
                assert_eq!(keybind, "git");
                assert_eq!(name, "sync");
                assert_eq!(command, "git fetch && git rebase");
                assert_eq!(separator, "&&");
            }
            other => panic!("expected Macros Add, got {other:?}"),
        }
    }

    #[test]
    fn test_macros_add_default_separator() {
        let args = Args::parse_from(["mak", "macros", "add", "git", "sync", "git pull"]);
        match args.command {
            MakCommand::Macros(MacrosCommand::Add { separator, .. }) => {
                assert_eq!(separator, ";");
            }
            other => panic!("expected Macros Add, got {other:?}"),
        }
    }

    #[test]
    fn test_info_mode_is_direct() {
        let args = Args::parse_from(["mak", "info"]);
        assert_eq!(args.execution_mode(), ExecutionMode::Direct);
    }
}
