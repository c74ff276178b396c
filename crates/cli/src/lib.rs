//! Mak CLI Library
//!
//! This crate provides the command-line interface for mak, a personal
//! keybind/macro runner. It handles argument parsing, subcommand dispatch,
//! interactive keybind/macro selection and argument prompting.
//!
//! # Key Features
//!
//! - **Run Command**: Resolve and execute a macro, directly or as emitted
//!   shell text for `eval` by a wrapping shell function
//! - **Interactive Selection**: Terminal-based UI for picking keybinds and
//!   macros when they are not given on the command line
//! - **Management Commands**: Add, list and remove keybinds and macros
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing with clap
//! - [`commands`]: Keybind/macro management subcommand handlers
//! - [`selection`]: Interactive selection UI and argument prompting
//!
//! # Examples
//!
//! The CLI binary (`mak`) can be used in several ways:
//!
//! ```bash
//! # Fully interactive: select keybind and macro from lists
//! mak run
//!
//! # Direct: run macro `sync` of keybind `git`, filling placeholder {0}
//! mak run git sync main
//!
//! # Shell-emission mode, for a wrapping shell function
//! eval "$(mak run --shell git enter-project)"
//!
//! # Management
//! mak keys add git
//! mak macros add git sync "git fetch;git rebase {0}"
//! ```

pub mod cli_args;
pub mod commands;
pub mod selection;
