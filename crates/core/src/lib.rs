//! Mak Core Library
//!
//! This crate provides the core functionality for mak, a personal macro
//! runner that binds short "keybind" names to groups of named macros, each
//! macro being an ordered list of shell command templates with positional
//! `{N}` placeholders.
//!
//! # Key Features
//!
//! - **Data Model**: JSON-backed keybind/macro document with ordered entries
//! - **Placeholder Resolution**: Extraction and positional substitution of
//!   `{N}` references across a macro's command list
//! - **Argument Collection**: Supplied arguments first, interactive prompts
//!   for the rest
//! - **Execution Strategies**: Direct sub-process execution or emission of
//!   shell-evaluable text for consumption by a wrapping shell
//! - **Error Handling**: Comprehensive error types for all failure modes
//!
//! # Examples
//!
//! Loading the macro document from its data file:
//!
//! ```no_run
//! use mak_core::store::load_document;
//!
//! let document = load_document(&"~/.mak/data.json".to_string())?;
//! for keybind in document.keys() {
//!     println!("Keybind: {keybind}");
//! }
//! # Ok::<(), mak_core::error::Error>(())
//! ```

pub mod config;
pub mod definitions;
pub mod error;
pub mod execution;
pub mod placeholder;
pub mod report;
pub mod resolve;
pub mod runner;
pub mod sanitize;
pub mod store;
