//! Keybind and macro management subcommands.
//!
//! Each handler loads the whole document, applies one mutation and rewrites
//! the file. Concurrent invocations race freely; the last writer wins.

use itertools::Itertools;
use log::debug;
use mak_core::definitions;
use mak_core::error::{Error, Result};
use mak_core::store;

use crate::cli_args::{KeysCommand, MacrosCommand};

/// Handles `mak keys ...`.
///
/// # Errors
///
/// Returns an error on load/save failures, duplicate or unknown keybinds,
/// and names that sanitize to nothing.
pub fn keys(command: &KeysCommand, data_path: &String) -> Result<()> {
    match command {
        KeysCommand::Add { keybind } => {
            let mut document = store::load_document(data_path)?;
            let name = definitions::add_keybind(&mut document, keybind)?;
            store::save_document(data_path, &document)?;

            if name != *keybind {
                println!("Sanitized: {keybind} → {name}");
            }
            println!("Added keybind: {name}");
        }

        KeysCommand::List => {
            let document = store::load_document(data_path)?;

            if document.is_empty() {
                println!("No keybinds found.");
                return Ok(());
            }

            println!("Registered keybinds:");
            for (i, keybind) in document.keys().enumerate() {
                println!("  [{}] {keybind}", i + 1);
            }
        }

        KeysCommand::Remove { keybind } => {
            let mut document = store::load_document(data_path)?;
            definitions::remove_keybind(&mut document, keybind)?;
            store::save_document(data_path, &document)?;

            println!("Removed keybind: {keybind}");
        }
    }

    Ok(())
}

/// Handles `mak macros ...`.
///
/// # Errors
///
/// Returns an error on load/save failures, unknown keybinds or macros, and
/// duplicate macro names.
pub fn macros(command: &MacrosCommand, data_path: &String) -> Result<()> {
    match command {
        MacrosCommand::Add {
            keybind,
            name,
            command,
            separator,
        } => {
            let mut document = store::load_document(data_path)?;
            let definition =
                definitions::add_macro(&mut document, keybind, name, command, separator)?;
            store::save_document(data_path, &document)?;

            debug!("Stored macro {definition:?}");
            println!("Macro '{}' added to keybind '{keybind}'", definition.name);
            println!("-> Commands: {}", definition.commands.iter().join(" ; "));
        }

        MacrosCommand::List { keybind } => {
            let document = store::load_document(data_path)?;
            let entry = document
                .get(keybind)
                .ok_or_else(|| Error::KeybindNotFound(keybind.clone()))?;

            if entry.macros.is_empty() {
                println!("No macros found for keybind '{keybind}'.");
                return Ok(());
            }

            println!("Macros for '{keybind}':");
            for (i, definition) in entry.macros.iter().enumerate() {
                println!(
                    "  [{}] {}: {}",
                    i + 1,
                    definition.name,
                    definition.commands.iter().join(" ; ")
                );
            }
        }

        MacrosCommand::Remove { keybind, name } => {
            let mut document = store::load_document(data_path)?;
            let removed = definitions::remove_macro(&mut document, keybind, name)?;
            store::save_document(data_path, &document)?;

            println!("Removed macro '{removed}' from keybind '{keybind}'");
        }
    }

    Ok(())
}

/// Handles `mak info`.
pub fn info(data_path: &str) {
    println!("mak {}", env!("CARGO_PKG_VERSION"));
    println!("Data path: {data_path}");
    println!("For help, use --help");
}
