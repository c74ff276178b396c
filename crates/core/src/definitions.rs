use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sanitize::sanitize;

/// The whole persisted document: keybind identifier to its macros.
///
/// Insertion order is preserved so listings and selection prompts are stable
/// across load/save cycles.
pub type Document = IndexMap<String, KeybindDefinition>;

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct KeybindDefinition {
    #[serde(default)]
    pub macros: Vec<MacroDefinition>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MacroDefinition {
    pub name: String,
    pub commands: Vec<String>,
}

impl Display for MacroDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.name)
    }
}

impl KeybindDefinition {
    /// Looks up a macro by its canonical name, taking the first match.
    ///
    /// Duplicate names can only appear through external edits of the data
    /// file; the first definition wins.
    #[must_use]
    pub fn find_macro(&self, name: &str) -> Option<&MacroDefinition> {
        self.macros.iter().find(|m| m.name == name)
    }

    #[must_use]
    pub fn macro_names(&self) -> Vec<String> {
        self.macros.iter().map(|m| m.name.clone()).collect()
    }
}

/// Adds a new keybind under its sanitized name and returns that name.
///
/// # Errors
///
/// Returns an error if the name sanitizes to an empty string or the keybind
/// already exists.
pub fn add_keybind(document: &mut Document, raw_name: &str) -> Result<String> {
    let name = sanitize(raw_name);
    if name.is_empty() {
        return Err(Error::EmptyName(raw_name.to_string()));
    }

    if document.contains_key(&name) {
        return Err(Error::DuplicateKeybind(name));
    }

    document.insert(name.clone(), KeybindDefinition::default());
    Ok(name)
}

/// Removes a keybind by exact name.
///
/// # Errors
///
/// Returns an error if the keybind does not exist.
pub fn remove_keybind(document: &mut Document, keybind: &str) -> Result<()> {
    // shift_remove keeps the remaining entries in document order
    document
        .shift_remove(keybind)
        .map(|_| ())
        .ok_or_else(|| Error::KeybindNotFound(keybind.to_string()))
}

/// Adds a macro under an existing keybind, splitting `command` into the
/// template list on `separator`. Returns the stored definition.
///
/// # Errors
///
/// Returns an error if the keybind does not exist, the macro name sanitizes
/// to an empty string, or a macro with that name already exists.
pub fn add_macro(
    document: &mut Document,
    keybind: &str,
    raw_name: &str,
    command: &str,
    separator: &str,
) -> Result<MacroDefinition> {
    let name = sanitize(raw_name);
    if name.is_empty() {
        return Err(Error::EmptyName(raw_name.to_string()));
    }

    let entry = document
        .get_mut(keybind)
        .ok_or_else(|| Error::KeybindNotFound(keybind.to_string()))?;

    if entry.find_macro(&name).is_some() {
        return Err(Error::DuplicateMacro {
            name,
            keybind: keybind.to_string(),
        });
    }

    let definition = MacroDefinition {
        name,
        commands: command.split(separator).map(str::to_string).collect(),
    };
    entry.macros.push(definition.clone());

    Ok(definition)
}

/// Removes a macro by its sanitized name, first match only.
///
/// # Errors
///
/// Returns an error if the keybind or the macro does not exist.
pub fn remove_macro(document: &mut Document, keybind: &str, raw_name: &str) -> Result<String> {
    let name = sanitize(raw_name);

    let entry = document
        .get_mut(keybind)
        .ok_or_else(|| Error::KeybindNotFound(keybind.to_string()))?;

    let position = entry
        .macros
        .iter()
        .position(|m| m.name == name)
        .ok_or_else(|| Error::MacroNotFound {
            name: name.clone(),
            keybind: keybind.to_string(),
        })?;

    entry.macros.remove(position);
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document_with(keybind: &str, macros: Vec<MacroDefinition>) -> Document {
        let mut document = Document::new();
        document.insert(keybind.to_string(), KeybindDefinition { macros });
        document
    }

    #[test]
    fn test_add_keybind_sanitizes_name() {
        let mut document = Document::new();
        let name = add_keybind(&mut document, "My Keybind").unwrap();
        assert_eq!(name, "my-keybind");
        assert!(document.contains_key("my-keybind"));
    }

    #[test]
    fn test_add_keybind_duplicate() {
        let mut document = Document::new();
        add_keybind(&mut document, "git").unwrap();
        let result = add_keybind(&mut document, "Git");
        assert!(matches!(result, Err(Error::DuplicateKeybind(_))));
    }

    #[test]
    fn test_add_keybind_empty_after_sanitize() {
        let mut document = Document::new();
        let result = add_keybind(&mut document, "!!!");
        assert!(matches!(result, Err(Error::EmptyName(_))));
    }

    #[test]
    fn test_remove_keybind_missing() {
        let mut document = Document::new();
        let result = remove_keybind(&mut document, "nope");
        assert!(matches!(result, Err(Error::KeybindNotFound(_))));
    }

    #[test]
    fn test_add_macro_splits_commands() {
        let mut document = document_with("git", vec![]);
        let definition =
            add_macro(&mut document, "git", "Sync All", "git fetch;git rebase {0}", ";").unwrap();

        assert_eq!(definition.name, "sync-all");
        assert_eq!(definition.commands, vec!["git fetch", "git rebase {0}"]);
        assert_eq!(document["git"].macros.len(), 1);
    }

    #[test]
    fn test_add_macro_duplicate_name() {
        let mut document = document_with("git", vec![]);
        add_macro(&mut document, "git", "sync", "git pull", ";").unwrap();
        let result = add_macro(&mut document, "git", "Sync", "git pull", ";");
        assert!(matches!(result, Err(Error::DuplicateMacro { .. })));
    }

    #[test]
    fn test_add_macro_unknown_keybind() {
        let mut document = Document::new();
        let result = add_macro(&mut document, "git", "sync", "git pull", ";");
        assert!(matches!(result, Err(Error::KeybindNotFound(_))));
    }

    #[test]
    fn test_find_macro_takes_first_match() {
        let first = MacroDefinition {
            name: "dup".to_string(),
            commands: vec!["echo first".to_string()],
        };
        let second = MacroDefinition {
            name: "dup".to_string(),
            commands: vec!["echo second".to_string()],
        };
        let document = document_with("kb", vec![first, second]);

        let found = document["kb"].find_macro("dup").unwrap();
        assert_eq!(found.commands, vec!["echo first"]);
    }

    #[test]
    fn test_remove_macro_by_sanitized_name() {
        let mut document = document_with("kb", vec![]);
        add_macro(&mut document, "kb", "build-all", "make", ";").unwrap();

        let removed = remove_macro(&mut document, "kb", "Build All").unwrap();
        assert_eq!(removed, "build-all");
        assert!(document["kb"].macros.is_empty());
    }

    #[test]
    fn test_document_round_trips_through_json() {
        let mut document = document_with(
            "git",
            vec![MacroDefinition {
                name: "sync".to_string(),
                commands: vec!["git fetch".to_string(), "git rebase {0}".to_string()],
            }],
        );
        document.insert("docker".to_string(), KeybindDefinition::default());

        let serialized = serde_json::to_string(&document).unwrap();
        let deserialized: Document = serde_json::from_str(&serialized).unwrap();

        assert_eq!(
            deserialized.keys().collect::<Vec<_>>(),
            vec!["git", "docker"]
        );
        assert_eq!(deserialized["git"].macros[0].commands[1], "git rebase {0}");
    }

    #[test]
    fn test_missing_macros_field_defaults_to_empty() {
        let document: Document = serde_json::from_str(r#"{"git": {}}"#).unwrap();
        assert!(document["git"].macros.is_empty());
    }
}
