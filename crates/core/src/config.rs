//! Configuration path utilities for mak.

/// Default path for the keybind/macro data file
const DEFAULT_DATA_PATH: &str = "~/.mak/data.json";

/// Default shell to use for command execution
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Resolves the data file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// data path. Shell expansions like `~` are resolved.
#[must_use]
pub fn get_data_path(data_path_arg: &Option<String>) -> String {
    let data_path = match data_path_arg {
        Some(data_path) => data_path,
        None => DEFAULT_DATA_PATH,
    };

    shellexpand::tilde(data_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_data_path_with_custom_path() {
        let custom_path = Some("/custom/path/data.json".to_string());
        let result = get_data_path(&custom_path);
        assert_eq!(result, "/custom/path/data.json");
    }

    #[test]
    fn test_get_data_path_with_none() {
        let result = get_data_path(&None);
        assert!(result.contains("data.json"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_data_path_with_tilde() {
        let tilde_path = Some("~/my-data.json".to_string());
        let result = get_data_path(&tilde_path);
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-data.json"));
    }

    #[test]
    fn test_default_shell_constant() {
        assert_eq!(DEFAULT_SHELL, "/bin/bash");
    }
}
