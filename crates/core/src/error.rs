use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Keybind `{}` not found.", _0)]
    KeybindNotFound(String),

    #[error("Macro `{}` not found under keybind `{}`.", .name, .keybind)]
    MacroNotFound { name: String, keybind: String },

    #[error("No selection made.")]
    NoSelection,

    #[error("Missing arguments for command: `{}`", .template)]
    MissingArgument { template: String },

    #[error("Command failed with code {}.", .status)]
    CommandFailed { status: i32 },

    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Json {
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", _0)]
    Stdio(std::io::Error),

    #[error("Keybind `{}` already exists.", _0)]
    DuplicateKeybind(String),

    #[error("Macro `{}` already exists under keybind `{}`.", .name, .keybind)]
    DuplicateMacro { name: String, keybind: String },

    #[error("Invalid name `{}`: nothing is left after sanitizing.", _0)]
    EmptyName(String),
}

impl Error {
    pub fn json_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    ) -> Self {
        Self::Json {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
