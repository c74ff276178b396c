use std::io::{stderr, stdin, Write};

use mak_core::error::{Error, Result};

/// Prompts the user for a value, re-asking until the input is non-empty.
///
/// The prompt is written to stderr; stdout must stay evaluable in
/// shell-emission mode.
///
/// # Errors
///
/// Returns an error if stdin is closed or cannot be read.
pub fn prompt_value(prompt_base: &str) -> Result<String> {
    loop {
        eprint!("{prompt_base}: ");
        stderr().flush().map_err(Error::Stdio)?;

        // Read user input
        let mut input = String::new();
        let bytes_read = stdin().read_line(&mut input).map_err(Error::Stdio)?;
        if bytes_read == 0 {
            return Err(Error::Stdio(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "end of input while prompting",
            )));
        }

        let read_value = input.trim().to_string();
        if !read_value.is_empty() {
            return Ok(read_value);
        }

        // No input - ask again
    }
}
