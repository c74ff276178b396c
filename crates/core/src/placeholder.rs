//! Positional `{N}` placeholder extraction and substitution.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern"));

/// Collects the distinct placeholder indices referenced across all templates,
/// in ascending order.
///
/// Brace content that does not parse as an index (non-digits, or a digit run
/// too large for `usize`) is left alone as a literal.
#[must_use]
pub fn extract_indices(templates: &[String]) -> Vec<usize> {
    let mut indices = BTreeSet::new();

    for template in templates {
        for captures in PLACEHOLDER.captures_iter(template) {
            if let Ok(index) = captures[1].parse::<usize>() {
                indices.insert(index);
            }
        }
    }

    indices.into_iter().collect()
}

/// Renders a template against a concrete argument list, substituting each
/// `{N}` with `args[N]`.
///
/// # Errors
///
/// Returns [`Error::MissingArgument`] naming the template if any referenced
/// index lies beyond the argument list.
pub fn render(template: &str, args: &[String]) -> Result<String> {
    let mut rendered = String::with_capacity(template.len());
    let mut last_end = 0;

    for found in PLACEHOLDER.find_iter(template) {
        rendered.push_str(&template[last_end..found.start()]);

        let digits = &template[found.start() + 1..found.end() - 1];
        match digits.parse::<usize>() {
            Ok(index) => match args.get(index) {
                Some(value) => rendered.push_str(value),
                None => {
                    return Err(Error::MissingArgument {
                        template: template.to_string(),
                    })
                }
            },
            // Unparseable index: keep the braces as literal text, matching
            // what extraction reported.
            Err(_) => rendered.push_str(found.as_str()),
        }

        last_end = found.end();
    }

    rendered.push_str(&template[last_end..]);
    Ok(rendered)
}
