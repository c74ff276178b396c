//! Collection of macro arguments, supplied first and prompted after.

use crate::error::Result;

/// Extends the supplied argument list until it covers every required
/// placeholder index.
///
/// Prompting is driven by position in the required list: each prompt fills
/// the next unfilled slot, while the label passed to `prompt` is the literal
/// placeholder index at that position. With required indices `{0, 2}` the
/// second prompt is labeled `2` but fills slot 1.
///
/// `prompt` blocks on external input and has no timeout; an error from it
/// aborts resolution immediately.
///
/// # Errors
///
/// Propagates the first prompt failure.
pub fn resolve<F>(supplied: Vec<String>, required_indices: &[usize], mut prompt: F) -> Result<Vec<String>>
where
    F: FnMut(usize) -> Result<String>,
{
    let mut arguments = supplied;

    while arguments.len() < required_indices.len() {
        let index = required_indices[arguments.len()];
        arguments.push(prompt(index)?);
    }

    Ok(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_resolve_prompts_for_missing_arguments_only() {
        let mut prompted = Vec::new();
        let arguments = resolve(vec!["foo".to_string()], &[0, 1], |index| {
            prompted.push(index);
            Ok(format!("value-{index}"))
        })
        .unwrap();

        assert_eq!(prompted, vec![1]);
        assert_eq!(arguments, vec!["foo", "value-1"]);
    }

    #[test]
    fn test_resolve_without_required_indices_keeps_supplied() {
        let arguments = resolve(vec!["extra".to_string()], &[], |_| {
            panic!("must not prompt")
        })
        .unwrap();
        assert_eq!(arguments, vec!["extra"]);
    }

    #[test]
    fn test_resolve_labels_with_literal_index() {
        let mut labels = Vec::new();
        let arguments = resolve(Vec::new(), &[0, 2], |index| {
            labels.push(index);
            Ok(index.to_string())
        })
        .unwrap();

        // Slot 1 is filled by the prompt labeled with the literal index 2.
        assert_eq!(labels, vec![0, 2]);
        assert_eq!(arguments, vec!["0", "2"]);
    }

    #[test]
    fn test_resolve_aborts_on_prompt_failure() {
        let result = resolve(Vec::new(), &[0], |_| Err(Error::NoSelection));
        assert!(matches!(result, Err(Error::NoSelection)));
    }
}
