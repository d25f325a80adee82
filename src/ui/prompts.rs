//! Interactive prompts.

use console::Term;
use dialoguer::Input;

use crate::error::{Result, StationupError};

use super::Prompt;

/// Convert dialoguer errors into a prompt failure.
fn map_dialoguer_err(key: &str, e: dialoguer::Error) -> StationupError {
    StationupError::PromptFailed {
        key: key.to_string(),
        message: e.to_string(),
    }
}

/// Ask a free-form question on the terminal.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    // An empty answer is a valid "no"
    let input = Input::<String>::new()
        .with_prompt(&prompt.question)
        .allow_empty(true);

    let answer = match &prompt.default {
        Some(default) => input.default(default.clone()).show_default(true),
        None => input,
    };

    answer
        .interact_on(term)
        .map_err(|e| map_dialoguer_err(&prompt.key, e))
}

/// Whether a free-form answer means "yes".
///
/// Only a single `y` or `Y` counts; surrounding whitespace is ignored and
/// everything else, including an empty answer, means "no".
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y")
}
