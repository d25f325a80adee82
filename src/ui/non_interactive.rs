//! Non-interactive UI for CI/headless environments.
//!
//! Prompts are answered from `STATIONUP_PROMPT_<KEY>` environment variables,
//! falling back to the prompt's default.

use std::collections::HashMap;

use crate::error::{Result, StationupError};

use super::theme::StationTheme;
use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "STATIONUP_PROMPT_";

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("  {}", hint);
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let answer = self
            .env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref())
            .cloned();

        let Some(answer) = answer else {
            return Err(StationupError::PromptFailed {
                key: prompt.key.clone(),
                message: format!(
                    "cannot prompt in non-interactive mode; set {} to answer",
                    env_key
                ),
            });
        };

        tracing::debug!("Answering prompt '{}' with '{}'", prompt.key, answer);
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner {
            visible: self.mode.shows_status(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that only prints its final line (for non-interactive mode).
struct NoopSpinner {
    visible: bool,
}

impl SpinnerHandle for NoopSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.visible {
            println!("{}", StationTheme::plain().format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        if self.visible {
            println!("{}", StationTheme::plain().format_error(msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mirror_prompt(default: Option<&str>) -> Prompt {
        Prompt::new("use_mirror", "Use mirror?", default)
    }

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn prompt_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let result = ui.prompt(&mirror_prompt(Some("n"))).unwrap();
        assert_eq!(result, "n");
    }

    #[test]
    fn prompt_fails_without_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let err = ui.prompt(&mirror_prompt(None)).unwrap_err();
        assert!(err.to_string().contains("STATIONUP_PROMPT_USE_MIRROR"));
    }

    #[test]
    fn prompt_uses_env_override() {
        let mut overrides = HashMap::new();
        overrides.insert("STATIONUP_PROMPT_USE_MIRROR".to_string(), "Y".to_string());

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let result = ui.prompt(&mirror_prompt(Some("n"))).unwrap();
        assert_eq!(result, "Y");
    }

    #[test]
    fn prompt_answer_is_returned_verbatim() {
        let mut overrides = HashMap::new();
        overrides.insert("STATIONUP_PROMPT_USE_MIRROR".to_string(), " yes ".to_string());

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        assert_eq!(ui.prompt(&mirror_prompt(Some("n"))).unwrap(), " yes ");
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn noop_spinner_methods() {
        let mut spinner = NoopSpinner { visible: false };
        spinner.finish_success("done");
        spinner.finish_error("failed");
    }
}
