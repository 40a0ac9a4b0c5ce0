use tracing::debug;

use crate::app::{App, Outcome};
use crate::error::CleanupError;
use crate::tui;

/// Interactive multi-select used for both the delete and force-delete rounds.
pub trait Prompter {
    /// Returns the chosen values in the order they were offered. Cancelling
    /// yields an empty selection; an interrupt is an error.
    fn multi_select(
        &mut self,
        message: &str,
        choices: &[String],
    ) -> Result<Vec<String>, CleanupError>;
}

#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn multi_select(
        &mut self,
        message: &str,
        choices: &[String],
    ) -> Result<Vec<String>, CleanupError> {
        let mut app = App::new(message, choices.to_vec());
        tui::run(&mut app)?;
        selection_from(&app)
    }
}

fn selection_from(app: &App) -> Result<Vec<String>, CleanupError> {
    match app.outcome() {
        Outcome::Confirmed => Ok(app.selected_labels()),
        Outcome::Cancelled | Outcome::Pending => {
            debug!(title = app.title(), "prompt cancelled");
            Ok(Vec::new())
        }
        Outcome::Interrupted => Err(CleanupError::Interrupted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new("pick", vec!["a".into(), "b".into()]);
        app.toggle_all();
        app
    }

    #[test]
    fn cancelled_prompt_is_an_empty_selection() {
        let mut app = app();
        app.cancel();
        assert!(selection_from(&app).unwrap().is_empty());
    }

    #[test]
    fn interrupted_prompt_is_an_error() {
        let mut app = app();
        app.interrupt();
        assert!(matches!(selection_from(&app), Err(CleanupError::Interrupted)));
    }

    #[test]
    fn confirmed_prompt_returns_ticked_labels() {
        let mut app = app();
        app.confirm();
        assert_eq!(selection_from(&app).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn no_choices_returns_without_drawing() {
        let selection = TerminalPrompter.multi_select("pick", &[]).unwrap();
        assert!(selection.is_empty());
    }
}
