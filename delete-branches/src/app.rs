pub struct Choice {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    Confirmed,
    Cancelled,
    Interrupted,
}

/// State of one checkbox prompt.
pub struct App {
    title: String,
    choices: Vec<Choice>,
    cursor: usize,
    outcome: Outcome,
}

impl App {
    pub fn new(title: impl Into<String>, labels: Vec<String>) -> Self {
        let choices = labels
            .into_iter()
            .map(|label| Choice {
                label,
                selected: false,
            })
            .collect();

        Self {
            title: title.into(),
            choices,
            cursor: 0,
            outcome: Outcome::Pending,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn move_down(&mut self) {
        if self.choices.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1).min(self.choices.len() - 1);
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn toggle_current(&mut self) {
        if let Some(current) = self.choices.get_mut(self.cursor) {
            current.selected = !current.selected;
        }
    }

    pub fn toggle_all(&mut self) {
        let all_selected = self.choices.iter().all(|choice| choice.selected);
        for choice in &mut self.choices {
            choice.selected = !all_selected;
        }
    }

    /// Confirming with nothing ticked is a valid answer.
    pub fn confirm(&mut self) {
        self.outcome = Outcome::Confirmed;
    }

    pub fn cancel(&mut self) {
        self.outcome = Outcome::Cancelled;
    }

    pub fn interrupt(&mut self) {
        self.outcome = Outcome::Interrupted;
    }

    pub fn should_quit(&self) -> bool {
        self.outcome != Outcome::Pending
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn items(&self) -> &[Choice] {
        &self.choices
    }

    pub fn selected_count(&self) -> usize {
        self.choices.iter().filter(|choice| choice.selected).count()
    }

    pub fn total_count(&self) -> usize {
        self.choices.len()
    }

    /// Ticked labels in the order they were offered.
    pub fn selected_labels(&self) -> Vec<String> {
        self.choices
            .iter()
            .filter(|choice| choice.selected)
            .map(|choice| choice.label.clone())
            .collect()
    }
}
