//! In-memory stand-ins for the git backend and the terminal prompt.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};

use anyhow::{Result, anyhow};

use crate::branches::{BranchBackend, BranchSummary, DeleteMode};
use crate::error::CleanupError;
use crate::prompt::Prompter;

pub struct FakeBackend {
    summary: BranchSummary,
    unmerged: HashSet<String>,
    locked: HashMap<String, String>,
    attempts: RefCell<Vec<(String, DeleteMode)>>,
}

impl FakeBackend {
    pub fn new(all: &[&str], current: Option<&str>) -> Self {
        Self {
            summary: BranchSummary {
                all: all.iter().map(|s| s.to_string()).collect(),
                current: current.map(str::to_string),
            },
            unmerged: HashSet::new(),
            locked: HashMap::new(),
            attempts: RefCell::new(Vec::new()),
        }
    }

    /// Safe deletes of `name` are rejected.
    pub fn unmerged(mut self, name: &str) -> Self {
        self.unmerged.insert(name.to_string());
        self
    }

    /// Every delete of `name` is rejected with `reason`.
    pub fn locked(mut self, name: &str, reason: &str) -> Self {
        self.locked.insert(name.to_string(), reason.to_string());
        self
    }

    pub fn attempts(&self) -> Vec<(String, DeleteMode)> {
        self.attempts.borrow().clone()
    }

    pub fn attempted_names(&self) -> Vec<String> {
        self.attempts
            .borrow()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl BranchBackend for FakeBackend {
    fn list_local_branches(&self) -> Result<BranchSummary> {
        Ok(self.summary.clone())
    }

    fn delete_branch(&self, name: &str, mode: DeleteMode) -> Result<()> {
        self.attempts.borrow_mut().push((name.to_string(), mode));
        if let Some(reason) = self.locked.get(name) {
            return Err(anyhow!("{reason}"));
        }
        if mode == DeleteMode::Safe && self.unmerged.contains(name) {
            return Err(anyhow!("the branch '{name}' is not fully merged"));
        }
        Ok(())
    }
}

pub enum Answer {
    Select(Vec<String>),
    Interrupt,
}

impl Answer {
    pub fn select(names: &[&str]) -> Self {
        Answer::Select(names.iter().map(|s| s.to_string()).collect())
    }
}

/// Replays canned answers and remembers what each prompt offered.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<(String, Vec<String>)>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            asked: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn multi_select(
        &mut self,
        message: &str,
        choices: &[String],
    ) -> Result<Vec<String>, CleanupError> {
        self.asked.push((message.to_string(), choices.to_vec()));
        match self.answers.pop_front() {
            Some(Answer::Select(names)) => Ok(names),
            Some(Answer::Interrupt) => Err(CleanupError::Interrupted),
            None => panic!("unexpected prompt: {message}"),
        }
    }
}

/// Captured stdout and stderr of one pipeline run.
#[derive(Default)]
pub struct Captured {
    pub out: Vec<u8>,
    pub err: Vec<u8>,
}

impl Captured {
    pub fn stdout_lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.out)
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn stderr_lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.err)
            .lines()
            .map(str::to_string)
            .collect()
    }
}
