use anyhow::Result;
use tracing::debug;

use crate::error::CleanupError;

/// Names that are never offered for deletion, in addition to the current branch.
const PROTECTED: [&str; 2] = ["master", "main"];

/// Local branches as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BranchSummary {
    pub all: Vec<String>,
    /// `None` when HEAD is detached or unborn.
    pub current: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// Refuse to delete a branch that is not fully merged.
    Safe,
    Force,
}

/// Version-control operations the pipeline depends on.
pub trait BranchBackend {
    fn list_local_branches(&self) -> Result<BranchSummary>;

    fn delete_branch(&self, name: &str, mode: DeleteMode) -> Result<()>;
}

pub fn list_branches<B: BranchBackend + ?Sized>(
    backend: &B,
) -> Result<BranchSummary, CleanupError> {
    let summary = backend.list_local_branches()?;
    if summary.all.is_empty() {
        return Err(CleanupError::NoBranchesFound);
    }
    debug!(
        count = summary.all.len(),
        current = summary.current.as_deref().unwrap_or("(detached)"),
        "listed local branches"
    );
    Ok(summary)
}

/// Branches left after removing main, master and the checked-out branch,
/// in their original order.
pub fn deletable_branches(summary: &BranchSummary) -> Result<Vec<String>, CleanupError> {
    let candidates: Vec<String> = summary
        .all
        .iter()
        .filter(|name| !is_protected(name, summary.current.as_deref()))
        .cloned()
        .collect();

    if candidates.is_empty() {
        return Err(CleanupError::NoDeletableBranches);
    }
    Ok(candidates)
}

fn is_protected(name: &str, current: Option<&str>) -> bool {
    PROTECTED.contains(&name) || current == Some(name)
}
