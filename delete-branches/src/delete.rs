use tracing::info;

use crate::branches::{BranchBackend, DeleteMode};
use crate::console::{Console, prefixed};
use crate::error::CleanupError;
use crate::prompt::Prompter;

pub const FORCE_DELETE_MESSAGE: &str = "Select the branches you want to force-delete:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    pub name: String,
    pub status: DeleteStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteStatus {
    Deleted,
    Error(String),
}

#[derive(Debug, Default)]
pub struct DeleteReport {
    pub results: Vec<DeleteResult>,
}

impl DeleteReport {
    pub fn deleted(&self) -> Vec<&str> {
        self.names_where(|status| matches!(status, DeleteStatus::Deleted))
    }

    pub fn failed(&self) -> Vec<&str> {
        self.names_where(|status| matches!(status, DeleteStatus::Error(_)))
    }

    /// Rejected branches paired with the message explaining why.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.results.iter().filter_map(|result| match &result.status {
            DeleteStatus::Error(message) => Some((result.name.as_str(), message.as_str())),
            DeleteStatus::Deleted => None,
        })
    }

    fn names_where(&self, keep: impl Fn(&DeleteStatus) -> bool) -> Vec<&str> {
        self.results
            .iter()
            .filter(|result| keep(&result.status))
            .map(|result| result.name.as_str())
            .collect()
    }
}

/// Safe-deletes each selected branch in order. A rejected branch is recorded
/// and the remaining ones are still attempted.
pub fn delete_branches<B: BranchBackend + ?Sized>(
    backend: &B,
    selection: &[String],
    console: &mut Console<'_>,
) -> DeleteReport {
    let mut report = DeleteReport::default();

    if selection.is_empty() {
        console.say("No branches deleted");
        return report;
    }

    for name in selection {
        let status = match backend.delete_branch(name, DeleteMode::Safe) {
            Ok(()) => {
                console.say(format!("{name} deleted"));
                DeleteStatus::Deleted
            }
            Err(err) => {
                let err = CleanupError::DeleteFailed {
                    branch: name.clone(),
                    reason: format!("{err:#}"),
                };
                info!("{err}");
                DeleteStatus::Error(err.to_string())
            }
        };
        report.results.push(DeleteResult {
            name: name.clone(),
            status,
        });
    }

    if report.failed().is_empty() {
        console.say("All branches deleted");
    }

    report
}

/// Offers the branches the safe pass rejected and force-deletes the ones picked.
/// Every rejected branch the user leaves behind is reported with its reason.
pub fn recover<B, P>(
    backend: &B,
    prompter: &mut P,
    report: &DeleteReport,
    console: &mut Console<'_>,
) -> Result<Vec<DeleteResult>, CleanupError>
where
    B: BranchBackend + ?Sized,
    P: Prompter + ?Sized,
{
    console.say("Some branches could not be deleted");

    let failed: Vec<String> = report.failed().into_iter().map(str::to_string).collect();
    let selection = prompter.multi_select(&prefixed(FORCE_DELETE_MESSAGE), &failed)?;

    let results = if selection.is_empty() {
        console.say("No branches force-deleted");
        Vec::new()
    } else {
        force_delete_branches(backend, &selection, console)
    };

    for (name, message) in report.failures() {
        if !selection.iter().any(|chosen| chosen == name) {
            console.warn(message);
        }
    }

    Ok(results)
}

pub fn force_delete_branches<B: BranchBackend + ?Sized>(
    backend: &B,
    selection: &[String],
    console: &mut Console<'_>,
) -> Vec<DeleteResult> {
    selection
        .iter()
        .map(|name| {
            let status = match backend.delete_branch(name, DeleteMode::Force) {
                Ok(()) => {
                    console.say(format!("{name} force-deleted"));
                    DeleteStatus::Deleted
                }
                Err(err) => {
                    let err = CleanupError::ForceDeleteFailed {
                        branch: name.clone(),
                        reason: format!("{err:#}"),
                    };
                    console.warn(err.to_string());
                    DeleteStatus::Error(err.to_string())
                }
            };
            DeleteResult {
                name: name.clone(),
                status,
            }
        })
        .collect()
}
