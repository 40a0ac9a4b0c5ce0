use tracing::debug;

use crate::branches::{BranchBackend, deletable_branches, list_branches};
use crate::console::{Console, prefixed};
use crate::delete::{delete_branches, recover};
use crate::error::CleanupError;
use crate::prompt::Prompter;

pub const SELECT_MESSAGE: &str = "Select the branches you want to delete:";

/// List, filter, ask, delete, then offer force-deletion for what was refused.
///
/// Returns early with `NoBranchesFound` or `NoDeletableBranches` when there is
/// nothing to offer. Per-branch failures never surface as an error here.
pub fn run<B, P>(
    backend: &B,
    prompter: &mut P,
    console: &mut Console<'_>,
) -> Result<(), CleanupError>
where
    B: BranchBackend + ?Sized,
    P: Prompter + ?Sized,
{
    let summary = list_branches(backend)?;
    let candidates = deletable_branches(&summary)?;

    let selection = prompter.multi_select(&prefixed(SELECT_MESSAGE), &candidates)?;
    let report = delete_branches(backend, &selection, console);

    let failed = report.failed().len();
    debug!(
        deleted = report.deleted().len(),
        failed,
        "safe delete pass finished"
    );

    if failed > 0 {
        let forced = recover(backend, prompter, &report, console)?;
        debug!(attempted = forced.len(), "force delete pass finished");
    }

    Ok(())
}
