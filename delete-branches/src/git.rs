use std::path::Path;

use anyhow::{Context, Result, bail};
use git2::{Branch, BranchType, Oid, Repository};
use tracing::{debug, warn};

use crate::branches::{BranchBackend, BranchSummary, DeleteMode};

/// Branch listing and deletion against a repository on disk.
pub struct GitBackend {
    repo: Repository,
}

impl GitBackend {
    pub fn open(path: Option<&Path>) -> Result<Self> {
        open_repository(path).map(|repo| Self { repo })
    }

    fn head_commit(&self) -> Option<Oid> {
        let head = self.repo.head().ok()?;
        head.peel_to_commit().ok().map(|commit| commit.id())
    }

    /// Same check as `git branch -d`: the tip must be reachable from the
    /// branch's upstream, or from HEAD when there is no upstream.
    fn ensure_merged(&self, branch: &Branch<'_>, name: &str) -> Result<()> {
        let tip = branch
            .get()
            .peel_to_commit()
            .with_context(|| format!("Failed to resolve commit for branch '{name}'"))?
            .id();

        let upstream = branch
            .upstream()
            .ok()
            .and_then(|upstream| upstream.get().peel_to_commit().ok())
            .map(|commit| commit.id());

        let Some(base) = upstream.or_else(|| self.head_commit()) else {
            bail!("the branch '{name}' is not fully merged");
        };

        let merged = base == tip
            || self
                .repo
                .graph_descendant_of(base, tip)
                .context("Failed to compare branch history")?;

        if !merged {
            bail!("the branch '{name}' is not fully merged");
        }
        Ok(())
    }
}

impl BranchBackend for GitBackend {
    fn list_local_branches(&self) -> Result<BranchSummary> {
        let mut all = Vec::new();

        let branches = self
            .repo
            .branches(Some(BranchType::Local))
            .context("Failed to enumerate local branches")?;
        for branch_result in branches {
            let (branch, _) =
                branch_result.context("Encountered an error while iterating branches")?;
            match branch.name() {
                Ok(Some(name)) => all.push(name.to_string()),
                Ok(None) => continue,
                Err(err) => {
                    warn!(%err, "skipping branch with invalid UTF-8 name");
                    continue;
                }
            }
        }

        all.sort();
        Ok(BranchSummary {
            all,
            current: current_branch_name(&self.repo),
        })
    }

    fn delete_branch(&self, name: &str, mode: DeleteMode) -> Result<()> {
        let mut branch = self
            .repo
            .find_branch(name, BranchType::Local)
            .with_context(|| format!("Failed to locate branch '{name}' before deletion"))?;

        if branch.is_head() {
            bail!("cannot delete branch '{name}' while it is checked out");
        }

        if mode == DeleteMode::Safe {
            self.ensure_merged(&branch, name)?;
        }

        branch
            .delete()
            .with_context(|| format!("Failed to delete branch '{name}'"))?;
        debug!(branch = name, ?mode, "deleted branch");
        Ok(())
    }
}

pub fn open_repository(path: Option<&Path>) -> Result<Repository> {
    match path {
        Some(dir) => Repository::discover(dir)
            .with_context(|| format!("Failed to discover a Git repository from {}", dir.display())),
        None => Repository::discover(".")
            .context("Failed to discover a Git repository from current directory"),
    }
}

/// `None` on a detached or unborn HEAD.
pub fn current_branch_name(repo: &Repository) -> Option<String> {
    let head = repo.head().ok()?;
    if head.is_branch() {
        head.shorthand().map(|s| s.to_string())
    } else {
        None
    }
}
