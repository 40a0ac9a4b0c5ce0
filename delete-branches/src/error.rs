use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("No branches found")]
    NoBranchesFound,

    #[error("You have no branches to delete except main/master and current branch")]
    NoDeletableBranches,

    #[error("{branch} could not be deleted: {reason}")]
    DeleteFailed { branch: String, reason: String },

    #[error("{branch} could not be force-deleted: {reason}")]
    ForceDeleteFailed { branch: String, reason: String },

    #[error("Prompt interrupted")]
    Interrupted,

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl CleanupError {
    /// Process exit status for an error that stopped the pipeline.
    pub fn exit_code(&self) -> u8 {
        match self {
            CleanupError::Interrupted => 130,
            _ => 1,
        }
    }
}
