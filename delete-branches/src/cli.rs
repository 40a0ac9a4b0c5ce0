use std::path::{Path, PathBuf};

use clap::{Parser, ValueHint};

#[derive(Debug, Parser)]
#[command(
    name = "delete-branches",
    about = "Interactively pick local Git branches to delete",
    disable_version_flag = true
)]
pub struct Cli {
    /// Print version information and exit.
    #[arg(
        long = "version",
        alias = "v",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "IGNORED"
    )]
    pub version: Option<String>,

    /// Path to the Git repository (defaults to current directory).
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub repo: Option<PathBuf>,

    /// Anything else on the command line is accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

impl Cli {
    /// The flag counts wherever it appears, including after ignored words.
    pub fn wants_version(&self) -> bool {
        self.version.is_some()
            || self.ignored.iter().any(|arg| {
                ["--version", "--v"].into_iter().any(|flag| {
                    arg == flag || arg.strip_prefix(flag).is_some_and(|rest| rest.starts_with('='))
                })
            })
    }

    /// `--repo` is honoured even when it follows words that were swept into
    /// the ignored list. The last occurrence wins.
    pub fn repo_path(&self) -> Option<&Path> {
        let mut found = self.repo.as_deref();
        let mut args = self.ignored.iter();
        while let Some(arg) = args.next() {
            if arg == "--repo" {
                if let Some(dir) = args.next() {
                    found = Some(Path::new(dir));
                }
            } else if let Some(dir) = arg.strip_prefix("--repo=") {
                found = Some(Path::new(dir));
            }
        }
        found
    }
}
