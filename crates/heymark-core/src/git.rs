//! Repository fetcher backed by the `git` executable.
//!
//! Only the exit status decides success; stderr is kept for the diagnostic.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use anyhow::{anyhow, bail, Context, Result};

/// Produces and refreshes local copies of a remote repository
pub trait RepoFetcher {
    /// Shallow-fetch `branch` of `url` into `dest`, which must not exist yet.
    fn clone_shallow(&self, url: &str, branch: &str, dest: &Path) -> Result<()>;

    /// Bring an existing copy up to date with `branch`, discarding local changes.
    ///
    /// Must refuse any `dir` for which [`RepoFetcher::is_checkout`] is false.
    fn refresh(&self, dir: &Path, branch: &str) -> Result<()>;

    /// Whether `dir` is the root of a copy this fetcher can refresh.
    fn is_checkout(&self, dir: &Path) -> bool;
}

/// [`RepoFetcher`] that shells out to git
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli {
    /// Use the first `git` on `PATH`, or plain `git` if lookup fails.
    pub fn new() -> Self {
        let program = which::which("git").unwrap_or_else(|e| {
            tracing::debug!("git not found on PATH: {}", e);
            PathBuf::from("git")
        });
        Self { program }
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str], cwd: &Path) -> Result<Output> {
        tracing::debug!("git {} (in {})", args.join(" "), cwd.display());
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .env("GIT_TERMINAL_PROMPT", "0");
        // Repository discovery must never climb out of `cwd` into an enclosing project.
        if let Some(parent) = cwd.parent().filter(|p| p.is_absolute()) {
            command.env("GIT_CEILING_DIRECTORIES", parent);
        }
        let output = command
            .output()
            .with_context(|| {
                format!(
                    "Failed to execute git {} in {}",
                    args.join(" "),
                    cwd.display()
                )
            })?;

        if output.status.success() {
            Ok(output)
        } else {
            let detail = command_error_detail(&output.stdout, &output.stderr);
            Err(anyhow!("git {} failed: {}", args.join(" "), detail))
        }
    }

    /// Root of the work tree containing `dir`
    fn toplevel(&self, dir: &Path) -> Result<PathBuf> {
        let output = self.run(&["rev-parse", "--show-toplevel"], dir)?;
        Ok(PathBuf::from(String::from_utf8_lossy(&output.stdout).trim()))
    }
}

impl RepoFetcher for GitCli {
    fn clone_shallow(&self, url: &str, branch: &str, dest: &Path) -> Result<()> {
        let parent = dest
            .parent()
            .ok_or_else(|| anyhow!("Clone destination has no parent: {}", dest.display()))?;
        let dest = dest.to_string_lossy();
        self.run(
            &["clone", "--depth", "1", "--branch", branch, url, dest.as_ref()],
            parent,
        )?;
        Ok(())
    }

    fn refresh(&self, dir: &Path, branch: &str) -> Result<()> {
        let toplevel = self.toplevel(dir)?;
        if !same_dir(&toplevel, dir) {
            bail!(
                "{} is not the root of a git checkout (found {})",
                dir.display(),
                toplevel.display()
            );
        }
        self.run(&["fetch", "--quiet", "--depth", "1", "origin", branch], dir)?;
        self.run(&["reset", "--quiet", "--hard", "FETCH_HEAD"], dir)?;
        self.run(&["clean", "--quiet", "-fd"], dir)?;
        Ok(())
    }

    fn is_checkout(&self, dir: &Path) -> bool {
        match self.toplevel(dir) {
            Ok(toplevel) => same_dir(&toplevel, dir),
            Err(e) => {
                tracing::debug!("{} is not a git checkout: {:#}", dir.display(), e);
                false
            }
        }
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn command_error_detail(stdout: &[u8], stderr: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr).trim().to_string();
    if !stderr.is_empty() {
        return stderr;
    }
    let stdout = String::from_utf8_lossy(stdout).trim().to_string();
    if !stdout.is_empty() {
        return stdout;
    }
    "unknown git error".to_string()
}
