use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::branch::BranchName;
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

const SHOW_CURRENT_BRANCH: [&str; 2] = ["branch", "--show-current"];

pub struct GitCli {
    program: String,
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(program: String, workspace_root: PathBuf) -> Self {
        Self {
            program,
            workspace_root,
        }
    }

    fn command_line(&self) -> String {
        format!("{} {}", self.program, SHOW_CURRENT_BRANCH.join(" "))
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn active_branch(&self) -> AppResult<BranchName> {
        let command_line = self.command_line();
        debug!(command = %command_line, cwd = %self.workspace_root.display(), "querying active branch");

        let output = Command::new(&self.program)
            .args(SHOW_CURRENT_BRANCH)
            .current_dir(&self.workspace_root)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|err| {
                AppError::VersionControl(format!("failed to run {command_line}: {err}"))
            })?;

        if !output.status.success() {
            return Err(AppError::VersionControl(format!(
                "{command_line} exited with {}",
                output.status
            )));
        }

        let branch = BranchName::from_git_output(&output.stdout).ok_or_else(|| {
            AppError::VersionControl("no branch is currently checked out".to_string())
        })?;
        debug!(branch = branch.as_str(), "resolved active branch");
        Ok(branch)
    }
}
