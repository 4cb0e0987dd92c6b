use std::fs::OpenOptions;
use std::path::PathBuf;

use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::workflow::annotate::{AnnotationOutcome, annotate_commit_message};

#[derive(Debug, Clone)]
pub struct AnnotateCommandArgs {
    pub commit_msg_file: PathBuf,
}

pub async fn run(ctx: &AppContext, args: AnnotateCommandArgs) -> AppResult<AnnotationOutcome> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(&args.commit_msg_file)
        .map_err(|source| AppError::CommitMessageFile {
            path: args.commit_msg_file.clone(),
            source,
        })?;

    annotate_commit_message(ctx, &mut file).await
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use async_trait::async_trait;
    use tempfile::TempDir;

    use super::*;
    use crate::config::AppConfig;
    use crate::domain::branch::BranchName;
    use crate::services::VersionControlService;

    struct FixedBranch(&'static str);

    #[async_trait]
    impl VersionControlService for FixedBranch {
        async fn active_branch(&self) -> AppResult<BranchName> {
            Ok(BranchName(self.0.to_string()))
        }
    }

    fn context(dir: &TempDir, branch: &'static str) -> AppContext {
        let config = AppConfig {
            git_program: "git".to_string(),
            workspace_root: dir.path().to_path_buf(),
        };
        AppContext::new(config, Arc::new(FixedBranch(branch)))
    }

    #[tokio::test]
    async fn rewrites_commit_message_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        fs::write(&path, "fix bug").unwrap();

        let outcome = run(
            &context(&dir, "AB-123-fix-login"),
            AnnotateCommandArgs {
                commit_msg_file: path.clone(),
            },
        )
        .await
        .unwrap();

        assert!(matches!(outcome, AnnotationOutcome::Appended(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "fix bug [AB-123]");
    }

    #[tokio::test]
    async fn failure_leaves_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        fs::write(&path, "fix bug").unwrap();

        let err = run(
            &context(&dir, "main"),
            AnnotateCommandArgs {
                commit_msg_file: path.clone(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::TicketNotFound));
        assert_eq!(fs::read_to_string(&path).unwrap(), "fix bug");
    }

    #[tokio::test]
    async fn missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing");

        let err = run(
            &context(&dir, "AB-1"),
            AnnotateCommandArgs {
                commit_msg_file: path.clone(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::CommitMessageFile { .. }));
        assert!(err.to_string().contains("missing"));
        assert!(!path.exists());
    }
}
