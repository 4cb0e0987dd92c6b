use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const GIT_PROGRAM_VAR: &str = "JIRAX_GIT";
const DEFAULT_GIT_PROGRAM: &str = "git";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub git_program: String,
    pub workspace_root: PathBuf,
}

impl AppConfig {
    pub fn load(workspace_hint: &Path) -> AppResult<Self> {
        Self::from_parts(env::var(GIT_PROGRAM_VAR).ok(), workspace_hint)
    }

    fn from_parts(git_program: Option<String>, workspace_hint: &Path) -> AppResult<Self> {
        let git_program = match git_program {
            Some(program) if program.trim().is_empty() => {
                return Err(AppError::Configuration(format!(
                    "{GIT_PROGRAM_VAR} is set but empty"
                )));
            }
            Some(program) => program.trim().to_string(),
            None => DEFAULT_GIT_PROGRAM.to_string(),
        };

        Ok(Self {
            git_program,
            workspace_root: workspace_hint.to_path_buf(),
        })
    }
}
