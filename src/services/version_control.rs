use async_trait::async_trait;

use crate::domain::branch::BranchName;
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Name of the currently checked-out branch.
    async fn active_branch(&self) -> AppResult<BranchName>;
}
