use crate::domain::ticket::TicketId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName(pub String);

impl BranchName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds a branch name from raw `git branch --show-current` output.
    ///
    /// Returns `None` when the output is blank, which is what git prints on a
    /// detached HEAD.
    pub fn from_git_output(stdout: &[u8]) -> Option<Self> {
        let name = String::from_utf8_lossy(stdout);
        let name = name.trim_end_matches(['\r', '\n']);
        if name.trim().is_empty() {
            None
        } else {
            Some(Self(name.to_string()))
        }
    }

    pub fn ticket_id(&self) -> Option<TicketId> {
        TicketId::find(self.0.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_newline() {
        let branch = BranchName::from_git_output(b"AB-123-fix-login\n").unwrap();
        assert_eq!(branch.as_str(), "AB-123-fix-login");
    }

    #[test]
    fn blank_output_is_detached_head() {
        assert_eq!(BranchName::from_git_output(b""), None);
        assert_eq!(BranchName::from_git_output(b"\n"), None);
    }

    #[test]
    fn extracts_ticket_from_prefixed_branch() {
        let branch = BranchName("feature/PAY-42-refunds".to_string());
        assert_eq!(branch.ticket_id().unwrap().as_str(), "PAY-42");
    }

    #[test]
    fn plain_branch_has_no_ticket() {
        let branch = BranchName("main".to_string());
        assert_eq!(branch.ticket_id(), None);
    }
}
