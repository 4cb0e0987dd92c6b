use crate::domain::ticket::TicketId;

/// Commit message contents, kept as raw bytes so the encoding is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(Vec<u8>);

impl CommitMessage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn ticket_id(&self) -> Option<TicketId> {
        TicketId::find(&self.0)
    }

    /// Returns the message with ` [<ticket>]` appended. No newline handling.
    pub fn annotated(&self, ticket: &TicketId) -> Self {
        let annotation = ticket.annotation();
        let mut bytes = Vec::with_capacity(self.0.len() + annotation.len());
        bytes.extend_from_slice(&self.0);
        bytes.extend_from_slice(annotation.as_bytes());
        Self(bytes)
    }
}
