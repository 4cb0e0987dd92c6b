use std::io::{Read, Seek, SeekFrom, Write};

use tracing::{debug, info};

use crate::context::AppContext;
use crate::domain::message::CommitMessage;
use crate::domain::ticket::TicketId;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationOutcome {
    /// The message already referenced a ticket and was left untouched.
    AlreadyPresent(TicketId),
    /// The ticket from the branch name was appended to the message.
    Appended(TicketId),
}

impl AnnotationOutcome {
    pub fn ticket(&self) -> &TicketId {
        match self {
            AnnotationOutcome::AlreadyPresent(ticket) | AnnotationOutcome::Appended(ticket) => {
                ticket
            }
        }
    }
}

/// Makes sure the commit message in `file` references a ticket.
///
/// If the message has no ticket id, one is taken from the active branch and
/// appended as ` [KEY-123]`. The file is only written once every check has
/// passed, so on error its contents are unchanged.
pub async fn annotate_commit_message<F>(
    ctx: &AppContext,
    file: &mut F,
) -> AppResult<AnnotationOutcome>
where
    F: Read + Write + Seek,
{
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    let message = CommitMessage::new(bytes);
    debug!(
        bytes = message.as_bytes().len(),
        workspace = %ctx.config.workspace_root.display(),
        "read commit message"
    );

    if let Some(ticket) = message.ticket_id() {
        info!(ticket = ticket.as_str(), "ticket id already present");
        return Ok(AnnotationOutcome::AlreadyPresent(ticket));
    }

    let branch = ctx.version_control.active_branch().await?;
    let ticket = branch.ticket_id().ok_or(AppError::TicketNotFound)?;

    // The new contents are strictly longer, so no truncation is needed.
    let annotated = message.annotated(&ticket);
    file.seek(SeekFrom::Start(0))?;
    file.write_all(annotated.as_bytes())?;
    file.flush()?;
    info!(ticket = ticket.as_str(), branch = branch.as_str(), "appended ticket id");

    Ok(AnnotationOutcome::Appended(ticket))
}
