mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use crate::cmd::annotate::{self, AnnotateCommandArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::git::GitCli;
use crate::workflow::annotate::AnnotationOutcome;

#[derive(Parser)]
#[command(
    name = "jirax",
    author,
    version,
    about = "commit-msg hook that appends the branch's ticket id to the commit message"
)]
struct Cli {
    /// Commit message file, as passed by git to the commit-msg hook.
    commit_msg_file: PathBuf,
    /// Directory to run git in. Defaults to the current directory.
    #[arg(short = 'C', long = "repo")]
    repo: Option<PathBuf>,
    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(error) = run(cli).await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let workspace = match cli.repo {
        Some(repo) => repo,
        None => std::env::current_dir()?,
    };
    let config = AppConfig::load(&workspace)?;

    let git = Arc::new(GitCli::new(
        config.git_program.clone(),
        config.workspace_root.clone(),
    ));
    let context = AppContext::new(config, git);

    let outcome = annotate::run(
        &context,
        AnnotateCommandArgs {
            commit_msg_file: cli.commit_msg_file,
        },
    )
    .await?;

    let ticket = outcome.ticket();
    match &outcome {
        AnnotationOutcome::AlreadyPresent(_) => {
            println!("Ticket id {ticket} already present in commit message.");
        }
        AnnotationOutcome::Appended(_) => {
            println!("Appended [{ticket}] to commit message.");
        }
    }

    Ok(())
}
