//! Command dispatch: bridges CLI args -> session calls -> output formatting.

pub mod config_cmd;
pub mod dashboards;
pub mod datasources;
pub mod login;
pub mod plugins;
pub mod util;

use grafly_core::Session;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a server-bound command. The session is already logged in.
pub async fn dispatch(cmd: Command, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Login => login::handle(session, global),
        Command::Datasources(args) => datasources::handle(session, args, global).await,
        Command::Dashboards(args) => dashboards::handle(session, args, global).await,
        Command::Plugins(args) => plugins::handle(session, args, global).await,
        // Handled before a session exists.
        Command::Config(_) | Command::Completions(_) => Err(CliError::Validation {
            field: "command".into(),
            reason: "does not take a server session".into(),
        }),
    }
}
