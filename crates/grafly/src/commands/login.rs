//! Login command: the session is opened by the dispatcher, so this only reports.

use grafly_core::Session;

use crate::cli::GlobalOpts;
use crate::error::CliError;

#[allow(clippy::unnecessary_wraps)]
pub fn handle(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    if !global.quiet {
        let config = session.config();
        eprintln!("Logged in to {} as {}", config.url, config.user);
    }
    Ok(())
}
