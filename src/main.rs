mod domain;
mod ledger;
mod messages;
mod clients;
mod actors;

mod app_system;
mod session;

#[cfg(test)]
mod mock_framework;

use clap::Parser;
use tracing::info;
use crate::app_system::{setup_tracing, Config, LedgerSystem, SystemError};
use crate::session::Session;

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = Config::parse();
    setup_tracing(&config.log_filter);

    info!(?config, "Starting inventory ledger");

    let system = LedgerSystem::new(config.mailbox_capacity.get());

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let session = Session::new(system.ledger_client.clone(), stdin, tokio::io::stdout());
    let outcome = session.run().await;

    if outcome.is_ok() {
        let changes = system.ledger_client.change_count().await?;
        info!(changes, "Session ended, discarding in-memory state");
    }

    // Shut down even when the session failed, then report the session error.
    system.shutdown().await?;
    outcome?;

    Ok(())
}
