use tracing::{error, info};
use crate::actors::LedgerService;
use crate::app_system::SystemError;
use crate::clients::LedgerClient;

/// Starts the ledger service and owns its task handle.
pub struct LedgerSystem {
    pub ledger_client: LedgerClient,
    handle: tokio::task::JoinHandle<()>,
}

impl LedgerSystem {
    pub fn new(mailbox_capacity: usize) -> Self {
        info!(mailbox_capacity, "Starting ledger system");
        let (service, ledger_client) = LedgerService::new(mailbox_capacity);
        let handle = tokio::spawn(service.run());

        Self {
            ledger_client,
            handle,
        }
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        self.ledger_client.shutdown().await?;
        drop(self.ledger_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e.into());
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
