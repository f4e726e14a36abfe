//! Interactive console session driving the ledger service.

pub mod error;
pub mod input;
pub mod menu;

pub use error::*;
pub use input::*;
pub use menu::*;

use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};

use crate::clients::LedgerClient;
use crate::domain::Product;
use crate::ledger::{LedgerError, UndoOutcome};

enum Flow {
    Continue,
    Exit,
}

/// Keeps domain outcomes for the caller to report and turns communication
/// failures into session errors.
fn recoverable<T>(result: Result<T, LedgerError>) -> Result<Result<T, LedgerError>, SessionError> {
    match result {
        Err(e @ LedgerError::ActorCommunicationError(_)) => Err(e.into()),
        other => Ok(other),
    }
}

pub struct Session<R, W> {
    client: LedgerClient,
    input: InputReader<R>,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(client: LedgerClient, reader: R, output: W) -> Self {
        Self {
            client,
            input: InputReader::new(reader),
            output,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    #[instrument(name = "session", skip(self))]
    pub async fn run(mut self) -> Result<(), SessionError> {
        info!("Session started");

        loop {
            self.prompt(&render_menu()).await?;
            match self.step().await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(SessionError::EndOfInput) => {
                    info!("Input closed, ending session");
                    break;
                }
                Err(e @ SessionError::InvalidMenuSelection(_)) => {
                    debug!(error = %e, "Rejected menu selection");
                    self.say("Invalid option.").await?;
                }
                Err(e) => return Err(e),
            }
        }

        self.output.flush().await?;
        info!("Session finished");
        Ok(())
    }

    async fn step(&mut self) -> Result<Flow, SessionError> {
        let option: MenuOption = self.input.next_token().await?.parse()?;
        debug!(?option, "Menu option selected");

        match option {
            MenuOption::RegisterProduct => {
                let name = self.prompt_token("Enter product name: ").await?;
                let price = self
                    .prompt_value("Enter product price: ", "price", |p: &f64| p.is_finite())
                    .await?;
                let quantity = self
                    .prompt_value("Enter product quantity: ", "quantity", |_: &u32| true)
                    .await?;
                self.client
                    .register_product(Product::new(name.clone(), price, quantity))
                    .await?;
                self.say(&format!("Product added: {name}")).await?;
            }
            MenuOption::RemoveProduct => {
                let name = self.prompt_token("Enter name of the product to remove: ").await?;
                match recoverable(self.client.remove_product(name).await)? {
                    Ok(product) => self.say(&format!("Product removed: {}", product.name)).await?,
                    Err(_) => self.say("Product not found.").await?,
                }
            }
            MenuOption::QueryProduct => {
                let name = self.prompt_token("Enter name of the product to query: ").await?;
                match recoverable(self.client.query_product(name).await)? {
                    Ok(product) => self.say(&product.to_string()).await?,
                    Err(_) => self.say("Product not found.").await?,
                }
            }
            MenuOption::ListProducts => {
                for product in self.client.list_products().await? {
                    self.say(&product.to_string()).await?;
                }
            }
            MenuOption::RegisterRequest => {
                self.prompt("Enter request description: ").await?;
                let description = self.input.rest_of_line().await?;
                let request = self.client.register_request(description).await?;
                self.say(&format!("Request registered: {}", request.description)).await?;
            }
            MenuOption::ProcessRequest => match recoverable(self.client.process_request().await)? {
                Ok(request) => self.say(&format!("Processing request: {}", request.description)).await?,
                Err(_) => self.say("No pending requests.").await?,
            },
            MenuOption::CurrentRequest => match recoverable(self.client.current_request().await)? {
                Ok(request) => self.say(&format!("Request in progress: {}", request.description)).await?,
                Err(_) => self.say("No request in progress.").await?,
            },
            MenuOption::ListRequests => {
                for request in self.client.list_requests().await? {
                    self.say(&format!("Pending request: {}", request.description)).await?;
                }
            }
            MenuOption::RegisterClient => {
                let name = self.prompt_token("Enter name of the waiting client: ").await?;
                let client = self.client.register_client(name).await?;
                self.say(&format!("Client registered: {}", client.name)).await?;
            }
            MenuOption::AttendClient => match recoverable(self.client.attend_client().await)? {
                Ok(client) => self.say(&format!("Attending client: {}", client.name)).await?,
                Err(_) => self.say("No clients waiting.").await?,
            },
            MenuOption::ListWaiting => {
                for client in self.client.list_waiting().await? {
                    self.say(&format!("Waiting client: {}", client.name)).await?;
                }
            }
            MenuOption::Undo => match recoverable(self.client.undo_last().await)? {
                Ok(UndoOutcome::RemovedAdded(product)) => {
                    self.say(&format!("Undo: added product removed: {}", product.name)).await?
                }
                Ok(UndoOutcome::RestoredRemoved(product)) => {
                    self.say(&format!("Undo: removed product restored: {}", product.name)).await?
                }
                // The entry is consumed silently.
                Ok(UndoOutcome::AddedAlreadyGone(_)) => {}
                Err(_) => self.say("No changes to undo.").await?,
            },
            MenuOption::Exit => {
                self.say("Exiting...").await?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    async fn prompt_token(&mut self, prompt: &str) -> Result<String, SessionError> {
        self.prompt(prompt).await?;
        self.input.next_token().await
    }

    /// Reprompts until the token parses and passes `valid`.
    async fn prompt_value<T: FromStr>(
        &mut self,
        prompt: &str,
        field: &'static str,
        valid: impl Fn(&T) -> bool,
    ) -> Result<T, SessionError> {
        loop {
            let token = self.prompt_token(prompt).await?;
            match token.parse::<T>() {
                Ok(value) if valid(&value) => return Ok(value),
                _ => {
                    let e = SessionError::InvalidInput { field, value: token };
                    warn!(error = %e, "Rejected input");
                    self.say(&format!("{e}. Please try again.")).await?;
                }
            }
        }
    }

    async fn prompt(&mut self, text: &str) -> Result<(), SessionError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn say(&mut self, line: &str) -> Result<(), SessionError> {
        self.output.write_all(line.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        Ok(())
    }
}
