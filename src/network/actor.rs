//! Network actor - runs TheMealDB fetches in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{FetchCommand, FetchResponse};
use crate::network::client::MealDbClient;

/// Network actor that processes fetch commands
///
/// Each fetch is spawned onto a JoinSet and runs to completion on its own;
/// there is no per-request cancellation. Ordering between in-flight fetches
/// is not guaranteed here - the app layer drops stale responses by id.
pub struct NetworkActor {
    client: MealDbClient,
    response_tx: mpsc::UnboundedSender<FetchResponse>,
    active_fetches: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<FetchResponse>) -> Self {
        Self::with_client(MealDbClient::default(), response_tx)
    }

    /// Build with a caller-supplied client (tests inject a mock base URL)
    pub fn with_client(
        client: MealDbClient,
        response_tx: mpsc::UnboundedSender<FetchResponse>,
    ) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_fetches: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<FetchCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(FetchCommand::Categories { id }) => {
                            let client = self.client.clone();
                            let response_tx = self.response_tx.clone();

                            self.active_fetches.spawn(async move {
                                tracing::info!(id, "Fetching categories");
                                let result = client.fetch_categories(id).await;
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(FetchCommand::Recipes { id, category }) => {
                            let client = self.client.clone();
                            let response_tx = self.response_tx.clone();

                            self.active_fetches.spawn(async move {
                                tracing::info!(id, category = %category, "Fetching recipes");
                                let result = client.fetch_recipes(id, category).await;
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(FetchCommand::Shutdown) => {
                            self.active_fetches.abort_all();
                            break;
                        }

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_fetches.join_next() => {
                    // Task completed - responses were already sent from the tasks
                }
            }
        }
    }
}
