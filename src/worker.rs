//! Background search execution.
//!
//! The UI thread never awaits the network. It queues a [`UiCommand`] and
//! later receives an [`AppEvent::SearchFinished`] tagged with the same
//! sequence number. Requests run concurrently; the App keeps only the
//! response for the latest sequence.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::sync::mpsc::Receiver;

use crate::tmdb::TmdbClient;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

pub async fn run_search_worker(
    client: Arc<TmdbClient>,
    mut commands: Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::Search { seq, request } => {
                let client = Arc::clone(&client);
                let events = events.clone();
                tokio::spawn(async move {
                    tracing::debug!(seq, page = request.page, "search started");
                    let outcome = client.search(&request).await;
                    if events
                        .send(AppEvent::SearchFinished { seq, outcome })
                        .is_err()
                    {
                        tracing::debug!(seq, "event loop gone, dropping search result");
                    }
                });
            }
        }
    }
    tracing::debug!("search worker stopped");
}
