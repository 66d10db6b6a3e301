use std::sync::Arc;

use kanal::AsyncSender;
use lexi_core::{AppEvent, DictionarySource};

/// Fetch the mapping on a detached task and post the outcome back to the
/// event loop. The task always reports, so nothing needs to join it.
pub fn spawn_load(source: Arc<dyn DictionarySource>, events_tx: AsyncSender<AppEvent>) {
    tokio::spawn(async move {
        tracing::info!("Loading dictionary: {}", source.describe());

        let event = match source.fetch().await {
            Ok(mapping) => AppEvent::DictionaryLoaded(mapping),
            Err(e) => AppEvent::DictionaryFailed(e),
        };

        if let Err(e) = events_tx.send(event).await {
            tracing::error!("Failed to deliver dictionary load result: {}", e);
        }
    });
}
