use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_core::{AppEvent, ViewerState};
use lexi_types::UiEvent;

use crate::state::AppState;

pub mod load_dictionary;

use load_dictionary::spawn_load;

/// App's main loop. Owns the viewer state; every event is applied in full
/// before the next one is read.
pub async fn event_loop(
    state: Arc<AppState>,
    events_rx: AsyncReceiver<AppEvent>,
    events_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut viewer = {
        let config = state.config.read().await;
        ViewerState::from_config(&config)
    };

    if viewer.begin_load() {
        spawn_load(state.source.clone(), events_tx.clone());
    }
    app_to_ui_tx.send(AppEvent::Render(viewer.view_model())).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = events_rx.recv().await?;
        tracing::debug!("[EVENT_LOOP] Event received: {:?}", std::mem::discriminant(&event));

        if !handle_event(&state, &mut viewer, &events_tx, event) {
            tracing::info!("[EVENT_LOOP] Close requested");
            // Lets the renderer flush every frame queued before this one
            app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
            return Ok(());
        }

        app_to_ui_tx.send(AppEvent::Render(viewer.view_model())).await?;
    }
}

/// Apply one event. Returns false once the app should stop.
fn handle_event(
    state: &AppState,
    viewer: &mut ViewerState,
    events_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> bool {
    match event {
        AppEvent::DictionaryLoaded(mapping) => viewer.finish_load(Ok(mapping)),
        AppEvent::DictionaryFailed(e) => viewer.finish_load(Err(e)),
        AppEvent::Render(_) => {
            // UI-only event, ignore in backend
        }
        AppEvent::UiEvent(ui_event) => match ui_event {
            UiEvent::SubmitSearch(term) => viewer.submit_search(&term),
            UiEvent::ClearSearch => viewer.clear_search(),
            UiEvent::SelectLetter(letter) => {
                viewer.select_letter(letter);
            }
            UiEvent::NextPage => {
                viewer.next_page();
            }
            UiEvent::PrevPage => {
                viewer.prev_page();
            }
            UiEvent::Retry => {
                if viewer.begin_load() {
                    tracing::info!("Retrying dictionary load");
                    spawn_load(state.source.clone(), events_tx.clone());
                } else {
                    tracing::debug!("Retry ignored, dictionary is loading or loaded");
                }
            }
            UiEvent::Close => return false,
        },
    }

    true
}
