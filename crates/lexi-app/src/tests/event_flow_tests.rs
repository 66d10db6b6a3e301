use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use kanal::{AsyncReceiver, AsyncSender};
use lexi_config::Config;
use lexi_core::types::DictionaryMapping;
use lexi_core::{AppEvent, DictionarySource, LoadError};
use lexi_types::{LoadStatus, UiEvent, ViewModel};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;
use crate::ui::{read_commands, render_frames};

/// Fails for the first `failures` fetches, then serves the mapping
struct FlakySource {
    mapping: DictionaryMapping,
    failures: usize,
    calls: AtomicUsize,
}

#[async_trait]
impl DictionarySource for FlakySource {
    async fn fetch(&self) -> Result<DictionaryMapping, LoadError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            Err(LoadError::Network("connection refused".to_string()))
        } else {
            Ok(self.mapping.clone())
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

struct Harness {
    to_app: AsyncSender<AppEvent>,
    frames: AsyncReceiver<AppEvent>,
    handle: JoinHandle<anyhow::Result<()>>,
}

fn app_state(failures: usize) -> Arc<AppState> {
    let mapping: DictionaryMapping = [
        ("ant", "1. a small insect"),
        ("bee", "1. a flying insect 2. to exist"),
        ("cat", "1. a small feline"),
        ("cats", "1. more than one cat"),
        ("concatenate", "1. to link together"),
    ]
    .into_iter()
    .map(|(w, d)| (w.to_string(), d.to_string()))
    .collect();

    let source = Arc::new(FlakySource {
        mapping,
        failures,
        calls: AtomicUsize::new(0),
    });
    Arc::new(AppState::new(Config::default(), source))
}

impl Harness {
    fn start(failures: usize) -> Self {
        let state = app_state(failures);
        let (to_app, from_ui) = kanal::unbounded_async::<AppEvent>();
        let (to_ui, frames) = kanal::unbounded_async::<AppEvent>();
        let handle = tokio::spawn(event_loop(state, from_ui, to_app.clone(), to_ui));

        Self {
            to_app,
            frames,
            handle,
        }
    }

    async fn send(&self, event: UiEvent) {
        self.to_app.send(AppEvent::UiEvent(event)).await.expect("send failed");
    }

    async fn next_frame(&self) -> ViewModel {
        match timeout(Duration::from_secs(2), self.frames.recv()).await {
            Ok(Ok(AppEvent::Render(view))) => view,
            Ok(Ok(_)) => panic!("Wrong event type"),
            Ok(Err(e)) => panic!("Channel error: {}", e),
            Err(_) => panic!("Timeout - no frame rendered"),
        }
    }

    /// Skip frames until the dictionary finished loading one way or the other
    async fn settled_frame(&self) -> ViewModel {
        loop {
            let view = self.next_frame().await;
            if view.status != LoadStatus::Loading {
                return view;
            }
        }
    }
}

#[tokio::test]
async fn first_frame_is_loading_then_ready() {
    let harness = Harness::start(0);

    assert_eq!(harness.next_frame().await.status, LoadStatus::Loading);

    let view = harness.settled_frame().await;
    assert_eq!(view.status, LoadStatus::Ready);
    assert_eq!(view.active_letter(), Some('a'));
    assert_eq!(view.entries[0].word, "ant");
}

#[tokio::test]
async fn commands_drive_navigation() {
    let harness = Harness::start(0);
    harness.settled_frame().await;

    harness.send(UiEvent::NextPage).await;
    assert_eq!(harness.next_frame().await.active_letter(), Some('b'));

    harness.send(UiEvent::SubmitSearch("Cat".to_string())).await;
    let view = harness.next_frame().await;
    assert_eq!(view.search_term, "cat");
    assert_eq!(view.active_letter(), Some('c'));
    let words: Vec<&str> = view.entries.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["cat", "cats"]);
    assert!(!view.can_next);
    assert!(!view.can_prev);

    harness.send(UiEvent::ClearSearch).await;
    let view = harness.next_frame().await;
    assert_eq!(view.letters.len(), 3);
    assert!(view.can_prev);

    harness.send(UiEvent::SelectLetter('a')).await;
    let view = harness.next_frame().await;
    assert_eq!(view.active_letter(), Some('a'));
    assert!(!view.can_prev);

    harness.send(UiEvent::Close).await;
    let result = timeout(Duration::from_secs(2), harness.handle).await;
    assert!(matches!(result, Ok(Ok(Ok(())))));
}

#[tokio::test]
async fn failed_load_can_be_retried() {
    let harness = Harness::start(1);

    let view = harness.settled_frame().await;
    assert_eq!(
        view.status,
        LoadStatus::Failed("Network error: connection refused".to_string())
    );

    harness.send(UiEvent::Retry).await;
    let view = harness.settled_frame().await;
    assert_eq!(view.status, LoadStatus::Ready);
    assert_eq!(view.letters.len(), 3);
}

#[tokio::test]
async fn empty_search_renders_no_results() {
    let harness = Harness::start(0);
    harness.settled_frame().await;

    harness.send(UiEvent::SubmitSearch("\"zebra\"".to_string())).await;
    let view = harness.next_frame().await;
    assert!(view.no_results);
    assert!(view.entries.is_empty());

    harness.send(UiEvent::NextPage).await;
    let view = harness.next_frame().await;
    assert!(view.no_results);
}

#[tokio::test]
async fn piped_input_does_not_stall_small_channels() {
    let (to_app, from_ui) = kanal::bounded_async::<AppEvent>(4);
    let (to_ui, frames) = kanal::bounded_async::<AppEvent>(2);
    let cancel = CancellationToken::new();

    let backend = tokio::spawn(event_loop(app_state(0), from_ui, to_app.clone(), to_ui));
    let renderer = tokio::spawn(render_frames(frames, Vec::new(), cancel.clone()));

    // Every line is ready at once, like a file piped into stdin
    let input = "n\np\n".repeat(100);
    let reader = read_commands(input.as_bytes(), tokio::io::sink(), to_app, cancel);

    let run = async {
        reader.await?;
        backend.await??;
        let out = renderer.await??;
        anyhow::Ok(out)
    };

    let out = match timeout(Duration::from_secs(5), run).await {
        Ok(result) => result.expect("frontend failed"),
        Err(_) => panic!("Timeout - frontend and backend stalled"),
    };

    // Initial frame, the load result, then one frame per command
    let text = String::from_utf8(out).expect("frames are utf-8");
    let frames = text.matches("Loading...").count() + text.matches("  page ").count();
    assert_eq!(frames, 202);
}

#[tokio::test]
async fn close_lets_renderer_finish() {
    let harness = Harness::start(0);
    harness.settled_frame().await;

    harness.send(UiEvent::Close).await;
    match timeout(Duration::from_secs(2), harness.frames.recv()).await {
        Ok(Ok(AppEvent::UiEvent(UiEvent::Close))) => {}
        Ok(Ok(other)) => panic!("Wrong event type: {:?}", other),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - close never reached the UI"),
    }
}
