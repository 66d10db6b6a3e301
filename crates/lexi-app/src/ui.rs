use kanal::{AsyncReceiver, AsyncSender};
use lexi_core::AppEvent;
use lexi_types::UiEvent;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::render::{HELP, render};

/// Line-oriented terminal front end: commands from stdin, frames to stdout.
///
/// Frames are drained on their own task so a full command channel can never
/// stall the event loop's frame sends.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let renderer = tokio::spawn(render_frames(app_to_ui_rx, tokio::io::stdout(), cancel.clone()));

    read_commands(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        ui_to_app_tx,
        cancel,
    )
    .await?;

    renderer.await??;
    Ok(())
}

/// Write every rendered frame until the backend closes or we are cancelled.
/// Hands the writer back when done.
pub async fn render_frames<W>(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    mut out: W,
    cancel: CancellationToken,
) -> anyhow::Result<W>
where
    W: AsyncWrite + Unpin,
{
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Renderer stopping");
                return Ok(out);
            }
            event = app_to_ui_rx.recv() => match event? {
                AppEvent::Render(view) => {
                    out.write_all(render(&view).as_bytes()).await?;
                    out.flush().await?;
                }
                AppEvent::UiEvent(UiEvent::Close) => return Ok(out),
                _ => {}
            }
        }
    }
}

/// Forward parsed input lines as commands. End of input counts as `/quit`.
pub async fn read_commands<R, W>(
    input: R,
    mut help_out: W,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Command reader stopping");
                return Ok(());
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            tracing::debug!("input closed");
            ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
            return Ok(());
        };

        match parse_command(&line) {
            Some(command) => {
                let closing = command == UiEvent::Close;
                ui_to_app_tx.send(AppEvent::UiEvent(command)).await?;
                if closing {
                    return Ok(());
                }
            }
            None => {
                help_out.write_all(HELP.as_bytes()).await?;
                help_out.flush().await?;
            }
        }
    }
}

/// Map one input line to a command. Bare text is a search.
pub fn parse_command(line: &str) -> Option<UiEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "n" | "/next" => Some(UiEvent::NextPage),
        "p" | "/prev" => Some(UiEvent::PrevPage),
        "/search" | "/s" => Some(UiEvent::SubmitSearch(rest.to_string())),
        "/clear" | "/c" => Some(UiEvent::ClearSearch),
        "/letter" | "/l" => rest.chars().next().map(UiEvent::SelectLetter),
        "/retry" => Some(UiEvent::Retry),
        "/quit" | "/q" => Some(UiEvent::Close),
        "/help" | "/h" => None,
        _ if head.starts_with('/') => None,
        _ => Some(UiEvent::SubmitSearch(line.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_shortcuts() {
        assert_eq!(parse_command("n"), Some(UiEvent::NextPage));
        assert_eq!(parse_command(" p "), Some(UiEvent::PrevPage));
        assert_eq!(parse_command("/letter b"), Some(UiEvent::SelectLetter('b')));
        assert_eq!(parse_command("/letter"), None);
    }

    #[test]
    fn search_commands() {
        assert_eq!(
            parse_command("/search \"cat\""),
            Some(UiEvent::SubmitSearch("\"cat\"".to_string()))
        );
        assert_eq!(parse_command("/search"), Some(UiEvent::SubmitSearch(String::new())));
        assert_eq!(parse_command("bobcat"), Some(UiEvent::SubmitSearch("bobcat".to_string())));
        assert_eq!(parse_command("/clear"), Some(UiEvent::ClearSearch));
    }

    #[test]
    fn unknown_and_empty_lines() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("/frobnicate"), None);
        assert_eq!(parse_command("/help"), None);
        assert_eq!(parse_command("/q"), Some(UiEvent::Close));
        assert_eq!(parse_command("/retry"), Some(UiEvent::Retry));
    }
}
