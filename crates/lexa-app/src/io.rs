use kanal::AsyncSender;
use lexa_core::types::{AppEvent, UiEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Stdin watcher: a bare line is a lookup, `:`-prefixed lines are commands.
pub async fn watcher_io(
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            // stdin closed
            tracing::info!("input stream ended");
            return Ok(());
        };

        let Some(event) = parse_line(&line) else {
            continue;
        };
        ui_to_app_tx.send(AppEvent::UiEvent(event)).await?;
    }
}

fn parse_line(line: &str) -> Option<UiEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match line {
        ":quit" | ":q" => return Some(UiEvent::Close),
        ":reset" => return Some(UiEvent::Reset),
        ":play" => return Some(UiEvent::PlayAudio),
        _ => {}
    }

    if let Some(code) = line.strip_prefix(":lang") {
        let code = code.trim();
        if code.is_empty() {
            tracing::warn!("usage: :lang <code>");
            return None;
        }
        return Some(UiEvent::SelectLanguage(code.to_string()));
    }

    if line.starts_with(':') {
        tracing::warn!("unknown command: {line}");
        return None;
    }

    Some(UiEvent::Search(line.to_string()))
}
