#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::clipboard::ClipboardService;
use super::ExportService;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::GeneratorBox;
use crate::domain::models::StatusProbeBox;

/// Runs the work views request off the UI loop and reports back with events.
/// Every remote failure is turned into a display message here, nothing past
/// this point sees a transport error.
pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        generator: GeneratorBox,
        status_probe: StatusProbeBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            let worker_tx = tx.clone();
            match action {
                Action::GenerateTasks(token, request) => {
                    let generator = generator.clone();
                    tokio::spawn(async move {
                        let res = generator
                            .generate(request.clone())
                            .await
                            .map(|response| return response.result)
                            .map_err(|err| return err.to_string());

                        if let Err(err) = &res {
                            tracing::warn!(error = %err, "Generation failed");
                        }
                        send(&worker_tx, Event::GenerationFinished(token, request, res));
                    });
                }
                Action::CheckStatus(token) => {
                    let status_probe = status_probe.clone();
                    tokio::spawn(async move {
                        let res = status_probe
                            .check()
                            .await
                            .map_err(|err| return err.to_string());

                        send(&worker_tx, Event::StatusChecked(token, res));
                    });
                }
                Action::CopyToClipboard(token, text) => {
                    tokio::spawn(async move {
                        let res = ClipboardService::set(text)
                            .await
                            .map_err(|err| return err.to_string());

                        send(&worker_tx, Event::ClipboardCopied(token, res));
                    });
                }
                Action::DownloadResult(token, dir, text) => {
                    tokio::spawn(async move {
                        let res = ExportService::download(&dir, &text)
                            .await
                            .map_err(|err| return format!("Failed to save file: {err}"));

                        send(&worker_tx, Event::ResultDownloaded(token, res));
                    });
                }
            }
        }

        return Ok(());
    }
}

fn send(tx: &mpsc::UnboundedSender<Event>, event: Event) {
    if tx.send(event).is_err() {
        tracing::debug!("Dropping worker result, the event loop has closed");
    }
}
