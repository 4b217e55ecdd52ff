use anyhow::anyhow;
use anyhow::Result;
use once_cell::sync::OnceCell;
use tokio::sync::mpsc;
use tokio::sync::oneshot;

type ClipboardRequest = (String, oneshot::Sender<Result<(), String>>);

static SENDER: OnceCell<mpsc::UnboundedSender<ClipboardRequest>> = OnceCell::new();

/// Owns the system clipboard on a dedicated task. Some platforms drop the
/// clipboard contents when the owning handle is dropped, so one handle lives
/// for the whole session.
pub struct ClipboardService {}

impl ClipboardService {
    pub async fn start() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<ClipboardRequest>();
        if SENDER.set(tx).is_err() {
            return Err(anyhow!("Clipboard service is already running."));
        }
        let mut clipboard = arboard::Clipboard::new()?;

        while let Some((text, done)) = rx.recv().await {
            let res = clipboard
                .set_text(text)
                .map_err(|err| return err.to_string());
            if let Err(err) = &res {
                tracing::error!(error = %err, "Failed to write to clipboard");
            }
            let _ = done.send(res);
        }

        return Ok(());
    }

    pub fn healthcheck() -> Result<()> {
        if SENDER.get().is_some() {
            return Ok(());
        }

        arboard::Clipboard::new()?;
        return Ok(());
    }

    pub async fn set(text: String) -> Result<()> {
        let tx = match SENDER.get() {
            Some(tx) => tx,
            None => return Err(anyhow!("Clipboard is not available.")),
        };

        let (done_tx, done_rx) = oneshot::channel();
        tx.send((text, done_tx))
            .map_err(|_| return anyhow!("Clipboard service has stopped."))?;

        match done_rx.await? {
            Ok(()) => return Ok(()),
            Err(err) => return Err(anyhow!(err)),
        }
    }
}
