//! Background writer for the JSON data files.
//!
//! Every mutation serializes a full snapshot and hands it to a single writer task
//! over an unbounded channel. The task processes jobs strictly in submission order,
//! so a later snapshot can never be overwritten by an earlier one. Each file is
//! written to a sibling temp file first and then renamed into place.

use std::path::{Path, PathBuf};
use tokio::sync::{mpsc, oneshot};

enum WriteJob {
    Write { path: PathBuf, contents: String },
    Flush(oneshot::Sender<()>),
}

/// Handle to the writer task. Cloning shares the same task.
#[derive(Clone)]
pub struct JsonWriter {
    tx: mpsc::UnboundedSender<WriteJob>,
}

impl JsonWriter {
    /// Spawns the writer task on the current tokio runtime.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(rx));
        Self { tx }
    }

    /// Queues `contents` to replace the file at `path`.
    pub fn submit(&self, path: PathBuf, contents: String) {
        if self.tx.send(WriteJob::Write { path, contents }).is_err() {
            tracing::error!("Data file writer has stopped, dropping write");
        }
    }

    /// Waits until every previously submitted write has completed.
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(WriteJob::Flush(done_tx)).is_err() {
            tracing::error!("Data file writer has stopped, nothing to flush");
            return;
        }
        let _ = done_rx.await;
    }
}

async fn run(mut rx: mpsc::UnboundedReceiver<WriteJob>) {
    while let Some(job) = rx.recv().await {
        match job {
            WriteJob::Write { path, contents } => {
                if let Err(e) = write_replacing(&path, &contents).await {
                    tracing::error!("Failed to write {}: {}", path.display(), e);
                } else {
                    tracing::trace!("Wrote {} ({} bytes)", path.display(), contents.len());
                }
            }
            WriteJob::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}

async fn write_replacing(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let result = match tokio::fs::write(&tmp, contents).await {
        Ok(()) => tokio::fs::rename(&tmp, path).await,
        Err(e) => Err(e),
    };

    if result.is_err() {
        let _ = tokio::fs::remove_file(&tmp).await;
    }

    result
}
