use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use business::domain::cart::events::{CartEvent, Notice, NoticeLevel};

fn emit(notice: &Notice) {
    match notice.level {
        NoticeLevel::Info => {
            tracing::info!(title = %notice.title, "{}", notice.description)
        }
        NoticeLevel::Error => {
            tracing::warn!(title = %notice.title, "{}", notice.description)
        }
    }
}

/// Writes the user-facing notice of each cart event to the log.
pub fn spawn_notice_logger(mut events: broadcast::Receiver<CartEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    if let Some(notice) = event.notice() {
                        emit(&notice);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "notice logger lagged behind cart events")
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
