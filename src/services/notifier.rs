//! Desktop notification dispatch
//!
//! Notifications are fire-and-forget: the notifier process is awaited so it
//! does not linger as a zombie, but its exit status is only logged.

use std::sync::Arc;

use tokio::process::Command;
use tracing::{debug, info};

use crate::config::NotifierKind;
use crate::error::NotifyError;
use crate::logging::ALERT_TARGET;
use crate::models::Alert;

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError>;
}

/// How the external command expects title and message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgStyle {
    /// `program -title T -message M`
    Flags,
    /// `program T M`
    Positional,
}

/// Runs an external notification command
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    program: String,
    style: ArgStyle,
}

impl CommandNotifier {
    pub fn terminal_notifier() -> Self {
        Self {
            program: "terminal-notifier".to_string(),
            style: ArgStyle::Flags,
        }
    }

    pub fn notify_send() -> Self {
        Self {
            program: "notify-send".to_string(),
            style: ArgStyle::Positional,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn args(&self, title: &str, message: &str) -> Vec<String> {
        match self.style {
            ArgStyle::Flags => vec![
                "-title".to_string(),
                title.to_string(),
                "-message".to_string(),
                message.to_string(),
            ],
            ArgStyle::Positional => vec![title.to_string(), message.to_string()],
        }
    }
}

#[async_trait::async_trait]
impl Notifier for CommandNotifier {
    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        let status = Command::new(&self.program)
            .args(self.args(&alert.title, &alert.message))
            .status()
            .await
            .map_err(|source| NotifyError::Launch {
                program: self.program.clone(),
                source,
            })?;

        debug!(
            program = %self.program,
            status = %status,
            "Notifier exited"
        );
        Ok(())
    }
}

/// Writes alerts to the log as JSON records
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        let record = serde_json::to_string(alert).unwrap_or_else(|_| alert.message.clone());
        info!(target: ALERT_TARGET, alert = %record, "{}", alert.title);
        Ok(())
    }
}

pub fn build_notifier(kind: NotifierKind) -> Arc<dyn Notifier> {
    match kind {
        NotifierKind::TerminalNotifier => Arc::new(CommandNotifier::terminal_notifier()),
        NotifierKind::NotifySend => Arc::new(CommandNotifier::notify_send()),
        NotifierKind::LogOnly => Arc::new(LogNotifier),
    }
}
