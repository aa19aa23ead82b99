use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Error, PartialEq)]
#[error("{0}")]
pub struct LaunchError(pub String);

/// Opens an outbound link (the messaging app, in practice).
///
/// Fire-and-forget: success means the link was handed to the platform, not
/// that anything was delivered.
#[async_trait]
pub trait MessageLauncher: Send + Sync {
    async fn open(&self, url: &str) -> Result<(), LaunchError>;
}

/// Launcher that only logs the link. Used by the demo binary and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLauncher;

#[async_trait]
impl MessageLauncher for LogLauncher {
    async fn open(&self, url: &str) -> Result<(), LaunchError> {
        info!(%url, "Opening messaging link");
        Ok(())
    }
}
