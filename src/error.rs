use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("quote provider returned status {0}")]
    Status(u16),
    #[error("malformed quote response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("failed to start speech command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to stop utterance: {0}")]
    Stop(#[source] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("failed to launch opener '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("opener exited with {0}")]
    Opener(ExitStatus),
}

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(#[from] pub arboard::Error);

/// Errors surfaced by [`crate::screen::QuoteScreen`] actions.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("text-to-speech is not initialized")]
    SpeechUnavailable,
    #[error(transparent)]
    Speech(#[from] SpeechError),
    #[error(transparent)]
    Share(#[from] ShareError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
