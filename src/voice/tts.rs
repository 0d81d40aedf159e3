use anyhow::Result;
use std::process::{Child, Command, Stdio};
use std::sync::Mutex;
use tracing::debug;

use crate::config::SpeechConfig;
use crate::error::SpeechError;

/// Text-to-speech seam. `speak` returns as soon as playback has started.
pub trait SpeechEngine: Send + Sync {
    fn stop(&self) -> Result<(), SpeechError>;
    fn speak(&self, text: &str) -> Result<(), SpeechError>;
}

/// Speaks through the platform speech command (`say` on macOS, `espeak` elsewhere).
pub struct TtsManager {
    command: String,
    current: Mutex<Option<Child>>,
}

impl TtsManager {
    pub fn new(config: &SpeechConfig) -> Result<Self> {
        let resolved = which::which(&config.command).map_err(|e| {
            anyhow::anyhow!("speech command '{}' not usable: {}", config.command, e)
        })?;
        debug!(path = %resolved.display(), "speech command resolved");

        Ok(Self {
            command: resolved.to_string_lossy().into_owned(),
            current: Mutex::new(None),
        })
    }
}

impl SpeechEngine for TtsManager {
    fn stop(&self) -> Result<(), SpeechError> {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(mut child) = current.take() {
            // Only kill an utterance that is still running
            if let Ok(None) = child.try_wait() {
                child.kill().map_err(SpeechError::Stop)?;
                debug!(pid = child.id(), "stopped utterance");
            }
            let _ = child.wait();
        }
        Ok(())
    }

    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        // spawn() keeps this non-blocking
        let child = Command::new(&self.command)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = Some(child);
        Ok(())
    }
}

impl Drop for TtsManager {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}
