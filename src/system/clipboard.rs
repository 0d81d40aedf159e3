use arboard::Clipboard;
use std::sync::{Mutex, MutexGuard};

use crate::error::ClipboardError;

pub trait ClipboardSink: Send + Sync {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard via arboard.
///
/// The handle is opened on first copy and kept for the life of the app: on
/// X11/Wayland the selection is only served while a handle is alive.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Clipboard>> {
        self.handle.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut handle = self.lock();
        if handle.is_none() {
            *handle = Some(Clipboard::new()?);
        }

        let result = match handle.as_mut() {
            Some(clipboard) => clipboard.set_text(text.to_owned()),
            None => Err(arboard::Error::ClipboardNotSupported),
        };
        if result.is_err() {
            // reopen on the next copy
            *handle = None;
        }
        result.map_err(ClipboardError::from)
    }
}
