use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error, info};

use crate::error::ScreenError;
use crate::notice::Alerts;
use crate::quote::QuoteSource;
use crate::system::clipboard::ClipboardSink;
use crate::system::share::{ShareRequest, ShareTarget};
use crate::voice::tts::SpeechEngine;

pub const SHARE_TITLE: &str = "Share Quote";
pub const SHARE_SUCCESS: (&str, &str) = ("Success", "Quote shared successfully!");
pub const SHARE_FAILURE: (&str, &str) = ("Error", "There was an issue sharing the quote.");
pub const COPY_SUCCESS: &str = "Quote copied to clipboard";
pub const COPY_FAILURE: &str = "Could not copy the quote";

/// What the quote card renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub author: String,
    pub quote: String,
    pub is_loading: bool,
}

#[derive(Default)]
struct ScreenState {
    view: ViewState,
    in_flight: usize,
}

/// The quote-of-the-day screen: view state plus the collaborators it drives.
///
/// Fetches may overlap. Nothing is cancelled, so whichever response resolves
/// last is what stays on screen. `is_loading` holds while any fetch is
/// pending.
pub struct QuoteScreen {
    source: Arc<dyn QuoteSource>,
    speech: Option<Arc<dyn SpeechEngine>>,
    share: Arc<dyn ShareTarget>,
    clipboard: Arc<dyn ClipboardSink>,
    alerts: Arc<dyn Alerts>,
    state: Mutex<ScreenState>,
}

impl QuoteScreen {
    pub fn new(
        source: Arc<dyn QuoteSource>,
        speech: Option<Arc<dyn SpeechEngine>>,
        share: Arc<dyn ShareTarget>,
        clipboard: Arc<dyn ClipboardSink>,
        alerts: Arc<dyn Alerts>,
    ) -> Self {
        Self {
            source,
            speech,
            share,
            clipboard,
            alerts,
            state: Mutex::new(ScreenState::default()),
        }
    }

    pub fn snapshot(&self) -> ViewState {
        self.lock().view.clone()
    }

    /// Initial load when the screen is first shown.
    pub async fn mount(&self) {
        info!("quote screen mounted");
        self.fetch_random_quote().await;
    }

    pub async fn fetch_random_quote(&self) {
        self.begin_fetch();
        let result = self.source.fetch().await;

        let mut state = self.lock();
        state.in_flight = state.in_flight.saturating_sub(1);
        match result {
            Ok(quote) => {
                debug!(author = %quote.author, "quote loaded");
                state.view.quote = quote.text;
                state.view.author = quote.author;
            }
            Err(e) => {
                error!(error = %e, "Error fetching quote");
            }
        }
        state.view.is_loading = state.in_flight > 0;
    }

    pub fn speak(&self) -> Result<(), ScreenError> {
        let Some(engine) = &self.speech else {
            error!("Tts is not initialized");
            return Err(ScreenError::SpeechUnavailable);
        };

        let text = {
            let state = self.lock();
            format!("{} by {}", state.view.quote, state.view.author)
        };

        let result = engine.stop().and_then(|_| engine.speak(&text));
        if let Err(e) = &result {
            error!(error = %e, "Error speaking quote");
        }
        result.map_err(ScreenError::from)
    }

    pub async fn share(&self) -> Result<(), ScreenError> {
        let request = ShareRequest {
            title: SHARE_TITLE.to_string(),
            message: self.attributed_quote(),
        };

        match self.share.open(request).await {
            Ok(()) => {
                self.alerts.alert(SHARE_SUCCESS.0, SHARE_SUCCESS.1);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error sharing");
                self.alerts.alert(SHARE_FAILURE.0, SHARE_FAILURE.1);
                Err(e.into())
            }
        }
    }

    pub fn copy(&self) -> Result<(), ScreenError> {
        let text = {
            let state = self.lock();
            if state.view.quote.is_empty() {
                return Ok(());
            }
            attributed(&state.view)
        };

        match self.clipboard.set_text(&text) {
            Ok(()) => {
                self.alerts.toast(COPY_SUCCESS);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error copying quote");
                self.alerts.toast(COPY_FAILURE);
                Err(e.into())
            }
        }
    }

    fn begin_fetch(&self) {
        let mut state = self.lock();
        state.in_flight += 1;
        state.view.is_loading = true;
    }

    fn attributed_quote(&self) -> String {
        attributed(&self.lock().view)
    }

    fn lock(&self) -> MutexGuard<'_, ScreenState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn attributed(view: &ViewState) -> String {
    format!("{} \u{2014} {}", view.quote, view.author)
}
