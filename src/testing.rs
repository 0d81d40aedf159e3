//! Collaborator doubles shared by the unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

use crate::error::{ClipboardError, QuoteError, ShareError, SpeechError};
use crate::notice::{Alerts, Notice};
use crate::quote::{Quote, QuoteFuture, QuoteSource};
use crate::screen::QuoteScreen;
use crate::system::clipboard::ClipboardSink;
use crate::system::share::{ShareFuture, ShareRequest, ShareTarget};
use crate::voice::tts::SpeechEngine;

type QuoteResult = Result<Quote, QuoteError>;

pub fn quote(text: &str, author: &str) -> Quote {
    Quote {
        text: text.to_string(),
        author: author.to_string(),
    }
}

pub fn failure() -> QuoteError {
    QuoteError::Status(500)
}

enum Scripted {
    Ready(QuoteResult),
    Gated(oneshot::Receiver<QuoteResult>),
}

pub struct ScriptedSource {
    script: Mutex<VecDeque<Scripted>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn with_script(script: VecDeque<Scripted>) -> Self {
        Self {
            script: Mutex::new(script),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn ready(results: Vec<QuoteResult>) -> Self {
        Self::with_script(results.into_iter().map(Scripted::Ready).collect())
    }

    pub fn gated() -> (Self, oneshot::Sender<QuoteResult>) {
        let (source, mut senders) = Self::gated_many(1);
        (source, senders.remove(0))
    }

    /// One gate per fetch, in call order.
    pub fn gated_many(n: usize) -> (Self, Vec<oneshot::Sender<QuoteResult>>) {
        let (senders, receivers): (Vec<_>, Vec<_>) = (0..n).map(|_| oneshot::channel()).unzip();
        let source = Self::with_script(receivers.into_iter().map(Scripted::Gated).collect());
        (source, senders)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn wait_for_calls(&self, n: usize) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while self.calls() < n {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        })
        .await
        .expect("fetch was never issued");
    }
}

impl QuoteSource for ScriptedSource {
    fn fetch(&self) -> QuoteFuture<'_> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();
        Box::pin(async move {
            match next {
                Some(Scripted::Ready(result)) => result,
                Some(Scripted::Gated(rx)) => rx.await.unwrap_or_else(|_| Err(failure())),
                None => Err(failure()),
            }
        })
    }
}

#[derive(Default)]
pub struct RecordingSpeech {
    calls: Mutex<Vec<String>>,
    fail_stop: AtomicBool,
    fail_speak: AtomicBool,
}

impl RecordingSpeech {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fail_next_stop(&self) {
        self.fail_stop.store(true, Ordering::SeqCst);
    }

    pub fn fail_next_speak(&self) {
        self.fail_speak.store(true, Ordering::SeqCst);
    }
}

impl SpeechEngine for RecordingSpeech {
    fn stop(&self) -> Result<(), SpeechError> {
        self.calls.lock().unwrap().push("stop".to_string());
        if self.fail_stop.swap(false, Ordering::SeqCst) {
            return Err(SpeechError::Stop(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "kill refused",
            )));
        }
        Ok(())
    }

    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        self.calls.lock().unwrap().push(format!("speak:{text}"));
        if self.fail_speak.swap(false, Ordering::SeqCst) {
            return Err(SpeechError::Spawn {
                command: "say".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingShare {
    requests: Mutex<Vec<ShareRequest>>,
    fail: AtomicBool,
}

impl RecordingShare {
    pub fn fail_next(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<ShareRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ShareTarget for RecordingShare {
    fn open(&self, request: ShareRequest) -> ShareFuture<'_> {
        self.requests.lock().unwrap().push(request);
        let fail = self.fail.swap(false, Ordering::SeqCst);
        Box::pin(async move {
            if fail {
                return Err(ShareError::Spawn {
                    command: "share".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::Other, "dismissed"),
                });
            }
            Ok(())
        })
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    texts: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl RecordingClipboard {
    pub fn fail_next(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail.swap(false, Ordering::SeqCst) {
            return Err(ClipboardError(arboard::Error::ContentNotAvailable));
        }
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingAlerts {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingAlerts {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Alerts for RecordingAlerts {
    fn alert(&self, title: &str, body: &str) {
        self.notices.lock().unwrap().push(Notice::modal(title, body));
    }

    fn toast(&self, body: &str) {
        self.notices.lock().unwrap().push(Notice::toast(body));
    }
}

pub struct Harness {
    pub screen: Arc<QuoteScreen>,
    pub source: Arc<ScriptedSource>,
    pub speech: Arc<RecordingSpeech>,
    pub share: Arc<RecordingShare>,
    pub clipboard: Arc<RecordingClipboard>,
    pub alerts: Arc<RecordingAlerts>,
}

impl Harness {
    pub fn new(source: ScriptedSource) -> Self {
        Self::build(source, true)
    }

    pub fn without_speech(source: ScriptedSource) -> Self {
        Self::build(source, false)
    }

    fn build(source: ScriptedSource, with_speech: bool) -> Self {
        let source = Arc::new(source);
        let speech = Arc::new(RecordingSpeech::default());
        let share = Arc::new(RecordingShare::default());
        let clipboard = Arc::new(RecordingClipboard::default());
        let alerts = Arc::new(RecordingAlerts::default());

        let engine: Option<Arc<dyn SpeechEngine>> = if with_speech {
            Some(speech.clone() as Arc<dyn SpeechEngine>)
        } else {
            None
        };
        let screen = Arc::new(QuoteScreen::new(
            source.clone(),
            engine,
            share.clone(),
            clipboard.clone(),
            alerts.clone(),
        ));

        Self {
            screen,
            source,
            speech,
            share,
            clipboard,
            alerts,
        }
    }
}
