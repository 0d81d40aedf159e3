use anyhow::Result;
use bevy::prelude::*;
use std::sync::{Arc, Mutex};
use std::thread;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use quotecard::config::AppConfig;
use quotecard::notice::{ChannelAlerts, Notice};
use quotecard::quote::forismatic::ForismaticClient;
use quotecard::screen::QuoteScreen;
use quotecard::system::clipboard::SystemClipboard;
use quotecard::system::share::MailtoShare;
use quotecard::ui::{ScreenChannel, UiPlugin};
use quotecard::voice::tts::{SpeechEngine, TtsManager};
use quotecard::worker::{run_screen_loop, ScreenCommand};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quotecard=info")),
        )
        .init();

    let config = AppConfig::default();

    let (ui_tx, worker_rx) = mpsc::unbounded_channel::<ScreenCommand>();
    let (notice_tx, ui_rx) = mpsc::unbounded_channel::<Notice>();

    // Voice is optional: without it the speak action only logs
    let speech: Option<Arc<dyn SpeechEngine>> = match TtsManager::new(&config.speech) {
        Ok(t) => Some(Arc::new(t) as Arc<dyn SpeechEngine>),
        Err(e) => {
            warn!("Voice Output Unavailable: {}", e);
            None
        }
    };

    let screen = Arc::new(QuoteScreen::new(
        Arc::new(ForismaticClient::new(config.quote.clone())),
        speech,
        Arc::new(MailtoShare::new()),
        Arc::new(SystemClipboard::new()),
        Arc::new(ChannelAlerts::new(notice_tx)),
    ));

    // 1. Quote worker on its own runtime
    let runtime = tokio::runtime::Runtime::new()?;
    let worker_screen = Arc::clone(&screen);
    thread::spawn(move || {
        runtime.block_on(run_screen_loop(worker_screen, worker_rx));
    });

    info!("starting quote window");

    // 2. Bevy app on the main thread; logging is already owned by tracing_subscriber
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.window_title.clone(),
                        resolution: config.window_size.into(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::log::LogPlugin>(),
        )
        .add_plugins(UiPlugin)
        .insert_resource(ScreenChannel {
            tx: ui_tx,
            rx: Mutex::new(ui_rx),
            screen,
        })
        .run();

    info!("quote window closed");
    Ok(())
}
