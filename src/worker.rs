use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use crate::screen::QuoteScreen;

/// Button presses forwarded from the render thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenCommand {
    NewQuote,
    Speak,
    Copy,
    Share,
}

/// Drives `screen` until the UI side of the channel closes.
///
/// Every command runs as its own task, so neither a slow provider nor a
/// blocking speech or clipboard call holds up the next command.
pub async fn run_screen_loop(screen: Arc<QuoteScreen>, mut rx: UnboundedReceiver<ScreenCommand>) {
    info!("quote worker online");

    {
        let screen = Arc::clone(&screen);
        tokio::spawn(async move { screen.mount().await });
    }

    while let Some(command) = rx.recv().await {
        debug!(?command, "screen command");
        match command {
            ScreenCommand::NewQuote => {
                let screen = Arc::clone(&screen);
                tokio::spawn(async move { screen.fetch_random_quote().await });
            }
            // speech and clipboard calls block; errors are logged inside the screen
            ScreenCommand::Speak => {
                let screen = Arc::clone(&screen);
                tokio::task::spawn_blocking(move || {
                    let _ = screen.speak();
                });
            }
            ScreenCommand::Copy => {
                let screen = Arc::clone(&screen);
                tokio::task::spawn_blocking(move || {
                    let _ = screen.copy();
                });
            }
            ScreenCommand::Share => {
                let screen = Arc::clone(&screen);
                tokio::spawn(async move {
                    let _ = screen.share().await;
                });
            }
        }
    }

    info!("quote worker stopped");
}
