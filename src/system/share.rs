use std::future::Future;
use std::pin::Pin;
use tokio::process::Command;
use tracing::debug;

use crate::error::ShareError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub message: String,
}

pub type ShareFuture<'a> = Pin<Box<dyn Future<Output = Result<(), ShareError>> + Send + 'a>>;

pub trait ShareTarget: Send + Sync {
    fn open(&self, request: ShareRequest) -> ShareFuture<'_>;
}

/// Shares through the default mail handler by opening a `mailto:` URL.
pub struct MailtoShare {
    opener: String,
    opener_args: Vec<String>,
}

impl MailtoShare {
    pub fn new() -> Self {
        #[cfg(target_os = "macos")]
        let (opener, args) = ("open", vec![]);
        // cmd /C start would cut the URL at '&'
        #[cfg(target_os = "windows")]
        let (opener, args) = ("rundll32", vec!["url.dll,FileProtocolHandler".to_string()]);
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let (opener, args) = ("xdg-open", vec![]);

        Self::with_opener(opener, args)
    }

    pub fn with_opener(opener: &str, opener_args: Vec<String>) -> Self {
        Self {
            opener: opener.to_string(),
            opener_args,
        }
    }
}

impl Default for MailtoShare {
    fn default() -> Self {
        Self::new()
    }
}

impl ShareTarget for MailtoShare {
    fn open(&self, request: ShareRequest) -> ShareFuture<'_> {
        Box::pin(async move {
            let url = mailto_url(&request);
            debug!(opener = %self.opener, "opening share url");

            let status = Command::new(&self.opener)
                .args(&self.opener_args)
                .arg(&url)
                .status()
                .await
                .map_err(|source| ShareError::Spawn {
                    command: self.opener.clone(),
                    source,
                })?;

            if !status.success() {
                return Err(ShareError::Opener(status));
            }
            Ok(())
        })
    }
}

pub fn mailto_url(request: &ShareRequest) -> String {
    format!(
        "mailto:?subject={}&body={}",
        encode_component(&request.title),
        encode_component(&request.message)
    )
}

// form encoding writes spaces as '+', mail clients expect %20
fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
