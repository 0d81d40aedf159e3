use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Stays until the user dismisses it.
    Modal,
    /// Fades out on its own.
    Toast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn modal(title: &str, body: &str) -> Self {
        Self {
            kind: NoticeKind::Modal,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    pub fn toast(body: &str) -> Self {
        Self {
            kind: NoticeKind::Toast,
            title: String::new(),
            body: body.to_string(),
        }
    }
}

/// User-facing acknowledgments.
pub trait Alerts: Send + Sync {
    fn alert(&self, title: &str, body: &str);
    fn toast(&self, body: &str);
}

/// Forwards notices to the render thread.
pub struct ChannelAlerts {
    tx: UnboundedSender<Notice>,
}

impl ChannelAlerts {
    pub fn new(tx: UnboundedSender<Notice>) -> Self {
        Self { tx }
    }
}

impl Alerts for ChannelAlerts {
    fn alert(&self, title: &str, body: &str) {
        let _ = self.tx.send(Notice::modal(title, body));
    }

    fn toast(&self, body: &str) {
        let _ = self.tx.send(Notice::toast(body));
    }
}
