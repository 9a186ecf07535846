//! Global advisory notification channel.
//!
//! Failed API calls surface their server-supplied detail here; the status
//! bar drains the channel each frame. Notices never block and never affect
//! the outcome of the call that produced them.

use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// Cloneable sending half of the notification channel.
#[derive(Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notice>,
}

impl Notifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn info(&self, text: impl Into<String>) {
        self.send(NoticeLevel::Info, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.send(NoticeLevel::Error, text.into());
    }

    fn send(&self, level: NoticeLevel, text: String) {
        // Advisory only: a dropped receiver just means nobody is watching.
        let _ = self.tx.send(Notice { level, text });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_arrive_in_order() {
        let (notifier, mut rx) = Notifier::channel();
        notifier.info("first");
        notifier.error("second");

        let first = rx.try_recv().expect("first notice");
        assert_eq!(first.level, NoticeLevel::Info);
        assert_eq!(first.text, "first");

        let second = rx.try_recv().expect("second notice");
        assert_eq!(second.level, NoticeLevel::Error);
        assert_eq!(second.text, "second");
    }

    #[test]
    fn test_send_without_receiver_is_silent() {
        let (notifier, rx) = Notifier::channel();
        drop(rx);
        notifier.error("nobody is listening");
    }
}
