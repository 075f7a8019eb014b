use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use convoy_core::{LoginRedirect, Navigation, Notification, Notifier};
use parking_lot::Mutex;
use tracing::{info, warn};

/// Writes notifications to a terminal stream, one per line.
pub struct TerminalNotifier {
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalNotifier {
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out: Mutex::new(out) }
    }
}

impl Notifier for TerminalNotifier {
    fn show_notification(&self, notification: &Notification) {
        let mut out = self.out.lock();
        if let Err(err) = writeln!(out, "error: {}", notification.message) {
            warn!(error = %err, "failed to write notification");
        }
    }
}

/// Forwards notifications and counts them, so callers know a failure has
/// already been shown to the user.
pub struct TrackingNotifier {
    inner: Arc<dyn Notifier>,
    shown: AtomicUsize,
}

impl TrackingNotifier {
    pub fn new(inner: Arc<dyn Notifier>) -> Self {
        Self { inner, shown: AtomicUsize::new(0) }
    }

    pub fn shown(&self) -> usize {
        self.shown.load(Ordering::SeqCst)
    }
}

impl Notifier for TrackingNotifier {
    fn show_notification(&self, notification: &Notification) {
        self.shown.fetch_add(1, Ordering::SeqCst);
        self.inner.show_notification(notification);
    }
}

/// Remembers that the server asked for a fresh login.
#[derive(Debug, Default)]
pub struct LoginPrompt {
    requested: AtomicBool,
}

impl LoginPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

impl LoginRedirect for LoginPrompt {
    fn redirect_to_login(&self, navigation: &Navigation) {
        info!(route = %navigation.route, replace = navigation.replace_history, "login required");
        self.requested.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_notifier_writes_one_line_per_message() {
        let buf = SharedBuf::default();
        let notifier = TerminalNotifier::new(Box::new(buf.clone()));

        notifier.show_notification(&Notification { message: "A".into() });
        notifier.show_notification(&Notification { message: "B".into() });

        assert_eq!(String::from_utf8(buf.0.lock().clone()).unwrap(), "error: A\nerror: B\n");
    }

    #[test]
    fn test_login_prompt_latches() {
        let prompt = LoginPrompt::new();
        assert!(!prompt.requested());

        prompt.redirect_to_login(&Navigation::login());
        assert!(prompt.requested());
    }

    #[test]
    fn test_tracking_notifier_counts_and_forwards() {
        let buf = SharedBuf::default();
        let tracking =
            TrackingNotifier::new(Arc::new(TerminalNotifier::new(Box::new(buf.clone()))));
        assert_eq!(tracking.shown(), 0);

        tracking.show_notification(&Notification { message: "A".into() });

        assert_eq!(tracking.shown(), 1);
        assert_eq!(String::from_utf8(buf.0.lock().clone()).unwrap(), "error: A\n");
    }
}
