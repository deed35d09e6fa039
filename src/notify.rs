use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("could not show notification: {0}")] Io(#[from] std::io::Error),
}

/// User-visible alert channel for failed recommendation calls.
pub trait FailureNotifier: Send + Sync {
    fn notify(&self, message: &str) -> Result<(), NotifyError>;
}

/// Prints the alert on stderr so it stands apart from the rendered page.
pub struct TerminalNotifier;

impl FailureNotifier for TerminalNotifier {
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let mut err = std::io::stderr().lock();
        writeln!(err, "\u{26a0}\u{fe0f}  {message}")?;
        err.flush()?;
        Ok(())
    }
}
