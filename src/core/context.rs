use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::utils::error::WaitError;

/// Caller-supplied cancellation/deadline carrier threaded into every probe
/// call, standing in for what the host would otherwise pass as a context.
///
/// Clones share the cancellation token, so canceling any clone is observed
/// by all of them. The deadline is fixed at construction.
#[derive(Clone, Debug, Default)]
pub struct WaitContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl WaitContext {
    /// A live context with no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context with an explicit deadline, which may already lie in the past.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_canceled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The context's termination state at this instant.
    ///
    /// Explicit cancellation takes precedence over an expired deadline, so a
    /// caller that canceled always gets its own signal back. `None` means the
    /// budget is still live.
    pub fn error(&self) -> Option<WaitError> {
        if self.token.is_cancelled() {
            return Some(WaitError::Canceled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(WaitError::DeadlineExceeded),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_context_has_no_error() {
        assert!(WaitContext::new().error().is_none());
        assert!(WaitContext::with_timeout(Duration::from_secs(60))
            .error()
            .is_none());
    }

    #[test]
    fn canceled_context_reports_canceled() {
        let ctx = WaitContext::new();
        ctx.cancel();
        assert!(matches!(ctx.error(), Some(WaitError::Canceled)));
    }

    #[test]
    fn past_deadline_reports_deadline_exceeded() {
        let ctx = WaitContext::with_deadline(Instant::now() - Duration::from_secs(1));
        assert!(matches!(ctx.error(), Some(WaitError::DeadlineExceeded)));
    }

    #[test]
    fn cancel_wins_over_expired_deadline() {
        let ctx = WaitContext::with_deadline(Instant::now() - Duration::from_secs(1));
        ctx.cancel();
        assert!(matches!(ctx.error(), Some(WaitError::Canceled)));
    }

    #[test]
    fn clones_share_the_cancellation_token() {
        let ctx = WaitContext::new();
        let clone = ctx.clone();
        ctx.cancel();
        assert!(clone.is_canceled());
        assert!(matches!(clone.error(), Some(WaitError::Canceled)));
    }

    #[test]
    fn zero_timeout_is_already_expired() {
        let ctx = WaitContext::with_timeout(Duration::ZERO);
        assert!(matches!(ctx.error(), Some(WaitError::DeadlineExceeded)));
    }
}
