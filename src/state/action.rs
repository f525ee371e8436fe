//! Lifecycle of one async action: `Idle -> Pending -> Idle`.
//!
//! Each `begin()` issues a fresh [`RequestToken`]. The response carries the
//! token back, and `finish()` only accepts the token of the request that is
//! currently pending, so a late answer to a superseded request is dropped
//! instead of overwriting newer state.

use crate::error::ValidationError;

/// Identifies one in-flight request of one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionState {
    #[default]
    Idle,
    Pending(RequestToken),
}

#[derive(Debug, Clone)]
pub struct ActionTracker {
    /// Human-readable action name, used in messages and logs
    name: &'static str,
    state: ActionState,
    issued: u64,
}

impl ActionTracker {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: ActionState::Idle,
            issued: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> ActionState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, ActionState::Pending(_))
    }

    /// Move to Pending. Fails if a request is already in flight.
    pub fn begin(&mut self) -> Result<RequestToken, ValidationError> {
        if self.is_pending() {
            return Err(ValidationError::AlreadyPending { action: self.name });
        }
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.state = ActionState::Pending(token);
        Ok(token)
    }

    /// Accept the response for `token`, returning to Idle.
    ///
    /// Returns `false` (and changes nothing) if `token` is not the pending one.
    pub fn finish(&mut self, token: RequestToken) -> bool {
        match self.state {
            ActionState::Pending(current) if current == token => {
                self.state = ActionState::Idle;
                true
            }
            _ => {
                tracing::debug!(
                    action = self.name,
                    token = token.value(),
                    "Discarding response for superseded request"
                );
                false
            }
        }
    }

    /// Abandon the pending request; its response will be discarded.
    pub fn abandon(&mut self) {
        self.state = ActionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_finish_cycle() {
        let mut tracker = ActionTracker::new("Trend collection");
        assert_eq!(tracker.state(), ActionState::Idle);

        let token = tracker.begin().unwrap();
        assert!(tracker.is_pending());
        assert!(tracker.finish(token));
        assert_eq!(tracker.state(), ActionState::Idle);
    }

    #[test]
    fn test_begin_while_pending_is_rejected() {
        let mut tracker = ActionTracker::new("Content generation");
        let token = tracker.begin().unwrap();

        let err = tracker.begin().unwrap_err();
        assert_eq!(
            err,
            ValidationError::AlreadyPending {
                action: "Content generation"
            }
        );
        // Still pending on the original request
        assert_eq!(tracker.state(), ActionState::Pending(token));
    }

    #[test]
    fn test_stale_token_is_discarded() {
        let mut tracker = ActionTracker::new("Publish");
        let first = tracker.begin().unwrap();
        tracker.abandon();
        let second = tracker.begin().unwrap();
        assert_ne!(first, second);

        assert!(!tracker.finish(first));
        assert!(tracker.is_pending());
        assert!(tracker.finish(second));
    }

    #[test]
    fn test_finish_when_idle_is_ignored() {
        let mut tracker = ActionTracker::new("Refresh");
        let token = tracker.begin().unwrap();
        assert!(tracker.finish(token));
        assert!(!tracker.finish(token));
    }
}
