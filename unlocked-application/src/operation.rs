use std::sync::Arc;
use tokio::sync::watch;

/// Lifecycle of a long running user operation, e.g. saving a city.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OperationState {
    #[default]
    Idle,
    InProgress,
    Succeeded,
    Failed(String),
}

impl OperationState {
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed(_))
    }
}

/// Observable [`OperationState`].
#[derive(Clone)]
pub struct OperationStatus {
    tx: Arc<watch::Sender<OperationState>>,
}

impl Default for OperationStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationStatus {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(OperationState::Idle);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> OperationState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<OperationState> {
        self.tx.subscribe()
    }

    /// Acknowledge the outcome of the last operation.
    pub fn reset(&self) {
        self.set(OperationState::Idle);
    }

    pub(crate) fn set(&self, state: OperationState) {
        self.tx.send_replace(state);
    }

    /// Track the outcome of `f`.
    pub(crate) fn track<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: ToString,
    {
        self.set(OperationState::InProgress);
        let result = f();
        self.set(match &result {
            Ok(_) => OperationState::Succeeded,
            Err(err) => OperationState::Failed(err.to_string()),
        });
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_success() {
        let status = OperationStatus::new();
        assert_eq!(OperationState::Idle, status.current());
        let mut rx = status.subscribe();
        let res: Result<_, String> = status.track(|| {
            assert_eq!(OperationState::InProgress, status.current());
            Ok(42)
        });
        assert_eq!(Ok(42), res);
        assert!(rx.has_changed().unwrap());
        assert_eq!(OperationState::Succeeded, *rx.borrow_and_update());
        status.reset();
        assert_eq!(OperationState::Idle, status.current());
    }

    #[test]
    fn track_failure() {
        let status = OperationStatus::new();
        let res: Result<(), _> = status.track(|| Err("disk full"));
        assert!(res.is_err());
        let state = status.current();
        assert!(state.is_finished());
        assert_eq!(OperationState::Failed("disk full".into()), state);
    }
}
