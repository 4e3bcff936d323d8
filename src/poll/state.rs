//! Per-source snapshot state and the receiving end consumers hold.

use crate::error::SdkError;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::Instant;

/// What a source publishes when its fetch fails.
#[derive(Debug, Clone)]
pub enum OnFailure<T> {
    /// Leave the last good value in place.
    KeepLast,
    /// Publish this value instead (an explicit empty state).
    Replace(T),
}

impl<T> Default for OnFailure<T> {
    fn default() -> Self {
        OnFailure::KeepLast
    }
}

/// Latest state of one data source.
#[derive(Debug)]
pub struct SourceState<T> {
    pub value: Option<Arc<T>>,
    /// Error from the most recent fetch, cleared by the next success.
    pub error: Option<Arc<SdkError>>,
    /// When `value` last came from a successful fetch.
    pub updated_at: Option<Instant>,
}

impl<T> Default for SourceState<T> {
    fn default() -> Self {
        Self {
            value: None,
            error: None,
            updated_at: None,
        }
    }
}

impl<T> Clone for SourceState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            error: self.error.clone(),
            updated_at: self.updated_at,
        }
    }
}

/// Coarse status for rendering a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing fetched yet.
    Loading,
    /// A value is available; `stale` when the latest fetch failed.
    Ready { stale: bool },
    /// The source has failed and never produced a value.
    Failed,
}

impl<T> SourceState<T> {
    pub fn load_state(&self) -> LoadState {
        match (&self.value, &self.error) {
            (Some(_), error) => LoadState::Ready {
                stale: error.is_some(),
            },
            (None, Some(_)) => LoadState::Failed,
            (None, None) => LoadState::Loading,
        }
    }
}

/// Receiving end of one source. Cheap to clone; every clone sees the same
/// state.
pub struct Feed<T> {
    rx: watch::Receiver<SourceState<T>>,
}

impl<T> Clone for Feed<T> {
    fn clone(&self) -> Self {
        Self {
            rx: self.rx.clone(),
        }
    }
}

impl<T> Feed<T> {
    pub(crate) fn new(rx: watch::Receiver<SourceState<T>>) -> Self {
        Self { rx }
    }

    /// Copy of the current state.
    pub fn state(&self) -> SourceState<T> {
        self.rx.borrow().clone()
    }

    /// Current value, if any fetch has produced one.
    pub fn value(&self) -> Option<Arc<T>> {
        self.rx.borrow().value.clone()
    }

    pub fn load_state(&self) -> LoadState {
        self.rx.borrow().load_state()
    }

    /// Wait for the next published state. Returns `false` once the scope is
    /// gone and nothing more will be published.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;

    fn failure() -> Arc<SdkError> {
        Arc::new(SdkError::Http(HttpError::Request {
            status: 503,
            body: String::new(),
        }))
    }

    #[test]
    fn test_load_state() {
        let mut state = SourceState::<u32>::default();
        assert_eq!(state.load_state(), LoadState::Loading);

        state.error = Some(failure());
        assert_eq!(state.load_state(), LoadState::Failed);

        state.value = Some(Arc::new(1));
        assert_eq!(state.load_state(), LoadState::Ready { stale: true });

        state.error = None;
        assert_eq!(state.load_state(), LoadState::Ready { stale: false });
    }

    #[test]
    fn test_feed_changed_waits_for_publish() {
        let (tx, rx) = watch::channel(SourceState::<u32>::default());
        let mut feed = Feed::new(rx);
        {
            let mut changed = tokio_test::task::spawn(feed.changed());
            tokio_test::assert_pending!(changed.poll());
            tx.send_modify(|s| s.value = Some(Arc::new(7)));
            assert!(changed.is_woken());
            tokio_test::assert_ready_eq!(changed.poll(), true);
        }
        assert_eq!(feed.value().as_deref(), Some(&7));

        drop(tx);
        let mut closed = tokio_test::task::spawn(feed.changed());
        tokio_test::assert_ready_eq!(closed.poll(), false);
    }
}
