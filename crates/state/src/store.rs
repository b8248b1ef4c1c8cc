use cubeview_common::CubeState;
use tokio::sync::watch;

/// Holds the current cube state and broadcasts every replacement.
///
/// Not `Clone`: whoever owns the store is its only writer. Readers get a
/// [`CubeStream`] from [`CubeStore::subscribe`].
#[derive(Debug)]
pub struct CubeStore {
    tx: watch::Sender<CubeState>,
}

impl Default for CubeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeStore {
    /// A store holding the solved cube.
    pub fn new() -> Self {
        Self::with_state(CubeState::solved())
    }

    pub fn with_state(state: CubeState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx }
    }

    /// Replace the current state and notify subscribers.
    ///
    /// Succeeds whether or not anyone is subscribed.
    pub fn set(&self, state: CubeState) {
        tracing::trace!(
            facelets = state.len(),
            subscribers = self.tx.receiver_count(),
            "publishing cube state"
        );
        self.tx.send_replace(state);
    }

    /// Put the solved cube back; no service round-trip.
    pub fn reset(&self) {
        self.set(CubeState::solved());
    }

    pub fn current(&self) -> CubeState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> CubeStream {
        CubeStream {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Read side of a [`CubeStore`].
#[derive(Debug, Clone)]
pub struct CubeStream {
    rx: watch::Receiver<CubeState>,
}

impl CubeStream {
    /// Latest published state, without waiting.
    pub fn current(&self) -> CubeState {
        self.rx.borrow().clone()
    }

    /// Wait for the next replacement and return it.
    ///
    /// Returns `None` once the store has been dropped.
    pub async fn changed(&mut self) -> Option<CubeState> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// True if a value was published since this stream last looked.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeview_common::Face;

    fn scrambled() -> CubeState {
        let mut facelets = CubeState::solved().into_facelets();
        facelets.swap(0, 53);
        CubeState::from_facelets(facelets)
    }

    #[test]
    fn store_starts_solved() {
        let store = CubeStore::new();
        assert!(store.current().is_solved());
    }

    #[test]
    fn set_without_subscribers_still_updates() {
        let store = CubeStore::new();
        store.set(scrambled());
        assert_eq!(store.current(), scrambled());
        store.reset();
        assert!(store.current().is_solved());
    }

    #[test]
    fn new_subscriber_sees_current_value() {
        let store = CubeStore::with_state(scrambled());
        let stream = store.subscribe();
        assert_eq!(stream.current(), scrambled());
        assert!(!stream.has_changed());
        assert_eq!(store.subscriber_count(), 1);
    }

    #[tokio::test]
    async fn every_subscriber_is_notified() {
        let store = CubeStore::new();
        let mut a = store.subscribe();
        let mut b = store.subscribe();

        store.set(scrambled());
        assert_eq!(a.changed().await, Some(scrambled()));
        assert_eq!(b.changed().await, Some(scrambled()));
    }

    #[tokio::test]
    async fn slow_subscriber_gets_latest_value() {
        let store = CubeStore::new();
        let mut stream = store.subscribe();

        store.set(scrambled());
        store.set(CubeState::from_facelets(vec![1; 9]));
        let latest = stream.changed().await.unwrap();
        assert_eq!(latest.face(Face::Up), Some(&[1u8; 9][..]));
        assert!(!stream.has_changed());
    }

    #[tokio::test]
    async fn stream_ends_when_store_drops() {
        let store = CubeStore::new();
        let mut stream = store.subscribe();
        drop(store);
        assert_eq!(stream.changed().await, None);
    }

    #[tokio::test]
    async fn subscriber_task_receives_updates() {
        let store = CubeStore::new();
        let mut stream = store.subscribe();
        let handle = tokio::spawn(async move {
            let mut seen = 0;
            while let Some(state) = stream.changed().await {
                seen += 1;
                if state.is_solved() {
                    break;
                }
            }
            seen
        });

        store.set(scrambled());
        tokio::task::yield_now().await;
        store.reset();
        let seen = handle.await.unwrap();
        assert!((1..=2).contains(&seen));
    }
}
