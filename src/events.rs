use tokio::sync::broadcast::{self, Receiver, Sender};

/// Signal that a new place was written. Carries nothing; listeners re-read
/// whatever they display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceAdded;

#[derive(Clone, Debug)]
pub struct PlaceEvents {
    tx: Sender<PlaceAdded>,
}

impl PlaceEvents {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> Receiver<PlaceAdded> {
        self.tx.subscribe()
    }

    pub fn publish(&self) {
        // Nobody listening is fine.
        match self.tx.send(PlaceAdded) {
            Ok(listeners) => tracing::debug!(listeners, "place added broadcast"),
            Err(_) => tracing::debug!("place added broadcast with no listeners"),
        }
    }
}

impl Default for PlaceEvents {
    fn default() -> Self {
        Self::new(16)
    }
}

#[tokio::test]
async fn every_listener_sees_place_added() {
    let events = PlaceEvents::default();
    let mut first = events.subscribe();
    let mut second = events.subscribe();

    events.publish();

    assert_eq!(first.recv().await.unwrap(), PlaceAdded);
    assert_eq!(second.recv().await.unwrap(), PlaceAdded);
}

#[test]
fn publish_without_listeners_does_not_panic() {
    PlaceEvents::default().publish();
}
