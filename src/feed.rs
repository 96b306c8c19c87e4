use async_channel::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::entities::LocationSample;

pub type DynLocationFeed = Arc<dyn LocationFeed + Send + Sync>;

pub trait LocationFeed {
    fn subscribe(&self) -> Subscription;
}

/// A live subscription to position updates. Dropping it releases the
/// underlying queue; the feed stops delivering to it on the next publish.
#[derive(Debug)]
pub struct Subscription {
    receiver: Receiver<LocationSample>,
}

impl Subscription {
    pub fn new(receiver: Receiver<LocationSample>) -> Self {
        Self { receiver }
    }

    /// Next sample, or `None` once the feed has gone away.
    pub async fn recv(&self) -> Option<LocationSample> {
        self.receiver.recv().await.ok()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.receiver.close();
        tracing::debug!("location subscription released");
    }
}

/// In-process location feed. Whatever owns the platform location source
/// pushes samples in with `publish`.
#[derive(Debug, Default)]
pub struct ChannelFeed {
    subscribers: Mutex<Vec<Sender<LocationSample>>>,
}

impl ChannelFeed {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip(self))]
    pub fn publish(&self, sample: LocationSample) {
        let mut subscribers = match self.subscribers.lock() {
            Ok(subscribers) => subscribers,
            Err(poisoned) => poisoned.into_inner(),
        };

        subscribers.retain(|tx| tx.try_send(sample).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = match self.subscribers.lock() {
            Ok(subscribers) => subscribers,
            Err(poisoned) => poisoned.into_inner(),
        };

        subscribers.retain(|tx| !tx.is_closed());
        subscribers.len()
    }
}

impl LocationFeed for ChannelFeed {
    fn subscribe(&self) -> Subscription {
        let (tx, rx) = async_channel::unbounded();

        match self.subscribers.lock() {
            Ok(mut subscribers) => subscribers.push(tx),
            Err(poisoned) => poisoned.into_inner().push(tx),
        }

        Subscription::new(rx)
    }
}

#[tokio::test]
async fn subscriber_receives_published_samples_in_order() {
    use crate::entities::Coordinate;

    let feed = ChannelFeed::new();
    let subscription = feed.subscribe();

    feed.publish(LocationSample::now(Coordinate::new(1.0, 2.0)));
    feed.publish(LocationSample::now(Coordinate::new(3.0, 4.0)));

    let first = subscription.recv().await.unwrap();
    let second = subscription.recv().await.unwrap();

    assert_eq!(first.coordinate, Coordinate::new(1.0, 2.0));
    assert_eq!(second.coordinate, Coordinate::new(3.0, 4.0));
}

#[test]
fn dropped_subscription_is_pruned() {
    use crate::entities::Coordinate;

    let feed = ChannelFeed::new();
    let kept = feed.subscribe();
    let released = feed.subscribe();
    assert_eq!(feed.subscriber_count(), 2);

    drop(released);
    feed.publish(LocationSample::now(Coordinate::new(0.0, 0.0)));

    assert_eq!(feed.subscriber_count(), 1);
    drop(kept);
    assert_eq!(feed.subscriber_count(), 0);
}
