//! Per-grid layout mode notifications.
//!
//! Each grid owns one [`ModeChannel`]. Cells receive a clone through their
//! column and subscribe during render; the returned [`Subscription`] is a
//! scoped guard, so a dropped or destroyed cell never leaves a listener
//! behind.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

use log::trace;

use crate::mode::LayoutMode;

type Callback = Arc<dyn Fn(LayoutMode) + Send + Sync>;

struct Inner {
    name: String,
    current: RwLock<LayoutMode>,
    subscribers: RwLock<Vec<(u64, Callback)>>,
    next_id: AtomicU64,
    closed: AtomicBool,
}

impl Inner {
    fn remove(&self, id: u64) -> bool {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        before != subscribers.len()
    }
}

/// Named layout mode stream for one grid instance.
///
/// Delivery is synchronous and follows subscription order. Callbacks run
/// without any lock held, so a callback may itself subscribe or unsubscribe.
#[derive(Clone)]
pub struct ModeChannel {
    inner: Arc<Inner>,
}

impl ModeChannel {
    pub fn new(name: impl Into<String>, initial: LayoutMode) -> Self {
        Self {
            inner: Arc::new(Inner {
                name: name.into(),
                current: RwLock::new(initial),
                subscribers: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(0),
                closed: AtomicBool::new(false),
            }),
        }
    }

    /// Channel name for a grid instance id.
    pub fn name_for(instance: &str) -> String {
        format!("ResponsiveGrid-{instance}:responsiveBreak")
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Last published mode (or the initial one).
    pub fn current(&self) -> LayoutMode {
        *self
            .inner
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register a callback for every subsequent publish.
    ///
    /// On a closed channel the returned subscription is inert.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(LayoutMode) + Send + Sync + 'static,
    {
        if self.is_closed() {
            trace!("{}: subscribe on closed channel ignored", self.name());
            return Subscription {
                id: 0,
                channel: None,
            };
        }

        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((id, Arc::new(callback)));
        trace!("{}: subscriber {id} added", self.name());

        Subscription {
            id,
            channel: Some(Arc::downgrade(&self.inner)),
        }
    }

    /// Deliver `mode` to every subscriber. Returns how many were reached.
    pub fn publish(&self, mode: LayoutMode) -> usize {
        if self.is_closed() {
            return 0;
        }

        *self
            .inner
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = mode;

        let snapshot: Vec<(u64, Callback)> = self
            .inner
            .subscribers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();

        let mut delivered = 0;
        for (id, callback) in snapshot {
            // Skip subscribers removed by an earlier callback in this round.
            if !self.has_subscriber(id) {
                continue;
            }
            callback(mode);
            delivered += 1;
        }

        trace!("{}: published {mode} to {delivered} subscribers", self.name());
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .subscribers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Drop every subscriber and refuse new ones.
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::SeqCst);
        self.inner
            .subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    fn has_subscriber(&self, id: u64) -> bool {
        self.inner
            .subscribers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .any(|(sid, _)| *sid == id)
    }
}

impl fmt::Debug for ModeChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeChannel")
            .field("name", &self.name())
            .field("current", &self.current())
            .field("subscribers", &self.subscriber_count())
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Scoped registration on a [`ModeChannel`].
///
/// Unsubscribes on drop. Holds only a weak reference, so an outstanding
/// subscription never keeps a torn-down grid's channel alive.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    channel: Option<Weak<Inner>>,
}

impl Subscription {
    /// Stop receiving notifications. Safe to call any number of times.
    pub fn unsubscribe(&mut self) {
        if let Some(inner) = self.channel.take().and_then(|weak| weak.upgrade())
            && inner.remove(self.id)
        {
            trace!("{}: subscriber {} removed", inner.name, self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.channel
            .as_ref()
            .and_then(Weak::upgrade)
            .is_some_and(|inner| {
                inner
                    .subscribers
                    .read()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .iter()
                    .any(|(sid, _)| *sid == self.id)
            })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<LayoutMode>>>, impl Fn(LayoutMode) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |mode| sink.lock().unwrap().push(mode))
    }

    #[test]
    fn test_publish_reaches_subscribers_in_order() {
        let channel = ModeChannel::new("test", LayoutMode::Expanded);
        let order = Arc::new(Mutex::new(Vec::new()));

        let subs: Vec<Subscription> = (0..3)
            .map(|i| {
                let order = Arc::clone(&order);
                channel.subscribe(move |_| order.lock().unwrap().push(i))
            })
            .collect();

        assert_eq!(channel.publish(LayoutMode::Condensed), 3);
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
        assert_eq!(channel.current(), LayoutMode::Condensed);
        drop(subs);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let channel = ModeChannel::new("test", LayoutMode::Expanded);
        let (seen, callback) = recorder();
        let sub = channel.subscribe(callback);
        assert_eq!(channel.subscriber_count(), 1);

        drop(sub);
        assert_eq!(channel.subscriber_count(), 0);
        assert_eq!(channel.publish(LayoutMode::Condensed), 0);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let channel = ModeChannel::new("test", LayoutMode::Expanded);
        let (_seen, callback) = recorder();
        let (_other_seen, other) = recorder();
        let mut sub = channel.subscribe(callback);
        let _keep = channel.subscribe(other);

        sub.unsubscribe();
        sub.unsubscribe();
        assert!(!sub.is_active());
        assert_eq!(channel.subscriber_count(), 1);
    }

    #[test]
    fn test_close_drops_subscribers_and_ignores_new_ones() {
        let channel = ModeChannel::new("test", LayoutMode::Expanded);
        let (seen, callback) = recorder();
        let sub = channel.subscribe(callback);

        channel.close();
        assert!(!sub.is_active());
        assert_eq!(channel.publish(LayoutMode::Condensed), 0);

        let (_late_seen, late) = recorder();
        let late_sub = channel.subscribe(late);
        assert!(!late_sub.is_active());
        assert_eq!(channel.subscriber_count(), 0);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_subscription_outlives_channel() {
        let channel = ModeChannel::new("test", LayoutMode::Expanded);
        let (_seen, callback) = recorder();
        let mut sub = channel.subscribe(callback);
        drop(channel);
        assert!(!sub.is_active());
        sub.unsubscribe();
    }

    #[test]
    fn test_callback_may_unsubscribe_later_subscriber() {
        let channel = ModeChannel::new("test", LayoutMode::Expanded);
        let victim: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let slot = Arc::clone(&victim);
        let _first = channel.subscribe(move |_| {
            if let Some(mut sub) = slot.lock().unwrap().take() {
                sub.unsubscribe();
            }
        });
        let (seen, callback) = recorder();
        *victim.lock().unwrap() = Some(channel.subscribe(callback));

        assert_eq!(channel.publish(LayoutMode::Condensed), 1);
        assert!(seen.lock().unwrap().is_empty());
    }
}
