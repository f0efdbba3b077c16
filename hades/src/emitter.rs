use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::HadesEvent;

/// A subscriber callback for controller notifications.
pub type Listener = Arc<dyn Fn(&HadesEvent) + Send + Sync>;

/// Handle returned by [`crate::Hades::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn to_raw(self) -> u64 {
        self.0
    }
}

/// Subscriber list owned by a controller.
///
/// Listeners are notified in subscription order.
#[derive(Clone, Default)]
pub(crate) struct EventEmitter {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl EventEmitter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn clear(&mut self) {
        self.listeners.clear();
    }

    pub(crate) fn emit(&self, event: &HadesEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }
}

impl core::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
