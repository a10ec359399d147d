//! Attach/drop notifications.

use std::sync::{Arc, Mutex};

use loot_core::{CarriedItem, EntityId, Vec3};

/// Subscriber to a carrier's attach/drop notifications.
///
/// Both hooks default to no-ops.  They run synchronously inside `attach` /
/// `drop_item`, after the carrier's own state is consistent, so an observer
/// never sees a half-attached item.
pub trait CarrierObserver {
    fn on_attached(&mut self, _owner: EntityId, _item: &CarriedItem) {}

    /// `at` is the world resting position of the dropped item.
    fn on_dropped(&mut self, _owner: EntityId, _item: &CarriedItem, _at: Vec3) {}
}

/// A recorded carrier notification.
#[derive(Clone, Debug, PartialEq)]
pub enum CarrierEvent {
    Attached { owner: EntityId, item: CarriedItem },
    Dropped { owner: EntityId, item: CarriedItem, at: Vec3 },
}

/// Observer that appends every notification to a shared log.
///
/// Clone it before subscribing to keep a read handle.
#[derive(Clone, Default)]
pub struct CarrierEventLog(Arc<Mutex<Vec<CarrierEvent>>>);

impl CarrierEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far.
    pub fn events(&self) -> Vec<CarrierEvent> {
        match self.0.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn push(&self, event: CarrierEvent) {
        match self.0.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

impl CarrierObserver for CarrierEventLog {
    fn on_attached(&mut self, owner: EntityId, item: &CarriedItem) {
        self.push(CarrierEvent::Attached { owner, item: item.clone() });
    }

    fn on_dropped(&mut self, owner: EntityId, item: &CarriedItem, at: Vec3) {
        self.push(CarrierEvent::Dropped { owner, item: item.clone(), at });
    }
}
