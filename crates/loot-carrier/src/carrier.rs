//! The `CarrierCapability`.

use loot_core::{CarriedItem, EntityId, Vec3};
use loot_world::LooseItem;

use crate::{CarrierObserver, Companion};

/// Tunables for a [`CarrierCapability`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarrierConfig {
    /// Resting offset of the companion from the owner.
    pub offset:        Vec3,
    /// Peak vertical displacement of the bob.
    pub bob_amplitude: f32,
    /// Angular speed of the bob, radians per second.
    pub bob_speed:     f32,
    /// Height a dropped item comes to rest at.
    pub ground_y:      f32,
}

impl Default for CarrierConfig {
    fn default() -> Self {
        Self {
            offset:        Vec3::new(0.0, 1.5, 0.0),
            bob_amplitude: 0.1,
            bob_speed:     3.0,
            ground_y:      0.0,
        }
    }
}

/// Exclusive slot for at most one carried item, plus its visual companion.
///
/// # Invariants
///
/// - `carried.is_some() == companion.is_some()`.
/// - An item is never replaced silently: `attach` on a full carrier emits
///   exactly one drop notification for the old item, then exactly one attach
///   notification for the new one.
pub struct CarrierCapability {
    owner:          EntityId,
    config:         CarrierConfig,
    carried:        Option<CarriedItem>,
    companion:      Option<Companion>,
    bob_phase:      f32,
    owner_position: Vec3,
    observers:      Vec<Box<dyn CarrierObserver>>,
}

impl CarrierCapability {
    pub fn new(owner: EntityId, owner_position: Vec3, config: CarrierConfig) -> Self {
        Self {
            owner,
            config,
            carried: None,
            companion: None,
            bob_phase: 0.0,
            owner_position,
            observers: Vec::new(),
        }
    }

    /// Register a notification hook.
    pub fn subscribe(&mut self, observer: Box<dyn CarrierObserver>) {
        self.observers.push(observer);
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn owner(&self) -> EntityId {
        self.owner
    }

    #[inline]
    pub fn is_carrying(&self) -> bool {
        self.carried.is_some()
    }

    pub fn carried(&self) -> Option<&CarriedItem> {
        self.carried.as_ref()
    }

    pub fn companion(&self) -> Option<&Companion> {
        self.companion.as_ref()
    }

    pub fn bob_phase(&self) -> f32 {
        self.bob_phase
    }

    pub fn config(&self) -> &CarrierConfig {
        &self.config
    }

    // ── Ownership transfer ────────────────────────────────────────────────

    /// Take ownership of `item`.
    ///
    /// If something is already carried it is dropped first (with its
    /// notification) and returned so the caller can hand it to the world.
    #[must_use = "a displaced item must be placed in the world or it is lost"]
    pub fn attach(&mut self, item: CarriedItem) -> Option<LooseItem> {
        let displaced = self.drop_item();

        self.companion = Some(Companion::spawn(self.owner_position, self.config.offset));
        self.bob_phase = 0.0;
        self.carried = Some(item);
        tracing::debug!(entity = %self.owner, item = ?self.carried, "item attached");

        if let Some(item) = &self.carried {
            for observer in self.observers.iter_mut() {
                observer.on_attached(self.owner, item);
            }
        }
        displaced
    }

    /// Release the carried item to the ground below the owner.
    ///
    /// No-op (returns `None`) when empty.  Otherwise the companion is
    /// destroyed, the item comes to rest at ground level under the owner's
    /// horizontal position with its pickup armed, and the dropped
    /// notification fires.  After return `is_carrying()` is `false`.
    pub fn drop_item(&mut self) -> Option<LooseItem> {
        let item = self.carried.take()?;
        self.companion = None;
        self.bob_phase = 0.0;

        let rest = self.owner_position.with_y(self.config.ground_y);
        tracing::debug!(entity = %self.owner, %item, at = %rest, "item dropped");
        for observer in self.observers.iter_mut() {
            observer.on_dropped(self.owner, &item, rest);
        }
        Some(LooseItem::armed(item, rest))
    }

    // ── Per-tick animation ────────────────────────────────────────────────

    /// Follow the owner and advance the cosmetic bob.
    pub fn update(&mut self, owner_position: Vec3, dt_secs: f32) {
        self.owner_position = owner_position;
        let Some(companion) = self.companion.as_mut() else {
            return;
        };
        self.bob_phase += dt_secs.max(0.0);
        let bob = self.config.bob_amplitude * (self.bob_phase * self.config.bob_speed).sin();
        companion.offset = self.config.offset + Vec3::new(0.0, bob, 0.0);
        companion.position = owner_position + companion.offset;
    }
}
