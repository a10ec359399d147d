//! The build inventory a character-steal draws from.

use loot_core::{CarriedItem, SimRng};

/// External inventory capability.
///
/// The thief core only ever removes items through this trait; how slots are
/// filled (drag-and-drop, crafting, persistence) is somebody else's concern.
pub trait InventoryService {
    /// Remove the item from one occupied slot chosen uniformly at random.
    ///
    /// Returns `None` if every slot is empty.
    fn remove_random_occupied_slot(&mut self) -> Option<CarriedItem>;

    /// Number of occupied slots.
    fn occupied(&self) -> usize;
}

/// Fixed-size slot inventory with its own seeded RNG.
pub struct BuildInventory {
    slots: Vec<Option<CarriedItem>>,
    rng:   SimRng,
}

impl BuildInventory {
    /// An inventory of `capacity` empty slots.
    pub fn new(capacity: usize, seed: u64) -> Self {
        Self {
            slots: vec![None; capacity],
            rng:   SimRng::new(seed),
        }
    }

    /// Put `item` into the first empty slot.  Hands the item back if full.
    pub fn insert(&mut self, item: CarriedItem) -> Result<usize, CarriedItem> {
        match self.slots.iter().position(Option::is_none) {
            Some(i) => {
                self.slots[i] = Some(item);
                Ok(i)
            }
            None => Err(item),
        }
    }

    pub fn slot(&self, index: usize) -> Option<&CarriedItem> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl InventoryService for BuildInventory {
    fn remove_random_occupied_slot(&mut self) -> Option<CarriedItem> {
        let occupied: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_some())
            .map(|(i, _)| i)
            .collect();
        let &pick = self.rng.choose(&occupied)?;
        self.slots[pick].take()
    }

    fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}
