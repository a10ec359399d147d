//! `World`: Structure-of-Arrays storage for every entity the thief core can
//! see.
//!
//! Every per-entity `Vec` has exactly `len()` elements; `EntityId` is the
//! index into all of them.  Slots are never reused: despawning marks the slot
//! dead and bumps its generation, which invalidates outstanding handles.
//!
//! Kind-specific state (deposit units, worker possession) lives in the same
//! arrays with inert defaults for entities of other kinds.

use std::collections::HashMap;

use loot_core::{CarriedItem, EntityId, ItemId, Vec3};

use crate::{EntityHandle, EntityKind, LooseItem, WorldError, WorldResult};

/// Possession and autonomy state of a worker unit.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkerState {
    /// The worker runs its own behavior.
    pub autonomous:   bool,
    /// The worker is simulated by its own physics body.
    pub physics:      bool,
    /// The entity carrying this worker, if any.
    pub parent:       Option<EntityId>,
    /// Offset from the parent's position while carried.
    pub carry_offset: Vec3,
}

impl Default for WorkerState {
    fn default() -> Self {
        Self {
            autonomous:   true,
            physics:      true,
            parent:       None,
            carry_offset: Vec3::ZERO,
        }
    }
}

impl WorkerState {
    #[inline]
    pub fn is_possessed(&self) -> bool {
        self.parent.is_some()
    }
}

/// Entity storage plus the world-side services behaviors consume.
pub struct World {
    kind:       Vec<EntityKind>,
    tag:        Vec<Option<String>>,
    position:   Vec<Vec3>,
    alive:      Vec<bool>,
    generation: Vec<u32>,

    // ── Kind-specific state ───────────────────────────────────────────────
    deposit_units: Vec<u32>,
    workers:       Vec<WorkerState>,

    /// Shared reference registry: well-known name → entity.
    references: HashMap<String, EntityHandle>,

    /// World-owned loose items, indexed by `ItemId`.  `None` once claimed;
    /// slots are append-only like entity slots.
    items: Vec<Option<LooseItem>>,

    /// Height of the ground plane.
    ground_y: f32,
}

impl Default for World {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl World {
    pub fn new(ground_y: f32) -> Self {
        Self {
            kind:          Vec::new(),
            tag:           Vec::new(),
            position:      Vec::new(),
            alive:         Vec::new(),
            generation:    Vec::new(),
            deposit_units: Vec::new(),
            workers:       Vec::new(),
            references:    HashMap::new(),
            items:         Vec::new(),
            ground_y,
        }
    }

    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    /// Number of entity slots ever allocated (live or dead).
    #[inline]
    pub fn len(&self) -> usize {
        self.kind.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
    }

    // ── Spawning ──────────────────────────────────────────────────────────

    fn spawn(&mut self, kind: EntityKind, position: Vec3, tag: Option<String>) -> EntityHandle {
        let id = EntityId(self.kind.len() as u32);
        self.kind.push(kind);
        self.tag.push(tag);
        self.position.push(position);
        self.alive.push(true);
        self.generation.push(0);
        self.deposit_units.push(0);
        self.workers.push(WorkerState::default());
        EntityHandle::new(id, 0)
    }

    pub fn spawn_thief(&mut self, position: Vec3) -> EntityHandle {
        self.spawn(EntityKind::Thief, position, None)
    }

    /// Spawn a character carrying `tag` (used by the same-tag fallback scan).
    pub fn spawn_character(&mut self, position: Vec3, tag: impl Into<String>) -> EntityHandle {
        self.spawn(EntityKind::Character, position, Some(tag.into()))
    }

    pub fn spawn_deposit(&mut self, position: Vec3, units: u32) -> EntityHandle {
        let handle = self.spawn(EntityKind::Deposit, position, None);
        self.deposit_units[handle.id.index()] = units;
        handle
    }

    pub fn spawn_worker(&mut self, position: Vec3) -> EntityHandle {
        self.spawn(EntityKind::Worker, position, None)
    }

    /// Remove an entity.  Workers it was carrying are released first.
    pub fn despawn(&mut self, handle: EntityHandle) -> WorldResult<()> {
        let i = self.live_index(handle)?;
        let carried: Vec<EntityHandle> = self
            .workers
            .iter()
            .enumerate()
            .filter(|(_, w)| w.parent == Some(handle.id))
            .map(|(w, _)| self.handle_at(w))
            .collect();
        for worker in carried {
            self.release_worker(worker)?;
        }
        self.alive[i] = false;
        self.generation[i] = self.generation[i].wrapping_add(1);
        self.references.retain(|_, h| *h != handle);
        Ok(())
    }

    // ── Resolution ────────────────────────────────────────────────────────

    #[inline]
    fn handle_at(&self, index: usize) -> EntityHandle {
        EntityHandle::new(EntityId(index as u32), self.generation[index])
    }

    fn live_index(&self, handle: EntityHandle) -> WorldResult<usize> {
        let i = handle.id.index();
        if i < self.kind.len() && self.alive[i] && self.generation[i] == handle.generation {
            Ok(i)
        } else {
            Err(WorldError::StaleHandle(handle))
        }
    }

    fn live_index_of_kind(&self, handle: EntityHandle, expected: EntityKind) -> WorldResult<usize> {
        let i = self.live_index(handle)?;
        let actual = self.kind[i];
        if actual != expected {
            return Err(WorldError::WrongKind { handle, expected, actual });
        }
        Ok(i)
    }

    /// `true` if `handle` still refers to a live entity.
    #[inline]
    pub fn is_alive(&self, handle: EntityHandle) -> bool {
        self.live_index(handle).is_ok()
    }

    /// Current handle for the entity in slot `id`, if it is alive.
    pub fn handle_of(&self, id: EntityId) -> Option<EntityHandle> {
        let i = id.index();
        (i < self.kind.len() && self.alive[i]).then(|| self.handle_at(i))
    }

    pub fn kind_of(&self, handle: EntityHandle) -> Option<EntityKind> {
        self.live_index(handle).ok().map(|i| self.kind[i])
    }

    /// Position of a live entity; `None` for stale handles.
    pub fn position_of(&self, handle: EntityHandle) -> Option<Vec3> {
        self.live_index(handle).ok().map(|i| self.position[i])
    }

    pub fn set_position(&mut self, handle: EntityHandle, position: Vec3) -> WorldResult<()> {
        let i = self.live_index(handle)?;
        self.position[i] = position;
        Ok(())
    }

    // ── Discovery ─────────────────────────────────────────────────────────

    /// All live entities of `kind` with their positions, in ascending id
    /// order (the scan order behaviors break distance ties with).
    ///
    /// Possessed workers are skipped: they are cargo, not candidates.
    pub fn live_of_kind(&self, kind: EntityKind) -> impl Iterator<Item = (EntityHandle, Vec3)> + '_ {
        (0..self.kind.len())
            .filter(move |&i| self.alive[i] && self.kind[i] == kind)
            .filter(move |&i| !(kind == EntityKind::Worker && self.workers[i].is_possessed()))
            .map(move |i| (self.handle_at(i), self.position[i]))
    }

    /// First live entity carrying `tag`, in scan order.
    pub fn find_by_tag(&self, tag: &str) -> Option<EntityHandle> {
        (0..self.kind.len())
            .find(|&i| self.alive[i] && self.tag[i].as_deref() == Some(tag))
            .map(|i| self.handle_at(i))
    }

    // ── Reference registry ────────────────────────────────────────────────

    /// Publish `handle` under a well-known name (e.g. `"player"`).
    pub fn register_reference(&mut self, key: impl Into<String>, handle: EntityHandle) {
        self.references.insert(key.into(), handle);
    }

    /// Look up a published reference.  Stale entries resolve to `None`.
    pub fn reference(&self, key: &str) -> Option<EntityHandle> {
        self.references
            .get(key)
            .copied()
            .filter(|&h| self.is_alive(h))
    }

    // ── Deposits ──────────────────────────────────────────────────────────

    pub fn deposit_units(&self, deposit: EntityHandle) -> WorldResult<u32> {
        let i = self.live_index_of_kind(deposit, EntityKind::Deposit)?;
        Ok(self.deposit_units[i])
    }

    /// Remove one unit.  `false` for an empty deposit or a stale handle.
    pub fn try_remove_unit(&mut self, deposit: EntityHandle) -> bool {
        match self.live_index_of_kind(deposit, EntityKind::Deposit) {
            Ok(i) if self.deposit_units[i] > 0 => {
                self.deposit_units[i] -= 1;
                true
            }
            _ => false,
        }
    }

    // ── Workers ───────────────────────────────────────────────────────────

    pub fn worker(&self, worker: EntityHandle) -> WorldResult<&WorkerState> {
        let i = self.live_index_of_kind(worker, EntityKind::Worker)?;
        Ok(&self.workers[i])
    }

    /// Disable the worker's autonomy and physics and attach it to `parent`
    /// at `offset`.
    pub fn possess_worker(&mut self, worker: EntityHandle, parent: EntityId, offset: Vec3) -> WorldResult<()> {
        let i = self.live_index_of_kind(worker, EntityKind::Worker)?;
        if self.workers[i].is_possessed() {
            return Err(WorldError::AlreadyPossessed(worker));
        }
        self.workers[i] = WorkerState {
            autonomous:   false,
            physics:      false,
            parent:       Some(parent),
            carry_offset: offset,
        };
        if let Some(p) = self.position.get(parent.index()).copied() {
            self.position[i] = p + offset;
        }
        Ok(())
    }

    /// Return a possessed worker to the world, standing on the ground below
    /// where it was carried.
    ///
    /// Returns `Ok(false)` if the worker was not possessed.
    pub fn release_worker(&mut self, worker: EntityHandle) -> WorldResult<bool> {
        let i = self.live_index_of_kind(worker, EntityKind::Worker)?;
        if !self.workers[i].is_possessed() {
            return Ok(false);
        }
        self.workers[i] = WorkerState::default();
        self.position[i] = self.position[i].with_y(self.ground_y);
        Ok(true)
    }

    /// Move every possessed worker to its parent's position plus offset.
    /// Workers whose parent is gone are released where they are.
    pub fn sync_possessed(&mut self) {
        for i in 0..self.workers.len() {
            let Some(parent) = self.workers[i].parent else { continue };
            let p = parent.index();
            if p < self.alive.len() && self.alive[p] {
                self.position[i] = self.position[p] + self.workers[i].carry_offset;
            } else {
                self.workers[i] = WorkerState::default();
                self.position[i] = self.position[i].with_y(self.ground_y);
            }
        }
    }

    // ── Loose items ───────────────────────────────────────────────────────

    /// Take ownership of a dropped item.
    ///
    /// Claimed slots are never reused, so an `ItemId` held after its item was
    /// picked up keeps failing with `NoSuchItem` instead of naming a newer
    /// drop.
    pub fn place_item(&mut self, loose: LooseItem) -> ItemId {
        self.items.push(Some(loose));
        ItemId((self.items.len() - 1) as u32)
    }

    pub fn item(&self, id: ItemId) -> Option<&LooseItem> {
        self.items.get(id.index()).and_then(Option::as_ref)
    }

    /// Loose items within `radius` of `position`, in id order.
    pub fn items_near(&self, position: Vec3, radius: f32) -> impl Iterator<Item = (ItemId, &LooseItem)> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|l| (ItemId(i as u32), l)))
            .filter(move |(_, l)| l.position.distance(position) <= radius)
    }

    /// Claim a loose item.  Fails if it does not exist; returns `Ok(None)`
    /// if its pickup is disarmed.
    pub fn pickup_item(&mut self, id: ItemId) -> WorldResult<Option<CarriedItem>> {
        let armed = match self.items.get(id.index()) {
            Some(Some(loose)) => loose.pickup_armed,
            _ => return Err(WorldError::NoSuchItem(id)),
        };
        if !armed {
            return Ok(None);
        }
        Ok(self.items[id.index()].take().map(|l| l.item))
    }
}
