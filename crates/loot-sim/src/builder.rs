//! Fluent builder for constructing a [`Sim`].

use std::collections::HashSet;

use loot_core::SimConfig;
use loot_world::{EntityKind, InventoryService, World};

use crate::{Sim, SimError, SimResult, ThiefHost};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total ticks, seed, tick duration
/// - [`World`]: with every host's thief entity already spawned
///
/// # Optional inputs
///
/// | Method           | Default                                   |
/// |------------------|-------------------------------------------|
/// | `.host(h)`       | No hosts (the world just sits there)      |
/// | `.inventory(i)`  | None: character steals fail to initialize |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, world)
///     .host(host)
///     .inventory(Box::new(BuildInventory::new(8, seed)))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    world:     World,
    hosts:     Vec<ThiefHost>,
    inventory: Option<Box<dyn InventoryService>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, world: World) -> Self {
        Self {
            config,
            world,
            hosts:     Vec::new(),
            inventory: None,
        }
    }

    /// Add a host.  Hosts tick in the order they are added.
    pub fn host(mut self, host: ThiefHost) -> Self {
        self.hosts.push(host);
        self
    }

    /// The character inventory service lent to stealing behaviors.
    pub fn inventory(mut self, inventory: Box<dyn InventoryService>) -> Self {
        self.inventory = Some(inventory);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let mut seen = HashSet::new();
        for host in &self.hosts {
            host.config().validate()?;
            let handle = host.entity();
            match self.world.kind_of(handle) {
                Some(EntityKind::Thief) => {}
                actual => return Err(SimError::NotAThief { handle, actual }),
            }
            if !seen.insert(handle.id) {
                return Err(SimError::DuplicateHost(handle.id));
            }
        }

        Ok(Sim {
            clock:     self.config.clock(),
            config:    self.config,
            world:     self.world,
            hosts:     self.hosts,
            inventory: self.inventory,
        })
    }
}
