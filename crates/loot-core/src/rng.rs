//! Seeded randomness for shared world services.
//!
//! Behaviors themselves are deterministic; the only random decision in the
//! framework is which inventory slot a thief empties.  Routing that through
//! one seeded `SmallRng` keeps a whole run reproducible from `SimConfig::seed`.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand::seq::SliceRandom;

/// Seeded RNG owned by a world service (e.g. the inventory).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform pick from `slice`; `None` when it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}
