//! Carried item values.
//!
//! A `CarriedItem` is an immutable value once created.  It is produced by an
//! external generator (or synthesized by a deposit steal) and then owned by
//! exactly one holder at a time: a carrier, a world-owned loose pickup, or an
//! inventory slot.  The type is deliberately not `Copy` so ownership moves
//! are explicit.

use std::fmt;

/// The two item families.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Neutral resource unit (what a deposit yields).
    #[default]
    Core,
    /// Combat item; the only kind for which `probability` is meaningful.
    Power,
}

/// Value tier, ordered least to most valuable.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Legendary];

    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common    => "common",
            Rarity::Uncommon  => "uncommon",
            Rarity::Rare      => "rare",
            Rarity::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discrete, rarity-tiered piece of loot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarriedItem {
    name:        String,
    kind:        ItemKind,
    rarity:      Rarity,
    power:       f32,
    probability: f32,
}

impl CarriedItem {
    /// A neutral-kind item.  `probability` is fixed at zero.
    pub fn core(name: impl Into<String>, rarity: Rarity, power: f32) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Core,
            rarity,
            power,
            probability: 0.0,
        }
    }

    /// A combat item.  `probability` is clamped to `[0, 1]`.
    pub fn power(name: impl Into<String>, rarity: Rarity, power: f32, probability: f32) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Power,
            rarity,
            power,
            probability: probability.clamp(0.0, 1.0),
        }
    }

    /// The zero-value unit synthesized when a deposit is robbed.
    pub fn resource_unit() -> Self {
        Self::core("resource unit", Rarity::Common, 0.0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn power_value(&self) -> f32 {
        self.power
    }

    /// Proc probability; always `0.0` for `ItemKind::Core`.
    pub fn probability(&self) -> f32 {
        match self.kind {
            ItemKind::Core  => 0.0,
            ItemKind::Power => self.probability,
        }
    }
}

impl fmt::Display for CarriedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.rarity)
    }
}
