//! Unit tests for loot-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EntityId, ItemId};

    #[test]
    fn from_index_checks_width() {
        assert_eq!(EntityId::from_index(42), Some(EntityId(42)));
        assert_eq!(EntityId(42).index(), 42);
        assert_eq!(ItemId::from_index(usize::MAX), None);
    }

    #[test]
    fn display_is_prefixed() {
        assert_eq!(EntityId(7).to_string(), "e7");
        assert_eq!(ItemId(3).to_string(), "item3");
    }
}

#[cfg(test)]
mod vec3 {
    use crate::Vec3;

    #[test]
    fn distance_is_euclidean() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 0.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn step_towards_does_not_overshoot() {
        let a = Vec3::ZERO;
        let b = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(a.step_towards(b, 5.0), b);
        let mid = a.step_towards(b, 0.25);
        assert!((mid.x - 0.25).abs() < 1e-6);
    }

    #[test]
    fn normalized_zero_vector_stays_zero() {
        assert_eq!(Vec3::ZERO.normalized_or_zero(), Vec3::ZERO);
    }

    #[test]
    fn with_y_keeps_horizontal() {
        let p = Vec3::new(2.0, 7.5, -1.0).with_y(0.0);
        assert_eq!(p, Vec3::new(2.0, 0.0, -1.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_offsets_saturate() {
        assert_eq!(Tick(10).offset(3), Tick(13));
        assert_eq!(Tick(u64::MAX).offset(1), Tick(u64::MAX));
        assert_eq!(Tick(15).since(Tick(10)), 5);
        assert_eq!(Tick(3).since(Tick(9)), 0);
        assert_eq!(Tick(4).to_string(), "t4");
    }

    #[test]
    fn clock_dt_and_elapsed() {
        let mut clock = SimClock::new(50);
        assert!((clock.dt_secs() - 0.05).abs() < 1e-6);
        for _ in 0..20 {
            clock.advance();
        }
        assert!((clock.elapsed_secs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(50);
        assert_eq!(clock.ticks_for_secs(1.0), 20);
        assert_eq!(clock.ticks_for_secs(0.01), 1);
        assert_eq!(clock.ticks_for_secs(0.0), 1);
        assert_eq!(clock.ticks_for_secs(-3.0), 1);
    }

    #[test]
    fn config_stop_tick_and_clock() {
        let cfg = SimConfig { total_ticks: 400, ..SimConfig::default() };
        assert_eq!(cfg.stop_tick(), Tick(400));
        let clock = cfg.clock();
        assert_eq!(clock.current_tick, Tick::ZERO);
        assert_eq!(clock.tick_duration_ms, 50);
    }

    #[test]
    fn zero_tick_length_rejected() {
        assert!(SimConfig::default().validate().is_ok());
        let cfg = SimConfig { tick_duration_ms: 0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(crate::CoreError::Config(_))));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_picks() {
        let slots = [10u8, 20, 30, 40, 50];
        let mut a = SimRng::new(12345);
        let mut b = SimRng::new(12345);
        for _ in 0..50 {
            assert_eq!(a.choose(&slots), b.choose(&slots));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9u8]), Some(&9));
    }
}

#[cfg(test)]
mod item {
    use crate::{CarriedItem, ItemKind, Rarity};

    #[test]
    fn rarity_is_ordered() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Rare < Rarity::Legendary);
        assert_eq!(Rarity::ALL.len(), 4);
    }

    #[test]
    fn core_items_have_no_probability() {
        let item = CarriedItem::core("ore", Rarity::Rare, 4.0);
        assert_eq!(item.kind(), ItemKind::Core);
        assert_eq!(item.probability(), 0.0);
    }

    #[test]
    fn power_probability_is_clamped() {
        let item = CarriedItem::power("blade", Rarity::Legendary, 12.0, 1.7);
        assert_eq!(item.probability(), 1.0);
        assert_eq!(item.to_string(), "blade [legendary]");
    }

    #[test]
    fn resource_unit_is_zero_value_core() {
        let unit = CarriedItem::resource_unit();
        assert_eq!(unit.kind(), ItemKind::Core);
        assert_eq!(unit.power_value(), 0.0);
        assert_eq!(unit.rarity(), Rarity::Common);
    }
}
