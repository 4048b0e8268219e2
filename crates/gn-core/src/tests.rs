//! Unit tests for gn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, TileId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(TileId(100) > TileId(99));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(TileId(3).to_string(), "TileId(3)");
    }
}

#[cfg(test)]
mod direction {
    use std::collections::HashSet;

    use crate::Direction;

    #[test]
    fn exactly_four_in_canonical_order() {
        assert_eq!(
            Direction::ALL,
            [Direction::North, Direction::South, Direction::East, Direction::West]
        );
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.ordinal(), i);
        }
    }

    #[test]
    fn opposite_is_an_involution_without_fixed_points() {
        for d in Direction::ALL {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
        let opposites: HashSet<_> = Direction::ALL.iter().map(|d| d.opposite()).collect();
        assert_eq!(opposites.len(), 4, "every direction has a unique opposite");
    }

    #[test]
    fn deltas_cancel_with_opposite() {
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            let (ox, oy) = d.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn display() {
        assert_eq!(Direction::North.to_string(), "north");
        assert_eq!(Direction::West.to_string(), "west");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Direction, GridPos};

    #[test]
    fn manhattan() {
        let a = GridPos::new(0, 0);
        let b = GridPos::new(3, -4);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn step_follows_delta() {
        let p = GridPos::new(2, 2);
        assert_eq!(p.step(Direction::North), Some(GridPos::new(2, 1)));
        assert_eq!(p.step(Direction::South), Some(GridPos::new(2, 3)));
        assert_eq!(p.step(Direction::East), Some(GridPos::new(3, 2)));
        assert_eq!(p.step(Direction::West), Some(GridPos::new(1, 2)));
    }

    #[test]
    fn step_off_coordinate_space_is_none() {
        assert_eq!(GridPos::new(i32::MAX, 0).step(Direction::East), None);
        assert_eq!(GridPos::new(0, i32::MIN).step(Direction::North), None);
        assert_eq!(
            GridPos::new(i32::MAX, 0).step(Direction::West),
            Some(GridPos::new(i32::MAX - 1, 0))
        );
    }

    #[test]
    fn manhattan_saturates_at_extremes() {
        let lo = GridPos::new(i32::MIN, i32::MIN);
        let hi = GridPos::new(i32::MAX, i32::MAX);
        assert_eq!(lo.manhattan(hi), u32::MAX);
        assert_eq!(GridPos::new(i32::MIN, 0).manhattan(GridPos::new(i32::MAX, 0)), u32::MAX);
    }
}

#[cfg(test)]
mod kind {
    use crate::AgentKind;

    #[test]
    fn player_vs_ghosts() {
        assert!(AgentKind::Player.is_player());
        for g in AgentKind::GHOSTS {
            assert!(g.is_ghost());
        }
    }

    #[test]
    fn ordinals_are_dense() {
        let mut seen = [false; AgentKind::COUNT];
        seen[AgentKind::Player.ordinal()] = true;
        for g in AgentKind::GHOSTS {
            seen[g.ordinal()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn display() {
        assert_eq!(AgentKind::Clyde.to_string(), "clyde");
    }
}

#[cfg(test)]
mod config {
    use crate::{GameConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn snapshot_ticks() {
        let cfg = GameConfig { seed: 1, total_ticks: 10, snapshot_interval_ticks: 4 };
        assert_eq!(cfg.end_tick(), Tick(10));
        assert!(cfg.is_snapshot_tick(Tick(0)));
        assert!(!cfg.is_snapshot_tick(Tick(3)));
        assert!(cfg.is_snapshot_tick(Tick(8)));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let cfg = GameConfig::default();
        assert!(!cfg.is_snapshot_tick(Tick(0)));
    }
}

#[cfg(test)]
mod rng {
    use rand::Rng;

    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.gen_range(0..1_000u32), r2.gen_range(0..1_000u32));
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.r#gen();
        let b: u64 = r1.r#gen();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn usable_as_injected_rng() {
        use rand::seq::SliceRandom;

        let mut rng = AgentRng::new(0, AgentId(0));
        let empty: [u8; 0] = [];
        assert!(empty.choose(&mut rng).is_none());
        assert_eq!([9].choose(&mut rng), Some(&9));
    }
}
