//! Stock scenario layouts.

use game_core::{Actor, ActorStats, OpponentKind, OpponentSpawn, Scenario};

/// The demo overworld: the player at the center of the world, a goon
/// in the upper left quadrant and a crow in the lower right.
pub fn demo() -> Scenario {
    Scenario {
        player_spawn: (400.0, 300.0),
        player_speed: Actor::DEFAULT_SPEED,
        player_stats: ActorStats::default(),
        spawns: vec![
            OpponentSpawn {
                kind: OpponentKind::Goon,
                x: 200.0,
                y: 200.0,
            },
            OpponentSpawn {
                kind: OpponentKind::Crow,
                x: 600.0,
                y: 400.0,
            },
        ],
    }
}
