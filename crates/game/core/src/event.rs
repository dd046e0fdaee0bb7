//! Events emitted during ticks for embedders to observe.
//!
//! Presentation layers consume these to drive out-of-canvas displays
//! (stat panels, battle banners) without polling state for changes.
use crate::state::{ActorStats, OpponentId, OpponentKind, TurnOwner};

/// Events emitted by the engine while advancing a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The actor collided with a live opponent and a battle began.
    BattleStarted {
        opponent: OpponentId,
        kind: OpponentKind,
    },
    /// An attack resolved and dealt damage.
    AttackLanded { attacker: TurnOwner, damage: i32 },
    /// The battle ended with the opponent defeated.
    BattleWon {
        opponent: OpponentId,
        experience: u32,
    },
    /// The battle ended with the actor's hp at or below zero.
    BattleLost,
    /// The actor reached a new level.
    LevelGained { level: u32 },
    /// The actor's stat block changed (hp, experience, or level-up gains).
    StatsChanged { stats: ActorStats },
}
