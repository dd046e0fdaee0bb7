//! Scenario blueprints consumed at session initialization.
//!
//! A scenario says where entities spawn and with what stats; it is static
//! data, never stored in live state. Content crates provide prebuilt
//! layouts, embedders may construct their own.

use crate::state::{ActorStats, OpponentKind};

/// One opponent to place in the overworld.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentSpawn {
    pub kind: OpponentKind,
    pub x: f32,
    pub y: f32,
}

/// Initial layout for a session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    /// Top-left corner of the actor's bounding box at spawn.
    pub player_spawn: (f32, f32),
    /// Movement speed in pixels per second.
    pub player_speed: f32,
    pub player_stats: ActorStats,
    /// Opponents in spawn order. Order matters: it is the encounter
    /// scan's iteration order.
    pub spawns: Vec<OpponentSpawn>,
}
