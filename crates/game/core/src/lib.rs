//! Deterministic two-mode game rules shared across embedders.
//!
//! `game-core` defines the canonical rules: free-roam movement with
//! encounter detection, and turn-paced battle resolution, switched by a
//! single mode machine. All state mutation flows through
//! [`engine::GameEngine`], one tick per frame; randomness is injected via
//! [`rng::RngOracle`] so a session replays exactly from a seed. Rendering,
//! key decoding, and frame timing live in embedding crates.
pub mod config;
pub mod engine;
pub mod event;
pub mod geometry;
pub mod input;
pub mod rng;
pub mod scenario;
pub mod state;

pub use config::GameConfig;
pub use engine::{GameEngine, roll_damage};
pub use event::GameEvent;
pub use geometry::Rect;
pub use input::InputState;
pub use rng::{PcgRng, RngOracle, ScriptedRng};
pub use scenario::{OpponentSpawn, Scenario};
pub use state::{
    Actor, ActorStats, BattleLog, BattleOutcome, BattleState, BoundedVec, Facing, GameState,
    LevelUp, Mode, Opponent, OpponentId, OpponentKind, OpponentTemplate, ScenarioError,
    TemplateOracle, TurnOwner,
};
