//! Authoritative session state.
//!
//! This module owns the data structures that describe the actor, the
//! opponent roster, and the current mode. Runtime layers read this state
//! freely but mutate it exclusively through the engine.
mod actor;
mod battle;
mod opponent;

pub use actor::{Actor, ActorStats, Facing, LevelUp};
pub use battle::{BattleLog, BattleOutcome, BattleState, TurnOwner};
pub use bounded_vector::BoundedVec;
pub use opponent::{Opponent, OpponentId, OpponentKind, OpponentTemplate, TemplateOracle};

use crate::config::GameConfig;
use crate::scenario::Scenario;

/// Which top-level simulation is running.
///
/// Exactly one is ever active. Combat owns its [`BattleState`], so battle
/// bookkeeping cannot exist outside combat mode.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    #[default]
    Overworld,
    Combat(BattleState),
}

impl Mode {
    pub fn is_combat(&self) -> bool {
        matches!(self, Mode::Combat(_))
    }
}

/// Errors that can occur while building a session state from a scenario.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    #[error("scenario spawns {spawns} opponents, exceeding the capacity of {limit}")]
    TooManyOpponents { spawns: usize, limit: usize },
}

/// Canonical snapshot of a running session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub config: GameConfig,
    pub player: Actor,
    /// Spawn-ordered roster. Encounter scans walk it front to back, so
    /// spawn order is the tie-break when several opponents overlap.
    pub opponents: BoundedVec<Opponent, 0, { GameConfig::MAX_OPPONENTS }>,
    pub mode: Mode,
}

impl GameState {
    /// Build an initial state from a scenario blueprint, stamping each
    /// spawn from the template table. The session starts in the overworld.
    pub fn from_scenario(
        config: GameConfig,
        scenario: &Scenario,
        templates: &(impl TemplateOracle + ?Sized),
    ) -> Result<Self, ScenarioError> {
        let mut opponents = BoundedVec::new();
        for (index, spawn) in scenario.spawns.iter().enumerate() {
            let opponent = Opponent::from_template(
                OpponentId(index as u32),
                spawn.kind,
                templates.template(spawn.kind),
                spawn.x,
                spawn.y,
            );
            opponents
                .push(opponent)
                .map_err(|_| ScenarioError::TooManyOpponents {
                    spawns: scenario.spawns.len(),
                    limit: GameConfig::MAX_OPPONENTS,
                })?;
        }

        let (x, y) = scenario.player_spawn;
        Ok(Self {
            config,
            player: Actor::spawn(x, y, scenario.player_speed, scenario.player_stats),
            opponents,
            mode: Mode::Overworld,
        })
    }

    /// Look up an opponent by id.
    pub fn opponent(&self, id: OpponentId) -> Option<&Opponent> {
        self.opponents.iter().find(|opponent| opponent.id == id)
    }

    /// Opponents still eligible for encounters, in spawn order.
    pub fn live_opponents(&self) -> impl Iterator<Item = &Opponent> {
        self.opponents.iter().filter(|opponent| !opponent.defeated)
    }

    /// The battle in progress, if combat mode is active.
    pub fn battle(&self) -> Option<&BattleState> {
        match &self.mode {
            Mode::Combat(battle) => Some(battle),
            Mode::Overworld => None,
        }
    }
}
