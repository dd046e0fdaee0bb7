//! Transient battle bookkeeping, alive only while combat mode is active.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::opponent::{OpponentId, OpponentKind};

/// Which side acts next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnOwner {
    Player,
    Opponent,
}

/// How the battle resolved, if it has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    #[default]
    Undecided,
    PlayerWon,
    PlayerLost,
}

/// Rolling window over the most recent battle narration lines.
///
/// Pushing onto a full log drops the oldest line, so the surfaced window
/// is always the newest [`GameConfig::BATTLE_LOG_LINES`] entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    lines: ArrayVec<String, { GameConfig::BATTLE_LOG_LINES }>,
}

impl BattleLog {
    pub fn push(&mut self, line: String) {
        if self.lines.is_full() {
            self.lines.remove(0);
        }
        self.lines.push(line);
    }

    /// The surfaced window, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Live state of the battle in progress.
///
/// Created fresh on every transition into combat and discarded on the
/// transition back, so no log line or timer value survives between two
/// battles. The actor is not stored here; it lives on the session state
/// and is borrowed during combat ticks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    /// The opponent being fought, resolved against the roster each tick.
    pub opponent: OpponentId,
    pub turn: TurnOwner,
    /// Whether the player already committed an action this cycle.
    pub action_selected: bool,
    pub outcome: BattleOutcome,
    /// Set by the combat resolver; the engine exits combat when it sees it.
    pub ended: bool,
    pub log: BattleLog,
    /// Pacing countdown in milliseconds. While positive, no side may act.
    pub wait_ms: f32,
}

impl BattleState {
    /// Open a battle against the given opponent: player acts first, the
    /// encounter line is logged, and the initial pacing delay is armed.
    pub fn open(opponent: OpponentId, kind: OpponentKind, turn_delay_ms: f32) -> Self {
        let mut log = BattleLog::default();
        log.push(format!("A wild {kind} appeared!"));
        Self {
            opponent,
            turn: TurnOwner::Player,
            action_selected: false,
            outcome: BattleOutcome::default(),
            ended: false,
            log,
            wait_ms: turn_delay_ms,
        }
    }

    /// True when the player may act right now: it is their turn, nothing
    /// has been committed this cycle, and the pacing delay has elapsed.
    /// Presentation uses this to show the act-now prompt.
    pub fn awaiting_command(&self) -> bool {
        self.turn == TurnOwner::Player && !self.action_selected && self.wait_ms <= 0.0
    }
}
