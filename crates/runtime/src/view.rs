//! View-model snapshots derived from [`game_core::GameState`].
//!
//! Presentation layers render from these instead of reaching into the
//! state directly. Hit points are clamped at zero here; the state keeps
//! the raw value.

use game_core::{Facing, GameState, Mode, OpponentId, OpponentKind, Rect, TurnOwner};

/// Player view for rendering and the HUD.
#[derive(Clone, Debug)]
pub struct PlayerView {
    pub rect: Rect,
    pub facing: Facing,
    pub level: u32,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub experience: u32,
    pub experience_to_next: u32,
}

impl PlayerView {
    fn from_state(state: &GameState) -> Self {
        let stats = state.player.stats;
        Self {
            rect: state.player.rect,
            facing: state.player.facing,
            level: stats.level,
            hp: stats.hp.max(0),
            max_hp: stats.max_hp,
            attack: stats.attack,
            defense: stats.defense,
            experience: stats.experience,
            experience_to_next: stats.experience_to_next,
        }
    }
}

/// Opponent view for rendering. Defeated opponents are omitted.
#[derive(Clone, Debug)]
pub struct OpponentView {
    pub id: OpponentId,
    pub kind: OpponentKind,
    pub rect: Rect,
    pub hp: i32,
    pub max_hp: i32,
}

/// Battle overlay contents while combat is active.
#[derive(Clone, Debug)]
pub struct BattleView {
    pub opponent: OpponentId,
    pub kind: OpponentKind,
    pub opponent_hp: i32,
    pub opponent_max_hp: i32,
    pub turn: TurnOwner,
    /// Remaining pacing delay; positive while the beat plays out.
    pub wait_ms: f32,
    /// True when the act-now prompt should be shown.
    pub awaiting_command: bool,
    /// Narration window, oldest line first.
    pub log: Vec<String>,
}

impl BattleView {
    fn from_state(state: &GameState) -> Option<Self> {
        let Mode::Combat(battle) = &state.mode else {
            return None;
        };
        let opponent = state.opponent(battle.opponent)?;
        Some(Self {
            opponent: battle.opponent,
            kind: opponent.kind,
            opponent_hp: opponent.hp.max(0),
            opponent_max_hp: opponent.max_hp,
            turn: battle.turn,
            wait_ms: battle.wait_ms,
            awaiting_command: battle.awaiting_command(),
            log: battle.log.lines().to_vec(),
        })
    }
}

/// High-level snapshot of the session used by presentation layers.
#[derive(Clone, Debug)]
pub struct SceneView {
    pub world_width: f32,
    pub world_height: f32,
    pub player: PlayerView,
    pub opponents: Vec<OpponentView>,
    /// Present exactly while combat mode is active.
    pub battle: Option<BattleView>,
}

impl SceneView {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            world_width: state.config.world_width,
            world_height: state.config.world_height,
            player: PlayerView::from_state(state),
            opponents: collect_opponents(state),
            battle: BattleView::from_state(state),
        }
    }
}

fn collect_opponents(state: &GameState) -> Vec<OpponentView> {
    state
        .live_opponents()
        .map(|opponent| OpponentView {
            id: opponent.id,
            kind: opponent.kind,
            rect: opponent.rect,
            hp: opponent.hp.max(0),
            max_hp: opponent.max_hp,
        })
        .collect()
}
