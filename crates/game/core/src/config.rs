/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// World width in pixels. Movement clamps bounding boxes inside it.
    pub world_width: f32,
    /// World height in pixels.
    pub world_height: f32,
    /// Pacing delay between combat turns, in milliseconds. Nothing in a
    /// battle may act while this countdown is positive.
    pub turn_delay_ms: f32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of opponents a scenario may spawn.
    pub const MAX_OPPONENTS: usize = 32;
    /// Number of battle log lines surfaced at once.
    pub const BATTLE_LOG_LINES: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WORLD_WIDTH: f32 = 800.0;
    pub const DEFAULT_WORLD_HEIGHT: f32 = 600.0;
    pub const DEFAULT_TURN_DELAY_MS: f32 = 1000.0;

    pub fn new() -> Self {
        Self {
            world_width: Self::DEFAULT_WORLD_WIDTH,
            world_height: Self::DEFAULT_WORLD_HEIGHT,
            turn_delay_ms: Self::DEFAULT_TURN_DELAY_MS,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
