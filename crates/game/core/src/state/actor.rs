//! Player-controlled actor: pose, stat block, and progression.

use crate::geometry::Rect;
use crate::rng::RngOracle;

/// Direction the actor last moved in. Presentation picks sprites from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// The actor's stored stat block.
///
/// # Invariants
///
/// - `hp` never exceeds `max_hp`. It may dip below zero transiently during
///   combat; display clamping is a presentation concern.
/// - `max_hp`, `attack`, and `defense` never decrease across level-ups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorStats {
    pub level: u32,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub experience: u32,
    pub experience_to_next: u32,
}

impl Default for ActorStats {
    /// Starting stats: level 1, 20 hp, modest offense, 100 exp to level 2.
    fn default() -> Self {
        Self {
            level: 1,
            hp: 20,
            max_hp: 20,
            attack: 5,
            defense: 2,
            experience: 0,
            experience_to_next: 100,
        }
    }
}

/// Gains applied by a single level-up, for notification sinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelUp {
    /// The level just reached.
    pub level: u32,
    pub max_hp_gain: i32,
    pub attack_gain: i32,
    pub defense_gain: i32,
}

/// The player-controlled entity.
///
/// A session holds exactly one actor. It is mutated in place by both the
/// overworld systems (pose) and combat (hp, progression), so changes made
/// in one mode persist into the other.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub rect: Rect,
    /// Movement speed in pixels per second.
    pub speed: f32,
    pub facing: Facing,
    pub stats: ActorStats,
}

impl Actor {
    pub const WIDTH: f32 = 24.0;
    pub const HEIGHT: f32 = 32.0;
    pub const DEFAULT_SPEED: f32 = 100.0;

    /// Spawn an actor at the given position with the standard bounding size.
    pub fn spawn(x: f32, y: f32, speed: f32, stats: ActorStats) -> Self {
        Self {
            rect: Rect::new(x, y, Self::WIDTH, Self::HEIGHT),
            speed,
            facing: Facing::default(),
            stats,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.stats.hp > 0
    }

    /// Apply damage by direct subtraction. The end-of-battle check reads
    /// the result; hp is not floored here.
    pub fn take_damage(&mut self, amount: i32) {
        self.stats.hp = self.stats.hp.saturating_sub(amount);
    }

    /// Add an experience reward and resolve any level-ups it unlocks.
    ///
    /// While `experience` meets `experience_to_next`, the threshold is
    /// subtracted and one level-up is rolled: max hp +[3, 7], attack
    /// +[1, 3], defense +[1, 2], hp fully healed, and the next threshold
    /// grows by half (floored). A large reward can trigger several
    /// level-ups in one call.
    ///
    /// # Returns
    ///
    /// One [`LevelUp`] record per level gained, in order.
    pub fn gain_experience(&mut self, reward: u32, rng: &mut dyn RngOracle) -> Vec<LevelUp> {
        self.stats.experience = self.stats.experience.saturating_add(reward);

        let mut level_ups = Vec::new();
        while self.stats.experience_to_next > 0
            && self.stats.experience >= self.stats.experience_to_next
        {
            self.stats.experience -= self.stats.experience_to_next;
            level_ups.push(self.level_up(rng));
        }
        level_ups
    }

    fn level_up(&mut self, rng: &mut dyn RngOracle) -> LevelUp {
        let stats = &mut self.stats;
        stats.level = stats.level.saturating_add(1);

        let max_hp_gain = rng.range_i32(3, 7);
        stats.max_hp = stats.max_hp.saturating_add(max_hp_gain);
        stats.hp = stats.max_hp;

        let attack_gain = rng.range_i32(1, 3);
        stats.attack = stats.attack.saturating_add(attack_gain);

        let defense_gain = rng.range_i32(1, 2);
        stats.defense = stats.defense.saturating_add(defense_gain);

        stats.experience_to_next = stats.experience_to_next.saturating_mul(3) / 2;

        LevelUp {
            level: stats.level,
            max_hp_gain,
            attack_gain,
            defense_gain,
        }
    }
}
