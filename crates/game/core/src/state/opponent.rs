//! Hostile entities roaming the overworld.

use core::fmt;

use crate::geometry::Rect;

/// Stable identifier for an opponent within a session.
///
/// Ids are assigned in spawn order and never reused; defeated opponents
/// keep theirs so events referring to them stay resolvable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentId(pub u32);

impl fmt::Display for OpponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "opponent#{}", self.0)
    }
}

/// Opponent species. Stats are a pure function of this via the template
/// table, so adding a kind is a data addition rather than a code branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpponentKind {
    Goon,
    Crow,
}

/// One row of the opponent stat table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentTemplate {
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub experience_reward: u32,
}

/// Oracle providing the stat template for each opponent kind.
///
/// Content crates implement this; the core never hardcodes stat rows.
pub trait TemplateOracle: Send + Sync {
    fn template(&self, kind: OpponentKind) -> OpponentTemplate;
}

/// A hostile entity stamped from a template at spawn time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opponent {
    pub id: OpponentId,
    pub kind: OpponentKind,
    pub rect: Rect,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub experience_reward: u32,
    /// One-way flag: once true, this opponent is excluded from encounter
    /// scans for the rest of the session.
    pub defeated: bool,
}

impl Opponent {
    pub const WIDTH: f32 = 24.0;
    pub const HEIGHT: f32 = 24.0;

    /// Stamp a live opponent from a template at the given position.
    pub fn from_template(
        id: OpponentId,
        kind: OpponentKind,
        template: OpponentTemplate,
        x: f32,
        y: f32,
    ) -> Self {
        Self {
            id,
            kind,
            rect: Rect::new(x, y, Self::WIDTH, Self::HEIGHT),
            hp: template.max_hp,
            max_hp: template.max_hp,
            attack: template.attack,
            defense: template.defense,
            experience_reward: template.experience_reward,
            defeated: false,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Apply damage by direct subtraction, mirroring [`Actor::take_damage`].
    ///
    /// [`Actor::take_damage`]: crate::state::Actor::take_damage
    pub fn take_damage(&mut self, amount: i32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}
