//! Overworld systems: held-key movement and encounter detection.

use crate::input::InputState;
use crate::state::{Actor, Facing, Opponent, OpponentId, OpponentKind};

/// Resolve one frame of movement from the held direction symbols.
///
/// Each held direction contributes `speed * dt / 1000` along its axis, so
/// holding two perpendicular directions moves diagonally. Facing follows
/// the last direction applied in the fixed order up, down, left, right.
/// Negative `dt_ms` is treated as zero, and the bounding box is clamped
/// inside the world after the deltas apply.
pub(crate) fn resolve_movement(
    player: &mut Actor,
    held: InputState,
    dt_ms: f32,
    world_width: f32,
    world_height: f32,
) {
    let dt_ms = dt_ms.max(0.0);
    let distance = player.speed * dt_ms / 1000.0;

    if held.contains(InputState::UP) {
        player.rect.y -= distance;
        player.facing = Facing::Up;
    }
    if held.contains(InputState::DOWN) {
        player.rect.y += distance;
        player.facing = Facing::Down;
    }
    if held.contains(InputState::LEFT) {
        player.rect.x -= distance;
        player.facing = Facing::Left;
    }
    if held.contains(InputState::RIGHT) {
        player.rect.x += distance;
        player.facing = Facing::Right;
    }

    player.rect.clamp_to(world_width, world_height);
}

/// Scan the roster for the first live opponent overlapping the actor.
///
/// Spawn order is the iteration order, so when several opponents overlap
/// in the same tick the lowest-index one wins and at most one battle can
/// start per tick.
pub(crate) fn find_encounter<'a>(
    player: &Actor,
    opponents: impl IntoIterator<Item = &'a Opponent>,
) -> Option<(OpponentId, OpponentKind)> {
    opponents
        .into_iter()
        .find(|opponent| !opponent.defeated && opponent.rect.overlaps(&player.rect))
        .map(|opponent| (opponent.id, opponent.kind))
}
