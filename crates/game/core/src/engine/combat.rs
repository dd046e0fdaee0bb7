//! Battle resolution: pacing, alternating attacks, and end conditions.

use crate::event::GameEvent;
use crate::input::InputState;
use crate::rng::RngOracle;
use crate::state::{Actor, BattleOutcome, BattleState, Opponent, TurnOwner};

/// Compute attack damage.
///
/// # Formula
///
/// ```text
/// damage = max(1, attack - defense + variance - 1)    variance in [0, 2]
/// ```
///
/// The variance roll shifts the base difference by one of {-1, 0, +1},
/// and the floor guarantees every attack deals at least 1 point.
pub fn roll_damage(attack: i32, defense: i32, rng: &mut dyn RngOracle) -> i32 {
    let variance = rng.range_i32(0, 2);
    attack
        .saturating_sub(defense)
        .saturating_add(variance - 1)
        .max(1)
}

/// Advance the battle by one tick.
///
/// The pacing countdown is the sole gate: while positive it absorbs the
/// whole tick, even on the tick it crosses zero. Once elapsed, the player
/// acts only when the attack symbol is held; the opponent's counter needs
/// no input. Each attack re-arms the countdown and hands the turn over,
/// and end conditions are checked immediately after the attack resolves,
/// before any further turn progression.
pub(crate) fn battle_tick(
    battle: &mut BattleState,
    player: &mut Actor,
    opponent: &mut Opponent,
    held: InputState,
    dt_ms: f32,
    turn_delay_ms: f32,
    rng: &mut dyn RngOracle,
    events: &mut Vec<GameEvent>,
) {
    if battle.wait_ms > 0.0 {
        battle.wait_ms -= dt_ms.max(0.0);
        return;
    }

    match battle.turn {
        TurnOwner::Player if !battle.action_selected => {
            if held.contains(InputState::ATTACK) {
                player_attack(battle, player, opponent, turn_delay_ms, rng, events);
            }
        }
        TurnOwner::Opponent => {
            opponent_attack(battle, player, opponent, turn_delay_ms, rng, events);
        }
        TurnOwner::Player => {}
    }
}

fn player_attack(
    battle: &mut BattleState,
    player: &Actor,
    opponent: &mut Opponent,
    turn_delay_ms: f32,
    rng: &mut dyn RngOracle,
    events: &mut Vec<GameEvent>,
) {
    let damage = roll_damage(player.stats.attack, opponent.defense, rng);
    opponent.take_damage(damage);
    battle.log.push(format!("You dealt {damage} damage!"));
    events.push(GameEvent::AttackLanded {
        attacker: TurnOwner::Player,
        damage,
    });

    battle.action_selected = true;
    battle.turn = TurnOwner::Opponent;
    battle.wait_ms = turn_delay_ms;

    if !opponent.is_alive() {
        battle.log.push(format!("{} was defeated!", opponent.kind));
        battle
            .log
            .push(format!("You gained {} EXP!", opponent.experience_reward));
        battle.outcome = BattleOutcome::PlayerWon;
        battle.ended = true;
    }
}

fn opponent_attack(
    battle: &mut BattleState,
    player: &mut Actor,
    opponent: &Opponent,
    turn_delay_ms: f32,
    rng: &mut dyn RngOracle,
    events: &mut Vec<GameEvent>,
) {
    let damage = roll_damage(opponent.attack, player.stats.defense, rng);
    player.take_damage(damage);
    battle.log.push(format!("{} dealt {damage} damage!", opponent.kind));
    events.push(GameEvent::AttackLanded {
        attacker: TurnOwner::Opponent,
        damage,
    });
    events.push(GameEvent::StatsChanged {
        stats: player.stats,
    });

    // Hand the turn back and reopen the cycle so the player can act again.
    battle.turn = TurnOwner::Player;
    battle.action_selected = false;
    battle.wait_ms = turn_delay_ms;

    if !player.is_alive() {
        battle.log.push("You were defeated!".to_string());
        battle.outcome = BattleOutcome::PlayerLost;
        battle.ended = true;
    }
}
