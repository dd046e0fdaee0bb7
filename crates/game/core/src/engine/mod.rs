//! Frame-driven reducer over [`GameState`].
//!
//! The [`GameEngine`] is the authoritative mutator: embedders call
//! [`GameEngine::tick`] once per frame and never touch state directly.
//! Each tick runs exactly one mode's logic, and a mode transition only
//! happens as the terminal step of the mode that triggered it, so no tick
//! ever executes both overworld and combat logic.

mod combat;
mod overworld;

pub use combat::roll_damage;

use crate::event::GameEvent;
use crate::input::InputState;
use crate::rng::RngOracle;
use crate::state::{BattleOutcome, BattleState, GameState, Mode};

/// Game engine that advances a session one frame at a time.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Advance the session by one frame.
    ///
    /// Dispatches to the active mode's logic. Events produced this tick
    /// are appended to `events`; the buffer is the caller's to clear.
    pub fn tick(
        &mut self,
        held: InputState,
        dt_ms: f32,
        rng: &mut dyn RngOracle,
        events: &mut Vec<GameEvent>,
    ) {
        match self.state.mode {
            Mode::Overworld => self.overworld_tick(held, dt_ms, events),
            Mode::Combat(_) => self.combat_tick(held, dt_ms, rng, events),
        }
    }

    /// Movement, then the encounter scan. Starting a battle is the tick's
    /// terminal step; no combat logic runs until the next frame.
    fn overworld_tick(&mut self, held: InputState, dt_ms: f32, events: &mut Vec<GameEvent>) {
        let state = &mut *self.state;
        overworld::resolve_movement(
            &mut state.player,
            held,
            dt_ms,
            state.config.world_width,
            state.config.world_height,
        );

        if let Some((id, kind)) = overworld::find_encounter(&state.player, state.opponents.iter()) {
            state.mode = Mode::Combat(BattleState::open(id, kind, state.config.turn_delay_ms));
            events.push(GameEvent::BattleStarted { opponent: id, kind });
        }
    }

    /// One combat tick, then the exit transition if the resolver flagged
    /// the end. Win rewards are granted here so the experience gain and
    /// the mode switch land in the same frame.
    fn combat_tick(
        &mut self,
        held: InputState,
        dt_ms: f32,
        rng: &mut dyn RngOracle,
        events: &mut Vec<GameEvent>,
    ) {
        let GameState {
            config,
            player,
            opponents,
            mode,
        } = &mut *self.state;

        let Mode::Combat(battle) = mode else {
            return;
        };
        let Some(opponent) = opponents
            .iter_mut()
            .find(|opponent| opponent.id == battle.opponent)
        else {
            *mode = Mode::Overworld;
            return;
        };

        combat::battle_tick(
            battle,
            player,
            opponent,
            held,
            dt_ms,
            config.turn_delay_ms,
            rng,
            events,
        );

        if !battle.ended {
            return;
        }
        let outcome = battle.outcome;

        // Discard the battle; its log and timer die with it.
        *mode = Mode::Overworld;

        match outcome {
            BattleOutcome::PlayerWon => {
                opponent.defeated = true;
                events.push(GameEvent::BattleWon {
                    opponent: opponent.id,
                    experience: opponent.experience_reward,
                });
                for level_up in player.gain_experience(opponent.experience_reward, rng) {
                    events.push(GameEvent::LevelGained {
                        level: level_up.level,
                    });
                }
                events.push(GameEvent::StatsChanged {
                    stats: player.stats,
                });
            }
            BattleOutcome::PlayerLost => events.push(GameEvent::BattleLost),
            BattleOutcome::Undecided => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::rng::ScriptedRng;
    use crate::scenario::{OpponentSpawn, Scenario};
    use crate::state::{
        Actor, ActorStats, OpponentId, OpponentKind, OpponentTemplate, TemplateOracle, TurnOwner,
    };

    struct FixedTemplates;

    impl TemplateOracle for FixedTemplates {
        fn template(&self, kind: OpponentKind) -> OpponentTemplate {
            match kind {
                OpponentKind::Goon => OpponentTemplate {
                    max_hp: 8,
                    attack: 3,
                    defense: 1,
                    experience_reward: 15,
                },
                OpponentKind::Crow => OpponentTemplate {
                    max_hp: 12,
                    attack: 4,
                    defense: 2,
                    experience_reward: 25,
                },
            }
        }
    }

    /// Player at the origin with a goon just to the right and a crow far away.
    fn state() -> GameState {
        let scenario = Scenario {
            player_spawn: (0.0, 0.0),
            player_speed: Actor::DEFAULT_SPEED,
            player_stats: ActorStats::default(),
            spawns: vec![
                OpponentSpawn {
                    kind: OpponentKind::Goon,
                    x: 40.0,
                    y: 0.0,
                },
                OpponentSpawn {
                    kind: OpponentKind::Crow,
                    x: 600.0,
                    y: 400.0,
                },
            ],
        };
        GameState::from_scenario(GameConfig::default(), &scenario, &FixedTemplates)
            .expect("scenario fits")
    }

    fn walk_into_goon(state: &mut GameState, rng: &mut dyn RngOracle) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for _ in 0..10 {
            GameEngine::new(state).tick(InputState::RIGHT, 100.0, rng, &mut events);
            if state.mode.is_combat() {
                return events;
            }
        }
        panic!("never reached the goon");
    }

    #[test]
    fn walking_into_an_opponent_enters_combat_terminally() {
        let mut state = state();
        let mut rng = ScriptedRng::default();

        let events = walk_into_goon(&mut state, &mut rng);

        assert_eq!(
            events,
            vec![GameEvent::BattleStarted {
                opponent: OpponentId(0),
                kind: OpponentKind::Goon,
            }]
        );
        let battle = state.battle().expect("combat mode");
        assert_eq!(battle.turn, TurnOwner::Player);
        assert_eq!(battle.wait_ms, GameConfig::DEFAULT_TURN_DELAY_MS);
        assert_eq!(battle.log.lines(), ["A wild Goon appeared!"]);
    }

    #[test]
    fn combat_freezes_overworld_movement() {
        let mut state = state();
        let mut rng = ScriptedRng::default();
        walk_into_goon(&mut state, &mut rng);
        let pose = state.player.rect;

        let mut events = Vec::new();
        GameEngine::new(&mut state).tick(InputState::RIGHT, 100.0, &mut rng, &mut events);

        assert_eq!(state.player.rect, pose, "movement does not run in combat");
    }

    #[test]
    fn winning_grants_experience_and_retires_the_opponent() {
        let mut state = state();
        // Player rolls deal 4 damage each (variance 1); goon counters roll 0.
        let mut rng = ScriptedRng::new([1, 0, 1]);
        walk_into_goon(&mut state, &mut rng);

        let mut events = Vec::new();
        // Full-delay ticks: pacing, player hit (8 -> 4), pacing, counter,
        // pacing, player hit (4 -> 0).
        for _ in 0..10 {
            GameEngine::new(&mut state).tick(InputState::ATTACK, 1000.0, &mut rng, &mut events);
            if !state.mode.is_combat() {
                break;
            }
        }

        assert_eq!(state.mode, Mode::Overworld);
        assert!(state.opponents[0].defeated);
        assert_eq!(state.player.stats.experience, 15);
        assert!(events.contains(&GameEvent::BattleWon {
            opponent: OpponentId(0),
            experience: 15,
        }));
        assert!(events.contains(&GameEvent::StatsChanged {
            stats: state.player.stats,
        }));
    }

    #[test]
    fn defeated_opponents_never_rematch_but_others_still_do() {
        let mut state = state();
        let mut rng = ScriptedRng::new([1, 0, 1]);
        walk_into_goon(&mut state, &mut rng);
        let mut events = Vec::new();
        for _ in 0..10 {
            GameEngine::new(&mut state).tick(InputState::ATTACK, 1000.0, &mut rng, &mut events);
            if !state.mode.is_combat() {
                break;
            }
        }
        assert!(state.opponents[0].defeated);

        // Standing on the defeated goon's tile starts nothing.
        let mut events = Vec::new();
        GameEngine::new(&mut state).tick(InputState::empty(), 100.0, &mut rng, &mut events);
        assert_eq!(state.mode, Mode::Overworld);
        assert!(events.is_empty());

        // The crow is still eligible.
        state.player.rect.x = 590.0;
        state.player.rect.y = 400.0;
        GameEngine::new(&mut state).tick(InputState::RIGHT, 200.0, &mut rng, &mut events);
        assert!(matches!(
            events.first(),
            Some(GameEvent::BattleStarted {
                kind: OpponentKind::Crow,
                ..
            })
        ));
    }

    #[test]
    fn losing_returns_to_the_overworld_without_rewards() {
        let mut state = state();
        state.player.stats.hp = 1;
        state.player.stats.attack = 1;
        // Player scratches for 1; the goon's counter lands 2 and ends it.
        let mut rng = ScriptedRng::new([0, 2]);
        walk_into_goon(&mut state, &mut rng);

        let mut events = Vec::new();
        for _ in 0..6 {
            GameEngine::new(&mut state).tick(InputState::ATTACK, 1000.0, &mut rng, &mut events);
            if !state.mode.is_combat() {
                break;
            }
        }

        assert_eq!(state.mode, Mode::Overworld);
        assert!(events.contains(&GameEvent::BattleLost));
        assert!(state.player.stats.hp <= 0);
        assert_eq!(state.player.stats.experience, 0);
        assert!(!state.opponents[0].defeated);
    }

    #[test]
    fn zero_dt_and_no_input_is_a_noop() {
        let mut state = state();
        let before = state.clone();
        let mut rng = ScriptedRng::default();
        let mut events = Vec::new();

        GameEngine::new(&mut state).tick(InputState::empty(), 0.0, &mut rng, &mut events);

        assert_eq!(state, before);
        assert!(events.is_empty());
    }
}
