//! Session orchestration: owns the game state, the random stream, and
//! the per-frame event buffer.

use game_core::{
    GameConfig, GameEngine, GameEvent, GameState, InputState, PcgRng, RngOracle, Scenario,
    ScenarioError, TemplateOracle,
};
use game_content::Catalog;

use crate::view::SceneView;

/// Errors raised while assembling a [`Session`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no scenario was provided")]
    MissingScenario,
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}

/// A running game session.
///
/// Owns the authoritative [`GameState`] and the random stream feeding it.
/// Embedders call [`Session::advance`] once per frame with the elapsed
/// milliseconds and the sampled input, then render from [`Session::view`].
pub struct Session {
    state: GameState,
    rng: Box<dyn RngOracle>,
    events: Vec<GameEvent>,
}

impl Session {
    /// Create a new session builder.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Advance the simulation by one frame.
    ///
    /// Returns the events produced by this frame, in the order they
    /// occurred. The slice is valid until the next call.
    pub fn advance(&mut self, dt_ms: f32, held: InputState) -> &[GameEvent] {
        self.events.clear();
        GameEngine::new(&mut self.state).tick(held, dt_ms, self.rng.as_mut(), &mut self.events);

        for event in &self.events {
            match event {
                GameEvent::BattleStarted { opponent, kind } => {
                    tracing::info!("battle started against {} ({})", kind, opponent);
                }
                GameEvent::AttackLanded { attacker, damage } => {
                    tracing::debug!("{} landed {} damage", attacker, damage);
                }
                GameEvent::BattleWon {
                    opponent,
                    experience,
                } => {
                    tracing::info!("{} defeated, {} experience awarded", opponent, experience);
                }
                GameEvent::BattleLost => tracing::info!("player was defeated"),
                GameEvent::LevelGained { level } => {
                    tracing::info!("player reached level {}", level);
                }
                GameEvent::StatsChanged { stats } => {
                    tracing::debug!("player stats now {:?}", stats);
                }
            }
        }

        &self.events
    }

    /// The authoritative game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Snapshot the session for presentation.
    pub fn view(&self) -> SceneView {
        SceneView::from_state(&self.state)
    }
}

/// Builder for [`Session`] with flexible configuration.
pub struct SessionBuilder {
    config: GameConfig,
    scenario: Option<Scenario>,
    templates: Option<Box<dyn TemplateOracle>>,
    rng: Option<Box<dyn RngOracle>>,
    seed: u64,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: GameConfig::default(),
            scenario: None,
            templates: None,
            rng: None,
            seed: 0,
        }
    }

    /// Override the game configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the scenario to instantiate (required).
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Override the opponent stat tables (defaults to the stock [`Catalog`]).
    pub fn templates(mut self, templates: impl TemplateOracle + 'static) -> Self {
        self.templates = Some(Box::new(templates));
        self
    }

    /// Seed for the default random stream.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the random stream entirely. Takes precedence over any seed.
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the session, instantiating the scenario against the tables.
    pub fn build(self) -> Result<Session, SessionError> {
        let scenario = self.scenario.ok_or(SessionError::MissingScenario)?;
        let templates = self
            .templates
            .unwrap_or_else(|| Box::new(Catalog) as Box<dyn TemplateOracle>);
        let state = GameState::from_scenario(self.config, &scenario, templates.as_ref())?;
        let rng = self
            .rng
            .unwrap_or_else(|| Box::new(PcgRng::seed_from(self.seed)) as Box<dyn RngOracle>);

        Ok(Session {
            state,
            rng,
            events: Vec::new(),
        })
    }
}
