//! Runtime orchestration for the deterministic game simulation.
//!
//! This crate wires the pure rules in `game-core` and the static tables
//! in `game-content` into an embeddable API. Consumers build a
//! [`Session`], feed it frames, and render from [`SceneView`] snapshots.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator and builder
//! - [`input`] translates raw key events into engine input symbols
//! - [`view`] derives presentation snapshots from game state

pub mod input;
pub mod session;
pub mod view;

pub use input::{HeldKeys, InputSource, KeyMap};
pub use session::{Session, SessionBuilder, SessionError};
pub use view::{BattleView, OpponentView, PlayerView, SceneView};
