//! Static content for the stock game: the opponent catalog and the
//! demo scenario layout.
//!
//! Content is consumed when a session is instantiated and never appears
//! in game state; the core references opponents by kind and resolves
//! their stat blocks through [`game_core::TemplateOracle`].

pub mod catalog;
pub mod scenario;

pub use catalog::Catalog;
