//! Keyboard plumbing: symbol bindings and held-key tracking.
//!
//! Embedders feed raw key events (down/up by symbol) into [`HeldKeys`]
//! and sample the combined [`InputState`] once per frame. Symbols with
//! no binding are ignored, so unknown keys never disturb a session.

use std::collections::{HashMap, HashSet};

use game_core::InputState;

/// Anything that can report the currently held inputs.
///
/// [`crate::Session::advance`] takes the sampled [`InputState`] directly;
/// this trait is the seam for drivers that poll a device once per frame.
pub trait InputSource {
    fn held(&self) -> InputState;
}

impl InputSource for InputState {
    fn held(&self) -> InputState {
        *self
    }
}

/// Mapping from key symbols to input flags.
///
/// The default table carries the stock bindings: arrow keys and WASD for
/// movement, space for attack.
#[derive(Clone, Debug)]
pub struct KeyMap {
    bindings: HashMap<String, InputState>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut map = Self {
            bindings: HashMap::new(),
        };
        map.bind("ArrowUp", InputState::UP);
        map.bind("w", InputState::UP);
        map.bind("ArrowDown", InputState::DOWN);
        map.bind("s", InputState::DOWN);
        map.bind("ArrowLeft", InputState::LEFT);
        map.bind("a", InputState::LEFT);
        map.bind("ArrowRight", InputState::RIGHT);
        map.bind("d", InputState::RIGHT);
        map.bind(" ", InputState::ATTACK);
        map.bind("Space", InputState::ATTACK);
        map
    }
}

impl KeyMap {
    /// A map with no bindings at all.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind a symbol to an input flag, replacing any previous binding.
    pub fn bind(&mut self, symbol: impl Into<String>, input: InputState) {
        self.bindings.insert(symbol.into(), input);
    }

    /// Look up the flag bound to a symbol, if any.
    pub fn symbol(&self, symbol: &str) -> Option<InputState> {
        self.bindings.get(symbol).copied()
    }
}

/// Tracks which raw keys are currently down.
///
/// Symbols may share a binding (the stock table pairs arrows with WASD),
/// so the down set keys on the raw symbol and the combined flags are
/// derived at sample time. Releasing one key of a pair keeps the flag
/// held until the other comes up too.
#[derive(Clone, Debug, Default)]
pub struct HeldKeys {
    map: KeyMap,
    down: HashSet<String>,
}

impl HeldKeys {
    pub fn new(map: KeyMap) -> Self {
        Self {
            map,
            down: HashSet::new(),
        }
    }

    /// Record a key-down event. Unbound symbols are ignored.
    pub fn key_down(&mut self, symbol: &str) {
        if self.map.symbol(symbol).is_some() {
            self.down.insert(symbol.to_owned());
        }
    }

    /// Record a key-up event. Unbound symbols are ignored.
    pub fn key_up(&mut self, symbol: &str) {
        self.down.remove(symbol);
    }
}

impl InputSource for HeldKeys {
    fn held(&self) -> InputState {
        self.down
            .iter()
            .filter_map(|symbol| self.map.symbol(symbol))
            .fold(InputState::empty(), |held, input| held | input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_bindings_cover_arrows_wasd_and_space() {
        let map = KeyMap::default();
        assert_eq!(map.symbol("ArrowUp"), Some(InputState::UP));
        assert_eq!(map.symbol("w"), Some(InputState::UP));
        assert_eq!(map.symbol("d"), Some(InputState::RIGHT));
        assert_eq!(map.symbol(" "), Some(InputState::ATTACK));
        assert_eq!(map.symbol("Space"), Some(InputState::ATTACK));
        assert_eq!(map.symbol("F35"), None);
    }

    #[test]
    fn held_keys_accumulate_and_release() {
        let mut keys = HeldKeys::default();
        keys.key_down("ArrowLeft");
        keys.key_down("w");
        assert_eq!(keys.held(), InputState::LEFT | InputState::UP);

        keys.key_up("ArrowLeft");
        assert_eq!(keys.held(), InputState::UP);

        // Releasing a key that was never pressed is harmless.
        keys.key_up("ArrowLeft");
        assert_eq!(keys.held(), InputState::UP);
    }

    #[test]
    fn shared_binding_stays_held_until_both_keys_lift() {
        let mut keys = HeldKeys::default();
        keys.key_down("ArrowUp");
        keys.key_down("w");
        assert_eq!(keys.held(), InputState::UP);

        // ArrowUp is still down, so UP must survive releasing w.
        keys.key_up("w");
        assert_eq!(keys.held(), InputState::UP);

        keys.key_up("ArrowUp");
        assert!(keys.held().is_empty());
    }

    #[test]
    fn unbound_symbols_are_ignored() {
        let mut keys = HeldKeys::default();
        keys.key_down("F35");
        keys.key_down("Escape");
        assert!(keys.held().is_empty());
    }

    #[test]
    fn rebinding_replaces_the_previous_symbol_target() {
        let mut map = KeyMap::default();
        map.bind("j", InputState::ATTACK);
        map.bind(" ", InputState::DOWN);

        let mut keys = HeldKeys::new(map);
        keys.key_down("j");
        assert_eq!(keys.held(), InputState::ATTACK);
        keys.key_down(" ");
        assert_eq!(keys.held(), InputState::ATTACK | InputState::DOWN);
    }
}
