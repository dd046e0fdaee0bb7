//! Logical input symbols consumed by the engine.
//!
//! The engine never sees raw key names. Presentation layers translate
//! whatever device events they receive into this held-symbol set and hand
//! it to each tick.

bitflags::bitflags! {
    /// Set of logical input symbols currently held.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct InputState: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const ATTACK = 1 << 4;
    }
}
