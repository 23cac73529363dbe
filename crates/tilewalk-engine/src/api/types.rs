use std::borrow::Cow;
use std::fmt;

use bytemuck::{Pod, Zeroable};

/// Opaque, string-backed identifier for a tracked entity ("player", "chest", ...).
/// Stable for the entity's lifetime; well-known ids can be declared as `const`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(Cow<'static, str>);

impl EntityId {
    /// Build an id from a static string. Usable in `const` items.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for EntityId {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for EntityId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// A sound event emitted by the game logic.
/// The numeric value maps to a game-defined sound on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

/// A game event communicated from Rust to the host.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32) -> Self {
        Self { kind, a, ..Default::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: EntityId = EntityId::from_static("player");

    #[test]
    fn static_and_owned_ids_compare_equal() {
        assert_eq!(PLAYER, EntityId::new(String::from("player")));
        assert_ne!(PLAYER, EntityId::from("chest"));
    }

    #[test]
    fn game_event_is_four_floats() {
        assert_eq!(std::mem::size_of::<GameEvent>(), GameEvent::FLOATS * 4);
    }
}
