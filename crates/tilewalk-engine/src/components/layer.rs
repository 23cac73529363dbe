/// Render layer: controls draw order for entities.
///
/// Layers are drawn back-to-front: Background first, UI last.
/// Within `Objects`, entities are depth-sorted by their y position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Background = 0,
    Terrain = 1,
    #[default]
    Objects = 2,
    Effects = 3,
    UI = 4,
}

impl RenderLayer {
    /// Total number of render layers.
    pub const COUNT: usize = 5;

    /// Whether entities on this layer are drawn farthest (highest y) first.
    pub fn is_depth_sorted(self) -> bool {
        self == Self::Objects
    }

    /// Convert to u8 for protocol serialization.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
