use glam::Vec2;

use crate::core::geometry::Rect;

/// Orthographic camera for 2D rendering.
/// The host builds its projection from the view center and width in the frame header.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Visible width in world units.
    pub width: f32,
    /// Visible height in world units.
    pub height: f32,
    /// Camera center position in world space.
    pub center: Vec2,
    /// Optional world region the view must stay inside.
    pub bounds: Option<Rect>,
}

impl Camera2D {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: Vec2::new(width / 2.0, height / 2.0),
            bounds: None,
        }
    }

    /// A camera showing `viewport_width` world units across, with the height
    /// taken from the screen's aspect ratio. The view starts with its
    /// bottom-left corner at the world origin.
    pub fn fit_width(viewport_width: f32, screen_width: f32, screen_height: f32) -> Self {
        let height = viewport_width * screen_height / screen_width.max(1.0);
        Self::new(viewport_width, height)
    }

    /// Recompute the visible height after a screen resize, keeping the bottom-left corner.
    pub fn resize(&mut self, screen_width: f32, screen_height: f32) {
        let min = self.visible_rect().min();
        self.height = self.width * screen_height / screen_width.max(1.0);
        self.center = min + Vec2::new(self.width, self.height) / 2.0;
        self.clamp_to_bounds();
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
        self.clamp_to_bounds();
    }

    /// Center the view on `target`, staying inside the bounds if set.
    pub fn look_at(&mut self, target: Vec2) {
        self.center = target;
        self.clamp_to_bounds();
    }

    fn clamp_to_bounds(&mut self) {
        let Some(bounds) = self.bounds else {
            return;
        };
        let half = Vec2::new(self.width, self.height) / 2.0;
        let (min, max) = (bounds.min(), bounds.max());
        // A view larger than the bounds is centered on them.
        self.center.x = if self.width >= bounds.width {
            bounds.center().x
        } else {
            self.center.x.clamp(min.x + half.x, max.x - half.x)
        };
        self.center.y = if self.height >= bounds.height {
            bounds.center().y
        } else {
            self.center.y.clamp(min.y + half.y, max.y - half.y)
        };
    }

    /// World-space rectangle currently in view.
    pub fn visible_rect(&self) -> Rect {
        let half = Vec2::new(self.width, self.height) / 2.0;
        Rect::from_min_size(self.center - half, half * 2.0)
    }

    pub fn is_visible(&self, rect: &Rect) -> bool {
        self.visible_rect().overlaps(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_width_follows_aspect() {
        let cam = Camera2D::fit_width(400.0, 1600.0, 900.0);
        assert_eq!(cam.width, 400.0);
        assert_eq!(cam.height, 225.0);
        assert_eq!(cam.visible_rect(), Rect::new(0.0, 0.0, 400.0, 225.0));
    }

    #[test]
    fn resize_keeps_bottom_left() {
        let mut cam = Camera2D::fit_width(400.0, 800.0, 800.0);
        cam.resize(800.0, 400.0);
        assert_eq!(cam.visible_rect(), Rect::new(0.0, 0.0, 400.0, 200.0));
    }

    #[test]
    fn look_at_clamps_to_bounds() {
        let mut cam = Camera2D::new(400.0, 300.0);
        cam.set_bounds(Rect::new(0.0, 0.0, 640.0, 480.0));
        cam.look_at(Vec2::new(0.0, 1000.0));
        assert_eq!(cam.center, Vec2::new(200.0, 330.0));
    }

    #[test]
    fn oversized_view_is_centered() {
        let mut cam = Camera2D::new(800.0, 600.0);
        cam.set_bounds(Rect::new(0.0, 0.0, 640.0, 480.0));
        assert_eq!(cam.center, Vec2::new(320.0, 240.0));
    }
}
