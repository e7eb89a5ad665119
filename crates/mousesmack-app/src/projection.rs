//! Orthographic screen ↔ world mapping for a pixel viewport.

use glam::DVec2;

use mousesmack_core::types::{Playfield, WorldPoint};
use mousesmack_sim::ScreenProjection;

/// Default viewport size in pixels.
pub const DEFAULT_VIEWPORT: DVec2 = DVec2::new(1920.0, 1080.0);

/// Maps a viewport (origin bottom-left, y up) onto the playfield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicProjection {
    viewport: DVec2,
    playfield: Playfield,
}

impl OrthographicProjection {
    pub fn new(viewport: DVec2, playfield: Playfield) -> Self {
        Self {
            viewport,
            playfield,
        }
    }

    pub fn world_to_screen(&self, world: WorldPoint) -> DVec2 {
        let size = self.playfield.max - self.playfield.min;
        (world - self.playfield.min) / size * self.viewport
    }
}

impl ScreenProjection for OrthographicProjection {
    fn screen_to_world(&self, screen: DVec2) -> WorldPoint {
        let size = self.playfield.max - self.playfield.min;
        self.playfield.min + screen / self.viewport * size
    }
}
