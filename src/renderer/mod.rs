//! Read-only draw data for the host's rasterizer
//!
//! The simulation never draws. After a tick the host asks for a draw list of
//! filled squares and rasterizes them however it likes.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::SimState;

/// An axis-aligned filled square in logical canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Top-left corner
    pub min: Vec2,
    /// Side length
    pub size: f32,
    pub color: [f32; 4],
}

impl Quad {
    /// Square of side `size` centered on `center`
    pub fn centered(center: Vec2, size: f32, color: [f32; 4]) -> Self {
        Self {
            min: center - Vec2::splat(size / 2.0),
            size,
            color,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.min + Vec2::splat(self.size / 2.0)
    }
}

/// Leader square first, then one square per follower in chain order
pub fn draw_list(state: &SimState, settings: &Settings) -> Vec<Quad> {
    let mut quads = Vec::with_capacity(state.chain.len() + 1);
    quads.push(Quad::centered(
        state.leader_pos(),
        settings.leader_size,
        settings.color,
    ));
    quads.extend(
        state
            .follower_positions()
            .map(|pos| Quad::centered(pos, settings.follower_size, settings.color)),
    );
    quads
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_list_reference_frame() {
        let settings = Settings::default();
        let state = SimState::new(&settings);
        let quads = draw_list(&state, &settings);

        assert_eq!(quads.len(), 6);
        assert_eq!(quads[0].min, Vec2::new(90.0, 90.0));
        assert_eq!(quads[0].size, 20.0);
        assert_eq!(quads[1].min, Vec2::new(92.5, 92.5));
        assert_eq!(quads[1].size, 15.0);
        assert_eq!(quads[5].center(), Vec2::new(220.0, 100.0));
        assert!(quads.iter().all(|q| q.color == colors::WHITE));
    }
}
