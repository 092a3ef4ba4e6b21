//! Per-frame simulation tick
//!
//! One call moves the leader from input, then drags the chain after it.

use glam::Vec2;

use super::state::SimState;

/// Cardinal movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in screen coordinates (y grows downward)
    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }
}

/// Directions held during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    pub fn from_directions(directions: &[Direction]) -> Self {
        let mut input = Self::default();
        for &d in directions {
            input.press(d);
        }
        input
    }

    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

/// Leader position after one tick of input.
///
/// Each held direction adds `speed` on its axis independently, so diagonal
/// movement covers `speed * sqrt(2)`. Opposite directions cancel.
pub fn apply_input(pos: Vec2, input: &TickInput, speed: f32) -> Vec2 {
    Direction::ALL
        .iter()
        .filter(|&&d| input.is_held(d))
        .fold(pos, |p, &d| p + d.offset() * speed)
}

/// Advance the simulation by one tick
pub fn tick(state: &mut SimState, input: &TickInput) {
    state.leader.pos = apply_input(state.leader.pos, input, state.leader_speed);
    state.chain.advance_all(state.leader.pos);
    state.time_ticks += 1;

    log::trace!(
        "tick {}: leader {} head {:?}",
        state.time_ticks,
        state.leader.pos,
        state.chain.followers().first().map(|f| f.pos)
    );
}
