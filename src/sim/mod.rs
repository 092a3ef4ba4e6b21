//! Deterministic simulation module
//!
//! All movement logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - Stable iteration order (follower index)
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;
pub mod vector;

pub use state::{Follower, FollowerChain, Leader, SimState};
pub use tick::{Direction, TickInput, apply_input, tick};
pub use vector::{magnitude, step_toward, subtract};
