//! Platform glue for the host loop
//!
//! Handles the parts of a frame that sit outside the simulation:
//! - Mapping held keys to tick input
//! - Turning frame time into a number of fixed ticks

pub mod clock;
pub mod input;

pub use clock::FixedStep;
pub use input::{Key, KeyState};
