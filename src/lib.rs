//! 3x3x3 Twisty Puzzle Move Engine
//!
//! Models the cube as 27 cubies, turns face slices by quarter turns and
//! animates each turn over several frames before committing it.

pub mod animation;
pub mod cube;
pub mod error;
pub mod moves;
pub mod net;

use animation::{AnimationSnapshot, CubeController};
use cube::CubeState;

pub use error::{CubeError, Result};

/// Read-only access for renderers.
///
/// A renderer polls these once per frame and never writes back, so anything
/// that draws the cube can be handed a `&dyn CubeView`.
pub trait CubeView {
    /// Latest committed state of all 27 cubies.
    fn current_state(&self) -> &CubeState;
    /// The turning slice and its partial angle, or `None` when idle.
    fn animation_snapshot(&self) -> Option<AnimationSnapshot<'_>>;
}

impl CubeView for CubeController {
    fn current_state(&self) -> &CubeState {
        CubeController::current_state(self)
    }

    fn animation_snapshot(&self) -> Option<AnimationSnapshot<'_>> {
        CubeController::animation_snapshot(self)
    }
}
