use crate::layout::{LayoutEngine, Square};
use cubeview_common::CubeState;

/// The squares currently on display.
///
/// Every rebuild throws the previous squares away and lays the state out
/// again; there is no identity tracking between generations.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    squares: Vec<Square>,
    generation: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all squares with a fresh layout of `state`.
    pub fn rebuild(&mut self, engine: &LayoutEngine, state: &CubeState) {
        self.squares = engine.layout(state);
        self.generation += 1;
        tracing::trace!(
            generation = self.generation,
            squares = self.squares.len(),
            "scene rebuilt"
        );
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of rebuilds so far; 0 for a scene that was never drawn.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
