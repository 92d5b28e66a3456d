use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that defines a puzzle grid. Two grids generated with the same
/// config will always be identical.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PuzzleConfig {
    /// RNG seed used to assign cell colors during grid generation.
    pub seed: u64,

    /// Distance from the center of the grid to the edge (in cells). A radius
    /// of 0 is a single cell; radius `r` yields `3r² + 3r + 1` cells.
    #[validate(range(min = 0, max = 1000))]
    pub radius: u16,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            // Danger! This means the default will vary between calls!
            seed: rand::random(),
            radius: 10,
        }
    }
}
