use crate::{grid::HexPoint, render::Color3};
use rand::Rng;

/// The animation state of a single cell. A cell is either at rest, or in
/// flight toward the coordinate slot it will occupy once the active rotation
/// commits. An explicit sum type means a half-initialized cell can never
/// accidentally read as "done".
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RotationState {
    /// Not participating in any rotation
    Resting,
    /// Participating in the map's active rotation, animating toward `target`.
    /// `progress` runs from 0.0 (still at home) to 1.0 (arrived).
    Rotating { target: HexPoint, progress: f64 },
}

/// A single cell of the puzzle grid. Cells are created once during grid
/// generation and are never destroyed; a committed rotation relocates cells
/// between coordinate slots, it doesn't rebuild them.
///
/// Cells can only be mutated through their owning [HexMap](crate::HexMap),
/// which is what guarantees that at most one rotation (of exactly three
/// cells) is in flight at a time.
#[derive(Clone, Debug)]
pub struct Cell {
    color: Color3,
    rotation: RotationState,
}

impl Cell {
    /// The fixed palette that cell colors are drawn from
    pub const PALETTE: [Color3; 3] = [
        Color3::new_int(255, 161, 0), // orange
        Color3::new_int(190, 33, 55), // maroon
        Color3::new_int(0, 158, 47),  // lime
    ];

    /// Rotation progress gained per time unit, i.e. a full rotation nominally
    /// takes 0.25 time units
    pub const ROTATION_SPEED: f64 = 4.0;

    /// Create a new resting cell with a color drawn uniformly from
    /// [Self::PALETTE]. The RNG is injected so that grid generation is
    /// deterministic for a fixed seed.
    pub fn new(rng: &mut impl Rng) -> Self {
        let color = Self::PALETTE[rng.gen_range(0..Self::PALETTE.len())];
        Self {
            color,
            rotation: RotationState::Resting,
        }
    }

    /// The display color of this cell
    pub fn color(&self) -> Color3 {
        self.color
    }

    /// The full animation state of this cell
    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// The coordinate this cell is animating toward, if any
    pub fn rotation_target(&self) -> Option<HexPoint> {
        match self.rotation {
            RotationState::Resting => None,
            RotationState::Rotating { target, .. } => Some(target),
        }
    }

    pub fn is_rotating(&self) -> bool {
        matches!(self.rotation, RotationState::Rotating { .. })
    }

    /// True if this cell is resting, or if its in-flight rotation has reached
    /// the end of the arc
    pub fn rotation_done(&self) -> bool {
        match self.rotation {
            RotationState::Resting => true,
            RotationState::Rotating { progress, .. } => progress >= 1.0,
        }
    }

    /// Begin animating toward the given coordinate. Only the owning map calls
    /// this, and only for cells that are currently resting.
    pub(super) fn start_rotation(&mut self, target: HexPoint) {
        self.rotation = RotationState::Rotating {
            target,
            progress: 0.0,
        };
    }

    /// Advance an in-flight rotation by the given time delta, clamped so
    /// progress never exceeds 1.0. No-op for a resting cell.
    pub(super) fn step_rotation(&mut self, dt: f64) {
        if let RotationState::Rotating { progress, .. } = &mut self.rotation {
            *progress = (*progress + dt * Self::ROTATION_SPEED).min(1.0);
        }
    }

    /// Return this cell to its resting state
    pub(super) fn reset_rotation(&mut self) {
        self.rotation = RotationState::Resting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_new_draws_from_palette() {
        let mut rng = Pcg64::seed_from_u64(12345);
        for _ in 0..20 {
            let cell = Cell::new(&mut rng);
            assert!(Cell::PALETTE.contains(&cell.color()));
            assert_eq!(cell.rotation(), RotationState::Resting);
        }
    }

    #[test]
    fn test_step_rotation_clamps_and_is_monotone() {
        let mut rng = Pcg64::seed_from_u64(0);
        let mut cell = Cell::new(&mut rng);
        cell.start_rotation(HexPoint::ORIGIN);

        let mut last_progress = 0.0;
        for _ in 0..10 {
            cell.step_rotation(0.05);
            let progress = match cell.rotation() {
                RotationState::Rotating { progress, .. } => progress,
                RotationState::Resting => panic!("cell stopped rotating"),
            };
            assert!(progress >= last_progress);
            assert!(progress <= 1.0);
            last_progress = progress;
        }

        // 10 steps of 0.05 at 4x speed = 2.0 before clamping
        assert_eq!(last_progress, 1.0);
        assert!(cell.rotation_done());
    }

    #[test]
    fn test_step_rotation_noop_while_resting() {
        let mut rng = Pcg64::seed_from_u64(0);
        let mut cell = Cell::new(&mut rng);
        assert!(cell.rotation_done());
        cell.step_rotation(1.0);
        assert_eq!(cell.rotation(), RotationState::Resting);
        assert_eq!(cell.rotation_target(), None);
    }
}
