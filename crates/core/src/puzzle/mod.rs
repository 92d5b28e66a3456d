mod cell;
mod cursor;

pub use self::{cell::*, cursor::*};

use crate::{
    config::PuzzleConfig,
    grid::{HexPoint, HexPointIndexMap},
    timed, unwrap, util,
};
use anyhow::{anyhow, Context};
use fnv::FnvBuildHasher;
use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::cmp;
use validator::Validate;

/// The three coordinates participating in one swap animation, in cyclic
/// order: the cell at position 1 travels to position 0's slot, position 2 to
/// position 1's, and position 0 to position 2's.
pub type RotationTriple = [HexPoint; 3];

/// The puzzle grid: owns every cell, keyed by coordinate, plus the single
/// active rotation (if any).
///
/// At most one rotation is in flight map-wide. While one is active, exactly
/// the three cells of the rotation triple are in the
/// [Rotating](RotationState::Rotating) state; at every other time, no cell
/// is. The map advances rotation time via [Self::step_rotation] and commits
/// the three-way content swap when all participants finish, so a renderer
/// querying between steps can never observe a partially-swapped grid.
#[derive(Clone, Debug)]
pub struct HexMap {
    /// The config used to generate this grid. Generation is deterministic
    /// based on the config, and once the grid has been generated, the config
    /// can never change.
    config: PuzzleConfig,

    /// The cells that make up this grid, keyed by their position. Insertion
    /// (= generation) order, so iteration is deterministic.
    cells: HexPointIndexMap<Cell>,

    /// The active rotation, if any
    rotation: Option<RotationTriple>,
}

impl HexMap {
    /// Generate a new grid with the given config: one randomly-colored cell
    /// for every coordinate within `config.radius` steps of the origin.
    /// Returns an error if the config is invalid.
    pub fn generate(config: PuzzleConfig) -> anyhow::Result<Self> {
        info!("Generating hex map with config {:?}", config);
        config.validate().context("invalid config")?;

        let mut rng = Pcg64::seed_from_u64(config.seed);
        let cells = timed!("Grid generation", log::Level::Info, {
            let capacity = util::map_len(config.radius);
            let mut cells = HexPointIndexMap::with_capacity_and_hasher(
                capacity,
                FnvBuildHasher::default(),
            );

            let radius = config.radius as i16;
            for q in -radius..=radius {
                // If we just did [-radius, radius] for r as well, we'd end up
                // with a diamond instead of a super hexagon
                // https://www.redblobgames.com/grids/hexagons/#range
                let r_min = cmp::max(-radius, -q - radius);
                let r_max = cmp::min(radius, -q + radius);
                for r in r_min..=r_max {
                    cells.insert(HexPoint::new_qr(q, r), Cell::new(&mut rng));
                }
            }

            debug_assert_eq!(cells.len(), capacity, "expected 3r²+3r+1 cells");
            cells
        });

        info!("Initialized grid with {} cells", cells.len());
        Ok(Self {
            config,
            cells,
            rotation: None,
        })
    }

    /// Get a reference to the config this grid was generated from
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Get a reference to the map of cells that make up this grid
    pub fn cells(&self) -> &HexPointIndexMap<Cell> {
        &self.cells
    }

    /// Look up the cell at the given coordinate. Panics if the coordinate is
    /// not in the grid; callers must only query coordinates known to exist
    /// (use [Self::get_cell] otherwise).
    pub fn cell(&self, pos: HexPoint) -> &Cell {
        unwrap!(self.cells.get(&pos), "no cell at {}", pos)
    }

    /// Look up the cell at the given coordinate, if present
    pub fn get_cell(&self, pos: HexPoint) -> Option<&Cell> {
        self.cells.get(&pos)
    }

    /// Insert a cell at the given coordinate. The caller guarantees the
    /// coordinate isn't already occupied.
    pub fn insert(&mut self, pos: HexPoint, cell: Cell) {
        self.cells.insert(pos, cell);
    }

    /// Is a rotation currently in flight?
    pub fn has_rotation(&self) -> bool {
        self.rotation.is_some()
    }

    /// The triple participating in the active rotation, if any
    pub fn rotation(&self) -> Option<&RotationTriple> {
        self.rotation.as_ref()
    }

    /// Start a rotation of the three given cells. If a rotation is already in
    /// flight this is a silent no-op (the caller is expected to guard with
    /// [Self::has_rotation]). Returns an error if any of the coordinates is
    /// not in the grid.
    ///
    /// Each participating cell is told the *coordinate* it is animating
    /// toward, one step around the triangle, so the contents travel a single
    /// cyclic permutation.
    pub fn start_rotation(&mut self, hexes: RotationTriple) -> anyhow::Result<()> {
        if self.rotation.is_some() {
            return Ok(());
        }
        for pos in &hexes {
            if !self.cells.contains_key(pos) {
                return Err(anyhow!("cannot start rotation: no cell at {}", pos));
            }
        }

        let [h0, h1, h2] = hexes;
        unwrap!(self.cells.get_mut(&h1), "no cell at {}", h1).start_rotation(h0);
        unwrap!(self.cells.get_mut(&h2), "no cell at {}", h2).start_rotation(h1);
        unwrap!(self.cells.get_mut(&h0), "no cell at {}", h0).start_rotation(h2);
        self.rotation = Some(hexes);
        Ok(())
    }

    /// Advance the active rotation by the given time delta. No-op if no
    /// rotation is in flight. Once every participating cell reports done, the
    /// rotation commits: the three cells' contents are permanently exchanged
    /// along the cycle and the rotation is cleared.
    pub fn step_rotation(&mut self, dt: f64) {
        let hexes = match self.rotation {
            Some(hexes) => hexes,
            None => return,
        };

        for pos in &hexes {
            unwrap!(self.cells.get_mut(pos), "no cell at {}", pos)
                .step_rotation(dt);
        }

        if hexes.iter().all(|&pos| self.cell(pos).rotation_done()) {
            self.commit_rotation(hexes);
        }
    }

    /// Permanently exchange the contents of the three participating slots.
    /// Each cell lands on the coordinate it was animating toward (the target
    /// travels with the cell, not the slot). The whole permutation is applied
    /// within one call, between two frames, so no reader can observe a
    /// partially-committed swap.
    fn commit_rotation(&mut self, hexes: RotationTriple) {
        let moved: Vec<(HexPoint, Cell)> = hexes
            .iter()
            .map(|&pos| {
                let mut cell = self.cell(pos).clone();
                let target = unwrap!(
                    cell.rotation_target(),
                    "cell at {} is in the active rotation but has no target",
                    pos
                );
                cell.reset_rotation();
                (target, cell)
            })
            .collect();
        // Re-keying existing slots; IndexMap keeps their positions stable
        for (pos, cell) in moved {
            self.cells.insert(pos, cell);
        }
        self.rotation = None;

        debug_assert_eq!(
            self.cells.values().filter(|cell| cell.is_rotating()).count(),
            0,
            "rotation state leaked past commit"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color3;

    fn test_map(radius: u16) -> HexMap {
        HexMap::generate(PuzzleConfig {
            seed: 12345,
            radius,
        })
        .unwrap()
    }

    /// A triple around the origin: the cursor shape at anchor (0, 0, 0)
    fn origin_triple() -> RotationTriple {
        Cursor::new(HexPoint::ORIGIN).hexes()
    }

    fn colors_at(map: &HexMap, hexes: &RotationTriple) -> Vec<Color3> {
        hexes.iter().map(|&pos| map.cell(pos).color()).collect()
    }

    #[test]
    fn test_generate_radius_0() {
        let map = test_map(0);
        assert_eq!(map.cells().len(), 1);
        assert!(map.get_cell(HexPoint::ORIGIN).is_some());
    }

    #[test]
    fn test_generate_radius_1() {
        let map = test_map(1);
        assert_eq!(map.cells().len(), 7);
        assert!(map.get_cell(HexPoint::ORIGIN).is_some());
        for neighbor in HexPoint::ORIGIN.adjacents() {
            assert!(map.get_cell(neighbor).is_some());
        }
    }

    #[test]
    fn test_generate_deterministic() {
        let map1 = test_map(3);
        let map2 = test_map(3);
        for (pos, cell) in map1.cells() {
            assert_eq!(cell.color(), map2.cell(*pos).color());
        }
    }

    #[test]
    fn test_generate_invalid_config() {
        let result = HexMap::generate(PuzzleConfig {
            seed: 0,
            radius: 1001,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_start_rotation_missing_cell() {
        // Radius 0 has only the origin, so the cursor triple is mostly
        // off-map
        let mut map = test_map(0);
        assert!(map.start_rotation(origin_triple()).is_err());
        assert!(!map.has_rotation());
        assert!(map.cell(HexPoint::ORIGIN).rotation_done());
    }

    #[test]
    fn test_start_rotation_assigns_cyclic_targets() {
        let mut map = test_map(2);
        let hexes = origin_triple();
        map.start_rotation(hexes).unwrap();

        assert!(map.has_rotation());
        assert_eq!(map.rotation(), Some(&hexes));
        // Contents travel one step around the triangle
        assert_eq!(map.cell(hexes[1]).rotation_target(), Some(hexes[0]));
        assert_eq!(map.cell(hexes[2]).rotation_target(), Some(hexes[1]));
        assert_eq!(map.cell(hexes[0]).rotation_target(), Some(hexes[2]));

        // Exactly three cells are rotating
        let rotating = map
            .cells()
            .values()
            .filter(|cell| cell.is_rotating())
            .count();
        assert_eq!(rotating, 3);
    }

    #[test]
    fn test_start_rotation_noop_while_active() {
        let mut map = test_map(3);
        let hexes = origin_triple();
        map.start_rotation(hexes).unwrap();
        map.step_rotation(0.1);

        // A second start (even on a different triple) changes nothing
        let other = Cursor::new(HexPoint::new_qr(1, 0)).hexes();
        map.start_rotation(other).unwrap();
        assert_eq!(map.rotation(), Some(&hexes));
        assert!(!map.cell(other[2]).is_rotating());
    }

    #[test]
    fn test_step_rotation_noop_without_rotation() {
        let mut map = test_map(1);
        let before = colors_at(&map, &origin_triple());
        map.step_rotation(1.0);
        assert!(!map.has_rotation());
        assert_eq!(colors_at(&map, &origin_triple()), before);
    }

    #[test]
    fn test_rotation_commits_once_and_permutes_colors() {
        let mut map = test_map(2);
        let hexes = origin_triple();
        let before = colors_at(&map, &hexes);

        map.start_rotation(hexes).unwrap();

        // 0.1 time units per step at 4x speed: done after 3 steps
        map.step_rotation(0.1);
        assert!(map.has_rotation());
        map.step_rotation(0.1);
        assert!(map.has_rotation());
        map.step_rotation(0.1);

        // Committed: rotation cleared, every cell resting
        assert!(!map.has_rotation());
        for &pos in &hexes {
            assert!(!map.cell(pos).is_rotating());
            assert_eq!(map.cell(pos).rotation_target(), None);
        }

        // Contents moved exactly one step around the cycle: slot 0 now holds
        // what slot 1 held, and so on
        let after = colors_at(&map, &hexes);
        assert_eq!(after[0], before[1]);
        assert_eq!(after[1], before[2]);
        assert_eq!(after[2], before[0]);

        // Stepping again is a no-op, not a second commit
        map.step_rotation(1.0);
        assert_eq!(colors_at(&map, &hexes), after);
    }

    #[test]
    fn test_rotation_color_multiset_preserved() {
        let mut map = test_map(2);
        let hexes = origin_triple();
        let mut before = colors_at(&map, &hexes)
            .iter()
            .map(|color| color.to_html())
            .collect::<Vec<_>>();
        before.sort();

        map.start_rotation(hexes).unwrap();
        map.step_rotation(1.0);

        let mut after = colors_at(&map, &hexes)
            .iter()
            .map(|color| color.to_html())
            .collect::<Vec<_>>();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_three_rotations_restore_original_layout() {
        let mut map = test_map(2);
        let hexes = origin_triple();
        let before = colors_at(&map, &hexes);

        for _ in 0..3 {
            map.start_rotation(hexes).unwrap();
            map.step_rotation(0.25);
            assert!(!map.has_rotation());
        }

        assert_eq!(colors_at(&map, &hexes), before);
    }
}
