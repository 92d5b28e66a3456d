//! Hexspin is the core of an interactive hexagonal-grid rotation puzzle: a
//! pointy-top hex grid of colored cells, a three-cell cursor, and a smoothly
//! animated 120° rotation of the cells the cursor covers. This crate contains
//! all the grid, cursor, and animation logic. Presentation layers (window,
//! input polling, draw calls) are implemented elsewhere; they drive the core
//! once per frame with a delta-time and read back cell positions and colors
//! to paint.
//!
//! ```
//! use hexspin::{Cursor, HexMap, HexPoint, PuzzleConfig};
//!
//! let config = PuzzleConfig { seed: 123, radius: 5 };
//! let mut map = HexMap::generate(config).unwrap();
//! assert_eq!(map.cells().len(), 91);
//!
//! // Select three cells and rotate them
//! let cursor = Cursor::new(HexPoint::new(2, 2, -4).unwrap());
//! map.start_rotation(cursor.hexes()).unwrap();
//! while map.has_rotation() {
//!     map.step_rotation(1.0 / 60.0); // normally the frame delta-time
//! }
//! ```
//!
//! See [PuzzleConfig] for grid generation options and
//! [GridRenderer](crate::render::GridRenderer) for converting grid state into
//! screen-space positions each frame.

mod config;
pub mod grid;
pub mod puzzle;
pub mod render;
mod util;

pub use crate::{
    config::PuzzleConfig,
    grid::{HexDirection, HexPoint, HexVector},
    puzzle::{Cell, Cursor, HexMap, RotationState, RotationTriple},
    render::{Color3, GridRenderer, Point2, RenderConfig},
};
