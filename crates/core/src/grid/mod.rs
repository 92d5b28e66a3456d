//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate System
//!
//! Hexspin uses the [cube coordinate system defined by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube). Each
//! coordinate has three components (`q`, `r`, and `s`), and for every cell in
//! the grid all three are integers with **`q + r + s = 0`**. Even though the
//! grid is laid out in two dimensions, the three-component form makes the math
//! around distances, neighbors and translations much simpler. Because `s` is
//! fully determined by the other two components, equality and hashing only
//! need to consider `(q, r)`.
//!
//! ## Screen Space
//!
//! Screen space is the flat 2D pixel plane the grid is drawn onto. The grid
//! uses a pointy-top layout, so moving `+q` steps right on screen and moving
//! `+r` steps down-right, with alternating rows offset by half a cell. The
//! conversion from grid space to screen space lives in [crate::render]; the
//! one place that layout choice leaks back into grid logic is the cursor's
//! row-parity direction mapping (see [crate::puzzle::Cursor]).

mod data_structure;
mod unit;

pub use self::{data_structure::*, unit::*};
