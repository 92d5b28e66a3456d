//! This sub-module contains basic types for units that form the hex coordinate
//! system. See the parent module documentation for more info on the coordinate
//! system.

use anyhow::anyhow;
use derive_more::{Add, AddAssign, Display, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// A coordinate referring to a single cell in the hex grid (via its center).
///
/// ## Implementation
///
/// By definition of the coordinate system, every cell center sits on the plane
/// `q + r + s = 0`. As such, this struct only stores `q` and `r` and derives
/// `s` as needed, which both shrinks the memory footprint and makes it
/// impossible to hold an off-plane point. Equality and hashing consequently
/// cover both independent components.
///
/// The components are stored as `i16`s. A grid with a radius of 32k would be
/// ~3 billion cells, so this costs us nothing.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct HexPoint {
    q: i16,
    r: i16,
}

impl HexPoint {
    pub const ORIGIN: Self = Self::new_qr(0, 0);

    /// Construct a new point with the given q and r. Since q+r+s=0 for all
    /// points, s is derived from q & r.
    pub const fn new_qr(q: i16, r: i16) -> Self {
        Self { q, r }
    }

    /// Construct a new point from all three components, validating that they
    /// fall on the plane q+r+s=0. Returns an error for off-plane input.
    pub fn new(q: i16, r: i16, s: i16) -> anyhow::Result<Self> {
        if q + r + s != 0 {
            Err(anyhow!(
                "invalid hex point ({}, {}, {}); must be on the plane q+r+s=0",
                q,
                r,
                s
            ))
        } else {
            Ok(Self::new_qr(q, r))
        }
    }

    pub fn q(self) -> i16 {
        self.q
    }

    pub fn r(self) -> i16 {
        self.r
    }

    pub fn s(self) -> i16 {
        -(self.q + self.r)
    }

    /// Apply a translation vector to this point. Translation can never push a
    /// point off the plane, because valid vectors sum to zero themselves.
    pub fn translate(self, vector: HexVector) -> Self {
        Self::new_qr(self.q + vector.q, self.r + vector.r)
    }

    /// Get the coordinate of the cell adjacent to this one in the given
    /// direction
    pub fn adjacent(self, direction: HexDirection) -> Self {
        self.translate(direction.to_vector())
    }

    /// Get an iterator of the coordinates directly adjacent to this one. The
    /// iterator always contains exactly 6 values.
    pub fn adjacents(self) -> impl Iterator<Item = HexPoint> {
        HexDirection::iter().map(move |dir| self.adjacent(dir))
    }

    /// Calculate the path distance between two cells, meaning the number of
    /// single-cell hops it takes to get from one to the other. 0 if the points
    /// are equal, 1 if the cells are adjacent, etc.
    pub fn distance_to(self, other: HexPoint) -> usize {
        // https://www.redblobgames.com/grids/hexagons/#distances
        (((self.q() - other.q()).abs()
            + (self.r() - other.r()).abs()
            + (self.s() - other.s()).abs())
            / 2) as usize
    }
}

/// A translation vector in the hex grid. This is a `(q, r, s)` offset, not a
/// position.
///
/// ## Validation
///
/// Unlike points, hex vectors are not validated on construction. Unit vectors
/// sum to zero, but sums and scalings of arbitrary component values may not,
/// so the plane constraint is re-checked at the point level instead (which
/// [HexPoint::translate] gets for free by deriving `s`).
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Neg,
    Add,
    Sub,
    Mul,
    AddAssign,
    SubAssign,
    MulAssign,
)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s")]
pub struct HexVector {
    pub q: i16,
    pub r: i16,
    pub s: i16,
}

impl HexVector {
    pub const fn new(q: i16, r: i16, s: i16) -> Self {
        Self { q, r, s }
    }
}

/// The 6 directions in which hex cells line up side-to-side, indexed clockwise
/// starting at East. For any given cell, a direction represents both the
/// heading to a neighboring cell's center and the heading to the midpoint of
/// the shared side.
///
/// Names follow screen space with `y` growing downward (the usual convention
/// for pixel output), so on screen `SouthEast` points up-right and `NorthWest`
/// points down-left.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
    NorthEast,
}

impl HexDirection {
    /// All six directions in clockwise order, starting from East.
    pub const CLOCKWISE: &'static [Self] = &[
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
        Self::NorthEast,
    ];

    /// Get a vector offset that would move a point one cell in this direction
    pub fn to_vector(self) -> HexVector {
        match self {
            Self::East => HexVector::new(1, 0, -1),
            Self::SouthEast => HexVector::new(1, -1, 0),
            Self::SouthWest => HexVector::new(0, -1, 1),
            Self::West => HexVector::new(-1, 0, 1),
            Self::NorthWest => HexVector::new(-1, 1, 0),
            Self::NorthEast => HexVector::new(0, 1, -1),
        }
    }

    /// Get the index of this direction within the clockwise ordering
    pub fn clockwise_index(self) -> usize {
        Self::CLOCKWISE.iter().position(|dir| self == *dir).unwrap()
    }

    /// Get the direction directly opposite this one
    pub fn opposite(self) -> Self {
        let clockwise = Self::CLOCKWISE;
        clockwise[(self.clockwise_index() + clockwise.len() / 2) % clockwise.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::HexPointSet;

    #[test]
    fn test_new_validates_plane() {
        assert_eq!(
            HexPoint::new(2, 2, -4).unwrap(),
            HexPoint::new_qr(2, 2)
        );
        assert!(HexPoint::new(1, 1, 1).is_err());
        assert!(HexPoint::new(0, 1, 0).is_err());
    }

    #[test]
    fn test_distance_to() {
        let p0 = HexPoint::ORIGIN;
        let p1 = HexPoint::new_qr(-1, 1);
        let p2 = HexPoint::new_qr(2, -1);
        let p3 = HexPoint::new_qr(2, -3);

        assert_eq!(p0.distance_to(p0), 0);
        assert_eq!(p3.distance_to(p3), 0);

        assert_eq!(p0.distance_to(p1), 1);
        assert_eq!(p0.distance_to(p2), 2);
        assert_eq!(p0.distance_to(p3), 3);

        // Distance is symmetric
        assert_eq!(p1.distance_to(p2), 3);
        assert_eq!(p2.distance_to(p1), 3);
        assert_eq!(p1.distance_to(p3), 4);
        assert_eq!(p3.distance_to(p1), 4);
    }

    #[test]
    fn test_adjacents() {
        let origin = HexPoint::ORIGIN;
        let neighbors: Vec<HexPoint> = origin.adjacents().collect();
        assert_eq!(neighbors.len(), 6);

        // Every neighbor is exactly one step away, and all are distinct
        for neighbor in &neighbors {
            assert_eq!(origin.distance_to(*neighbor), 1);
        }
        let distinct: HexPointSet = neighbors.into_iter().collect();
        assert_eq!(distinct.len(), 6);
    }

    #[test]
    fn test_direction_vectors() {
        // Every unit vector sums to zero and its opposite negates it
        for direction in HexDirection::CLOCKWISE {
            let vector = direction.to_vector();
            assert_eq!(vector.q + vector.r + vector.s, 0);
            assert_eq!(direction.opposite().to_vector(), -vector);
        }
    }
}
