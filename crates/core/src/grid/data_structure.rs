use crate::grid::HexPoint;
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use std::collections::HashSet;

/// A set of hex points
pub type HexPointSet = HashSet<HexPoint, FnvBuildHasher>;
/// An ORDERED map of hex points to some `T`. This has some extra memory
/// overhead, so we should only use it when we actually need the ordering. The
/// cell map uses it so that frame iteration order is deterministic.
pub type HexPointIndexMap<T> = IndexMap<HexPoint, T, FnvBuildHasher>;
