use crate::grid::{HexDirection, HexPoint};

/// A rigid three-cell selection: one anchor cell plus its north-west and
/// north-east neighbors, forming a fixed triangle. The cursor holds only
/// coordinates, never cells, and is independent of any map's content.
///
/// Moving the cursor translates all three coordinates by the same unit
/// vector, which preserves the triangle shape under every sequence of moves
/// (cube-coordinate addition is a pure translation).
#[derive(Copy, Clone, Debug)]
pub struct Cursor {
    hexes: [HexPoint; 3],
}

impl Cursor {
    /// Create a cursor anchored at the given coordinate
    pub fn new(anchor: HexPoint) -> Self {
        Self {
            hexes: [
                anchor,
                anchor.adjacent(HexDirection::NorthWest),
                anchor.adjacent(HexDirection::NorthEast),
            ],
        }
    }

    /// The three selected coordinates: anchor, then its NW and NE neighbors
    pub fn hexes(&self) -> [HexPoint; 3] {
        self.hexes
    }

    pub fn anchor(&self) -> HexPoint {
        self.hexes[0]
    }

    /// Move the selection one cell visually upward. Pointy-top rows are
    /// horizontally offset on alternating parities, so the visually-upward
    /// neighbor depends on the parity of the anchor's r component.
    pub fn move_up(&mut self) {
        if self.anchor().r() % 2 == 0 {
            self.translate(HexDirection::SouthEast);
        } else {
            self.translate(HexDirection::SouthWest);
        }
    }

    /// Move the selection one cell visually downward. See [Self::move_up] for
    /// the parity rule.
    pub fn move_down(&mut self) {
        if self.anchor().r() % 2 == 0 {
            self.translate(HexDirection::NorthEast);
        } else {
            self.translate(HexDirection::NorthWest);
        }
    }

    /// Move the selection one cell left. Unlike the vertical moves, this is
    /// parity-independent.
    pub fn move_left(&mut self) {
        self.translate(HexDirection::West);
    }

    /// Move the selection one cell right. Unlike the vertical moves, this is
    /// parity-independent.
    pub fn move_right(&mut self) {
        self.translate(HexDirection::East);
    }

    /// Translate all three coordinates one step in the given direction
    pub fn translate(&mut self, direction: HexDirection) {
        for hex in &mut self.hexes {
            *hex = hex.adjacent(direction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The triangle shape must survive any sequence of moves: hexes[1] and
    /// hexes[2] stay the NW/NE neighbors of the anchor.
    fn assert_shape(cursor: &Cursor) {
        let [anchor, nw, ne] = cursor.hexes();
        assert_eq!(nw, anchor.adjacent(HexDirection::NorthWest));
        assert_eq!(ne, anchor.adjacent(HexDirection::NorthEast));
    }

    #[test]
    fn test_shape_invariant() {
        let mut cursor = Cursor::new(HexPoint::ORIGIN);
        assert_shape(&cursor);

        cursor.move_up();
        assert_shape(&cursor);
        cursor.move_up();
        assert_shape(&cursor);
        cursor.move_left();
        assert_shape(&cursor);
        cursor.move_down();
        assert_shape(&cursor);
        cursor.move_right();
        assert_shape(&cursor);
        cursor.move_down();
        assert_shape(&cursor);
    }

    #[test]
    fn test_horizontal_round_trip() {
        let seed = HexPoint::new(2, 2, -4).unwrap();
        let mut cursor = Cursor::new(seed);

        cursor.move_right();
        assert_eq!(cursor.anchor(), HexPoint::new(3, 2, -5).unwrap());

        cursor.move_left();
        assert_eq!(cursor.anchor(), seed);
    }

    #[test]
    fn test_vertical_parity_mapping() {
        // Even row: up steps SouthEast
        let mut cursor = Cursor::new(HexPoint::new_qr(0, 0));
        cursor.move_up();
        assert_eq!(cursor.anchor(), HexPoint::new_qr(1, -1));

        // Now on an odd row: up steps SouthWest
        cursor.move_up();
        assert_eq!(cursor.anchor(), HexPoint::new_qr(1, -2));

        // Back down reverses through the same parities
        cursor.move_down();
        assert_eq!(cursor.anchor(), HexPoint::new_qr(1, -1));
        cursor.move_down();
        assert_eq!(cursor.anchor(), HexPoint::new_qr(0, 0));
    }
}
