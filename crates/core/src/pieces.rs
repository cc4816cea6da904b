//! Pieces module - the fixed shape catalog
//!
//! Each kind has one immutable template; there is no rotation in this rule set.
//! A template is a small boolean matrix whose filled cells are also available
//! as `(dx, dy)` offsets from the top-left anchor.

use crate::types::PieceKind;

/// Number of filled cells in every template.
pub const MINO_COUNT: usize = 4;

/// An immutable shape template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    width: u8,
    height: u8,
    minos: [(i8, i8); MINO_COUNT],
}

impl Shape {
    /// Columns spanned by the bounding box
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Rows spanned by the bounding box
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Filled cells as offsets from the top-left anchor, row-major order
    pub fn minos(&self) -> &[(i8, i8); MINO_COUNT] {
        &self.minos
    }

    /// Matrix lookup; cells outside the bounding box are unfilled.
    pub fn is_filled(&self, dx: i8, dy: i8) -> bool {
        self.minos.contains(&(dx, dy))
    }

    /// Row index of the lowest filled cell.
    pub fn bottom(&self) -> i8 {
        self.height as i8 - 1
    }
}

// [[1, 1, 1, 1]]
const I_SHAPE: Shape = Shape {
    width: 4,
    height: 1,
    minos: [(0, 0), (1, 0), (2, 0), (3, 0)],
};

// [[1, 1],
//  [1, 1]]
const O_SHAPE: Shape = Shape {
    width: 2,
    height: 2,
    minos: [(0, 0), (1, 0), (0, 1), (1, 1)],
};

// [[0, 1, 0],
//  [1, 1, 1]]
const T_SHAPE: Shape = Shape {
    width: 3,
    height: 2,
    minos: [(1, 0), (0, 1), (1, 1), (2, 1)],
};

// [[1, 0],
//  [1, 0],
//  [1, 1]]
const L_SHAPE: Shape = Shape {
    width: 2,
    height: 3,
    minos: [(0, 0), (0, 1), (0, 2), (1, 2)],
};

/// Get the template for a piece kind
pub fn get_shape(kind: PieceKind) -> &'static Shape {
    match kind {
        PieceKind::I => &I_SHAPE,
        PieceKind::O => &O_SHAPE,
        PieceKind::T => &T_SHAPE,
        PieceKind::L => &L_SHAPE,
    }
}
