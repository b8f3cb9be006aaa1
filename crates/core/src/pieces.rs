//! Pieces module - tetromino geometry catalog and placement
//!
//! Each kind is stored with its top-left-most cell at the origin together with its
//! precomputed extents. A [`Tetromino`] carries absolute square coordinates plus a bounding
//! box that is kept in sync on every translation and transform.

use crate::board::Board;
use crate::types::{Color, Coord, PieceKind, COLUMNS, KIND_COUNT, SQUARES_PER_PIECE};

/// Squares of each kind in catalog placement, indexed by [`PieceKind::index`]
const SHAPES: [[(i8, i8); SQUARES_PER_PIECE]; KIND_COUNT] = [
    // Horizontal
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    // LeftCorner
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    // RightCorner
    [(0, 1), (1, 1), (2, 1), (2, 0)],
    // Square
    [(0, 0), (0, 1), (1, 1), (1, 0)],
    // StepUpRight
    [(0, 1), (1, 1), (1, 0), (2, 0)],
    // Pyramid
    [(0, 1), (1, 1), (1, 0), (2, 1)],
    // StepUpLeft
    [(0, 0), (1, 0), (1, 1), (2, 1)],
];

/// Bottom extent of each kind in catalog placement
const BOTTOM: [i8; KIND_COUNT] = [0, 1, 1, 1, 1, 1, 1];

/// Right extent of each kind in catalog placement
const RIGHT: [i8; KIND_COUNT] = [3, 2, 2, 1, 2, 2, 2];

/// Axis-aligned bounding box (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    pub left: i8,
    pub right: i8,
    pub top: i8,
    pub bottom: i8,
}

impl Bounds {
    /// Smallest box containing every square
    pub fn of(squares: &[Coord; SQUARES_PER_PIECE]) -> Self {
        let mut bounds = Bounds {
            left: squares[0].x,
            right: squares[0].x,
            top: squares[0].y,
            bottom: squares[0].y,
        };
        for sq in &squares[1..] {
            bounds.left = bounds.left.min(sq.x);
            bounds.right = bounds.right.max(sq.x);
            bounds.top = bounds.top.min(sq.y);
            bounds.bottom = bounds.bottom.max(sq.y);
        }
        bounds
    }
}

/// Catalog squares of a kind
pub fn catalog_squares(kind: PieceKind) -> [Coord; SQUARES_PER_PIECE] {
    SHAPES[kind.index()].map(|(x, y)| Coord::new(x, y))
}

/// Precomputed catalog extents of a kind
pub fn catalog_bounds(kind: PieceKind) -> Bounds {
    let idx = kind.index();
    Bounds {
        left: 0,
        right: RIGHT[idx],
        top: 0,
        bottom: BOTTOM[idx],
    }
}

/// Kind and color of a piece waiting in the "next" or "held" slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSpec {
    pub kind: PieceKind,
    pub color: Color,
}

impl PieceSpec {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// A tetromino with absolute square positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub color: Color,
    squares: [Coord; SQUARES_PER_PIECE],
    bounds: Bounds,
}

impl Tetromino {
    /// Create a tetromino in its catalog placement (top-left at the origin)
    pub fn new(spec: PieceSpec) -> Self {
        Self {
            kind: spec.kind,
            color: spec.color,
            squares: catalog_squares(spec.kind),
            bounds: catalog_bounds(spec.kind),
        }
    }

    /// Create a tetromino horizontally centered on the top row
    pub fn spawn(spec: PieceSpec) -> Self {
        let mut piece = Self::new(spec);
        let span = piece.bounds.right - piece.bounds.left;
        let dx = (COLUMNS as i8 - 1) / 2 - span / 2;
        piece.translate(dx, 0);
        piece
    }

    pub fn spec(&self) -> PieceSpec {
        PieceSpec::new(self.kind, self.color)
    }

    pub fn squares(&self) -> &[Coord; SQUARES_PER_PIECE] {
        &self.squares
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Move every square by (dx, dy) without any collision check
    pub fn translate(&mut self, dx: i8, dy: i8) {
        for sq in &mut self.squares {
            *sq = sq.offset(dx, dy);
        }
        self.bounds.left += dx;
        self.bounds.right += dx;
        self.bounds.top += dy;
        self.bounds.bottom += dy;
    }

    /// Replace the squares and recompute the bounding box
    pub fn set_squares(&mut self, squares: [Coord; SQUARES_PER_PIECE]) {
        self.squares = squares;
        self.bounds = Bounds::of(&squares);
    }

    /// Check if all squares are on the board and on free cells
    pub fn fits(&self, board: &Board) -> bool {
        self.squares.iter().all(|&sq| board.is_free(sq))
    }

    /// Check if any square lands on an occupied cell
    pub fn overlaps(&self, board: &Board) -> bool {
        self.squares.iter().any(|&sq| board.is_occupied(sq))
    }
}
