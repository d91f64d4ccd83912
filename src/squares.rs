//! Square detection.
//!
//! A color wins when four of its stones form one of four square shapes:
//!
//! - small square: a 2x2 block
//! - large square: the four corners of a 3x3 block
//! - small diamond: the four orthogonal neighbors of a cell
//! - large diamond: the four cells two steps away from a cell along the axes
//!
//! Each shape is a template of four offsets from an anchor. A template is
//! tried at every anchor on the board; anchors where any cell falls off the
//! board never match. For diamonds the anchor is the center, whose own color
//! does not matter.

use crate::board::{Board, Cell, Color, Point};

/// A square template: four offsets relative to an anchor.
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    pub name: &'static str,
    pub offsets: [(isize, isize); 4],
}

/// All square templates, in the order they are checked.
pub static SHAPES: [Shape; 4] = [
    Shape {
        name: "small square",
        offsets: [(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Shape {
        name: "large square",
        offsets: [(0, 0), (2, 0), (0, 2), (2, 2)],
    },
    Shape {
        name: "small diamond",
        offsets: [(-1, 0), (1, 0), (0, -1), (0, 1)],
    },
    Shape {
        name: "large diamond",
        offsets: [(-2, 0), (2, 0), (0, -2), (0, 2)],
    },
];

/// A matched square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub shape: &'static Shape,
    pub anchor: Point,
}

impl Square {
    /// The four cells that make up this square.
    pub fn cells(&self) -> Vec<Point> {
        self.shape
            .offsets
            .iter()
            .filter_map(|&offset| shift(self.anchor, offset))
            .collect()
    }
}

fn shift((x, y): Point, (dx, dy): (isize, isize)) -> Option<Point> {
    Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?))
}

/// Check whether `shape` anchored at `anchor` is fully occupied by `color`.
pub fn shape_at(board: &Board, shape: &Shape, anchor: Point, color: Color) -> bool {
    shape.offsets.iter().all(|&offset| match shift(anchor, offset) {
        Some((x, y)) => board.get(x, y) == Cell::Stone(color),
        None => false,
    })
}

/// Find the first square formed by `color`, trying shapes in [`SHAPES`]
/// order and anchors in row-major order.
pub fn find_square(board: &Board, color: Color) -> Option<Square> {
    let size = board.size();
    for shape in &SHAPES {
        for y in 0..size {
            for x in 0..size {
                if shape_at(board, shape, (x, y), color) {
                    return Some(Square {
                        shape,
                        anchor: (x, y),
                    });
                }
            }
        }
    }
    None
}

/// True when `color` occupies any square on the board.
pub fn has_square(board: &Board, color: Color) -> bool {
    find_square(board, color).is_some()
}
