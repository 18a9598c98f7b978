use super::{board::Board, types::Coord};

#[must_use]
pub const fn manhattan_distance(a: Coord, b: Coord) -> i64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Manhattan distance that may take the short way round a wrapping board.
#[must_use]
pub const fn toroidal_distance(board: &Board, a: Coord, b: Coord) -> i64 {
    if !board.wrapping {
        return manhattan_distance(a, b);
    }
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    min(dx, board.width - dx) + min(dy, board.height - dy)
}

const fn min(a: i64, b: i64) -> i64 {
    if a < b {
        a
    } else {
        b
    }
}
