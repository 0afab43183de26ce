//! The movement rule table. Shape predicates are pure geometry over
//! (from, to, kind, color); the obstruction layer consults the board for the
//! kinds whose legality depends on intervening pieces.

use crate::board::Board;
use crate::location::Location;
use crate::piece::{Color, Piece, PieceKind};

/// Pure shape test with no board awareness.
pub fn is_valid_move(piece: Piece, from: Location, to: Location) -> bool {
    match piece.kind() {
        PieceKind::General => general_move(piece.color(), from, to),
        PieceKind::Guard => guard_move(piece.color(), from, to),
        PieceKind::Rook | PieceKind::Cannon => straight_move(from, to),
        PieceKind::Horse => horse_move(from, to),
        PieceKind::Elephant => elephant_move(piece.color(), from, to),
        PieceKind::Soldier => soldier_move(piece.color(), from, to),
    }
}

/// The board-dependent layer alone: path clearance for the rook, the screen
/// count for the cannon, the leg for the horse, the eye for the elephant.
/// Kinds whose legality never depends on obstruction always pass.
pub fn is_unobstructed(piece: Piece, from: Location, to: Location, board: &Board) -> bool {
    match piece.kind() {
        PieceKind::Rook => board.is_path_clear(from, to),
        PieceKind::Cannon => {
            let screens = board.count_between(from, to);
            if board.is_empty(to) { screens == 0 } else { screens == 1 }
        }
        PieceKind::Horse => board.is_empty(horse_leg(from, to)),
        PieceKind::Elephant => board.is_empty(elephant_eye(from, to)),
        PieceKind::General | PieceKind::Guard | PieceKind::Soldier => true,
    }
}

/// Shape and obstruction layered together.
pub fn is_valid_move_with_board(piece: Piece, from: Location, to: Location, board: &Board) -> bool {
    is_valid_move(piece, from, to) && is_unobstructed(piece, from, to, board)
}

pub fn in_palace(color: Color, location: Location) -> bool {
    let rows = match color {
        Color::Red => 1..=3,
        Color::Black => 8..=10,
    };
    rows.contains(&location.row()) && (4..=6).contains(&location.col())
}

pub fn has_crossed_river(color: Color, location: Location) -> bool {
    match color {
        Color::Red => location.row() >= 6,
        Color::Black => location.row() <= 5,
    }
}

/// The cell a horse jump pivots over, one step from `from` along the long axis.
pub fn horse_leg(from: Location, to: Location) -> Location {
    let row_diff = to.row() - from.row();
    let col_diff = to.col() - from.col();

    if row_diff.abs() == 2 {
        from.shift(row_diff.signum(), 0)
    } else {
        from.shift(0, col_diff.signum())
    }
}

/// The diagonal midpoint of an elephant move.
pub fn elephant_eye(from: Location, to: Location) -> Location {
    Location::new((from.row() + to.row()) / 2, (from.col() + to.col()) / 2)
}

fn general_move(color: Color, from: Location, to: Location) -> bool {
    if !in_palace(color, from) || !in_palace(color, to) {
        return false;
    }

    let row_diff = (to.row() - from.row()).abs();
    let col_diff = (to.col() - from.col()).abs();
    row_diff + col_diff == 1
}

fn guard_move(color: Color, from: Location, to: Location) -> bool {
    if !in_palace(color, from) || !in_palace(color, to) {
        return false;
    }

    (to.row() - from.row()).abs() == 1 && (to.col() - from.col()).abs() == 1
}

fn straight_move(from: Location, to: Location) -> bool {
    // same rank or same file, nonzero displacement
    (from.row() == to.row()) != (from.col() == to.col())
}

fn horse_move(from: Location, to: Location) -> bool {
    let row_diff = (to.row() - from.row()).abs();
    let col_diff = (to.col() - from.col()).abs();
    (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2)
}

fn elephant_move(color: Color, from: Location, to: Location) -> bool {
    let row_diff = (to.row() - from.row()).abs();
    let col_diff = (to.col() - from.col()).abs();

    if row_diff != 2 || col_diff != 2 {
        return false;
    }

    // elephants never cross the river
    match color {
        Color::Red => to.row() <= 5,
        Color::Black => to.row() >= 6,
    }
}

fn soldier_move(color: Color, from: Location, to: Location) -> bool {
    let row_diff = to.row() - from.row();
    let col_diff = to.col() - from.col();
    let forward = match color {
        Color::Red => 1,
        Color::Black => -1,
    };

    if row_diff.abs() + col_diff.abs() != 1 {
        return false;
    }
    if row_diff == forward {
        return true;
    }

    // sideways opens up after crossing the river, judged at the origin;
    // backward stays illegal forever
    row_diff == 0 && has_crossed_river(color, from)
}
