use crate::display_format::DisplayFormat;
use crate::location::Location;
use crate::piece::{Color, Piece, PieceKind};
use std::fmt::{Display, Formatter};

/// The 10x9 grid. Cells own their pieces; every accessor is total over
/// arbitrary locations, with everything off the grid reading as empty.
#[derive(Clone)]
pub struct Board {
    pieces: Vec<Option<Piece>>,
}

impl Board {
    pub const WIDTH: i8 = 9;
    pub const HEIGHT: i8 = 10;

    const OPENING: &'static str = "rheakaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAKAEHR";

    pub fn new() -> Self {
        Self {
            pieces: vec![None; (Self::WIDTH * Self::HEIGHT) as usize],
        }
    }

    /// Reads a placement in FEN notation, ranks listed from row 10 down to row 1.
    pub fn from_fen(fen: &str) -> Option<Self> {
        let mut board = Self::new();
        let mut row = Self::HEIGHT;
        let mut col = 1;

        for current in fen.chars() {
            match current {
                ' ' => break,
                '/' => {
                    if col != Self::WIDTH + 1 || row == 1 {
                        return None;
                    }
                    col = 1;
                    row -= 1;
                }
                '0'..='9' => col += current.to_digit(10).unwrap() as i8,
                _ => {
                    let piece = Piece::from_fen_char(current)?;
                    let location = Location::new(row, col);
                    if !location.is_valid() {
                        return None;
                    }
                    board.set(location, piece);
                    col += 1;
                }
            }
        }

        (row == 1 && col == Self::WIDTH + 1).then_some(board)
    }

    pub fn opening() -> Self {
        Self::from_fen(Self::OPENING).unwrap()
    }

    pub fn fen(&self) -> String {
        let mut result = String::new();

        for row in (1..=Self::HEIGHT).rev() {
            let mut empty = 0;

            for col in 1..=Self::WIDTH {
                match self.get(Location::new(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            result.push(char::from_digit(empty, 10).unwrap());
                            empty = 0;
                        }
                        result.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                result.push(char::from_digit(empty, 10).unwrap());
            }
            if row > 1 {
                result.push('/');
            }
        }

        result
    }

    pub fn clear(&mut self) {
        self.pieces.fill(None);
    }

    pub fn get(&self, location: Location) -> Option<Piece> {
        location.index().and_then(|index| self.pieces[index])
    }

    pub fn set(&mut self, location: Location, piece: Piece) {
        if let Some(index) = location.index() {
            self.pieces[index] = Some(piece);
        }
    }

    pub fn take(&mut self, location: Location) -> Option<Piece> {
        location.index().and_then(|index| self.pieces[index].take())
    }

    pub fn is_empty(&self, location: Location) -> bool {
        self.get(location).is_none()
    }

    pub fn is_path_clear(&self, from: Location, to: Location) -> bool {
        self.count_between(from, to) == 0
    }

    /// Occupied cells strictly between the endpoints, walking one unit step
    /// per axis toward `to`. Callers guarantee the endpoints lie on a rank,
    /// file, or exact diagonal; the walk stops at the board edge so an
    /// irregular delta terminates.
    pub fn count_between(&self, from: Location, to: Location) -> u32 {
        let row_step = (to.row() - from.row()).signum();
        let col_step = (to.col() - from.col()).signum();

        let mut count = 0;
        let mut current = from.shift(row_step, col_step);

        while current != to && current.is_valid() {
            if !self.is_empty(current) {
                count += 1;
            }
            current = current.shift(row_step, col_step);
        }

        count
    }

    pub fn iter(&self) -> impl Iterator<Item = (Location, Piece)> + '_ {
        self.pieces.iter().enumerate().filter_map(|(index, piece)| {
            let row = index as i8 / Self::WIDTH + 1;
            let col = index as i8 % Self::WIDTH + 1;
            piece.map(|piece| (Location::new(row, col), piece))
        })
    }

    pub fn find_general(&self, color: Color) -> Option<Location> {
        self.iter()
            .find(|&(_, piece)| piece.kind() == PieceKind::General && piece.color() == color)
            .map(|(location, _)| location)
    }

    pub fn display(&self, format: DisplayFormat) -> impl Display {
        struct Impl<'a>(&'a Board, DisplayFormat);
        return Impl(self, format);

        impl Display for Impl<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                let &Self(board, format) = self;

                for row in (1..=Board::HEIGHT).rev() {
                    write!(f, "{row:2}")?;
                    for col in 1..=Board::WIDTH {
                        if let Some(piece) = board.get(Location::new(row, col)) {
                            write!(f, " {}", piece.display(format))?;
                        } else {
                            write!(f, "  ·")?;
                        }
                    }
                    writeln!(f)?;
                }

                write!(f, "  ")?;
                for col in 1..=Board::WIDTH {
                    write!(f, "  {col}")?;
                }
                writeln!(f)
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(DisplayFormat::plain()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(kind: PieceKind, color: Color) -> Piece {
        Piece::from_kind(kind, color)
    }

    #[test]
    fn accessors_are_total_off_the_grid() {
        let mut board = Board::new();
        let outside = Location::new(0, 12);

        assert_eq!(board.get(outside), None);
        assert!(board.is_empty(outside));

        board.set(outside, piece(PieceKind::Rook, Color::Red));
        assert!(board.iter().next().is_none());
        assert_eq!(board.take(outside), None);
    }

    #[test]
    fn set_discards_previous_occupant() {
        let mut board = Board::new();
        let at = Location::new(5, 5);

        board.set(at, piece(PieceKind::Rook, Color::Red));
        board.set(at, piece(PieceKind::Horse, Color::Black));

        let occupant = board.get(at).unwrap();
        assert_eq!(occupant.kind(), PieceKind::Horse);
        assert_eq!(board.iter().count(), 1);
    }

    #[test]
    fn take_transfers_ownership() {
        let mut board = Board::new();
        let at = Location::new(2, 4);
        board.set(at, piece(PieceKind::Guard, Color::Red));

        let taken = board.take(at).unwrap();
        assert_eq!(taken.kind(), PieceKind::Guard);
        assert!(board.is_empty(at));
        assert_eq!(board.take(at), None);
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut board = Board::opening();
        board.clear();
        assert_eq!(board.iter().count(), 0);
        board.clear();
        assert_eq!(board.iter().count(), 0);
    }

    #[test]
    fn path_walk_excludes_endpoints() {
        let mut board = Board::new();
        board.set(Location::new(4, 1), piece(PieceKind::Rook, Color::Red));
        board.set(Location::new(4, 9), piece(PieceKind::Rook, Color::Black));

        assert!(board.is_path_clear(Location::new(4, 1), Location::new(4, 9)));

        board.set(Location::new(4, 5), piece(PieceKind::Soldier, Color::Black));
        assert!(!board.is_path_clear(Location::new(4, 1), Location::new(4, 9)));
        assert_eq!(board.count_between(Location::new(4, 1), Location::new(4, 9)), 1);
        assert_eq!(board.count_between(Location::new(4, 9), Location::new(4, 1)), 1);
    }

    #[test]
    fn path_walk_handles_verticals_and_diagonals() {
        let mut board = Board::new();
        board.set(Location::new(5, 5), piece(PieceKind::Cannon, Color::Red));

        assert_eq!(board.count_between(Location::new(1, 5), Location::new(10, 5)), 1);
        assert_eq!(board.count_between(Location::new(4, 4), Location::new(6, 6)), 1);
        assert_eq!(board.count_between(Location::new(5, 4), Location::new(5, 6)), 0);
        // adjacent endpoints have nothing between them
        assert_eq!(board.count_between(Location::new(5, 4), Location::new(5, 5)), 0);
    }

    #[test]
    fn opening_layout_places_all_pieces() {
        let board = Board::opening();
        assert_eq!(board.iter().count(), 32);
        assert_eq!(board.find_general(Color::Red), Some(Location::new(1, 5)));
        assert_eq!(board.find_general(Color::Black), Some(Location::new(10, 5)));
        assert_eq!(board.fen(), Board::OPENING);
    }

    #[test]
    fn malformed_fen_is_rejected() {
        assert!(Board::from_fen("rheakaehr").is_none());
        assert!(Board::from_fen("rheakaehr/9/9/9/9/9/9/9/9/9/9").is_none());
        assert!(Board::from_fen("rheakaehrr/9/9/9/9/9/9/9/9/9").is_none());
        assert!(Board::from_fen("zheakaehr/9/9/9/9/9/9/9/9/RHEAKAEHR").is_none());
    }
}
