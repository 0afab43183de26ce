use crate::board::Board;
use crate::display_format::DisplayFormat;
use crate::location::Location;
use crate::piece::{Color, PieceKind};
use crate::rules;
use log::debug;
use std::fmt::{Display, Formatter};

/// One game session: the board it owns plus the side to move. Sessions are
/// independent; serving many games means one `Game` per session.
pub struct Game {
    board: Board,
    turn: Color,
}

/// Verdict of one `make_move` call.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct MoveResult {
    pub legal: bool,
    pub game_ended: bool,
    pub winner: Option<Color>,
}

impl MoveResult {
    fn illegal() -> Self {
        Self::default()
    }

    fn legal() -> Self {
        Self {
            legal: true,
            ..Self::default()
        }
    }

    fn won(winner: Color) -> Self {
        Self {
            legal: true,
            game_ended: true,
            winner: Some(winner),
        }
    }
}

impl Game {
    pub fn new(board: Board, turn: Color) -> Self {
        Self { board, turn }
    }

    pub fn opening() -> Self {
        Self::new(Board::opening(), Color::Red)
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Color::Red;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    /// Evaluates the move request as an ordered chain of rules and, when every
    /// rule passes, executes it: the piece relocates, any capture is
    /// discarded, and the turn flips. Capturing a general ends the game.
    /// Rejections are ordinary verdicts; nothing here fails.
    pub fn make_move(&mut self, from: Location, to: Location) -> MoveResult {
        let Some(piece) = self.board.get(from) else {
            debug!("rejected {from}{to}: no piece at origin");
            return MoveResult::illegal();
        };

        if piece.color() != self.turn {
            debug!("rejected {from}{to}: not {}'s piece", self.turn);
            return MoveResult::illegal();
        }

        if !rules::is_valid_move(piece, from, to) {
            debug!("rejected {from}{to}: shape");
            return MoveResult::illegal();
        }

        if !to.is_valid() {
            debug!("rejected {from}{to}: destination off the board");
            return MoveResult::illegal();
        }

        if self.board.get(to).is_some_and(|target| target.color() == piece.color()) {
            debug!("rejected {from}{to}: own piece at destination");
            return MoveResult::illegal();
        }

        if !rules::is_unobstructed(piece, from, to, &self.board) {
            debug!("rejected {from}{to}: obstructed");
            return MoveResult::illegal();
        }

        if piece.kind() == PieceKind::General && self.would_generals_face(from, to) {
            debug!("rejected {from}{to}: generals would face");
            return MoveResult::illegal();
        }

        let capture = self.board.take(to);
        self.board.take(from);
        self.board.set(to, piece);
        self.turn = self.turn.opponent();

        match capture {
            Some(captured) if captured.kind() == PieceKind::General => MoveResult::won(piece.color()),
            _ => MoveResult::legal(),
        }
    }

    /// Whether relocating the general from `from` to `to` would leave the two
    /// generals on one file with nothing between them. Evaluated against the
    /// board as if the move had been applied, without mutating it.
    fn would_generals_face(&self, from: Location, to: Location) -> bool {
        let mover = self.turn;
        let Some(opponent) = self.board.find_general(mover.opponent()) else {
            return false;
        };

        if opponent.col() != to.col() {
            return false;
        }

        let low = to.row().min(opponent.row());
        let high = to.row().max(opponent.row());

        for row in low + 1..high {
            let between = Location::new(row, to.col());
            // the origin square is about to be vacated
            if between == from {
                continue;
            }
            if !self.board.is_empty(between) {
                return false;
            }
        }

        true
    }

    /// Whether `color`'s general is attacked: some opposing piece has a legal
    /// capture of its square. An observation only; legality never consults it.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(general) = self.board.find_general(color) else {
            return false;
        };

        self.board.iter().any(|(location, piece)| {
            piece.color() != color && rules::is_valid_move_with_board(piece, location, general, &self.board)
        })
    }

    pub fn display(&self, format: DisplayFormat) -> impl Display {
        struct Impl<'a>(&'a Game, DisplayFormat);
        return Impl(self, format);

        impl Display for Impl<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                let &Self(game, format) = self;
                writeln!(f, "{}", game.board.fen())?;
                write!(f, "{}", game.board.display(format))?;

                write!(f, "{} to play", game.turn)?;
                if game.is_in_check(game.turn) {
                    write!(f, " - in check")?;
                }
                writeln!(f)
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Board::new(), Color::Red)
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(DisplayFormat::plain()))
    }
}
