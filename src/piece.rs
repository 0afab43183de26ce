use crate::display_format::DisplayFormat;
use std::fmt::{Display, Formatter};
use std::num::NonZeroI8;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn opponent(&self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Black => write!(f, "black"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(i8)]
pub enum PieceKind {
    General,
    Guard,
    Rook,
    Horse,
    Cannon,
    Elephant,
    Soldier,
}

/// Kind and color packed into one non-zero byte; the sign carries the color.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Piece {
    data: NonZeroI8,
}

impl Piece {
    pub fn from_kind(kind: PieceKind, color: Color) -> Self {
        let data = NonZeroI8::new(kind as i8 + 1).unwrap();
        let data = match color {
            Color::Red => data,
            Color::Black => -data,
        };
        Self { data }
    }

    pub fn from_fen_char(value: char) -> Option<Self> {
        let kind = match value.to_ascii_lowercase() {
            'k' => PieceKind::General,
            'a' => PieceKind::Guard,
            'e' => PieceKind::Elephant,
            'h' => PieceKind::Horse,
            'r' => PieceKind::Rook,
            'c' => PieceKind::Cannon,
            'p' => PieceKind::Soldier,
            _ => return None,
        };

        let color = if value.is_ascii_uppercase() { Color::Red } else { Color::Black };
        Some(Self::from_kind(kind, color))
    }

    pub fn kind(&self) -> PieceKind {
        let data = self.data.abs().get() - 1;
        unsafe { std::mem::transmute(data) }
    }

    pub fn color(&self) -> Color {
        if self.data.is_positive() { Color::Red } else { Color::Black }
    }

    pub fn fen_char(&self) -> char {
        let result = match self.kind() {
            PieceKind::General => 'k',
            PieceKind::Guard => 'a',
            PieceKind::Elephant => 'e',
            PieceKind::Horse => 'h',
            PieceKind::Rook => 'r',
            PieceKind::Cannon => 'c',
            PieceKind::Soldier => 'p',
        };
        match self.color() {
            Color::Red => result.to_ascii_uppercase(),
            Color::Black => result,
        }
    }

    pub fn chinese_char(&self) -> char {
        match (self.color(), self.kind()) {
            (Color::Red, PieceKind::General) => '帥',
            (Color::Red, PieceKind::Guard) => '仕',
            (Color::Red, PieceKind::Elephant) => '相',
            (Color::Red, PieceKind::Horse) => '傌',
            (Color::Red, PieceKind::Rook) => '俥',
            (Color::Red, PieceKind::Cannon) => '炮',
            (Color::Red, PieceKind::Soldier) => '兵',
            (Color::Black, PieceKind::General) => '將',
            (Color::Black, PieceKind::Guard) => '士',
            (Color::Black, PieceKind::Elephant) => '象',
            (Color::Black, PieceKind::Horse) => '馬',
            (Color::Black, PieceKind::Rook) => '車',
            (Color::Black, PieceKind::Cannon) => '砲',
            (Color::Black, PieceKind::Soldier) => '卒',
        }
    }

    pub fn display(&self, format: DisplayFormat) -> impl Display {
        let s = if format.chinese {
            self.chinese_char().to_string()
        } else {
            let c = self.fen_char();
            format!("{c}{c}")
        };
        if format.color && self.color() == Color::Red {
            format!("\x1B[31m{s}\x1B[0m")
        } else {
            s
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(DisplayFormat::plain()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_preserves_kind_and_color() {
        let kinds = [
            PieceKind::General,
            PieceKind::Guard,
            PieceKind::Rook,
            PieceKind::Horse,
            PieceKind::Cannon,
            PieceKind::Elephant,
            PieceKind::Soldier,
        ];

        for kind in kinds {
            for color in [Color::Red, Color::Black] {
                let piece = Piece::from_kind(kind, color);
                assert_eq!(piece.kind(), kind);
                assert_eq!(piece.color(), color);
            }
        }
    }

    #[test]
    fn fen_chars_map_both_cases() {
        let rook = Piece::from_fen_char('R').unwrap();
        assert_eq!(rook.kind(), PieceKind::Rook);
        assert_eq!(rook.color(), Color::Red);
        assert_eq!(rook.fen_char(), 'R');

        let soldier = Piece::from_fen_char('p').unwrap();
        assert_eq!(soldier.kind(), PieceKind::Soldier);
        assert_eq!(soldier.color(), Color::Black);
        assert_eq!(soldier.fen_char(), 'p');

        assert_eq!(Piece::from_fen_char('x'), None);
    }
}
