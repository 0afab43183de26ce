use crate::board::Board;
use std::fmt::Formatter;
use std::str::FromStr;

/// One-based board coordinate. Row 1 is red's back rank, row 10 is black's;
/// any integer pair is representable, and everything off the 10x9 grid reads
/// as permanently empty.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Location {
    row: i8,
    col: i8,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub from: Location,
    pub to: Location,
}

impl Location {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_valid(&self) -> bool {
        1 <= self.row && self.row <= Board::HEIGHT && 1 <= self.col && self.col <= Board::WIDTH
    }

    pub fn shift(&self, rows: i8, cols: i8) -> Self {
        Self {
            row: self.row + rows,
            col: self.col + cols,
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.is_valid()
            .then(|| ((self.row - 1) * Board::WIDTH + self.col - 1) as usize)
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn col(&self) -> i8 {
        self.col
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl FromStr for Location {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = s.split_once(',').ok_or(())?;
        let row = row.trim().parse().map_err(|_| ())?;
        let col = col.trim().parse().map_err(|_| ())?;
        Ok(Self { row, col })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let from = parts.next().ok_or(())?.parse()?;
        let to = parts.next().ok_or(())?.parse()?;
        if parts.next().is_some() {
            return Err(());
        }
        Ok(Self { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_matches_bounds() {
        assert!(Location::new(1, 1).is_valid());
        assert!(Location::new(10, 9).is_valid());
        assert!(!Location::new(0, 5).is_valid());
        assert!(!Location::new(11, 5).is_valid());
        assert!(!Location::new(5, 0).is_valid());
        assert!(!Location::new(5, 10).is_valid());
        assert!(!Location::new(-3, 4).is_valid());
    }

    #[test]
    fn index_covers_grid_without_overlap() {
        let mut seen = [false; 90];
        for row in 1..=10 {
            for col in 1..=9 {
                let index = Location::new(row, col).index().unwrap();
                assert!(!seen[index]);
                seen[index] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(Location::new(0, 3).index(), None);
    }

    #[test]
    fn parse_accepts_scenario_notation() {
        assert_eq!("(1,5)".parse(), Ok(Location::new(1, 5)));
        assert_eq!("(1, 5)".parse(), Ok(Location::new(1, 5)));
        assert_eq!(" 10,9 ".parse(), Ok(Location::new(10, 9)));
        assert_eq!("(1,5) (1,4)".parse::<Move>().unwrap().to, Location::new(1, 4));
        assert!("(1)".parse::<Location>().is_err());
        assert!("one,five".parse::<Location>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let location = Location::new(6, 2);
        assert_eq!(location.to_string().parse(), Ok(location));
    }
}
