//! Line-oriented rule scenarios. The format follows the given/when/then
//! phrasing the rule set is usually written in:
//!
//! ```text
//! scenario: Red moves the General within the palace
//! given a Red General at (1, 5)
//! when Red moves from (1, 5) to (1, 4)
//! then the move is legal
//! ```
//!
//! The decoder keys on the leading word and scans the rest for the color,
//! the piece kind, and parenthesized coordinates, so incidental wording
//! ("the board has", "a", "moves the General from") does not matter.

use log::warn;
use std::fmt::{Display, Formatter};
use xiangqi::game::{Game, MoveResult};
use xiangqi::location::{Location, Move};
use xiangqi::piece::{Color, Piece, PieceKind};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Step {
    Place { piece: Piece, at: Location },
    Turn { color: Color },
    Move { from: Location, to: Location },
    Expect { legal: bool },
}

impl Step {
    pub fn decode(line: &str) -> Option<Step> {
        let lower = line.to_ascii_lowercase();
        let keyword = lower.split_whitespace().next()?;

        let step = match keyword {
            "given" | "and" | "place" => {
                let color = find_color(&lower)?;
                match find_kind(&lower) {
                    Some(kind) => Step::Place {
                        piece: Piece::from_kind(kind, color),
                        at: *find_locations(line).first()?,
                    },
                    // "given it is Black's turn"
                    None if lower.contains("turn") || lower.contains("to move") => {
                        Step::Turn { color }
                    }
                    None => return None,
                }
            }
            "turn" => Step::Turn {
                color: find_color(&lower)?,
            },
            "when" | "move" => {
                let locations = find_locations(line);
                let &[from, to] = locations.as_slice() else {
                    return None;
                };
                Step::Move { from, to }
            }
            "then" | "expect" => Step::Expect {
                // "illegal" contains "legal", so test it first
                legal: if lower.contains("illegal") {
                    false
                } else if lower.contains("legal") {
                    true
                } else {
                    return None;
                },
            },
            _ => return None,
        };

        Some(step)
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Place { piece, at } => write!(f, "place {} {:?} at {at}", piece.color(), piece.kind()),
            Self::Turn { color } => write!(f, "turn {color}"),
            Self::Move { from, to } => write!(f, "move {from} to {to}"),
            Self::Expect { legal } => write!(f, "expect {}", verdict(legal)),
        }
    }
}

fn find_color(lower: &str) -> Option<Color> {
    lower.split_whitespace().find_map(|word| {
        // prefix match so possessives like "black's" still read
        let word = word.trim_matches(|c: char| !c.is_ascii_alphabetic());
        if word.starts_with("red") {
            Some(Color::Red)
        } else if word.starts_with("black") {
            Some(Color::Black)
        } else {
            None
        }
    })
}

fn find_kind(lower: &str) -> Option<PieceKind> {
    lower.split_whitespace().find_map(|word| {
        match word.trim_matches(|c: char| !c.is_ascii_alphabetic()) {
            "general" => Some(PieceKind::General),
            "guard" => Some(PieceKind::Guard),
            "rook" => Some(PieceKind::Rook),
            "horse" => Some(PieceKind::Horse),
            "cannon" => Some(PieceKind::Cannon),
            "elephant" => Some(PieceKind::Elephant),
            "soldier" => Some(PieceKind::Soldier),
            _ => None,
        }
    })
}

fn find_locations(line: &str) -> Vec<Location> {
    let mut result = Vec::new();
    let mut rest = line;

    while let Some(start) = rest.find('(') {
        let Some(length) = rest[start..].find(')') else {
            break;
        };
        if let Ok(location) = rest[start..=start + length].parse() {
            result.push(location);
        }
        rest = &rest[start + length + 1..];
    }

    result
}

fn verdict(legal: bool) -> &'static str {
    if legal { "legal" } else { "illegal" }
}

pub struct Scenario {
    pub name: String,
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Splits a scenario file into named scenarios. Lines that decode into no
    /// step are reported and skipped rather than failing the whole file.
    pub fn parse(text: &str) -> Vec<Scenario> {
        let mut scenarios: Vec<Scenario> = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.to_ascii_lowercase().starts_with("scenario") {
                let name = line.split_once(':').map(|(_, name)| name.trim()).unwrap_or("");
                scenarios.push(Scenario {
                    name: name.to_string(),
                    steps: Vec::new(),
                });
                continue;
            }

            let Some(step) = Step::decode(line) else {
                warn!("skipping undecodable line '{line}'");
                continue;
            };

            match scenarios.last_mut() {
                Some(scenario) => scenario.steps.push(step),
                None => warn!("skipping step before any scenario header: {step}"),
            }
        }

        scenarios
    }

    /// Drives a fresh game through the steps. The first expectation the engine
    /// disagrees with fails the scenario.
    pub fn run(&self) -> Result<(), String> {
        let mut game = Game::default();
        let mut last: Option<(Move, MoveResult)> = None;

        for step in &self.steps {
            match *step {
                Step::Place { piece, at } => game.board_mut().set(at, piece),
                Step::Turn { color } => game.set_turn(color),
                Step::Move { from, to } => {
                    let result = game.make_move(from, to);
                    last = Some((Move { from, to }, result));
                }
                Step::Expect { legal } => {
                    let Some((mv, result)) = last else {
                        return Err("expectation before any move".to_string());
                    };
                    if result.legal != legal {
                        return Err(format!(
                            "move {mv}: expected {}, engine said {}",
                            verdict(legal),
                            verdict(result.legal)
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}
