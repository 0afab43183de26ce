pub mod board;
pub mod display_format;
pub mod game;
pub mod location;
pub mod piece;
pub mod rules;
