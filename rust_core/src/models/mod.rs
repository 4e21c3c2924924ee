//! Entities owned by the scoreboard.

pub mod game;
pub mod team;

pub use game::Game;
pub use team::Team;
