//! Repository functions for the domain layer.

pub mod expansions;
pub mod games;
pub mod player_cards;
pub mod players;
pub mod rounds;
