pub mod expansions_sea;
pub mod games_sea;
pub mod player_cards_sea;
pub mod players_sea;
pub mod rounds_sea;
