pub mod dealing;

pub use dealing::{assign_round_robin, deal, shuffle_deck};
