pub mod answer_cards;
pub mod expansion_pools;
pub mod expansions;
pub mod games;
pub mod player_cards;
pub mod players;
pub mod question_cards;
pub mod rounds;

pub use answer_cards::Entity as AnswerCards;
pub use answer_cards::Model as AnswerCard;
pub use expansion_pools::Entity as ExpansionPools;
pub use expansion_pools::Model as ExpansionPool;
pub use expansions::Entity as Expansions;
pub use expansions::Model as Expansion;
pub use games::Entity as Games;
pub use games::Model as Game;
pub use player_cards::Entity as PlayerCards;
pub use player_cards::Model as PlayerCard;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use question_cards::Entity as QuestionCards;
pub use question_cards::Model as QuestionCard;
pub use rounds::Entity as Rounds;
pub use rounds::Model as Round;
