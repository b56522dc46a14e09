use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;

/// One entry of a status snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub name: String,
    pub is_bot: bool,
    pub score: u32,
    pub cards: Vec<Card>,
}

/// Everything the engine narrates. Rendering lives in the host; these
/// carry enough for a console to commentate every exchange and for tests
/// to assert on the event stream.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Dealt {
        cards_each: usize,
    },
    TurnStarted {
        player: String,
        is_bot: bool,
    },
    Asked {
        asker: String,
        target: String,
        rank: Rank,
        suit: Suit,
    },
    CardGiven {
        giver: String,
        receiver: String,
        rank: Rank,
        suit: Suit,
    },
    AskRefused {
        asker: String,
        target: String,
        rank: Rank,
        suit: Suit,
    },
    CardDrawn {
        player: String,
        card: Card,
    },
    BookCompleted {
        player: String,
        rank: Rank,
        score: u32,
    },
    Status {
        players: Vec<PlayerSnapshot>,
        deck_len: usize,
    },
    GameOver {
        scores: Vec<(String, u32)>,
        winners: Vec<String>,
        top_score: u32,
    },
}

pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

/// Observer that drops every event; used by hosts and tests that only
/// care about final state.
#[derive(Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn notify(&mut self, _event: &GameEvent) {}
}
