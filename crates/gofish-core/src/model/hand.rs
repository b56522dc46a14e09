use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use std::vec::Vec;

#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.sort();
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn has_rank(&self, rank: Rank) -> bool {
        self.cards.iter().any(|card| card.rank == rank)
    }

    pub fn count_of_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|card| card.rank == rank).count()
    }

    pub fn suits_of_rank(&self, rank: Rank) -> Vec<Suit> {
        self.cards
            .iter()
            .filter(|card| card.rank == rank)
            .map(|card| card.suit)
            .collect()
    }

    /// Ranks present in the hand, deduplicated, in display order.
    pub fn ranks(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self.cards.iter().map(|card| card.rank).collect();
        ranks.sort();
        ranks.dedup();
        ranks
    }

    /// Removes and returns every card of `rank`. The empty result is the
    /// "had none" outcome, not an error.
    pub fn take_all_of_rank(&mut self, rank: Rank) -> Vec<Card> {
        let mut taken = Vec::new();
        self.cards.retain(|card| {
            if card.rank == rank {
                taken.push(*card);
                false
            } else {
                true
            }
        });
        taken
    }

    /// Removes the exact card if held. `Some` here is what keeps an
    /// asker's turn going.
    pub fn take_card(&mut self, rank: Rank, suit: Suit) -> Option<Card> {
        let wanted = Card::new(rank, suit);
        let index = self.cards.iter().position(|&card| card == wanted)?;
        Some(self.cards.remove(index))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn sort(&mut self) {
        self.cards
            .sort_by(|a, b| a.rank.cmp(&b.rank).then(a.suit.cmp(&b.suit)));
    }
}
