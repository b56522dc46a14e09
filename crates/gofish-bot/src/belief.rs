use gofish_core::model::rank::Rank;
use gofish_core::model::suit::Suit;
use std::collections::{BTreeSet, HashMap};

type HoldingMap = HashMap<String, HashMap<Rank, BTreeSet<Suit>>>;

/// What one bot has inferred about other players' hands, built solely
/// from broadcast exchange observations. Advisory only; the rules never
/// depend on it.
#[derive(Debug, Clone, Default)]
pub struct Belief {
    /// Cards an owner was seen receiving and has not been seen losing.
    known_has: HoldingMap,
    /// Cards an owner is known to no longer hold.
    given_away: HoldingMap,
}

impl Belief {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one exchange: the receiver now holds the card, the giver
    /// no longer does. The giver's `known_has` bucket for the rank is
    /// pruned when it empties, keeping the two maps mutually exclusive
    /// per owner.
    pub fn observe_exchange(&mut self, giver: &str, receiver: &str, rank: Rank, suit: Suit) {
        self.known_has
            .entry(receiver.to_string())
            .or_default()
            .entry(rank)
            .or_default()
            .insert(suit);

        self.given_away
            .entry(giver.to_string())
            .or_default()
            .entry(rank)
            .or_default()
            .insert(suit);

        if let Some(ranks) = self.known_has.get_mut(giver) {
            if let Some(suits) = ranks.get_mut(&rank) {
                suits.remove(&suit);
                if suits.is_empty() {
                    ranks.remove(&rank);
                }
            }
        }
    }

    /// "Definitely seen holding it" collapsed to a boolean; anything not
    /// confirmed, including given-away cards, reads as false.
    pub fn likely_has(&self, owner: &str, rank: Rank, suit: Suit) -> bool {
        self.known_has
            .get(owner)
            .and_then(|ranks| ranks.get(&rank))
            .is_some_and(|suits| suits.contains(&suit))
    }

    /// Having been seen receiving one card of a rank is the proxy for
    /// holding several of it.
    pub fn likely_has_multiple_of_rank(&self, owner: &str, rank: Rank) -> bool {
        self.known_has
            .get(owner)
            .and_then(|ranks| ranks.get(&rank))
            .is_some_and(|suits| !suits.is_empty())
    }

    pub fn has_given_away(&self, owner: &str, rank: Rank, suit: Suit) -> bool {
        self.given_away
            .get(owner)
            .and_then(|ranks| ranks.get(&rank))
            .is_some_and(|suits| suits.contains(&suit))
    }

    /// Some tracked owner is confirmed holding the exact card.
    pub fn any_likely_holder(&self, rank: Rank, suit: Suit) -> bool {
        self.known_has
            .keys()
            .any(|owner| self.likely_has(owner, rank, suit))
    }

    /// Some tracked owner is believed to hold several of `rank` and has
    /// not been seen giving `suit` away.
    pub fn any_multiple_holder_avoiding(&self, rank: Rank, suit: Suit) -> bool {
        self.known_has.keys().any(|owner| {
            self.likely_has_multiple_of_rank(owner, rank) && !self.has_given_away(owner, rank, suit)
        })
    }
}
