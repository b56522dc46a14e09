use crate::model::hand::Hand;
use crate::model::rank::Rank;
use crate::model::suit::Suit;

/// What a deciding player sees of one opponent. The full hand is
/// exposed, not just publicly observed cards; the legal-rank filter
/// depends on it.
#[derive(Debug, Clone, Copy)]
pub struct OpponentView<'a> {
    pub name: &'a str,
    pub hand: &'a Hand,
}

/// Decision-point context for the player whose turn it is. Opponents are
/// limited to players still holding cards.
#[derive(Debug, Clone)]
pub struct TurnView<'a> {
    pub name: &'a str,
    pub hand: &'a Hand,
    pub opponents: Vec<OpponentView<'a>>,
}

/// The three decision points of a turn, shared by the automatic and the
/// interactive player. `None` means no legal candidate (bots) or an
/// operator cancel (humans); either way the engine ends the turn.
pub trait DecisionPolicy {
    fn choose_rank(&mut self, view: &TurnView<'_>) -> Option<Rank>;

    fn choose_suit(&mut self, view: &TurnView<'_>, rank: Rank) -> Option<Suit>;

    /// Index into `view.opponents`.
    fn choose_target(&mut self, view: &TurnView<'_>, rank: Rank, suit: Suit) -> Option<usize>;

    /// Broadcast after every successful exchange the policy's player was
    /// not part of. Interactive players ignore it.
    fn observe_exchange(&mut self, _giver: &str, _receiver: &str, _rank: Rank, _suit: Suit) {}
}

/// Ranks the player may legally ask for: present in the own hand and in
/// at least one opponent's hand.
pub fn ask_candidates(view: &TurnView<'_>) -> Vec<Rank> {
    view.hand
        .ranks()
        .into_iter()
        .filter(|&rank| view.opponents.iter().any(|opp| opp.hand.has_rank(rank)))
        .collect()
}

/// Suits of `rank` the player does not hold yet.
pub fn needed_suits(hand: &Hand, rank: Rank) -> Vec<Suit> {
    let held = hand.suits_of_rank(rank);
    Suit::ALL
        .iter()
        .copied()
        .filter(|suit| !held.contains(suit))
        .collect()
}
