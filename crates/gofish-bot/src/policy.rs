use crate::belief::Belief;
use gofish_core::game::policy::{DecisionPolicy, TurnView, ask_candidates, needed_suits};
use gofish_core::model::rank::Rank;
use gofish_core::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{Level, event};

/// Automatic player: belief-driven rank/suit/target selection with
/// uniform random tie-breaks from an owned, seedable RNG.
#[derive(Debug)]
pub struct BotPolicy {
    belief: Belief,
    rng: StdRng,
}

impl BotPolicy {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            belief: Belief::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn belief(&self) -> &Belief {
        &self.belief
    }

    fn pick<T: Copy>(&mut self, options: &[T]) -> Option<T> {
        options.choose(&mut self.rng).copied()
    }
}

impl Default for BotPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionPolicy for BotPolicy {
    /// Highest non-empty priority tier wins:
    /// 1. ranks we hold at least two of while someone likely holds more,
    /// 2. ranks where a missing suit is confirmed in an opponent's hand,
    /// 3. any remaining legal candidate.
    fn choose_rank(&mut self, view: &TurnView<'_>) -> Option<Rank> {
        let candidates = ask_candidates(view);
        if candidates.is_empty() {
            return None;
        }

        let doubled_up: Vec<Rank> = candidates
            .iter()
            .copied()
            .filter(|&rank| {
                view.hand.count_of_rank(rank) >= 2
                    && view
                        .opponents
                        .iter()
                        .any(|opp| self.belief.likely_has_multiple_of_rank(opp.name, rank))
            })
            .collect();
        if let Some(rank) = self.pick(&doubled_up) {
            return Some(rank);
        }

        let confirmed_need: Vec<Rank> = candidates
            .iter()
            .copied()
            .filter(|&rank| {
                needed_suits(view.hand, rank).iter().any(|&suit| {
                    view.opponents
                        .iter()
                        .any(|opp| self.belief.likely_has(opp.name, rank, suit))
                })
            })
            .collect();
        if let Some(rank) = self.pick(&confirmed_need) {
            return Some(rank);
        }

        self.pick(&candidates)
    }

    fn choose_suit(&mut self, view: &TurnView<'_>, rank: Rank) -> Option<Suit> {
        let available = needed_suits(view.hand, rank);
        if available.is_empty() {
            return None;
        }

        if view.hand.count_of_rank(rank) >= 2 {
            let promising: Vec<Suit> = available
                .iter()
                .copied()
                .filter(|&suit| self.belief.any_multiple_holder_avoiding(rank, suit))
                .collect();
            if let Some(suit) = self.pick(&promising) {
                return Some(suit);
            }
        }

        let confirmed: Vec<Suit> = available
            .iter()
            .copied()
            .filter(|&suit| self.belief.any_likely_holder(rank, suit))
            .collect();
        if let Some(suit) = self.pick(&confirmed) {
            return Some(suit);
        }

        self.pick(&available)
    }

    /// Best-target tiers: confirmed holders, then likely multiple-holders
    /// who have not shed this suit, then anyone who has not shed it, then
    /// everyone.
    fn choose_target(&mut self, view: &TurnView<'_>, rank: Rank, suit: Suit) -> Option<usize> {
        let all: Vec<usize> = (0..view.opponents.len()).collect();

        let confirmed: Vec<usize> = all
            .iter()
            .copied()
            .filter(|&i| self.belief.likely_has(view.opponents[i].name, rank, suit))
            .collect();
        let multiple: Vec<usize> = all
            .iter()
            .copied()
            .filter(|&i| {
                let name = view.opponents[i].name;
                self.belief.likely_has_multiple_of_rank(name, rank)
                    && !self.belief.has_given_away(name, rank, suit)
            })
            .collect();
        let not_shed: Vec<usize> = all
            .iter()
            .copied()
            .filter(|&i| !self.belief.has_given_away(view.opponents[i].name, rank, suit))
            .collect();

        let (tier, chosen) = if !confirmed.is_empty() {
            ("confirmed", self.pick(&confirmed))
        } else if !multiple.is_empty() {
            ("multiple_of_rank", self.pick(&multiple))
        } else if !not_shed.is_empty() {
            ("not_given_away", self.pick(&not_shed))
        } else {
            ("fallback", self.pick(&all))
        };

        if let Some(index) = chosen {
            log_ask_decision(view, rank, suit, view.opponents[index].name, tier);
        }
        chosen
    }

    fn observe_exchange(&mut self, giver: &str, receiver: &str, rank: Rank, suit: Suit) {
        self.belief.observe_exchange(giver, receiver, rank, suit);
    }
}

fn log_ask_decision(view: &TurnView<'_>, rank: Rank, suit: Suit, target: &str, tier: &str) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    event!(
        target: "gofish_bot::ask",
        Level::DEBUG,
        asker = view.name,
        rank = %rank,
        suit = %suit,
        target,
        tier,
        own_of_rank = view.hand.count_of_rank(rank),
        opponents = view.opponents.len(),
    );
}

#[cfg(test)]
mod tests {
    use super::BotPolicy;
    use gofish_core::game::policy::{DecisionPolicy, OpponentView, TurnView};
    use gofish_core::model::card::Card;
    use gofish_core::model::hand::Hand;
    use gofish_core::model::rank::Rank;
    use gofish_core::model::suit::Suit;

    fn view<'a>(
        hand: &'a Hand,
        opponents: &'a [(String, Hand)],
    ) -> TurnView<'a> {
        TurnView {
            name: "Emily",
            hand,
            opponents: opponents
                .iter()
                .map(|(name, hand)| OpponentView { name, hand })
                .collect(),
        }
    }

    #[test]
    fn rank_choice_prefers_doubled_ranks_with_believed_multiples() {
        let mut bot = BotPolicy::with_seed(11);
        // Sarah was seen receiving a Seven, and we hold two Sevens.
        bot.observe_exchange("Jessica", "Sarah", Rank::Seven, Suit::Hearts);

        let hand = Hand::with_cards(vec![
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Spades),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::King, Suit::Diamonds),
        ]);
        let opponents = vec![(
            "Sarah".to_string(),
            Hand::with_cards(vec![
                Card::new(Rank::Seven, Suit::Hearts),
                Card::new(Rank::Two, Suit::Clubs),
                Card::new(Rank::King, Suit::Spades),
            ]),
        )];

        for _ in 0..8 {
            assert_eq!(bot.choose_rank(&view(&hand, &opponents)), Some(Rank::Seven));
        }
    }

    #[test]
    fn rank_choice_falls_back_to_confirmed_needs() {
        let mut bot = BotPolicy::with_seed(5);
        bot.observe_exchange("Jessica", "Sarah", Rank::King, Suit::Spades);

        // Only one King in hand, so the doubled-up tier stays empty and
        // the confirmed-need tier should pin the choice to Kings.
        let hand = Hand::with_cards(vec![
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Clubs),
        ]);
        let opponents = vec![(
            "Sarah".to_string(),
            Hand::with_cards(vec![
                Card::new(Rank::King, Suit::Spades),
                Card::new(Rank::Two, Suit::Clubs),
                Card::new(Rank::Nine, Suit::Diamonds),
            ]),
        )];

        for _ in 0..8 {
            assert_eq!(bot.choose_rank(&view(&hand, &opponents)), Some(Rank::King));
        }
    }

    #[test]
    fn rank_choice_is_none_without_legal_candidates() {
        let mut bot = BotPolicy::with_seed(3);
        let hand = Hand::with_cards(vec![Card::new(Rank::Ace, Suit::Hearts)]);
        let opponents = vec![(
            "Sarah".to_string(),
            Hand::with_cards(vec![Card::new(Rank::Two, Suit::Clubs)]),
        )];

        assert_eq!(bot.choose_rank(&view(&hand, &opponents)), None);
    }

    #[test]
    fn suit_choice_prefers_confirmed_holdings() {
        let mut bot = BotPolicy::with_seed(7);
        bot.observe_exchange("Jessica", "Sarah", Rank::Queen, Suit::Hearts);

        let hand = Hand::with_cards(vec![Card::new(Rank::Queen, Suit::Spades)]);
        let opponents = vec![("Sarah".to_string(), Hand::new())];

        for _ in 0..8 {
            assert_eq!(
                bot.choose_suit(&view(&hand, &opponents), Rank::Queen),
                Some(Suit::Hearts)
            );
        }
    }

    #[test]
    fn suit_choice_is_none_when_all_four_are_held() {
        let mut bot = BotPolicy::with_seed(9);
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Diamonds),
            Card::new(Rank::Queen, Suit::Clubs),
            Card::new(Rank::Queen, Suit::Spades),
        ]);
        let opponents = vec![("Sarah".to_string(), Hand::new())];

        assert_eq!(bot.choose_suit(&view(&hand, &opponents), Rank::Queen), None);
    }

    #[test]
    fn target_choice_prefers_confirmed_holder() {
        let mut bot = BotPolicy::with_seed(13);
        bot.observe_exchange("Jessica", "Sarah", Rank::Four, Suit::Clubs);

        let hand = Hand::with_cards(vec![Card::new(Rank::Four, Suit::Hearts)]);
        let opponents = vec![
            ("Jessica".to_string(), Hand::new()),
            ("Sarah".to_string(), Hand::new()),
        ];

        for _ in 0..8 {
            assert_eq!(
                bot.choose_target(&view(&hand, &opponents), Rank::Four, Suit::Clubs),
                Some(1)
            );
        }
    }

    #[test]
    fn target_choice_avoids_players_who_shed_the_suit() {
        let mut bot = BotPolicy::with_seed(17);
        // Jessica gave the exact card away, so she sits in the bottom tier.
        bot.observe_exchange("Jessica", "Zoe", Rank::Four, Suit::Clubs);
        bot.observe_exchange("Zoe", "Someone", Rank::Four, Suit::Clubs);

        let hand = Hand::with_cards(vec![Card::new(Rank::Four, Suit::Hearts)]);
        let opponents = vec![
            ("Jessica".to_string(), Hand::new()),
            ("Sarah".to_string(), Hand::new()),
        ];

        for _ in 0..8 {
            assert_eq!(
                bot.choose_target(&view(&hand, &opponents), Rank::Four, Suit::Clubs),
                Some(1)
            );
        }
    }

    #[test]
    fn target_choice_falls_back_to_anyone() {
        let mut bot = BotPolicy::with_seed(19);
        bot.observe_exchange("Jessica", "Zoe", Rank::Four, Suit::Clubs);
        bot.observe_exchange("Sarah", "Zoe", Rank::Four, Suit::Clubs);

        let hand = Hand::with_cards(vec![Card::new(Rank::Four, Suit::Hearts)]);
        let opponents = vec![
            ("Jessica".to_string(), Hand::new()),
            ("Sarah".to_string(), Hand::new()),
        ];

        let chosen = bot.choose_target(&view(&hand, &opponents), Rank::Four, Suit::Clubs);
        assert!(matches!(chosen, Some(0) | Some(1)));
    }
}
