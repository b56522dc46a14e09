use crate::game::event::{GameEvent, GameObserver, PlayerSnapshot};
use crate::game::policy::{DecisionPolicy, OpponentView, TurnView};
use crate::model::deck::Deck;
use crate::model::player::Player;
use crate::model::rank::Rank;
use crate::model::suit::Suit;

/// Owns the deck, the players, and the turn pointer; drives the
/// `PlayerTurnStart -> RequestResolution -> (continue | end)` machine.
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    players: Vec<Player>,
    current: usize,
}

impl Game {
    pub fn new(seats: &[(&str, bool)], deck: Deck) -> Self {
        let players = seats
            .iter()
            .map(|(name, is_bot)| Player::new(*name, *is_bot))
            .collect();
        Self {
            deck,
            players,
            current: 0,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_mut(&mut self, index: usize) -> &mut Player {
        &mut self.players[index]
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Deals round-robin, one card at a time, until every player holds an
    /// equal share or the deck runs out. Books can complete mid-deal.
    pub fn deal(&mut self, observer: &mut dyn GameObserver) {
        let share = self.deck.len() / self.players.len().max(1);
        let mut dealt = 0usize;
        'dealing: for _ in 0..share {
            for index in 0..self.players.len() {
                let Some(card) = self.deck.draw() else {
                    break 'dealing;
                };
                dealt += 1;
                let completed = self.players[index].add_card(card);
                self.emit_books(index, &completed, observer);
            }
        }
        // Report what actually went out, not the planned share.
        observer.notify(&GameEvent::Dealt {
            cards_each: dealt / self.players.len().max(1),
        });
        self.emit_status(observer);
    }

    /// Game-over rule: nobody holds cards, or the deck can no longer
    /// refill hands and every hand is down to at most one card.
    pub fn is_over(&self) -> bool {
        let in_hands: usize = self.players.iter().map(|p| p.hand().len()).sum();
        in_hands == 0
            || (self.deck.is_empty() && self.players.iter().all(|p| p.hand().len() <= 1))
    }

    /// Runs one full turn for the current player and advances the turn
    /// pointer. Empty-handed players are skipped outright.
    pub fn take_turn(
        &mut self,
        policies: &mut [Box<dyn DecisionPolicy>],
        observer: &mut dyn GameObserver,
    ) {
        debug_assert_eq!(policies.len(), self.players.len());
        let index = self.current;

        if !self.players[index].hand().is_empty() {
            observer.notify(&GameEvent::TurnStarted {
                player: self.players[index].name().to_string(),
                is_bot: self.players[index].is_bot(),
            });

            while !self.players[index].hand().is_empty() {
                let Some((rank, suit, target)) = self.request_decision(index, policies) else {
                    break;
                };
                if !self.resolve_request(index, target, rank, suit, policies, observer) {
                    break;
                }
            }
        }

        self.current = (self.current + 1) % self.players.len();
    }

    /// Queries the policy for rank, suit, target, in that order. Any
    /// `None` aborts the attempt, which the caller treats as turn end —
    /// for bots that only happens once no legal candidate exists, so the
    /// loop cannot spin.
    fn request_decision(
        &self,
        index: usize,
        policies: &mut [Box<dyn DecisionPolicy>],
    ) -> Option<(Rank, Suit, usize)> {
        let view = self.turn_view(index);
        if view.opponents.is_empty() {
            return None;
        }

        let policy = &mut policies[index];
        let rank = policy.choose_rank(&view)?;
        let suit = policy.choose_suit(&view, rank)?;
        let opponent = policy.choose_target(&view, rank, suit)?;
        let target_name = view.opponents.get(opponent)?.name;
        let target = self.players.iter().position(|p| p.name() == target_name)?;
        Some((rank, suit, target))
    }

    fn turn_view(&self, index: usize) -> TurnView<'_> {
        let player = &self.players[index];
        let opponents = self
            .players
            .iter()
            .enumerate()
            .filter(|(i, p)| *i != index && !p.hand().is_empty())
            .map(|(_, p)| OpponentView {
                name: p.name(),
                hand: p.hand(),
            })
            .collect();
        TurnView {
            name: player.name(),
            hand: player.hand(),
            opponents,
        }
    }

    /// Returns true when the turn continues, which happens exactly when
    /// the target held the requested card.
    fn resolve_request(
        &mut self,
        asker: usize,
        target: usize,
        rank: Rank,
        suit: Suit,
        policies: &mut [Box<dyn DecisionPolicy>],
        observer: &mut dyn GameObserver,
    ) -> bool {
        let asker_name = self.players[asker].name().to_string();
        let target_name = self.players[target].name().to_string();
        observer.notify(&GameEvent::Asked {
            asker: asker_name.clone(),
            target: target_name.clone(),
            rank,
            suit,
        });

        if let Some(card) = self.players[target].hand_mut().take_card(rank, suit) {
            observer.notify(&GameEvent::CardGiven {
                giver: target_name.clone(),
                receiver: asker_name.clone(),
                rank,
                suit,
            });
            let completed = self.players[asker].add_card(card);
            self.emit_books(asker, &completed, observer);

            // The asker and the target know the ground truth already;
            // everyone else learns from the broadcast.
            for (i, policy) in policies.iter_mut().enumerate() {
                if i != asker && i != target {
                    policy.observe_exchange(&target_name, &asker_name, rank, suit);
                }
            }
            true
        } else {
            observer.notify(&GameEvent::AskRefused {
                asker: asker_name.clone(),
                target: target_name,
                rank,
                suit,
            });
            if let Some(card) = self.deck.draw() {
                observer.notify(&GameEvent::CardDrawn {
                    player: asker_name,
                    card,
                });
                let completed = self.players[asker].add_card(card);
                self.emit_books(asker, &completed, observer);
            }
            false
        }
    }

    fn emit_books(&self, index: usize, completed: &[Rank], observer: &mut dyn GameObserver) {
        for &rank in completed {
            observer.notify(&GameEvent::BookCompleted {
                player: self.players[index].name().to_string(),
                rank,
                score: self.players[index].score(),
            });
        }
    }

    pub fn emit_status(&self, observer: &mut dyn GameObserver) {
        let players = self
            .players
            .iter()
            .map(|p| PlayerSnapshot {
                name: p.name().to_string(),
                is_bot: p.is_bot(),
                score: p.score(),
                cards: p.hand().cards().to_vec(),
            })
            .collect();
        observer.notify(&GameEvent::Status {
            players,
            deck_len: self.deck.len(),
        });
    }

    /// Name and book count for every seat, in seating order.
    pub fn scores(&self) -> Vec<(String, u32)> {
        self.players
            .iter()
            .map(|p| (p.name().to_string(), p.score()))
            .collect()
    }

    /// Highest score and every player who reached it.
    pub fn winners(&self) -> (u32, Vec<&str>) {
        let top = self.players.iter().map(|p| p.score()).max().unwrap_or(0);
        let names = self
            .players
            .iter()
            .filter(|p| p.score() == top)
            .map(|p| p.name())
            .collect();
        (top, names)
    }

    /// Emits the closing summary. Also used on operator abort, so the
    /// shutdown path still reports standings.
    pub fn finish(&self, observer: &mut dyn GameObserver) {
        let (top_score, winners) = self.winners();
        let winners = winners.into_iter().map(str::to_string).collect();
        observer.notify(&GameEvent::GameOver {
            scores: self.scores(),
            winners,
            top_score,
        });
    }
}
