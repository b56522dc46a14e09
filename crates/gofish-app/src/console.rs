use gofish_core::game::event::{GameEvent, GameObserver, PlayerSnapshot};
use gofish_core::model::card::Card;
use gofish_core::model::rank::Rank;
use gofish_core::model::suit::Suit;

/// Renders the engine's event stream as game commentary. Knows which
/// seat belongs to the operator so it can say "you" instead of a name
/// and keep bot hands hidden.
pub struct Narrator {
    human: Option<String>,
}

impl Narrator {
    pub fn new(human: Option<String>) -> Self {
        Self { human }
    }

    pub fn banner(&self, seed: u64, players: usize) {
        println!("{}", "=".repeat(50));
        println!("Go Fish — {players} players (seed {seed})");
        println!("Collect sets of four cards of one rank to score books.");
        println!("Ask for an exact card; a hit lets you ask again, a miss");
        println!("draws from the deck and ends your turn.");
        println!("{}", "=".repeat(50));
    }

    fn is_human(&self, name: &str) -> bool {
        self.human.as_deref() == Some(name)
    }

    fn print_status(&self, players: &[PlayerSnapshot], deck_len: usize) {
        println!("Game status:");
        for snapshot in players {
            if self.is_human(&snapshot.name) {
                println!(
                    "  {}: {} cards ({}), {} books",
                    snapshot.name,
                    snapshot.cards.len(),
                    format_cards(&snapshot.cards),
                    snapshot.score
                );
            } else {
                println!(
                    "  {} [bot]: {} cards, {} books",
                    snapshot.name,
                    snapshot.cards.len(),
                    snapshot.score
                );
            }
        }
        println!("Cards left in deck: {deck_len}");
        println!();
    }

    fn print_game_over(&self, scores: &[(String, u32)], winners: &[String], top_score: u32) {
        println!();
        println!("{}", "=".repeat(50));
        println!("{:^50}", "GAME OVER");
        println!("{}", "=".repeat(50));
        println!("Final scores:");
        for (name, score) in scores {
            let books = if *score == 1 { "book" } else { "books" };
            println!("  {name}: {score} {books}");
        }
        println!();
        match winners {
            [single] => {
                if self.is_human(single) {
                    println!("You win with {top_score} books!");
                } else {
                    println!("{single} wins with {top_score} books!");
                }
            }
            _ => println!(
                "It's a tie between {} with {top_score} books each!",
                winners.join(" and ")
            ),
        }
        println!();
    }
}

impl GameObserver for Narrator {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Dealt { cards_each } => {
                println!("Cards dealt! Each player starts with {cards_each} cards.");
            }
            GameEvent::TurnStarted { player, .. } => {
                if self.is_human(player) {
                    println!("--- Your turn ---");
                } else {
                    println!("--- {player}'s turn ---");
                }
            }
            GameEvent::Asked {
                asker,
                target,
                rank,
                suit,
            } => {
                let card = pretty(*rank, *suit);
                if self.is_human(asker) {
                    println!("You ask {target} for the {card}...");
                } else {
                    println!("{asker} asks {target} for the {card}...");
                }
            }
            GameEvent::CardGiven {
                giver,
                receiver,
                rank,
                suit,
            } => {
                let card = pretty(*rank, *suit);
                if self.is_human(receiver) {
                    println!("{giver} gives you the {card}!");
                } else {
                    println!("{giver} hands over the {card}!");
                }
            }
            GameEvent::AskRefused {
                asker,
                target,
                rank,
                suit,
            } => {
                let card = pretty(*rank, *suit);
                if self.is_human(asker) {
                    println!("{target} doesn't have the {card}. Your turn ends.");
                } else {
                    println!("{target} doesn't have the {card}.");
                }
            }
            GameEvent::CardDrawn { player, card } => {
                if self.is_human(player) {
                    println!("You draw the {} from the deck.", pretty_card(*card));
                } else {
                    println!("{player} draws a card from the deck.");
                }
            }
            GameEvent::BookCompleted {
                player,
                rank,
                score,
            } => {
                if self.is_human(player) {
                    println!("You completed a book of {rank}s! Score: {score}");
                } else {
                    println!("{player} completed a book of {rank}s! Score: {score}");
                }
            }
            GameEvent::Status { players, deck_len } => {
                self.print_status(players, *deck_len);
            }
            GameEvent::GameOver {
                scores,
                winners,
                top_score,
            } => {
                self.print_game_over(scores, winners, *top_score);
            }
        }
    }
}

pub fn pretty(rank: Rank, suit: Suit) -> String {
    format!("{rank}{}", suit.symbol())
}

pub fn pretty_card(card: Card) -> String {
    pretty(card.rank, card.suit)
}

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|&card| pretty_card(card))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{format_cards, pretty};
    use gofish_core::model::card::Card;
    use gofish_core::model::rank::Rank;
    use gofish_core::model::suit::Suit;

    #[test]
    fn cards_render_with_suit_glyphs() {
        assert_eq!(pretty(Rank::Queen, Suit::Spades), "Q♠");
        assert_eq!(
            format_cards(&[
                Card::new(Rank::Ten, Suit::Hearts),
                Card::new(Rank::Ace, Suit::Clubs)
            ]),
            "10♥ A♣"
        );
    }
}
