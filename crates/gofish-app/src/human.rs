use crate::console::{format_cards, pretty};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use gofish_core::game::policy::{DecisionPolicy, TurnView, ask_candidates, needed_suits};
use gofish_core::model::rank::Rank;
use gofish_core::model::suit::Suit;
use std::cell::Cell;
use std::rc::Rc;

/// Interactive decision policy. Esc on any menu cancels the attempt
/// (the engine ends the turn); a terminal-level failure flips the shared
/// abort flag so the host can exit and still print the summary.
pub struct HumanPolicy {
    theme: ColorfulTheme,
    abort: Rc<Cell<bool>>,
}

impl HumanPolicy {
    pub fn new(abort: Rc<Cell<bool>>) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            abort,
        }
    }

    fn select(&self, prompt: &str, labels: &[String]) -> Option<usize> {
        match Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(labels)
            .default(0)
            .interact_opt()
        {
            Ok(selection) => selection,
            Err(_) => {
                self.abort.set(true);
                None
            }
        }
    }
}

impl DecisionPolicy for HumanPolicy {
    fn choose_rank(&mut self, view: &TurnView<'_>) -> Option<Rank> {
        let candidates = ask_candidates(view);
        if candidates.is_empty() {
            println!("No other player holds a rank you need; your turn is skipped.");
            return None;
        }

        println!("Your hand: {}", format_cards(view.hand.cards()));
        let labels: Vec<String> = candidates.iter().map(|rank| rank.to_string()).collect();
        let index = self.select("Which rank do you want to ask for?", &labels)?;
        candidates.get(index).copied()
    }

    fn choose_suit(&mut self, view: &TurnView<'_>, rank: Rank) -> Option<Suit> {
        let candidates = needed_suits(view.hand, rank);
        if candidates.is_empty() {
            return None;
        }

        let held = view.hand.suits_of_rank(rank);
        if !held.is_empty() {
            let held: Vec<String> = held.iter().map(|suit| suit.name().to_string()).collect();
            println!("You hold the {rank} of: {}", held.join(", "));
        }
        let labels: Vec<String> = candidates
            .iter()
            .map(|suit| format!("{} {}", suit.name(), suit.symbol()))
            .collect();
        let index = self.select("Which suit do you want to ask for?", &labels)?;
        candidates.get(index).copied()
    }

    fn choose_target(&mut self, view: &TurnView<'_>, rank: Rank, suit: Suit) -> Option<usize> {
        let labels: Vec<String> = view
            .opponents
            .iter()
            .map(|opp| format!("{} ({} cards)", opp.name, opp.hand.len()))
            .collect();
        self.select(
            &format!("Who do you ask for the {}?", pretty(rank, suit)),
            &labels,
        )
    }
}
