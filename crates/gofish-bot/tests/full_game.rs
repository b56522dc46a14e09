use gofish_bot::BotPolicy;
use gofish_core::game::engine::Game;
use gofish_core::game::event::NullObserver;
use gofish_core::game::policy::DecisionPolicy;
use gofish_core::model::card::Card;
use gofish_core::model::deck::Deck;
use std::collections::HashSet;

const SEATS: [(&str, bool); 4] = [
    ("Emily", true),
    ("Sarah", true),
    ("Jessica", true),
    ("Zoe", true),
];

fn bot_policies(seed: u64) -> Vec<Box<dyn DecisionPolicy>> {
    (0..SEATS.len() as u64)
        .map(|i| Box::new(BotPolicy::with_seed(seed.wrapping_add(i))) as Box<dyn DecisionPolicy>)
        .collect()
}

fn assert_card_conservation(game: &Game) {
    let mut seen: Vec<Card> = game.deck().cards().to_vec();
    for player in game.players() {
        seen.extend(player.hand().iter().copied());
        for book in player.books() {
            seen.extend(book.cards().iter().copied());
        }
    }
    assert_eq!(seen.len(), 52, "cards lost or duplicated");
    let unique: HashSet<Card> = seen.into_iter().collect();
    assert_eq!(unique.len(), 52, "duplicate card detected");
}

fn play_to_completion(seed: u64) -> Game {
    let mut game = Game::new(&SEATS, Deck::shuffled_with_seed(seed));
    let mut policies = bot_policies(seed);
    let mut observer = NullObserver;

    game.deal(&mut observer);
    assert_card_conservation(&game);

    // A turn either shrinks the deck, moves a card between hands, or
    // completes a book, so this bound is generous.
    let mut turns = 0usize;
    while !game.is_over() {
        game.take_turn(&mut policies, &mut observer);
        assert_card_conservation(&game);
        turns += 1;
        assert!(turns < 10_000, "game failed to terminate (seed {seed})");
    }
    game
}

#[test]
fn seeded_bot_games_terminate_and_conserve_cards() {
    for seed in [0, 1, 7, 42, 1234] {
        let game = play_to_completion(seed);
        assert!(game.is_over());
        assert_card_conservation(&game);

        let (top, winners) = game.winners();
        assert!(!winners.is_empty());
        assert!(game.players().iter().all(|p| p.score() <= top));

        // Books never exceed the 13 available ranks.
        let total_books: u32 = game.players().iter().map(|p| p.score()).sum();
        assert!(total_books <= 13);
    }
}

#[test]
fn finished_games_leave_at_most_one_card_per_hand() {
    let game = play_to_completion(99);
    let in_hands: usize = game.players().iter().map(|p| p.hand().len()).sum();
    if !game.deck().is_empty() {
        assert_eq!(in_hands, 0);
    } else {
        assert!(game.players().iter().all(|p| p.hand().len() <= 1));
    }
}
