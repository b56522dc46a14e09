use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::rank::Rank;

/// Four cards of one rank, removed from a hand as a completed unit.
#[derive(Debug, Clone)]
pub struct Book {
    rank: Rank,
    cards: [Card; 4],
}

impl Book {
    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn cards(&self) -> &[Card; 4] {
        &self.cards
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    is_bot: bool,
    hand: Hand,
    books: Vec<Book>,
}

impl Player {
    pub fn new(name: impl Into<String>, is_bot: bool) -> Self {
        Self {
            name: name.into(),
            is_bot,
            hand: Hand::new(),
            books: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_bot(&self) -> bool {
        self.is_bot
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of completed books.
    pub fn score(&self) -> u32 {
        self.books.len() as u32
    }

    /// Adds one card and runs book detection. Returns the ranks of any
    /// books completed by this insertion.
    pub fn add_card(&mut self, card: Card) -> Vec<Rank> {
        self.hand.add(card);
        self.collect_books()
    }

    /// Bulk insert; several books may complete from one call.
    pub fn add_cards(&mut self, cards: Vec<Card>) -> Vec<Rank> {
        for card in cards {
            self.hand.add(card);
        }
        self.collect_books()
    }

    fn collect_books(&mut self) -> Vec<Rank> {
        let mut completed = Vec::new();
        for rank in self.hand.ranks() {
            if self.hand.count_of_rank(rank) == 4 {
                let cards = self.hand.take_all_of_rank(rank);
                let cards: [Card; 4] = match cards.try_into() {
                    Ok(cards) => cards,
                    Err(_) => continue,
                };
                self.books.push(Book { rank, cards });
                completed.push(rank);
            }
        }
        completed
    }
}

#[cfg(test)]
mod tests {
    use super::Player;
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    fn all_of_rank(rank: Rank) -> Vec<Card> {
        Suit::ALL.iter().map(|&suit| Card::new(rank, suit)).collect()
    }

    #[test]
    fn fourth_card_of_a_rank_completes_a_book() {
        let mut player = Player::new("Emily", true);
        let mut kings = all_of_rank(Rank::King);
        let last = kings.pop().unwrap();

        assert!(player.add_cards(kings).is_empty());
        assert_eq!(player.score(), 0);
        assert_eq!(player.hand().count_of_rank(Rank::King), 3);

        let completed = player.add_card(last);
        assert_eq!(completed, vec![Rank::King]);
        assert_eq!(player.score(), 1);
        assert!(!player.hand().has_rank(Rank::King));
        assert_eq!(player.books()[0].rank(), Rank::King);
    }

    #[test]
    fn three_of_a_rank_is_not_a_book() {
        let mut player = Player::new("Sarah", true);
        let mut queens = all_of_rank(Rank::Queen);
        queens.pop();
        assert!(player.add_cards(queens).is_empty());
        assert_eq!(player.score(), 0);
        assert_eq!(player.hand().len(), 3);
    }

    #[test]
    fn bulk_insert_can_complete_multiple_books() {
        let mut player = Player::new("Jessica", true);
        let mut cards = all_of_rank(Rank::Two);
        cards.extend(all_of_rank(Rank::Nine));
        cards.push(Card::new(Rank::Ace, Suit::Hearts));

        let mut completed = player.add_cards(cards);
        completed.sort();
        assert_eq!(completed, vec![Rank::Two, Rank::Nine]);
        assert_eq!(player.score(), 2);
        assert_eq!(player.hand().len(), 1);
    }

    #[test]
    fn books_hold_the_four_extracted_cards() {
        let mut player = Player::new("You", false);
        player.add_cards(all_of_rank(Rank::Seven));
        let book = &player.books()[0];
        assert_eq!(book.cards().len(), 4);
        assert!(book.cards().iter().all(|card| card.rank == Rank::Seven));
    }
}
