use rand::seq::SliceRandom;
use rand::Rng;

use super::card::{Card, Suit, Value};
use super::card_bit_set::CardBitSet;
use super::classify::HAND_SIZE;
use super::hand::Hand;

/// A stack of cards to deal from. Cards come off the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

/// A full 52 card deck, unshuffled.
impl Default for Deck {
    fn default() -> Self {
        let cards = Value::values()
            .into_iter()
            .flat_map(|v| Suit::suits().into_iter().map(move |s| Card::new(v, s)))
            .collect();
        Self { cards }
    }
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// A full deck already shuffled with `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Take the top card.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Take five cards as a hand, or `None` when fewer than five remain.
    pub fn deal_hand(&mut self) -> Option<Hand> {
        if self.cards.len() < HAND_SIZE {
            return None;
        }
        let split = self.cards.len() - HAND_SIZE;
        let set: CardBitSet = self.cards.drain(split..).collect();
        let hand = Hand::try_from(set);
        debug_assert!(hand.is_ok(), "a deck holds distinct cards: {hand:?}");
        hand.ok()
    }

    /// Deal two hands with no card in common.
    pub fn deal_pair(&mut self) -> Option<(Hand, Hand)> {
        let first = self.deal_hand()?;
        let second = self.deal_hand()?;
        Some((first, second))
    }
}
