//! Study sessions
//!
//! Walks through a deck's cards one at a time, showing either side.
//! Review sessions wrap around at both ends; sequential ("start")
//! sessions run from the first card to the last and then finish.

use crate::error::{AppError, Result};
use crate::models::{Card, Deck};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSide {
    Front,
    Back,
}

impl CardSide {
    pub fn flipped(self) -> Self {
        match self {
            CardSide::Front => CardSide::Back,
            CardSide::Back => CardSide::Front,
        }
    }
}

/// How moving past either end of the deck behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyOrder {
    /// Next/previous wrap around
    Review,
    /// Stops at the ends; moving past the last card finishes the session
    Sequential,
}

/// What is currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardFace<'a> {
    /// 1-based position in the deck
    pub number: usize,
    pub side: CardSide,
    pub text: &'a str,
}

#[derive(Debug, Clone)]
pub struct StudySession {
    title: String,
    cards: Vec<Card>,
    order: StudyOrder,
    index: usize,
    side: CardSide,
    finished: bool,
}

impl StudySession {
    pub fn new(deck: &Deck, order: StudyOrder) -> Result<Self> {
        if deck.cards.is_empty() {
            return Err(AppError::EmptyDeck(deck.title.clone()));
        }

        Ok(Self {
            title: deck.title.clone(),
            cards: deck.cards.clone(),
            order,
            index: 0,
            side: CardSide::Front,
            finished: false,
        })
    }

    pub fn review(deck: &Deck) -> Result<Self> {
        Self::new(deck, StudyOrder::Review)
    }

    pub fn sequential(deck: &Deck) -> Result<Self> {
        Self::new(deck, StudyOrder::Sequential)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn order(&self) -> StudyOrder {
        self.order
    }

    /// Never zero; empty decks cannot be studied
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// 0-based index of the current card
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn side(&self) -> CardSide {
        self.side
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn current(&self) -> CardFace<'_> {
        let card = &self.cards[self.index];
        let text = match self.side {
            CardSide::Front => card.front.as_str(),
            CardSide::Back => card.back.as_str(),
        };

        CardFace {
            number: self.index + 1,
            side: self.side,
            text,
        }
    }

    /// Turn the current card over, returning the side now showing
    pub fn flip(&mut self) -> CardSide {
        self.side = self.side.flipped();
        self.side
    }

    pub fn next_card(&mut self) {
        let last = self.cards.len() - 1;

        match self.order {
            StudyOrder::Review => {
                self.index = if self.index == last { 0 } else { self.index + 1 };
            }
            StudyOrder::Sequential => {
                if self.index == last {
                    self.finished = true;
                } else {
                    self.index += 1;
                }
            }
        }

        self.side = CardSide::Front;
    }

    pub fn previous_card(&mut self) {
        let last = self.cards.len() - 1;

        match self.order {
            StudyOrder::Review => {
                self.index = if self.index == 0 { last } else { self.index - 1 };
            }
            StudyOrder::Sequential => {
                self.index = self.index.saturating_sub(1);
                self.finished = false;
            }
        }

        self.side = CardSide::Front;
    }
}
