use serde::{Deserialize, Serialize};

use crate::core::{cmd::Cmd, msg::carousel::CarouselMsg};

/// How many ticks a slide transition takes to settle.
pub const SLIDE_TICKS: u8 = 6;

/// Accent palette for a story card.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Primary,
    Secondary,
}

/// One narrative unit displayed by the story carousel.
/// Cards are defined at initialization time and are immutable for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one card")]
    EmptyDeck,
    #[error("card index {index} is out of range (deck has {len} cards)")]
    OutOfRange { index: usize, len: usize },
}

/// An in-flight card transition. Purely visual: the exit/enter animation
/// always runs left-out/right-in, whether the index moved forward or jumped
/// backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub outgoing: usize,
    pub ticks_left: u8,
}

/// State of the "Our Story" carousel. The index is the full navigation state.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    cards: Vec<Card>,
    current_index: usize,
    slide: Option<Slide>,
}

impl CarouselState {
    pub fn new(cards: Vec<Card>) -> Result<Self, CarouselError> {
        if cards.is_empty() {
            return Err(CarouselError::EmptyDeck);
        }
        Ok(Self {
            cards,
            current_index: 0,
            slide: None,
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The card at the current index. O(1), no side effects.
    pub fn current(&self) -> &Card {
        &self.cards[self.current_index]
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Whether the forward control should be shown.
    pub fn can_advance(&self) -> bool {
        self.current_index < self.cards.len() - 1
    }

    pub fn slide(&self) -> Option<&Slide> {
        self.slide.as_ref()
    }

    /// Move one card forward. Saturates at the last card: no wraparound and
    /// no error, the request is simply a no-op there.
    pub fn advance(&mut self) {
        if self.can_advance() {
            let outgoing = self.current_index;
            self.current_index += 1;
            self.arm_slide(outgoing);
        }
    }

    /// Random access from the dot/timeline control. Rejected jumps leave the
    /// index untouched; a jump to the current index is accepted and idempotent.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.cards.len() {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        let outgoing = self.current_index;
        self.current_index = index;
        self.arm_slide(outgoing);
        Ok(())
    }

    /// Decay the slide transition by one tick.
    pub fn tick(&mut self) {
        if let Some(slide) = self.slide.as_mut() {
            slide.ticks_left = slide.ticks_left.saturating_sub(1);
            if slide.ticks_left == 0 {
                self.slide = None;
            }
        }
    }

    fn arm_slide(&mut self, outgoing: usize) {
        self.slide = Some(Slide {
            outgoing,
            ticks_left: SLIDE_TICKS,
        });
    }

    /// Carousel-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: CarouselMsg) -> Vec<Cmd> {
        match msg {
            CarouselMsg::Advance => {
                self.advance();
                vec![]
            }
            CarouselMsg::JumpTo(index) => match self.jump_to(index) {
                Ok(()) => vec![],
                Err(e) => vec![Cmd::LogError {
                    message: format!("carousel jump rejected: {e}"),
                }],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn deck(titles: &[&str]) -> Vec<Card> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| Card {
                id: i as u32,
                title: (*title).to_string(),
                body: format!("{title} body"),
                accent: if i % 2 == 0 {
                    Accent::Primary
                } else {
                    Accent::Secondary
                },
            })
            .collect()
    }

    #[test]
    fn test_new_rejects_empty_deck() {
        assert_eq!(CarouselState::new(vec![]), Err(CarouselError::EmptyDeck));
    }

    #[test]
    fn test_new_starts_at_first_card() {
        let carousel = CarouselState::new(deck(&["A", "B"])).unwrap();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.current().title, "A");
        assert!(carousel.slide().is_none());
    }

    #[test]
    fn test_advance_saturates_at_last_card() {
        let mut carousel = CarouselState::new(deck(&["A", "B", "C"])).unwrap();

        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.current().title, "C");

        // Further advances stay put, without error
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.current().title, "C");
    }

    #[test]
    fn test_forward_control_hidden_at_last_card() {
        let mut carousel = CarouselState::new(deck(&["A", "B"])).unwrap();
        assert!(carousel.can_advance());

        carousel.advance();
        assert!(!carousel.can_advance());
    }

    #[test]
    fn test_jump_to_valid_index() {
        let mut carousel = CarouselState::new(deck(&["A", "B", "C"])).unwrap();
        carousel.advance();
        carousel.advance();

        carousel.jump_to(0).unwrap();
        assert_eq!(carousel.current().title, "A");
    }

    #[test]
    fn test_jump_to_same_index_is_idempotent() {
        let mut carousel = CarouselState::new(deck(&["A", "B"])).unwrap();
        carousel.jump_to(0).unwrap();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_jump_to_out_of_range_leaves_state_unchanged() {
        let mut carousel = CarouselState::new(deck(&["A", "B", "C"])).unwrap();
        carousel.advance();

        let err = carousel.jump_to(3).unwrap_err();
        assert_eq!(err, CarouselError::OutOfRange { index: 3, len: 3 });
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_index_change_arms_slide() {
        let mut carousel = CarouselState::new(deck(&["A", "B", "C"])).unwrap();
        carousel.advance();

        let slide = carousel.slide().copied().unwrap();
        assert_eq!(slide.outgoing, 0);
        assert_eq!(slide.ticks_left, SLIDE_TICKS);

        // Backward jump arms the same (direction-agnostic) transition
        carousel.jump_to(0).unwrap();
        let slide = carousel.slide().copied().unwrap();
        assert_eq!(slide.outgoing, 1);
    }

    #[test]
    fn test_rejected_jump_does_not_arm_slide() {
        let mut carousel = CarouselState::new(deck(&["A", "B"])).unwrap();
        assert!(carousel.jump_to(9).is_err());
        assert!(carousel.slide().is_none());
    }

    #[test]
    fn test_slide_decays_over_ticks() {
        let mut carousel = CarouselState::new(deck(&["A", "B"])).unwrap();
        carousel.advance();

        for _ in 0..SLIDE_TICKS {
            assert!(carousel.slide().is_some());
            carousel.tick();
        }
        assert!(carousel.slide().is_none());

        // Ticking with no slide armed is a no-op
        carousel.tick();
        assert!(carousel.slide().is_none());
    }

    #[test]
    fn test_update_advance() {
        let mut carousel = CarouselState::new(deck(&["A", "B"])).unwrap();
        let cmds = carousel.update(CarouselMsg::Advance);

        assert_eq!(carousel.current().title, "B");
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_update_rejected_jump_logs() {
        let mut carousel = CarouselState::new(deck(&["A"])).unwrap();
        let cmds = carousel.update(CarouselMsg::JumpTo(5));

        assert_eq!(cmds.len(), 1);
        assert!(matches!(cmds[0], Cmd::LogError { .. }));
        assert_eq!(carousel.current_index(), 0);
    }
}
