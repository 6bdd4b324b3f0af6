pub mod carousel;
pub mod chat;
pub mod form;
pub mod gallery;
pub mod symbols;
pub mod system;

use crate::content::Content;

pub use carousel::{CarouselError, CarouselState};
pub use chat::{ChatError, ChatState};
pub use form::{FormError, FormState};
pub use gallery::{GalleryError, GalleryState};
pub use symbols::SymbolFieldState;
pub use system::{ActiveSection, SystemState};

/// The whole application state, one sub-state per concern.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub carousel: CarouselState,
    pub chat: ChatState,
    pub gallery: GalleryState,
    pub symbols: SymbolFieldState,
    pub form: FormState,
    pub system: SystemState,
    pub content: Content,
}

impl AppState {
    pub fn new(content: Content) -> Result<Self, CarouselError> {
        Ok(Self {
            carousel: CarouselState::new(content.story_cards.clone())?,
            chat: ChatState::new(content.knowledge_base.clone()),
            gallery: GalleryState::new(content.gallery.clone()),
            symbols: SymbolFieldState::new(&content.symbols),
            form: FormState::new(),
            system: SystemState::new(),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::content::Content;

    #[test]
    fn test_new_app_state_from_default_content() {
        let content = Content::embedded_default().unwrap();
        let state = AppState::new(content).unwrap();

        assert_eq!(state.carousel.current_index(), 0);
        assert!(!state.chat.is_visible());
        assert_eq!(state.system.active_section, ActiveSection::Hero);
        assert!(!state.symbols.is_running());
    }

    #[test]
    fn test_new_rejects_content_without_cards() {
        let mut content = Content::embedded_default().unwrap();
        content.story_cards.clear();

        assert_eq!(AppState::new(content), Err(CarouselError::EmptyDeck));
    }
}
