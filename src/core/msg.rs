use serde::{Deserialize, Serialize};

pub mod carousel;
pub mod chat;
pub mod form;
pub mod gallery;
pub mod system;

use carousel::CarouselMsg;
use chat::ChatMsg;
use form::FormMsg;
use gallery::GalleryMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Story carousel operations (delegated to CarouselState)
    Carousel(CarouselMsg),

    // FAQ widget operations (delegated to ChatState)
    Chat(ChatMsg),

    // Gallery operations (delegated to GalleryState)
    Gallery(GalleryMsg),

    // Admission form operations (delegated to FormState)
    Form(FormMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::System(msg) if msg.is_frequent())
    }
}
