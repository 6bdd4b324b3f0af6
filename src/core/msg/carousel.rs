use serde::{Deserialize, Serialize};

/// Messages specific to the story carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarouselMsg {
    /// Move one card forward; saturates at the last card.
    Advance,
    /// Random access via the dot/timeline control.
    JumpTo(usize),
}
