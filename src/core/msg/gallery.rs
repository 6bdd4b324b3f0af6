use serde::{Deserialize, Serialize};

/// Messages specific to the image gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GalleryMsg {
    ScrollLeft,
    ScrollRight,
    JumpTo(usize),
}
