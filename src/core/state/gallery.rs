use serde::{Deserialize, Serialize};

use crate::core::{cmd::Cmd, msg::gallery::GalleryMsg};

/// One gallery entry. Images themselves are assets outside the kiosk; only
/// the caption metadata travels with the state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    #[error("gallery index {index} is out of range ({len} items)")]
    OutOfRange { index: usize, len: usize },
}

/// State of the image gallery strip. Scrolling clamps at both ends, matching
/// the arrow controls of the original strip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryState {
    items: Vec<GalleryItem>,
    current_index: usize,
}

impl GalleryState {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items,
            current_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&GalleryItem> {
        self.items.get(self.current_index)
    }

    pub fn scroll_left(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    pub fn scroll_right(&mut self) {
        if self.current_index + 1 < self.items.len() {
            self.current_index += 1;
        }
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.items.len() {
            return Err(GalleryError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Gallery-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: GalleryMsg) -> Vec<Cmd> {
        match msg {
            GalleryMsg::ScrollLeft => {
                self.scroll_left();
                vec![]
            }
            GalleryMsg::ScrollRight => {
                self.scroll_right();
                vec![]
            }
            GalleryMsg::JumpTo(index) => match self.jump_to(index) {
                Ok(()) => vec![],
                Err(e) => vec![Cmd::LogError {
                    message: format!("gallery jump rejected: {e}"),
                }],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn items(n: usize) -> Vec<GalleryItem> {
        (0..n)
            .map(|i| GalleryItem {
                id: (i + 1).to_string(),
                title: format!("Item {}", i + 1),
            })
            .collect()
    }

    #[test]
    fn test_scroll_saturates_at_both_ends() {
        let mut gallery = GalleryState::new(items(3));

        gallery.scroll_left();
        assert_eq!(gallery.current_index(), 0);

        gallery.scroll_right();
        gallery.scroll_right();
        gallery.scroll_right();
        assert_eq!(gallery.current_index(), 2);
    }

    #[test]
    fn test_jump_to_out_of_range() {
        let mut gallery = GalleryState::new(items(2));
        gallery.scroll_right();

        let err = gallery.jump_to(2).unwrap_err();
        assert_eq!(err, GalleryError::OutOfRange { index: 2, len: 2 });
        assert_eq!(gallery.current_index(), 1);
    }

    #[test]
    fn test_empty_gallery_has_no_current_item() {
        let mut gallery = GalleryState::new(vec![]);
        assert!(gallery.current().is_none());

        // Scrolling an empty strip must not panic
        gallery.scroll_left();
        gallery.scroll_right();
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn test_update_scroll_right() {
        let mut gallery = GalleryState::new(items(2));
        let cmds = gallery.update(GalleryMsg::ScrollRight);

        assert!(cmds.is_empty());
        assert_eq!(gallery.current().map(|i| i.id.as_str()), Some("2"));
    }
}
