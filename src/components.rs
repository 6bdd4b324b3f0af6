//! Stateless view components. Each component receives the full state and a
//! rect, and renders without mutating anything.

pub mod chat;
pub mod contact;
pub mod courses;
pub mod features;
pub mod gallery;
pub mod hero;
pub mod status_bar;
pub mod story;
pub mod symbols;

use color_eyre::eyre::Result;
use ratatui::prelude::*;

use crate::core::state::{ActiveSection, AppState};
use crate::tui::Frame;

/// Top-level screen composition: active section, status bar, and the chat
/// overlay on top when it is open.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    hero: hero::Hero,
    story: story::StoryCarousel,
    courses: courses::Courses,
    features: features::Features,
    gallery: gallery::Gallery,
    contact: contact::Contact,
    chat: chat::ChatWidget,
    status_bar: status_bar::StatusBar,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&self, state: &AppState, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(1)],
        )
        .split(rect);

        match state.system.active_section {
            ActiveSection::Hero => self.hero.draw(state, f, layout[0])?,
            ActiveSection::Story => self.story.draw(state, f, layout[0])?,
            ActiveSection::Courses => self.courses.draw(state, f, layout[0])?,
            ActiveSection::Features => self.features.draw(state, f, layout[0])?,
            ActiveSection::Gallery => self.gallery.draw(state, f, layout[0])?,
            ActiveSection::Contact => self.contact.draw(state, f, layout[0])?,
        }

        self.status_bar.draw(state, f, layout[1])?;

        if state.chat.is_visible() {
            self.chat.draw(state, f, rect)?;
        }

        Ok(())
    }
}
