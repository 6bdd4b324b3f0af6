use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;
use crate::tui::Frame;

/// The gallery strip: current caption plus a position indicator.
#[derive(Debug, Clone, Default)]
pub struct Gallery;

impl Gallery {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&self, state: &AppState, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(1),
            ],
        )
        .split(rect);

        let heading = Paragraph::new("Our Gallery")
            .style(Style::default().bold())
            .alignment(Alignment::Center);
        f.render_widget(heading, layout[0]);

        match state.gallery.current() {
            Some(item) => {
                let frame_block = Block::bordered()
                    .title(item.title.clone())
                    .border_style(Style::default().fg(Color::Blue));
                let caption = Paragraph::new(format!(
                    "{} / {}",
                    state.gallery.current_index() + 1,
                    state.gallery.len()
                ))
                .alignment(Alignment::Center)
                .block(frame_block);
                f.render_widget(caption, layout[1]);
            }
            None => {
                let empty = Paragraph::new("No gallery items yet")
                    .style(Style::default().dim())
                    .alignment(Alignment::Center);
                f.render_widget(empty, layout[1]);
            }
        }

        let hint = Paragraph::new("←/→: scroll")
            .style(Style::default().dim())
            .alignment(Alignment::Center);
        f.render_widget(hint, layout[2]);

        Ok(())
    }
}
