use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;
use crate::tui::Frame;

/// Board-by-board course listing.
#[derive(Debug, Clone, Default)]
pub struct Courses;

impl Courses {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&self, state: &AppState, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(2), Constraint::Min(0)],
        )
        .split(rect);

        let heading = Paragraph::new("What Do We Offer")
            .style(Style::default().bold())
            .alignment(Alignment::Center);
        f.render_widget(heading, layout[0]);

        let boards = &state.content.boards;
        if boards.is_empty() {
            return Ok(());
        }

        let columns = Layout::new(
            Direction::Horizontal,
            vec![Constraint::Ratio(1, boards.len() as u32); boards.len()],
        )
        .split(layout[1]);

        for (board, column) in boards.iter().zip(columns.iter()) {
            let title = match &board.subtitle {
                Some(subtitle) => format!("{} ({subtitle})", board.title),
                None => board.title.clone(),
            };
            let items: Vec<ListItem> = board
                .courses
                .iter()
                .map(|course| ListItem::new(course.as_str()))
                .collect();
            let list = List::new(items).block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::default().fg(Color::Blue)),
            );
            f.render_widget(list, *column);
        }

        Ok(())
    }
}
