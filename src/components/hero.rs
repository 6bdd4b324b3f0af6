use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use crate::components::symbols::SymbolField;
use crate::core::state::AppState;
use crate::tui::Frame;

/// Landing view: academy name and tagline over the drifting symbol field.
#[derive(Debug, Clone, Default)]
pub struct Hero {
    symbols: SymbolField,
}

impl Hero {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&self, state: &AppState, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        self.symbols.draw(state, f, rect)?;

        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Percentage(35),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(0),
            ],
        )
        .split(rect);

        let title = Paragraph::new(Line::from(vec![
            Span::raw("Welcome To "),
            Span::styled(
                state.content.academy.name.clone(),
                Style::default().fg(Color::LightYellow).bold(),
            ),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(title, layout[1]);

        let tagline = Paragraph::new(state.content.academy.tagline.clone())
            .style(Style::default().fg(Color::Gray).italic())
            .alignment(Alignment::Center);
        f.render_widget(tagline, layout[2]);

        let hint = Paragraph::new("Tab: explore  c: ask a question  q: quit")
            .style(Style::default().dim())
            .alignment(Alignment::Center);
        f.render_widget(hint, layout[3]);

        Ok(())
    }
}
