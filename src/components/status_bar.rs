use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::core::state::{ActiveSection, AppState};
use crate::tui::Frame;

/// One-line bar: section tabs on the left, transient status on the right.
#[derive(Debug, Clone, Default)]
pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&self, state: &AppState, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        f.render_widget(Clear, rect);

        let mut spans: Vec<Span> = Vec::new();
        for section in ActiveSection::iter() {
            let style = if section == state.system.active_section {
                Style::default().fg(Color::LightYellow).bold()
            } else {
                Style::default().dim()
            };
            spans.push(Span::styled(section.title(), style));
            spans.push(Span::raw("  "));
        }

        let tabs = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
        f.render_widget(tabs, rect);

        if let Some(message) = &state.system.status_message {
            let status = Paragraph::new(Span::styled(
                message.clone(),
                Style::default().fg(Color::Gray).italic(),
            ))
            .alignment(Alignment::Right);
            f.render_widget(status, rect);
        }

        Ok(())
    }
}
