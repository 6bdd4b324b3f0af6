use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use crate::core::state::carousel::{Accent, SLIDE_TICKS};
use crate::core::state::AppState;
use crate::tui::Frame;

/// The "Our Story" card carousel with its dot row.
#[derive(Debug, Clone, Default)]
pub struct StoryCarousel;

impl StoryCarousel {
    pub fn new() -> Self {
        Self
    }

    /// Horizontal offset of the incoming card while a slide transition is
    /// in flight: starts at the full width and decays to zero.
    fn slide_offset(ticks_left: u8, width: u16) -> u16 {
        (u32::from(width) * u32::from(ticks_left) / u32::from(SLIDE_TICKS)) as u16
    }

    pub fn draw(&self, state: &AppState, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(2),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .split(rect);

        let heading = Paragraph::new("Our Story")
            .style(Style::default().bold())
            .alignment(Alignment::Center);
        f.render_widget(heading, layout[0]);

        let card = state.carousel.current();
        let accent_color = match card.accent {
            Accent::Primary => Color::Blue,
            Accent::Secondary => Color::LightYellow,
        };

        let mut card_area = layout[1];
        if let Some(slide) = state.carousel.slide() {
            let offset = Self::slide_offset(slide.ticks_left, card_area.width / 3);
            card_area.x = card_area.x.saturating_add(offset);
            card_area.width = card_area.width.saturating_sub(offset);
        }

        let body = Paragraph::new(card.body.clone())
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title(card.title.clone())
                    .border_style(Style::default().fg(accent_color)),
            );
        f.render_widget(body, card_area);

        // Dot row: one marker per card, the current one filled
        let dots: Vec<Span> = (0..state.carousel.len())
            .map(|i| {
                if i == state.carousel.current_index() {
                    Span::styled("●", Style::default().fg(accent_color))
                } else {
                    Span::styled("○", Style::default().dim())
                }
            })
            .collect();
        let dot_row = Paragraph::new(Line::from(
            dots.into_iter()
                .flat_map(|dot| [dot, Span::raw(" ")])
                .collect::<Vec<_>>(),
        ))
        .alignment(Alignment::Center);
        f.render_widget(dot_row, layout[2]);

        let hint = if state.carousel.can_advance() {
            "→/Space: next  1-9: jump"
        } else {
            "1-9: jump"
        };
        let hint = Paragraph::new(hint)
            .style(Style::default().dim())
            .alignment(Alignment::Center);
        f.render_widget(hint, layout[3]);

        Ok(())
    }
}
