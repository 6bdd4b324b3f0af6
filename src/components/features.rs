use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;
use crate::tui::Frame;

/// Teaching-philosophy cards and the team roster.
#[derive(Debug, Clone, Default)]
pub struct Features;

impl Features {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&self, state: &AppState, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(2),
                Constraint::Percentage(60),
                Constraint::Min(0),
            ],
        )
        .split(rect);

        let heading = Paragraph::new("What We Believe")
            .style(Style::default().bold())
            .alignment(Alignment::Center);
        f.render_widget(heading, layout[0]);

        let cards = &state.content.philosophy;
        if !cards.is_empty() {
            // Two rows of three cards; falls back gracefully for fewer
            let rows = Layout::new(
                Direction::Vertical,
                [Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)],
            )
            .split(layout[1]);

            for (row_idx, row) in rows.iter().enumerate() {
                let row_cards: Vec<_> = cards.iter().skip(row_idx * 3).take(3).collect();
                if row_cards.is_empty() {
                    continue;
                }
                let columns = Layout::new(
                    Direction::Horizontal,
                    vec![Constraint::Ratio(1, row_cards.len() as u32); row_cards.len()],
                )
                .split(*row);
                for (card, column) in row_cards.iter().zip(columns.iter()) {
                    let body = Paragraph::new(card.body.clone())
                        .wrap(Wrap { trim: true })
                        .block(Block::bordered().title(card.title.clone()));
                    f.render_widget(body, *column);
                }
            }
        }

        let team: Vec<Line> = state
            .content
            .team
            .iter()
            .map(|member| {
                Line::from(vec![
                    Span::styled(member.name.clone(), Style::default().bold()),
                    Span::raw(format!(" ({}) — {}", member.role, member.bio)),
                ])
            })
            .collect();
        let team = Paragraph::new(team)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title("Meet the Team"));
        f.render_widget(team, layout[2]);

        Ok(())
    }
}
