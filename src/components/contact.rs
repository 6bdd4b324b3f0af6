use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use crate::core::state::form::{FormField, FormStatus};
use crate::core::state::AppState;
use crate::tui::Frame;

/// Contact details and the admission form.
#[derive(Debug, Clone, Default)]
pub struct Contact;

impl Contact {
    pub fn new() -> Self {
        Self
    }

    fn status_line(status: FormStatus) -> Option<(&'static str, Color)> {
        match status {
            FormStatus::Idle => None,
            FormStatus::Sending => Some(("Sending...", Color::Gray)),
            FormStatus::Success => Some(("Message sent successfully!", Color::Green)),
            FormStatus::Error => Some(("Failed to send message. Please try again.", Color::Red)),
        }
    }

    pub fn draw(&self, state: &AppState, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        let columns = Layout::new(
            Direction::Horizontal,
            [Constraint::Percentage(40), Constraint::Percentage(60)],
        )
        .split(rect);

        let academy = &state.content.academy;
        let info = Paragraph::new(vec![
            Line::styled("Contact Us", Style::default().bold()),
            Line::raw(""),
            Line::raw(format!("Address: {}", academy.address)),
            Line::raw(format!("Phone:   {}", academy.phone)),
            Line::raw(format!("Email:   {}", academy.email)),
            Line::raw(""),
            Line::styled("Monday to Saturday, 10AM to 8PM", Style::default().dim()),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title(academy.name.clone()));
        f.render_widget(info, columns[0]);

        use strum::IntoEnumIterator;
        let mut lines: Vec<Line> = Vec::new();
        for field in FormField::iter() {
            let value = state.form.fields().get(field);
            let focused = state.form.focused() == field;
            let marker = if focused { "> " } else { "  " };
            let style = if focused {
                Style::default().fg(Color::LightYellow)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(marker, style.bold()),
                Span::styled(format!("{}: ", field.label()), style.bold()),
                Span::styled(value.to_string(), style),
            ]));
        }
        lines.push(Line::raw(""));
        if let Some((text, color)) = Self::status_line(state.form.status()) {
            lines.push(Line::styled(text, Style::default().fg(color)));
        } else {
            lines.push(Line::styled(
                "Tab/Shift-Tab: field  type to edit  Enter: submit",
                Style::default().dim(),
            ));
        }

        let form = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title("Admission Form"));
        f.render_widget(form, columns[1]);

        Ok(())
    }
}
