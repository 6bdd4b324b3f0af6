use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::core::state::chat::{ChatView, KnowledgeBase, Sender};
use crate::core::state::AppState;
use crate::tui::Frame;

/// The FAQ widget overlay: transcript on top, then the decision tree
/// (categories, questions, or the back-to-questions control).
#[derive(Debug, Clone, Default)]
pub struct ChatWidget;

impl ChatWidget {
    pub fn new() -> Self {
        Self
    }

    /// Width the overlay wants: the widest option line, clamped.
    fn content_width(kb: &KnowledgeBase) -> u16 {
        kb.categories()
            .flat_map(|category| {
                kb.questions(category)
                    .into_iter()
                    .flatten()
                    .chain(std::iter::once(category))
            })
            .map(|text| text.width() as u16 + 8)
            .max()
            .unwrap_or(40)
    }

    fn overlay_area(rect: Rect, content_width: u16) -> Rect {
        let width = rect.width.min(content_width.clamp(40, 64));
        let height = rect.height.min(20);
        Rect {
            x: rect.right().saturating_sub(width + 1),
            y: rect.bottom().saturating_sub(height + 1),
            width,
            height,
        }
    }

    pub fn draw(&self, state: &AppState, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        let area = Self::overlay_area(rect, Self::content_width(state.chat.knowledge_base()));
        f.render_widget(Clear, area);

        let block = Block::bordered()
            .title(format!("{} Chatbot", state.content.academy.name))
            .border_style(Style::default().fg(Color::Blue));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(3), Constraint::Length(1)],
        )
        .split(inner);

        let mut lines: Vec<Line> = Vec::new();
        for message in state.chat.transcript() {
            let (prefix, style) = match message.sender {
                Sender::User => ("you: ", Style::default().fg(Color::LightYellow)),
                Sender::Bot => ("bot: ", Style::default().fg(Color::Gray)),
            };
            lines.push(Line::from(vec![
                Span::styled(prefix, style.bold()),
                Span::raw(message.text.clone()),
            ]));
        }
        if !lines.is_empty() {
            lines.push(Line::raw(""));
        }

        match state.chat.view() {
            ChatView::Categories => {
                lines.push(Line::styled("Choose a category:", Style::default().bold()));
                for (i, category) in state.chat.knowledge_base().categories().enumerate() {
                    lines.push(Line::raw(format!("  {}. {}", i + 1, category)));
                }
            }
            ChatView::Questions(category) => {
                lines.push(Line::styled("Select a question:", Style::default().bold()));
                if let Some(questions) = state.chat.knowledge_base().questions(category) {
                    for (i, question) in questions.enumerate() {
                        lines.push(Line::raw(format!("  {}. {}", i + 1, question)));
                    }
                }
            }
            ChatView::Answered(_) => {}
        }

        let body = Paragraph::new(lines).wrap(Wrap { trim: false });
        f.render_widget(body, layout[0]);

        let hint = match state.chat.view() {
            ChatView::Categories => "1-9: pick  Esc: close",
            ChatView::Questions(_) => "1-9: pick  b: back  Esc: close",
            ChatView::Answered(_) => "b: back to questions  Esc: close",
        };
        let footer = Paragraph::new(hint).style(Style::default().dim());
        f.render_widget(footer, layout[1]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_overlay_fits_inside_screen() {
        let screen = Rect::new(0, 0, 120, 40);
        let area = ChatWidget::overlay_area(screen, 64);

        assert!(area.right() <= screen.right());
        assert!(area.bottom() <= screen.bottom());
        assert_eq!(area.width, 64);
        assert_eq!(area.height, 20);
    }

    #[test]
    fn test_overlay_clamps_on_small_screen() {
        let screen = Rect::new(0, 0, 40, 10);
        let area = ChatWidget::overlay_area(screen, 100);

        assert!(area.width <= 40);
        assert!(area.height <= 10);
    }

    #[test]
    fn test_content_width_tracks_widest_line() {
        use indexmap::IndexMap;

        let mut questions = IndexMap::new();
        questions.insert("Short?".to_string(), "Yes.".to_string());
        let mut entries = IndexMap::new();
        entries.insert("Fees".to_string(), questions);
        let kb = KnowledgeBase::new(entries);

        assert_eq!(ChatWidget::content_width(&kb), "Short?".len() as u16 + 8);
    }
}
