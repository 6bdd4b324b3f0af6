use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use crate::core::state::symbols::FIELD_MAX;
use crate::core::state::AppState;
use crate::tui::Frame;

/// Renders the drifting glyph field. Positions live in percent; this maps
/// them onto terminal cells.
#[derive(Debug, Clone, Default)]
pub struct SymbolField;

impl SymbolField {
    pub fn new() -> Self {
        Self
    }

    fn to_cell(position: f64, extent: u16) -> u16 {
        let extent = f64::from(extent.saturating_sub(1));
        ((position / FIELD_MAX) * extent).round() as u16
    }

    pub fn draw(&self, state: &AppState, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        if rect.width == 0 || rect.height == 0 {
            return Ok(());
        }

        for glyph in state.symbols.glyphs() {
            let x = rect.x + Self::to_cell(glyph.x, rect.width);
            let y = rect.y + Self::to_cell(glyph.y, rect.height);
            let cell = Rect {
                x: x.min(rect.right().saturating_sub(1)),
                y: y.min(rect.bottom().saturating_sub(1)),
                width: 1,
                height: 1,
            };
            let span = Paragraph::new(glyph.symbol.as_str()).style(Style::default().dim());
            f.render_widget(span, cell);
        }

        Ok(())
    }
}
