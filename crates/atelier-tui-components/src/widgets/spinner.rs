//! Centered loading spinner.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme::Theme;

const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Animated spinner driven by an external tick counter.
#[derive(Debug, Clone)]
pub struct Spinner<'a> {
    tick: u64,
    label: Option<&'a str>,
    theme: Theme,
}

impl<'a> Spinner<'a> {
    pub fn new(tick: u64) -> Self {
        Self {
            tick,
            label: None,
            theme: Theme::default(),
        }
    }

    /// Text shown next to the glyph.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Glyph for the current tick.
    pub fn glyph(&self) -> &'static str {
        FRAMES[(self.tick % FRAMES.len() as u64) as usize]
    }

    /// Render vertically and horizontally centered in `area`.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(self.glyph(), self.theme.title())];
        if let Some(label) = self.label {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(label, self.theme.muted_style()));
        }

        let y = area.y + area.height / 2;
        let row = Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            row,
        );
    }
}
