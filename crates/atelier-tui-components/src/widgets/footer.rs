//! Footer widget with status on the left and key help after it.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme::Theme;

/// Footer widget displaying a status message and help text.
#[derive(Debug, Clone)]
pub struct Footer<'a> {
    /// Status message.
    status: &'a str,
    /// Key help.
    help: &'a str,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> Footer<'a> {
    /// Create a new footer.
    pub fn new(status: &'a str, help: &'a str) -> Self {
        Self {
            status,
            help,
            theme: Theme::default(),
        }
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the footer.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(format!(" {}", self.status), Style::default().fg(self.theme.success)),
            Span::raw(" | "),
            Span::styled(self.help, self.theme.muted_style()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
