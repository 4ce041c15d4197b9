//! Modal dialog widgets.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::theme::Theme;

/// Create a centered rectangle within the given area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Columns taken by an alert.
const ALERT_WIDTH: u16 = 50;

/// A blocking alert with a single acknowledge action.
#[derive(Debug, Clone)]
pub struct AlertDialog<'a> {
    /// Dialog title.
    title: &'a str,
    /// Main message.
    message: &'a str,
    /// Optional detail line (e.g. the underlying error).
    detail: Option<&'a str>,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> AlertDialog<'a> {
    /// Create a new alert.
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self {
            title,
            message,
            detail: None,
            theme: Theme::default(),
        }
    }

    /// Set a detail line shown under the message.
    pub fn detail(mut self, detail: &'a str) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the dialog over whatever is already drawn.
    pub fn render(self, frame: &mut Frame) {
        let height = if self.detail.is_some() { 9 } else { 7 };
        let area = centered_rect(ALERT_WIDTH, height, frame.area());

        frame.render_widget(Clear, area);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message,
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        if let Some(detail) = self.detail {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(detail, self.theme.muted_style())));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[Enter] OK",
            self.theme.button(true, true),
        )));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", self.title))
                    .borders(Borders::ALL)
                    .border_style(self.theme.error_style()),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }
}
