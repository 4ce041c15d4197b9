//! Page header: title, subtitle, stats, and a single action control.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;

/// A stat to display in the header.
#[derive(Debug, Clone)]
pub struct HeaderStat {
    pub label: String,
    pub value: String,
    pub color: Color,
}

impl HeaderStat {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            color: Color::Cyan,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Header widget.
#[derive(Debug, Clone)]
pub struct Header<'a> {
    title: &'a str,
    subtitle: Option<&'a str>,
    /// Action label and whether it is enabled.
    action: Option<(&'a str, bool)>,
    stats: Vec<HeaderStat>,
    theme: Theme,
}

impl<'a> Header<'a> {
    /// Create a new header with a title.
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            subtitle: None,
            action: None,
            stats: Vec::new(),
            theme: Theme::default(),
        }
    }

    /// Set the subtitle line.
    pub fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    /// Set the action control shown on the right.
    pub fn action(mut self, label: &'a str, enabled: bool) -> Self {
        self.action = Some((label, enabled));
        self
    }

    /// Add a stat to display.
    pub fn stat(mut self, stat: HeaderStat) -> Self {
        self.stats.push(stat);
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the header. Needs four rows of height.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.unfocused_border())
            .title(Span::styled(format!(" {} ", self.title), self.theme.title()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let action_width = self
            .action
            .map(|(label, _)| label.chars().count() as u16 + 4)
            .unwrap_or(0);
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(action_width)])
                .areas(inner);

        let mut lines = Vec::new();
        if let Some(subtitle) = self.subtitle {
            lines.push(Line::from(Span::styled(
                format!(" {}", subtitle),
                self.theme.muted_style(),
            )));
        }
        if !self.stats.is_empty() {
            let mut spans = vec![Span::raw(" ")];
            for (i, stat) in self.stats.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" | "));
                }
                spans.push(Span::raw(format!("{}: ", stat.label)));
                spans.push(Span::styled(
                    stat.value.clone(),
                    Style::default().fg(stat.color),
                ));
            }
            lines.push(Line::from(spans));
        }
        frame.render_widget(Paragraph::new(lines), left);

        if let Some((label, enabled)) = self.action {
            let button = Paragraph::new(Line::from(Span::styled(
                format!("[ {} ]", label),
                self.theme.button(enabled, false),
            )));
            frame.render_widget(button, right);
        }
    }
}
