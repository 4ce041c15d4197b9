//! Inline option list, the terminal stand-in for a dropdown.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme::Theme;
use crate::utils::truncate;

/// One option of a [`Select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: true,
        }
    }
}

/// Option list with a highlighted cursor and a chosen entry.
///
/// Shows at most `visible` rows, scrolled so the cursor stays in view.
#[derive(Debug, Clone)]
pub struct Select<'a> {
    options: &'a [SelectOption],
    cursor: usize,
    chosen: Option<usize>,
    visible: usize,
    theme: Theme,
}

impl<'a> Select<'a> {
    pub fn new(options: &'a [SelectOption]) -> Self {
        Self {
            options,
            cursor: 0,
            chosen: None,
            visible: usize::MAX,
            theme: Theme::default(),
        }
    }

    /// Highlighted row.
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Row that is currently selected, marked with a bullet.
    pub fn chosen(mut self, chosen: Option<usize>) -> Self {
        self.chosen = chosen;
        self
    }

    /// Maximum rows to show.
    pub fn visible(mut self, rows: usize) -> Self {
        self.visible = rows.max(1);
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// First visible option index.
    pub fn scroll_offset(&self) -> usize {
        if self.cursor < self.visible {
            0
        } else {
            self.cursor + 1 - self.visible
        }
    }

    /// Build the visible lines for a given width.
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let offset = self.scroll_offset();
        self.options
            .iter()
            .enumerate()
            .skip(offset)
            .take(self.visible)
            .map(|(i, option)| {
                let marker = if self.chosen == Some(i) { "●" } else { " " };
                let pointer = if i == self.cursor { ">" } else { " " };
                let text = format!(
                    "{}{} {}",
                    pointer,
                    marker,
                    truncate(&option.label, width.saturating_sub(4))
                );

                let mut style = if option.disabled {
                    self.theme.muted_style().add_modifier(Modifier::ITALIC)
                } else {
                    self.theme.bold()
                };
                if i == self.cursor {
                    style = style.bg(self.theme.surface);
                }
                Line::from(Span::styled(text, style))
            })
            .collect()
    }

    /// Render the list into `area`.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let lines = self.visible(area.height as usize).lines(area.width as usize);
        frame.render_widget(Paragraph::new(lines), area);
    }
}
