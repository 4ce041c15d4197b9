//! Theme and style definitions.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the dashboard.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary accent color (title, focused card, confirm control)
    pub accent: Color,
    /// Available/free badge color
    pub success: Color,
    /// Busy badge color
    pub warning: Color,
    /// Error banner and cancel control color
    pub error: Color,
    /// Muted color (labels, secondary info)
    pub muted: Color,
    /// Primary text color
    pub text: Color,
    /// Background for skill tags and focused inputs
    pub surface: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(234, 88, 12),
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            muted: Color::DarkGray,
            text: Color::Gray,
            surface: Color::Rgb(41, 37, 36),
        }
    }
}

impl Theme {
    /// Style for focused/active borders.
    pub fn focused_border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for unfocused borders.
    pub fn unfocused_border(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for the page title.
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Badge style for a worker status; busy and everything else.
    pub fn status_badge(&self, busy: bool) -> Style {
        let color = if busy { self.warning } else { self.success };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for muted/secondary text.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for uppercase section labels.
    pub fn label(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::BOLD)
    }

    /// Style for bold primary text.
    pub fn bold(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Style for a skill tag.
    pub fn tag(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    /// Style for a button-like control.
    pub fn button(&self, enabled: bool, primary: bool) -> Style {
        match (enabled, primary) {
            (false, _) => Style::default().fg(self.muted).add_modifier(Modifier::DIM),
            (true, true) => Style::default()
                .fg(Color::White)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(self.text).add_modifier(Modifier::BOLD),
        }
    }
}
