//! Main render function for the dashboard.

mod card;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use atelier_tui_components::{AlertDialog, Footer, Header, HeaderStat, Spinner, Theme};

use crate::state::{CardMode, PageState, PageView};

use card::{render_card, CardView, CARD_HEIGHT};

const TITLE: &str = "Atelier Artisans";
const SUBTITLE: &str = "Monitor real-time status and workload of your staff.";

/// Render the entire UI.
pub fn render(frame: &mut Frame, state: &PageState) {
    let theme = Theme::default();

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header_area, state, &theme);

    match state.view() {
        PageView::Loading => Spinner::new(state.tick)
            .label("Loading workers...")
            .theme(theme.clone())
            .render(frame, body_area),
        PageView::Error(message) => render_error_banner(frame, body_area, message, &theme),
        PageView::Grid => render_grid(frame, body_area, state, &theme),
    }

    render_footer(frame, footer_area, state, &theme);

    if let Some(alert) = &state.alert {
        let mut dialog = AlertDialog::new("Alert", &alert.message).theme(theme.clone());
        if let Some(detail) = &alert.detail {
            dialog = dialog.detail(detail);
        }
        dialog.render(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &PageState, theme: &Theme) {
    let busy = state.workers.iter().filter(|w| w.status.is_busy()).count();
    let action = if state.loading {
        "Refreshing..."
    } else {
        "Refresh Status"
    };

    Header::new(TITLE)
        .subtitle(SUBTITLE)
        .action(action, !state.loading)
        .stat(HeaderStat::new("Workers", state.workers.len().to_string()))
        .stat(HeaderStat::new("Busy", busy.to_string()).color(theme.warning))
        .stat(HeaderStat::new(
            "Unassigned",
            state.unassigned_tasks.len().to_string(),
        ))
        .theme(theme.clone())
        .render(frame, area);
}

fn render_error_banner(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let [banner, _] =
        Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);
    let paragraph = Paragraph::new(Span::styled(message, theme.error_style()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.error_style()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, banner);
}

/// Number of card columns for a given width.
fn grid_columns(width: u16) -> usize {
    match width {
        w if w >= 120 => 3,
        w if w >= 80 => 2,
        _ => 1,
    }
}

fn render_grid(frame: &mut Frame, area: Rect, state: &PageState, theme: &Theme) {
    if state.workers.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(" No workers found.", theme.muted_style())),
            area,
        );
        return;
    }

    let columns = grid_columns(area.width);
    let card_width = area.width / columns as u16;
    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let focused_row = state.focused / columns;
    let first_row = focused_row.saturating_sub(visible_rows - 1);

    for (index, (worker, card)) in state.workers.iter().zip(&state.cards).enumerate() {
        let row = index / columns;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }

        let y = area.y + ((row - first_row) as u16) * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if height == 0 {
            continue;
        }
        let x = area.x + (index % columns) as u16 * card_width;
        let rect = Rect::new(x, y, card_width, height);

        let view = CardView {
            worker,
            card,
            tasks: &state.unassigned_tasks,
            focused: index == state.focused,
        };
        render_card(frame, rect, &view, theme);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &PageState, theme: &Theme) {
    let status = match state.view() {
        PageView::Loading => "Refreshing...".to_string(),
        PageView::Error(_) => "Error (press 'r' to retry)".to_string(),
        PageView::Grid => match state.last_refreshed {
            Some(at) => format!("Updated {}", at.format("%H:%M:%S")),
            None => "Ready".to_string(),
        },
    };

    let help = if state.alert.is_some() {
        "Enter: dismiss"
    } else {
        match state.focused_card().map(|c| c.mode()) {
            Some(CardMode::Selecting) => "↑/↓: choose task | Enter: confirm | Esc: cancel | q: quit",
            Some(CardMode::Submitting) => "Assigning... | q: quit",
            _ => "←/→: focus | a: assign | r: refresh | q: quit",
        }
    };

    Footer::new(&status, help).theme(theme.clone()).render(frame, area);
}
