//! Worker card rendering.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use atelier_core::{UnassignedTask, WorkerSummary};
use atelier_tui_components::{layout_tags, truncate, Select, Theme};

use crate::state::{CardMode, CardState};

/// Rows a card occupies, borders included.
pub const CARD_HEIGHT: u16 = 17;

/// Selector rows shown in assign mode.
const SELECT_ROWS: u16 = 4;

/// Tag rows shown under "Specialties".
const TAG_ROWS: usize = 2;

/// Everything a card needs to draw itself.
pub struct CardView<'a> {
    pub worker: &'a WorkerSummary,
    pub card: &'a CardState,
    pub tasks: &'a [UnassignedTask],
    pub focused: bool,
}

pub fn render_card(frame: &mut Frame, area: Rect, view: &CardView<'_>, theme: &Theme) {
    let border = if view.focused {
        theme.focused_border()
    } else {
        theme.unfocused_border()
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [identity, _, active, _, label, tags, separator, actions] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(TAG_ROWS as u16),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    render_identity(frame, identity, view.worker, theme);

    frame.render_widget(
        Paragraph::new(spread(
            Span::styled("Active Tasks", theme.muted_style()),
            Span::styled(view.worker.active_task_count.to_string(), theme.bold()),
            inner.width,
        )),
        active,
    );

    frame.render_widget(
        Paragraph::new(Span::styled("SPECIALTIES", theme.label())),
        label,
    );
    render_tags(frame, tags, &view.worker.skills, theme);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "─".repeat(separator.width as usize),
            theme.unfocused_border(),
        )),
        separator,
    );

    match view.card.mode() {
        CardMode::Idle => render_idle_actions(frame, actions, view.focused, theme),
        CardMode::Selecting | CardMode::Submitting => {
            render_assign_actions(frame, actions, view, theme)
        }
    }
}

fn render_identity(frame: &mut Frame, area: Rect, worker: &WorkerSummary, theme: &Theme) {
    let badge = format!(" {} ", worker.status);
    let [left, right] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(badge.chars().count() as u16),
    ])
    .areas(area);

    let initial = worker.initial().map(String::from).unwrap_or_default();
    let name_width = (left.width as usize).saturating_sub(5);
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("({}) ", initial), theme.title()),
            Span::styled(truncate(&worker.name, name_width), theme.bold()),
        ]),
        Line::from(Span::styled(
            format!("    {}", truncate(&worker.role.to_uppercase(), name_width)),
            theme.muted_style(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), left);

    frame.render_widget(
        Paragraph::new(Span::styled(badge, theme.status_badge(worker.status.is_busy()))),
        right,
    );
}

fn render_tags(frame: &mut Frame, area: Rect, skills: &[String], theme: &Theme) {
    let lines: Vec<Line> = layout_tags(skills, area.width as usize)
        .into_iter()
        .take(TAG_ROWS)
        .map(|row| {
            let mut spans = Vec::new();
            for (i, tag) in row.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(format!(" {} ", tag), theme.tag()));
            }
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_idle_actions(frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
    let label = if focused {
        "[ + Assign Task (a) ]"
    } else {
        "[ + Assign Task ]"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, theme.button(true, false))).alignment(Alignment::Center),
        area,
    );
}

fn render_assign_actions(frame: &mut Frame, area: Rect, view: &CardView<'_>, theme: &Theme) {
    let [header, select, confirm] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(SELECT_ROWS),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(spread(
            Span::styled("SELECT TASK", theme.label()),
            Span::styled("Cancel (Esc)", theme.error_style()),
            area.width,
        )),
        header,
    );

    let options = CardState::options(view.tasks);
    let chosen = view.card.selected_task_id.as_ref().map(|_| view.card.cursor);
    Select::new(&options)
        .cursor(view.card.cursor)
        .chosen(chosen)
        .theme(theme.clone())
        .render(frame, select);

    let label = if view.card.loading {
        "[ Assigning... ]"
    } else {
        "[ Confirm ]"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, theme.button(view.card.can_confirm(), true)))
            .alignment(Alignment::Center),
        confirm,
    );
}

/// Put `left` at the start and `right` at the end of a `width`-wide line.
fn spread<'a>(left: Span<'a>, right: Span<'a>, width: u16) -> Line<'a> {
    let gap = (width as usize).saturating_sub(left.width() + right.width());
    Line::from(vec![left, Span::raw(" ".repeat(gap)), right])
}
