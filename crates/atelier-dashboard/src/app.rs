//! Application state and main event loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::config::RefreshPolicy;
use crate::event::{BackendCommand, UiEvent};
use crate::state::{CardMode, PageState, PageView, ASSIGN_ERROR_MESSAGE};
use crate::ui;

/// Main application with page state and channel handles.
pub struct App {
    /// Current page state for rendering.
    state: PageState,

    /// Receiver for events from the backend.
    ui_rx: mpsc::Receiver<UiEvent>,

    /// Sender for commands to the backend.
    cmd_tx: mpsc::Sender<BackendCommand>,
}

impl App {
    /// Create a new application instance with channel handles.
    pub fn new(
        policy: RefreshPolicy,
        ui_rx: mpsc::Receiver<UiEvent>,
        cmd_tx: mpsc::Sender<BackendCommand>,
    ) -> Self {
        Self {
            state: PageState::new(policy),
            ui_rx,
            cmd_tx,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Run the main event loop until the user quits.
    ///
    /// Issues the initial fetch, then on every iteration draws, handles at
    /// most one key press, and drains backend events.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.fetch_all();

        while !self.state.should_quit() {
            terminal.draw(|frame| ui::render(frame, &self.state))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            self.process_events();
            self.state.tick = self.state.tick.wrapping_add(1);
        }

        self.send(BackendCommand::Quit);
        Ok(())
    }

    fn process_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn send(&self, cmd: BackendCommand) {
        if let Err(e) = self.cmd_tx.blocking_send(cmd) {
            warn!(error = %e, "Backend command channel closed");
        }
    }

    /// Start a combined fetch of workers and unassigned tasks.
    pub fn fetch_all(&mut self) {
        let generation = self.state.begin_fetch();
        self.send(BackendCommand::FetchAll { generation });
    }

    /// Submit the focused card's selection, if it has one.
    fn handle_assign(&mut self) {
        match self.state.begin_assignment() {
            Ok(request) => {
                info!(
                    task_id = %request.task_id,
                    worker_id = %request.worker_id,
                    "Submitting assignment"
                );
                self.send(BackendCommand::AssignTask(request));
            }
            Err(e) => debug!(error = %e, "Assignment not submitted"),
        }
    }

    /// Apply an event from the backend to the page state.
    pub fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::DataLoaded {
                generation,
                workers,
                tasks,
            } => {
                self.state.apply_loaded(generation, workers, tasks);
            }
            UiEvent::DataLoadFailed {
                generation,
                message,
            } => {
                error!(generation, error = %message, "Failed to load dashboard data");
                self.state.apply_failed(generation);
            }
            UiEvent::AssignSucceeded { worker_id, task_id } => {
                match self.state.card_mut(&worker_id) {
                    Some(card) => card.finish_success(),
                    None => debug!(worker_id = %worker_id, "Assigned worker no longer listed"),
                }
                debug!(task_id = %task_id, "Refreshing after assignment");
                self.fetch_all();
            }
            UiEvent::AssignFailed {
                worker_id,
                task_id,
                message,
            } => {
                error!(
                    worker_id = %worker_id,
                    task_id = %task_id,
                    error = %message,
                    "Assignment failed"
                );
                if let Some(card) = self.state.card_mut(&worker_id) {
                    card.finish_failure();
                }
                self.state.raise_alert(ASSIGN_ERROR_MESSAGE, Some(message));
            }
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // The alert blocks everything until acknowledged.
        if self.state.alert.is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.state.dismiss_alert();
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.state.request_quit(),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.request_quit();
            }

            KeyCode::Char('r') => {
                if self.state.loading {
                    debug!("Refresh ignored, fetch already in progress");
                } else {
                    self.fetch_all();
                }
            }

            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.state.focus_next(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.state.focus_prev(),

            _ => self.handle_card_key(code),
        }
    }

    fn handle_card_key(&mut self, code: KeyCode) {
        // Cards are only interactive while they are on screen.
        if self.state.view() != PageView::Grid {
            debug!(?code, "Card key ignored, cards not shown");
            return;
        }

        let mode = match self.state.focused_card() {
            Some(card) => card.mode(),
            None => return,
        };

        match (mode, code) {
            (CardMode::Idle, KeyCode::Char('a') | KeyCode::Enter) => self.state.enter_assign(),
            (CardMode::Idle, KeyCode::Down | KeyCode::Char('j')) => self.state.focus_next(),
            (CardMode::Idle, KeyCode::Up | KeyCode::Char('k')) => self.state.focus_prev(),

            (CardMode::Selecting, KeyCode::Down | KeyCode::Char('j')) => {
                self.state.move_selection(1)
            }
            (CardMode::Selecting, KeyCode::Up | KeyCode::Char('k')) => {
                self.state.move_selection(-1)
            }
            (CardMode::Selecting, KeyCode::Enter) => self.handle_assign(),
            (CardMode::Selecting, KeyCode::Esc) => self.state.cancel_assign(),

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use atelier_core::{AssignTaskRequest, UnassignedTask, WorkerSummary, MANUAL_ASSIGNMENT_REASON};

    use crate::state::LOAD_ERROR_MESSAGE;
    use crate::testing::FakeOwnerApi;

    fn new_app() -> (App, mpsc::Sender<UiEvent>, mpsc::Receiver<BackendCommand>) {
        let (ui_tx, ui_rx) = mpsc::channel(16);
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        (App::new(RefreshPolicy::default(), ui_rx, cmd_tx), ui_tx, cmd_rx)
    }

    fn drain(cmd_rx: &mut mpsc::Receiver<BackendCommand>) -> Vec<BackendCommand> {
        let mut cmds = Vec::new();
        while let Ok(cmd) = cmd_rx.try_recv() {
            cmds.push(cmd);
        }
        cmds
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
    }

    /// App with the scenario data loaded and no pending commands.
    fn loaded_app() -> (App, mpsc::Receiver<BackendCommand>) {
        let (mut app, _ui_tx, mut cmd_rx) = new_app();
        let api = FakeOwnerApi::scenario();
        app.fetch_all();
        let generation = app.state().generation;
        app.apply_event(UiEvent::DataLoaded {
            generation,
            workers: api.workers.clone(),
            tasks: api.tasks.clone(),
        });
        drain(&mut cmd_rx);
        (app, cmd_rx)
    }

    #[test]
    fn test_fetch_all_sets_loading() {
        let (mut app, _ui_tx, mut cmd_rx) = new_app();
        app.fetch_all();

        assert!(app.state().loading);
        assert_eq!(
            drain(&mut cmd_rx),
            vec![BackendCommand::FetchAll { generation: 1 }]
        );
    }

    #[test]
    fn test_refresh_ignored_while_loading() {
        let (mut app, _ui_tx, mut cmd_rx) = new_app();
        app.fetch_all();
        drain(&mut cmd_rx);

        press(&mut app, KeyCode::Char('r'));
        assert!(drain(&mut cmd_rx).is_empty());

        app.apply_event(UiEvent::DataLoadFailed {
            generation: 1,
            message: "boom".to_string(),
        });
        assert_eq!(app.state().error.as_deref(), Some(LOAD_ERROR_MESSAGE));
        assert!(!app.state().loading);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(
            drain(&mut cmd_rx),
            vec![BackendCommand::FetchAll { generation: 2 }]
        );
    }

    #[test]
    fn test_assignment_scenario_success() {
        let (mut app, mut cmd_rx) = loaded_app();

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.state().cards[0].mode(), CardMode::Selecting);

        // Confirm with nothing selected does nothing.
        press(&mut app, KeyCode::Enter);
        assert!(drain(&mut cmd_rx).is_empty());

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        let expected = AssignTaskRequest::new("t1".into(), "w1".into(), MANUAL_ASSIGNMENT_REASON)
            .unwrap();
        assert_eq!(
            drain(&mut cmd_rx),
            vec![BackendCommand::AssignTask(expected)]
        );
        assert_eq!(app.state().cards[0].mode(), CardMode::Submitting);

        // Confirm again while in flight is ignored.
        press(&mut app, KeyCode::Enter);
        assert!(drain(&mut cmd_rx).is_empty());

        app.apply_event(UiEvent::AssignSucceeded {
            worker_id: "w1".into(),
            task_id: "t1".into(),
        });

        assert_eq!(app.state().cards[0].mode(), CardMode::Idle);
        assert!(app.state().cards[0].selected_task_id.is_none());
        assert_eq!(
            drain(&mut cmd_rx),
            vec![BackendCommand::FetchAll { generation: 2 }]
        );
    }

    #[test]
    fn test_assignment_failure_keeps_selection_and_alerts() {
        let (mut app, mut cmd_rx) = loaded_app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        drain(&mut cmd_rx);

        app.apply_event(UiEvent::AssignFailed {
            worker_id: "w1".into(),
            task_id: "t1".into(),
            message: "HTTP 500: /owner/tasks/t1/assign".to_string(),
        });

        let card = &app.state().cards[0];
        assert_eq!(card.mode(), CardMode::Selecting);
        assert_eq!(card.selected_task_id.as_ref().map(|t| t.as_str()), Some("t1"));
        assert_eq!(
            app.state().alert.as_ref().map(|a| a.message.as_str()),
            Some(ASSIGN_ERROR_MESSAGE)
        );
        // No refetch on failure.
        assert!(drain(&mut cmd_rx).is_empty());

        // Alert swallows keys until dismissed.
        press(&mut app, KeyCode::Esc);
        assert!(app.state().alert.is_none());
        assert_eq!(app.state().cards[0].mode(), CardMode::Selecting);

        press(&mut app, KeyCode::Enter);
        assert_eq!(drain(&mut cmd_rx).len(), 1);
    }

    #[test]
    fn test_alert_blocks_other_keys() {
        let (mut app, mut cmd_rx) = loaded_app();
        app.apply_event(UiEvent::AssignFailed {
            worker_id: "w1".into(),
            task_id: "t1".into(),
            message: "down".to_string(),
        });

        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('q'));
        assert!(drain(&mut cmd_rx).is_empty());
        assert!(!app.state().should_quit());

        press(&mut app, KeyCode::Enter);
        assert!(app.state().alert.is_none());
    }

    #[test]
    fn test_success_for_vanished_worker_still_refreshes() {
        let (mut app, mut cmd_rx) = loaded_app();
        app.apply_event(UiEvent::AssignSucceeded {
            worker_id: "gone".into(),
            task_id: "t1".into(),
        });
        assert_eq!(drain(&mut cmd_rx).len(), 1);
    }

    #[test]
    fn test_escape_cancels_assign_mode() {
        let (mut app, _cmd_rx) = loaded_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);

        let card = &app.state().cards[0];
        assert_eq!(card.mode(), CardMode::Idle);
        assert!(card.selected_task_id.is_none());
    }

    #[test]
    fn test_cards_keep_independent_state() {
        let (mut app, _ui_tx, mut cmd_rx) = new_app();
        app.fetch_all();
        app.apply_event(UiEvent::DataLoaded {
            generation: 1,
            workers: vec![WorkerSummary::new("w1", "Ana"), WorkerSummary::new("w2", "Bo")],
            tasks: vec![UnassignedTask::new("t1", "Carve leg")],
        });
        drain(&mut cmd_rx);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state().focused, 1);
        assert_eq!(app.state().cards[0].mode(), CardMode::Selecting);
        assert_eq!(app.state().cards[1].mode(), CardMode::Idle);
    }

    #[test]
    fn test_card_keys_ignored_while_error_shown() {
        let (mut app, mut cmd_rx) = loaded_app();
        app.fetch_all();
        let generation = app.state().generation;
        app.apply_event(UiEvent::DataLoadFailed {
            generation,
            message: "down".to_string(),
        });
        drain(&mut cmd_rx);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state().cards[0].mode(), CardMode::Idle);
        assert!(drain(&mut cmd_rx).is_empty());
    }

    #[test]
    fn test_card_keys_ignored_while_loading() {
        let (mut app, mut cmd_rx) = loaded_app();
        app.fetch_all();
        drain(&mut cmd_rx);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state().cards[0].mode(), CardMode::Idle);
        assert!(drain(&mut cmd_rx).is_empty());
    }

    #[test]
    fn test_refetch_after_other_card_resets_open_selector() {
        let (mut app, _ui_tx, mut cmd_rx) = new_app();
        app.fetch_all();
        app.apply_event(UiEvent::DataLoaded {
            generation: 1,
            workers: vec![WorkerSummary::new("w1", "Ana"), WorkerSummary::new("w2", "Bo")],
            tasks: vec![
                UnassignedTask::new("t1", "Carve leg"),
                UnassignedTask::new("t2", "Sand top"),
            ],
        });
        drain(&mut cmd_rx);

        // w1 submits t1.
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        // w2 opens its selector on t2.
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(
            app.state().cards[1].selected_task_id.as_ref().map(|t| t.as_str()),
            Some("t2")
        );
        drain(&mut cmd_rx);

        app.apply_event(UiEvent::AssignSucceeded {
            worker_id: "w1".into(),
            task_id: "t1".into(),
        });
        let generation = app.state().generation;
        app.apply_event(UiEvent::DataLoaded {
            generation,
            workers: vec![WorkerSummary::new("w1", "Ana"), WorkerSummary::new("w2", "Bo")],
            tasks: vec![UnassignedTask::new("t2", "Sand top")],
        });

        for card in &app.state().cards {
            assert_eq!(card.mode(), CardMode::Idle);
            assert!(card.selected_task_id.is_none());
        }
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _ui_tx, _cmd_rx) = new_app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.state().should_quit());

        let (mut app, _ui_tx, _cmd_rx) = new_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.state().should_quit());
    }
}
