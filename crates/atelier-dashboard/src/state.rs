//! Page and card state for rendering.
//!
//! The page owns the fetched lists; each card owns only its own interaction
//! state. Cards talk to the page through [`crate::app::App`], never directly.

use chrono::{DateTime, Utc};
use tracing::debug;

use atelier_core::{AssignTaskRequest, CoreError, TaskId, UnassignedTask, WorkerId, WorkerSummary};
use atelier_tui_components::SelectOption;

use crate::config::{RefreshPolicy, StaleDataPolicy};

/// Banner text shown when the combined fetch fails.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load dashboard data.";

/// Alert text shown when an assignment fails.
pub const ASSIGN_ERROR_MESSAGE: &str = "Failed to assign task";

/// Selector placeholder meaning "no selection".
pub const SELECT_PLACEHOLDER: &str = "Choose task...";

/// Disabled selector entry shown when there is nothing to assign.
pub const NO_TASKS_OPTION: &str = "No unassigned tasks";

/// Where a card is in the assign flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    /// Assign UI hidden.
    Idle,
    /// Selector visible, no request in flight.
    Selecting,
    /// Assignment request in flight.
    Submitting,
}

/// Interaction state owned by one worker card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    pub worker_id: WorkerId,
    pub assigning: bool,
    pub selected_task_id: Option<TaskId>,
    pub loading: bool,
    /// Selector row: 0 is the placeholder, `n` is task `n - 1`.
    pub cursor: usize,
}

impl CardState {
    pub fn new(worker_id: WorkerId) -> Self {
        Self {
            worker_id,
            assigning: false,
            selected_task_id: None,
            loading: false,
            cursor: 0,
        }
    }

    pub fn mode(&self) -> CardMode {
        match (self.assigning, self.loading) {
            (false, _) => CardMode::Idle,
            (true, false) => CardMode::Selecting,
            (true, true) => CardMode::Submitting,
        }
    }

    /// Show the selector with a fresh, empty selection.
    pub fn enter_assign(&mut self) {
        self.assigning = true;
        self.selected_task_id = None;
        self.cursor = 0;
    }

    /// Hide the selector and drop any partial selection.
    ///
    /// Ignored while a request is in flight.
    pub fn cancel(&mut self) {
        if self.loading {
            return;
        }
        self.assigning = false;
        self.selected_task_id = None;
        self.cursor = 0;
    }

    /// Selector options: the placeholder, then the tasks. A disabled entry
    /// stands in for the tasks when there are none.
    pub fn options(tasks: &[UnassignedTask]) -> Vec<SelectOption> {
        let mut options = vec![SelectOption::new(SELECT_PLACEHOLDER)];
        if tasks.is_empty() {
            options.push(SelectOption::disabled(NO_TASKS_OPTION));
        }
        options.extend(tasks.iter().map(|t| SelectOption::new(t.title.clone())));
        options
    }

    /// Move the selector cursor by `delta` rows and select what it lands on.
    pub fn move_selection(&mut self, delta: isize, tasks: &[UnassignedTask]) {
        if self.mode() != CardMode::Selecting {
            return;
        }
        // The disabled entry is never selectable, so with no tasks the cursor
        // has nowhere to go but the placeholder.
        let last = tasks.len() as isize;
        let cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
        self.cursor = cursor;
        self.selected_task_id = match cursor {
            0 => None,
            n => Some(tasks[n - 1].id.clone()),
        };
    }

    /// Confirm is enabled only with a selection and no request in flight.
    pub fn can_confirm(&self) -> bool {
        self.assigning && self.selected_task_id.is_some() && !self.loading
    }

    /// Validate the selection and mark the card as submitting.
    pub fn begin_submit(
        &mut self,
        tasks: &[UnassignedTask],
    ) -> Result<AssignTaskRequest, CoreError> {
        if !self.can_confirm() {
            return Err(CoreError::InvalidInput("no task selected".to_string()));
        }
        let task_id = match &self.selected_task_id {
            Some(id) if tasks.iter().any(|t| &t.id == id) => id.clone(),
            Some(id) => return Err(CoreError::TaskNotFound(id.to_string())),
            None => return Err(CoreError::InvalidInput("no task selected".to_string())),
        };

        let request = AssignTaskRequest::manual(task_id, self.worker_id.clone())?;
        self.loading = true;
        Ok(request)
    }

    /// The backend accepted the assignment.
    pub fn finish_success(&mut self) {
        self.assigning = false;
        self.selected_task_id = None;
        self.loading = false;
        self.cursor = 0;
    }

    /// The backend rejected the assignment; keep the selection for a retry.
    pub fn finish_failure(&mut self) {
        self.loading = false;
    }

    /// Re-anchor the selection against a new task list, clearing it if the
    /// selected task is gone.
    fn reconcile(&mut self, tasks: &[UnassignedTask]) {
        let position = self
            .selected_task_id
            .as_ref()
            .and_then(|id| tasks.iter().position(|t| &t.id == id));
        match position {
            Some(index) => self.cursor = index + 1,
            None => {
                self.selected_task_id = None;
                self.cursor = 0;
            }
        }
    }
}

/// What the body of the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView<'a> {
    Loading,
    Error(&'a str),
    Grid,
}

/// A blocking alert awaiting acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub detail: Option<String>,
}

/// Snapshot of page data for rendering (no async, no locks).
#[derive(Debug, Default)]
pub struct PageState {
    /// Workers in backend order.
    pub workers: Vec<WorkerSummary>,

    /// Unassigned tasks in backend order.
    pub unassigned_tasks: Vec<UnassignedTask>,

    /// One card per worker, same order as `workers`.
    pub cards: Vec<CardState>,

    /// Whole-page fetch in progress.
    pub loading: bool,

    /// Banner message of the last failed fetch.
    pub error: Option<String>,

    /// When the lists were last replaced.
    pub last_refreshed: Option<DateTime<Utc>>,

    /// Index of the focused card.
    pub focused: usize,

    /// Pending blocking alert.
    pub alert: Option<Alert>,

    /// Generation of the newest issued fetch.
    pub generation: u64,

    /// Frame counter for the spinner.
    pub tick: u64,

    pub policy: RefreshPolicy,

    should_quit: bool,
}

impl PageState {
    pub fn new(policy: RefreshPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn view(&self) -> PageView<'_> {
        if self.loading {
            PageView::Loading
        } else if let Some(error) = &self.error {
            PageView::Error(error)
        } else {
            PageView::Grid
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Mark a fetch as started and return its generation.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    fn is_outdated(&self, generation: u64) -> bool {
        self.policy.discard_stale && generation < self.generation
    }

    /// Apply both fetched lists at once. Returns false if the result was
    /// discarded as outdated.
    pub fn apply_loaded(
        &mut self,
        generation: u64,
        workers: Vec<WorkerSummary>,
        tasks: Vec<UnassignedTask>,
    ) -> bool {
        if self.is_outdated(generation) {
            debug!(generation, latest = self.generation, "Discarding outdated fetch result");
            return false;
        }

        self.workers = workers;
        self.unassigned_tasks = tasks;
        self.rebuild_cards();
        self.error = None;
        self.loading = false;
        self.last_refreshed = Some(Utc::now());
        true
    }

    /// Record a failed fetch. Returns false if the failure was discarded as
    /// outdated.
    pub fn apply_failed(&mut self, generation: u64) -> bool {
        if self.is_outdated(generation) {
            debug!(generation, latest = self.generation, "Discarding outdated fetch failure");
            return false;
        }

        if self.policy.stale_data == StaleDataPolicy::Clear {
            self.workers.clear();
            self.unassigned_tasks.clear();
            self.rebuild_cards();
        }
        self.error = Some(LOAD_ERROR_MESSAGE.to_string());
        self.loading = false;
        true
    }

    /// Rebuild cards for the current worker list.
    ///
    /// Every card starts over idle, except a card whose assignment is still
    /// in flight: it keeps its state so the late outcome lands on it.
    fn rebuild_cards(&mut self) {
        let mut previous = std::mem::take(&mut self.cards);
        self.cards = self
            .workers
            .iter()
            .map(|w| {
                let submitting = previous
                    .iter()
                    .position(|c| c.worker_id == w.id && c.mode() == CardMode::Submitting);
                match submitting {
                    Some(i) => {
                        let mut card = previous.swap_remove(i);
                        card.reconcile(&self.unassigned_tasks);
                        card
                    }
                    None => CardState::new(w.id.clone()),
                }
            })
            .collect();
        self.focused = self.focused.min(self.cards.len().saturating_sub(1));
    }

    pub fn card(&self, worker_id: &WorkerId) -> Option<&CardState> {
        self.cards.iter().find(|c| &c.worker_id == worker_id)
    }

    pub fn card_mut(&mut self, worker_id: &WorkerId) -> Option<&mut CardState> {
        self.cards.iter_mut().find(|c| &c.worker_id == worker_id)
    }

    pub fn focused_card(&self) -> Option<&CardState> {
        self.cards.get(self.focused)
    }

    pub fn focus_next(&mut self) {
        if !self.cards.is_empty() {
            self.focused = (self.focused + 1) % self.cards.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.cards.is_empty() {
            self.focused = (self.focused + self.cards.len() - 1) % self.cards.len();
        }
    }

    pub fn enter_assign(&mut self) {
        if let Some(card) = self.cards.get_mut(self.focused) {
            card.enter_assign();
        }
    }

    pub fn cancel_assign(&mut self) {
        if let Some(card) = self.cards.get_mut(self.focused) {
            card.cancel();
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        if let Some(card) = self.cards.get_mut(self.focused) {
            card.move_selection(delta, &self.unassigned_tasks);
        }
    }

    /// Start submitting the focused card's selection.
    pub fn begin_assignment(&mut self) -> Result<AssignTaskRequest, CoreError> {
        let focused = self.focused;
        match self.cards.get_mut(focused) {
            Some(card) => card.begin_submit(&self.unassigned_tasks),
            None => Err(CoreError::WorkerNotFound(format!("card #{}", focused))),
        }
    }

    /// Raise the blocking alert, replacing any earlier one.
    pub fn raise_alert(&mut self, message: impl Into<String>, detail: Option<String>) {
        self.alert = Some(Alert {
            message: message.into(),
            detail,
        });
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
