//! Background task that talks to the owner backend.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use atelier_admin_client::OwnerApi;
use atelier_core::AssignTaskRequest;

use crate::event::{BackendCommand, UiEvent};

/// Run the backend command loop.
///
/// This function runs in a separate thread with its own tokio runtime. Every
/// fetch and assignment is spawned as its own task, so a slow request never
/// holds up a later one and results arrive in completion order.
pub async fn run_backend(
    api: Arc<dyn OwnerApi>,
    ui_tx: mpsc::Sender<UiEvent>,
    mut cmd_rx: mpsc::Receiver<BackendCommand>,
) {
    info!("Backend started");

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            BackendCommand::Quit => {
                info!("Received quit command, shutting down backend");
                break;
            }
            BackendCommand::FetchAll { generation } => {
                debug!(generation, "Fetching workers and unassigned tasks");
                let api = Arc::clone(&api);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let event = fetch_all(api.as_ref(), generation).await;
                    let _ = ui_tx.send(event).await;
                });
            }
            BackendCommand::AssignTask(request) => {
                let api = Arc::clone(&api);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let event = assign(api.as_ref(), request).await;
                    let _ = ui_tx.send(event).await;
                });
            }
        }
    }

    info!("Backend shutdown complete");
}

/// Fetch both lists concurrently; either failure fails the whole fetch.
pub async fn fetch_all(api: &dyn OwnerApi, generation: u64) -> UiEvent {
    match tokio::try_join!(api.list_workers(), api.get_unassigned_tasks()) {
        Ok((workers, tasks)) => {
            debug!(
                generation,
                workers = workers.len(),
                tasks = tasks.len(),
                "Fetched dashboard data"
            );
            UiEvent::DataLoaded {
                generation,
                workers,
                tasks,
            }
        }
        Err(e) => {
            error!(generation, error = %e, "Failed to fetch data");
            UiEvent::DataLoadFailed {
                generation,
                message: e.to_string(),
            }
        }
    }
}

/// Submit one assignment.
pub async fn assign(api: &dyn OwnerApi, request: AssignTaskRequest) -> UiEvent {
    match api.assign_task(&request).await {
        Ok(()) => {
            info!(
                task_id = %request.task_id,
                worker_id = %request.worker_id,
                "Task assigned"
            );
            UiEvent::AssignSucceeded {
                worker_id: request.worker_id,
                task_id: request.task_id,
            }
        }
        Err(e) => {
            error!(
                task_id = %request.task_id,
                worker_id = %request.worker_id,
                error = %e,
                "Assignment failed"
            );
            UiEvent::AssignFailed {
                worker_id: request.worker_id,
                task_id: request.task_id,
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::FakeOwnerApi;

    #[tokio::test]
    async fn test_fetch_all_success() {
        let api = FakeOwnerApi::scenario();

        match fetch_all(&api, 3).await {
            UiEvent::DataLoaded {
                generation,
                workers,
                tasks,
            } => {
                assert_eq!(generation, 3);
                assert_eq!(workers.len(), 1);
                assert_eq!(tasks[0].title, "Carve leg");
            }
            other => panic!("Expected DataLoaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_fails_if_either_fails() {
        for (fail_workers, fail_tasks) in [(true, false), (false, true), (true, true)] {
            let api = FakeOwnerApi {
                fail_workers,
                fail_tasks,
                ..FakeOwnerApi::scenario()
            };
            let event = fetch_all(&api, 1).await;
            assert!(
                matches!(event, UiEvent::DataLoadFailed { generation: 1, .. }),
                "workers={} tasks={} gave {:?}",
                fail_workers,
                fail_tasks,
                event
            );
        }
    }

    #[tokio::test]
    async fn test_assign_outcomes() {
        let api = FakeOwnerApi::scenario();
        let request = AssignTaskRequest::manual("t1".into(), "w1".into()).unwrap();
        let event = assign(&api, request.clone()).await;
        assert!(matches!(event, UiEvent::AssignSucceeded { .. }));
        assert_eq!(api.assigned(), vec![request.clone()]);

        let failing = FakeOwnerApi {
            fail_assign: true,
            ..FakeOwnerApi::scenario()
        };
        match assign(&failing, request).await {
            UiEvent::AssignFailed {
                worker_id, task_id, ..
            } => {
                assert_eq!(worker_id.as_str(), "w1");
                assert_eq!(task_id.as_str(), "t1");
            }
            other => panic!("Expected AssignFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_backend_loop_round_trip() {
        let api = Arc::new(FakeOwnerApi::scenario());
        let (ui_tx, mut ui_rx) = mpsc::channel(8);
        let (cmd_tx, cmd_rx) = mpsc::channel(8);

        let handle = tokio::spawn(run_backend(api.clone(), ui_tx, cmd_rx));

        cmd_tx
            .send(BackendCommand::FetchAll { generation: 1 })
            .await
            .unwrap();
        assert!(matches!(
            ui_rx.recv().await,
            Some(UiEvent::DataLoaded { generation: 1, .. })
        ));

        let request = AssignTaskRequest::manual("t1".into(), "w1".into()).unwrap();
        cmd_tx
            .send(BackendCommand::AssignTask(request))
            .await
            .unwrap();
        assert!(matches!(
            ui_rx.recv().await,
            Some(UiEvent::AssignSucceeded { .. })
        ));
        assert_eq!(api.assigned().len(), 1);

        cmd_tx.send(BackendCommand::Quit).await.unwrap();
        handle.await.unwrap();
    }
}
