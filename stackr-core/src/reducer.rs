//! The state machine
//!
//! `transition` is the single entry point for every event. Global events are
//! handled first regardless of the active view; everything else delegates to
//! the controller for the current [`ViewMode`]. The function never blocks:
//! gateway work comes back as an [`Effect`] for the dispatcher.

use crate::command::{Command, ContainerOp, Effect};
use crate::event::{AppEvent, KeyAction};
use crate::state::{App, ViewMode};

pub fn transition(app: &mut App, event: AppEvent) -> Effect {
    match event {
        AppEvent::Key(KeyAction::Quit) => {
            app.quit = true;
            Effect::None
        }
        AppEvent::Resize { width, height } => {
            // Content re-flows to the new width at the next render; no
            // fetch is issued.
            app.width = width;
            app.height = height;
            app.viewport.clamp();
            Effect::None
        }
        AppEvent::ContainersLoaded { containers } => {
            app.containers = containers;
            app.clamp_cursor();
            app.fault = None;
            Effect::None
        }
        AppEvent::DetailLoaded { inspection, stats } => {
            // Unconditional overwrite: a stale in-flight fetch loses to
            // whichever completion lands last.
            app.inspection = Some(inspection);
            app.stats = stats;
            app.fault = None;
            Effect::None
        }
        AppEvent::FetchFailed { message } => {
            app.fault = Some(message);
            Effect::None
        }
        other => match app.view {
            ViewMode::List => update_list(app, other),
            ViewMode::Detail => update_detail(app, other),
        },
    }
}

fn update_list(app: &mut App, event: AppEvent) -> Effect {
    match event {
        AppEvent::Key(KeyAction::Up) => {
            if app.cursor > 0 {
                app.cursor -= 1;
            }
            Effect::None
        }
        AppEvent::Key(KeyAction::Down) => {
            if app.cursor + 1 < app.containers.len() {
                app.cursor += 1;
            }
            Effect::None
        }
        AppEvent::Key(KeyAction::Enter) => match app.selected() {
            Some(container) => {
                let id = container.id.clone();
                app.view = ViewMode::Detail;
                app.inspection = None;
                app.stats = None;
                app.viewport.reset();
                Effect::Run(Command::FetchDetail { id })
            }
            None => Effect::None,
        },
        AppEvent::Key(KeyAction::Refresh) => Effect::Run(Command::FetchList),
        AppEvent::Key(KeyAction::Stop) => list_action(app, ContainerOp::Stop),
        AppEvent::Key(KeyAction::Start) => list_action(app, ContainerOp::Start),
        AppEvent::Key(KeyAction::Restart) => list_action(app, ContainerOp::Restart),
        AppEvent::Key(KeyAction::Delete) => list_action(app, ContainerOp::Remove),
        // Refetch once the action has returned so the list shows observed
        // daemon state, not the assumed outcome.
        AppEvent::ActionDone => Effect::Run(Command::FetchList),
        _ => Effect::None,
    }
}

fn list_action(app: &App, op: ContainerOp) -> Effect {
    match app.selected() {
        Some(container) => Effect::Run(Command::Action {
            op,
            id: container.id.clone(),
        }),
        None => Effect::None,
    }
}

fn update_detail(app: &mut App, event: AppEvent) -> Effect {
    match event {
        AppEvent::Key(KeyAction::Back) => {
            app.leave_detail();
            Effect::None
        }
        AppEvent::Key(KeyAction::Stop) => detail_action(app, ContainerOp::Stop),
        AppEvent::Key(KeyAction::Start) => detail_action(app, ContainerOp::Start),
        AppEvent::Key(KeyAction::Restart) => detail_action(app, ContainerOp::Restart),
        AppEvent::Key(KeyAction::Delete) => {
            // The container may be gone afterwards, so return to the list
            // instead of refetching detail.
            let effect = match app.selected() {
                Some(container) => Effect::Run(Command::Action {
                    op: ContainerOp::Remove,
                    id: container.id.clone(),
                }),
                None => Effect::None,
            };
            app.leave_detail();
            effect
        }
        AppEvent::Key(KeyAction::Refresh) => match app.selected() {
            Some(container) => Effect::Run(Command::FetchDetail {
                id: container.id.clone(),
            }),
            None => Effect::None,
        },
        AppEvent::Key(KeyAction::Up) => {
            app.viewport.scroll_up(1);
            Effect::None
        }
        AppEvent::Key(KeyAction::Down) => {
            app.viewport.scroll_down(1);
            Effect::None
        }
        AppEvent::Key(KeyAction::PageUp) => {
            app.viewport.scroll_up(app.viewport.height.max(1));
            Effect::None
        }
        AppEvent::Key(KeyAction::PageDown) => {
            app.viewport.scroll_down(app.viewport.height.max(1));
            Effect::None
        }
        // The sequential action already chains its own detail fetch.
        AppEvent::ActionDone => Effect::None,
        _ => Effect::None,
    }
}

/// Action followed by a detail fetch, strictly in that order. The fetch runs
/// even when the action fails, so the view reflects actual daemon state.
fn detail_action(app: &App, op: ContainerOp) -> Effect {
    match app.selected() {
        Some(container) => {
            let id = container.id.clone();
            Effect::then_run(
                Command::Action { op, id: id.clone() },
                Command::FetchDetail { id },
            )
        }
        None => Effect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContainerInspection, ContainerState, ContainerSummary};

    fn summary(id: &str) -> ContainerSummary {
        ContainerSummary {
            id: id.to_string(),
            name: id.to_string(),
            image: "busybox".to_string(),
            state: ContainerState::Running,
            status: "Up 2 minutes".to_string(),
            ports: vec![],
        }
    }

    fn inspection(id: &str) -> ContainerInspection {
        ContainerInspection {
            id: id.to_string(),
            name: id.to_string(),
            image: "busybox".to_string(),
            state: ContainerState::Running,
            created_at: String::new(),
            started_at: String::new(),
            restart_policy: "no".to_string(),
            restart_count: 0,
            platform: "linux".to_string(),
            mounts: vec![],
            env: vec![],
            labels: vec![],
            networks: vec![],
            port_bindings: vec![],
        }
    }

    fn app_with(ids: &[&str]) -> App {
        let mut app = App::new(120, 40);
        app.containers = ids.iter().map(|id| summary(id)).collect();
        app
    }

    fn key(app: &mut App, action: KeyAction) -> Effect {
        transition(app, AppEvent::Key(action))
    }

    #[test]
    fn test_cursor_moves_clamped_at_boundaries() {
        let mut app = app_with(&["a", "b", "c"]);

        assert!(key(&mut app, KeyAction::Up).is_none());
        assert_eq!(app.cursor, 0);

        key(&mut app, KeyAction::Down);
        key(&mut app, KeyAction::Down);
        key(&mut app, KeyAction::Down);
        key(&mut app, KeyAction::Down);
        assert_eq!(app.cursor, 2);

        key(&mut app, KeyAction::Up);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_list_replacement_clamps_cursor() {
        let mut app = app_with(&["a", "b", "c", "d"]);
        app.cursor = 3;

        let effect = transition(
            &mut app,
            AppEvent::ContainersLoaded {
                containers: vec![summary("a"), summary("b")],
            },
        );
        assert!(effect.is_none());
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_enter_opens_detail_and_fetches() {
        let mut app = app_with(&["a", "b"]);
        app.cursor = 1;

        let effect = key(&mut app, KeyAction::Enter);
        assert_eq!(app.view, ViewMode::Detail);
        assert_eq!(
            effect,
            Effect::Run(Command::FetchDetail { id: "b".into() })
        );
    }

    #[test]
    fn test_enter_noop_on_empty_list() {
        let mut app = app_with(&[]);
        let effect = key(&mut app, KeyAction::Enter);
        assert!(effect.is_none());
        assert_eq!(app.view, ViewMode::List);
    }

    #[test]
    fn test_list_action_targets_cursor() {
        let mut app = app_with(&["a", "b"]);
        app.cursor = 1;

        let effect = key(&mut app, KeyAction::Stop);
        assert_eq!(
            effect,
            Effect::Run(Command::Action {
                op: ContainerOp::Stop,
                id: "b".into(),
            })
        );
    }

    #[test]
    fn test_action_done_refetches_list() {
        let mut app = app_with(&["a"]);
        let effect = transition(&mut app, AppEvent::ActionDone);
        assert_eq!(effect, Effect::Run(Command::FetchList));
    }

    #[test]
    fn test_detail_action_chains_fetch_sequentially() {
        let mut app = app_with(&["a"]);
        key(&mut app, KeyAction::Enter);

        let effect = key(&mut app, KeyAction::Restart);
        assert_eq!(
            effect,
            Effect::Sequence(vec![
                Command::Action {
                    op: ContainerOp::Restart,
                    id: "a".into(),
                },
                Command::FetchDetail { id: "a".into() },
            ])
        );
    }

    #[test]
    fn test_detail_delete_returns_to_list_without_detail_fetch() {
        let mut app = app_with(&["a"]);
        key(&mut app, KeyAction::Enter);

        let effect = key(&mut app, KeyAction::Delete);
        assert_eq!(app.view, ViewMode::List);
        assert_eq!(
            effect,
            Effect::Run(Command::Action {
                op: ContainerOp::Remove,
                id: "a".into(),
            })
        );
        assert!(app.inspection.is_none());
    }

    #[test]
    fn test_back_twice_is_safe() {
        let mut app = app_with(&["a"]);
        key(&mut app, KeyAction::Enter);
        // Back once before any data loaded.
        assert!(key(&mut app, KeyAction::Back).is_none());
        assert_eq!(app.view, ViewMode::List);
        // Back again from the list is a no-op.
        assert!(key(&mut app, KeyAction::Back).is_none());
        assert_eq!(app.view, ViewMode::List);
        assert!(app.inspection.is_none());
        assert!(app.stats.is_none());
    }

    #[test]
    fn test_resize_in_detail_issues_no_fetch() {
        let mut app = app_with(&["a"]);
        key(&mut app, KeyAction::Enter);
        app.viewport.height = 20;
        app.viewport.content_height = 60;
        app.viewport.scroll = 40;

        let effect = transition(
            &mut app,
            AppEvent::Resize {
                width: 60,
                height: 30,
            },
        );
        assert!(effect.is_none());
        assert_eq!(app.width, 60);
        assert_eq!(app.height, 30);
    }

    #[test]
    fn test_fetch_failure_sets_fault_and_success_clears_it() {
        let mut app = app_with(&["a"]);

        transition(
            &mut app,
            AppEvent::FetchFailed {
                message: "daemon unreachable".into(),
            },
        );
        assert_eq!(app.fault.as_deref(), Some("daemon unreachable"));
        assert_eq!(app.view, ViewMode::List);

        transition(
            &mut app,
            AppEvent::ContainersLoaded {
                containers: vec![summary("a")],
            },
        );
        assert!(app.fault.is_none());
    }

    #[test]
    fn test_detail_load_preserves_scroll() {
        let mut app = app_with(&["a"]);
        key(&mut app, KeyAction::Enter);
        app.viewport.height = 10;
        app.viewport.content_height = 50;
        app.viewport.scroll = 12;

        transition(
            &mut app,
            AppEvent::DetailLoaded {
                inspection: inspection("a"),
                stats: None,
            },
        );
        assert_eq!(app.viewport.scroll, 12);
        assert!(app.inspection.is_some());
        assert!(app.stats.is_none());
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = app_with(&["a"]);
        key(&mut app, KeyAction::Quit);
        assert!(app.quit);
    }
}
