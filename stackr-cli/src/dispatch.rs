//! Command dispatcher
//!
//! Runs gateway commands off the loop thread as tokio tasks and delivers
//! their results back as [`AppEvent`]s. Commands only compute and send; they
//! never touch UI state. A `Sequence` effect awaits each member in turn, and
//! keeps going when one fails, so a failed action is still followed by its
//! refetch and the UI shows the daemon's actual state.

use std::sync::Arc;

use tokio::sync::mpsc;

use stackr_core::command::{Command, ContainerOp, Effect};
use stackr_core::event::AppEvent;
use stackr_core::gateway::Gateway;

#[derive(Clone)]
pub struct Dispatcher {
    gateway: Arc<dyn Gateway>,
    event_tx: mpsc::Sender<AppEvent>,
}

impl Dispatcher {
    pub fn new(gateway: Arc<dyn Gateway>, event_tx: mpsc::Sender<AppEvent>) -> Self {
        Self { gateway, event_tx }
    }

    pub fn dispatch(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Run(cmd) => self.spawn_one(cmd),
            Effect::Batch(cmds) => {
                // No ordering guarantee between members.
                for cmd in cmds {
                    self.spawn_one(cmd);
                }
            }
            Effect::Sequence(cmds) => {
                let gateway = self.gateway.clone();
                let tx = self.event_tx.clone();
                let _ = tokio::spawn(async move {
                    for cmd in cmds {
                        run_command(&gateway, &tx, cmd).await;
                    }
                });
            }
        }
    }

    fn spawn_one(&self, cmd: Command) {
        let gateway = self.gateway.clone();
        let tx = self.event_tx.clone();
        let _ = tokio::spawn(async move {
            run_command(&gateway, &tx, cmd).await;
        });
    }
}

async fn run_command(gateway: &Arc<dyn Gateway>, tx: &mpsc::Sender<AppEvent>, cmd: Command) {
    let event = match cmd {
        Command::FetchList => match gateway.list_containers().await {
            Ok(containers) => AppEvent::ContainersLoaded { containers },
            Err(e) => AppEvent::FetchFailed {
                message: e.to_string(),
            },
        },
        Command::FetchDetail { id } => match gateway.inspect(&id).await {
            Ok(inspection) => {
                // Stats fail while a container is stopped; degrade to an
                // absent sample instead of a fault.
                let stats = gateway.stats(&id).await.ok();
                AppEvent::DetailLoaded { inspection, stats }
            }
            Err(e) => AppEvent::FetchFailed {
                message: e.to_string(),
            },
        },
        Command::Action { op, id } => {
            let result = match op {
                ContainerOp::Stop => gateway.stop(&id).await,
                ContainerOp::Start => gateway.start(&id).await,
                ContainerOp::Restart => gateway.restart(&id).await,
                ContainerOp::Remove => gateway.remove(&id).await,
            };
            // Action failures are absorbed: the chained refetch shows the
            // resulting state instead of an error message.
            let _ = result;
            AppEvent::ActionDone
        }
    };
    let _ = tx.send(event).await;
}
