//! Asynchronous command descriptions
//!
//! The transition function never performs I/O; it returns an [`Effect`]
//! describing gateway work to run off the loop thread. The dispatcher in the
//! cli crate interprets effects and delivers results back as events.

use crate::model::ContainerId;

/// Lifecycle operation against one container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerOp {
    Stop,
    Start,
    Restart,
    Remove,
}

impl ContainerOp {
    pub fn label(&self) -> &'static str {
        match self {
            ContainerOp::Stop => "stop",
            ContainerOp::Start => "start",
            ContainerOp::Restart => "restart",
            ContainerOp::Remove => "remove",
        }
    }
}

/// One unit of gateway work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    FetchList,
    FetchDetail { id: ContainerId },
    Action { op: ContainerOp, id: ContainerId },
}

/// Zero or more commands with an ordering contract.
///
/// `Sequence` guarantees each command is dispatched only after the previous
/// one has fully completed, including on failure; `Batch` provides no
/// ordering between members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Run(Command),
    Sequence(Vec<Command>),
    Batch(Vec<Command>),
}

impl Effect {
    /// Strictly ordered pair: `second` runs only after `first` returns.
    pub fn then_run(first: Command, second: Command) -> Self {
        Effect::Sequence(vec![first, second])
    }

    /// Unordered group.
    pub fn run_all(commands: Vec<Command>) -> Self {
        Effect::Batch(commands)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }
}
