//! Per-frame task scheduler for panel animations
//!
//! Every running animation is a task resumed once per frame. Cancelling a
//! task drops it on the spot: its completion never runs. A finishing task
//! reports to its host exactly once, after its final frame.

use std::time::Duration;

use tracing::trace;

use crate::input::FrameTime;
use crate::widget::PanelId;

use super::ToastTween;

/// Handle to a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// What happens to the panel once its animation ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnComplete {
    #[default]
    Nothing,
    DestroyPanel,
}

/// The panel store the scheduler animates
pub(crate) trait PanelHost {
    /// Current animated value of `panel`, `None` once it is destroyed
    fn panel_value(&self, panel: PanelId) -> Option<f32>;

    /// Apply a value to the panel; `false` when the panel no longer exists
    fn apply_value(&mut self, panel: PanelId, value: f32) -> bool;

    /// Called once per finished animation, after its final frame
    fn animation_finished(&mut self, panel: PanelId, tween: &ToastTween, on_complete: OnComplete);
}

#[derive(Debug, Clone)]
pub(crate) enum Task {
    Animate {
        panel: PanelId,
        tween: ToastTween,
        on_complete: OnComplete,
    },
    /// Grow in, hold for a real-time duration, collapse, destroy
    Timed {
        panel: PanelId,
        hold: Duration,
        phase: TimedPhase,
    },
    /// Wait real time, then collapse and destroy. The animation that was
    /// running when the wait began keeps playing until then.
    Delayed {
        panel: PanelId,
        remaining: Duration,
        running: Option<Box<Task>>,
    },
}

#[derive(Debug, Clone)]
pub(crate) enum TimedPhase {
    In(ToastTween),
    Hold(Duration),
    Out(ToastTween),
}

impl Task {
    pub(crate) fn animate(
        panel: PanelId,
        start: f32,
        target: f32,
        on_complete: OnComplete,
    ) -> Self {
        Task::Animate {
            panel,
            tween: ToastTween::new(start, target),
            on_complete,
        }
    }

    pub(crate) fn timed(panel: PanelId, start: f32, hold: Duration) -> Self {
        Task::Timed {
            panel,
            hold,
            phase: TimedPhase::In(ToastTween::new(start, 1.0)),
        }
    }

    pub(crate) fn delayed_destroy(panel: PanelId, delay: Duration, running: Option<Task>) -> Self {
        Task::Delayed {
            panel,
            remaining: delay,
            running: running.map(Box::new),
        }
    }

    pub(crate) fn panel(&self) -> PanelId {
        match self {
            Task::Animate { panel, .. }
            | Task::Timed { panel, .. }
            | Task::Delayed { panel, .. } => *panel,
        }
    }

    /// Run one frame; `None` once the task is done
    fn step(self, host: &mut impl PanelHost, frame: &FrameTime) -> Option<Task> {
        match self {
            Task::Animate {
                panel,
                mut tween,
                on_complete,
            } => {
                if advance(host, panel, &mut tween, frame.delta) {
                    Some(Task::Animate {
                        panel,
                        tween,
                        on_complete,
                    })
                } else {
                    host.animation_finished(panel, &tween, on_complete);
                    None
                }
            }
            Task::Timed { panel, hold, phase } => match phase {
                TimedPhase::In(mut tween) => {
                    if advance(host, panel, &mut tween, frame.delta) {
                        return Some(Task::Timed {
                            panel,
                            hold,
                            phase: TimedPhase::In(tween),
                        });
                    }
                    host.animation_finished(panel, &tween, OnComplete::Nothing);
                    host.panel_value(panel)?;
                    Some(Task::Timed {
                        panel,
                        hold,
                        phase: TimedPhase::Hold(hold),
                    })
                }
                TimedPhase::Hold(remaining) => {
                    let remaining = remaining.saturating_sub(frame.real_delta);
                    let phase = if remaining.is_zero() {
                        TimedPhase::Out(ToastTween::new(host.panel_value(panel)?, 0.0))
                    } else {
                        TimedPhase::Hold(remaining)
                    };
                    Some(Task::Timed { panel, hold, phase })
                }
                TimedPhase::Out(mut tween) => {
                    if advance(host, panel, &mut tween, frame.delta) {
                        Some(Task::Timed {
                            panel,
                            hold,
                            phase: TimedPhase::Out(tween),
                        })
                    } else {
                        host.animation_finished(panel, &tween, OnComplete::DestroyPanel);
                        None
                    }
                }
            },
            Task::Delayed {
                panel,
                remaining,
                running,
            } => {
                let running = match running {
                    Some(task) => (*task).step(host, frame).map(Box::new),
                    None => None,
                };
                let remaining = remaining.saturating_sub(frame.real_delta);
                if !remaining.is_zero() {
                    return Some(Task::Delayed {
                        panel,
                        remaining,
                        running,
                    });
                }
                let start = host.panel_value(panel)?;
                Some(Task::animate(panel, start, 0.0, OnComplete::DestroyPanel))
            }
        }
    }
}

/// Step the tween and apply its value; `false` when the animation is over
fn advance(
    host: &mut impl PanelHost,
    panel: PanelId,
    tween: &mut ToastTween,
    dt: Duration,
) -> bool {
    match tween.step(dt) {
        Some(value) => host.apply_value(panel, value),
        None => false,
    }
}

/// Ordered set of running tasks, resumed in start order
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    tasks: Vec<(TaskId, Task)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn start(&mut self, task: Task) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        trace!(task = id.0, panel = ?task.panel(), "task started");
        self.tasks.push((id, task));
        id
    }

    /// Stop a task without running its completion. `false` if it already ended.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|(task_id, _)| *task_id != id);
        self.tasks.len() != before
    }

    /// Remove a task without running it, to be resumed elsewhere
    pub(crate) fn take(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|(task_id, _)| *task_id == id)?;
        Some(self.tasks.remove(index).1)
    }

    /// Stop every task, completions included
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_running(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|(task_id, _)| *task_id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Resume every task once
    pub(crate) fn advance(&mut self, host: &mut impl PanelHost, frame: &FrameTime) {
        let tasks = std::mem::take(&mut self.tasks);
        let mut kept = Vec::with_capacity(tasks.len());

        for (id, task) in tasks {
            match task.step(host, frame) {
                Some(task) => kept.push((id, task)),
                None => trace!(task = id.0, "task finished"),
            }
        }

        kept.append(&mut self.tasks);
        self.tasks = kept;
    }
}
