//! Frame-driven show/hide animation of toast panels

mod scheduler;
mod tween;

pub use scheduler::{OnComplete, Scheduler, TaskId};
pub(crate) use scheduler::{PanelHost, Task};
pub use tween::{ToastTween, ANIMATION_TIME};
