//! Headless widget tree for toast panels
//!
//! Each group owns a root with an ordered list of panels. Panels stack top
//! to bottom and their height scales with their vertical scale, so a panel
//! growing in or collapsing out pushes its siblings smoothly.

mod group;
mod panel;
mod text;

pub use group::{GroupRoot, ToastGroup, ToastPosition};
pub use panel::{Panel, PanelId};
pub(crate) use text::measure_lines;
