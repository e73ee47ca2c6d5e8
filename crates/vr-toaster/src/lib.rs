//! vr-toaster: in-world toast notifications for VR
//!
//! This crate provides:
//! - Three toast groups: one per hand plus a frontal group that trails the head
//! - Named style presets loaded from TOML configuration
//! - Grow/fade show and hide animations driven once per frame
//! - Timed toasts that remove themselves after a real-time hold

pub mod animation;
pub mod config;
pub mod error;
pub mod input;
pub mod pose;
pub mod spatial;
pub mod style;
pub mod toast;
pub mod toaster;
pub mod widget;

// Re-export commonly used types
pub use animation::ANIMATION_TIME;
pub use config::{FrontalOffset, FrontalSettings, HandSettings, PanelMetrics, ToasterConfig};
pub use error::{Result, ToasterError};
pub use input::{FrameTime, Hand, TrackingFrame};
pub use pose::Pose;
pub use spatial::{Point3D, Quaternion, Transform, Vector3D};
pub use style::{Color, Style, StyleTable, TextAnchor};
pub use toast::Toast;
pub use toaster::Toaster;
pub use widget::{GroupRoot, Panel, PanelId, ToastGroup, ToastPosition};
