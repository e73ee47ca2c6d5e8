//! vr-toaster-demo: scripted toasts driven by simulated tracking
//!
//! The frame loop ticks on a tokio interval, feeds the simulated head and
//! hands into the toaster and plays a fixed script of toast operations.

mod script;
mod simulator;

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::time::MissedTickBehavior;
use tracing::info;
use vr_toaster::{FrameTime, Toaster, ToasterConfig, ToastGroup};

pub use script::DemoScript;
pub use simulator::TrackingSimulator;

/// Highest supported frame rate
pub const MAX_FPS: u32 = 1000;

/// Settings for one demo run
#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub config: ToasterConfig,
    pub frames: u64,
    /// Frames per second, clamped to `1..=MAX_FPS`
    pub fps: u32,
    /// Log group poses every N frames; 0 disables
    pub log_every: u64,
    /// Pace frames on a timer instead of running them back to back
    pub realtime: bool,
}

/// Run the demo to completion
pub async fn run_demo(options: DemoOptions) -> Result<()> {
    let mut toaster = Toaster::new(options.config).context("failed to start toaster")?;

    let frame_time = frame_duration(options.fps);
    let mut interval = tokio::time::interval(frame_time);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut simulator = TrackingSimulator::new();
    let mut script = DemoScript::new();

    for frame in 0..options.frames {
        if options.realtime {
            interval.tick().await;
        }

        let frame_time = if script.paused() {
            FrameTime::paused(frame_time)
        } else {
            FrameTime::uniform(frame_time)
        };
        let tracking = simulator.advance(frame_time.real_delta);

        script.run(&mut toaster, frame_time.real_delta)?;
        toaster.update(frame_time, &tracking);

        if options.log_every > 0 && frame % options.log_every == 0 {
            log_groups(&toaster, frame);
        }
    }

    info!(
        panels = toaster.panel_count(),
        tasks = toaster.task_count(),
        "demo finished"
    );
    toaster.shutdown();
    Ok(())
}

/// Length of one frame; never zero
fn frame_duration(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.clamp(1, MAX_FPS)
}

fn log_groups(toaster: &Toaster, frame: u64) {
    for group in ToastGroup::ALL {
        let root = toaster.group(group);
        if root.children().is_empty() {
            continue;
        }
        let texts: Vec<&str> = toaster.panels(group).map(|p| p.text()).collect();
        let position = root.transform().position;
        info!(
            frame,
            group = root.group().root_name(),
            visible = root.visible_count(),
            height = root.world_height(),
            x = position.x,
            y = position.y,
            z = position.z,
            ?texts,
            "group"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration_is_never_zero() {
        assert_eq!(frame_duration(0), Duration::from_secs(1));
        assert_eq!(frame_duration(50), Duration::from_millis(20));
        assert_eq!(frame_duration(u32::MAX), Duration::from_millis(1));
    }
}
