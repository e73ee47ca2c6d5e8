//! Fixed timeline of toast operations played by the demo

use std::time::Duration;

use anyhow::Result;
use tracing::info;
use vr_toaster::{Toast, Toaster, ToastGroup, ToastPosition};

#[derive(Debug, Clone, Copy)]
enum Cue {
    Welcome,
    Battery,
    Recording,
    Replace,
    Pause,
    Resume,
    HideRecording,
    Farewell,
    Goodbye,
    Clear,
}

/// Cue times in milliseconds since the start of the demo
const TIMELINE: &[(u64, Cue)] = &[
    (0, Cue::Welcome),
    (500, Cue::Battery),
    (1000, Cue::Recording),
    (2000, Cue::Replace),
    (2500, Cue::Pause),
    (3500, Cue::Resume),
    (4000, Cue::HideRecording),
    (5000, Cue::Farewell),
    (6000, Cue::Goodbye),
    (7500, Cue::Clear),
];

#[derive(Debug, Default)]
pub struct DemoScript {
    elapsed: Duration,
    next: usize,
    welcome: Toast,
    recording: Toast,
    paused: bool,
}

impl DemoScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether game time is currently stopped
    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn finished(&self) -> bool {
        self.next >= TIMELINE.len()
    }

    /// Advance by `dt` of real time and play every cue that came due
    pub fn run(&mut self, toaster: &mut Toaster, dt: Duration) -> Result<()> {
        self.elapsed += dt;
        while let Some(&(at, cue)) = TIMELINE.get(self.next) {
            if self.elapsed < Duration::from_millis(at) {
                break;
            }
            self.next += 1;
            info!(?cue, at_ms = at, "cue");
            self.play(cue, toaster)?;
        }
        Ok(())
    }

    fn play(&mut self, cue: Cue, toaster: &mut Toaster) -> Result<()> {
        match cue {
            Cue::Welcome => {
                self.welcome = toaster.make_toast(
                    ToastGroup::Frontal,
                    Some("Welcome back"),
                    "default",
                    ToastPosition::Bottom,
                )?;
                self.welcome.show(toaster, None);
            }
            Cue::Battery => {
                toaster.timed_toast(
                    ToastGroup::LeftHand,
                    "Controller battery at 20%",
                    Duration::from_secs(2),
                    "default",
                    ToastPosition::Bottom,
                )?;
            }
            Cue::Recording => {
                self.recording = toaster.make_toast(
                    ToastGroup::RightHand,
                    None,
                    "default",
                    ToastPosition::Top,
                )?;
                self.recording.show(toaster, Some("<b>REC</b> capturing"));
            }
            Cue::Replace => self.welcome.replace(toaster, "Tracking ready"),
            Cue::Pause => self.paused = true,
            Cue::Resume => self.paused = false,
            Cue::HideRecording => self.recording.hide(toaster),
            Cue::Farewell => {
                self.welcome.destroy(toaster, Some(Duration::from_secs(1)));
                self.recording.destroy(toaster, None);
            }
            Cue::Goodbye => {
                toaster.timed_toast(
                    ToastGroup::Frontal,
                    "Goodbye",
                    Duration::from_secs(3),
                    "default",
                    ToastPosition::Top,
                )?;
            }
            Cue::Clear => toaster.clear(),
        }
        Ok(())
    }
}
