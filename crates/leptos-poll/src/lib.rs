//! Leptos Polling Utilities
//!
//! Runs a task on a fixed interval and whenever the window regains focus,
//! gated by a reactive `enabled` signal. The timer and the focus listener are
//! torn down together with the owning component.

use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Default refetch interval used by the admin views
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

/// Polling configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PollOptions {
    pub interval: Duration,
    /// Also run the task when the window gets focus back
    pub refetch_on_focus: bool,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            refetch_on_focus: true,
        }
    }
}

impl PollOptions {
    pub fn every(interval: Duration) -> Self {
        Self {
            interval,
            ..Default::default()
        }
    }
}

/// Shared stop flag between the timer loop and the cleanup hook
#[derive(Clone, Debug, Default)]
pub struct PollGate {
    stopped: Arc<AtomicBool>,
}

impl PollGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// A tick fires only while the gate is open and the caller is enabled
    pub fn admits(&self, enabled: bool) -> bool {
        !self.is_stopped() && enabled
    }
}

/// Timer resolution for `TimeoutFuture`, clamped to at least 1ms
pub fn interval_millis(interval: Duration) -> u32 {
    interval.as_millis().clamp(1, u32::MAX as u128) as u32
}

/// True when `enabled` just switched on (including the very first run)
pub fn rising_edge(previous: Option<bool>, now: bool) -> bool {
    now && previous != Some(true)
}

/// Poll `task` while `enabled` is true.
///
/// The task runs immediately whenever `enabled` turns on, then on every
/// interval tick and (optionally) on every window `focus` event.
/// Must be called inside a component so cleanup is attached to its owner.
pub fn use_poll<F>(options: PollOptions, enabled: Signal<bool>, task: F)
where
    F: Fn() + 'static,
{
    let task: Rc<dyn Fn()> = Rc::new(task);
    let gate = PollGate::new();
    let millis = interval_millis(options.interval);

    // Fire on enable
    {
        let task = task.clone();
        Effect::new(move |previous: Option<bool>| {
            let now = enabled.get();
            if rising_edge(previous, now) {
                task();
            }
            now
        });
    }

    // Interval loop
    {
        let task = task.clone();
        let gate = gate.clone();
        spawn_local(async move {
            loop {
                TimeoutFuture::new(millis).await;
                if gate.is_stopped() {
                    tracing::debug!("poll loop stopped");
                    break;
                }
                if gate.admits(enabled.try_get_untracked().unwrap_or(false)) {
                    task();
                }
            }
        });
    }

    let focus_listener = if options.refetch_on_focus {
        let gate = gate.clone();
        Some(window_event_listener(ev::focus, move |_| {
            if gate.admits(enabled.try_get_untracked().unwrap_or(false)) {
                task();
            }
        }))
    } else {
        None
    };

    on_cleanup(move || {
        gate.stop();
        if let Some(listener) = focus_listener {
            listener.remove();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PollOptions::default();
        assert_eq!(options.interval, Duration::from_secs(10));
        assert!(options.refetch_on_focus);
    }

    #[test]
    fn test_every_keeps_focus_refetch() {
        let options = PollOptions::every(Duration::from_secs(3));
        assert_eq!(options.interval, Duration::from_secs(3));
        assert!(options.refetch_on_focus);
    }

    #[test]
    fn test_gate_stops() {
        let gate = PollGate::new();
        let shared = gate.clone();
        assert!(gate.admits(true));
        assert!(!gate.admits(false));

        shared.stop();
        assert!(gate.is_stopped());
        assert!(!gate.admits(true));
    }

    #[test]
    fn test_interval_millis_clamps() {
        assert_eq!(interval_millis(Duration::from_secs(10)), 10_000);
        assert_eq!(interval_millis(Duration::ZERO), 1);
        assert_eq!(interval_millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }

    #[test]
    fn test_rising_edge() {
        assert!(rising_edge(None, true));
        assert!(rising_edge(Some(false), true));
        assert!(!rising_edge(Some(true), true));
        assert!(!rising_edge(None, false));
        assert!(!rising_edge(Some(true), false));
    }
}
