#![forbid(unsafe_code)]

//! Scripted toast timeline on a virtual clock.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use serde::Serialize;
use slate::{HostEvent, Scheduler, Theme, TimerQueue, Toast, ToastConfig, ToastEvent};

use crate::cli::Opts;

/// One line of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Virtual time in milliseconds.
    pub at_ms: u64,
    /// Step kind (`phase`, `closed`, `hover-enter`, ...).
    pub kind: &'static str,
    /// Free-form detail.
    pub detail: String,
    /// Wrapper height right after the step, while mounted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Card opacity right after the step, while mounted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

/// Result of a scenario run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Toast instance id.
    pub toast: u64,
    /// Severity token.
    pub color: &'static str,
    /// Accent color resolved from the theme.
    pub accent: String,
    /// Every recorded step, in time order.
    pub entries: Vec<Entry>,
    /// When `on_remove` ran.
    pub removed_at_ms: Option<u64>,
}

impl Report {
    /// Times of every entry of `kind`.
    #[must_use]
    pub fn times_of(&self, kind: &str) -> Vec<u64> {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.at_ms)
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Enter,
    Leave,
    Hide,
}

struct Recorder {
    entries: Vec<Entry>,
    removed_at: Option<Duration>,
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

impl Recorder {
    fn push(&mut self, toast: &Toast, now: Duration, kind: &'static str, detail: String) {
        let view = toast.view(now);
        self.entries.push(Entry {
            at_ms: millis(now),
            kind,
            detail,
            height: view.as_ref().map(|v| v.height),
            opacity: view.as_ref().map(|v| v.motion.opacity),
        });
    }

    fn event(&mut self, toast: &Toast, now: Duration, event: ToastEvent) {
        let (kind, detail) = match event {
            ToastEvent::None => return,
            ToastEvent::Measured(h) => ("measured", format!("{h}")),
            ToastEvent::TimerPaused => ("paused", "dismiss timer cancelled".to_owned()),
            ToastEvent::TimerRestarted => ("restarted", "dismiss timer restarted".to_owned()),
            ToastEvent::Closed => ("closed", "is_shown = false".to_owned()),
            ToastEvent::Phase(phase) => ("phase", phase.as_str().to_owned()),
        };
        self.push(toast, now, kind, detail);
    }
}

fn drive(
    timers: &mut TimerQueue,
    toast: &mut Toast,
    rec: &mut Recorder,
    removed: &Cell<bool>,
    target: Duration,
) {
    timers.advance_to(target, |id, q| {
        let event = toast.fire(id, q);
        let now = q.now();
        rec.event(toast, now, event);
        if removed.get() && rec.removed_at.is_none() {
            rec.removed_at = Some(now);
            rec.push(toast, now, "removed", "on_remove".to_owned());
        }
    });
}

/// Run the scripted timeline described by `opts`.
pub fn run(opts: &Opts, theme: &Theme) -> Report {
    let until = Duration::from_millis(opts.run_until_ms);
    let mut timers = TimerQueue::new();
    let removed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&removed);

    let mut config = ToastConfig::new(opts.body.clone())
        .color(opts.color)
        .duration(Duration::from_millis(opts.duration_ms))
        .on_remove(move || flag.set(true));
    if let Some(title) = &opts.title {
        config = config.title(title.clone());
    }

    let mut toast = Toast::new(config, &mut timers);
    tracing::info!(
        toast = toast.id().get(),
        until_ms = opts.run_until_ms,
        "scenario started"
    );

    let mut rec = Recorder {
        entries: Vec::new(),
        removed_at: None,
    };
    rec.push(&toast, Duration::ZERO, "mounted", toast.phase().as_str().to_owned());
    let event = toast.handle_event(&HostEvent::Attached { height: opts.height }, &mut timers);
    rec.event(&toast, Duration::ZERO, event);

    let mut actions: Vec<(u64, Action)> = [
        opts.hover_enter_ms.map(|t| (t, Action::Enter)),
        opts.hover_leave_ms.map(|t| (t, Action::Leave)),
        opts.hide_at_ms.map(|t| (t, Action::Hide)),
    ]
    .into_iter()
    .flatten()
    .filter(|&(t, _)| t <= opts.run_until_ms)
    .collect();
    actions.sort_by_key(|&(t, _)| t);

    for (at, action) in actions {
        drive(&mut timers, &mut toast, &mut rec, &removed, Duration::from_millis(at));
        let now = timers.now();
        let (kind, event) = match action {
            Action::Enter => (
                "hover-enter",
                toast.handle_event(&HostEvent::PointerEnter, &mut timers),
            ),
            Action::Leave => (
                "hover-leave",
                toast.handle_event(&HostEvent::PointerLeave, &mut timers),
            ),
            Action::Hide => ("hide", toast.set_shown(false, &mut timers)),
        };
        rec.push(&toast, now, kind, String::new());
        rec.event(&toast, now, event);
    }
    drive(&mut timers, &mut toast, &mut rec, &removed, until);

    tracing::info!(
        toast = toast.id().get(),
        phase = toast.phase().as_str(),
        removed = removed.get(),
        "scenario finished"
    );

    Report {
        toast: toast.id().get(),
        color: opts.color.as_str(),
        accent: theme.resolve_color(opts.color.theme_key()).to_string(),
        entries: rec.entries,
        removed_at_ms: rec.removed_at.map(millis),
    }
}

/// Render a report as aligned text.
#[must_use]
pub fn render_text(report: &Report) -> String {
    let mut out = format!(
        "toast #{} ({}, accent {})\n",
        report.toast, report.color, report.accent
    );
    for entry in &report.entries {
        out.push_str(&format!("{:>7}ms  {:<12}{}", entry.at_ms, entry.kind, entry.detail));
        if let (Some(h), Some(o)) = (entry.height, entry.opacity) {
            out.push_str(&format!("  [height {h:.1}, opacity {o:.2}]"));
        }
        out.push('\n');
    }
    match report.removed_at_ms {
        Some(at) => out.push_str(&format!("removed at {at}ms\n")),
        None => out.push_str("still mounted\n"),
    }
    out
}
