#![forbid(unsafe_code)]

//! Property tests for toast hover and close sequences.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use proptest::prelude::*;
use slate_core::event::HostEvent;
use slate_core::timer::{Scheduler, TimerQueue};
use slate_widgets::{Toast, ToastConfig, ToastEvent, TransitionPhase};

#[derive(Debug, Clone, Copy)]
enum Step {
    Wait(u64),
    Enter,
    Leave,
    Close,
    Hide,
    Attach(u16),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (1u64..2_000).prop_map(Step::Wait),
        2 => Just(Step::Enter),
        2 => Just(Step::Leave),
        1 => Just(Step::Close),
        1 => Just(Step::Hide),
        1 => (0u16..400).prop_map(Step::Attach),
    ]
}

/// Dismiss timers currently pending in the queue for this toast.
fn pending_dismiss(toast: &Toast, timers: &TimerQueue) -> usize {
    toast
        .dismiss_timer()
        .map_or(0, |id| usize::from(timers.is_pending(id)))
}

proptest! {
    #[test]
    fn at_most_one_dismiss_timer(
        duration_ms in 1u64..5_000,
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let mut timers = TimerQueue::new();
        let mut toast = Toast::new(
            ToastConfig::new("p").duration(Duration::from_millis(duration_ms)),
            &mut timers,
        );

        for step in steps {
            match step {
                Step::Wait(dt) => {
                    timers.advance(Duration::from_millis(dt), |id, q| {
                        toast.fire(id, q);
                    });
                }
                Step::Enter => {
                    toast.handle_event(&HostEvent::PointerEnter, &mut timers);
                    prop_assert_eq!(toast.dismiss_timer(), None);
                }
                Step::Leave => {
                    let event = toast.handle_event(&HostEvent::PointerLeave, &mut timers);
                    prop_assert_eq!(event, ToastEvent::TimerRestarted);
                    let id = toast.dismiss_timer().expect("restarted timer");
                    prop_assert_eq!(
                        timers.deadline(id),
                        Some(timers.now() + Duration::from_millis(duration_ms))
                    );
                }
                Step::Close => {
                    toast.close(&mut timers);
                }
                Step::Hide => {
                    toast.set_shown(false, &mut timers);
                }
                Step::Attach(h) => {
                    toast.attach(f32::from(h));
                    prop_assert_eq!(toast.measured_height(), f32::from(h));
                }
            }
            prop_assert!(pending_dismiss(&toast, &timers) <= 1);
            prop_assert!(timers.pending_count() <= 2);
        }
    }

    #[test]
    fn removal_exactly_once(
        duration_ms in 0u64..3_000,
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let removed = Rc::new(Cell::new(0u32));
        let r = Rc::clone(&removed);
        let mut timers = TimerQueue::new();
        let mut toast = Toast::new(
            ToastConfig::new("p")
                .duration(Duration::from_millis(duration_ms))
                .on_remove(move || r.set(r.get() + 1)),
            &mut timers,
        );
        let mut was_shown = toast.is_shown();

        for step in steps {
            match step {
                Step::Wait(dt) => {
                    timers.advance(Duration::from_millis(dt), |id, q| {
                        toast.fire(id, q);
                    });
                }
                Step::Enter => { toast.pointer_enter(&mut timers); }
                Step::Leave => { toast.pointer_leave(&mut timers); }
                Step::Close => { toast.close(&mut timers); }
                Step::Hide => { toast.set_shown(false, &mut timers); }
                Step::Attach(h) => { toast.attach(f32::from(h)); }
            }
            // Once hidden, never shown again.
            prop_assert!(was_shown || !toast.is_shown());
            was_shown = toast.is_shown();
            prop_assert!(removed.get() <= 1);
        }

        // Closing and draining always finishes the exit.
        toast.close(&mut timers);
        timers.advance(Duration::from_secs(1), |id, q| {
            toast.fire(id, q);
        });
        prop_assert_eq!(removed.get(), 1);
        prop_assert_eq!(toast.phase(), TransitionPhase::Exited);

        let history = toast.transition().history();
        prop_assert_eq!(history.first(), Some(&TransitionPhase::Entering));
        prop_assert_eq!(&history[history.len() - 2..], &[TransitionPhase::Exiting, TransitionPhase::Exited]);
    }
}
