//! Debounced signals for search-as-you-type inputs.
//!
//! The ticket logic lives in [`Debouncer`] so it can be tested without a
//! browser; [`use_debounced`] wires it to a timer and a Leptos signal.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use leptos::prelude::*;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Identifies one scheduled publish. Only the latest ticket may publish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Latest-wins ticket counter. Clones share the counter.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    /// Schedule a publish, superseding every earlier ticket.
    pub fn schedule(&self) -> DebounceTicket {
        DebounceTicket(self.generation.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// `true` if no newer ticket was scheduled (or cancel issued) since `ticket`.
    #[must_use]
    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        self.generation.load(Ordering::Relaxed) == ticket.0
    }

    /// Drop whatever publish is pending.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::Relaxed);
    }
}

/// Follow `source`, publishing its value once it has been stable for `delay`.
pub fn use_debounced<T>(source: Signal<T>, delay: Duration) -> ReadSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let debounced = RwSignal::new(source.get_untracked());
    let debouncer = Debouncer::default();

    Effect::new(move |prev: Option<()>| {
        let value = source.get();
        // The first run only subscribes; the initial value is already published.
        if prev.is_none() {
            return;
        }
        let ticket = debouncer.schedule();
        #[cfg(feature = "csr")]
        {
            let debouncer = debouncer.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                if debouncer.is_current(ticket) {
                    debounced.set(value);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ticket, delay);
            debounced.set(value);
        }
    });

    debounced.read_only()
}
