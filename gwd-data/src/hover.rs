//! Shared hover state for cross-chart tooltip synchronization.
//!
//! One chart at a time writes the hovered reference-series index into a
//! [`HoverStore`]; every synchronized widget subscribes and drives its own
//! tooltip from the change, translating indices across series with
//! [`crate::nearest::translate_index`]. Widgets wrap externally-driven
//! display updates in a [`SyncGuard`] section so their local hover handlers
//! do not echo the update back into the store.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(Option<usize>)>;

#[derive(Default)]
struct HoverInner {
    value: Cell<Option<usize>>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener_id: Cell<u64>,
}

/// Shared cell holding the hovered index into the reference (water level)
/// series, or `None` when nothing is hovered.
///
/// One writer at a time, many readers. Clones share the same cell, so the
/// store can be handed to each chart widget at construction instead of
/// living in a module-level singleton. Mutation happens synchronously inside
/// pointer-event handlers on the single-threaded UI event loop; there is no
/// locking to get wrong.
#[derive(Clone, Default)]
pub struct HoverStore {
    inner: Rc<HoverInner>,
}

impl HoverStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current value once, without subscribing.
    pub fn snapshot(&self) -> Option<usize> {
        self.inner.value.get()
    }

    /// Write a new value and notify subscribers. Writing the value already
    /// held is a no-op; subscribers are not notified.
    pub fn set(&self, value: Option<usize>) {
        if self.inner.value.get() == value {
            return;
        }
        self.inner.value.set(value);
        // Snapshot the listener list before calling out: a listener may
        // subscribe or unsubscribe while being notified.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(value);
        }
    }

    /// Clear the hover. Called on pointer leave and whenever the underlying
    /// series is replaced, so no consumer dereferences a stale index.
    pub fn clear(&self) {
        self.set(None);
    }

    /// Register a change listener. It stays active until the returned
    /// subscription is dropped or explicitly ended.
    pub fn subscribe(&self, listener: impl Fn(Option<usize>) + 'static) -> HoverSubscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        HoverSubscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }
}

/// Handle to an active [`HoverStore`] listener; unsubscribes on drop.
pub struct HoverSubscription {
    id: u64,
    store: Weak<HoverInner>,
}

impl HoverSubscription {
    /// End the subscription now rather than at scope end.
    pub fn unsubscribe(self) {}
}

impl Drop for HoverSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Phases of a widget's hover machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPhase {
    /// Pointer events originate from the user; writes to the store are allowed.
    #[default]
    Idle,
    /// An external update is being applied to this widget's display; local
    /// hover handlers must not write back to the store.
    ApplyingExternalUpdate,
}

/// Per-widget reentrancy guard distinguishing user-driven hovers from
/// echoes of an externally-driven display update.
#[derive(Clone, Default)]
pub struct SyncGuard {
    phase: Rc<Cell<SyncPhase>>,
}

impl SyncGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase.get()
    }

    /// True while an external update is being applied to the widget.
    pub fn is_applying(&self) -> bool {
        self.phase.get() == SyncPhase::ApplyingExternalUpdate
    }

    /// Enter `ApplyingExternalUpdate` for the lifetime of the returned
    /// section. The previous phase is restored when the section drops, so
    /// the guard settles back to `Idle` even if the update handler panics.
    pub fn apply_external(&self) -> SyncSection {
        let previous = self.phase.replace(SyncPhase::ApplyingExternalUpdate);
        SyncSection {
            phase: Rc::clone(&self.phase),
            previous,
        }
    }
}

/// Scoped `ApplyingExternalUpdate` section; restores the prior phase on drop.
pub struct SyncSection {
    phase: Rc<Cell<SyncPhase>>,
    previous: SyncPhase,
}

impl Drop for SyncSection {
    fn drop(&mut self) {
        self.phase.set(self.previous);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::nearest::translate_index;
    use chrono::{NaiveDate, NaiveTime};
    use gwd_well::sample::WellSample;

    #[test]
    fn test_set_notifies_subscribers() {
        let store = HoverStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = store.subscribe(move |value| sink.borrow_mut().push(value));

        store.set(Some(3));
        store.set(None);
        assert_eq!(*seen.borrow(), vec![Some(3), None]);
        assert_eq!(store.snapshot(), None);
    }

    #[test]
    fn test_redundant_writes_do_not_notify() {
        let store = HoverStore::new();
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        let _sub = store.subscribe(move |_| sink.set(sink.get() + 1));

        store.set(Some(2));
        store.set(Some(2));
        store.set(Some(2));
        assert_eq!(count.get(), 1);
        // Clearing an already-cleared store is equally silent.
        store.clear();
        store.clear();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_snapshot_reads_without_subscribing() {
        let store = HoverStore::new();
        assert_eq!(store.snapshot(), None);
        store.set(Some(7));
        assert_eq!(store.snapshot(), Some(7));
    }

    #[test]
    fn test_dropped_subscription_stops_notifications() {
        let store = HoverStore::new();
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        let sub = store.subscribe(move |_| sink.set(sink.get() + 1));

        store.set(Some(1));
        sub.unsubscribe();
        store.set(Some(2));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_clones_share_the_same_cell() {
        let store = HoverStore::new();
        let other = store.clone();
        store.set(Some(4));
        assert_eq!(other.snapshot(), Some(4));
    }

    #[test]
    fn test_guard_section_is_scoped() {
        let guard = SyncGuard::new();
        assert_eq!(guard.phase(), SyncPhase::Idle);
        {
            let _section = guard.apply_external();
            assert!(guard.is_applying());
        }
        assert_eq!(guard.phase(), SyncPhase::Idle);
    }

    #[test]
    fn test_guard_resets_when_listener_panics() {
        let guard = SyncGuard::new();
        let inner = guard.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _section = inner.apply_external();
            panic!("update handler failed");
        }));
        assert!(result.is_err());
        assert_eq!(guard.phase(), SyncPhase::Idle);
    }

    fn series(hours: &[u32]) -> Vec<WellSample> {
        hours
            .iter()
            .map(|&h| WellSample {
                timestamp: NaiveDate::from_ymd_opt(2024, 8, 3)
                    .unwrap()
                    .and_time(NaiveTime::from_hms_opt(h, 0, 0).unwrap())
                    .and_utc(),
                value: h as f64,
            })
            .collect()
    }

    /// Two synchronized widgets: hovering the water chart must drive the
    /// rain chart's tooltip without the rain chart writing back.
    #[test]
    fn test_two_widget_synchronization_settles() {
        let water = series(&[10, 11, 12, 13]);
        let rain = series(&[10, 14]);

        let store = HoverStore::new();
        let rain_guard = SyncGuard::new();
        let rain_displayed = Rc::new(Cell::new(None::<usize>));
        let writebacks = Rc::new(Cell::new(0));

        // The rain widget's local hover handler, as its chart library would
        // invoke it when the tooltip moves. Suppressed while applying.
        let rain_local_hover = {
            let store = store.clone();
            let guard = rain_guard.clone();
            let writebacks = Rc::clone(&writebacks);
            let rain = rain.clone();
            let water = water.clone();
            move |local_idx: usize| {
                if guard.is_applying() {
                    return;
                }
                writebacks.set(writebacks.get() + 1);
                store.set(translate_index(&rain, &water, local_idx));
            }
        };

        // The rain widget's store subscription: translate the reference
        // index into its own series and "display" the tooltip there, which
        // in a real chart echoes a local hover event.
        let _sub = {
            let guard = rain_guard.clone();
            let displayed = Rc::clone(&rain_displayed);
            let rain = rain.clone();
            let water = water.clone();
            store.subscribe(move |reference_idx| {
                let _section = guard.apply_external();
                match reference_idx.and_then(|idx| translate_index(&water, &rain, idx)) {
                    Some(local_idx) => {
                        displayed.set(Some(local_idx));
                        // The chart library echoes the programmatic tooltip
                        // move as a hover event; the guard swallows it.
                        rain_local_hover(local_idx);
                    }
                    None => displayed.set(None),
                }
            })
        };

        // The water chart (reference series) reports a hover on index 3.
        store.set(Some(3));

        // Water's 13:00 sample is nearest rain's 14:00 entry.
        assert_eq!(rain_displayed.get(), Some(1));
        // The echoed event never wrote back, and the guard settled.
        assert_eq!(writebacks.get(), 0);
        assert_eq!(store.snapshot(), Some(3));
        assert_eq!(rain_guard.phase(), SyncPhase::Idle);

        // Pointer leaves the water chart: everything clears.
        store.clear();
        assert_eq!(rain_displayed.get(), None);
        assert_eq!(rain_guard.phase(), SyncPhase::Idle);
    }

    /// A consumer whose own series is empty suppresses its display update
    /// instead of indexing out of bounds.
    #[test]
    fn test_empty_consumer_series_suppresses_display() {
        let water = series(&[10, 11]);
        let empty: Vec<WellSample> = Vec::new();

        let store = HoverStore::new();
        let displayed = Rc::new(Cell::new(Some(99usize)));
        let sink = Rc::clone(&displayed);
        let _sub = store.subscribe(move |reference_idx| {
            sink.set(reference_idx.and_then(|idx| translate_index(&water, &empty, idx)));
        });

        store.set(Some(1));
        assert_eq!(displayed.get(), None);
    }
}
