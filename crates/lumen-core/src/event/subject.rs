// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The priority-ordered notification hub.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// Identifier handed out by [`Subject::register`].
///
/// Ids are 0-based and increase by one per registration on a given hub. Only
/// [`Subject::reset`] rewinds the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u32);

impl ObserverId {
    /// Returns the raw counter value of this id.
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer#{}", self.0)
    }
}

/// A handler notified by a [`Subject`].
///
/// `E` is the event source the subject passes along, usually a snapshot of
/// the owner's state taken right after it changed. Any `Fn(&E)` closure that
/// is `Send + Sync` is an observer.
pub trait Observer<E>: Send + Sync {
    /// Called once per [`Subject::notify`].
    fn on_notify(&self, source: &E);
}

impl<E, F> Observer<E> for F
where
    F: Fn(&E) + Send + Sync,
{
    fn on_notify(&self, source: &E) {
        self(source)
    }
}

struct Registration<E> {
    id: ObserverId,
    priority: i32,
    observer: Arc<dyn Observer<E>>,
}

struct SubjectState<E> {
    registrations: Vec<Registration<E>>,
    next_id: u32,
}

/// An ordered publish/subscribe registry owned by an observable component.
///
/// Registrations are kept sorted by priority (lower first); equal priorities
/// keep their registration order. The registration list is only allocated on
/// first use, so idle hubs cost nothing.
///
/// A hub belongs to exactly one owner. Other components reach it through the
/// `Arc` the owner hands out, never through a global.
pub struct Subject<E> {
    state: Mutex<SubjectState<E>>,
}

impl<E> Subject<E> {
    /// Creates an empty hub whose next id is 0.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SubjectState {
                registrations: Vec::new(),
                next_id: 0,
            }),
        }
    }

    // Handlers never run while the lock is held, so a poisoned lock only
    // means a panic elsewhere; the list itself is still consistent.
    fn state(&self) -> MutexGuard<'_, SubjectState<E>> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Registers an observer and returns its freshly assigned id.
    pub fn register(&self, observer: Arc<dyn Observer<E>>, priority: i32) -> ObserverId {
        let mut state = self.state();
        let id = ObserverId(state.next_id);
        state.next_id += 1;
        Self::insert_sorted(&mut state.registrations, id, priority, observer);
        log::trace!("Subject: registered {id} (priority={priority})");
        id
    }

    /// Convenience wrapper around [`register`](Self::register) for closures.
    pub fn register_fn<F>(&self, priority: i32, handler: F) -> ObserverId
    where
        F: Fn(&E) + Send + Sync + 'static,
        E: 'static,
    {
        self.register(Arc::new(handler), priority)
    }

    /// Re-attaches an observer under an id it was issued earlier.
    ///
    /// The counter is not advanced. If `id` is already registered the hub
    /// ends up holding duplicates, and a later [`unregister`](Self::unregister)
    /// removes all of them.
    pub fn register_with_id(&self, id: ObserverId, observer: Arc<dyn Observer<E>>, priority: i32) {
        let mut state = self.state();
        if state.registrations.iter().any(|r| r.id == id) {
            log::warn!("Subject: {id} registered twice; unregister will remove both");
        }
        Self::insert_sorted(&mut state.registrations, id, priority, observer);
    }

    fn insert_sorted(
        registrations: &mut Vec<Registration<E>>,
        id: ObserverId,
        priority: i32,
        observer: Arc<dyn Observer<E>>,
    ) {
        let at = registrations.partition_point(|r| r.priority <= priority);
        registrations.insert(
            at,
            Registration {
                id,
                priority,
                observer,
            },
        );
    }

    /// Removes every registration carrying `id` and returns how many went.
    pub fn unregister(&self, id: ObserverId) -> usize {
        let mut state = self.state();
        let before = state.registrations.len();
        state.registrations.retain(|r| r.id != id);
        let removed = before - state.registrations.len();
        log::trace!("Subject: unregistered {id} ({removed} entries)");
        removed
    }

    /// Calls every observer in priority order with `source`.
    ///
    /// Iterates over a snapshot taken before the first call: observers may
    /// register or unregister (themselves included) from inside a handler,
    /// and the change takes effect on the next notify.
    pub fn notify(&self, source: &E) {
        let snapshot: Vec<Arc<dyn Observer<E>>> = self
            .state()
            .registrations
            .iter()
            .map(|r| Arc::clone(&r.observer))
            .collect();

        for observer in snapshot {
            observer.on_notify(source);
        }
    }

    /// Drops every registration and rewinds the id counter to 0.
    pub fn reset(&self) {
        let mut state = self.state();
        state.registrations = Vec::new();
        state.next_id = 0;
        log::trace!("Subject: reset");
    }

    /// Returns the ids in notification order.
    pub fn observer_ids(&self) -> Vec<ObserverId> {
        self.state().registrations.iter().map(|r| r.id).collect()
    }

    /// Returns the number of registrations.
    pub fn len(&self) -> usize {
        self.state().registrations.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.state().registrations.is_empty()
    }
}

impl<E> Default for Subject<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Subject<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("Subject")
            .field("observers", &state.registrations.len())
            .field("next_id", &state.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(log: &Arc<Mutex<Vec<&'static str>>>, name: &'static str) -> Arc<dyn Observer<u32>> {
        let log = Arc::clone(log);
        Arc::new(move |_: &u32| log.lock().unwrap().push(name))
    }

    #[test]
    fn notifies_in_priority_order() {
        let subject = Subject::<u32>::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        subject.register(recorder(&calls, "p5"), 5);
        subject.register(recorder(&calls, "p1"), 1);
        subject.register(recorder(&calls, "p3"), 3);
        subject.notify(&0);

        assert_eq!(*calls.lock().unwrap(), vec!["p1", "p3", "p5"]);
    }

    #[test]
    fn equal_priorities_keep_registration_order() {
        let subject = Subject::<u32>::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        subject.register(recorder(&calls, "first"), 2);
        subject.register(recorder(&calls, "early"), 0);
        subject.register(recorder(&calls, "second"), 2);
        subject.register(recorder(&calls, "third"), 2);
        subject.notify(&0);

        assert_eq!(
            *calls.lock().unwrap(),
            vec!["early", "first", "second", "third"]
        );
    }

    #[test]
    fn ids_are_monotonic_and_rewound_by_reset() {
        let subject = Subject::<u32>::new();
        let a = subject.register_fn(9, |_| {});
        let b = subject.register_fn(0, |_| {});
        assert_eq!((a.index(), b.index()), (0, 1));

        subject.unregister(a);
        let c = subject.register_fn(0, |_| {});
        assert_eq!(c.index(), 2, "unregister must not rewind the counter");

        subject.reset();
        assert!(subject.is_empty());
        let d = subject.register_fn(0, |_| {});
        assert_eq!(d.index(), 0);
    }

    #[test]
    fn observer_receives_the_source() {
        let subject = Subject::<(u32, u32)>::new();
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        subject.register_fn(0, move |size: &(u32, u32)| {
            *sink.lock().unwrap() = Some(*size);
        });

        subject.notify(&(1920, 1080));
        assert_eq!(*seen.lock().unwrap(), Some((1920, 1080)));
    }

    #[test]
    fn unregister_unknown_id_is_a_no_op() {
        let subject = Subject::<u32>::new();
        let a = subject.register_fn(0, |_| {});
        subject.reset();
        let b = subject.register_fn(0, |_| {});
        assert_eq!(a, b);

        assert_eq!(subject.unregister(ObserverId(42)), 0);
        assert_eq!(subject.len(), 1);
    }

    // Known quirk: removal is keyed by id, so duplicated ids all go at once.
    #[test]
    fn unregister_removes_every_duplicate_id() {
        let subject = Subject::<u32>::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let shared = subject.register(recorder(&calls, "a"), 0);
        subject.register(recorder(&calls, "b"), 1);
        subject.register_with_id(shared, recorder(&calls, "a-again"), 2);
        assert_eq!(subject.len(), 3);

        assert_eq!(subject.unregister(shared), 2);
        subject.notify(&0);
        assert_eq!(*calls.lock().unwrap(), vec!["b"]);
    }

    #[test]
    fn handler_may_unregister_itself_during_notify() {
        let subject = Arc::new(Subject::<u32>::new());
        let calls = Arc::new(Mutex::new(Vec::new()));
        let own_id = Arc::new(Mutex::new(None::<ObserverId>));

        let hub = Arc::clone(&subject);
        let id_slot = Arc::clone(&own_id);
        let log = Arc::clone(&calls);
        let id = subject.register_fn(0, move |_| {
            log.lock().unwrap().push("once");
            if let Some(id) = *id_slot.lock().unwrap() {
                hub.unregister(id);
            }
        });
        *own_id.lock().unwrap() = Some(id);
        subject.register(recorder(&calls, "always"), 1);

        subject.notify(&0);
        subject.notify(&0);

        assert_eq!(*calls.lock().unwrap(), vec!["once", "always", "always"]);
    }

    #[test]
    fn removal_of_a_later_observer_applies_on_next_notify() {
        let subject = Arc::new(Subject::<u32>::new());
        let calls = Arc::new(Mutex::new(Vec::new()));

        let victim_slot = Arc::new(Mutex::new(None::<ObserverId>));
        let hub = Arc::clone(&subject);
        let slot = Arc::clone(&victim_slot);
        subject.register_fn(0, move |_| {
            if let Some(victim) = slot.lock().unwrap().take() {
                hub.unregister(victim);
            }
        });
        let victim = subject.register(recorder(&calls, "victim"), 1);
        *victim_slot.lock().unwrap() = Some(victim);

        subject.notify(&0);
        subject.notify(&0);

        // The snapshot still holds the victim for the notify that removed it.
        assert_eq!(*calls.lock().unwrap(), vec!["victim"]);
        assert_eq!(subject.len(), 1);
    }
}
