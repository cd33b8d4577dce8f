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

/// Manages a generic, thread-safe outcome channel.
///
/// The bus is generic over the event type `T` so that `lumen-core` stays
/// decoupled from the concrete events defined by the agents. The owning agent
/// publishes; callers either keep a [`receiver`](Self::receiver) or
/// [`drain`](Self::drain) everything that accumulated since the last tick.
#[derive(Debug)]
pub struct EventBus<T: Clone + Send + Sync + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> EventBus<T> {
    /// Creates a new EventBus backed by an unbounded channel.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        log::debug!("EventBus<{}> initialized.", std::any::type_name::<T>());
        Self { sender, receiver }
    }

    /// Publishes an event, logging an error if every receiver is gone.
    ///
    /// ## Arguments
    /// * `event` - The event to be sent over the channel.
    pub fn publish(&self, event: T) {
        log::trace!("Publishing an event.");

        if let Err(e) = self.sender.send(event) {
            log::error!("Failed to send event: {e}. Receiver likely disconnected.");
        }
    }

    /// Returns a clone of the sender end of the channel.
    pub fn sender(&self) -> flume::Sender<T> {
        self.sender.clone()
    }

    /// Returns a reference to the receiver end of the channel.
    pub fn receiver(&self) -> &flume::Receiver<T> {
        &self.receiver
    }

    /// Takes every pending event, oldest first, without blocking.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }

    /// Returns `true` when no event is waiting.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flume::TryRecvError;
    use std::{thread, time::Duration};

    #[derive(Debug, Clone, PartialEq)]
    enum TestEvent {
        Attached { kind: u32 },
        Failed { kind: u32, reason: String },
        Popped { kind: u32 },
    }

    #[test]
    fn bus_starts_empty() {
        let bus = EventBus::<TestEvent>::new();
        assert!(bus.is_empty());
        assert_eq!(bus.receiver().try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn drain_returns_events_in_publish_order() {
        let bus = EventBus::<TestEvent>::new();
        bus.publish(TestEvent::Attached { kind: 1 });
        bus.publish(TestEvent::Failed {
            kind: 2,
            reason: "missing".to_string(),
        });
        bus.publish(TestEvent::Popped { kind: 1 });

        let drained = bus.drain();
        assert_eq!(
            drained,
            vec![
                TestEvent::Attached { kind: 1 },
                TestEvent::Failed {
                    kind: 2,
                    reason: "missing".to_string()
                },
                TestEvent::Popped { kind: 1 },
            ]
        );
        assert!(bus.is_empty());
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn sender_clone_reaches_owner_from_another_thread() {
        let bus = EventBus::<TestEvent>::new();
        let sender = bus.sender();

        let handle = thread::spawn(move || {
            sender
                .send(TestEvent::Popped { kind: 7 })
                .expect("Send from thread failed");
        });

        let received = bus
            .receiver()
            .recv_timeout(Duration::from_secs(1))
            .expect("event should arrive");
        assert_eq!(received, TestEvent::Popped { kind: 7 });
        handle.join().expect("Thread join failed");
    }
}
