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

/// Manages a generic event channel.
///
/// Producers hold cloned [`flume::Sender`]s; the owner of the bus drains the
/// queue once per frame with [`EventBus::drain`], which yields events in the
/// order they were published.
#[derive(Debug)]
pub struct EventBus<T: Send + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Send + 'static> EventBus<T> {
    /// Creates a new EventBus with an unbounded channel for a specific event type.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        log::debug!("EventBus initialized.");
        Self { sender, receiver }
    }

    /// Sends an event, logging an error if the receiver is disconnected.
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

    /// Removes and returns every queued event, oldest first.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }

    /// Number of events waiting to be drained.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

impl<T: Send + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flume::TryRecvError;
    use std::thread;

    #[derive(Debug, Clone, PartialEq)]
    enum TestEvent {
        Resized { width: u32, height: u32 },
        Scrolled(f32),
        ContextLost,
    }

    #[test]
    fn test_event_bus_creation() {
        let bus = EventBus::<TestEvent>::new();
        assert!(bus.receiver().is_empty());
        assert_eq!(bus.pending(), 0);
    }

    #[test]
    fn test_try_receive_empty() {
        let bus = EventBus::<TestEvent>::new();
        assert_eq!(bus.receiver().try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_drain_preserves_order() {
        let bus = EventBus::<TestEvent>::new();
        bus.publish(TestEvent::Scrolled(0.1));
        bus.publish(TestEvent::Resized {
            width: 800,
            height: 600,
        });
        bus.publish(TestEvent::ContextLost);
        assert_eq!(bus.pending(), 3);

        let events = bus.drain();
        assert_eq!(
            events,
            vec![
                TestEvent::Scrolled(0.1),
                TestEvent::Resized {
                    width: 800,
                    height: 600
                },
                TestEvent::ContextLost,
            ]
        );
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_send_from_thread() {
        let bus = EventBus::<TestEvent>::new();
        let sender = bus.sender();

        let handle = thread::spawn(move || {
            sender
                .send(TestEvent::Scrolled(0.5))
                .expect("Send from thread should succeed");
        });
        handle.join().expect("Sender thread panicked");

        assert_eq!(bus.drain(), vec![TestEvent::Scrolled(0.5)]);
    }
}
