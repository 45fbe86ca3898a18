use ringbuf::Producer;
use std::fmt::{Debug, Formatter};

use crate::clock;
use crate::port::Handler;

/// The port's handler vocabulary as a value. System Exclusive payloads
/// borrow the port's buffer and are not represented here; consumers that
/// need them implement [`Handler`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortEvent {
  NoteOn { channel: u8, note: u8, velocity: u8 },
  NoteOff { channel: u8, note: u8, velocity: u8 },
  Aftertouch { channel: u8, note: u8, pressure: u8 },
  ControlChange { channel: u8, controller: u8, value: u8 },
  ProgramChange { channel: u8, program: u8 },
  AftertouchChannel { channel: u8, pressure: u8 },
  PitchBend { channel: u8, value: i16 },
  SongPosition { beats: u16 },
  SongSelect { number: u8 },
  Clock(clock::Event),
  SystemReset,
}

/// A [`Handler`] that forwards every typed callback as a [`PortEvent`],
/// either into a callback or into a ring buffer to drain elsewhere.
pub enum EventHandler {
  Callback(Box<dyn FnMut(PortEvent) + Send + 'static>),
  RingBuffer(Producer<PortEvent>),
}

impl EventHandler {
  fn call(&mut self, event: PortEvent) {
    match self {
      EventHandler::Callback(ref mut callback) => (callback)(event),
      EventHandler::RingBuffer(ref mut producer) => {
        producer.push(event).ok();
      }
    };
  }
}

impl<F> From<F> for EventHandler
where
  F: FnMut(PortEvent) + Send + 'static,
{
  fn from(callback: F) -> Self {
    EventHandler::Callback(Box::new(callback))
  }
}

impl From<Producer<PortEvent>> for EventHandler {
  fn from(producer: Producer<PortEvent>) -> Self {
    EventHandler::RingBuffer(producer)
  }
}

impl Debug for EventHandler {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Callback(_) => write!(f, "Callback"),
      Self::RingBuffer(_) => write!(f, "RingBuffer"),
    }
  }
}

impl Handler for EventHandler {
  fn note_on(&mut self, channel: u8, note: u8, velocity: u8) {
    self.call(PortEvent::NoteOn {
      channel,
      note,
      velocity,
    });
  }

  fn note_off(&mut self, channel: u8, note: u8, velocity: u8) {
    self.call(PortEvent::NoteOff {
      channel,
      note,
      velocity,
    });
  }

  fn aftertouch(&mut self, channel: u8, note: u8, pressure: u8) {
    self.call(PortEvent::Aftertouch {
      channel,
      note,
      pressure,
    });
  }

  fn control_change(&mut self, channel: u8, controller: u8, value: u8) {
    self.call(PortEvent::ControlChange {
      channel,
      controller,
      value,
    });
  }

  fn program_change(&mut self, channel: u8, program: u8) {
    self.call(PortEvent::ProgramChange { channel, program });
  }

  fn aftertouch_channel(&mut self, channel: u8, pressure: u8) {
    self.call(PortEvent::AftertouchChannel { channel, pressure });
  }

  fn pitch_bend(&mut self, channel: u8, value: i16) {
    self.call(PortEvent::PitchBend { channel, value });
  }

  fn song_position(&mut self, beats: u16) {
    self.call(PortEvent::SongPosition { beats });
  }

  fn song_select(&mut self, number: u8) {
    self.call(PortEvent::SongSelect { number });
  }

  fn clock(&mut self, event: clock::Event) {
    self.call(PortEvent::Clock(event));
  }

  fn system_reset(&mut self) {
    self.call(PortEvent::SystemReset);
  }
}

#[cfg(test)]
mod tests {
  use std::sync::atomic::{AtomicU8, Ordering};
  use std::sync::Arc;

  use super::*;
  use crate::packet::Packet;
  use crate::port::Port;
  use crate::transport::QueueTransport;

  #[test]
  fn from_callback() {
    let state = Arc::new(AtomicU8::new(0));
    let state_clone = state.clone();

    let mut handler = EventHandler::from(move |event: PortEvent| {
      if let PortEvent::NoteOn { note, .. } = event {
        state_clone.store(note, Ordering::Relaxed);
      }
    });

    handler.note_on(0, 60, 100);

    assert_eq!(state.load(Ordering::Relaxed), 60);
  }

  #[test]
  fn from_ring_buffer() {
    let (producer, mut consumer) = ringbuf::RingBuffer::new(1).split();

    let mut handler = EventHandler::from(producer);
    handler.pitch_bend(3, -42);

    assert_eq!(
      consumer.pop(),
      Some(PortEvent::PitchBend {
        channel: 3,
        value: -42
      })
    );
  }

  #[test]
  fn port_events_drain_from_the_queue() {
    let (producer, mut consumer) = ringbuf::RingBuffer::new(8).split();
    let mut port = Port::new(0, EventHandler::from(producer));
    let (mut transport, _) = QueueTransport::pair(4);

    let mut packet = Packet::default();
    port.dispatch(&mut transport, packet.set_note(2, 60, 127));
    port.dispatch(&mut transport, packet.set_control_change(1, 7, 100));

    assert_eq!(
      consumer.pop(),
      Some(PortEvent::NoteOn {
        channel: 2,
        note: 60,
        velocity: 127
      })
    );
    assert_eq!(
      consumer.pop(),
      Some(PortEvent::ControlChange {
        channel: 1,
        controller: 7,
        value: 100
      })
    );
    assert_eq!(consumer.pop(), None);
  }
}
