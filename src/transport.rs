use ringbuf::{Consumer, Producer, RingBuffer};

use crate::packet::Packet;

/// A packet transport. Both operations are non-blocking: `receive` returns
/// `None` when no complete packet is available, `send` returns false on
/// backpressure. Retry is the caller's concern.
pub trait Transport {
  fn receive(&mut self) -> Option<Packet>;
  fn send(&mut self, packet: &Packet) -> bool;
}

/// An in-memory transport endpoint over a pair of SPSC queues. The two
/// endpoints created by [`QueueTransport::pair`] are cross-connected: what
/// one sends, the other receives.
pub struct QueueTransport {
  tx: Producer<Packet>,
  rx: Consumer<Packet>,
}

impl QueueTransport {
  pub fn pair(capacity: usize) -> (QueueTransport, QueueTransport) {
    let (near_tx, far_rx) = RingBuffer::new(capacity).split();
    let (far_tx, near_rx) = RingBuffer::new(capacity).split();
    (
      QueueTransport {
        tx: near_tx,
        rx: near_rx,
      },
      QueueTransport {
        tx: far_tx,
        rx: far_rx,
      },
    )
  }
}

impl Transport for QueueTransport {
  fn receive(&mut self) -> Option<Packet> {
    self.rx.pop()
  }

  fn send(&mut self, packet: &Packet) -> bool {
    self.tx.push(*packet).is_ok()
  }
}
