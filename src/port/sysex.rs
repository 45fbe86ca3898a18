use crate::packet::{CodeIndex, Packet, Status};

const START: u8 = Status::SystemExclusive as u8;
const END: u8 = Status::SystemExclusiveEnd as u8;

/// What an inbound packet turned out to be.
pub(crate) enum Store {
  /// A complete single-packet message; dispatch it.
  Message,
  /// The final end frame arrived; the buffered stream is complete.
  Complete,
  /// The packet belonged to (or corrupted) a SysEx stream.
  Consumed,
}

/// Inbound SysEx reassembly. The buffer carries one complete message,
/// 0xf0 .. 0xf7, all other bytes 7-bit; a stream that does not fit is
/// dropped as a whole and the next start frame begins fresh.
pub(crate) struct Inbound {
  buffer: Vec<u8>,
  length: usize,
  appending: bool,
}

impl Inbound {
  pub fn new(capacity: usize) -> Self {
    Self {
      buffer: vec![0; capacity],
      length: 0,
      appending: false,
    }
  }

  pub fn reset(&mut self) {
    self.length = 0;
    self.appending = false;
  }

  pub fn bytes(&self) -> &[u8] {
    &self.buffer[..self.length]
  }

  fn push(&mut self, bytes: &[u8]) {
    self.buffer[self.length..self.length + bytes.len()].copy_from_slice(bytes);
    self.length += bytes.len();
  }

  pub fn store(&mut self, packet: &Packet) -> Store {
    let data = packet.bytes();

    match packet.code_index() {
      CodeIndex::SystemCommon2
      | CodeIndex::SystemCommon3
      | CodeIndex::NoteOff
      | CodeIndex::NoteOn
      | CodeIndex::Aftertouch
      | CodeIndex::ControlChange
      | CodeIndex::ProgramChange
      | CodeIndex::AftertouchChannel
      | CodeIndex::PitchBend => {
        // Complete single-packet message; discard any stream in progress.
        self.reset();
        Store::Message
      }

      CodeIndex::SingleByte => {
        if !self.appending {
          self.reset();
          return Store::Message;
        }

        // Used in the middle of a SysEx packet stream to transport a
        // single byte instead of three.
        if self.length + 1 > self.buffer.len() {
          self.reset();
          return Store::Consumed;
        }

        self.push(&data[1..2]);
        Store::Consumed
      }

      // Start of a new stream, or more data for the current one.
      CodeIndex::SystemExclusiveStart => {
        if self.length + 3 > self.buffer.len() {
          self.reset();
          return Store::Consumed;
        }

        if !self.appending {
          self.length = 0;

          // Must be the start of a SysEx.
          if data[1] != START {
            return Store::Consumed;
          }

          self.appending = true;
        }

        self.push(&data[1..4]);
        Store::Consumed
      }

      // End of the stream, with various trailing lengths.
      CodeIndex::SystemExclusiveEnd1 => {
        // Invalid 'End' packet.
        if data[1] != END {
          self.reset();
          return Store::Consumed;
        }

        // 'End' packet without previous data, discarding.
        if !self.appending {
          self.length = 0;
          return Store::Consumed;
        }

        if self.length + 1 > self.buffer.len() {
          self.reset();
          return Store::Consumed;
        }

        self.push(&data[1..2]);
        self.complete()
      }

      CodeIndex::SystemExclusiveEnd2 => {
        if data[2] != END {
          self.reset();
          return Store::Consumed;
        }

        if self.length + 2 > self.buffer.len() {
          self.reset();
          return Store::Consumed;
        }

        // A standalone 'End' packet must be an 'empty' SysEx.
        if !self.appending {
          self.length = 0;

          if data[1] != START {
            return Store::Consumed;
          }
        }

        self.push(&data[1..3]);
        self.complete()
      }

      CodeIndex::SystemExclusiveEnd3 => {
        if data[3] != END {
          self.reset();
          return Store::Consumed;
        }

        if self.length + 3 > self.buffer.len() {
          self.reset();
          return Store::Consumed;
        }

        // A standalone 'End' packet must be a 'one byte' SysEx.
        if !self.appending {
          self.length = 0;

          if data[1] != START {
            return Store::Consumed;
          }
        }

        self.push(&data[1..4]);
        self.complete()
      }

      CodeIndex::Reserved | CodeIndex::Cable => {
        self.reset();
        Store::Consumed
      }
    }
  }

  fn complete(&mut self) -> Store {
    self.appending = false;
    Store::Complete
  }
}

/// Outbound SysEx staging: a message is copied into the buffer, then
/// chunked into start/continuation frames of three bytes and one end frame
/// carrying the last 1..3 bytes.
pub(crate) struct Outbound {
  buffer: Vec<u8>,
  length: usize,
  position: usize,
}

impl Outbound {
  pub fn new(capacity: usize) -> Self {
    Self {
      buffer: vec![0; capacity],
      length: 0,
      position: 0,
    }
  }

  pub fn reset(&mut self) {
    self.length = 0;
    self.position = 0;
  }

  pub fn buffer_mut(&mut self) -> &mut [u8] {
    &mut self.buffer
  }

  pub fn is_active(&self) -> bool {
    self.length > 0
  }

  pub fn begin(&mut self, length: usize) -> Result<(), super::SysExError> {
    if length < 2 {
      return Err(super::SysExError::TooShort);
    }

    if length > self.buffer.len() {
      return Err(super::SysExError::Overflow);
    }

    if self.buffer[0] != START {
      return Err(super::SysExError::MissingStart);
    }

    if self.buffer[length - 1] != END {
      return Err(super::SysExError::MissingEnd);
    }

    self.length = length;
    self.position = 0;
    Ok(())
  }

  fn remaining(&self) -> usize {
    self.length - self.position
  }

  /// The frame for the current position.
  pub fn frame(&self, cable: u8) -> Packet {
    let (code_index, take) = match self.remaining() {
      1 => (CodeIndex::SystemExclusiveEnd1, 1),
      2 => (CodeIndex::SystemExclusiveEnd2, 2),
      3 => (CodeIndex::SystemExclusiveEnd3, 3),
      _ => (CodeIndex::SystemExclusiveStart, 3),
    };

    let mut data = [0u8; 4];
    data[0] = (cable << 4) | code_index as u8;
    data[1..1 + take].copy_from_slice(&self.buffer[self.position..self.position + take]);
    Packet::from_bytes(data)
  }

  /// Step past the frame just sent; true when the transfer is finished.
  pub fn advance(&mut self) -> bool {
    if self.remaining() > 3 {
      self.position += 3;
      return false;
    }

    self.reset();
    true
  }
}
