use crate::packet::{Packet, Status};
use crate::transport::Transport;

/// The classic serial MIDI wire runs at 31250 baud, 8-N-1.
pub const BAUD_RATE: u32 = 31250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
  #[default]
  Idle,
  Status,
  Data1,
  Data2,
  SysEx,
}

/// Byte-at-a-time decoder for a serial MIDI stream.
///
/// Running status: between complete messages the machine rests in `Status`
/// with the last status/channel latched, so a data byte without a fresh
/// status byte starts the next message of the same kind. System Real-Time
/// bytes are forwarded immediately and leave the machine untouched, even in
/// the middle of a message. SysEx bytes are discarded; stream reassembly
/// lives in the port layer.
#[derive(Default)]
pub struct Decoder {
  state: State,
  status: Option<Status>,
  channel: u8,
  data1: u8,
}

impl Decoder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn reset(&mut self) {
    self.state = State::Idle;
    self.status = None;
  }

  /// Feed one wire byte; returns a packet whenever a message completes.
  pub fn next(&mut self, byte: u8) -> Option<Packet> {
    if byte & 0x80 != 0 {
      return match Status::from_byte(byte) {
        // Real-Time messages do not update the running status; forward
        // them immediately without touching any state.
        Some(status) if status.is_real_time() => Packet::new(status, 0, 0, 0).ok(),
        Some(status) => self.latch(status, byte),
        None => {
          // Undefined status byte; wait for the next message.
          self.state = State::Idle;
          self.status = None;
          None
        }
      };
    }

    match self.state {
      State::Idle | State::SysEx => None,

      State::Status | State::Data1 => self.first_data(byte),

      State::Data2 => {
        let status = self.status?;
        self.state = State::Status;
        Packet::new(status, self.channel, self.data1, byte).ok()
      }
    }
  }

  fn latch(&mut self, status: Status, byte: u8) -> Option<Packet> {
    match status {
      Status::SystemExclusive => {
        self.state = State::SysEx;
        None
      }

      Status::SystemExclusiveEnd => {
        self.state = State::Idle;
        None
      }

      // Single byte message; the Real-Time statuses never reach here.
      Status::SystemTuneRequest => {
        self.state = State::Idle;
        Packet::new(status, 0, 0, 0).ok()
      }

      _ => {
        self.status = Some(status);
        // System messages are device-global, their low nibble is the
        // message sub-type, not a channel.
        self.channel = if status.is_channel_voice() { byte & 0x0f } else { 0 };
        self.state = State::Data1;
        None
      }
    }
  }

  fn first_data(&mut self, byte: u8) -> Option<Packet> {
    let status = self.status?;
    match status {
      // Two byte message.
      Status::ProgramChange
      | Status::AftertouchChannel
      | Status::SystemTimeCodeQuarterFrame
      | Status::SystemSongSelect => {
        self.state = State::Status;
        Packet::new(status, self.channel, byte, 0).ok()
      }

      // Wait for the second data byte.
      Status::NoteOff
      | Status::NoteOn
      | Status::Aftertouch
      | Status::ControlChange
      | Status::PitchBend
      | Status::SystemSongPosition => {
        self.data1 = byte;
        self.state = State::Data2;
        None
      }

      _ => None,
    }
  }
}

/// A UART-like byte device. Both operations are non-blocking; `write`
/// returns false when the device cannot take the bytes right now.
pub trait ByteIo {
  fn read(&mut self) -> Option<u8>;
  fn write(&mut self, bytes: &[u8]) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
  pub input: u32,
  pub output: u32,
}

/// A [`Transport`] over a serial byte device. Receiving feeds one byte
/// through the decoder per call; sending serializes the packet into its
/// 1..3 wire bytes.
pub struct SerialTransport<IO: ByteIo> {
  io: IO,
  decoder: Decoder,
  statistics: Statistics,
}

impl<IO: ByteIo> SerialTransport<IO> {
  pub fn new(io: IO) -> Self {
    Self {
      io,
      decoder: Decoder::new(),
      statistics: Statistics::default(),
    }
  }

  pub fn statistics(&self) -> &Statistics {
    &self.statistics
  }

  pub fn io_mut(&mut self) -> &mut IO {
    &mut self.io
  }
}

impl<IO: ByteIo> Transport for SerialTransport<IO> {
  fn receive(&mut self) -> Option<Packet> {
    let byte = self.io.read()?;
    let packet = self.decoder.next(byte)?;
    self.statistics.input += 1;
    Some(packet)
  }

  fn send(&mut self, packet: &Packet) -> bool {
    let bytes = match packet.serial_bytes() {
      Some(bytes) => bytes,
      None => return false,
    };

    if !self.io.write(bytes) {
      return false;
    }

    self.statistics.output += 1;
    true
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::packet::CodeIndex;

  fn feed(decoder: &mut Decoder, bytes: &[u8]) -> Vec<Packet> {
    bytes.iter().filter_map(|b| decoder.next(*b)).collect()
  }

  #[test]
  fn running_status() {
    let mut decoder = Decoder::new();
    let packets = feed(&mut decoder, &[0x92, 0x3c, 0x7f, 0x40, 0x50]);

    assert_eq!(packets.len(), 2);
    assert_eq!(packets[0].status(), Some(Status::NoteOn));
    assert_eq!(packets[0].channel(), 2);
    assert_eq!(packets[0].note(), 60);
    assert_eq!(packets[0].note_velocity(), 127);
    assert_eq!(packets[1].status(), Some(Status::NoteOn));
    assert_eq!(packets[1].channel(), 2);
    assert_eq!(packets[1].note(), 64);
    assert_eq!(packets[1].note_velocity(), 80);
  }

  #[test]
  fn real_time_interleaves_mid_message() {
    let mut decoder = Decoder::new();
    let packets = feed(&mut decoder, &[0x92, 0x3c, 0xf8, 0x7f]);

    assert_eq!(packets.len(), 2);
    assert_eq!(packets[0].status(), Some(Status::SystemClock));
    assert_eq!(packets[0].code_index(), CodeIndex::SingleByte);
    assert_eq!(packets[1].status(), Some(Status::NoteOn));
    assert_eq!(packets[1].channel(), 2);
    assert_eq!(packets[1].note(), 60);
    assert_eq!(packets[1].note_velocity(), 127);
  }

  #[test]
  fn two_byte_messages() {
    let mut decoder = Decoder::new();
    let packets = feed(&mut decoder, &[0xc1, 42, 0xd3, 99]);

    assert_eq!(packets.len(), 2);
    assert_eq!(packets[0].status(), Some(Status::ProgramChange));
    assert_eq!(packets[0].channel(), 1);
    assert_eq!(packets[0].program(), 42);
    assert_eq!(packets[1].status(), Some(Status::AftertouchChannel));
    assert_eq!(packets[1].channel(), 3);
    assert_eq!(packets[1].aftertouch_channel(), 99);
  }

  #[test]
  fn program_change_running_status() {
    let mut decoder = Decoder::new();
    let packets = feed(&mut decoder, &[0xc1, 42, 43, 44]);

    assert_eq!(packets.len(), 3);
    for (packet, program) in packets.iter().zip([42, 43, 44]) {
      assert_eq!(packet.status(), Some(Status::ProgramChange));
      assert_eq!(packet.program(), program);
    }
  }

  #[test]
  fn song_position_is_global() {
    let mut decoder = Decoder::new();
    let packets = feed(&mut decoder, &[0xf2, 0x04, 0x02]);

    assert_eq!(packets.len(), 1);
    assert_eq!(packets[0].status(), Some(Status::SystemSongPosition));
    assert_eq!(packets[0].channel(), 0);
    assert_eq!(packets[0].song_position(), (2 << 7) | 4);
  }

  #[test]
  fn tune_request_emits_alone() {
    let mut decoder = Decoder::new();
    let packets = feed(&mut decoder, &[0xf6]);

    assert_eq!(packets.len(), 1);
    assert_eq!(packets[0].status(), Some(Status::SystemTuneRequest));
  }

  #[test]
  fn data_without_status_is_discarded() {
    let mut decoder = Decoder::new();
    assert!(feed(&mut decoder, &[0x3c, 0x7f]).is_empty());
  }

  #[test]
  fn sysex_bytes_are_discarded() {
    let mut decoder = Decoder::new();
    let packets = feed(
      &mut decoder,
      &[0xf0, 0x7e, 0x01, 0x02, 0xf7, 0x93, 0x3c, 0x40],
    );

    assert_eq!(packets.len(), 1);
    assert_eq!(packets[0].status(), Some(Status::NoteOn));
    assert_eq!(packets[0].channel(), 3);
  }

  #[test]
  fn real_time_survives_sysex_discard() {
    let mut decoder = Decoder::new();
    let packets = feed(&mut decoder, &[0xf0, 0x7e, 0xf8, 0x01, 0xf7]);

    assert_eq!(packets.len(), 1);
    assert_eq!(packets[0].status(), Some(Status::SystemClock));
  }

  #[test]
  fn undefined_status_idles() {
    let mut decoder = Decoder::new();
    let packets = feed(&mut decoder, &[0xf4, 0x3c, 0x92, 0x3c, 0x7f]);

    assert_eq!(packets.len(), 1);
    assert_eq!(packets[0].status(), Some(Status::NoteOn));
  }

  #[test]
  fn stream_concatenation_round_trip() {
    // A stream with elided status bytes decodes to the same packets as the
    // fully spelled out form.
    let elided = [0x92u8, 0x3c, 0x7f, 0x40, 0x50, 0xc2, 7, 8, 0xe1, 0x00, 0x40];
    let spelled = [
      0x92u8, 0x3c, 0x7f, 0x92, 0x40, 0x50, 0xc2, 7, 0xc2, 8, 0xe1, 0x00, 0x40,
    ];

    let mut decoder = Decoder::new();
    let a = feed(&mut decoder, &elided);
    let mut decoder = Decoder::new();
    let b = feed(&mut decoder, &spelled);

    assert_eq!(a, b);
    assert_eq!(a.len(), 5);
  }

  struct TestIo {
    input: Vec<u8>,
    cursor: usize,
    written: Vec<u8>,
    accept: bool,
  }

  impl TestIo {
    fn new(input: &[u8]) -> Self {
      Self {
        input: input.to_vec(),
        cursor: 0,
        written: Vec::new(),
        accept: true,
      }
    }
  }

  impl ByteIo for TestIo {
    fn read(&mut self) -> Option<u8> {
      let byte = self.input.get(self.cursor).copied()?;
      self.cursor += 1;
      Some(byte)
    }

    fn write(&mut self, bytes: &[u8]) -> bool {
      if !self.accept {
        return false;
      }
      self.written.extend_from_slice(bytes);
      true
    }
  }

  #[test]
  fn transport_receive_counts_messages() {
    let mut transport = SerialTransport::new(TestIo::new(&[0x92, 0x3c, 0x7f, 0x40, 0x50]));

    let mut packets = Vec::new();
    while transport.io_mut().cursor < transport.io_mut().input.len() {
      if let Some(packet) = transport.receive() {
        packets.push(packet);
      }
    }

    assert_eq!(packets.len(), 2);
    assert_eq!(transport.statistics().input, 2);
  }

  #[test]
  fn transport_send_counts_only_accepted_writes() {
    let mut transport = SerialTransport::new(TestIo::new(&[]));
    let mut packet = Packet::default();
    packet.set_note(2, 60, 127);

    assert!(transport.send(&packet));
    assert_eq!(transport.statistics().output, 1);
    assert_eq!(&transport.io_mut().written, &[0x92, 60, 127]);

    transport.io_mut().accept = false;
    assert!(!transport.send(&packet));
    assert_eq!(transport.statistics().output, 1);
  }
}
