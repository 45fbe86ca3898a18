mod statistics;
mod sysex;

pub use statistics::{ClockCounter, Counter, Statistics, SystemCounter};

use thiserror::Error;

use crate::clock;
use crate::packet::{CodeIndex, Packet, Status};
use crate::transport::Transport;
use sysex::{Inbound, Outbound, Store};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SysExError {
  #[error("Message is too short to carry the SysEx envelope")]
  TooShort,

  #[error("Message does not fit the staging buffer")]
  Overflow,

  #[error("Message does not start with 0xf0")]
  MissingStart,

  #[error("Message does not end with 0xf7")]
  MissingEnd,
}

/// Progress of an outbound SysEx transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SysExPump {
  /// Nothing in flight.
  Idle,
  /// Frames remain; pump again.
  Remaining,
  /// The transport refused the frame; the position is retained, pump again
  /// on a later tick.
  Failed,
}

/// The callbacks a port dispatches into. Every method defaults to a no-op;
/// implementers pick the messages they care about.
pub trait Handler {
  fn note_on(&mut self, _channel: u8, _note: u8, _velocity: u8) {}
  fn note_off(&mut self, _channel: u8, _note: u8, _velocity: u8) {}
  fn aftertouch(&mut self, _channel: u8, _note: u8, _pressure: u8) {}
  fn control_change(&mut self, _channel: u8, _controller: u8, _value: u8) {}
  fn program_change(&mut self, _channel: u8, _program: u8) {}
  fn aftertouch_channel(&mut self, _channel: u8, _pressure: u8) {}
  fn pitch_bend(&mut self, _channel: u8, _value: i16) {}
  fn song_position(&mut self, _beats: u16) {}
  fn song_select(&mut self, _number: u8) {}
  fn clock(&mut self, _event: clock::Event) {}
  fn system_reset(&mut self) {}

  /// A complete System Exclusive message. Replies can be sent back over
  /// the given transport during dispatch.
  fn system_exclusive(&mut self, _transport: &mut dyn Transport, _data: &[u8]) {}

  /// Every message besides System Exclusive.
  fn packet(&mut self, _packet: &Packet) {}
}

#[derive(Debug, Clone)]
pub struct PortConfig {
  /// Capacity of the SysEx buffers, one inbound and one outbound. Each
  /// needs to carry a complete message including the 0xf0/0xf7 envelope.
  pub sysex_buffer_size: usize,
}

impl PortConfig {
  const DEFAULT_SYSEX_BUFFER_SIZE: usize = 8 * 1024;
}

impl Default for PortConfig {
  fn default() -> Self {
    Self {
      sysex_buffer_size: PortConfig::DEFAULT_SYSEX_BUFFER_SIZE,
    }
  }
}

/// Transport-independent MIDI functional interface: message dispatching,
/// System Exclusive buffering/streaming, packet statistics.
pub struct Port<H: Handler> {
  cable: u8,
  handler: H,
  statistics: Statistics,
  inbound: Inbound,
  outbound: Outbound,
}

impl<H: Handler> Port<H> {
  pub fn new(cable: u8, handler: H) -> Self {
    Self::with_config(cable, PortConfig::default(), handler)
  }

  pub fn with_config(cable: u8, config: PortConfig, handler: H) -> Self {
    Self {
      cable,
      handler,
      statistics: Statistics::default(),
      inbound: Inbound::new(config.sysex_buffer_size),
      outbound: Outbound::new(config.sysex_buffer_size),
    }
  }

  pub fn cable(&self) -> u8 {
    self.cable
  }

  pub fn handler(&self) -> &H {
    &self.handler
  }

  pub fn handler_mut(&mut self) -> &mut H {
    &mut self.handler
  }

  pub fn statistics(&self) -> &Statistics {
    &self.statistics
  }

  /// Deliver one inbound packet. SysEx frames are collected until the
  /// stream completes; everything else fires the matching handler.
  /// Replies can be sent back over the given `transport`.
  pub fn dispatch(&mut self, transport: &mut dyn Transport, packet: &Packet) {
    self.statistics.input.packet += 1;

    match self.inbound.store(packet) {
      Store::Consumed => return,

      Store::Complete => {
        self.statistics.input.system.exclusive += 1;
        self.handler.system_exclusive(transport, self.inbound.bytes());
        return;
      }

      Store::Message => {}
    }

    let status = match packet.status() {
      Some(status) => status,
      None => return,
    };

    // A single-byte frame must actually carry a single-byte status.
    if packet.code_index() == CodeIndex::SingleByte && !status.is_single_byte() {
      return;
    }

    self.handler.packet(packet);

    match status {
      Status::NoteOn => {
        self.statistics.input.note += 1;
        self
          .handler
          .note_on(packet.channel(), packet.note(), packet.note_velocity());
      }

      Status::NoteOff => {
        self.statistics.input.note_off += 1;
        self
          .handler
          .note_off(packet.channel(), packet.note(), packet.note_velocity());
      }

      Status::Aftertouch => {
        self.statistics.input.aftertouch += 1;
        self
          .handler
          .aftertouch(packet.channel(), packet.aftertouch_note(), packet.aftertouch());
      }

      Status::ControlChange => {
        self.statistics.input.control += 1;
        self.handler.control_change(
          packet.channel(),
          packet.controller(),
          packet.controller_value(),
        );
      }

      Status::ProgramChange => {
        self.statistics.input.program += 1;
        self.handler.program_change(packet.channel(), packet.program());
      }

      Status::AftertouchChannel => {
        self.statistics.input.aftertouch_channel += 1;
        self
          .handler
          .aftertouch_channel(packet.channel(), packet.aftertouch_channel());
      }

      Status::PitchBend => {
        self.statistics.input.pitchbend += 1;
        self.handler.pitch_bend(packet.channel(), packet.pitch_bend());
      }

      Status::SystemSongPosition => self.handler.song_position(packet.song_position()),

      Status::SystemSongSelect => self.handler.song_select(packet.song_select()),

      Status::SystemClock => {
        self.statistics.input.system.clock.tick += 1;
        self.handler.clock(clock::Event::Tick);
      }

      Status::SystemStart => self.handler.clock(clock::Event::Start),

      Status::SystemContinue => self.handler.clock(clock::Event::Continue),

      Status::SystemStop => self.handler.clock(clock::Event::Stop),

      Status::SystemReset => {
        self.statistics.input.system.reset += 1;
        self.handler.system_reset();
      }

      _ => {}
    }
  }

  /// Stamp the port's cable number into the packet and hand it to the
  /// transport. Refused while a System Exclusive transfer is in flight.
  pub fn send(&mut self, transport: &mut dyn Transport, packet: &mut Packet) -> bool {
    // Do not interrupt a system exclusive transfer.
    if self.outbound.is_active() {
      return false;
    }

    packet.set_cable(self.cable);
    if !transport.send(packet) {
      return false;
    }

    self.statistics.output.packet += 1;

    match packet.status() {
      Some(Status::NoteOn) => self.statistics.output.note += 1,
      Some(Status::NoteOff) => self.statistics.output.note_off += 1,
      Some(Status::Aftertouch) => self.statistics.output.aftertouch += 1,
      Some(Status::ControlChange) => self.statistics.output.control += 1,
      Some(Status::ProgramChange) => self.statistics.output.program += 1,
      Some(Status::AftertouchChannel) => self.statistics.output.aftertouch_channel += 1,
      Some(Status::PitchBend) => self.statistics.output.pitchbend += 1,
      Some(Status::SystemClock) => self.statistics.output.system.clock.tick += 1,
      Some(Status::SystemReset) => self.statistics.output.system.reset += 1,
      _ => {}
    }

    true
  }

  /// The staging buffer to copy an outgoing SysEx message into before
  /// calling [`Port::send_system_exclusive`].
  pub fn system_exclusive_buffer(&mut self) -> &mut [u8] {
    self.outbound.buffer_mut()
  }

  /// Chunk the staged message into packets and send as many as the
  /// transport accepts. On [`SysExPump::Failed`] the position is retained;
  /// resume with [`Port::pump_system_exclusive`].
  pub fn send_system_exclusive(
    &mut self,
    transport: &mut dyn Transport,
    length: usize,
  ) -> Result<SysExPump, SysExError> {
    self.outbound.begin(length)?;

    loop {
      match self.pump_system_exclusive(transport) {
        SysExPump::Remaining => continue,
        status => return Ok(status),
      }
    }
  }

  /// Send the next pending SysEx frame, if any. Never blocks.
  pub fn pump_system_exclusive(&mut self, transport: &mut dyn Transport) -> SysExPump {
    if !self.outbound.is_active() {
      return SysExPump::Idle;
    }

    let packet = self.outbound.frame(self.cable);
    if !transport.send(&packet) {
      return SysExPump::Failed;
    }

    self.statistics.output.packet += 1;

    if self.outbound.advance() {
      self.statistics.output.system.exclusive += 1;
      return SysExPump::Idle;
    }

    SysExPump::Remaining
  }

  /// Abort both the inbound reassembly and the outbound transfer.
  pub fn reset_system_exclusive(&mut self) {
    self.inbound.reset();
    self.outbound.reset();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::transport::QueueTransport;

  #[derive(Default)]
  struct Recorder {
    notes: Vec<(u8, u8, u8)>,
    note_offs: Vec<(u8, u8, u8)>,
    controls: Vec<(u8, u8, u8)>,
    programs: Vec<(u8, u8)>,
    bends: Vec<(u8, i16)>,
    positions: Vec<u16>,
    clocks: Vec<clock::Event>,
    exclusives: Vec<Vec<u8>>,
    resets: u32,
    packets: u32,
  }

  impl Handler for Recorder {
    fn note_on(&mut self, channel: u8, note: u8, velocity: u8) {
      self.notes.push((channel, note, velocity));
    }

    fn note_off(&mut self, channel: u8, note: u8, velocity: u8) {
      self.note_offs.push((channel, note, velocity));
    }

    fn control_change(&mut self, channel: u8, controller: u8, value: u8) {
      self.controls.push((channel, controller, value));
    }

    fn program_change(&mut self, channel: u8, program: u8) {
      self.programs.push((channel, program));
    }

    fn pitch_bend(&mut self, channel: u8, value: i16) {
      self.bends.push((channel, value));
    }

    fn song_position(&mut self, beats: u16) {
      self.positions.push(beats);
    }

    fn clock(&mut self, event: clock::Event) {
      self.clocks.push(event);
    }

    fn system_reset(&mut self) {
      self.resets += 1;
    }

    fn system_exclusive(&mut self, _transport: &mut dyn Transport, data: &[u8]) {
      self.exclusives.push(data.to_vec());
    }

    fn packet(&mut self, _packet: &Packet) {
      self.packets += 1;
    }
  }

  fn port() -> (Port<Recorder>, QueueTransport) {
    let (near, _) = QueueTransport::pair(16);
    (Port::new(0, Recorder::default()), near)
  }

  fn sysex_frame(code_index: CodeIndex, bytes: &[u8]) -> Packet {
    let mut data = [0u8; 4];
    data[0] = code_index as u8;
    data[1..1 + bytes.len()].copy_from_slice(bytes);
    Packet::from_bytes(data)
  }

  #[test]
  fn dispatches_typed_callbacks() {
    let (mut port, mut transport) = port();

    let mut packet = Packet::default();
    port.dispatch(&mut transport, packet.set_note(2, 60, 127));
    port.dispatch(&mut transport, packet.set_note_off(2, 60, 64));
    port.dispatch(&mut transport, packet.set_control_change(1, 7, 100));
    port.dispatch(&mut transport, packet.set_program(3, 42));
    port.dispatch(&mut transport, packet.set_pitch_bend(4, -100));
    port.dispatch(&mut transport, packet.set_song_position(16));

    let recorder = port.handler();
    assert_eq!(recorder.notes, vec![(2, 60, 127)]);
    assert_eq!(recorder.note_offs, vec![(2, 60, 64)]);
    assert_eq!(recorder.controls, vec![(1, 7, 100)]);
    assert_eq!(recorder.programs, vec![(3, 42)]);
    assert_eq!(recorder.bends, vec![(4, -100)]);
    assert_eq!(recorder.positions, vec![16]);
    assert_eq!(recorder.packets, 6);

    let statistics = port.statistics();
    assert_eq!(statistics.input.packet, 6);
    assert_eq!(statistics.input.note, 1);
    assert_eq!(statistics.input.note_off, 1);
    assert_eq!(statistics.input.control, 1);
    assert_eq!(statistics.input.program, 1);
    assert_eq!(statistics.input.pitchbend, 1);
  }

  #[test]
  fn dispatches_clock_events() {
    let (mut port, mut transport) = port();

    for status in [
      Status::SystemClock,
      Status::SystemStart,
      Status::SystemContinue,
      Status::SystemStop,
      Status::SystemReset,
    ] {
      let packet = Packet::new(status, 0, 0, 0).expect("packet");
      port.dispatch(&mut transport, &packet);
    }

    let recorder = port.handler();
    assert_eq!(
      recorder.clocks,
      vec![
        clock::Event::Tick,
        clock::Event::Start,
        clock::Event::Continue,
        clock::Event::Stop,
      ]
    );
    assert_eq!(recorder.resets, 1);
    assert_eq!(port.statistics().input.system.clock.tick, 1);
    assert_eq!(port.statistics().input.system.reset, 1);
  }

  #[test]
  fn reassembles_sysex_with_embedded_single_byte() {
    let (mut port, mut transport) = port();

    let frames = [
      sysex_frame(CodeIndex::SystemExclusiveStart, &[0xf0, 0x7e, 0x01]),
      sysex_frame(CodeIndex::SingleByte, &[0xf8]),
      sysex_frame(CodeIndex::SystemExclusiveEnd2, &[0x02, 0xf7]),
    ];
    for frame in &frames {
      port.dispatch(&mut transport, frame);
    }

    let recorder = port.handler();
    // The clock byte joins the stream; no real-time callback fires.
    assert!(recorder.clocks.is_empty());
    assert_eq!(recorder.exclusives, vec![vec![0xf0, 0x7e, 0x01, 0xf8, 0x02, 0xf7]]);
    assert_eq!(port.statistics().input.system.exclusive, 1);
    assert_eq!(port.statistics().input.packet, 3);
  }

  #[test]
  fn reassembles_multi_frame_stream() {
    let (mut port, mut transport) = port();

    let frames = [
      sysex_frame(CodeIndex::SystemExclusiveStart, &[0xf0, 0x01, 0x02]),
      sysex_frame(CodeIndex::SystemExclusiveStart, &[0x03, 0x04, 0x05]),
      sysex_frame(CodeIndex::SystemExclusiveEnd3, &[0x06, 0x07, 0xf7]),
    ];
    for frame in &frames {
      port.dispatch(&mut transport, frame);
    }

    assert_eq!(
      port.handler().exclusives,
      vec![vec![0xf0, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0xf7]]
    );
  }

  #[test]
  fn standalone_end_frames() {
    let (mut port, mut transport) = port();

    // An 'empty' SysEx.
    port.dispatch(
      &mut transport,
      &sysex_frame(CodeIndex::SystemExclusiveEnd2, &[0xf0, 0xf7]),
    );
    // A 'one byte' SysEx.
    port.dispatch(
      &mut transport,
      &sysex_frame(CodeIndex::SystemExclusiveEnd3, &[0xf0, 0x41, 0xf7]),
    );

    assert_eq!(
      port.handler().exclusives,
      vec![vec![0xf0, 0xf7], vec![0xf0, 0x41, 0xf7]]
    );
  }

  #[test]
  fn end_frame_without_terminator_drops_the_stream() {
    let (mut port, mut transport) = port();

    port.dispatch(
      &mut transport,
      &sysex_frame(CodeIndex::SystemExclusiveStart, &[0xf0, 0x01, 0x02]),
    );
    port.dispatch(
      &mut transport,
      &sysex_frame(CodeIndex::SystemExclusiveEnd2, &[0x03, 0x04]),
    );

    assert!(port.handler().exclusives.is_empty());

    // The next stream starts fresh.
    port.dispatch(
      &mut transport,
      &sysex_frame(CodeIndex::SystemExclusiveStart, &[0xf0, 0x0a, 0x0b]),
    );
    port.dispatch(
      &mut transport,
      &sysex_frame(CodeIndex::SystemExclusiveEnd1, &[0xf7]),
    );

    assert_eq!(port.handler().exclusives, vec![vec![0xf0, 0x0a, 0x0b, 0xf7]]);
  }

  #[test]
  fn start_frame_without_f0_is_ignored() {
    let (mut port, mut transport) = port();

    port.dispatch(
      &mut transport,
      &sysex_frame(CodeIndex::SystemExclusiveStart, &[0x01, 0x02, 0x03]),
    );
    port.dispatch(
      &mut transport,
      &sysex_frame(CodeIndex::SystemExclusiveEnd1, &[0xf7]),
    );

    assert!(port.handler().exclusives.is_empty());
  }

  #[test]
  fn channel_message_drops_stream_in_progress() {
    let (mut port, mut transport) = port();

    port.dispatch(
      &mut transport,
      &sysex_frame(CodeIndex::SystemExclusiveStart, &[0xf0, 0x01, 0x02]),
    );

    let mut packet = Packet::default();
    port.dispatch(&mut transport, packet.set_note(0, 60, 100));

    port.dispatch(
      &mut transport,
      &sysex_frame(CodeIndex::SystemExclusiveEnd3, &[0x03, 0x04, 0xf7]),
    );

    let recorder = port.handler();
    assert_eq!(recorder.notes, vec![(0, 60, 100)]);
    assert!(recorder.exclusives.is_empty());
  }

  #[test]
  fn oversized_stream_is_dropped_entirely() {
    let (_, mut transport) = port();
    let config = PortConfig {
      sysex_buffer_size: 4,
    };
    let mut port = Port::with_config(0, config, Recorder::default());

    port.dispatch(
      &mut transport,
      &sysex_frame(CodeIndex::SystemExclusiveStart, &[0xf0, 0x01, 0x02]),
    );
    // Would grow past the buffer; the whole stream is discarded.
    port.dispatch(
      &mut transport,
      &sysex_frame(CodeIndex::SystemExclusiveStart, &[0x03, 0x04, 0x05]),
    );
    port.dispatch(
      &mut transport,
      &sysex_frame(CodeIndex::SystemExclusiveEnd1, &[0xf7]),
    );

    assert!(port.handler().exclusives.is_empty());

    // A fitting stream still goes through afterwards.
    port.dispatch(
      &mut transport,
      &sysex_frame(CodeIndex::SystemExclusiveStart, &[0xf0, 0x0a, 0x0b]),
    );
    port.dispatch(
      &mut transport,
      &sysex_frame(CodeIndex::SystemExclusiveEnd1, &[0xf7]),
    );

    assert_eq!(port.handler().exclusives, vec![vec![0xf0, 0x0a, 0x0b, 0xf7]]);
  }

  #[test]
  fn single_byte_frame_must_be_a_single_byte_status() {
    let (mut port, mut transport) = port();

    // A NoteOn status inside a single-byte frame is malformed.
    port.dispatch(
      &mut transport,
      &Packet::from_bytes([CodeIndex::SingleByte as u8, 0x92, 0, 0]),
    );
    // So is a data byte.
    port.dispatch(
      &mut transport,
      &Packet::from_bytes([CodeIndex::SingleByte as u8, 0x04, 0, 0]),
    );

    let recorder = port.handler();
    assert_eq!(recorder.packets, 0);
    assert!(recorder.notes.is_empty());
    assert_eq!(port.statistics().input.packet, 2);
  }

  #[test]
  fn send_stamps_cable_and_counts() {
    let (mut near, mut far) = QueueTransport::pair(4);
    let mut port = Port::new(5, Recorder::default());

    let mut packet = Packet::default();
    packet.set_note(0, 60, 100);
    assert!(port.send(&mut near, &mut packet));

    let sent = far.receive().expect("packet");
    assert_eq!(sent.cable(), 5);
    assert_eq!(port.statistics().output.packet, 1);
    assert_eq!(port.statistics().output.note, 1);
  }

  #[test]
  fn send_system_exclusive_frames_and_round_trips() {
    let (mut near, mut far) = QueueTransport::pair(16);
    let mut port = Port::new(2, Recorder::default());

    let message = [0xf0, 0x7e, 0x01, 0x02, 0x03, 0x04, 0x05, 0xf7];
    port.system_exclusive_buffer()[..message.len()].copy_from_slice(&message);
    let result = port.send_system_exclusive(&mut near, message.len());
    assert_eq!(result, Ok(SysExPump::Idle));
    assert_eq!(port.statistics().output.system.exclusive, 1);
    assert_eq!(port.statistics().output.packet, 3);

    // 8 bytes chunk into 3 + 3 + End2.
    let mut receiver = Port::new(0, Recorder::default());
    let mut frames = Vec::new();
    while let Some(frame) = far.receive() {
      frames.push(frame);
    }
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].code_index(), CodeIndex::SystemExclusiveStart);
    assert_eq!(frames[0].cable(), 2);
    assert_eq!(frames[1].code_index(), CodeIndex::SystemExclusiveStart);
    assert_eq!(frames[2].code_index(), CodeIndex::SystemExclusiveEnd2);

    for frame in &frames {
      receiver.dispatch(&mut near, frame);
    }
    assert_eq!(receiver.handler().exclusives, vec![message.to_vec()]);
  }

  #[test]
  fn send_system_exclusive_validates_the_envelope() {
    let (mut near, _far) = QueueTransport::pair(4);
    let mut port = Port::new(0, Recorder::default());

    assert_eq!(
      port.send_system_exclusive(&mut near, 1),
      Err(SysExError::TooShort)
    );

    port.system_exclusive_buffer()[..3].copy_from_slice(&[0x01, 0x02, 0xf7]);
    assert_eq!(
      port.send_system_exclusive(&mut near, 3),
      Err(SysExError::MissingStart)
    );

    port.system_exclusive_buffer()[..3].copy_from_slice(&[0xf0, 0x02, 0x03]);
    assert_eq!(
      port.send_system_exclusive(&mut near, 3),
      Err(SysExError::MissingEnd)
    );
  }

  #[test]
  fn backpressure_retains_position_and_resumes() {
    let (mut near, mut far) = QueueTransport::pair(1);
    let mut port = Port::new(0, Recorder::default());

    let message = [0xf0, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0xf7];
    port.system_exclusive_buffer()[..message.len()].copy_from_slice(&message);

    // Only the first frame fits.
    assert_eq!(
      port.send_system_exclusive(&mut near, message.len()),
      Ok(SysExPump::Failed)
    );

    // Regular sends are refused while the transfer is pending.
    let mut note = Packet::default();
    note.set_note(0, 60, 100);
    assert!(!port.send(&mut near, &mut note));

    let mut frames = Vec::new();
    frames.push(far.receive().expect("first frame"));

    assert_eq!(port.pump_system_exclusive(&mut near), SysExPump::Remaining);
    frames.push(far.receive().expect("second frame"));

    assert_eq!(port.pump_system_exclusive(&mut near), SysExPump::Idle);
    frames.push(far.receive().expect("third frame"));

    assert_eq!(port.pump_system_exclusive(&mut near), SysExPump::Idle);

    let mut receiver = Port::new(0, Recorder::default());
    for frame in &frames {
      receiver.dispatch(&mut near, frame);
    }
    assert_eq!(receiver.handler().exclusives, vec![message.to_vec()]);
  }

  #[test]
  fn reset_aborts_both_directions() {
    let (mut near, mut far) = QueueTransport::pair(1);
    let mut port = Port::new(0, Recorder::default());

    port.dispatch(
      &mut near,
      &sysex_frame(CodeIndex::SystemExclusiveStart, &[0xf0, 0x01, 0x02]),
    );

    let message = [0xf0, 0x01, 0x02, 0x03, 0x04, 0xf7];
    port.system_exclusive_buffer()[..message.len()].copy_from_slice(&message);
    assert_eq!(
      port.send_system_exclusive(&mut near, message.len()),
      Ok(SysExPump::Failed)
    );

    port.reset_system_exclusive();
    assert_eq!(port.pump_system_exclusive(&mut near), SysExPump::Idle);

    far.receive();
    port.dispatch(
      &mut near,
      &sysex_frame(CodeIndex::SystemExclusiveEnd1, &[0xf7]),
    );
    assert!(port.handler().exclusives.is_empty());
  }
}
