use crate::cc::CONTROLLER_LSB;
use crate::packet::Packet;
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
  #[default]
  Init,
  LowResolution,
  HighResolution,
  Wait,
}

#[derive(Debug, Clone, Copy, Default)]
struct Controller {
  state: State,
  msb: u8,
  value: u16,
}

/// High-resolution controllers: MSB + LSB pairs carrying 14 bit values.
///
/// Tracks `N` contiguous controllers starting at `first` (the MSB numbers),
/// paired with `first + 32 ..` (the LSB numbers).
///
/// MIDI specification:
/// - The order is MSB, LSB.
/// - An MSB resets the current LSB.
/// - The LSB can be updated without sending the same MSB again.
///
/// This implementation:
/// - After a reset, setting a value of 0 will not report a change.
/// - The very first MSB reports a change without waiting for a possible LSB.
/// - If we have seen an LSB for the previous update, the report for the next
///   MSB is deferred until its LSB arrives.
/// - Two MSBs without an LSB in-between leave high-resolution mode and
///   report an update; senders are not required to repeat an unchanged MSB,
///   but are expected to always send the LSB after the MSB if
///   high-resolution controllers are used.
pub struct HighResolution<const N: usize> {
  first: u8,
  controllers: [Controller; N],
}

impl<const N: usize> HighResolution<N> {
  pub fn new(first: u8) -> Self {
    Self {
      first,
      controllers: [Controller::default(); N],
    }
  }

  pub fn reset(&mut self) {
    self.controllers = [Controller::default(); N];
  }

  fn msb_index(&self, controller: u8) -> Option<usize> {
    let index = controller.checked_sub(self.first)? as usize;
    (index < N).then(|| index)
  }

  fn lsb_index(&self, controller: u8) -> Option<usize> {
    let index = controller.checked_sub(CONTROLLER_LSB)?.checked_sub(self.first)? as usize;
    (index < N).then(|| index)
  }

  /// The current 14 bit value of an MSB controller number.
  pub fn get(&self, controller: u8) -> Option<u16> {
    let index = self.msb_index(controller)?;
    Some(self.controllers[index].value)
  }

  pub fn get_msb(&self, controller: u8) -> Option<u8> {
    self.get(controller).map(|value| (value >> 7) as u8)
  }

  pub fn get_lsb(&self, controller: u8) -> Option<u8> {
    self.get(controller).map(|value| (value & 0x7f) as u8)
  }

  pub fn get_fraction(&self, controller: u8) -> Option<f32> {
    self.get(controller).map(|value| value as f32 / 16383.)
  }

  /// Store a complete 14 bit value; reports whether the value changed.
  pub fn set(&mut self, controller: u8, value: u16) -> bool {
    let index = match self.msb_index(controller) {
      Some(index) => index,
      None => return false,
    };

    if value == self.controllers[index].value {
      return false;
    }

    self.controllers[index].value = value;
    true
  }

  pub fn set_fraction(&mut self, controller: u8, fraction: f32) -> bool {
    self.set(controller, (fraction * 16383.) as u16)
  }

  /// Feed one Control Change byte, MSB or LSB; reports whether the
  /// resulting 14 bit value changed.
  pub fn set_byte(&mut self, controller: u8, value: u8) -> bool {
    if let Some(index) = self.msb_index(controller) {
      return self.set_msb(index, value);
    }

    if let Some(index) = self.lsb_index(controller) {
      return self.set_lsb(index, value);
    }

    false
  }

  fn set_msb(&mut self, index: usize, value: u8) -> bool {
    let controller = &mut self.controllers[index];
    controller.msb = value;

    match controller.state {
      // Very first MSB.
      State::Init => controller.state = State::LowResolution,

      // We have not seen a valid LSB for the last MSB.
      State::LowResolution => {}

      // We've seen an LSB before, defer the report.
      State::HighResolution => {
        controller.state = State::Wait;
        return false;
      }

      // Two MSBs in a row, leave high-resolution mode.
      State::Wait => controller.state = State::LowResolution,
    }

    let v = (value as u16) << 7;
    if v == controller.value {
      return false;
    }

    controller.value = v;
    true
  }

  fn set_lsb(&mut self, index: usize, value: u8) -> bool {
    let controller = &mut self.controllers[index];

    // Ignore the LSB if we haven't seen an MSB.
    if controller.state == State::Init {
      return false;
    }

    controller.state = State::HighResolution;

    let v = (controller.msb as u16) << 7 | value as u16;
    if v == controller.value {
      return false;
    }

    controller.value = v;
    true
  }

  /// Transmit the current value as an MSB + LSB Control Change pair.
  pub fn send(&self, transport: &mut dyn Transport, channel: u8, controller: u8) -> bool {
    let index = match self.msb_index(controller) {
      Some(index) => index,
      None => return false,
    };

    let value = self.controllers[index].value;
    let mut packet = Packet::default();

    if !transport.send(packet.set_control_change(channel, controller, (value >> 7) as u8)) {
      return false;
    }

    transport.send(packet.set_control_change(
      channel,
      CONTROLLER_LSB + controller,
      (value & 0x7f) as u8,
    ))
  }
}
