/// Message counters for one direction of a port. Monotonically
/// non-decreasing; updated only on the dispatch/send paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
  pub packet: u32,
  pub note: u32,
  pub note_off: u32,
  pub aftertouch: u32,
  pub control: u32,
  pub program: u32,
  pub aftertouch_channel: u32,
  pub pitchbend: u32,
  pub system: SystemCounter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemCounter {
  pub clock: ClockCounter,
  pub exclusive: u32,
  pub reset: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockCounter {
  pub tick: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
  pub input: Counter,
  pub output: Counter,
}
