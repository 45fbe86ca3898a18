//! Standard MIDI File (format 0/1) reading and playback.

mod event;
mod file;
mod player;

pub use event::{Event, EventReader, Kind, Meta, Track};
pub use file::File;
pub use player::{Player, PlayerHandler, State};

use thiserror::Error;

/// The static maximum number of tracks in a file.
pub const MAX_TRACKS: usize = 16;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  #[error("Missing '{0}' chunk signature")]
  Signature(&'static str),

  #[error("Header length {0} is not 6")]
  HeaderLength(u32),

  #[error("Unsupported format {0}")]
  Format(u16),

  #[error("Too many tracks: {0}")]
  TrackCount(u16),

  #[error("SMPTE divisions are not supported")]
  SmpteDivision,

  #[error("Division must be positive")]
  ZeroDivision,

  #[error("Track chunk is too short")]
  TrackLength,

  #[error("Truncated file")]
  Truncated,
}
