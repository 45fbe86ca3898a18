use super::{Error, Event, EventReader, File, Kind, Meta};
use crate::packet::{Packet, Status};

/// Playback state, reported through [`PlayerHandler::state_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
  Empty,
  Loaded,
  Play,
  Stop,
}

pub trait PlayerHandler {
  /// Playback output: one packet per due channel message.
  fn send(&mut self, track: u16, packet: &Packet);

  /// Notified about load/unload, Play, and Stop / the end of playback.
  fn state_change(&mut self, _state: State) {}
}

/// The tempo used if track 0 carries no tempo events: 120 BPM.
const DEFAULT_TEMPO_USEC: u32 = 500_000;

struct TrackPlayback<'a> {
  reader: EventReader<'a>,
  pending: Option<Event<'a>>,
  /// The tick the pending event is scheduled for.
  tick: u64,
  end: bool,
}

/// Plays all tracks of a file in parallel under the tempo map of track 0.
///
/// The player never reads a clock; the caller passes the current time in
/// microseconds into [`Player::play`] and [`Player::run`]. `run` needs to
/// be called from a few times a millisecond to every few milliseconds:
/// the playback speed does not depend on the call frequency, it only
/// affects the accuracy of the event timing.
pub struct Player<'a, H: PlayerHandler> {
  handler: H,
  file: Option<File<'a>>,
  state: State,
  tracks: Vec<TrackPlayback<'a>>,
  /// The current playback position in whole ticks.
  tick: u64,
  /// Sub-tick remainder, in µs·division units. The unit does not depend
  /// on the tempo, so it stays exact across tempo changes.
  remainder: u64,
  /// Microseconds per quarter note.
  tempo: u32,
  /// The last time `run` advanced the position.
  last_usec: u64,
}

impl<'a, H: PlayerHandler> Player<'a, H> {
  pub fn new(handler: H) -> Self {
    Self {
      handler,
      file: None,
      state: State::Empty,
      tracks: Vec::new(),
      tick: 0,
      remainder: 0,
      tempo: DEFAULT_TEMPO_USEC,
      last_usec: 0,
    }
  }

  pub fn handler(&self) -> &H {
    &self.handler
  }

  pub fn handler_mut(&mut self) -> &mut H {
    &mut self.handler
  }

  pub fn state(&self) -> State {
    self.state
  }

  pub fn file(&self) -> Option<&File<'a>> {
    self.file.as_ref()
  }

  pub fn format(&self) -> Option<u16> {
    self.file.as_ref().map(|file| file.format())
  }

  pub fn division(&self) -> Option<u16> {
    self.file.as_ref().map(|file| file.division())
  }

  pub fn track_count(&self) -> Option<u16> {
    self.file.as_ref().map(|file| file.track_count())
  }

  /// Find a specific meta tag in track 0, e.g. the Title.
  pub fn tag(&self, meta: Meta) -> Option<&'a [u8]> {
    self.file.as_ref()?.track(0)?.find_tag(meta)
  }

  /// Parse a file and transition to Loaded. A parse failure leaves the
  /// player Empty; nothing partial survives into playback.
  pub fn load(&mut self, data: &'a [u8]) -> Result<(), Error> {
    self.state = State::Empty;
    self.file = None;
    self.tracks.clear();

    let file = File::parse(data)?;
    self.file = Some(file);

    self.state = State::Loaded;
    self.handler.state_change(State::Loaded);
    Ok(())
  }

  pub fn unload(&mut self) {
    self.file = None;
    self.tracks.clear();

    if self.state != State::Empty {
      self.state = State::Empty;
      self.handler.state_change(State::Empty);
    }
  }

  /// Start playback from the beginning.
  pub fn play(&mut self, now_usec: u64) -> bool {
    let file = match &self.file {
      Some(file) => file,
      None => return false,
    };

    self.tracks = file
      .tracks()
      .iter()
      .map(|track| TrackPlayback {
        reader: track.events(),
        pending: None,
        tick: 0,
        end: false,
      })
      .collect();

    self.tempo = DEFAULT_TEMPO_USEC;
    self.tick = 0;
    self.remainder = 0;
    self.last_usec = now_usec;

    self.state = State::Play;
    self.handler.state_change(State::Play);
    true
  }

  pub fn stop(&mut self) {
    if self.state != State::Play {
      return;
    }

    self.state = State::Stop;
    self.handler.state_change(State::Stop);
  }

  /// Advance the playback position and fire all due events.
  pub fn run(&mut self, now_usec: u64) {
    if self.state != State::Play {
      return;
    }

    let division = match &self.file {
      Some(file) => file.division() as u64,
      None => return,
    };

    let passed = now_usec.saturating_sub(self.last_usec);
    self.last_usec = now_usec;

    // Add the ticks which have passed since the last run.
    self.remainder += passed * division;
    self.tick += self.remainder / self.tempo as u64;
    self.remainder %= self.tempo as u64;

    let mut playing = false;

    for (index, track) in self.tracks.iter_mut().enumerate() {
      if track.end {
        continue;
      }

      playing = true;

      // Check if the track has messages due.
      if self.tick < track.tick {
        continue;
      }

      loop {
        // Read a new event, or handle the previously delayed one.
        let event = match track.pending {
          Some(event) => event,

          None => match track.reader.next() {
            None => {
              track.end = true;
              break;
            }

            Some(event) => {
              track.pending = Some(event);

              if event.delta > 0 {
                // Delay the event.
                track.tick += event.delta as u64;
                break;
              }

              event
            }
          },
        };

        // Track 0 may change the global playback tempo: a 24 bit
        // integer, the number of microseconds per quarter note.
        if index == 0 {
          if let Kind::Meta {
            meta: Meta::Tempo,
            data,
          } = event.kind
          {
            if data.len() == 3 {
              self.tempo = (data[0] as u32) << 16 | (data[1] as u32) << 8 | data[2] as u32;
            }

            track.pending = None;
            continue;
          }
        }

        if let Kind::Message {
          status,
          channel,
          data,
        } = event.kind
        {
          let mut packet = Packet::default();

          let encoded = match status {
            Status::NoteOn
            | Status::NoteOff
            | Status::Aftertouch
            | Status::ControlChange
            | Status::PitchBend
              if data.len() == 2 =>
            {
              packet.set(status, channel, data[0], data[1]).is_ok()
            }

            Status::ProgramChange | Status::AftertouchChannel if data.len() == 1 => {
              packet.set(status, channel, data[0], 0).is_ok()
            }

            // Other messages have no place in playback output.
            _ => false,
          };

          if encoded {
            self.handler.send(index as u16, &packet);
          }
        }

        // Other meta and SysEx events are consumed silently.
        track.pending = None;
      }
    }

    if !playing {
      self.state = State::Stop;
      self.handler.state_change(State::Stop);
    }
  }
}
