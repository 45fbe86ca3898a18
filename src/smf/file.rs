use super::{Error, Track, MAX_TRACKS};

/// A parsed Standard MIDI File, referencing an outside byte buffer.
///
/// Format 0 carries a single multi-channel track, format 1 one or more
/// simultaneous tracks. Format 2 is not supported; sequentially
/// independent patterns are better kept as separate files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File<'a> {
  format: u16,
  division: u16,
  tracks: Vec<Track<'a>>,
}

impl<'a> File<'a> {
  pub fn parse(data: &'a [u8]) -> Result<Self, Error> {
    let mut cursor = 0;

    read_signature(data, &mut cursor, "MThd")?;
    let header_length = read_be32(data, &mut cursor)?;
    if header_length != 6 {
      return Err(Error::HeaderLength(header_length));
    }

    let format = read_be16(data, &mut cursor)?;
    if format > 1 {
      return Err(Error::Format(format));
    }

    let track_count = read_be16(data, &mut cursor)?;
    if track_count as usize > MAX_TRACKS {
      return Err(Error::TrackCount(track_count));
    }

    // The ticks per quarter note; bit 15 marks an SMPTE format division.
    let division = read_be16(data, &mut cursor)?;
    if division & 0x8000 != 0 {
      return Err(Error::SmpteDivision);
    }
    if division == 0 {
      return Err(Error::ZeroDivision);
    }

    let mut tracks = Vec::with_capacity(track_count as usize);
    for _ in 0..track_count {
      read_signature(data, &mut cursor, "MTrk")?;

      let length = read_be32(data, &mut cursor)? as usize;
      if length < 2 {
        return Err(Error::TrackLength);
      }

      let end = cursor.checked_add(length).ok_or(Error::Truncated)?;
      let chunk = data.get(cursor..end).ok_or(Error::Truncated)?;
      tracks.push(Track::new(chunk));
      cursor = end;
    }

    Ok(Self {
      format,
      division,
      tracks,
    })
  }

  pub fn format(&self) -> u16 {
    self.format
  }

  pub fn division(&self) -> u16 {
    self.division
  }

  pub fn track_count(&self) -> u16 {
    self.tracks.len() as u16
  }

  pub fn track(&self, index: usize) -> Option<&Track<'a>> {
    self.tracks.get(index)
  }

  pub fn tracks(&self) -> &[Track<'a>] {
    &self.tracks
  }
}

fn read_signature(data: &[u8], cursor: &mut usize, signature: &'static str) -> Result<(), Error> {
  let bytes = data
    .get(*cursor..*cursor + 4)
    .ok_or(Error::Truncated)?;

  if bytes != signature.as_bytes() {
    return Err(Error::Signature(signature));
  }

  *cursor += 4;
  Ok(())
}

fn read_be32(data: &[u8], cursor: &mut usize) -> Result<u32, Error> {
  let bytes = data
    .get(*cursor..*cursor + 4)
    .ok_or(Error::Truncated)?;

  *cursor += 4;
  Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn read_be16(data: &[u8], cursor: &mut usize) -> Result<u16, Error> {
  let bytes = data
    .get(*cursor..*cursor + 2)
    .ok_or(Error::Truncated)?;

  *cursor += 2;
  Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}
