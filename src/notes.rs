//! Note number helpers.
//!
//! The octave numbers -2 to 8 are not defined by MIDI itself, it's just what
//! some vendors of instruments and audio workstation software use. The
//! middle C (MIDI note 60) in this mapping is C(3).

pub const OCTAVE_OF_MIDDLE_C: i8 = 3;

pub const fn c(octave: i8) -> u8 {
  ((octave + OCTAVE_OF_MIDDLE_C - 1) * 12) as u8
}

pub const fn c_sharp(octave: i8) -> u8 {
  c(octave) + 1
}

pub const fn d(octave: i8) -> u8 {
  c(octave) + 2
}

pub const fn d_sharp(octave: i8) -> u8 {
  c(octave) + 3
}

pub const fn e(octave: i8) -> u8 {
  c(octave) + 4
}

pub const fn f(octave: i8) -> u8 {
  c(octave) + 5
}

pub const fn f_sharp(octave: i8) -> u8 {
  c(octave) + 6
}

pub const fn g(octave: i8) -> u8 {
  c(octave) + 7
}

pub const fn g_sharp(octave: i8) -> u8 {
  c(octave) + 8
}

pub const fn a(octave: i8) -> u8 {
  c(octave) + 9
}

pub const fn a_sharp(octave: i8) -> u8 {
  c(octave) + 10
}

pub const fn b(octave: i8) -> u8 {
  c(octave) + 11
}
