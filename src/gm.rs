//! General MIDI maps.

/// Program Change numbers / instruments.
pub mod program {
  // Piano
  pub const ACOUSTIC_GRAND_PIANO: u8 = 0;
  pub const BRIGHT_ACOUSTIC_PIANO: u8 = 1;
  pub const ELECTRIC_GRAND_PIANO: u8 = 2;
  pub const HONKY_TONK_PIANO: u8 = 3;
  pub const ELECTRIC_PIANO_1: u8 = 4;
  pub const ELECTRIC_PIANO_2: u8 = 5;
  pub const HARPSICHORD: u8 = 6;
  pub const CLAVI: u8 = 7;

  // Chromatic Percussion
  pub const CELESTA: u8 = 8;
  pub const GLOCKENSPIEL: u8 = 9;
  pub const MUSIC_BOX: u8 = 10;
  pub const VIBRAPHONE: u8 = 11;
  pub const MARIMBA: u8 = 12;
  pub const XYLOPHONE: u8 = 13;
  pub const TUBULAR_BELLS: u8 = 14;
  pub const DULCIMER: u8 = 15;

  // Organ
  pub const DRAWBAR_ORGAN: u8 = 16;
  pub const PERCUSSIVE_ORGAN: u8 = 17;
  pub const ROCK_ORGAN: u8 = 18;
  pub const CHURCH_ORGAN: u8 = 19;
  pub const REED_ORGAN: u8 = 20;
  pub const ACCORDION: u8 = 21;
  pub const HARMONICA: u8 = 22;
  pub const TANGO_ACCORDION: u8 = 23;

  // Guitar
  pub const ACOUSTIC_GUITAR_NYLON: u8 = 24;
  pub const ACOUSTIC_GUITAR_STEEL: u8 = 25;
  pub const ELECTRIC_GUITAR_JAZZ: u8 = 26;
  pub const ELECTRIC_GUITAR_CLEAN: u8 = 27;
  pub const ELECTRIC_GUITAR_MUTED: u8 = 28;
  pub const OVERDRIVEN_GUITAR: u8 = 29;
  pub const DISTORTION_GUITAR: u8 = 30;
  pub const GUITAR_HARMONICS: u8 = 31;

  // Bass
  pub const ACOUSTIC_BASS: u8 = 32;
  pub const ELECTRIC_BASS_FINGER: u8 = 33;
  pub const ELECTRIC_BASS_PICK: u8 = 34;
  pub const FRETLESS_BASS: u8 = 35;
  pub const SLAP_BASS_1: u8 = 36;
  pub const SLAP_BASS_2: u8 = 37;
  pub const SYNTH_BASS_1: u8 = 38;
  pub const SYNTH_BASS_2: u8 = 39;

  // Strings
  pub const VIOLIN: u8 = 40;
  pub const VIOLA: u8 = 41;
  pub const CELLO: u8 = 42;
  pub const CONTRABASS: u8 = 43;
  pub const TREMOLO_STRINGS: u8 = 44;
  pub const PIZZICATO_STRINGS: u8 = 45;
  pub const ORCHESTRAL_HARP: u8 = 46;

  // Ensemble
  pub const TIMPANI: u8 = 47;
  pub const STRING_ENSEMBLE_1: u8 = 48;
  pub const STRING_ENSEMBLE_2: u8 = 49;
  pub const SYNTH_STRINGS_1: u8 = 50;
  pub const SYNTH_STRINGS_2: u8 = 51;
  pub const CHOIR_AAHS: u8 = 52;
  pub const VOICE_OOHS: u8 = 53;
  pub const SYNTH_VOICE: u8 = 54;
  pub const ORCHESTRA_HIT: u8 = 55;

  // Brass
  pub const TRUMPET: u8 = 56;
  pub const TROMBONE: u8 = 57;
  pub const TUBA: u8 = 58;
  pub const MUTED_TRUMPET: u8 = 59;
  pub const FRENCH_HORN: u8 = 60;
  pub const BRASS_SECTION: u8 = 61;
  pub const SYNTH_BRASS_1: u8 = 62;
  pub const SYNTH_BRASS_2: u8 = 63;

  // Reed
  pub const SOPRANO_SAX: u8 = 64;
  pub const ALTO_SAX: u8 = 65;
  pub const TENOR_SAX: u8 = 66;
  pub const BARITONE_SAX: u8 = 67;
  pub const OBOE: u8 = 68;
  pub const ENGLISH_HORN: u8 = 69;
  pub const BASSOON: u8 = 70;
  pub const CLARINET: u8 = 71;

  // Pipe
  pub const PICCOLO: u8 = 72;
  pub const FLUTE: u8 = 73;
  pub const RECORDER: u8 = 74;
  pub const PAN_FLUTE: u8 = 75;
  pub const BLOWN_BOTTLE: u8 = 76;
  pub const SHAKUHACHI: u8 = 77;
  pub const WHISTLE: u8 = 78;
  pub const OCARINA: u8 = 79;

  // Synth Lead
  pub const LEAD_1_SQUARE: u8 = 80;
  pub const LEAD_2_SAWTOOTH: u8 = 81;
  pub const LEAD_3_CALLIOPE: u8 = 82;
  pub const LEAD_4_CHIFF: u8 = 83;
  pub const LEAD_5_CHARANG: u8 = 84;
  pub const LEAD_6_VOICE: u8 = 85;
  pub const LEAD_7_FIFTHS: u8 = 86;
  pub const LEAD_8_BASS: u8 = 87;

  // Synth Pad
  pub const PAD_1_NEW_AGE: u8 = 88;
  pub const PAD_2_WARM: u8 = 89;
  pub const PAD_3_POLYSYNTH: u8 = 90;
  pub const PAD_4_CHOIR: u8 = 91;
  pub const PAD_5_BOWED: u8 = 92;
  pub const PAD_6_METALLIC: u8 = 93;
  pub const PAD_7_HALO: u8 = 94;
  pub const PAD_8_SWEEP: u8 = 95;

  // Synth Effects
  pub const FX_1_RAIN: u8 = 96;
  pub const FX_2_SOUNDTRACK: u8 = 97;
  pub const FX_3_CRYSTAL: u8 = 98;
  pub const FX_4_ATMOSPHERE: u8 = 99;
  pub const FX_5_BRIGHTNESS: u8 = 100;
  pub const FX_6_GOBLINS: u8 = 101;
  pub const FX_7_ECHOES: u8 = 102;
  pub const FX_8_SCI_FI: u8 = 103;

  // Ethnic Percussive
  pub const SITAR: u8 = 104;
  pub const BANJO: u8 = 105;
  pub const SHAMISEN: u8 = 106;
  pub const KOTO: u8 = 107;
  pub const KALIMBA: u8 = 108;
  pub const BAG_PIPE: u8 = 109;
  pub const FIDDLE: u8 = 110;
  pub const SHANAI: u8 = 111;

  // Percussive
  pub const TINKLE_BELL: u8 = 112;
  pub const AGOGO: u8 = 113;
  pub const STEEL_DRUMS: u8 = 114;
  pub const WOODBLOCK: u8 = 115;
  pub const TAIKO_DRUM: u8 = 116;
  pub const MELODIC_TOM: u8 = 117;
  pub const SYNTH_DRUM: u8 = 118;
  pub const REVERSE_CYMBAL: u8 = 119;

  // Sound Effects
  pub const GUITAR_FRET_NOISE: u8 = 120;
  pub const BREATH_NOISE: u8 = 121;
  pub const SEASHORE: u8 = 122;
  pub const BIRD_TWEET: u8 = 123;
  pub const TELEPHONE_RING: u8 = 124;
  pub const HELICOPTER: u8 = 125;
  pub const APPLAUSE: u8 = 126;
  pub const GUNSHOT: u8 = 127;
}

/// Percussion mapping, traditionally on MIDI channel 10.
pub mod percussion {
  pub const HIGH_Q: u8 = 27;
  pub const SLAP: u8 = 28;
  pub const SCRATCH_PUSH: u8 = 29;
  pub const SCRATCH_PULL: u8 = 30;
  pub const STICKS: u8 = 31;
  pub const SQUARE_CLICK: u8 = 32;
  pub const METRONOME_CLICK: u8 = 33;
  pub const METRONOME_BELL: u8 = 34;
  pub const ACOUSTIC_BASS_DRUM: u8 = 35;
  pub const BASS_DRUM_1: u8 = 36;
  pub const SIDE_STICK: u8 = 37;
  pub const ACOUSTIC_SNARE: u8 = 38;
  pub const HAND_CLAP: u8 = 39;
  pub const ELECTRIC_SNARE: u8 = 40;
  pub const LOW_FLOOR_TOM: u8 = 41;
  pub const CLOSED_HI_HAT: u8 = 42;
  pub const HIGH_FLOOR_TOM: u8 = 43;
  pub const PEDAL_HI_HAT: u8 = 44;
  pub const LOW_TOM: u8 = 45;
  pub const OPEN_HI_HAT: u8 = 46;
  pub const LOW_MID_TOM: u8 = 47;
  pub const HI_MID_TOM: u8 = 48;
  pub const CRASH_CYMBAL_1: u8 = 49;
  pub const HIGH_TOM: u8 = 50;
  pub const RIDE_CYMBAL_1: u8 = 51;
  pub const CHINESE_CYMBAL: u8 = 52;
  pub const RIDE_BELL: u8 = 53;
  pub const TAMBOURINE: u8 = 54;
  pub const SPLASH_CYMBAL: u8 = 55;
  pub const COWBELL: u8 = 56;
  pub const CRASH_CYMBAL_2: u8 = 57;
  pub const VIBRASLAP: u8 = 58;
  pub const RIDE_CYMBAL_2: u8 = 59;
  pub const HI_BONGO: u8 = 60;
  pub const LOW_BONGO: u8 = 61;
  pub const MUTE_HI_CONGA: u8 = 62;
  pub const OPEN_HI_CONGA: u8 = 63;
  pub const LOW_CONGA: u8 = 64;
  pub const HIGH_TIMBALE: u8 = 65;
  pub const LOW_TIMBALE: u8 = 66;
  pub const HIGH_AGOGO: u8 = 67;
  pub const LOW_AGOGO: u8 = 68;
  pub const CABASA: u8 = 69;
  pub const MARACAS: u8 = 70;
  pub const SHORT_WHISTLE: u8 = 71;
  pub const LONG_WHISTLE: u8 = 72;
  pub const SHORT_GUIRO: u8 = 73;
  pub const LONG_GUIRO: u8 = 74;
  pub const CLAVES: u8 = 75;
  pub const HI_WOOD_BLOCK: u8 = 76;
  pub const LOW_WOOD_BLOCK: u8 = 77;
  pub const MUTE_CUICA: u8 = 78;
  pub const OPEN_CUICA: u8 = 79;
  pub const MUTE_TRIANGLE: u8 = 80;
  pub const OPEN_TRIANGLE: u8 = 81;
  pub const SHAKER: u8 = 82;
  pub const JINGLE_BELL: u8 = 83;
  pub const BELL_TREE: u8 = 84;
  pub const CASTANETS: u8 = 85;
  pub const MUTE_SURDO: u8 = 86;
  pub const OPEN_SURDO: u8 = 87;
}
