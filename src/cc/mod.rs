//! Control Change numbers and Channel Mode messages.

pub mod high_resolution;

pub use high_resolution::HighResolution;

// MSB controller data.
pub const BANK_SELECT: u8 = 0;
pub const MODULATION_WHEEL: u8 = 1;
pub const BREATH_CONTROLLER: u8 = 2;
pub const CONTROLLER_3: u8 = 3;
pub const FOOT_CONTROLLER: u8 = 4;
pub const PORTAMENTO_TIME: u8 = 5;
/// RPN, NRPN value.
pub const DATA_ENTRY: u8 = 6;
pub const CHANNEL_VOLUME: u8 = 7;
pub const BALANCE: u8 = 8;
pub const CONTROLLER_9: u8 = 9;
pub const PAN: u8 = 10;
pub const EXPRESSION: u8 = 11;
pub const EFFECT_CONTROL_1: u8 = 12;
pub const EFFECT_CONTROL_2: u8 = 13;
pub const CONTROLLER_14: u8 = 14;
pub const CONTROLLER_15: u8 = 15;
pub const GENERAL_PURPOSE_1: u8 = 16;
pub const GENERAL_PURPOSE_2: u8 = 17;
pub const GENERAL_PURPOSE_3: u8 = 18;
pub const GENERAL_PURPOSE_4: u8 = 19;
pub const CONTROLLER_20: u8 = 20;
pub const CONTROLLER_21: u8 = 21;
pub const CONTROLLER_22: u8 = 22;
pub const CONTROLLER_23: u8 = 23;
pub const CONTROLLER_24: u8 = 24;
pub const CONTROLLER_25: u8 = 25;
pub const CONTROLLER_26: u8 = 26;
pub const CONTROLLER_27: u8 = 27;
pub const CONTROLLER_28: u8 = 28;
pub const CONTROLLER_29: u8 = 29;
pub const CONTROLLER_30: u8 = 30;
pub const CONTROLLER_31: u8 = 31;

/// LSB offset for controllers 0 to 31.
pub const CONTROLLER_LSB: u8 = 32;
pub const BANK_SELECT_LSB: u8 = CONTROLLER_LSB + BANK_SELECT;
pub const MODULATION_WHEEL_LSB: u8 = CONTROLLER_LSB + MODULATION_WHEEL;
pub const BREATH_CONTROLLER_LSB: u8 = CONTROLLER_LSB + BREATH_CONTROLLER;
pub const CONTROLLER_3_LSB: u8 = CONTROLLER_LSB + CONTROLLER_3;
pub const FOOT_CONTROLLER_LSB: u8 = CONTROLLER_LSB + FOOT_CONTROLLER;
pub const PORTAMENTO_TIME_LSB: u8 = CONTROLLER_LSB + PORTAMENTO_TIME;
pub const DATA_ENTRY_LSB: u8 = CONTROLLER_LSB + DATA_ENTRY;
pub const CHANNEL_VOLUME_LSB: u8 = CONTROLLER_LSB + CHANNEL_VOLUME;
pub const BALANCE_LSB: u8 = CONTROLLER_LSB + BALANCE;
pub const CONTROLLER_9_LSB: u8 = CONTROLLER_LSB + CONTROLLER_9;
pub const PAN_LSB: u8 = CONTROLLER_LSB + PAN;
pub const EXPRESSION_LSB: u8 = CONTROLLER_LSB + EXPRESSION;
pub const EFFECT_CONTROL_1_LSB: u8 = CONTROLLER_LSB + EFFECT_CONTROL_1;
pub const EFFECT_CONTROL_2_LSB: u8 = CONTROLLER_LSB + EFFECT_CONTROL_2;
pub const CONTROLLER_14_LSB: u8 = CONTROLLER_LSB + CONTROLLER_14;
pub const CONTROLLER_15_LSB: u8 = CONTROLLER_LSB + CONTROLLER_15;
pub const GENERAL_PURPOSE_1_LSB: u8 = CONTROLLER_LSB + GENERAL_PURPOSE_1;
pub const GENERAL_PURPOSE_2_LSB: u8 = CONTROLLER_LSB + GENERAL_PURPOSE_2;
pub const GENERAL_PURPOSE_3_LSB: u8 = CONTROLLER_LSB + GENERAL_PURPOSE_3;
pub const GENERAL_PURPOSE_4_LSB: u8 = CONTROLLER_LSB + GENERAL_PURPOSE_4;
pub const CONTROLLER_20_LSB: u8 = CONTROLLER_LSB + CONTROLLER_20;
pub const CONTROLLER_21_LSB: u8 = CONTROLLER_LSB + CONTROLLER_21;
pub const CONTROLLER_22_LSB: u8 = CONTROLLER_LSB + CONTROLLER_22;
pub const CONTROLLER_23_LSB: u8 = CONTROLLER_LSB + CONTROLLER_23;
pub const CONTROLLER_24_LSB: u8 = CONTROLLER_LSB + CONTROLLER_24;
pub const CONTROLLER_25_LSB: u8 = CONTROLLER_LSB + CONTROLLER_25;
pub const CONTROLLER_26_LSB: u8 = CONTROLLER_LSB + CONTROLLER_26;
pub const CONTROLLER_27_LSB: u8 = CONTROLLER_LSB + CONTROLLER_27;
pub const CONTROLLER_28_LSB: u8 = CONTROLLER_LSB + CONTROLLER_28;
pub const CONTROLLER_29_LSB: u8 = CONTROLLER_LSB + CONTROLLER_29;
pub const CONTROLLER_30_LSB: u8 = CONTROLLER_LSB + CONTROLLER_30;
pub const CONTROLLER_31_LSB: u8 = CONTROLLER_LSB + CONTROLLER_31;

// Single-byte controllers.
pub const SUSTAIN_PEDAL: u8 = 64;
pub const PORTAMENTO: u8 = 65;
pub const SOSTENUTO: u8 = 66;
pub const SOFT_PEDAL: u8 = 67;
pub const LEGATO_PEDAL: u8 = 68;
pub const HOLD_2: u8 = 69;
/// Sound Variation.
pub const SOUND_CONTROLLER_1: u8 = 70;
/// Timbre / Harmonic Intensity.
pub const SOUND_CONTROLLER_2: u8 = 71;
/// Release Time.
pub const SOUND_CONTROLLER_3: u8 = 72;
/// Attack Time.
pub const SOUND_CONTROLLER_4: u8 = 73;
/// Brightness.
pub const SOUND_CONTROLLER_5: u8 = 74;
/// Decay Time.
pub const SOUND_CONTROLLER_6: u8 = 75;
/// Vibrato Rate.
pub const SOUND_CONTROLLER_7: u8 = 76;
/// Vibrato Depth.
pub const SOUND_CONTROLLER_8: u8 = 77;
/// Vibrato Delay.
pub const SOUND_CONTROLLER_9: u8 = 78;
pub const SOUND_CONTROLLER_10: u8 = 79;
pub const GENERAL_PURPOSE_5: u8 = 80;
pub const GENERAL_PURPOSE_6: u8 = 81;
pub const GENERAL_PURPOSE_7: u8 = 82;
pub const GENERAL_PURPOSE_8: u8 = 83;
pub const PORTAMENTO_CONTROL: u8 = 84;
pub const CONTROLLER_85: u8 = 85;
pub const CONTROLLER_86: u8 = 86;
pub const CONTROLLER_87: u8 = 87;
pub const VELOCITY_PREFIX: u8 = 88;
pub const CONTROLLER_89: u8 = 89;
pub const CONTROLLER_90: u8 = 90;
/// Reverb Send.
pub const EFFECTS_1: u8 = 91;
/// Tremolo Depth.
pub const EFFECTS_2: u8 = 92;
/// Chorus Send.
pub const EFFECTS_3: u8 = 93;
/// Celeste Depth.
pub const EFFECTS_4: u8 = 94;
/// Phaser Depth.
pub const EFFECTS_5: u8 = 95;

// Non-registered / Registered Parameter Numbers.
/// Step == 1, the value is ignored (RP-018).
pub const DATA_INCREMENT: u8 = 96;
pub const DATA_DECREMENT: u8 = 97;
pub const NRPN_LSB: u8 = 98;
pub const NRPN_MSB: u8 = 99;
pub const RPN_LSB: u8 = 100;
pub const RPN_MSB: u8 = 101;

pub const CONTROLLER_102: u8 = 102;
pub const CONTROLLER_103: u8 = 103;
pub const CONTROLLER_104: u8 = 104;
pub const CONTROLLER_105: u8 = 105;
pub const CONTROLLER_106: u8 = 106;
pub const CONTROLLER_107: u8 = 107;
pub const CONTROLLER_108: u8 = 108;
pub const CONTROLLER_109: u8 = 109;
pub const CONTROLLER_110: u8 = 110;
pub const CONTROLLER_111: u8 = 111;
pub const CONTROLLER_112: u8 = 112;
pub const CONTROLLER_113: u8 = 113;
pub const CONTROLLER_114: u8 = 114;
pub const CONTROLLER_115: u8 = 115;
pub const CONTROLLER_116: u8 = 116;
pub const CONTROLLER_117: u8 = 117;
pub const CONTROLLER_118: u8 = 118;
pub const CONTROLLER_119: u8 = 119;

// Channel Mode messages.
pub const ALL_SOUND_OFF: u8 = 120;
pub const RESET_ALL_CONTROLLERS: u8 = 121;
pub const LOCAL_CONTROL: u8 = 122;
pub const ALL_NOTES_OFF: u8 = 123;
pub const OMNI_MODE_OFF: u8 = 124;
pub const OMNI_MODE_ON: u8 = 125;
pub const MONO_MODE_ON: u8 = 126;
pub const POLY_MODE_ON: u8 = 127;
