//! Transport-independent MIDI 1.0: the USB-MIDI 4-byte packet codec, a
//! serial byte-stream parser, a port layer with System Exclusive
//! buffering/streaming and statistics, a 14 bit controller tracker, the
//! beat clock, and a Standard MIDI File format 0/1 reader and player.

pub mod cc;
pub mod clock;
pub mod event;
pub mod gm;
pub mod notes;
pub mod packet;
pub mod port;
pub mod rpn;
pub mod serial;
pub mod smf;
pub mod transport;

pub use cc::HighResolution;
pub use clock::Clock;
pub use event::{EventHandler, PortEvent};
pub use packet::{CodeIndex, Packet, Status};
pub use port::{Handler, Port, PortConfig, Statistics, SysExError, SysExPump};
pub use transport::{QueueTransport, Transport};
