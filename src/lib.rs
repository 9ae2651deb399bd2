//! X10 command transmitter for the CM17A "FireCracker" serial dongle.
//!
//! The CM17A draws power and data from just the RTS and DTR control lines of
//! a serial port, so there is no UART framing involved and no MAX232 needed:
//! this crate bit-bangs the two lines through the dongle's four defined
//! states with fixed dwell times, and the dongle relays the decoded command
//! over X10 powerline signaling.
//!
//! Wiring: RTS → DB9 pin 7, DTR → DB9 pin 4, Gnd → DB9 pin 5.
//!
//! A message is 40 bits (a 16-bit header, the 16-bit data word and an 8-bit
//! footer), sent MSB-first with each bit as a data phase followed by a
//! standby phase of equal dwell. The protocol is strictly one-way: there is
//! no acknowledgement, and a successful transmission only means the full
//! timed sequence went out.
//!
//! ```no_run
//! use std::time::Duration;
//! use cm17a::{Command, HouseCode, SerialLines, Transmitter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let lines = SerialLines::open("/dev/ttyS0")?;
//! let mut tx = Transmitter::new(lines, Duration::from_millis(1));
//!
//! // Turn on lamp 3 in house code A. Blocks for the whole timed
//! // sequence, a bit over a second.
//! tx.send(HouseCode::A, 3, Command::On)?;
//! # Ok(()) }
//! ```

pub mod codes;
pub mod frame;
pub mod lines;
pub mod phy;
pub mod transmitter;

pub use codes::{Command, HouseCode};
pub use frame::{EncodeError, Frame};
pub use lines::{ControlLines, SerialLines};
pub use phy::{Level, LineState};
pub use transmitter::{SendError, Transmitter};
