use std::time::Duration;

use log::debug;
use thiserror::Error;

use crate::codes::{Command, HouseCode};
use crate::frame::{EncodeError, Frame};
use crate::lines::ControlLines;
use crate::phy::{self, MIN_BIT_DELAY};

#[derive(Error, Debug)]
pub enum SendError<E> {
    #[error("could not encode command: {0}")]
    Frame(#[from] EncodeError),

    #[error("line write failed: {0}")]
    Line(E),
}

/// Plays the timed drive sequence for a frame over a [`ControlLines`]
/// backend.
///
/// The transmitter owns its backend exclusively, so two transmissions can
/// never interleave on the same lines without the caller deliberately
/// sharing it. `transmit` blocks for the whole sequence, a bit over a second
/// at the minimum bit delay, and cannot be cancelled once started; the
/// dongle has no notion of an aborted message.
pub struct Transmitter<L> {
    lines: L,
    bit_delay: Duration,
}

impl<L: ControlLines> Transmitter<L> {
    /// Takes ownership of the lines. Bit delays below the 0.5 ms protocol
    /// minimum are raised to it.
    pub fn new(lines: L, bit_delay: Duration) -> Self {
        Self {
            lines,
            bit_delay: bit_delay.max(MIN_BIT_DELAY),
        }
    }

    pub fn bit_delay(&self) -> Duration {
        self.bit_delay
    }

    /// Encodes one command and transmits it. An invalid command fails before
    /// any line is touched.
    pub fn send(
        &mut self,
        house: HouseCode,
        device: u8,
        command: Command,
    ) -> Result<(), SendError<L::Error>> {
        let frame = Frame::new(house, device, command)?;
        self.transmit(&frame).map_err(SendError::Line)
    }

    /// Drives the lines through the full sequence for `frame`.
    ///
    /// The protocol is one-way: `Ok` means every state change was written
    /// and held for its dwell, not that any receiver acted on the command.
    /// The first write failure aborts the message; resuming mid-sequence
    /// would put an undecodable signal on the lines.
    pub fn transmit(&mut self, frame: &Frame) -> Result<(), L::Error> {
        debug!(
            "transmitting frame {:04x} with bit delay {:?}",
            frame.0, self.bit_delay
        );

        for (state, hold) in phy::steps(frame, self.bit_delay) {
            let (rts, dtr) = state.levels();
            self.lines.set(rts, dtr)?;
            self.lines.wait(hold);
        }
        Ok(())
    }

    /// Releases the line backend.
    pub fn into_inner(self) -> L {
        self.lines
    }
}
